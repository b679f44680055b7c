//! Chain construction macro and fixed-depth aliases.

/// Build a type chain from the most general type down to the bottom type.
///
/// ```ignore
/// type Pets = chain![dyn Animal, dyn Dog, Labrador];
/// ```
#[macro_export]
macro_rules! chain {
    ($bottom:ty $(,)?) => {
        $crate::chain::Last<$bottom>
    };
    ($head:ty, $($rest:ty),+ $(,)?) => {
        $crate::chain::Cons<$head, $crate::chain![$($rest),+]>
    };
}

macro_rules! define_aliases {
    ($($depth:literal => [$($level:ident),+];)*) => {
        paste::paste! {
            $(
                #[doc = "Chain of " $depth " levels, most general first."]
                pub type [<Chain $depth>]<$($level),+> = $crate::chain![$($level),+];

                #[doc = "Covariant list over a chain of " $depth " levels."]
                pub type [<CovariantList $depth>]<$($level),+> =
                    $crate::list::CovariantList<[<Chain $depth>]<$($level),+>>;
            )*
        }
    };
}

define_aliases! {
    2 => [T1, T2];
    3 => [T1, T2, T3];
    4 => [T1, T2, T3, T4];
    5 => [T1, T2, T3, T4, T5];
}
