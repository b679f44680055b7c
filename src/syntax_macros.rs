//! Declarative subtype declarations.

// =============================================================================
// is_a! - declare IsA relations without the derive
// =============================================================================

/// Declare that a concrete type is a subtype of one or more ancestors.
///
/// Every ancestor must be a trait object the type implements (or the type
/// itself). Ancestor traits need `Object` as a supertrait so that
/// `downcast` can identify values behind them.
///
/// # Example
///
/// ```ignore
/// trait Animal: Object { fn name(&self) -> &str; }
/// trait Dog: Animal {}
///
/// struct Labrador { name: String }
/// impl Animal for Labrador { fn name(&self) -> &str { &self.name } }
/// impl Dog for Labrador {}
///
/// is_a!(Labrador: dyn Animal, dyn Dog);
/// ```
#[macro_export]
macro_rules! is_a {
    ($sub:ty : $($ancestor:ty),+ $(,)?) => {
        $(
            impl $crate::primitives::IsA<$ancestor> for $sub {
                #[inline]
                fn upcast(
                    this: $crate::__private::Rc<Self>,
                ) -> $crate::__private::Rc<$ancestor> {
                    this
                }

                #[inline]
                fn upcast_ref(&self) -> &$ancestor {
                    self
                }

                #[inline]
                fn downcast(
                    value: &$crate::__private::Rc<$ancestor>,
                ) -> ::core::option::Option<$crate::__private::Rc<Self>> {
                    $crate::primitives::object::downcast_rc::<$ancestor, Self>(value)
                }
            }
        )+
    };
}
