// Internal macros used by the tola-covariant crate itself

pub mod levels;
