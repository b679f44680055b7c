// Common utilities shared between internal and user-facing macros
//
// This module contains:
// - parse_utils: `#[is_a(..)]` attribute parsing

mod parse_utils;

pub use parse_utils::*;
