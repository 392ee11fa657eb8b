//! Generic traits over raw FFI functions for floats, doubles, complex
//! numbers, and double complex numbers.
//!
//! Every trait method maps to exactly one vendor symbol per implementing
//! scalar type; the functions are still very unsafe and do nothing except
//! dispatch to the correct FFI function. Complex pointers are reinterpreted
//! into the vendor's paired-float layout via `.cast()`, backed by the layout
//! assertions in the crate root.

#![allow(clippy::missing_safety_doc)]

mod level1;
mod level2;
mod level3;

pub use level1::*;
pub use level2::*;
pub use level3::*;
