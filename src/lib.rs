//! Exclass
//!
//! A named, append-only list of integers with a JSON snapshot format.
//! See `exclass-model` for the type itself and `exclass-cli` for the binary.

pub use exclass_model::{ExampleClass, ModelError};
