//! Core data structures and traits for coosum (pure Rust)

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod coo;
pub mod scalar;

pub use coo::{Cell, CooMatrix, Compressed};
pub use scalar::{Scalar, F32_EPS, F64_EPS};
