//! Tensor types
//!
//! This module provides the dense host-side `Tensor` exchanged with the
//! solver, together with its `Shape` and tagged `Storage`.

mod core;
mod shape;
mod storage;

pub use core::Tensor;
pub use shape::Shape;
pub use storage::Storage;
