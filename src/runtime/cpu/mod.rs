//! CPU runtime implementation
//!
//! The CPU runtime is the reference implementation of every algorithm
//! contract in [`crate::algorithm`]. Independent batch elements are spread over
//! a rayon pool when the `rayon` feature is enabled; each matrix pair is always
//! solved on a single thread.
//!
//! # Kernels
//!
//! Kernels operate on dense row-major slices and are generic over
//! [`LinalgElement`], the scalar abstraction shared by real and complex types.

mod client;
pub mod householder;
mod linalg;

pub use client::{CpuClient, ParallelismConfig};
pub use householder::LinalgElement;
pub use linalg::{MAX_QL_ITERATIONS, generalized_eigh_into, generalized_eigh_slices};
