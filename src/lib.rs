//! # geneig
//!
//! **Batched generalized symmetric/Hermitian-definite eigensolver for Rust.**
//!
//! geneig solves `A @ x = λ B @ x` for batches of matrix pairs where `A` is
//! symmetric (Hermitian) and `B` is symmetric (Hermitian) positive-definite,
//! returning ascending real eigenvalues and, on request, B-orthonormal
//! eigenvectors.
//!
//! ## Features
//!
//! - **Element types**: f32, f64, Complex64, Complex128 through one generic kernel
//! - **Batching**: inputs of shape `[..., n, n]`, one independent solve per pair
//! - **Shape contract**: validation and output shapes without touching data
//! - **Fail-fast**: any failing pair fails the invocation with its batch index
//! - **Parallel**: pairs spread over a rayon pool, cooperative cancellation
//!
//! ## Quick Start
//!
//! ```rust
//! use geneig::prelude::*;
//!
//! let client = CpuClient::new();
//! let a = Tensor::from_slice(&[2.0f64, 0.0, 0.0, 3.0], &[2, 2]);
//! let b = Tensor::from_slice(&[1.0f64, 0.0, 0.0, 1.0], &[2, 2]);
//!
//! let eig = client.generalized_eigh(&a, &b, EigenMode::ValuesAndVectors)?;
//! assert_eq!(eig.eigenvalues.to_vec::<f64>(), vec![2.0, 3.0]);
//! # Ok::<(), geneig::error::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `rayon` (default): solve batch elements on multiple threads

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod algorithm;
pub mod dtype;
pub mod error;
pub mod runtime;
pub mod tensor;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::algorithm::linalg::{
        EigenMode, GeneralizedEigenAlgorithms, GeneralizedEigenDecomposition,
        GeneralizedSelfAdjointEig,
    };
    pub use crate::dtype::{Complex64, Complex128, DType};
    pub use crate::error::{Error, NumericalFailureKind, Result};
    pub use crate::runtime::cpu::{CpuClient, ParallelismConfig};
    pub use crate::tensor::{Shape, Tensor};
}
