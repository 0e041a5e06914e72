//! Algorithm contracts for runtime backends
//!
//! Every algorithm is defined as a trait first, then implemented per backend,
//! so that all backends run the same mathematical steps and agree within
//! floating-point tolerance.
//!
//! # Available Algorithm Contracts
//!
//! - [`linalg::GeneralizedEigenAlgorithms`] - Cholesky-reduced generalized
//!   symmetric/Hermitian-definite eigendecomposition

pub mod linalg;
