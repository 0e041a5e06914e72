//! Generalized eigenproblem contracts for backend consistency
//!
//! This module defines the backend-independent half of the solver: shape
//! validation, output shape inference, result types, and the algorithm trait
//! every backend implements.
//!
//! # Module Structure
//!
//! - `decompositions`: Result types and [`EigenMode`]
//! - `helpers`: Shape validation and output shape inference
//! - `traits`: [`GeneralizedEigenAlgorithms`]
//! - `generalized_eig`: [`GeneralizedSelfAdjointEig`] operation object

pub mod decompositions;
pub mod generalized_eig;
pub mod helpers;
pub mod traits;

pub use decompositions::*;
pub use generalized_eig::GeneralizedSelfAdjointEig;
pub use helpers::*;
pub use traits::*;
