//! Host-facing operation object with its mode bound at construction

use super::{
    EigenMode, GeneralizedEigenAlgorithms, generalized_eig_output_shapes,
    validate_input_matrix_shapes,
};
use crate::error::{Error, Result};
use crate::tensor::{Shape, Tensor};

/// Generalized self-adjoint eigendecomposition operation.
///
/// The [`EigenMode`] is chosen once, when the operation is built, and applies
/// to every invocation. Host adapters bind these three entry points to their
/// own dispatch: shape validation, shape inference, and computation.
///
/// ```
/// use geneig::prelude::*;
///
/// let op = GeneralizedSelfAdjointEig::new(true);
/// let shapes = op.output_shapes(&[&[4, 3, 3], &[4, 3, 3]]).unwrap();
/// assert_eq!(shapes, vec![Shape::from([4, 3]), Shape::from([4, 3, 3])]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneralizedSelfAdjointEig {
    mode: EigenMode,
}

impl GeneralizedSelfAdjointEig {
    /// Build the operation from a `compute_v` flag
    pub const fn new(compute_v: bool) -> Self {
        Self::with_mode(EigenMode::from_compute_v(compute_v))
    }

    /// Build the operation from an explicit mode
    pub const fn with_mode(mode: EigenMode) -> Self {
        Self { mode }
    }

    /// The mode every invocation of this operation uses
    pub const fn mode(&self) -> EigenMode {
        self.mode
    }

    /// Check input shapes without looking at data; returns the matrix order
    pub fn validate_input_shapes(&self, shapes: &[&[usize]]) -> Result<usize> {
        validate_input_matrix_shapes(shapes)
    }

    /// Output shapes implied by the input shapes
    pub fn output_shapes(&self, shapes: &[&[usize]]) -> Result<Vec<Shape>> {
        generalized_eig_output_shapes(shapes, self.mode())
    }

    /// Run the decomposition on `inputs = [a, b]`.
    ///
    /// Returns `[eigenvalues]` or `[eigenvalues, eigenvectors]` depending on
    /// the mode. On error no output is returned.
    pub fn compute<C>(&self, client: &C, inputs: &[&Tensor]) -> Result<Vec<Tensor>>
    where
        C: GeneralizedEigenAlgorithms + ?Sized,
    {
        let [a, b] = inputs else {
            return Err(Error::invalid_argument(
                "inputs",
                format!("Expected two input matrices, got {}.", inputs.len()),
            ));
        };
        let result = client.generalized_eigh(a, b, self.mode())?;
        Ok(result.into_outputs())
    }
}
