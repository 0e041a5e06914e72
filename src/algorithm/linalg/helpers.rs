//! Helper functions for linear algebra operations
//!
//! Shape validation shared by every backend. These run before any numerical
//! work and only ever produce [`Error::InvalidArgument`].

use super::EigenMode;
use crate::error::{Error, Result};
use crate::tensor::{Shape, Tensor};

/// Validate matrix is at least 2D and return its trailing `(rows, cols)`
pub fn validate_matrix_2d(shape: &[usize]) -> Result<(usize, usize)> {
    match shape {
        [.., m, n] => Ok((*m, *n)),
        _ => Err(Error::invalid_argument(
            "shape",
            format!(
                "Expected a matrix of rank >= 2, got {}D tensor with shape {:?}",
                shape.len(),
                shape
            ),
        )),
    }
}

/// Validate matrix is square and return its order `n`
pub fn validate_square_matrix(shape: &[usize]) -> Result<usize> {
    let (m, n) = validate_matrix_2d(shape)?;
    if m != n {
        return Err(Error::invalid_argument(
            "shape",
            "Inputs must be square matrices.",
        ));
    }
    Ok(n)
}

/// Validate the input shapes of one generalized eigenproblem invocation.
///
/// Checks, in order:
/// 1. exactly two inputs (`a` and `b`) are present
/// 2. both have rank >= 2
/// 3. both shapes are identical, batch dimensions included
/// 4. the shared matrix dimensions are square
///
/// Returns the matrix order `n`.
pub fn validate_input_matrix_shapes(shapes: &[&[usize]]) -> Result<usize> {
    let [a, b] = shapes else {
        return Err(Error::invalid_argument(
            "inputs",
            format!("Expected two input matrices, got {}.", shapes.len()),
        ));
    };
    for (i, (name, shape)) in [("a", a), ("b", b)].into_iter().enumerate() {
        if shape.len() < 2 {
            return Err(Error::invalid_argument(
                name,
                format!("Input {i} must have rank >= 2, got shape {shape:?}"),
            ));
        }
    }
    if a != b {
        return Err(Error::invalid_argument(
            "b",
            format!("Inputs (a and b) must have the same shape. Got {a:?} and {b:?}."),
        ));
    }
    validate_square_matrix(a)
}

/// Validate a pair of tensors: shapes as in [`validate_input_matrix_shapes`],
/// plus matching dtypes.
pub fn validate_matrix_pair(a: &Tensor, b: &Tensor) -> Result<usize> {
    let n = validate_input_matrix_shapes(&[a.shape(), b.shape()])?;
    if a.dtype() != b.dtype() {
        return Err(Error::invalid_argument(
            "b",
            format!(
                "Inputs (a and b) must have the same dtype. Got {} and {}.",
                a.dtype(),
                b.dtype()
            ),
        ));
    }
    Ok(n)
}

/// Output shapes for the given input shapes, without touching any data.
///
/// For inputs of shape `[..., n, n]`:
/// - `ValuesOnly`: `[[..., n]]`
/// - `ValuesAndVectors`: `[[..., n], [..., n, n]]`
pub fn generalized_eig_output_shapes(shapes: &[&[usize]], mode: EigenMode) -> Result<Vec<Shape>> {
    let n = validate_input_matrix_shapes(shapes)?;
    let batch = &shapes[0][..shapes[0].len() - 2];

    let mut out = Vec::with_capacity(mode.num_outputs());
    out.push(Shape::with_batch(batch, &[n]));
    if mode.computes_vectors() {
        out.push(Shape::with_batch(batch, &[n, n]));
    }
    Ok(out)
}
