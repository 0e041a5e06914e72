//! Error types for geneig

use thiserror::Error;

/// Result type alias using geneig's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while validating or solving generalized eigenproblems
#[derive(Error, Debug)]
pub enum Error {
    /// Structural contract violated (input count, rank, shape, dtype).
    ///
    /// Always detected before any numerical work starts.
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// The argument name
        arg: &'static str,
        /// Reason for invalidity
        reason: String,
    },

    /// The decomposition itself failed for a (structurally valid) matrix pair
    #[error(
        "generalized eigendecomposition was not successful; input may not be valid ({kind}){}",
        batch_suffix(.batch_index)
    )]
    NumericalFailure {
        /// What went wrong inside the solver
        kind: NumericalFailureKind,
        /// Index of the failing pair within the batch, when solved as part of one
        batch_index: Option<usize>,
    },

    /// The invocation was cancelled between two batch elements
    #[error("generalized eigendecomposition cancelled before batch element {batch_index}")]
    Cancelled {
        /// First pair that observed the cancellation and was not solved
        batch_index: usize,
    },

    /// Generic internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Reason a [`Error::NumericalFailure`] was raised.
///
/// Callers only need to know that the invocation failed; the kind is kept for
/// diagnostics.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericalFailureKind {
    /// Cholesky factorization of B met a pivot that is not strictly positive
    #[error("b is not positive-definite: non-positive pivot at column {pivot}")]
    NotPositiveDefinite {
        /// Column at which the factorization broke down
        pivot: usize,
    },

    /// Implicit QL iteration did not converge
    #[error("eigenvalue {index} did not converge after {iterations} iterations")]
    NoConvergence {
        /// Eigenvalue index whose iteration stalled
        index: usize,
        /// Iterations spent on it
        iterations: usize,
    },

    /// A referenced entry of a or b is NaN or infinite
    #[error("input contains non-finite values")]
    NonFiniteInput,
}

fn batch_suffix(batch_index: &Option<usize>) -> String {
    match batch_index {
        Some(index) => format!(" at batch element {index}"),
        None => String::new(),
    }
}

impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument(arg: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            arg,
            reason: reason.into(),
        }
    }

    /// Create a numerical failure that is not yet tied to a batch element
    pub fn numerical(kind: NumericalFailureKind) -> Self {
        Self::NumericalFailure {
            kind,
            batch_index: None,
        }
    }

    /// Attach the failing batch element index to a numerical failure.
    ///
    /// Other variants are returned unchanged.
    pub fn at_batch_index(self, index: usize) -> Self {
        match self {
            Self::NumericalFailure { kind, .. } => Self::NumericalFailure {
                kind,
                batch_index: Some(index),
            },
            other => other,
        }
    }

    /// Returns true for structural (shape / dtype / count) errors
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// Returns true when the solver itself failed
    pub fn is_numerical_failure(&self) -> bool {
        matches!(self, Self::NumericalFailure { .. })
    }

    /// The failure kind of a numerical failure
    pub fn numerical_failure_kind(&self) -> Option<NumericalFailureKind> {
        match self {
            Self::NumericalFailure { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}
