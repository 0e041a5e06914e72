//! Shared Householder and permutation utilities for the CPU kernels
//!
//! This module contains the scalar abstraction every kernel is written against
//! ([`LinalgElement`]), the complex-aware elementary reflector used by the
//! tridiagonalization, and the small matrix helpers (identity, argsort,
//! column permutation) shared by the eigensolver stages.
//!
//! All matrices are dense row-major `[rows × cols]` slices.

use crate::dtype::{Complex64, Complex128, Element};
use crate::tensor::Storage;
use num_traits::{Float, One, Zero};
use std::fmt::Debug;
use std::ops::Neg;

/// Trait for elements that support the Hermitian eigensolver.
///
/// Real types are their own `Real` type and conjugation is the identity, so a
/// single implementation of every kernel covers symmetric (real) and
/// Hermitian (complex) inputs.
pub trait LinalgElement: Element + Neg<Output = Self> {
    /// Real type with the same working precision (eigenvalue type)
    type Real: Float + Debug + Send + Sync + 'static;

    /// Complex conjugate (identity for real types)
    fn conj(self) -> Self;
    /// Real part
    fn re(self) -> Self::Real;
    /// Embed a real number
    fn from_real(re: Self::Real) -> Self;
    /// Multiply by a real factor
    fn scale(self, factor: Self::Real) -> Self;
    /// Squared magnitude |x|²
    fn abs_sq(self) -> Self::Real;
    /// Magnitude |x|, without intermediate overflow
    fn abs_val(self) -> Self::Real;
    /// True when every component is finite
    fn is_finite_val(self) -> bool;
    /// Wrap a buffer of real values in tensor storage
    fn real_into_storage(values: Vec<Self::Real>) -> Storage;
}

macro_rules! impl_linalg_real {
    ($ty:ty) => {
        impl LinalgElement for $ty {
            type Real = $ty;

            #[inline]
            fn conj(self) -> Self {
                self
            }
            #[inline]
            fn re(self) -> Self::Real {
                self
            }
            #[inline]
            fn from_real(re: Self::Real) -> Self {
                re
            }
            #[inline]
            fn scale(self, factor: Self::Real) -> Self {
                self * factor
            }
            #[inline]
            fn abs_sq(self) -> Self::Real {
                self * self
            }
            #[inline]
            fn abs_val(self) -> Self::Real {
                <$ty>::abs(self)
            }
            #[inline]
            fn is_finite_val(self) -> bool {
                <$ty>::is_finite(self)
            }
            fn real_into_storage(values: Vec<Self::Real>) -> Storage {
                <$ty as Element>::into_storage(values)
            }
        }
    };
}

macro_rules! impl_linalg_complex {
    ($ty:ty, $real:ty) => {
        impl LinalgElement for $ty {
            type Real = $real;

            #[inline]
            fn conj(self) -> Self {
                <$ty>::conj(self)
            }
            #[inline]
            fn re(self) -> Self::Real {
                self.re
            }
            #[inline]
            fn from_real(re: Self::Real) -> Self {
                <$ty>::new(re, 0.0)
            }
            #[inline]
            fn scale(self, factor: Self::Real) -> Self {
                <$ty>::scale(self, factor)
            }
            #[inline]
            fn abs_sq(self) -> Self::Real {
                self.magnitude_squared()
            }
            #[inline]
            fn abs_val(self) -> Self::Real {
                self.magnitude()
            }
            #[inline]
            fn is_finite_val(self) -> bool {
                <$ty>::is_finite(self)
            }
            fn real_into_storage(values: Vec<Self::Real>) -> Storage {
                <$real as Element>::into_storage(values)
            }
        }
    };
}

impl_linalg_real!(f32);
impl_linalg_real!(f64);
impl_linalg_complex!(Complex64, f32);
impl_linalg_complex!(Complex128, f64);

/// Elementary reflector `H = I - tau * v * v^H` with `v[0] = 1`.
///
/// Chosen so that `H^H * x = [beta, 0, ..., 0]` with `beta` real.
#[derive(Debug, Clone, Copy)]
pub struct Reflector<T: LinalgElement> {
    /// Scalar factor; zero means `H = I`
    pub tau: T,
    /// The value `x` is mapped onto
    pub beta: T::Real,
}

impl<T: LinalgElement> Reflector<T> {
    /// Compute the reflector annihilating `x[1..]`.
    ///
    /// On return `x[1..]` holds `v[1..]`; `x[0]` is left untouched.
    ///
    /// # Algorithm
    /// ```text
    /// alpha = x[0]
    /// beta  = -sign(re(alpha)) * ||x||
    /// tau   = (beta - alpha) / beta
    /// v     = x / (alpha - beta),  v[0] = 1
    /// ```
    /// When `x[1..]` is zero and `alpha` is already real, `tau = 0`.
    pub fn compute(x: &mut [T]) -> Self {
        let Some((&alpha, tail)) = x.split_first() else {
            return Self {
                tau: T::zero(),
                beta: T::Real::zero(),
            };
        };

        let tail_norm = tail
            .iter()
            .fold(T::Real::zero(), |acc, &xi| acc.hypot(xi.abs_val()));
        if tail_norm.is_zero() && alpha == T::from_real(alpha.re()) {
            return Self {
                tau: T::zero(),
                beta: alpha.re(),
            };
        }

        let norm = alpha.abs_val().hypot(tail_norm);
        let beta = if alpha.re() >= T::Real::zero() {
            -norm
        } else {
            norm
        };
        let tau = (T::from_real(beta) - alpha).scale(T::Real::one() / beta);
        let denom = alpha - T::from_real(beta);
        for xi in x.iter_mut().skip(1) {
            *xi = *xi / denom;
        }

        Self { tau, beta }
    }

    /// Whether this reflector is the identity
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.tau == T::zero()
    }
}

/// Initialize an identity matrix [n × n].
#[inline]
pub fn identity_matrix<T: LinalgElement>(n: usize) -> Vec<T> {
    let mut result = vec![T::zero(); n * n];
    for i in 0..n {
        result[i * n + i] = T::one();
    }
    result
}

/// Sort indices by value (ascending, stable; NaN compares equal).
#[inline]
pub fn argsort_ascending<R: Float>(values: &[R]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..values.len()).collect();
    indices.sort_by(|&i, &j| {
        values[i]
            .partial_cmp(&values[j])
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    indices
}

/// Reorder vector elements according to index permutation.
#[inline]
pub fn permute_vector<R: Copy>(data: &[R], indices: &[usize]) -> Vec<R> {
    indices.iter().map(|&idx| data[idx]).collect()
}

/// Reorder the columns of a [rows × cols] matrix according to index permutation.
#[inline]
pub fn permute_columns<T: LinalgElement>(
    data: &[T],
    rows: usize,
    cols: usize,
    indices: &[usize],
) -> Vec<T> {
    let mut result = vec![T::zero(); rows * cols];
    for (new_idx, &old_idx) in indices.iter().enumerate() {
        for i in 0..rows {
            result[i * cols + new_idx] = data[i * cols + old_idx];
        }
    }
    result
}
