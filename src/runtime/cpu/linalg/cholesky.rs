//! Cholesky factorization and the triangular solves built on it

use super::super::householder::LinalgElement;
use crate::error::{Error, NumericalFailureKind, Result};
use num_traits::{Float, One, Zero};

/// Cholesky decomposition B = L @ L^H (Cholesky-Banachiewicz, column by column)
///
/// Only the lower triangle of `b` is read; the diagonal imaginary parts are
/// ignored. Returns `L` as a full [n × n] row-major matrix with a real,
/// strictly positive diagonal and zeros above it.
///
/// Fails with `NotPositiveDefinite` on the first pivot that is not strictly
/// positive (a NaN pivot included).
pub fn cholesky_lower<T: LinalgElement>(b: &[T], n: usize) -> Result<Vec<T>> {
    let mut l: Vec<T> = vec![T::zero(); n * n];

    for j in 0..n {
        let mut diag = b[j * n + j].re();
        for k in 0..j {
            diag = diag - l[j * n + k].abs_sq();
        }
        // Negated comparison so NaN is rejected too
        if !(diag > T::Real::zero()) {
            return Err(Error::numerical(
                NumericalFailureKind::NotPositiveDefinite { pivot: j },
            ));
        }
        let l_jj = diag.sqrt();
        l[j * n + j] = T::from_real(l_jj);

        let inv = T::Real::one() / l_jj;
        for i in (j + 1)..n {
            let mut sum = b[i * n + j];
            for k in 0..j {
                sum = sum - l[i * n + k] * l[j * n + k].conj();
            }
            l[i * n + j] = sum.scale(inv);
        }
    }

    Ok(l)
}

/// Solve `L @ X = M` in place (`M` is [n × cols], overwritten by `X`).
///
/// Forward substitution, row by row, so each inner loop is a contiguous row.
pub fn forward_substitute<T: LinalgElement>(l: &[T], m: &mut [T], n: usize, cols: usize) {
    for i in 0..n {
        for k in 0..i {
            let l_ik = l[i * n + k];
            if l_ik == T::zero() {
                continue;
            }
            for j in 0..cols {
                m[i * cols + j] = m[i * cols + j] - l_ik * m[k * cols + j];
            }
        }
        let inv = T::Real::one() / l[i * n + i].re();
        for value in &mut m[i * cols..(i + 1) * cols] {
            *value = value.scale(inv);
        }
    }
}

/// Solve `L^H @ X = M` in place (`M` is [n × cols], overwritten by `X`).
///
/// Back substitution against the conjugate transpose of a lower factor.
pub fn back_substitute_conj_transpose<T: LinalgElement>(
    l: &[T],
    m: &mut [T],
    n: usize,
    cols: usize,
) {
    for i in (0..n).rev() {
        for k in (i + 1)..n {
            let u_ik = l[k * n + i].conj();
            if u_ik == T::zero() {
                continue;
            }
            for j in 0..cols {
                m[i * cols + j] = m[i * cols + j] - u_ik * m[k * cols + j];
            }
        }
        let inv = T::Real::one() / l[i * n + i].re();
        for value in &mut m[i * cols..(i + 1) * cols] {
            *value = value.scale(inv);
        }
    }
}

/// Overwrite an [n × n] matrix with the Hermitian matrix defined by its lower triangle.
///
/// The diagonal is made exactly real.
pub fn hermitian_from_lower<T: LinalgElement>(c: &mut [T], n: usize) {
    for i in 0..n {
        c[i * n + i] = T::from_real(c[i * n + i].re());
        for j in 0..i {
            c[j * n + i] = c[i * n + j].conj();
        }
    }
}

/// Reduce the generalized problem to a standard one: `C = L^-1 @ C @ L^-H`.
///
/// `c` must hold a full Hermitian matrix on entry and holds the (Hermitian)
/// reduced matrix on exit. Never forms `L^-1` explicitly.
pub fn reduce_to_standard<T: LinalgElement>(l: &[T], c: &mut [T], n: usize) {
    // Y = L^-1 C
    forward_substitute(l, c, n, n);
    // Y^H = C L^-H, then C' = L^-1 (C L^-H)
    conj_transpose_in_place(c, n);
    forward_substitute(l, c, n, n);
    hermitian_from_lower(c, n);
}

/// Replace a square [n × n] matrix by its conjugate transpose.
pub fn conj_transpose_in_place<T: LinalgElement>(c: &mut [T], n: usize) {
    for i in 0..n {
        c[i * n + i] = c[i * n + i].conj();
        for j in (i + 1)..n {
            let upper = c[i * n + j];
            c[i * n + j] = c[j * n + i].conj();
            c[j * n + i] = upper.conj();
        }
    }
}

/// Check that every entry of the lower triangle (diagonal included) is finite.
pub fn ensure_lower_finite<T: LinalgElement>(m: &[T], n: usize) -> Result<()> {
    for i in 0..n {
        if m[i * n..i * n + i + 1].iter().any(|x| !x.is_finite_val()) {
            return Err(Error::numerical(NumericalFailureKind::NonFiniteInput));
        }
    }
    Ok(())
}
