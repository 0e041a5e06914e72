//! Implicit QL eigensolver for real symmetric tridiagonal matrices

use super::super::householder::LinalgElement;
use super::tridiagonal::SymmetricTridiagonal;
use crate::error::{Error, NumericalFailureKind, Result};
use num_traits::{Float, One, Zero};

/// Maximum QL sweeps spent on a single eigenvalue before giving up
pub const MAX_QL_ITERATIONS: usize = 30;

/// Eigenvalues (and optionally eigenvectors) of a symmetric tridiagonal matrix
///
/// Implicit QL with Wilkinson-style shifts. Each sweep chases a bulge from the
/// bottom of the unreduced block up to its top with Givens rotations; an
/// off-diagonal entry is treated as zero once
/// `|e[m]| <= eps * (|d[m]| + |d[m + 1]|)`.
///
/// If `z` is given ([n × n], row-major) every rotation is applied to its
/// columns, so passing the tridiagonalization's `Q` yields eigenvectors of the
/// full Hermitian matrix in the columns of `z`.
///
/// Eigenvalues are returned in no particular order.
///
/// # Errors
///
/// `NoConvergence` when an eigenvalue needs more than [`MAX_QL_ITERATIONS`]
/// sweeps (in practice only with NaN entries or pathological scaling).
pub fn implicit_ql<T: LinalgElement>(
    tri: SymmetricTridiagonal<T::Real>,
    mut z: Option<&mut [T]>,
) -> Result<Vec<T::Real>> {
    let SymmetricTridiagonal {
        diag: mut d,
        off_diag: mut e,
    } = tri;
    let n = d.len();
    if n == 0 {
        return Ok(d);
    }
    e[n - 1] = T::Real::zero();

    let zero = T::Real::zero();
    let one = T::Real::one();
    let two = one + one;
    let eps = T::Real::epsilon();

    for l in 0..n {
        let mut iterations = 0;
        loop {
            // Find the first negligible off-diagonal at or below l
            let mut m = l;
            while m + 1 < n {
                let dd = d[m].abs() + d[m + 1].abs();
                if e[m].abs() <= eps * dd {
                    break;
                }
                m += 1;
            }
            if m == l {
                break;
            }
            if iterations == MAX_QL_ITERATIONS {
                return Err(Error::numerical(NumericalFailureKind::NoConvergence {
                    index: l,
                    iterations,
                }));
            }
            iterations += 1;

            // Shift from the leading 2x2 block
            let mut g = (d[l + 1] - d[l]) / (two * e[l]);
            let mut r = g.hypot(one);
            let signed_r = if g >= zero { r.abs() } else { -r.abs() };
            g = d[m] - d[l] + e[l] / (g + signed_r);

            let (mut s, mut c, mut p) = (one, one, zero);
            let mut underflow = false;
            let mut i = m;
            while i > l {
                i -= 1;
                let f = s * e[i];
                let b = c * e[i];
                r = f.hypot(g);
                e[i + 1] = r;
                if r == zero {
                    // Recover from underflow: split here and rescan
                    d[i + 1] = d[i + 1] - p;
                    e[m] = zero;
                    underflow = true;
                    break;
                }
                s = f / r;
                c = g / r;
                g = d[i + 1] - p;
                r = (d[i] - g) * s + two * c * b;
                p = s * r;
                d[i + 1] = g + p;
                g = c * r - b;

                if let Some(z) = z.as_deref_mut() {
                    for row in z.chunks_exact_mut(n) {
                        let zi = row[i];
                        let zi1 = row[i + 1];
                        row[i + 1] = zi.scale(s) + zi1.scale(c);
                        row[i] = zi.scale(c) - zi1.scale(s);
                    }
                }
            }
            if underflow {
                continue;
            }
            d[l] = d[l] - p;
            e[l] = g;
            e[m] = zero;
        }
    }

    Ok(d)
}
