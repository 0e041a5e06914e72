//! Householder reduction of a Hermitian matrix to real symmetric tridiagonal form

use super::super::householder::{LinalgElement, Reflector, identity_matrix};
use num_traits::{One, Zero};

/// Real symmetric tridiagonal matrix
///
/// `off_diag[i]` couples rows `i` and `i + 1`; the last entry is always zero
/// so both vectors have length `n`.
#[derive(Debug, Clone, PartialEq)]
pub struct SymmetricTridiagonal<R> {
    /// Diagonal entries [n]
    pub diag: Vec<R>,
    /// Sub-diagonal entries [n], `off_diag[n - 1] == 0`
    pub off_diag: Vec<R>,
}

/// Reduce a Hermitian matrix to tridiagonal form: `C = Q @ T @ Q^H`.
///
/// Algorithm (unblocked, lower):
/// ```text
/// FOR k = 0 .. n-2:
///   H_k = reflector annihilating C[k+2.., k]      (H_k^H x = beta e1, beta real)
///   p = tau * S @ v                              (S = C[k+1.., k+1..])
///   w = p - (1/2) Re(conj(tau) * v^H p) * v
///   S = S - v @ w^H - w @ v^H                    (S = H_k^H S H_k)
///   Q = Q @ H_k                                  (only if accumulating)
/// ```
/// The last step (`k = n - 2`) only rotates a complex sub-diagonal entry onto
/// the real axis; for real input it is the identity.
///
/// `c` is a full Hermitian [n × n] matrix and is destroyed. If `q` is given it
/// must have length `n * n`; it is overwritten with the unitary `Q`.
pub fn tridiagonalize<T: LinalgElement>(
    c: &mut [T],
    n: usize,
    mut q: Option<&mut [T]>,
) -> SymmetricTridiagonal<T::Real> {
    if let Some(q) = q.as_deref_mut() {
        q.copy_from_slice(&identity_matrix::<T>(n));
    }

    let mut off_diag = vec![T::Real::zero(); n];
    let half = T::Real::one() / (T::Real::one() + T::Real::one());

    for k in 0..n.saturating_sub(1) {
        let m = n - k - 1;
        let base = k + 1;

        let mut v: Vec<T> = (0..m).map(|i| c[(base + i) * n + k]).collect();
        let refl = Reflector::compute(&mut v);
        v[0] = T::one();
        off_diag[k] = refl.beta;

        // Column k below the diagonal becomes (beta, 0, ..., 0), row k mirrors it
        c[base * n + k] = T::from_real(refl.beta);
        c[k * n + base] = T::from_real(refl.beta);
        for i in 1..m {
            c[(base + i) * n + k] = T::zero();
            c[k * n + base + i] = T::zero();
        }

        if refl.is_identity() {
            continue;
        }
        let tau = refl.tau;

        // p = tau * S v
        let mut w: Vec<T> = vec![T::zero(); m];
        for (i, w_i) in w.iter_mut().enumerate() {
            let row = &c[(base + i) * n + base..(base + i) * n + n];
            let dot = row
                .iter()
                .zip(&v)
                .fold(T::zero(), |acc, (&s, &vj)| acc + s * vj);
            *w_i = tau * dot;
        }

        // w = p - 1/2 Re(conj(tau) v^H p) v
        let vhp = v
            .iter()
            .zip(&w)
            .fold(T::zero(), |acc, (&vi, &pi)| acc + vi.conj() * pi);
        let alpha = -((tau.conj() * vhp).re() * half);
        for (w_i, &v_i) in w.iter_mut().zip(&v) {
            *w_i = *w_i + v_i.scale(alpha);
        }

        // S = S - v w^H - w v^H
        for i in 0..m {
            let (v_i, w_i) = (v[i], w[i]);
            let row = &mut c[(base + i) * n + base..(base + i) * n + n];
            for (j, s) in row.iter_mut().enumerate() {
                *s = *s - v_i * w[j].conj() - w_i * v[j].conj();
            }
        }

        // Q = Q H_k = Q - tau (Q v) v^H
        if let Some(q) = q.as_deref_mut() {
            for r in 0..n {
                let row = &mut q[r * n + base..r * n + n];
                let qv = row
                    .iter()
                    .zip(&v)
                    .fold(T::zero(), |acc, (&qj, &vj)| acc + qj * vj);
                let factor = tau * qv;
                for (q_rj, &vj) in row.iter_mut().zip(&v) {
                    *q_rj = *q_rj - factor * vj.conj();
                }
            }
        }
    }

    let diag = (0..n).map(|i| c[i * n + i].re()).collect();
    SymmetricTridiagonal { diag, off_diag }
}
