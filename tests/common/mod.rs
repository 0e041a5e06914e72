//! Common test utilities
#![allow(dead_code)]

use geneig::dtype::{Complex64, Complex128, Element};
use geneig::runtime::cpu::{CpuClient, LinalgElement};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Create a CPU client for testing, with test logging enabled
pub fn create_cpu_client() -> CpuClient {
    let _ = env_logger::builder().is_test(true).try_init();
    CpuClient::new()
}

/// Seeded generator so failures are reproducible
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Scalar types the integration tests run over
///
/// Every check is done in Complex128 arithmetic, so each element type only
/// needs to convert to and from (re, im) pairs.
pub trait TestElement: LinalgElement<Real: Element> {
    /// Relative tolerance for residual and orthonormality checks
    const TOL: f64;

    /// Build from parts; the imaginary part is dropped for real types
    fn from_parts(re: f64, im: f64) -> Self;

    /// Widen to Complex128
    fn widen(self) -> Complex128;

    /// Widen an eigenvalue to f64
    fn widen_real(value: Self::Real) -> f64;
}

impl TestElement for f32 {
    const TOL: f64 = 1e-3;
    fn from_parts(re: f64, _im: f64) -> Self {
        re as f32
    }
    fn widen(self) -> Complex128 {
        Complex128::new(self as f64, 0.0)
    }
    fn widen_real(value: f32) -> f64 {
        value as f64
    }
}

impl TestElement for f64 {
    const TOL: f64 = 1e-10;
    fn from_parts(re: f64, _im: f64) -> Self {
        re
    }
    fn widen(self) -> Complex128 {
        Complex128::new(self, 0.0)
    }
    fn widen_real(value: f64) -> f64 {
        value
    }
}

impl TestElement for Complex64 {
    const TOL: f64 = 1e-3;
    fn from_parts(re: f64, im: f64) -> Self {
        Complex64::new(re as f32, im as f32)
    }
    fn widen(self) -> Complex128 {
        Complex128::from(self)
    }
    fn widen_real(value: f32) -> f64 {
        value as f64
    }
}

impl TestElement for Complex128 {
    const TOL: f64 = 1e-10;
    fn from_parts(re: f64, im: f64) -> Self {
        Complex128::new(re, im)
    }
    fn widen(self) -> Complex128 {
        self
    }
    fn widen_real(value: f64) -> f64 {
        value
    }
}

fn random_square(rng: &mut StdRng, n: usize, complex: bool) -> Vec<Complex128> {
    (0..n * n)
        .map(|_| {
            let re = rng.random_range(-1.0..1.0);
            let im = if complex {
                rng.random_range(-1.0..1.0)
            } else {
                0.0
            };
            Complex128::new(re, im)
        })
        .collect()
}

/// Random Hermitian (symmetric for real `T`) matrix: M + M^H
pub fn random_hermitian<T: TestElement>(rng: &mut StdRng, n: usize) -> Vec<T> {
    let m = random_square(rng, n, T::DTYPE.is_complex());
    let mut out = Vec::with_capacity(n * n);
    for i in 0..n {
        for j in 0..n {
            let z = m[i * n + j] + m[j * n + i].conj();
            let im = if i == j { 0.0 } else { z.im };
            out.push(T::from_parts(z.re, im));
        }
    }
    out
}

/// Random well-conditioned Hermitian positive-definite matrix: M @ M^H + n I
pub fn random_hpd<T: TestElement>(rng: &mut StdRng, n: usize) -> Vec<T> {
    let m = random_square(rng, n, T::DTYPE.is_complex());
    let mut out = Vec::with_capacity(n * n);
    for i in 0..n {
        for j in 0..n {
            let mut z = Complex128::ZERO;
            for k in 0..n {
                z = z + m[i * n + k] * m[j * n + k].conj();
            }
            if i == j {
                out.push(T::from_parts(z.re + n as f64, 0.0));
            } else {
                out.push(T::from_parts(z.re, z.im));
            }
        }
    }
    out
}

/// Identity matrix [n × n]
pub fn identity<T: TestElement>(n: usize) -> Vec<T> {
    let mut out = vec![T::from_parts(0.0, 0.0); n * n];
    for i in 0..n {
        out[i * n + i] = T::from_parts(1.0, 0.0);
    }
    out
}

fn widen_all<T: TestElement>(data: &[T]) -> Vec<Complex128> {
    data.iter().map(|&x| x.widen()).collect()
}

fn matmul(a: &[Complex128], b: &[Complex128], n: usize) -> Vec<Complex128> {
    let mut out = vec![Complex128::ZERO; n * n];
    for i in 0..n {
        for k in 0..n {
            let a_ik = a[i * n + k];
            for j in 0..n {
                out[i * n + j] = out[i * n + j] + a_ik * b[k * n + j];
            }
        }
    }
    out
}

fn frobenius_norm(data: &[Complex128]) -> f64 {
    data.iter().map(|z| z.magnitude_squared()).sum::<f64>().sqrt()
}

/// Assert ‖A x_j − λ_j B x_j‖ is small for every eigenpair of one matrix pair
pub fn assert_residual<T: TestElement>(
    a: &[T],
    b: &[T],
    values: &[T::Real],
    vectors: &[T],
    n: usize,
    msg: &str,
) {
    let a = widen_all(a);
    let b = widen_all(b);
    let x = widen_all(vectors);
    let ax = matmul(&a, &x, n);
    let bx = matmul(&b, &x, n);
    let max_lambda = values
        .iter()
        .map(|&v| T::widen_real(v).abs())
        .fold(0.0, f64::max);
    let scale = frobenius_norm(&a) + frobenius_norm(&b) * max_lambda;

    for (j, &lambda) in values.iter().enumerate() {
        let lambda = T::widen_real(lambda);
        let residual = (0..n)
            .map(|i| (ax[i * n + j] - bx[i * n + j].scale(lambda)).magnitude_squared())
            .sum::<f64>()
            .sqrt();
        assert!(
            residual <= T::TOL * scale.max(1.0),
            "{}: residual of eigenpair {} is {} (scale {})",
            msg,
            j,
            residual,
            scale
        );
    }
}

/// Assert X^H B X ≈ I
pub fn assert_b_orthonormal<T: TestElement>(b: &[T], vectors: &[T], n: usize, msg: &str) {
    let b = widen_all(b);
    let x = widen_all(vectors);
    let bx = matmul(&b, &x, n);
    for i in 0..n {
        for j in 0..n {
            let mut z = Complex128::ZERO;
            for k in 0..n {
                z = z + x[k * n + i].conj() * bx[k * n + j];
            }
            let expected = if i == j { Complex128::ONE } else { Complex128::ZERO };
            let diff = (z - expected).magnitude();
            assert!(
                diff <= T::TOL * 10.0,
                "{}: (X^H B X)[{},{}] = {} (diff={})",
                msg,
                i,
                j,
                z,
                diff
            );
        }
    }
}

/// Assert eigenvalues are non-decreasing
pub fn assert_ascending<R: PartialOrd + std::fmt::Debug>(values: &[R], msg: &str) {
    for (i, w) in values.windows(2).enumerate() {
        assert!(
            w[0] <= w[1],
            "{}: λ[{}]={:?} > λ[{}]={:?}",
            msg,
            i,
            w[0],
            i + 1,
            w[1]
        );
    }
}

/// Assert two f64 slices are close within tolerance
///
/// Uses the formula: |a - b| <= atol + rtol * |b|
pub fn assert_allclose_f64(a: &[f64], b: &[f64], rtol: f64, atol: f64, msg: &str) {
    assert_eq!(a.len(), b.len(), "{}: length mismatch", msg);
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        let diff = (x - y).abs();
        let tol = atol + rtol * y.abs();
        assert!(
            diff <= tol,
            "{}: element {} differs: {} vs {} (diff={}, tol={})",
            msg,
            i,
            x,
            y,
            diff,
            tol
        );
    }
}
