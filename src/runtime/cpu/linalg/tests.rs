//! Tests for the CPU generalized eigensolver on tensors

use super::super::{CpuClient, ParallelismConfig};
use crate::algorithm::linalg::{EigenMode, GeneralizedEigenAlgorithms, GeneralizedSelfAdjointEig};
use crate::dtype::{Complex64, DType};
use crate::error::{Error, NumericalFailureKind};
use crate::tensor::Tensor;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

fn create_client() -> CpuClient {
    CpuClient::new()
}

#[test]
fn test_diagonal_pair_identity_b() {
    let client = create_client();

    // A = [[2, 0], [0, 3]], B = I
    let a = Tensor::from_slice(&[2.0f64, 0.0, 0.0, 3.0], &[2, 2]);
    let b = Tensor::from_slice(&[1.0f64, 0.0, 0.0, 1.0], &[2, 2]);

    let eig = client
        .generalized_eigh(&a, &b, EigenMode::ValuesAndVectors)
        .unwrap();
    assert_eq!(eig.eigenvalues.shape(), &[2]);
    assert_eq!(eig.eigenvalues.dtype(), DType::F64);

    let values: Vec<f64> = eig.eigenvalues.to_vec();
    assert!((values[0] - 2.0).abs() < 1e-12);
    assert!((values[1] - 3.0).abs() < 1e-12);

    // Identity columns up to sign
    let vectors: Vec<f64> = eig.eigenvectors.unwrap().to_vec();
    assert!((vectors[0].abs() - 1.0).abs() < 1e-12);
    assert!(vectors[1].abs() < 1e-12);
    assert!(vectors[2].abs() < 1e-12);
    assert!((vectors[3].abs() - 1.0).abs() < 1e-12);
}

#[test]
fn test_complex_eigenvalues_are_real_dtype() {
    let client = create_client();

    // A = [[2, i], [-i, 2]] -> λ = 1, 3
    let a = Tensor::from_slice(
        &[
            Complex64::new(2.0, 0.0),
            Complex64::new(0.0, 1.0),
            Complex64::new(0.0, -1.0),
            Complex64::new(2.0, 0.0),
        ],
        &[2, 2],
    );
    let b = Tensor::from_slice(
        &[Complex64::ONE, Complex64::ZERO, Complex64::ZERO, Complex64::ONE],
        &[2, 2],
    );

    let eig = client
        .generalized_eigh(&a, &b, EigenMode::ValuesAndVectors)
        .unwrap();
    assert_eq!(eig.eigenvalues.dtype(), DType::F32);
    let eigenvectors = eig.eigenvectors.unwrap();
    assert_eq!(eigenvectors.dtype(), DType::Complex64);
    assert_eq!(eigenvectors.shape(), &[2, 2]);

    let values: Vec<f32> = eig.eigenvalues.to_vec();
    assert!((values[0] - 1.0).abs() < 1e-5);
    assert!((values[1] - 3.0).abs() < 1e-5);
}

#[test]
fn test_batched_shapes() {
    let client = create_client();

    let eye = [1.0f32, 0.0, 0.0, 1.0];
    let mut a = Vec::new();
    let mut b = Vec::new();
    for k in 0..6 {
        a.extend_from_slice(&[k as f32, 0.0, 0.0, -(k as f32)]);
        b.extend_from_slice(&eye);
    }
    let a = Tensor::from_slice(&a, &[2, 3, 2, 2]);
    let b = Tensor::from_slice(&b, &[2, 3, 2, 2]);

    let eig = client
        .generalized_eigh(&a, &b, EigenMode::ValuesAndVectors)
        .unwrap();
    assert_eq!(eig.eigenvalues.shape(), &[2, 3, 2]);
    assert_eq!(eig.eigenvectors.as_ref().unwrap().shape(), &[2, 3, 2, 2]);

    let values: Vec<f32> = eig.eigenvalues.to_vec();
    for k in 0..6 {
        assert_eq!(values[2 * k], -(k as f32));
        assert_eq!(values[2 * k + 1], k as f32);
    }

    let values_only = client
        .generalized_eigh(&a, &b, EigenMode::ValuesOnly)
        .unwrap();
    assert!(values_only.eigenvectors.is_none());
    assert_eq!(values_only.eigenvalues.to_vec::<f32>(), values);
}

#[test]
fn test_empty_matrices() {
    let client = create_client();

    let a = Tensor::zeros(&[0, 0], DType::F64);
    let eig = client
        .generalized_eigh(&a, &a, EigenMode::ValuesAndVectors)
        .unwrap();
    assert_eq!(eig.eigenvalues.shape(), &[0]);
    assert_eq!(eig.eigenvectors.unwrap().shape(), &[0, 0]);

    // Empty batch of 3x3 pairs
    let a = Tensor::zeros(&[0, 3, 3], DType::Complex128);
    let eig = client
        .generalized_eigh(&a, &a, EigenMode::ValuesAndVectors)
        .unwrap();
    assert_eq!(eig.eigenvalues.shape(), &[0, 3]);
    assert_eq!(eig.eigenvalues.dtype(), DType::F64);
    assert_eq!(eig.eigenvectors.unwrap().shape(), &[0, 3, 3]);
}

#[test]
fn test_invalid_shapes_rejected() {
    let client = create_client();

    let a = Tensor::zeros(&[2, 3], DType::F32);
    let err = client
        .generalized_eigh(&a, &a, EigenMode::ValuesOnly)
        .unwrap_err();
    assert!(err.is_invalid_argument());

    let a = Tensor::zeros(&[2, 2], DType::F32);
    let b = Tensor::zeros(&[3, 3], DType::F32);
    let err = client
        .generalized_eigh(&a, &b, EigenMode::ValuesOnly)
        .unwrap_err();
    assert!(err.is_invalid_argument());

    let b = Tensor::zeros(&[2, 2], DType::F64);
    let err = client
        .generalized_eigh(&a, &b, EigenMode::ValuesOnly)
        .unwrap_err();
    assert!(err.is_invalid_argument());
}

#[test]
fn test_batch_failure_reports_index() {
    let client = create_client();

    // Pair 2 has an indefinite B
    let a = Tensor::from_slice(&[1.0f64, 0.0, 0.0, 1.0].repeat(3), &[3, 2, 2]);
    let mut b_data = [1.0f64, 0.0, 0.0, 1.0].repeat(3);
    b_data[8] = -1.0;
    let b = Tensor::from_slice(&b_data, &[3, 2, 2]);

    let err = client
        .generalized_eigh(&a, &b, EigenMode::ValuesAndVectors)
        .unwrap_err();
    match err {
        Error::NumericalFailure { kind, batch_index } => {
            assert_eq!(kind, NumericalFailureKind::NotPositiveDefinite { pivot: 0 });
            assert_eq!(batch_index, Some(2));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_parallel_matches_sequential() {
    let sequential = CpuClient::with_parallelism(ParallelismConfig::sequential()).unwrap();
    let parallel = CpuClient::with_parallelism(ParallelismConfig::new(Some(3), None)).unwrap();

    let n = 3;
    let batch = 8;
    let mut a = Vec::with_capacity(batch * n * n);
    let mut b = Vec::with_capacity(batch * n * n);
    for k in 0..batch {
        let s = k as f64;
        a.extend_from_slice(&[s, 1.0, 0.5, 1.0, -s, 2.0, 0.5, 2.0, 1.0]);
        b.extend_from_slice(&[2.0 + s, 0.5, 0.0, 0.5, 2.0, 0.5, 0.0, 0.5, 2.0]);
    }
    let a = Tensor::from_slice(&a, &[batch, n, n]);
    let b = Tensor::from_slice(&b, &[batch, n, n]);

    let lhs = sequential
        .generalized_eigh(&a, &b, EigenMode::ValuesAndVectors)
        .unwrap();
    let rhs = parallel
        .generalized_eigh(&a, &b, EigenMode::ValuesAndVectors)
        .unwrap();
    assert_eq!(lhs.eigenvalues, rhs.eigenvalues);
    assert_eq!(lhs.eigenvectors, rhs.eigenvectors);
}

#[test]
fn test_cancelled_before_first_pair() {
    let flag = Arc::new(AtomicBool::new(true));
    let client = CpuClient::with_parallelism(ParallelismConfig::sequential())
        .unwrap()
        .with_cancel_flag(flag);

    let a = Tensor::from_slice(&[1.0f64, 0.0, 0.0, 1.0].repeat(4), &[4, 2, 2]);
    let err = client
        .generalized_eigh(&a, &a, EigenMode::ValuesOnly)
        .unwrap_err();
    assert!(matches!(err, Error::Cancelled { batch_index: 0 }));
}

#[test]
fn test_op_compute_outputs() {
    let client = create_client();
    let op = GeneralizedSelfAdjointEig::new(false);

    let a = Tensor::from_slice(&[4.0f64, 1.0, 1.0, 3.0], &[2, 2]);
    let b = Tensor::from_slice(&[2.0f64, 0.0, 0.0, 1.0], &[2, 2]);

    let outputs = op.compute(&client, &[&a, &b]).unwrap();
    assert_eq!(outputs.len(), 1);
    assert_eq!(outputs[0].shape(), &[2]);

    let err = op.compute(&client, &[&a]).unwrap_err();
    assert!(err.to_string().contains("Expected two input matrices, got 1."));
}
