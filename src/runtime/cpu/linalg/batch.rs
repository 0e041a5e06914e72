//! Batch driver: validated tensors in, one independent solve per matrix pair

use super::super::CpuClient;
use super::super::householder::LinalgElement;
use super::eig_generalized::generalized_eigh_into;
use crate::algorithm::linalg::{EigenMode, GeneralizedEigenDecomposition};
use crate::error::{Error, Result};
use crate::tensor::{Shape, Tensor};
use log::{debug, trace, warn};

/// One matrix pair of a batch together with its disjoint output slots
struct PairTask<'a, T: LinalgElement> {
    index: usize,
    a: &'a [T],
    b: &'a [T],
    values: &'a mut [T::Real],
    vectors: Option<&'a mut [T]>,
}

/// Solve every pair of a validated `[..., n, n]` batch.
///
/// Output buffers are allocated up front from the input shape; each pair
/// writes only into its own slices, so pairs may run on any thread in any
/// order. The first failing pair (lowest index among those evaluated) aborts
/// the invocation and no output is returned.
pub(crate) fn generalized_eigh_batch<T: LinalgElement>(
    client: &CpuClient,
    a: &Tensor,
    b: &Tensor,
    n: usize,
    mode: EigenMode,
) -> Result<GeneralizedEigenDecomposition> {
    let (Some(a_data), Some(b_data)) = (a.as_slice::<T>(), b.as_slice::<T>()) else {
        return Err(Error::Internal(format!(
            "generalized_eigh: expected {} inputs, got {} and {}",
            T::DTYPE,
            a.dtype(),
            b.dtype()
        )));
    };

    let batch_dims = a.dims().batch_dims();
    let batch: usize = batch_dims.iter().product();
    let values_shape = Shape::with_batch(batch_dims, &[n]);
    let vectors_shape = Shape::with_batch(batch_dims, &[n, n]);

    let mut values = vec![<T::Real as num_traits::Zero>::zero(); batch * n];
    let mut vectors = mode
        .computes_vectors()
        .then(|| vec![T::zero(); batch * n * n]);

    debug!(
        "generalized_eigh: dtype={} n={} batch={} mode={:?} parallel={} threads={:?}",
        T::DTYPE,
        n,
        batch,
        mode,
        client.runs_parallel(batch),
        client.parallelism().num_threads
    );

    // chunks_exact(0) panics; an empty batch or n == 0 has nothing to solve
    if batch > 0 && n > 0 {
        let nn = n * n;
        let vector_slots: Vec<Option<&mut [T]>> = match vectors.as_deref_mut() {
            Some(buf) => buf.chunks_exact_mut(nn).map(Some).collect(),
            None => (0..batch).map(|_| None).collect(),
        };

        let tasks: Vec<PairTask<'_, T>> = a_data
            .chunks_exact(nn)
            .zip(b_data.chunks_exact(nn))
            .zip(values.chunks_exact_mut(n))
            .zip(vector_slots)
            .enumerate()
            .map(|(index, (((a, b), values), vectors))| PairTask {
                index,
                a,
                b,
                values,
                vectors,
            })
            .collect();

        client.try_for_each_task(tasks, |task| solve_pair(client, n, task))?;
    }

    let eigenvalues = Tensor::from_storage(T::real_into_storage(values), &values_shape)?;
    let eigenvectors = vectors
        .map(|data| Tensor::try_from_vec(data, &vectors_shape))
        .transpose()?;

    Ok(GeneralizedEigenDecomposition {
        eigenvalues,
        eigenvectors,
    })
}

fn solve_pair<T: LinalgElement>(client: &CpuClient, n: usize, task: PairTask<'_, T>) -> Result<()> {
    let PairTask {
        index,
        a,
        b,
        values,
        vectors,
    } = task;

    if client.is_cancelled() {
        debug!("generalized_eigh: cancelled before batch element {index}");
        return Err(Error::Cancelled { batch_index: index });
    }

    trace!("generalized_eigh: solving batch element {index}");
    generalized_eigh_into(a, b, n, values, vectors).map_err(|err| {
        warn!("generalized_eigh: batch element {index} failed: {err}");
        err.at_batch_index(index)
    })
}
