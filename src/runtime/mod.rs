//! Runtime backends for generalized eigendecomposition
//!
//! Each backend exposes a client type that implements the algorithm traits
//! of [`crate::algorithm`]. Only the CPU backend exists.
//!
//! # Architecture
//!
//! ```text
//! CpuClient (dispatch, thread pool, cancellation)
//! ├── batch driver      one task per matrix pair, disjoint output slices
//! └── kernels           Cholesky, reduction, tridiagonalization, implicit QL
//! ```

pub mod cpu;
