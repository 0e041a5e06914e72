//! Core Tensor type

use super::{Shape, Storage};
use crate::dtype::{DType, Element};
use crate::error::{Error, Result};
use std::fmt;

/// Dense, contiguous, row-major n-dimensional array in host memory
///
/// `Tensor` is the buffer exchanged with the solver. It consists of:
/// - **Storage**: owned element buffer tagged with its dtype
/// - **Shape**: dimensions; matrices are the two trailing dimensions and any
///   leading dimensions are batch dimensions
///
/// # Example
///
/// ```
/// use geneig::tensor::Tensor;
///
/// let a = Tensor::from_slice(&[2.0f64, 0.0, 0.0, 3.0], &[2, 2]);
/// assert_eq!(a.shape(), &[2, 2]);
/// assert_eq!(a.to_vec::<f64>(), vec![2.0, 0.0, 0.0, 3.0]);
/// ```
#[derive(Clone, PartialEq)]
pub struct Tensor {
    storage: Storage,
    shape: Shape,
}

impl Tensor {
    /// Create a tensor from a slice of data
    ///
    /// # Panics
    ///
    /// Panics if `data.len()` does not equal the product of the `shape` dimensions.
    /// For a fallible alternative, use [`Self::try_from_slice`].
    pub fn from_slice<T: Element>(data: &[T], shape: &[usize]) -> Self {
        Self::try_from_slice(data, shape).expect("Tensor::from_slice failed")
    }

    /// Create a tensor from a slice of data (fallible version)
    ///
    /// Returns an error if `data.len()` does not equal the product of the `shape` dimensions.
    pub fn try_from_slice<T: Element>(data: &[T], shape: &[usize]) -> Result<Self> {
        Self::try_from_vec(data.to_vec(), shape)
    }

    /// Create a tensor taking ownership of `data`
    pub fn try_from_vec<T: Element>(data: Vec<T>, shape: &[usize]) -> Result<Self> {
        let expected_len: usize = shape.iter().product();
        if data.len() != expected_len {
            return Err(Error::invalid_argument(
                "data",
                format!(
                    "buffer holds {} elements but shape {:?} needs {}",
                    data.len(),
                    shape,
                    expected_len
                ),
            ));
        }

        Ok(Self {
            storage: T::into_storage(data),
            shape: Shape::from(shape),
        })
    }

    /// Wrap existing storage with a shape
    ///
    /// Returns an error if the storage length does not match the shape.
    pub fn from_storage(storage: Storage, shape: &[usize]) -> Result<Self> {
        let shape = Shape::from(shape);
        if storage.len() != shape.numel() {
            return Err(Error::invalid_argument(
                "storage",
                format!(
                    "storage holds {} elements but shape {:?} needs {}",
                    storage.len(),
                    shape.as_slice(),
                    shape.numel()
                ),
            ));
        }
        Ok(Self { storage, shape })
    }

    /// Create a tensor filled with zeros
    pub fn zeros(shape: &[usize], dtype: DType) -> Self {
        let shape = Shape::from(shape);
        Self {
            storage: Storage::zeros(shape.numel(), dtype),
            shape,
        }
    }

    /// Shape of the tensor
    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Shape of the tensor as the owned [`Shape`] type
    #[inline]
    pub fn dims(&self) -> &Shape {
        &self.shape
    }

    /// Number of dimensions
    #[inline]
    pub fn ndim(&self) -> usize {
        self.shape.ndim()
    }

    /// Total number of elements
    #[inline]
    pub fn numel(&self) -> usize {
        self.storage.len()
    }

    /// Element type
    #[inline]
    pub fn dtype(&self) -> DType {
        self.storage.dtype()
    }

    /// Underlying storage
    #[inline]
    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Borrow the elements as `T`, or `None` if `T` is not this tensor's dtype
    pub fn as_slice<T: Element>(&self) -> Option<&[T]> {
        T::storage_slice(&self.storage)
    }

    /// Copy the elements out as `T`
    ///
    /// # Panics
    ///
    /// Panics if `T` does not match the tensor's dtype.
    pub fn to_vec<T: Element>(&self) -> Vec<T> {
        match self.as_slice::<T>() {
            Some(data) => data.to_vec(),
            None => panic!(
                "Tensor::to_vec: requested {} but tensor holds {}",
                T::DTYPE,
                self.dtype()
            ),
        }
    }
}

impl fmt::Debug for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tensor")
            .field("shape", &self.shape)
            .field("dtype", &self.dtype())
            .finish()
    }
}
