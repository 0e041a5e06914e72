//! Element trait for mapping Rust types to DType

use super::{Complex64, Complex128, DType};
use crate::tensor::Storage;
use bytemuck::{Pod, Zeroable};
use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Sub};

/// Trait for types that can be elements of a matrix buffer
///
/// This trait connects Rust's type system to the runtime dtype tag and to the
/// tagged [`Storage`] that backs every tensor.
///
/// # Bounds
/// - `Copy + Send + Sync + 'static` - Basic trait requirements
/// - `Pod + Zeroable` - Safe memory transmutation (bytemuck)
/// - `Add + Sub + Mul + Div` - Arithmetic operations (Output = Self)
pub trait Element:
    Copy
    + Send
    + Sync
    + Pod
    + Zeroable
    + Debug
    + PartialEq
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    /// The corresponding DType for this Rust type
    const DTYPE: DType;

    /// Zero value
    fn zero() -> Self;

    /// One value
    fn one() -> Self;

    /// Wrap an owned buffer in the matching storage variant
    fn into_storage(data: Vec<Self>) -> Storage;

    /// Borrow the buffer if the storage holds this element type
    fn storage_slice(storage: &Storage) -> Option<&[Self]>;
}

macro_rules! impl_element {
    ($ty:ty, $variant:ident, $zero:expr, $one:expr) => {
        impl Element for $ty {
            const DTYPE: DType = DType::$variant;

            #[inline]
            fn zero() -> Self {
                $zero
            }

            #[inline]
            fn one() -> Self {
                $one
            }

            fn into_storage(data: Vec<Self>) -> Storage {
                Storage::$variant(data)
            }

            fn storage_slice(storage: &Storage) -> Option<&[Self]> {
                match storage {
                    Storage::$variant(data) => Some(data),
                    _ => None,
                }
            }
        }
    };
}

impl_element!(f32, F32, 0.0, 1.0);
impl_element!(f64, F64, 0.0, 1.0);
impl_element!(Complex64, Complex64, Complex64::ZERO, Complex64::ONE);
impl_element!(Complex128, Complex128, Complex128::ZERO, Complex128::ONE);
