//! Input containers accepted by [`TabularDataset`](super::TabularDataset).
//!
//! Inputs come in a small closed set of explicitly tagged variants:
//!
//! - [`Container::NdArray`]: a dense [`ndarray`] array with a numeric element type
//! - [`Container::Tensor`]: a framework-style [`Tensor`] (flat buffer plus shape)
//! - [`Container::List`]: a plain list of values without a shape, which is never
//!   accepted and exists so callers holding raw lists get a typed error
//!
//! Every accepted variant converts to one canonical [`NumericArray`], which is
//! then cast to the element type the dataset stores.

use std::fmt;

use ndarray::{Array, ArrayD, ArrayView, Dimension};

use super::error::{DatasetError, Role};
use super::tensor::{Tensor, TensorData};

// =============================================================================
// Element types
// =============================================================================

/// Element type of a numeric container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DType {
    F32,
    F64,
    I32,
    I64,
    U8,
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DType::F32 => "float32",
            DType::F64 => "float64",
            DType::I32 => "int32",
            DType::I64 => "int64",
            DType::U8 => "uint8",
        };
        f.write_str(name)
    }
}

mod private {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
    impl Sealed for i32 {}
    impl Sealed for i64 {}
    impl Sealed for u8 {}
}

/// Numeric element types a container may hold.
///
/// Sealed: the set of element types is closed.
pub trait Element: Copy + Send + Sync + 'static + private::Sealed {
    const DTYPE: DType;

    fn to_f32(self) -> f32;

    /// Convert to a class index. Floats truncate toward zero (saturating, NaN is 0).
    fn to_i64(self) -> i64;

    #[doc(hidden)]
    fn wrap_array(array: ArrayD<Self>) -> NumericArray;

    #[doc(hidden)]
    fn wrap_vec(data: Vec<Self>) -> TensorData;
}

macro_rules! impl_element {
    ($ty:ty, $variant:ident) => {
        impl Element for $ty {
            const DTYPE: DType = DType::$variant;

            #[inline]
            fn to_f32(self) -> f32 {
                self as f32
            }

            #[inline]
            fn to_i64(self) -> i64 {
                self as i64
            }

            fn wrap_array(array: ArrayD<Self>) -> NumericArray {
                NumericArray::$variant(array)
            }

            fn wrap_vec(data: Vec<Self>) -> TensorData {
                TensorData::$variant(data)
            }
        }
    };
}

impl_element!(f32, F32);
impl_element!(f64, F64);
impl_element!(i32, I32);
impl_element!(i64, I64);
impl_element!(u8, U8);

// =============================================================================
// NumericArray
// =============================================================================

/// A dense n-dimensional array of any supported element type.
#[derive(Debug, Clone, PartialEq)]
pub enum NumericArray {
    F32(ArrayD<f32>),
    F64(ArrayD<f64>),
    I32(ArrayD<i32>),
    I64(ArrayD<i64>),
    U8(ArrayD<u8>),
}

/// Run `$body` with `$arr` bound to the inner array of every variant.
macro_rules! with_array {
    ($value:expr, $arr:ident => $body:expr) => {
        match $value {
            NumericArray::F32($arr) => $body,
            NumericArray::F64($arr) => $body,
            NumericArray::I32($arr) => $body,
            NumericArray::I64($arr) => $body,
            NumericArray::U8($arr) => $body,
        }
    };
}

impl NumericArray {
    /// Shape of the array.
    pub fn shape(&self) -> &[usize] {
        with_array!(self, a => a.shape())
    }

    /// Number of dimensions.
    pub fn ndim(&self) -> usize {
        with_array!(self, a => a.ndim())
    }

    /// Element type.
    pub fn dtype(&self) -> DType {
        match self {
            NumericArray::F32(_) => DType::F32,
            NumericArray::F64(_) => DType::F64,
            NumericArray::I32(_) => DType::I32,
            NumericArray::I64(_) => DType::I64,
            NumericArray::U8(_) => DType::U8,
        }
    }

    /// Convert to `f32`, keeping the shape.
    ///
    /// An `f32` array is moved through without copying.
    pub fn into_f32(self) -> ArrayD<f32> {
        match self {
            NumericArray::F32(a) => a,
            other => with_array!(other, a => a.mapv(Element::to_f32)),
        }
    }

    /// Convert to `i64` class indices, keeping the shape.
    pub fn into_i64(self) -> ArrayD<i64> {
        match self {
            NumericArray::I64(a) => a,
            other => with_array!(other, a => a.mapv(Element::to_i64)),
        }
    }
}

impl<T: Element, D: Dimension> From<Array<T, D>> for NumericArray {
    fn from(array: Array<T, D>) -> Self {
        T::wrap_array(array.into_dyn())
    }
}

// =============================================================================
// Container
// =============================================================================

/// An input container for features or targets.
#[derive(Debug, Clone, PartialEq)]
pub enum Container {
    /// Dense numeric array.
    NdArray(NumericArray),
    /// Framework-style tensor.
    Tensor(Tensor),
    /// Plain list of values with no shape. Always rejected.
    List(Vec<f64>),
}

impl Container {
    /// Short name of the container kind, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Container::NdArray(_) => "ndarray",
            Container::Tensor(_) => "tensor",
            Container::List(_) => "list",
        }
    }

    /// Shape, or `None` for containers without one.
    pub fn shape(&self) -> Option<&[usize]> {
        match self {
            Container::NdArray(a) => Some(a.shape()),
            Container::Tensor(t) => Some(t.shape()),
            Container::List(_) => None,
        }
    }

    /// Number of dimensions, or `None` for containers without a shape.
    pub fn ndim(&self) -> Option<usize> {
        self.shape().map(<[usize]>::len)
    }

    /// Returns true if this container kind can back a dataset.
    pub fn is_supported(&self) -> bool {
        matches!(self, Container::NdArray(_) | Container::Tensor(_))
    }

    /// Convert into the canonical numeric array.
    ///
    /// `role` only labels the error for unsupported kinds.
    pub fn into_numeric(self, role: Role) -> Result<NumericArray, DatasetError> {
        match self {
            Container::NdArray(a) => Ok(a),
            Container::Tensor(t) => t.into_array(),
            other => Err(DatasetError::UnsupportedContainerType {
                role,
                kind: other.kind(),
            }),
        }
    }
}

impl From<NumericArray> for Container {
    fn from(array: NumericArray) -> Self {
        Container::NdArray(array)
    }
}

impl<T: Element, D: Dimension> From<Array<T, D>> for Container {
    fn from(array: Array<T, D>) -> Self {
        Container::NdArray(array.into())
    }
}

/// Views are copied: a dataset never aliases caller buffers.
impl<'a, T: Element, D: Dimension> From<ArrayView<'a, T, D>> for Container {
    fn from(view: ArrayView<'a, T, D>) -> Self {
        Container::NdArray(view.to_owned().into())
    }
}

impl From<Tensor> for Container {
    fn from(tensor: Tensor) -> Self {
        Container::Tensor(tensor)
    }
}

impl From<Vec<f64>> for Container {
    fn from(values: Vec<f64>) -> Self {
        Container::List(values)
    }
}
