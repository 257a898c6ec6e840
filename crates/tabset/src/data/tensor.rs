//! A minimal framework-style tensor: one contiguous row-major buffer and a shape.

use ndarray::{ArrayD, IxDyn};

use super::container::{DType, Element, NumericArray};
use super::error::DatasetError;

/// Contiguous element buffer of a [`Tensor`].
#[derive(Debug, Clone, PartialEq)]
pub enum TensorData {
    F32(Vec<f32>),
    F64(Vec<f64>),
    I32(Vec<i32>),
    I64(Vec<i64>),
    U8(Vec<u8>),
}

impl TensorData {
    fn len(&self) -> usize {
        match self {
            TensorData::F32(v) => v.len(),
            TensorData::F64(v) => v.len(),
            TensorData::I32(v) => v.len(),
            TensorData::I64(v) => v.len(),
            TensorData::U8(v) => v.len(),
        }
    }
}

/// Row-major tensor with a dynamic shape.
///
/// The buffer length always equals the product of the shape.
///
/// # Example
///
/// ```
/// use tabset::data::{DType, Tensor};
///
/// let t = Tensor::from_vec(vec![1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0], &[3, 2]).unwrap();
/// assert_eq!(t.shape(), &[3, 2]);
/// assert_eq!(t.dtype(), DType::F32);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Tensor {
    data: TensorData,
    shape: Vec<usize>,
}

impl Tensor {
    /// Create a tensor from a row-major buffer.
    ///
    /// # Errors
    ///
    /// [`DatasetError::TensorShape`] if `data.len()` is not the product of
    /// `shape`, or the product overflows `usize`.
    pub fn from_vec<T: Element>(data: Vec<T>, shape: &[usize]) -> Result<Self, DatasetError> {
        let numel = shape.iter().try_fold(1usize, |n, &d| n.checked_mul(d));
        if numel != Some(data.len()) {
            return Err(DatasetError::TensorShape {
                len: data.len(),
                shape: shape.to_vec(),
            });
        }
        Ok(Self {
            data: T::wrap_vec(data),
            shape: shape.to_vec(),
        })
    }

    /// Create a one-dimensional tensor.
    pub fn from_slice<T: Element>(data: &[T]) -> Self {
        Self {
            shape: vec![data.len()],
            data: T::wrap_vec(data.to_vec()),
        }
    }

    /// Create a zero-dimensional tensor holding one value.
    pub fn scalar<T: Element>(value: T) -> Self {
        Self {
            data: T::wrap_vec(vec![value]),
            shape: Vec::new(),
        }
    }

    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    #[inline]
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Number of elements.
    #[inline]
    pub fn numel(&self) -> usize {
        self.data.len()
    }

    pub fn dtype(&self) -> DType {
        match &self.data {
            TensorData::F32(_) => DType::F32,
            TensorData::F64(_) => DType::F64,
            TensorData::I32(_) => DType::I32,
            TensorData::I64(_) => DType::I64,
            TensorData::U8(_) => DType::U8,
        }
    }

    /// Move the buffer into an n-dimensional array of the same shape.
    pub fn into_array(self) -> Result<NumericArray, DatasetError> {
        let shape = &self.shape;
        let array = match self.data {
            TensorData::F32(v) => NumericArray::F32(shaped(v, shape)?),
            TensorData::F64(v) => NumericArray::F64(shaped(v, shape)?),
            TensorData::I32(v) => NumericArray::I32(shaped(v, shape)?),
            TensorData::I64(v) => NumericArray::I64(shaped(v, shape)?),
            TensorData::U8(v) => NumericArray::U8(shaped(v, shape)?),
        };
        Ok(array)
    }
}

fn shaped<T>(data: Vec<T>, shape: &[usize]) -> Result<ArrayD<T>, DatasetError> {
    let len = data.len();
    ArrayD::from_shape_vec(IxDyn(shape), data).map_err(|_| DatasetError::TensorShape {
        len,
        shape: shape.to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_must_match_buffer() {
        let err = Tensor::from_vec(vec![1i64, 2, 3], &[2, 2]).unwrap_err();
        assert_eq!(
            err,
            DatasetError::TensorShape {
                len: 3,
                shape: vec![2, 2]
            }
        );
    }

    #[test]
    fn overflowing_shape_is_rejected() {
        let err = Tensor::from_vec(Vec::<f32>::new(), &[usize::MAX, 2]).unwrap_err();
        assert_eq!(
            err,
            DatasetError::TensorShape {
                len: 0,
                shape: vec![usize::MAX, 2]
            }
        );

        // Wraps to zero with unchecked multiplication.
        let err = Tensor::from_vec(Vec::<u8>::new(), &[1 << (usize::BITS - 1), 2]).unwrap_err();
        assert!(matches!(err, DatasetError::TensorShape { len: 0, .. }));
    }

    #[test]
    fn zero_sized_shapes_are_empty() {
        let t = Tensor::from_vec(Vec::<i64>::new(), &[0, 5]).unwrap();
        assert_eq!(t.numel(), 0);
        assert_eq!(t.shape(), &[0, 5]);
    }

    #[test]
    fn scalar_has_no_dimensions() {
        let t = Tensor::scalar(3.5f64);
        assert_eq!(t.ndim(), 0);
        assert_eq!(t.numel(), 1);
        assert_eq!(t.dtype(), DType::F64);
    }

    #[test]
    fn into_array_is_row_major() {
        let t = Tensor::from_vec(vec![1i32, 2, 3, 4, 5, 6], &[2, 3]).unwrap();
        let NumericArray::I32(a) = t.into_array().unwrap() else {
            panic!("expected int32 array");
        };
        assert_eq!(a.shape(), &[2, 3]);
        let a = a.into_dimensionality::<ndarray::Ix2>().unwrap();
        assert_eq!(a[[1, 0]], 4);
        assert_eq!(a[[0, 2]], 3);
    }
}
