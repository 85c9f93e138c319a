// src/storage.rs
use crate::error::TorchyError;
use crate::ops::traits::TensorElement;
use crate::types::DType;

/// The flat, contiguous buffer underlying a `Tensor`.
///
/// A `Storage` has a fixed length for its whole lifetime: it is created once,
/// either zero-filled or from an explicit value sequence, and is never resized.
/// It knows nothing about shapes, so offsets are not bounds-checked against
/// any dimension; that is the owning tensor's job.
#[derive(Debug, Clone, PartialEq)]
pub struct Storage<T> {
    data: Vec<T>,
}

impl<T: TensorElement> Storage<T> {
    /// Creates a storage of `len` zero-valued elements.
    pub fn new(len: usize) -> Self {
        Storage {
            data: vec![T::zero(); len],
        }
    }

    /// Creates a storage of `len` elements from `values`.
    ///
    /// # Errors
    /// Returns `TorchyError::ConstructionError` if `values.len() != len`.
    pub fn from_vec(len: usize, values: Vec<T>) -> Result<Self, TorchyError> {
        if values.len() != len {
            return Err(TorchyError::ConstructionError {
                data_len: values.len(),
                shape: vec![len],
            });
        }
        Ok(Storage { data: values })
    }

    /// Returns the element at flat `offset`.
    ///
    /// # Panics
    /// Panics if `offset >= self.len()`.
    #[inline]
    pub fn get(&self, offset: usize) -> T {
        self.data[offset]
    }

    /// Overwrites the element at flat `offset`.
    ///
    /// # Panics
    /// Panics if `offset >= self.len()`.
    #[inline]
    pub fn set(&mut self, offset: usize, value: T) {
        self.data[offset] = value;
    }

    /// Returns the element type tag.
    pub fn dtype(&self) -> DType {
        T::DTYPE
    }
}

impl<T> Storage<T> {
    /// Wraps an already validated buffer. Used by tensor constructors and kernels
    /// that have checked the length themselves.
    pub(crate) fn from_vec_unchecked(data: Vec<T>) -> Self {
        Storage { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Read-only view of the elements in flat order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consumes the storage and returns the underlying vector.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

#[cfg(test)]
#[path = "storage_test.rs"]
mod tests;
