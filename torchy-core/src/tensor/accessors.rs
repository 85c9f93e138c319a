// src/tensor/accessors.rs
use crate::{
    error::TorchyError,
    ops::traits::TensorElement,
    storage::Storage,
    tensor::{utils, Tensor},
};

impl<T> Tensor<T> {
    /// Returns the tensor's shape (dimensions).
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Returns the tensor's row-major strides.
    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    /// Returns the rank (number of dimensions) of the tensor. Scalars have rank 0.
    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    /// Returns the total number of elements in the tensor.
    pub fn numel(&self) -> usize {
        self.storage.len()
    }

    /// Read-only view of the backing storage. The tensor keeps ownership.
    pub fn storage(&self) -> &Storage<T> {
        &self.storage
    }

    /// The elements in flat row-major order.
    pub fn data(&self) -> &[T] {
        self.storage.as_slice()
    }

    /// Computes the flat storage offset of `index`.
    ///
    /// # Errors
    /// Returns `TorchyError::IndexOutOfBounds` if `index` does not have one
    /// coordinate per dimension or any coordinate is past its dimension.
    pub fn flat_offset(&self, index: &[usize]) -> Result<usize, TorchyError> {
        if !utils::is_valid_index(index, &self.shape) {
            log::debug!("index {:?} out of bounds for shape {:?}", index, self.shape);
            return Err(TorchyError::IndexOutOfBounds {
                index: index.to_vec(),
                shape: self.shape.clone(),
            });
        }
        Ok(utils::offset_from_index(index, &self.strides))
    }
}

impl<T: TensorElement> Tensor<T> {
    /// Returns the element at a multi-index, by value.
    ///
    /// ```
    /// use torchy_core::Tensor;
    ///
    /// let t = Tensor::new((1..=9).collect::<Vec<i32>>(), vec![3, 3]).unwrap();
    /// assert_eq!(t.element(&[0, 1]).unwrap(), 2);
    /// assert_eq!(t.element(&[0, 15]).unwrap_err().to_string(), "Index out of bounds.");
    /// ```
    pub fn element(&self, index: &[usize]) -> Result<T, TorchyError> {
        let offset = self.flat_offset(index)?;
        Ok(self.storage.get(offset))
    }

    /// Copies the elements into a new vector, in flat row-major order.
    pub fn to_vec(&self) -> Vec<T> {
        self.data().to_vec()
    }

    /// Extracts the single value of a tensor holding exactly one element.
    ///
    /// Returns `TorchyError::ShapeMismatch` for any other element count.
    pub fn item(&self) -> Result<T, TorchyError> {
        if self.numel() != 1 {
            return Err(TorchyError::ShapeMismatch {
                expected: vec![],
                actual: self.shape.clone(),
                operation: "item()".to_string(),
            });
        }
        Ok(self.storage.get(0))
    }
}
