// src/tensor/traits.rs

use crate::ops::traits::TensorElement;
use crate::tensor::Tensor;
use std::fmt;

impl<T: TensorElement> fmt::Display for Tensor<T> {
    /// Formats the tensor with its canonical repr.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.repr())
    }
}

impl<T: PartialEq> PartialEq for Tensor<T> {
    /// Two tensors are equal when they have the same shape and the same elements.
    /// Strides follow from the shape, so they are not compared.
    fn eq(&self, other: &Self) -> bool {
        self.shape == other.shape && self.storage.as_slice() == other.storage.as_slice()
    }
}
