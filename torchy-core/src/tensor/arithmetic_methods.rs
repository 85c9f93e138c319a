use crate::{
    error::TorchyError,
    ops::{arithmetic, linalg},
    ops::traits::TensorElement,
    tensor::Tensor,
};

impl<T: TensorElement> Tensor<T> {
    /// Element-wise sum `self + other`.
    ///
    /// Both tensors must have exactly the same shape; no broadcasting is done.
    /// Neither operand is modified.
    ///
    /// # Errors
    ///
    /// Returns `TorchyError::ShapeMismatch` if the shapes differ, and
    /// `TorchyError::UnsupportedOperation` if an integer sum overflows.
    ///
    /// # Examples
    ///
    /// ```
    /// # use torchy_core::{Tensor, TorchyError};
    /// # fn main() -> Result<(), TorchyError> {
    /// let a = Tensor::new(vec![1, 2, 3, 4], vec![2, 2])?;
    /// let b = Tensor::new(vec![10, 20, 30, 40], vec![2, 2])?;
    /// assert_eq!(a.add(&b)?.repr(), "Tensor({2, 2}, {11, 22, 33, 44})");
    /// # Ok(())
    /// # }
    /// ```
    pub fn add(&self, other: &Tensor<T>) -> Result<Tensor<T>, TorchyError> {
        arithmetic::add_op(self, other)
    }

    /// Element-wise difference `self - other`. Shapes must match.
    pub fn sub(&self, other: &Tensor<T>) -> Result<Tensor<T>, TorchyError> {
        arithmetic::sub_op(self, other)
    }

    /// Element-wise (Hadamard) product `self * other`. Shapes must match.
    pub fn mul(&self, other: &Tensor<T>) -> Result<Tensor<T>, TorchyError> {
        arithmetic::mul_op(self, other)
    }

    /// Element-wise quotient `self / other`.
    ///
    /// Integer tensors truncate toward zero and fail with
    /// `TorchyError::DivisionByZero` on a zero divisor. Float tensors follow IEEE-754.
    pub fn div(&self, other: &Tensor<T>) -> Result<Tensor<T>, TorchyError> {
        arithmetic::div_op(self, other)
    }

    /// Adds `scalar` to every element.
    pub fn add_scalar(&self, scalar: T) -> Result<Tensor<T>, TorchyError> {
        arithmetic::add_scalar_op(self, scalar)
    }

    /// Subtracts `scalar` from every element.
    pub fn sub_scalar(&self, scalar: T) -> Result<Tensor<T>, TorchyError> {
        arithmetic::sub_scalar_op(self, scalar)
    }

    pub fn mul_scalar(&self, scalar: T) -> Result<Tensor<T>, TorchyError> {
        arithmetic::mul_scalar_op(self, scalar)
    }

    /// Divides every element by `scalar`.
    ///
    /// # Errors
    ///
    /// Returns `TorchyError::DivisionByZero` if `scalar` is zero, whatever the element type.
    pub fn div_scalar(&self, scalar: T) -> Result<Tensor<T>, TorchyError> {
        arithmetic::div_scalar_op(self, scalar)
    }

    /// Matrix product of two rank-2 tensors: `[m, k] @ [k, n] -> [m, n]`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use torchy_core::{Tensor, TorchyError};
    /// # fn main() -> Result<(), TorchyError> {
    /// let a = Tensor::new(vec![1, 2, 3, 4, 5, 6], vec![2, 3])?;
    /// let b = Tensor::new(vec![7, 8, 9, 10, 11, 12], vec![3, 2])?;
    /// assert_eq!(a.matmul(&b)?.to_vec(), vec![58, 64, 139, 154]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn matmul(&self, other: &Tensor<T>) -> Result<Tensor<T>, TorchyError> {
        linalg::matmul_op(self, other)
    }
}
