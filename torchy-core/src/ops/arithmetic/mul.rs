use crate::error::TorchyError;
use crate::ops::traits::TensorElement;
use crate::ops::{apply_binary_op, apply_scalar_op, integer_overflow};
use crate::tensor::Tensor;

fn checked_mul<T: TensorElement>(x: T, y: T) -> Result<T, TorchyError> {
    x.mul_elem(y).ok_or_else(|| integer_overflow(x, "*", y))
}

/// Element-wise (Hadamard) product of two tensors of identical shape.
///
/// # Errors
/// - `TorchyError::ShapeMismatch` if the shapes differ.
/// - `TorchyError::UnsupportedOperation` if an integer result overflows. Floats
///   follow IEEE-754 and never fail here.
pub fn mul_op<T: TensorElement>(a: &Tensor<T>, b: &Tensor<T>) -> Result<Tensor<T>, TorchyError> {
    apply_binary_op(a, b, checked_mul, "mul_op")
}

/// Multiplies every element of `a` by `scalar`.
pub fn mul_scalar_op<T: TensorElement>(a: &Tensor<T>, scalar: T) -> Result<Tensor<T>, TorchyError> {
    apply_scalar_op(a, scalar, checked_mul, "mul_scalar_op")
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
