use crate::error::TorchyError;
use crate::ops::traits::TensorElement;
use crate::ops::{apply_binary_op, apply_scalar_op, integer_overflow};
use crate::tensor::Tensor;
use num_traits::Zero;

/// Divides two elements, turning a missing integer quotient into an error.
fn checked_quotient<T: TensorElement>(x: T, y: T) -> Result<T, TorchyError> {
    x.div_elem(y).ok_or_else(|| {
        if y.is_zero() {
            log::debug!("division of {} by zero", x);
            TorchyError::DivisionByZero
        } else {
            integer_overflow(x, "/", y)
        }
    })
}

/// Element-wise division `a / b` of two tensors of identical shape.
///
/// Division follows the element type: integers truncate toward zero, floats
/// follow IEEE-754 (a zero divisor gives an infinity or NaN). Divisors are not
/// checked up front; an integer zero divisor is reported when it is reached and
/// no result is produced.
///
/// # Errors
/// - `TorchyError::ShapeMismatch` if the shapes differ.
/// - `TorchyError::DivisionByZero` for an integer zero divisor.
/// - `TorchyError::UnsupportedOperation` for an integer `MIN / -1` overflow.
pub fn div_op<T: TensorElement>(a: &Tensor<T>, b: &Tensor<T>) -> Result<Tensor<T>, TorchyError> {
    apply_binary_op(a, b, checked_quotient, "div_op")
}

/// Divides every element of `a` by `scalar`.
///
/// A zero `scalar` is rejected before any element is touched, for integer and
/// floating-point tensors alike.
///
/// # Errors
/// - `TorchyError::DivisionByZero` if `scalar` is zero.
/// - `TorchyError::UnsupportedOperation` for an integer `MIN / -1` overflow.
pub fn div_scalar_op<T: TensorElement>(a: &Tensor<T>, scalar: T) -> Result<Tensor<T>, TorchyError> {
    if scalar.is_zero() {
        log::debug!("div_scalar_op: zero divisor for tensor of shape {:?}", a.shape());
        return Err(TorchyError::DivisionByZero);
    }
    apply_scalar_op(a, scalar, checked_quotient, "div_scalar_op")
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
