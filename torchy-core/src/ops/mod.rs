//! # Tensor Operations Module (`ops`)
//!
//! Operations are grouped by family:
//!
//! - [`arithmetic`]: element-wise `add`, `sub`, `mul`, `div` between two tensors of the
//!   same shape, their `*_scalar` counterparts, and the `std::ops` operators.
//! - [`linalg`]: matrix multiplication.
//! - [`traits`]: the [`TensorElement`](traits::TensorElement) bound shared by every kernel.
//!
//! Each operation has an `xxx_op` function doing the work; the methods on `Tensor`
//! call into them. Every operation reads its operands and writes a freshly allocated
//! result, so inputs are never modified and a failed operation leaves nothing behind.

pub mod arithmetic;
pub mod linalg;
pub mod traits;

use crate::error::TorchyError;
use crate::tensor::Tensor;
use traits::TensorElement;

/// Error for an integer element operation whose result does not fit the type.
pub(crate) fn integer_overflow<T: TensorElement>(x: T, symbol: &str, y: T) -> TorchyError {
    log::debug!("integer overflow in {} {} {}", x, symbol, y);
    TorchyError::UnsupportedOperation(format!("integer overflow in {} {} {}", x, symbol, y))
}

/// Applies a binary element-wise operation to two tensors of identical shape.
///
/// The closure receives the elements at the same flat offset of `a` and `b`.
/// Any error it returns aborts the whole operation.
///
/// # Errors
/// Returns `TorchyError::ShapeMismatch` if the shapes differ. No broadcasting is done.
pub(crate) fn apply_binary_op<T, F>(
    a: &Tensor<T>,
    b: &Tensor<T>,
    mut op: F,
    op_name: &str,
) -> Result<Tensor<T>, TorchyError>
where
    T: TensorElement,
    F: FnMut(T, T) -> Result<T, TorchyError>,
{
    log::trace!("{}: {:?} with {:?}", op_name, a.shape(), b.shape());

    if a.shape() != b.shape() {
        log::debug!(
            "{}: rejecting operands of shapes {:?} and {:?}",
            op_name,
            a.shape(),
            b.shape()
        );
        return Err(TorchyError::shape_mismatch(a.shape(), b.shape(), op_name));
    }

    let result_data = a
        .data()
        .iter()
        .zip(b.data())
        .map(|(&x, &y)| op(x, y))
        .collect::<Result<Vec<T>, TorchyError>>()?;

    Ok(Tensor::from_vec_unchecked(
        result_data,
        a.shape().to_vec(),
        a.strides().to_vec(),
    ))
}

/// Applies an element-wise operation between every element of `a` and one scalar.
pub(crate) fn apply_scalar_op<T, F>(
    a: &Tensor<T>,
    scalar: T,
    mut op: F,
    op_name: &str,
) -> Result<Tensor<T>, TorchyError>
where
    T: TensorElement,
    F: FnMut(T, T) -> Result<T, TorchyError>,
{
    log::trace!("{}: {:?} with scalar {}", op_name, a.shape(), scalar);

    let result_data = a
        .data()
        .iter()
        .map(|&x| op(x, scalar))
        .collect::<Result<Vec<T>, TorchyError>>()?;

    Ok(Tensor::from_vec_unchecked(
        result_data,
        a.shape().to_vec(),
        a.strides().to_vec(),
    ))
}
