use crate::error::TorchyError;
use crate::ops::integer_overflow;
use crate::ops::traits::TensorElement;
use crate::tensor::Tensor;

/// Performs matrix multiplication C = A @ B.
/// Only 2D tensors (matrices) are supported.
/// A: [M, K], B: [K, N] -> C: [M, N]
///
/// Each output element is accumulated from `T::zero()` in the element type.
///
/// # Errors
/// - `TorchyError::ShapeMismatch` with operation `"matmul (rank check)"` if either
///   operand is not rank 2.
/// - `TorchyError::ShapeMismatch` with operation `"matmul (inner dim)"` if
///   `A.shape[1] != B.shape[0]`.
/// - `TorchyError::UnsupportedOperation` if `M * N` does not fit in `usize` (possible
///   when `K == 0`), or if an integer product or sum overflows.
pub fn matmul_op<T: TensorElement>(a: &Tensor<T>, b: &Tensor<T>) -> Result<Tensor<T>, TorchyError> {
    let a_shape = a.shape();
    let b_shape = b.shape();
    log::trace!("matmul_op: {:?} @ {:?}", a_shape, b_shape);

    if a_shape.len() != 2 || b_shape.len() != 2 {
        log::debug!("matmul_op: operands must be rank 2, got {:?} and {:?}", a_shape, b_shape);
        return Err(TorchyError::shape_mismatch(a_shape, b_shape, "matmul (rank check)"));
    }
    if a_shape[1] != b_shape[0] {
        log::debug!(
            "matmul_op: inner dimensions differ ({} != {})",
            a_shape[1],
            b_shape[0]
        );
        return Err(TorchyError::shape_mismatch(
            &[a_shape[0], a_shape[1]],
            &[b_shape[0], b_shape[1]],
            "matmul (inner dim)",
        ));
    }

    let m = a_shape[0];
    let k = a_shape[1]; // == b_shape[0]
    let n = b_shape[1];

    let output_len = m.checked_mul(n).ok_or_else(|| {
        log::debug!("matmul_op: output shape [{}, {}] overflows usize", m, n);
        TorchyError::UnsupportedOperation(format!(
            "matmul output shape [{}, {}] is too large",
            m, n
        ))
    })?;

    let a_data = a.data();
    let b_data = b.data();
    let mut output_data = vec![T::zero(); output_len];

    for i in 0..m {
        for j in 0..n {
            let mut sum = T::zero();
            for l in 0..k {
                let (x, y) = (a_data[i * k + l], b_data[l * n + j]);
                let product = x.mul_elem(y).ok_or_else(|| integer_overflow(x, "*", y))?;
                sum = sum
                    .add_elem(product)
                    .ok_or_else(|| integer_overflow(sum, "+", product))?;
            }
            output_data[i * n + j] = sum;
        }
    }

    Ok(Tensor::from_vec_unchecked(output_data, vec![m, n], vec![n, 1]))
}

#[cfg(test)]
#[path = "matmul_test.rs"]
mod tests;
