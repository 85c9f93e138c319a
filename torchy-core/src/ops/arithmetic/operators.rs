//! `std::ops` operators on tensor references.
//!
//! Every operator returns `Result<Tensor<T>, TorchyError>` so shape mismatches
//! and zero divisors surface to the caller instead of panicking:
//!
//! ```
//! use torchy_core::Tensor;
//!
//! let a = Tensor::new(vec![1, 2, 3, 4], vec![2, 2]).unwrap();
//! let b: Tensor<i32> = (&a + &a).unwrap();
//! assert_eq!((&b * 3).unwrap().repr(), "Tensor({2, 2}, {6, 12, 18, 24})");
//! assert!((&a / 0).is_err());
//! ```

use std::ops::{Add, Div, Mul, Sub};

use super::{
    add_op, add_scalar_op, div_op, div_scalar_op, mul_op, mul_scalar_op, sub_op, sub_scalar_op,
};
use crate::error::TorchyError;
use crate::ops::traits::TensorElement;
use crate::tensor::Tensor;

macro_rules! impl_tensor_binary_op {
    ($trait:ident, $method:ident, $op_fn:ident) => {
        impl<'a, 'b, T: TensorElement> $trait<&'b Tensor<T>> for &'a Tensor<T> {
            type Output = Result<Tensor<T>, TorchyError>;

            fn $method(self, rhs: &'b Tensor<T>) -> Self::Output {
                $op_fn(self, rhs)
            }
        }
    };
}

impl_tensor_binary_op!(Add, add, add_op);
impl_tensor_binary_op!(Sub, sub, sub_op);
impl_tensor_binary_op!(Mul, mul, mul_op);
impl_tensor_binary_op!(Div, div, div_op);

// Scalar right-hand sides are implemented per primitive so they cannot overlap
// with the tensor/tensor impls above.
macro_rules! impl_tensor_scalar_ops {
    ($($t:ty),* $(,)?) => {
        $(
            impl<'a> Add<$t> for &'a Tensor<$t> {
                type Output = Result<Tensor<$t>, TorchyError>;

                fn add(self, rhs: $t) -> Self::Output {
                    add_scalar_op(self, rhs)
                }
            }

            impl<'a> Sub<$t> for &'a Tensor<$t> {
                type Output = Result<Tensor<$t>, TorchyError>;

                fn sub(self, rhs: $t) -> Self::Output {
                    sub_scalar_op(self, rhs)
                }
            }

            impl<'a> Mul<$t> for &'a Tensor<$t> {
                type Output = Result<Tensor<$t>, TorchyError>;

                fn mul(self, rhs: $t) -> Self::Output {
                    mul_scalar_op(self, rhs)
                }
            }

            impl<'a> Div<$t> for &'a Tensor<$t> {
                type Output = Result<Tensor<$t>, TorchyError>;

                fn div(self, rhs: $t) -> Self::Output {
                    div_scalar_op(self, rhs)
                }
            }
        )*
    };
}

impl_tensor_scalar_ops!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);
