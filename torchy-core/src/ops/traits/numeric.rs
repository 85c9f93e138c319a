use num_traits::Num;
use std::fmt::{Debug, Display};

use crate::types::DType;

/// A trait representing the numeric types a `Tensor` can hold.
///
/// It bounds the element type of every kernel in this crate: the arithmetic
/// operators come from `Num`, `Display` feeds the canonical repr and `DTYPE`
/// gives the runtime identity of the type.
pub trait TensorElement:
    Num // Zero, One, Add, Sub, Mul, Div, Rem, PartialEq
    + Copy
    + Default
    + PartialOrd
    + Debug
    + Display
    + Send
    + Sync
    + 'static
{
    /// Runtime tag for this element type.
    const DTYPE: DType;

    /// `self + rhs`, or `None` if an integer result overflows. Floats always return `Some`.
    fn add_elem(self, rhs: Self) -> Option<Self>;

    /// `self - rhs`, or `None` if an integer result overflows. Floats always return `Some`.
    fn sub_elem(self, rhs: Self) -> Option<Self>;

    /// `self * rhs`, or `None` if an integer result overflows. Floats always return `Some`.
    fn mul_elem(self, rhs: Self) -> Option<Self>;

    /// Divides one element by another following the type's own semantics.
    ///
    /// Integers truncate toward zero and return `None` when the quotient does not
    /// exist (zero divisor, or `MIN / -1`). Floats always return `Some` and follow
    /// IEEE-754, so a zero divisor yields an infinity or NaN.
    fn div_elem(self, rhs: Self) -> Option<Self>;
}

macro_rules! impl_tensor_element_int {
    ($($t:ty => $dtype:ident),* $(,)?) => {
        $(
            impl TensorElement for $t {
                const DTYPE: DType = DType::$dtype;

                #[inline]
                fn add_elem(self, rhs: Self) -> Option<Self> {
                    self.checked_add(rhs)
                }

                #[inline]
                fn sub_elem(self, rhs: Self) -> Option<Self> {
                    self.checked_sub(rhs)
                }

                #[inline]
                fn mul_elem(self, rhs: Self) -> Option<Self> {
                    self.checked_mul(rhs)
                }

                #[inline]
                fn div_elem(self, rhs: Self) -> Option<Self> {
                    self.checked_div(rhs)
                }
            }
        )*
    };
}

macro_rules! impl_tensor_element_float {
    ($($t:ty => $dtype:ident),* $(,)?) => {
        $(
            impl TensorElement for $t {
                const DTYPE: DType = DType::$dtype;

                #[inline]
                fn add_elem(self, rhs: Self) -> Option<Self> {
                    Some(self + rhs)
                }

                #[inline]
                fn sub_elem(self, rhs: Self) -> Option<Self> {
                    Some(self - rhs)
                }

                #[inline]
                fn mul_elem(self, rhs: Self) -> Option<Self> {
                    Some(self * rhs)
                }

                #[inline]
                fn div_elem(self, rhs: Self) -> Option<Self> {
                    Some(self / rhs)
                }
            }
        )*
    };
}

impl_tensor_element_int!(
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
);

impl_tensor_element_float!(f32 => F32, f64 => F64);
