// Element-wise arithmetic, tensor/tensor and tensor/scalar
pub mod add;
pub mod div;
pub mod mul;
pub mod sub;

mod operators;

pub use add::{add_op, add_scalar_op};
pub use div::{div_op, div_scalar_op};
pub use mul::{mul_op, mul_scalar_op};
pub use sub::{sub_op, sub_scalar_op};
