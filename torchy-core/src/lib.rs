//! # torchy-core
//!
//! A small n-dimensional tensor library.
//!
//! A [`Tensor`] owns a flat, row-major [`Storage`] together with its shape and
//! strides. Tensors are generic over their element type (any primitive integer
//! or float, see [`TensorElement`]) and support:
//!
//! - construction from flat data and a shape, plus the helpers in [`tensor::create`],
//! - bounds-checked element access by multi-index,
//! - element-wise `add`/`sub`/`mul`/`div` with another tensor of the same shape or a scalar,
//! - 2D matrix multiplication,
//! - a compact textual form via [`Tensor::repr`].
//!
//! Every fallible operation returns `Result<_, TorchyError>`.
//!
//! ```
//! use torchy_core::{Tensor, TorchyError};
//!
//! # fn main() -> Result<(), TorchyError> {
//! let x = Tensor::new(vec![1.0f32, 2.0, 3.0, 4.0], vec![2, 2])?;
//! let y = x.mul_scalar(2.0)?.add(&x)?;
//! assert_eq!(y.element(&[1, 1])?, 12.0);
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! - `random` (default): random tensor constructors backed by `rand` and `rand_distr`.

pub mod error;
pub mod ops;
pub mod storage;
pub mod tensor;
pub mod types;

pub use error::TorchyError;
pub use ops::traits::TensorElement;
pub use storage::Storage;
pub use tensor::Tensor;
pub use types::DType;

// Re-export traits required by public functions/structs
pub use num_traits;
