// src/tensor/mod.rs

use crate::error::TorchyError;
use crate::ops::traits::TensorElement;
use crate::storage::Storage;
use crate::types::DType;

mod accessors;
mod arithmetic_methods;
mod debug;
mod traits;

pub mod create;
pub mod utils;

pub use create::{arange, eye, from_shape_fn, full, ones, scalar, zeros};
#[cfg(feature = "random")]
pub use create::{rand, randint, randn};

/// Represents a multi-dimensional array (tensor).
///
/// A `Tensor` owns its shape, its row-major strides and the [`Storage`] holding
/// the elements in flat order. Ownership is exclusive: cloning a tensor copies the
/// storage, and every arithmetic operation allocates a fresh result, so two
/// tensors never alias the same buffer.
///
/// Invariants, established by every constructor (shapes whose element count or
/// strides would overflow `usize` are rejected):
/// - `shape.len() == strides.len()`
/// - `storage.len() == shape.iter().product()` (1 for the empty shape)
/// - `strides[rank - 1] == 1` and `strides[i] == strides[i + 1] * shape[i + 1]`
#[derive(Clone)]
pub struct Tensor<T> {
    pub(crate) shape: Vec<usize>,
    pub(crate) strides: Vec<usize>,
    pub(crate) storage: Storage<T>,
}

impl<T: TensorElement> Tensor<T> {
    /// Creates a new Tensor from flat row-major data and a shape.
    ///
    /// This is the primary constructor for creating tensors from raw data.
    /// It takes ownership of the data vector and calculates contiguous strides.
    /// An empty `shape` creates a scalar tensor, which needs exactly one value.
    ///
    /// # Errors
    /// Returns `TorchyError::ConstructionError` if `data_vec.len()` does not match
    /// the number of elements implied by `shape`, or if that number or any stride
    /// does not fit in `usize`.
    pub fn new(data_vec: Vec<T>, shape: Vec<usize>) -> Result<Self, TorchyError> {
        let data_len = data_vec.len();
        let layout = utils::numel(&shape).zip(utils::calculate_strides(&shape));
        let strides = match layout {
            Some((numel, strides)) if numel == data_len => strides,
            Some((numel, _)) => {
                log::debug!(
                    "Tensor::new: got {} values for shape {:?}, expected {}",
                    data_len,
                    shape,
                    numel
                );
                return Err(TorchyError::ConstructionError { data_len, shape });
            }
            None => {
                log::debug!("Tensor::new: shape {:?} overflows usize", shape);
                return Err(TorchyError::ConstructionError { data_len, shape });
            }
        };
        let storage = Storage::from_vec(data_len, data_vec)?;
        Ok(Self::from_parts(storage, shape, strides))
    }

    /// Returns the element type tag of this tensor.
    pub fn dtype(&self) -> DType {
        T::DTYPE
    }
}

impl<T> Tensor<T> {
    /// Assembles a tensor from parts already known to be consistent: `storage`
    /// holds exactly the elements of `shape` and `strides` are its row-major strides.
    /// Kernels use this to wrap freshly computed buffers.
    pub(crate) fn from_parts(storage: Storage<T>, shape: Vec<usize>, strides: Vec<usize>) -> Self {
        debug_assert_eq!(Some(storage.len()), utils::numel(&shape));
        debug_assert_eq!(Some(&strides), utils::calculate_strides(&shape).as_ref());
        Tensor {
            shape,
            strides,
            storage,
        }
    }

    /// Same as [`Tensor::from_parts`] for a raw result vector.
    pub(crate) fn from_vec_unchecked(data: Vec<T>, shape: Vec<usize>, strides: Vec<usize>) -> Self {
        Self::from_parts(Storage::from_vec_unchecked(data), shape, strides)
    }
}
