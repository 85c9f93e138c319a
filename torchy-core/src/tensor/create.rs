// src/tensor/create.rs

use crate::error::TorchyError;
use crate::ops::traits::TensorElement;
use crate::tensor::{utils, Tensor};

/// Element count of `shape`, checked before any buffer is allocated.
/// Shapes whose count or strides overflow `usize` are a `ConstructionError`.
fn element_count(shape: &[usize]) -> Result<usize, TorchyError> {
    match (utils::numel(shape), utils::calculate_strides(shape)) {
        (Some(numel), Some(_)) => Ok(numel),
        _ => {
            log::debug!("shape {:?} overflows usize", shape);
            Err(TorchyError::ConstructionError {
                data_len: 0,
                shape: shape.to_vec(),
            })
        }
    }
}

/// Creates a new tensor filled with zeros with the specified shape.
pub fn zeros<T: TensorElement>(shape: &[usize]) -> Result<Tensor<T>, TorchyError> {
    full(shape, T::zero())
}

/// Creates a new tensor filled with ones with the specified shape.
pub fn ones<T: TensorElement>(shape: &[usize]) -> Result<Tensor<T>, TorchyError> {
    full(shape, T::one())
}

/// Creates a new tensor filled with a specific value with the specified shape.
pub fn full<T: TensorElement>(shape: &[usize], value: T) -> Result<Tensor<T>, TorchyError> {
    let numel = element_count(shape)?;
    Tensor::new(vec![value; numel], shape.to_vec())
}

/// Creates a rank-0 tensor holding `value`.
pub fn scalar<T: TensorElement>(value: T) -> Result<Tensor<T>, TorchyError> {
    Tensor::new(vec![value], vec![])
}

/// Creates an `n x n` identity matrix.
pub fn eye<T: TensorElement>(n: usize) -> Result<Tensor<T>, TorchyError> {
    from_shape_fn(&[n, n], |idx| if idx[0] == idx[1] { T::one() } else { T::zero() })
}

/// Creates a tensor by calling `f` with the multi-index of every element,
/// in row-major order.
pub fn from_shape_fn<T, F>(shape: &[usize], mut f: F) -> Result<Tensor<T>, TorchyError>
where
    T: TensorElement,
    F: FnMut(&[usize]) -> T,
{
    let numel = element_count(shape)?;
    let data_vec: Vec<T> = (0..numel)
        .map(|offset| f(&utils::index_from_offset(offset, shape)))
        .collect();
    Tensor::new(data_vec, shape.to_vec())
}

/// Creates a rank-1 tensor with values from `start` (inclusive) to `end`
/// (exclusive) spaced by `step`. A negative `step` counts down.
///
/// # Errors
/// Returns `TorchyError::UnsupportedOperation` if `step` is zero or points away
/// from `end`.
pub fn arange<T: TensorElement>(start: T, end: T, step: T) -> Result<Tensor<T>, TorchyError> {
    if step == T::zero()
        || (end > start && step < T::zero())
        || (end < start && step > T::zero())
    {
        return Err(TorchyError::UnsupportedOperation(format!(
            "Invalid step {} for arange({}, {})",
            step, start, end
        )));
    }
    let counting_up = step > T::zero();
    let mut data_vec = Vec::new();
    let mut current = start;
    while (counting_up && current < end) || (!counting_up && current > end) {
        data_vec.push(current);
        // An integer step past the type's range also ends the sequence.
        match current.add_elem(step) {
            Some(next) => current = next,
            None => break,
        }
    }
    let len = data_vec.len();
    Tensor::new(data_vec, vec![len])
}

// Random creation routines, behind the `random` feature.

#[cfg(feature = "random")]
use rand::distributions::{uniform::SampleUniform, Distribution, Standard};
#[cfg(feature = "random")]
use rand::Rng;
#[cfg(feature = "random")]
use rand_distr::StandardNormal;

/// Creates a tensor with values drawn uniformly from `[0, 1)`.
#[cfg(feature = "random")]
pub fn rand<T>(shape: &[usize]) -> Result<Tensor<T>, TorchyError>
where
    T: TensorElement + num_traits::Float,
    Standard: Distribution<T>,
{
    let numel = element_count(shape)?;
    let mut rng = rand::thread_rng();
    let data_vec: Vec<T> = (0..numel).map(|_| rng.gen::<T>()).collect();
    Tensor::new(data_vec, shape.to_vec())
}

/// Creates a tensor with values drawn from the standard normal distribution.
#[cfg(feature = "random")]
pub fn randn<T>(shape: &[usize]) -> Result<Tensor<T>, TorchyError>
where
    T: TensorElement + num_traits::Float,
    StandardNormal: Distribution<T>,
{
    let numel = element_count(shape)?;
    let mut rng = rand::thread_rng();
    let data_vec: Vec<T> = (0..numel)
        .map(|_| StandardNormal.sample(&mut rng))
        .collect();
    Tensor::new(data_vec, shape.to_vec())
}

/// Creates a tensor with values drawn uniformly from `[low, high)`.
#[cfg(feature = "random")]
pub fn randint<T>(low: T, high: T, shape: &[usize]) -> Result<Tensor<T>, TorchyError>
where
    T: TensorElement + SampleUniform,
{
    if low >= high {
        return Err(TorchyError::UnsupportedOperation(format!(
            "randint requires low < high, got low={} high={}",
            low, high
        )));
    }
    let numel = element_count(shape)?;
    let mut rng = rand::thread_rng();
    let data_vec: Vec<T> = (0..numel).map(|_| rng.gen_range(low..high)).collect();
    Tensor::new(data_vec, shape.to_vec())
}

#[cfg(test)]
#[path = "create_test.rs"]
mod tests;
