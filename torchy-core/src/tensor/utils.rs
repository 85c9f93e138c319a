/// Calculates the strides for a given shape.
/// Strides represent the number of elements to skip in the flattened data array
/// to move one step along each dimension.
///
/// Returns `None` if a stride does not fit in `usize`. This can happen even when
/// the shape holds no elements, e.g. `[0, usize::MAX, 2]`.
///
/// Example:
/// shape = [2, 3] -> strides = [3, 1]
/// shape = [2, 2, 2] -> strides = [4, 2, 1]
pub fn calculate_strides(shape: &[usize]) -> Option<Vec<usize>> {
    if shape.is_empty() {
        return Some(vec![]);
    }
    let rank = shape.len();
    let mut strides = vec![1usize; rank];
    for i in (0..rank - 1).rev() {
        strides[i] = strides[i + 1].checked_mul(shape[i + 1])?;
    }
    Some(strides)
}

/// Number of elements described by `shape`. The empty shape (a scalar) holds one.
/// Returns `None` if the count does not fit in `usize`.
#[inline]
pub fn numel(shape: &[usize]) -> Option<usize> {
    if shape.contains(&0) {
        return Some(0);
    }
    shape.iter().try_fold(1usize, |acc, &dim| acc.checked_mul(dim))
}

/// Returns `true` when `index` addresses an element of `shape`:
/// same rank, and every coordinate strictly below its dimension.
pub fn is_valid_index(index: &[usize], shape: &[usize]) -> bool {
    index.len() == shape.len() && index.iter().zip(shape).all(|(&i, &dim)| i < dim)
}

/// Flat offset of a multi-index under the given strides. Does not validate.
#[inline]
pub fn offset_from_index(index: &[usize], strides: &[usize]) -> usize {
    index.iter().zip(strides).map(|(&i, &stride)| i * stride).sum()
}

/// Converts a flat offset back to its multi-index for a contiguous row-major shape.
pub fn index_from_offset(mut offset: usize, shape: &[usize]) -> Vec<usize> {
    let mut coord = vec![0; shape.len()];
    for dim in (0..shape.len()).rev() {
        let size = shape[dim];
        if size > 0 {
            coord[dim] = offset % size;
            offset /= size;
        }
    }
    coord
}
