use thiserror::Error;

/// Custom error type for the torchy tensor core.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum TorchyError {
    /// The number of values handed to a constructor does not match the element
    /// count implied by the shape (or the declared storage length).
    #[error("Tensor creation error: data length {data_len} does not match shape {shape:?}")]
    ConstructionError { data_len: usize, shape: Vec<usize> },

    /// A multi-index has the wrong rank or a coordinate past its dimension.
    /// The message is fixed; the fields carry the offending index for inspection.
    #[error("Index out of bounds.")]
    IndexOutOfBounds { index: Vec<usize>, shape: Vec<usize> },

    #[error("Shape mismatch: expected {expected:?}, got {actual:?} during operation {operation}")]
    ShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
        operation: String,
    },

    #[error("Division by zero error")]
    DivisionByZero,

    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),
}

impl TorchyError {
    /// Builds a `ShapeMismatch` from borrowed shapes.
    pub(crate) fn shape_mismatch(expected: &[usize], actual: &[usize], operation: &str) -> Self {
        TorchyError::ShapeMismatch {
            expected: expected.to_vec(),
            actual: actual.to_vec(),
            operation: operation.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_out_of_bounds_message_is_fixed() {
        let err = TorchyError::IndexOutOfBounds {
            index: vec![0, 15],
            shape: vec![3, 3],
        };
        assert_eq!(err.to_string(), "Index out of bounds.");
    }

    #[test]
    fn test_shape_mismatch_helper() {
        let err = TorchyError::shape_mismatch(&[2, 2], &[3], "add_op");
        assert_eq!(
            err.to_string(),
            "Shape mismatch: expected [2, 2], got [3] during operation add_op"
        );
    }
}
