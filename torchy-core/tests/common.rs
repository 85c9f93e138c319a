use torchy_core::{Tensor, TensorElement};

// Helper function to create a tensor for testing.
// Added allow(dead_code) because usage across different test crates isn't detected easily.
#[allow(dead_code)]
pub(crate) fn create_test_tensor<T: TensorElement>(data: Vec<T>, shape: Vec<usize>) -> Tensor<T> {
    Tensor::new(data, shape).expect("Test tensor creation failed")
}

/// The 3x3 matrices used throughout the arithmetic tests.
#[allow(dead_code)]
pub(crate) fn descending_3x3() -> Tensor<i32> {
    create_test_tensor(vec![9, 8, 7, 6, 5, 4, 3, 2, 1], vec![3, 3])
}

#[allow(dead_code)]
pub(crate) fn ascending_3x3() -> Tensor<i32> {
    create_test_tensor(vec![1, 2, 3, 4, 5, 6, 7, 8, 9], vec![3, 3])
}
