use super::*;
use approx::assert_relative_eq;

#[test]
fn test_matmul_forward() -> Result<(), TorchyError> {
    let a = Tensor::new(vec![1.0f64, 2.0, 3.0, 4.0], vec![2, 2])?;
    let b = Tensor::new(vec![5.0f64, 6.0, 7.0, 8.0], vec![2, 2])?;
    let output = matmul_op(&a, &b)?;
    assert_eq!(output.shape(), &[2, 2]);
    assert_relative_eq!(output.data(), [19.0, 22.0, 43.0, 50.0].as_slice(), epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_matmul_forward_non_square() -> Result<(), TorchyError> {
    let a = Tensor::new(vec![1, 2, 3, 4, 5, 6], vec![2, 3])?;
    let b = Tensor::new(vec![7, 8, 9, 10, 11, 12], vec![3, 2])?;
    let output = matmul_op(&a, &b)?;
    assert_eq!(output.repr(), "Tensor({2, 2}, {58, 64, 139, 154})");
    Ok(())
}

#[test]
fn test_matmul_vector_shapes() -> Result<(), TorchyError> {
    // [1, 3] @ [3, 1] collapses to a single element.
    let row = Tensor::new(vec![1, 2, 3], vec![1, 3])?;
    let col = Tensor::new(vec![4, 5, 6], vec![3, 1])?;
    let dot = matmul_op(&row, &col)?;
    assert_eq!(dot.shape(), &[1, 1]);
    assert_eq!(dot.item()?, 32);

    let outer = matmul_op(&col, &row)?;
    assert_eq!(outer.shape(), &[3, 3]);
    assert_eq!(outer.to_vec(), vec![4, 8, 12, 5, 10, 15, 6, 12, 18]);
    Ok(())
}

#[test]
fn test_matmul_identity() -> Result<(), TorchyError> {
    let a = Tensor::new(vec![3u32, 1, 4, 1, 5, 9], vec![2, 3])?;
    let id = crate::tensor::eye::<u32>(3)?;
    assert_eq!(matmul_op(&a, &id)?, a);
    Ok(())
}

#[test]
fn test_matmul_empty_inner_dimension() -> Result<(), TorchyError> {
    let a = Tensor::<i64>::new(vec![], vec![2, 0])?;
    let b = Tensor::<i64>::new(vec![], vec![0, 3])?;
    let output = matmul_op(&a, &b)?;
    assert_eq!(output.shape(), &[2, 3]);
    assert_eq!(output.to_vec(), vec![0; 6]);
    Ok(())
}

#[test]
fn test_matmul_shape_mismatch_inner() -> Result<(), TorchyError> {
    let a = Tensor::new(vec![1.0, 2.0, 3.0, 4.0], vec![2, 2])?;
    let b = Tensor::new(vec![5.0, 6.0, 7.0], vec![3, 1])?;
    match matmul_op(&a, &b) {
        Err(TorchyError::ShapeMismatch { operation, .. }) => {
            assert_eq!(operation, "matmul (inner dim)");
        }
        other => panic!("Expected ShapeMismatch for inner dimensions, got {:?}", other),
    }
    Ok(())
}

#[test]
fn test_matmul_shape_mismatch_rank() -> Result<(), TorchyError> {
    let a = Tensor::new(vec![1.0, 2.0, 3.0, 4.0], vec![2, 2])?;
    let b = Tensor::new(vec![5.0, 6.0, 7.0, 8.0], vec![2, 2, 1])?;
    match matmul_op(&a, &b) {
        Err(TorchyError::ShapeMismatch { operation, .. }) => {
            assert_eq!(operation, "matmul (rank check)");
        }
        other => panic!("Expected ShapeMismatch for rank, got {:?}", other),
    }

    let v = Tensor::new(vec![1, 2], vec![2])?;
    assert!(matches!(
        matmul_op(&v, &v),
        Err(TorchyError::ShapeMismatch { .. })
    ));
    Ok(())
}

#[test]
fn test_matmul_output_too_large() -> Result<(), TorchyError> {
    // Empty inner dimension: both operands hold no data but M * N overflows.
    let half = 1usize << (usize::BITS / 2 + 1);
    let a = Tensor::<f32>::new(vec![], vec![half, 0])?;
    let b = Tensor::<f32>::new(vec![], vec![0, half])?;
    assert!(matches!(
        matmul_op(&a, &b),
        Err(TorchyError::UnsupportedOperation(_))
    ));
    Ok(())
}

#[test]
fn test_matmul_integer_overflow() -> Result<(), TorchyError> {
    let a = Tensor::new(vec![200u8, 1], vec![1, 2])?;
    let b = Tensor::new(vec![2u8, 1], vec![2, 1])?;
    assert!(matches!(
        matmul_op(&a, &b),
        Err(TorchyError::UnsupportedOperation(_))
    ));

    // Each product fits but the running sum does not.
    let c = Tensor::new(vec![100i8, 100], vec![1, 2])?;
    let d = Tensor::new(vec![1i8, 1], vec![2, 1])?;
    assert!(matches!(
        matmul_op(&c, &d),
        Err(TorchyError::UnsupportedOperation(_))
    ));

    let f = Tensor::new(vec![f32::MAX, f32::MAX], vec![1, 2])?;
    let g = Tensor::new(vec![2.0f32, 1.0], vec![2, 1])?;
    assert_eq!(matmul_op(&f, &g)?.item()?, f32::INFINITY);
    Ok(())
}
