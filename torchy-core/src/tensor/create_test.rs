use super::*;
use crate::types::DType;
use approx::assert_relative_eq;

#[test]
fn test_zeros() -> Result<(), TorchyError> {
    let t = zeros::<f32>(&[2, 3])?;
    assert_eq!(t.shape(), &[2, 3]);
    assert_eq!(t.numel(), 6);
    assert_eq!(t.dtype(), DType::F32);
    assert!(t.data().iter().all(|&x| x == 0.0));
    Ok(())
}

#[test]
fn test_ones_i64() -> Result<(), TorchyError> {
    let t = ones::<i64>(&[1, 4])?;
    assert_eq!(t.dtype(), DType::I64);
    assert_eq!(t.repr(), "Tensor({1, 4}, {1, 1, 1, 1})");
    Ok(())
}

#[test]
fn test_full() -> Result<(), TorchyError> {
    let t = full(&[3, 1, 2], 42.5_f32)?;
    assert_eq!(t.shape(), &[3, 1, 2]);
    assert!(t.data().iter().all(|&x| (x - 42.5).abs() < 1e-6));
    Ok(())
}

#[test]
fn test_scalar() -> Result<(), TorchyError> {
    let t = scalar(5u8)?;
    assert_eq!(t.rank(), 0);
    assert_eq!(t.numel(), 1);
    assert_eq!(t.item()?, 5);
    assert_eq!(t.element(&[])?, 5);
    Ok(())
}

#[test]
fn test_eye() -> Result<(), TorchyError> {
    let t = eye::<i32>(3)?;
    assert_eq!(t.repr(), "Tensor({3, 3}, {1, 0, 0, 0, 1, 0, 0, 0, 1})");
    Ok(())
}

#[test]
fn test_from_shape_fn_visits_row_major() -> Result<(), TorchyError> {
    let t = from_shape_fn(&[2, 3], |idx| (idx[0] * 10 + idx[1]) as i32)?;
    assert_eq!(t.to_vec(), vec![0, 1, 2, 10, 11, 12]);
    Ok(())
}

#[test]
fn test_arange() -> Result<(), TorchyError> {
    let t = arange(0i32, 5, 1)?;
    assert_eq!(t.repr(), "Tensor({5}, {0, 1, 2, 3, 4})");

    let down = arange(5i32, 0, -2)?;
    assert_eq!(down.to_vec(), vec![5, 3, 1]);

    let f = arange(0.0f64, 1.0, 0.25)?;
    assert_eq!(f.shape(), &[4]);
    assert_relative_eq!(f.data(), [0.0, 0.25, 0.5, 0.75].as_slice(), epsilon = 1e-12);

    let empty = arange(3i32, 3, 1)?;
    assert_eq!(empty.shape(), &[0]);
    Ok(())
}

#[test]
fn test_arange_stops_at_type_bounds() -> Result<(), TorchyError> {
    let up = arange(100u8, 250, 100)?;
    assert_eq!(up.to_vec(), vec![100, 200]);

    let down = arange(-100i8, -128, -20)?;
    assert_eq!(down.to_vec(), vec![-100, -120]);

    let last = arange(250u8, 255, 5)?;
    assert_eq!(last.to_vec(), vec![250]);
    Ok(())
}

#[test]
fn test_overflowing_shape_is_rejected() {
    let shape = [usize::MAX, 2];
    assert!(matches!(
        zeros::<i32>(&shape),
        Err(TorchyError::ConstructionError { .. })
    ));
    assert!(matches!(
        full(&shape, 1.0f64),
        Err(TorchyError::ConstructionError { .. })
    ));
    assert!(matches!(
        from_shape_fn(&shape, |_| 0u8),
        Err(TorchyError::ConstructionError { .. })
    ));
    // No elements, but the strides do not fit.
    assert!(matches!(
        zeros::<i32>(&[0, usize::MAX, 2]),
        Err(TorchyError::ConstructionError { .. })
    ));
}

#[cfg(feature = "random")]
#[test]
fn test_random_overflowing_shape_is_rejected() {
    let shape = [usize::MAX, 2];
    assert!(matches!(
        rand::<f32>(&shape),
        Err(TorchyError::ConstructionError { .. })
    ));
    assert!(matches!(
        randn::<f64>(&shape),
        Err(TorchyError::ConstructionError { .. })
    ));
    assert!(matches!(
        randint(0i32, 10, &shape),
        Err(TorchyError::ConstructionError { .. })
    ));
}

#[test]
fn test_arange_invalid_step() {
    assert!(matches!(
        arange(0i32, 5, 0),
        Err(TorchyError::UnsupportedOperation(_))
    ));
    assert!(matches!(
        arange(0i32, 5, -1),
        Err(TorchyError::UnsupportedOperation(_))
    ));
}

#[cfg(feature = "random")]
#[test]
fn test_rand() -> Result<(), TorchyError> {
    let t = rand::<f32>(&[2, 2])?;
    assert_eq!(t.shape(), &[2, 2]);
    assert_eq!(t.dtype(), DType::F32);
    assert!(t.data().iter().all(|&x| (0.0..1.0).contains(&x)));
    Ok(())
}

#[cfg(feature = "random")]
#[test]
fn test_randn() -> Result<(), TorchyError> {
    let t = randn::<f64>(&[3, 3])?;
    assert_eq!(t.shape(), &[3, 3]);
    assert_eq!(t.dtype(), DType::F64);
    assert!(t.data().iter().all(|x| x.is_finite()));
    Ok(())
}

#[cfg(feature = "random")]
#[test]
fn test_randint() -> Result<(), TorchyError> {
    let t = randint(5i64, 15, &[4, 2])?;
    assert_eq!(t.dtype(), DType::I64);
    assert!(t.data().iter().all(|&x| (5..15).contains(&x)));
    assert!(matches!(
        randint(3i32, 3, &[1]),
        Err(TorchyError::UnsupportedOperation(_))
    ));
    Ok(())
}
