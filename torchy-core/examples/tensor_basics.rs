//! Walks through tensor creation, element access, arithmetic and matmul.
//! Prints both the compact `repr` form and the `Debug` form of each tensor.

use torchy_core::tensor::create::{arange, eye, full};
use torchy_core::{Tensor, TorchyError};

fn main() -> Result<(), TorchyError> {
    println!("--- Creation ---");
    let t1 = Tensor::new(vec![9, 8, 7, 6, 5, 4, 3, 2, 1], vec![3, 3])?;
    let t2 = Tensor::new((1..=9).collect::<Vec<i32>>(), vec![3, 3])?;
    println!("t1 = {}", t1);
    println!("t2 = {}", t2);
    println!("t1 (debug) = {:?}", t1);
    println!("arange(0, 10, 3) = {}", arange(0i64, 10, 3)?);
    println!("eye(3) = {}", eye::<f32>(3)?);

    println!("--- Element access ---");
    println!("t2[1, 2] = {}", t2.element(&[1, 2])?);
    match t2.element(&[0, 15]) {
        Ok(v) => println!("t2[0, 15] = {}", v),
        Err(e) => println!("t2[0, 15] -> {}", e),
    }

    println!("--- Element-wise arithmetic ---");
    println!("t1 + t2 = {}", t1.add(&t2)?);
    println!("t1 - t2 = {}", t1.sub(&t2)?);
    println!("t1 * t2 = {}", t1.mul(&t2)?);
    println!("t1 / t2 = {}", t1.div(&t2)?);
    println!("t1 * 3  = {}", (&t1 * 3)?);
    if let Err(e) = t1.div_scalar(0) {
        println!("t1 / 0  -> {}", e);
    }

    println!("--- Matmul ---");
    let a = Tensor::new(vec![1.0f64, 2.0, 3.0, 4.0, 5.0, 6.0], vec![2, 3])?;
    let b = Tensor::new(vec![7.0f64, 8.0, 9.0, 10.0, 11.0, 12.0], vec![3, 2])?;
    let bias = full(&[2, 2], 0.5f64)?;
    println!("a @ b + 0.5 = {}", a.matmul(&b)?.add(&bias)?);
    if let Err(e) = a.matmul(&a) {
        println!("a @ a -> {}", e);
    }

    Ok(())
}
