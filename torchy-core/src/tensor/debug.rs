// src/tensor/debug.rs
use crate::ops::traits::TensorElement;
use crate::tensor::Tensor;
use std::fmt::{self, Display, Write};

/// Number of leading elements shown by `Debug`.
const DEBUG_PREVIEW_LEN: usize = 8;

fn join_into<I>(out: &mut String, items: I)
where
    I: IntoIterator,
    I::Item: Display,
{
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        // Writing into a String cannot fail.
        let _ = write!(out, "{}", item);
    }
}

impl<T: TensorElement> Tensor<T> {
    /// Canonical string form: `Tensor({d0, d1, ...}, {v0, v1, ...})`.
    ///
    /// Shape dimensions come first, then every element in flat row-major order,
    /// both joined by `", "`. The format is stable and suitable for equality checks.
    pub fn repr(&self) -> String {
        let mut out = String::from("Tensor({");
        join_into(&mut out, &self.shape);
        out.push_str("}, {");
        join_into(&mut out, self.data());
        out.push_str("})");
        out
    }
}

// Manual implementation of Debug trait
impl<T: TensorElement> fmt::Debug for Tensor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.data();
        let preview = &data[..data.len().min(DEBUG_PREVIEW_LEN)];
        write!(
            f,
            "Tensor(shape={:?}, strides={:?}, dtype={}, data={:?}",
            self.shape,
            self.strides,
            self.dtype(),
            preview
        )?;
        if data.len() > DEBUG_PREVIEW_LEN {
            write!(f, " ... ({} elements)", data.len())?;
        }
        write!(f, ")")
    }
}
