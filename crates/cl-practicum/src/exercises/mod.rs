//! Die Praktikumsübungen. Jede liefert einen Report, der sich per `Display` ausgibt.

pub mod check;
pub mod devices;
pub mod gauss;
pub mod matmul;
pub mod parabola;
pub mod platforms;
pub mod sum;
pub mod vector_add;

use std::fmt;

use crate::ClError;

/// Wie viele Ergebniswerte die Reports zeigen
pub const SHOWN: usize = 10;

pub(crate) const RULE: &str = "====================================";
pub(crate) const THIN_RULE: &str = "------------------------------------";

/// Laufzeiten mit und ohne OpenCL in ms
#[derive(Clone, Copy, Debug, Default)]
pub struct Timing {
    pub gpu_ms: u128,
    pub cpu_ms: u128,
}

impl fmt::Display for Timing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n~~~~~ Execution time")?;
        writeln!(f, "     with OpenCL: {} ms", self.gpu_ms)?;
        writeln!(f, "  without OpenCL: {} ms", self.cpu_ms)
    }
}

/// Abschnitt "Results comparison"
pub(crate) fn write_comparison(f: &mut fmt::Formatter<'_>, equal: bool) -> fmt::Result {
    writeln!(f, "\n~~~~~ Results comparison")?;
    if equal {
        writeln!(f, "   OpenCL and CPU result are the same")
    } else {
        writeln!(f, "   OpenCL and CPU results differ!")
    }
}

/// Index des ersten Paares, das `same` nicht erfüllt
pub fn first_mismatch<T>(got: &[T], expected: &[T], same: impl Fn(&T, &T) -> bool) -> Option<usize> {
    if got.len() != expected.len() {
        return Some(got.len().min(expected.len()));
    }
    got.iter().zip(expected).position(|(g, e)| !same(g, e))
}

/// Die Kernels indizieren mit `int`, also muss `rows · cols` in i32 passen
pub(crate) fn check_matrix_size(rows: usize, cols: usize) -> Result<(), ClError> {
    let fits = rows
        .checked_mul(cols)
        .is_some_and(|n| n > 0 && n <= i32::MAX as usize);
    if fits {
        Ok(())
    } else {
        Err(ClError::InvalidInput(format!("matrix {rows}x{cols} out of range for int indexing")))
    }
}

/// Wie `first_mismatch`, aber als `ClError::Verification { index }`
pub fn verify_with<T>(got: &[T], expected: &[T], same: impl Fn(&T, &T) -> bool) -> Result<(), ClError> {
    match first_mismatch(got, expected, same) {
        Some(index) => Err(ClError::Verification { index }),
        None => Ok(()),
    }
}

/// `|got − expected| ≤ tol · max(1, |expected|)`
pub fn close(got: f32, expected: f32, tol: f32) -> bool {
    (got - expected).abs() <= tol * expected.abs().max(1.0)
}
