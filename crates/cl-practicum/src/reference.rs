//! CPU‑Referenzen zu den Kernels.

use crate::matrix::Matrix;

pub fn vector_add(a: &[f32], b: &[f32]) -> Vec<f32> {
    a.iter().zip(b).map(|(x, y)| x + y).collect()
}

pub fn sum(a: &[i32], b: &[i32]) -> Vec<i32> {
    a.iter().zip(b).map(|(x, y)| x.wrapping_add(*y)).collect()
}

/// x‑Wert des Punktes `i` von `n` äquidistanten Punkten auf `[xmin, xmax]`
#[inline]
pub fn parabola_x(i: usize, n: usize, xmin: f32, xmax: f32) -> f32 {
    xmin + i as f32 * (xmax - xmin) / (n - 1) as f32
}

/// `y = a·x² + b·x + c`; `n` muss ≥ 2 sein
pub fn parabola(a: f32, b: f32, c: f32, xmin: f32, xmax: f32, n: usize) -> Vec<f32> {
    (0..n)
        .map(|i| {
            let x = parabola_x(i, n, xmin, xmax);
            a * x * x + b * x + c
        })
        .collect()
}

pub fn matmul(a: &Matrix<i32>, b: &Matrix<i32>) -> Matrix<i32> {
    assert_eq!(a.cols(), b.rows(), "inner dimensions differ");
    let mut out = Matrix::zeros(a.rows(), b.cols());
    for r in 0..a.rows() {
        for k in 0..a.cols() {
            let lhs = a[(r, k)];
            for c in 0..b.cols() {
                out[(r, c)] += lhs * b[(k, c)];
            }
        }
    }
    out
}

/// Gauß‑Elimination auf der erweiterten Matrix `n × (n + 1)`.
pub mod gauss {
    use crate::{matrix::Matrix, ClError};

    pub const PIVOT_EPS: f32 = 1e-12;

    /// Spaltenpivotsuche: Zeile mit größtem |m[i][k]|, i ≥ k, nach oben tauschen
    pub fn pivot(m: &mut Matrix<f32>, k: usize) -> Result<(), ClError> {
        let best = (k..m.rows())
            .max_by(|&i, &j| m[(i, k)].abs().total_cmp(&m[(j, k)].abs()))
            .unwrap_or(k);
        if m[(best, k)].abs() < PIVOT_EPS {
            return Err(ClError::SingularMatrix { column: k });
        }
        m.swap_rows(k, best);
        Ok(())
    }

    /// Ein Eliminationsschritt, rechnet wie der Kernel `to_triangular`
    pub fn eliminate_step(m: &mut Matrix<f32>, k: usize) {
        let n = m.rows();
        for i in k + 1..n {
            let factor = m[(i, k)] / m[(k, k)];
            for j in (k..=n).rev() {
                let v = m[(k, j)];
                m[(i, j)] -= factor * v;
            }
        }
    }

    pub fn to_triangular(m: &mut Matrix<f32>) -> Result<(), ClError> {
        for k in 0..m.rows() {
            pivot(m, k)?;
            eliminate_step(m, k);
        }
        Ok(())
    }

    pub fn back_substitute(m: &Matrix<f32>) -> Result<Vec<f32>, ClError> {
        let n = m.rows();
        let mut x = vec![0.0_f32; n];
        for i in (0..n).rev() {
            let diag = m[(i, i)];
            if diag.abs() < PIVOT_EPS {
                return Err(ClError::SingularMatrix { column: i });
            }
            let acc: f32 = (i + 1..n).map(|j| m[(i, j)] * x[j]).sum();
            x[i] = (m[(i, n)] - acc) / diag;
        }
        Ok(x)
    }

    pub fn solve(mut m: Matrix<f32>) -> Result<Vec<f32>, ClError> {
        to_triangular(&mut m)?;
        back_substitute(&m)
    }
}
