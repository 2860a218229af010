use std::ops::{Index, IndexMut};

use rand::{distributions::uniform::SampleUniform, Rng};

/// Zeilenweise abgelegte Matrix; `(r, c)` ↦ `r * cols + c`
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

/// Vorschau zeigt höchstens so viele Zeilen/Spalten
pub const PREVIEW: usize = 10;

impl<T: Copy + Default> Matrix<T> {
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self { rows, cols, data: vec![T::default(); rows * cols] }
    }
}

impl<T> Matrix<T> {
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Self {
        assert_eq!(data.len(), rows * cols, "matrix data does not match {rows}x{cols}");
        Self { rows, cols, data }
    }

    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                data.push(f(r, c));
            }
        }
        Self { rows, cols, data }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn id(&self, r: usize, c: usize) -> usize {
        r * self.cols + c
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn row(&self, r: usize) -> &[T] {
        &self.data[r * self.cols..(r + 1) * self.cols]
    }

    pub fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let cols = self.cols;
        let (lo, hi) = (a.min(b), a.max(b));
        let (head, tail) = self.data.split_at_mut(hi * cols);
        head[lo * cols..(lo + 1) * cols].swap_with_slice(&mut tail[..cols]);
    }

    /// Obere linke Ecke (max. 10×10), Rest als `....` angedeutet
    pub fn preview(&self, cell: impl Fn(&T) -> String) -> String {
        let mut out = String::new();
        for r in 0..self.rows.min(PREVIEW) {
            for c in 0..self.cols.min(PREVIEW) {
                out.push_str(&cell(&self[(r, c)]));
                out.push(' ');
            }
            if self.cols > PREVIEW {
                out.push_str(" ....");
            }
            out.push('\n');
        }
        if self.rows > PREVIEW {
            out.push_str("....\n");
        }
        out
    }
}

impl<T: SampleUniform + PartialOrd + Copy> Matrix<T> {
    /// Gleichverteilte Einträge in `[lo, hi]`
    pub fn random(rows: usize, cols: usize, lo: T, hi: T, rng: &mut impl Rng) -> Self {
        Self::from_fn(rows, cols, |_, _| rng.gen_range(lo..=hi))
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (r, c): (usize, usize)) -> &T {
        &self.data[self.id(r, c)]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut T {
        let i = self.id(r, c);
        &mut self.data[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_major_layout() {
        let m = Matrix::from_fn(2, 3, |r, c| (r * 10 + c) as i32);
        assert_eq!(m.as_slice(), &[0, 1, 2, 10, 11, 12]);
        assert_eq!(m[(1, 2)], 12);
        assert_eq!(m.row(1), &[10, 11, 12]);
    }

    #[test]
    fn swap_rows_either_order() {
        let mut m = Matrix::from_fn(3, 2, |r, _| r as i32);
        m.swap_rows(2, 0);
        assert_eq!(m.as_slice(), &[2, 2, 1, 1, 0, 0]);
        m.swap_rows(1, 1);
        assert_eq!(m.row(1), &[1, 1]);
    }

    #[test]
    fn preview_truncates_large_matrices() {
        let m = Matrix::<i32>::zeros(12, 12);
        let text = m.preview(|v| format!("{v:4}"));
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), PREVIEW + 1);
        assert!(lines[0].ends_with(" ...."));
        assert_eq!(lines[PREVIEW], "....");
    }

    #[test]
    fn preview_small_matrix_is_complete() {
        let m = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]);
        assert_eq!(m.preview(|v| v.to_string()), "1 2 \n3 4 \n");
    }
}
