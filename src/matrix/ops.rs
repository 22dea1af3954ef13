use std::ops::{Index, IndexMut, Mul};

use crate::approx::ApproxEq;

use super::Matrix;

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        assert!(
            row < self.nrows() && col < self.ncols(),
            "matrix index out of bounds"
        );
        &self.as_slice()[row * self.ncols() + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        assert!(
            row < self.nrows() && col < self.ncols(),
            "matrix index out of bounds"
        );
        let offset = row * self.ncols() + col;
        &mut self.data[offset]
    }
}

impl ApproxEq for Matrix {
    fn abs_diff_eq(&self, other: &Self, abs_tolerance: f64) -> bool {
        self.shape() == other.shape()
            && self.as_slice().abs_diff_eq(other.as_slice(), abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: f64) -> bool {
        self.shape() == other.shape()
            && self.as_slice().rel_diff_eq(other.as_slice(), rel_tolerance)
    }

    fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
        self.shape() == other.shape()
            && self
                .as_slice()
                .ulps_diff_eq(other.as_slice(), ulps_tolerance)
    }
}

/// Matrix * Matrix, the non-mutating counterpart of [`Matrix::multiply`].
///
/// # Panics
///
/// Panics when the inner dimensions do not agree; use [`Matrix::matmul`] for
/// a checked variant.
impl Mul for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Self) -> Self::Output {
        match self.matmul(rhs) {
            Ok(product) => product,
            Err(err) => panic!("{err}"),
        }
    }
}

/// Matrix * Scalar.
impl Mul<f64> for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: f64) -> Self::Output {
        let mut out = self.clone();
        for c in &mut out.data {
            *c *= rhs;
        }
        out
    }
}
