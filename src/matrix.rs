use std::fmt;

use itertools::iproduct;
use log::trace;

use crate::error::{Error, Result};
use crate::transform::AnyVector;

mod ops;

/// A dense matrix with `rows` rows and `cols` columns, stored row-major in a
/// flat buffer.
///
/// # Construction
///
/// - [`Matrix::new`] takes an explicit shape and flat data.
/// - A rectangular grid literal converts via [`From`]:
///   `Matrix::from([[1.0, 2.0], [3.0, 4.0]])`.
/// - A `Vec<Vec<f64>>` converts via [`TryFrom`] and fails with
///   [`Error::InvalidInput`] when empty or ragged.
/// - [`Matrix::splat`] creates the `n x n` matrix with every cell set to `n`.
///
/// # Element access
///
/// [`Matrix`] implements [`Index`] and [`IndexMut`] for `(row, column)`
/// tuples, 0-based, matching common mathematical notation. [`Matrix::get`]
/// and [`Matrix::get_mut`] are the checked variants.
///
/// # Mutation and chaining
///
/// Like the vector family, the mutating operations (`add`, `sub`, `multiply`,
/// `divide`, `transpose`, `rref`, `power`, `pow`, `exp`) replace the grid in
/// place and return the receiver for chaining; `clone`, `minor`, `adjoint`
/// and `inverse` return new instances.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, PartialEq)]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// Creates a matrix of the given shape from flat row-major data.
    ///
    /// Fails with [`Error::InvalidInput`] when either dimension is zero or
    /// the data length does not equal `rows * cols`.
    pub fn new(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(Error::InvalidInput {
                reason: "matrix must have at least one element",
            });
        }
        if data.len() != rows * cols {
            return Err(Error::InvalidInput {
                reason: "data length does not match the matrix shape",
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Creates the `n x n` matrix with every cell set to `n`.
    ///
    /// # Panics
    ///
    /// Panics when `n` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecmat::*;
    /// assert_eq!(Matrix::splat(2), Matrix::from([[2.0, 2.0], [2.0, 2.0]]));
    /// ```
    pub fn splat(n: usize) -> Self {
        assert!(n > 0, "matrix must have at least one element");
        Self {
            data: vec![n as f64; n * n],
            rows: n,
            cols: n,
        }
    }

    fn identity_of(n: usize) -> Self {
        let mut m = Self {
            data: vec![0.0; n * n],
            rows: n,
            cols: n,
        };
        m.identity();
        m
    }

    /// The number of rows.
    #[inline]
    pub fn nrows(&self) -> usize {
        self.rows
    }

    /// The number of columns.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.cols
    }

    /// The shape as a `(rows, columns)` pair.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Whether the matrix has as many rows as columns.
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Returns the underlying row-major data as a slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Returns one row as a slice.
    pub fn row_slice(&self, row: usize) -> &[f64] {
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }

    /// Returns a reference to the element at `(row, col)`, or [`None`] if out
    /// of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&f64> {
        if row < self.rows && col < self.cols {
            Some(&self.data[self.offset(row, col)])
        } else {
            None
        }
    }

    /// Returns a mutable reference to the element at `(row, col)`, or
    /// [`None`] if out of bounds.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut f64> {
        if row < self.rows && col < self.cols {
            let offset = self.offset(row, col);
            Some(&mut self.data[offset])
        } else {
            None
        }
    }

    /// Zeroes every cell.
    pub fn zero(&mut self) -> &mut Self {
        self.data.fill(0.0);
        self
    }

    /// Zeroes the matrix, then writes 1 along the main diagonal.
    ///
    /// On a non-square matrix the diagonal runs through the smaller of the
    /// two dimensions.
    pub fn identity(&mut self) -> &mut Self {
        self.data.fill(0.0);
        for i in 0..self.rows.min(self.cols) {
            let offset = self.offset(i, i);
            self.data[offset] = 1.0;
        }
        self
    }

    /// Swaps the row and column roles of this matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecmat::*;
    /// let mut m = Matrix::from([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
    /// m.transpose();
    /// assert_eq!(m, Matrix::from([[1.0, 4.0], [2.0, 5.0], [3.0, 6.0]]));
    /// ```
    pub fn transpose(&mut self) -> &mut Self {
        let mut out = vec![0.0; self.data.len()];
        for (i, j) in iproduct!(0..self.rows, 0..self.cols) {
            out[j * self.rows + i] = self.data[self.offset(i, j)];
        }
        self.data = out;
        std::mem::swap(&mut self.rows, &mut self.cols);
        self
    }

    fn swap_rows(&mut self, a: usize, b: usize) {
        for j in 0..self.cols {
            let (x, y) = (self.offset(a, j), self.offset(b, j));
            self.data.swap(x, y);
        }
    }

    /// Reduces this matrix to row echelon form by Gaussian elimination.
    ///
    /// Pivots are found by scanning down the lead column for a nonzero entry,
    /// swapping that row up, normalizing it, and eliminating the column from
    /// all other rows. Elimination stops once the lead column index reaches
    /// the column count; the receiver then holds the reduction done so far.
    pub fn rref(&mut self) -> &mut Self {
        let mut lead = 0;
        for r in 0..self.rows {
            if lead >= self.cols {
                return self;
            }
            let mut i = r;
            while self[(i, lead)] == 0.0 {
                i += 1;
                if i == self.rows {
                    i = r;
                    lead += 1;
                    if lead == self.cols {
                        return self;
                    }
                }
            }
            if i != r {
                trace!("rref: swapping rows {i} and {r} for pivot column {lead}");
                self.swap_rows(i, r);
            }
            let pivot = self[(r, lead)];
            for j in 0..self.cols {
                self[(r, j)] /= pivot;
            }
            let pivot_row = self.row_slice(r).to_vec();
            for k in 0..self.rows {
                if k == r {
                    continue;
                }
                let factor = self[(k, lead)];
                if factor != 0.0 {
                    for j in 0..self.cols {
                        self[(k, j)] -= factor * pivot_row[j];
                    }
                }
            }
            lead += 1;
        }
        self
    }

    /// Computes the determinant of this matrix.
    ///
    /// Uses recursive cofactor (Laplace) expansion along the first row, with
    /// closed forms for the 1x1 and 2x2 base cases. Fails with
    /// [`Error::NotSquare`] for non-square matrices.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecmat::*;
    /// let m = Matrix::from([[1.0, 2.0], [3.0, 4.0]]);
    /// assert_eq!(m.determinant().unwrap(), -2.0);
    /// ```
    pub fn determinant(&self) -> Result<f64> {
        if !self.is_square() {
            return Err(Error::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.det_unchecked())
    }

    fn det_unchecked(&self) -> f64 {
        match self.rows {
            1 => self[(0, 0)],
            2 => self[(0, 0)] * self[(1, 1)] - self[(0, 1)] * self[(1, 0)],
            _ => (0..self.cols)
                .map(|j| {
                    let sign = if j % 2 == 0 { 1.0 } else { -1.0 };
                    sign * self[(0, j)] * self.minor_unchecked(0, j).det_unchecked()
                })
                .sum(),
        }
    }

    fn minor_unchecked(&self, row: usize, col: usize) -> Matrix {
        let n = self.rows;
        let mut data = Vec::with_capacity((n - 1) * (n - 1));
        for (i, j) in iproduct!(0..n, 0..n) {
            if i != row && j != col {
                data.push(self[(i, j)]);
            }
        }
        Matrix {
            data,
            rows: n - 1,
            cols: n - 1,
        }
    }

    /// Returns the submatrix obtained by deleting row `row` and column `col`.
    ///
    /// Fails with [`Error::NotSquare`] for non-square matrices and with
    /// [`Error::InvalidArgument`] for a 1x1 matrix (whose minor would be
    /// empty).
    ///
    /// # Panics
    ///
    /// Panics when `row` or `col` is out of bounds.
    pub fn minor(&self, row: usize, col: usize) -> Result<Matrix> {
        if !self.is_square() {
            return Err(Error::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.rows < 2 {
            return Err(Error::InvalidArgument {
                reason: "a 1x1 matrix has no minor",
            });
        }
        assert!(row < self.rows && col < self.cols, "index out of bounds");
        Ok(self.minor_unchecked(row, col))
    }

    /// Returns the adjugate: the transpose of the cofactor matrix.
    ///
    /// `adjoint[(j, i)]` is `(-1)^(i+j)` times the determinant of the
    /// `(i, j)` minor. Fails with [`Error::NotSquare`] for non-square
    /// matrices.
    pub fn adjoint(&self) -> Result<Matrix> {
        if !self.is_square() {
            return Err(Error::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        let n = self.rows;
        if n == 1 {
            return Ok(Matrix {
                data: vec![1.0],
                rows: 1,
                cols: 1,
            });
        }
        let mut out = Matrix {
            data: vec![0.0; n * n],
            rows: n,
            cols: n,
        };
        for (i, j) in iproduct!(0..n, 0..n) {
            let sign = if (i + j) % 2 == 0 { 1.0 } else { -1.0 };
            out[(j, i)] = sign * self.minor_unchecked(i, j).det_unchecked();
        }
        Ok(out)
    }

    /// Returns the inverse of this matrix, computed as the adjugate scaled by
    /// the reciprocal determinant.
    ///
    /// Fails with [`Error::NotSquare`] for non-square matrices and
    /// [`Error::SingularMatrix`] when the determinant is zero.
    pub fn inverse(&self) -> Result<Matrix> {
        let det = self.determinant()?;
        if det == 0.0 {
            return Err(Error::SingularMatrix);
        }
        let mut adj = self.adjoint()?;
        for c in &mut adj.data {
            *c /= det;
        }
        Ok(adj)
    }

    /// Adds another matrix to this matrix, element-wise.
    ///
    /// Fails with [`Error::DimensionMismatch`] when the shapes differ.
    pub fn add(&mut self, m: &Matrix) -> Result<&mut Self> {
        if self.shape() != m.shape() {
            return Err(Error::shape(&[self.rows, self.cols], &[m.rows, m.cols]));
        }
        for (c, o) in self.data.iter_mut().zip(&m.data) {
            *c += o;
        }
        Ok(self)
    }

    /// Subtracts another matrix from this matrix, element-wise.
    ///
    /// Fails with [`Error::DimensionMismatch`] when the shapes differ.
    pub fn sub(&mut self, m: &Matrix) -> Result<&mut Self> {
        if self.shape() != m.shape() {
            return Err(Error::shape(&[self.rows, self.cols], &[m.rows, m.cols]));
        }
        for (c, o) in self.data.iter_mut().zip(&m.data) {
            *c -= o;
        }
        Ok(self)
    }

    /// Returns the matrix product `self * m` without modifying either
    /// operand.
    ///
    /// Fails with [`Error::DimensionMismatch`] unless `self.ncols()` equals
    /// `m.nrows()`.
    pub fn matmul(&self, m: &Matrix) -> Result<Matrix> {
        if self.cols != m.rows {
            return Err(Error::dim(self.cols, m.rows));
        }
        let mut out = Matrix {
            data: vec![0.0; self.rows * m.cols],
            rows: self.rows,
            cols: m.cols,
        };
        for (i, j) in iproduct!(0..self.rows, 0..m.cols) {
            out[(i, j)] = (0..self.cols).map(|k| self[(i, k)] * m[(k, j)]).sum();
        }
        Ok(out)
    }

    /// Replaces this matrix with the matrix product `self * m`.
    ///
    /// The result has `self.nrows()` rows and `m.ncols()` columns. Fails with
    /// [`Error::DimensionMismatch`] unless `self.ncols()` equals `m.nrows()`.
    pub fn multiply(&mut self, m: &Matrix) -> Result<&mut Self> {
        *self = self.matmul(m)?;
        Ok(self)
    }

    /// Divides this matrix by another, element-wise.
    ///
    /// Note that this is the quotient of the raw cell values, *not*
    /// multiplication by `m`'s inverse; use `multiply(&m.inverse()?)` for
    /// the latter. Fails with [`Error::DimensionMismatch`] when the shapes
    /// differ.
    pub fn divide(&mut self, m: &Matrix) -> Result<&mut Self> {
        if self.shape() != m.shape() {
            return Err(Error::shape(&[self.rows, self.cols], &[m.rows, m.cols]));
        }
        for (c, o) in self.data.iter_mut().zip(&m.data) {
            *c /= o;
        }
        Ok(self)
    }

    /// Replaces this matrix with its `n`-th power under matrix
    /// multiplication; the zeroth power is the identity.
    ///
    /// Fails with [`Error::NotSquare`] for non-square matrices.
    pub fn power(&mut self, n: u32) -> Result<&mut Self> {
        if !self.is_square() {
            return Err(Error::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if n == 0 {
            return Ok(self.identity());
        }
        let base = self.clone();
        for _ in 1..n {
            self.multiply(&base)?;
        }
        Ok(self)
    }

    /// Replaces this matrix `A` with the degree-`k` diagonal Padé approximant
    /// of `e^A`.
    ///
    /// The approximant is the rational combination `P(A) * Q(A)^-1` where `P`
    /// and `Q` are the degree-`k` Padé polynomials (`Q` takes `-A`); for
    /// `k = 1` this reduces to the closed form `(I + A/2)(I - A/2)^-1`.
    ///
    /// Fails with [`Error::InvalidArgument`] when `k` is zero,
    /// [`Error::NotSquare`] for non-square matrices, and
    /// [`Error::SingularMatrix`] when the denominator polynomial is not
    /// invertible.
    pub fn exp(&mut self, k: u32) -> Result<&mut Self> {
        if k == 0 {
            return Err(Error::InvalidArgument {
                reason: "approximation degree must be positive",
            });
        }
        if !self.is_square() {
            return Err(Error::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        trace!(
            "exp: degree-{k} Pade approximant of a {}x{} matrix",
            self.rows,
            self.cols
        );

        let n = self.rows;
        let mut p = Matrix::identity_of(n);
        let mut q = Matrix::identity_of(n);
        let mut term = Matrix::identity_of(n);
        let mut coeff = 1.0;
        let degree = f64::from(k);
        for i in 1..=k {
            let i_f = f64::from(i);
            term = term.matmul(self)?;
            coeff *= (degree - i_f + 1.0) / ((2.0 * degree - i_f + 1.0) * i_f);
            let scaled = &term * coeff;
            p.add(&scaled)?;
            if i % 2 == 0 {
                q.add(&scaled)?;
            } else {
                q.sub(&scaled)?;
            }
        }
        *self = p.matmul(&q.inverse()?)?;
        Ok(self)
    }

    /// Replaces this matrix `A` with the degree-`k` approximation of
    /// `base^A`, computed as `e^(ln(base) * A)`.
    ///
    /// Fails with [`Error::InvalidArgument`] when `base` is not positive or
    /// `k` is zero, and with [`Error::NotSquare`] for non-square matrices.
    pub fn pow(&mut self, base: f64, k: u32) -> Result<&mut Self> {
        if base <= 0.0 {
            return Err(Error::InvalidArgument {
                reason: "power base must be positive",
            });
        }
        if k == 0 {
            return Err(Error::InvalidArgument {
                reason: "approximation degree must be positive",
            });
        }
        if !self.is_square() {
            return Err(Error::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        let ln = base.ln();
        for c in &mut self.data {
            *c *= ln;
        }
        self.exp(k)
    }

    /// Reads the columns out as a list of vectors of length `nrows()`, each
    /// with the concrete vector type matching that length.
    pub fn columns(&self) -> Vec<AnyVector> {
        (0..self.cols)
            .map(|j| {
                let col: Vec<f64> = (0..self.rows).map(|i| self[(i, j)]).collect();
                AnyVector::from_components(&col)
            })
            .collect()
    }

    /// Reads the rows out as a list of vectors of length `ncols()`, each with
    /// the concrete vector type matching that length.
    pub fn rows(&self) -> Vec<AnyVector> {
        (0..self.rows)
            .map(|i| AnyVector::from_components(self.row_slice(i)))
            .collect()
    }
}

impl From<&Matrix> for Matrix {
    #[inline]
    fn from(value: &Matrix) -> Self {
        value.clone()
    }
}

impl<const R: usize, const C: usize> From<[[f64; C]; R]> for Matrix {
    fn from(grid: [[f64; C]; R]) -> Self {
        assert!(R > 0 && C > 0, "matrix must have at least one element");
        Self {
            data: grid.iter().flatten().copied().collect(),
            rows: R,
            cols: C,
        }
    }
}

impl TryFrom<Vec<Vec<f64>>> for Matrix {
    type Error = Error;

    fn try_from(grid: Vec<Vec<f64>>) -> Result<Self> {
        if grid.is_empty() || grid[0].is_empty() {
            return Err(Error::InvalidInput {
                reason: "matrix must have at least one element",
            });
        }
        let cols = grid[0].len();
        if grid.iter().any(|row| row.len() != cols) {
            return Err(Error::InvalidInput {
                reason: "matrix rows must all have the same number of columns",
            });
        }
        let rows = grid.len();
        Ok(Self {
            data: grid.into_iter().flatten().collect(),
            rows,
            cols,
        })
    }
}

impl fmt::Debug for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries((0..self.rows).map(|i| self.row_slice(i)))
            .finish()
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for i in 0..self.rows {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "[")?;
            for (j, elem) in self.row_slice(i).iter().enumerate() {
                if j != 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{elem}")?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::E;

    use crate::{assert_approx_eq, vec2, vec3, AnyVector};

    use super::*;

    #[test]
    fn construction() {
        let m = Matrix::new(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(m, Matrix::from([[1.0, 2.0], [3.0, 4.0]]));
        assert_eq!(m.shape(), (2, 2));
        assert!(m.is_square());

        let m = Matrix::try_from(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        assert_eq!(m.shape(), (2, 3));
        assert!(!m.is_square());

        assert!(Matrix::new(2, 2, vec![1.0]).is_err());
        assert!(Matrix::new(0, 2, vec![]).is_err());
        assert!(Matrix::try_from(Vec::<Vec<f64>>::new()).is_err());
        assert!(Matrix::try_from(vec![vec![1.0, 2.0], vec![3.0]]).is_err());
    }

    #[test]
    fn splat() {
        assert_eq!(Matrix::splat(1), Matrix::from([[1.0]]));
        assert_eq!(
            Matrix::splat(3),
            Matrix::from([[3.0, 3.0, 3.0], [3.0, 3.0, 3.0], [3.0, 3.0, 3.0]])
        );
    }

    #[test]
    fn access() {
        let mut m = Matrix::from([[0.0, 1.0, 2.0], [3.0, 4.0, 5.0]]);
        assert_eq!(m[(1, 0)], 3.0);
        assert_eq!(m.get(0, 2), Some(&2.0));
        assert_eq!(m.get(2, 0), None);
        if let Some(elem) = m.get_mut(1, 0) {
            *elem = 999.0;
        }
        assert_eq!(m[(1, 0)], 999.0);
        assert_eq!(m.row_slice(0), &[0.0, 1.0, 2.0]);
    }

    #[test]
    fn transpose_involution() {
        let m = Matrix::from([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        let mut t = m.clone();
        t.transpose();
        assert_eq!(t, Matrix::from([[1.0, 4.0], [2.0, 5.0], [3.0, 6.0]]));
        t.transpose();
        assert_eq!(t, m);
    }

    #[test]
    fn identity() {
        let mut m = Matrix::splat(2);
        m.identity();
        assert_eq!(m, Matrix::from([[1.0, 0.0], [0.0, 1.0]]));

        let mut m = Matrix::from([[9.0, 9.0, 9.0], [9.0, 9.0, 9.0]]);
        m.identity();
        assert_eq!(m, Matrix::from([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]));
    }

    #[test]
    fn zero() {
        let mut m = Matrix::splat(2);
        m.zero();
        assert_eq!(m, Matrix::from([[0.0, 0.0], [0.0, 0.0]]));
    }

    #[test]
    fn determinant() {
        assert_eq!(
            Matrix::from([[1.0, 2.0], [3.0, 4.0]]).determinant().unwrap(),
            -2.0
        );
        assert_eq!(Matrix::from([[7.0]]).determinant().unwrap(), 7.0);

        let m = Matrix::from([
            [-2.0, -1.0, 2.0],
            [2.0, 1.0, 4.0],
            [-3.0, 3.0, -1.0],
        ]);
        assert_eq!(m.determinant().unwrap(), 54.0);
        let mut t = m.clone();
        t.transpose();
        assert_eq!(t.determinant().unwrap(), 54.0);

        let diag = Matrix::from([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 2.0, 0.0, 0.0],
            [0.0, 0.0, 3.0, 0.0],
            [0.0, 0.0, 0.0, 4.0],
        ]);
        assert_eq!(diag.determinant().unwrap(), 24.0);

        assert!(matches!(
            Matrix::from([[1.0, 2.0]]).determinant(),
            Err(Error::NotSquare { rows: 1, cols: 2 })
        ));
    }

    #[test]
    fn minor() {
        let m = Matrix::from([[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(m.minor(0, 0).unwrap(), Matrix::from([[4.0]]));
        assert_eq!(m.minor(1, 0).unwrap(), Matrix::from([[2.0]]));

        let m = Matrix::from([
            [1.0, 2.0, 3.0],
            [4.0, 5.0, 6.0],
            [7.0, 8.0, 9.0],
        ]);
        assert_eq!(
            m.minor(1, 1).unwrap(),
            Matrix::from([[1.0, 3.0], [7.0, 9.0]])
        );

        assert!(Matrix::from([[1.0, 2.0]]).minor(0, 0).is_err());
        assert!(Matrix::from([[1.0]]).minor(0, 0).is_err());
    }

    #[test]
    fn adjoint() {
        let m = Matrix::from([[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(m.adjoint().unwrap(), Matrix::from([[4.0, -2.0], [-3.0, 1.0]]));
        assert_eq!(Matrix::from([[5.0]]).adjoint().unwrap(), Matrix::from([[1.0]]));
    }

    #[test]
    fn inverse() {
        let m = Matrix::from([[1.0, 2.0], [3.0, 4.0]]);
        let inv = m.inverse().unwrap();
        assert_eq!(inv, Matrix::from([[-2.0, 1.0], [1.5, -0.5]]));

        let product = m.matmul(&inv).unwrap();
        assert_approx_eq!(product, Matrix::from([[1.0, 0.0], [0.0, 1.0]])).abs(1e-12);

        assert_eq!(
            Matrix::from([[1.0, 2.0], [2.0, 4.0]]).inverse(),
            Err(Error::SingularMatrix)
        );
        assert!(Matrix::from([[1.0, 2.0]]).inverse().is_err());
    }

    #[test]
    fn rref() {
        let mut m = Matrix::from([[1.0, 2.0], [3.0, 4.0]]);
        m.rref();
        assert_eq!(m, Matrix::from([[1.0, 0.0], [0.0, 1.0]]));

        let mut m = Matrix::from([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        m.rref();
        assert_eq!(m, Matrix::from([[1.0, 0.0, -1.0], [0.0, 1.0, 2.0]]));

        // pivot requires a row swap
        let mut m = Matrix::from([[0.0, 1.0], [1.0, 0.0]]);
        m.rref();
        assert_eq!(m, Matrix::from([[1.0, 0.0], [0.0, 1.0]]));

        // early exit must return the reduction done so far, not the input
        let mut m = Matrix::from([[1.0], [2.0]]);
        m.rref();
        assert_eq!(m, Matrix::from([[1.0], [0.0]]));

        // all-zero columns are skipped
        let mut m = Matrix::from([[0.0, 2.0], [0.0, 4.0]]);
        m.rref();
        assert_eq!(m, Matrix::from([[0.0, 1.0], [0.0, 0.0]]));
    }

    #[test]
    fn add_sub() {
        let mut m = Matrix::from([[1.0, 2.0], [3.0, 4.0]]);
        m.add(&Matrix::from([[5.0, 6.0], [7.0, 8.0]])).unwrap();
        assert_eq!(m, Matrix::from([[6.0, 8.0], [10.0, 12.0]]));
        m.sub(&Matrix::from([[5.0, 6.0], [7.0, 8.0]])).unwrap();
        assert_eq!(m, Matrix::from([[1.0, 2.0], [3.0, 4.0]]));

        assert!(m.add(&Matrix::from([[1.0, 2.0, 3.0]])).is_err());
        assert!(m.sub(&Matrix::from([[1.0]])).is_err());
    }

    #[test]
    fn multiply() {
        let mut m = Matrix::from([[1.0, 0.0], [0.0, 1.0], [3.0, 1.0], [1.0, 3.0]]);
        m.multiply(&Matrix::from([[1.0], [2.0]])).unwrap();
        assert_eq!(m, Matrix::from([[1.0], [2.0], [5.0], [7.0]]));
        assert_eq!(m.shape(), (4, 1));

        let a = Matrix::from([[1.0, 2.0], [3.0, 4.0], [5.0, 6.0], [7.0, 8.0]]);
        let b = Matrix::from([[9.0, 10.0, 11.0], [12.0, 13.0, 14.0]]);
        let c = a.matmul(&b).unwrap();
        assert_eq!(c[(0, 1)], a[(0, 0)] * b[(0, 1)] + a[(0, 1)] * b[(1, 1)]);
        assert_eq!(c[(2, 2)], a[(2, 0)] * b[(0, 2)] + a[(2, 1)] * b[(1, 2)]);

        assert!(a.matmul(&Matrix::from([[1.0]])).is_err());
    }

    #[test]
    fn divide_elementwise() {
        let mut m = Matrix::from([[1.0, 2.0], [3.0, 4.0]]);
        m.divide(&Matrix::from([[5.0, 6.0], [7.0, 8.0]])).unwrap();
        assert_approx_eq!(
            m,
            Matrix::from([[0.2, 1.0 / 3.0], [3.0 / 7.0, 0.5]])
        );

        assert!(m.divide(&Matrix::from([[1.0]])).is_err());
    }

    #[test]
    fn divide_by_inverse_alternative() {
        // the sound reading of "A / B": multiply by the inverse
        let a = Matrix::from([[1.0, 2.0], [3.0, 4.0]]);
        let b = Matrix::from([[2.0, 0.0], [0.0, 4.0]]);
        let mut quotient = a.clone();
        quotient.multiply(&b.inverse().unwrap()).unwrap();
        let mut roundtrip = quotient.clone();
        roundtrip.multiply(&b).unwrap();
        assert_approx_eq!(roundtrip, a).abs(1e-12);

        // and it differs from the element-wise quotient
        let mut elementwise = a.clone();
        elementwise.divide(&b).unwrap();
        assert_eq!(
            elementwise,
            Matrix::from([[0.5, f64::INFINITY], [f64::INFINITY, 1.0]])
        );
    }

    #[test]
    fn power() {
        let mut m = Matrix::from([[1.0, 1.0], [0.0, 1.0]]);
        m.power(3).unwrap();
        assert_eq!(m, Matrix::from([[1.0, 3.0], [0.0, 1.0]]));

        let mut m = Matrix::from([[5.0, 5.0], [5.0, 5.0]]);
        m.power(0).unwrap();
        assert_eq!(m, Matrix::from([[1.0, 0.0], [0.0, 1.0]]));

        let mut m = Matrix::from([[2.0, 0.0], [0.0, 2.0]]);
        m.power(1).unwrap();
        assert_eq!(m, Matrix::from([[2.0, 0.0], [0.0, 2.0]]));

        assert!(Matrix::from([[1.0, 2.0]]).power(2).is_err());
    }

    #[test]
    fn exp() {
        // e^0 = I
        let mut m = Matrix::from([[0.0, 0.0], [0.0, 0.0]]);
        m.exp(3).unwrap();
        assert_eq!(m, Matrix::from([[1.0, 0.0], [0.0, 1.0]]));

        // nilpotent: e^A = I + A, and degree 1 already reproduces it exactly
        let mut m = Matrix::from([[0.0, 1.0], [0.0, 0.0]]);
        m.exp(1).unwrap();
        assert_approx_eq!(m, Matrix::from([[1.0, 1.0], [0.0, 1.0]])).abs(1e-12);

        // e^I has e on the diagonal
        let mut m = Matrix::from([[1.0, 0.0], [0.0, 1.0]]);
        m.exp(6).unwrap();
        assert_approx_eq!(m, Matrix::from([[E, 0.0], [0.0, E]])).abs(1e-6);

        assert!(matches!(
            Matrix::from([[1.0, 0.0], [0.0, 1.0]]).exp(0),
            Err(Error::InvalidArgument { .. })
        ));
        assert!(matches!(
            Matrix::from([[1.0, 2.0]]).exp(2),
            Err(Error::NotSquare { .. })
        ));
    }

    #[test]
    fn pow() {
        // 2^I has 2 on the diagonal
        let mut m = Matrix::from([[1.0, 0.0], [0.0, 1.0]]);
        m.pow(2.0, 6).unwrap();
        assert_approx_eq!(m, Matrix::from([[2.0, 0.0], [0.0, 2.0]])).abs(1e-6);

        assert!(matches!(
            Matrix::from([[1.0, 0.0], [0.0, 1.0]]).pow(-2.0, 3),
            Err(Error::InvalidArgument { .. })
        ));
        assert!(matches!(
            Matrix::from([[1.0, 0.0], [0.0, 1.0]]).pow(0.0, 3),
            Err(Error::InvalidArgument { .. })
        ));
    }

    #[test]
    fn columns_and_rows_dispatch() {
        let m = Matrix::from([[1.0, 0.0], [0.0, 1.0], [7.0, 8.0]]);
        assert_eq!(
            m.columns(),
            vec![
                AnyVector::Three(vec3(1.0, 0.0, 7.0)),
                AnyVector::Three(vec3(0.0, 1.0, 8.0)),
            ]
        );
        assert_eq!(
            m.rows(),
            vec![
                AnyVector::Two(vec2(1.0, 0.0)),
                AnyVector::Two(vec2(0.0, 1.0)),
                AnyVector::Two(vec2(7.0, 8.0)),
            ]
        );

        let wide = Matrix::from([[1.0, 2.0, 3.0, 4.0]]);
        assert!(matches!(wide.rows()[0], AnyVector::N(_)));
        assert!(matches!(wide.columns()[0], AnyVector::One(_)));
    }

    #[test]
    fn fmt() {
        let m = Matrix::from([[0.0, 1.0], [2.0, 3.0]]);
        assert_eq!(format!("{m:?}"), "[[0.0, 1.0], [2.0, 3.0]]");
        assert_eq!(format!("{m}"), "[[0, 1], [2, 3]]");
    }
}
