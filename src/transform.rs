use std::fmt;

use crate::approx::ApproxEq;
use crate::error::{Error, Result};
use crate::matrix::Matrix;
use crate::vecn::VecN;
use crate::vector::{vec1, vec2, vec3, Vec1, Vec2, Vec3};

/// A vector of any dimension, tagged with its concrete type.
///
/// Matrix application can produce a result of any dimensionality, so
/// [`Vector::transform`], [`VecN::transform`], [`Matrix::columns`] and
/// [`Matrix::rows`] return this sum type: dimensions 1 through 3 use the
/// corresponding fixed vector, everything else falls back to [`VecN`].
///
/// [`Vector::transform`]: crate::Vector::transform
#[derive(Clone, PartialEq)]
pub enum AnyVector {
    One(Vec1),
    Two(Vec2),
    Three(Vec3),
    N(VecN),
}

impl AnyVector {
    /// Wraps a flat component list in the concrete vector type matching its
    /// length.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecmat::*;
    /// assert_eq!(AnyVector::from_components(&[1.0, 2.0]), AnyVector::Two(vec2(1.0, 2.0)));
    /// assert_eq!(AnyVector::from_components(&[1.0; 5]).dimensions(), 5);
    /// ```
    pub fn from_components(components: &[f64]) -> Self {
        match *components {
            [x] => Self::One(vec1(x)),
            [x, y] => Self::Two(vec2(x, y)),
            [x, y, z] => Self::Three(vec3(x, y, z)),
            _ => Self::N(VecN::new(components)),
        }
    }

    /// The dimension of the wrapped vector.
    pub fn dimensions(&self) -> usize {
        match self {
            Self::One(_) => 1,
            Self::Two(_) => 2,
            Self::Three(_) => 3,
            Self::N(v) => v.dimensions(),
        }
    }

    /// The magnitude of the wrapped vector.
    pub fn mag(&self) -> f64 {
        match self {
            Self::One(v) => v.mag(),
            Self::Two(v) => v.mag(),
            Self::Three(v) => v.mag(),
            Self::N(v) => v.mag(),
        }
    }

    /// The components of the wrapped vector, in axis order.
    pub fn as_slice(&self) -> &[f64] {
        match self {
            Self::One(v) => v.as_slice(),
            Self::Two(v) => v.as_slice(),
            Self::Three(v) => v.as_slice(),
            Self::N(v) => v.as_slice(),
        }
    }

    /// Converts the wrapped vector into a uniform [`VecN`].
    pub fn into_vecn(self) -> VecN {
        match self {
            Self::One(v) => v.to_vecn(),
            Self::Two(v) => v.to_vecn(),
            Self::Three(v) => v.to_vecn(),
            Self::N(v) => v,
        }
    }
}

impl AsRef<[f64]> for AnyVector {
    #[inline]
    fn as_ref(&self) -> &[f64] {
        self.as_slice()
    }
}

impl fmt::Debug for AnyVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::One(v) => write!(f, "One{v:?}"),
            Self::Two(v) => write!(f, "Two{v:?}"),
            Self::Three(v) => write!(f, "Three{v:?}"),
            Self::N(v) => write!(f, "N({v:?})"),
        }
    }
}

impl ApproxEq for AnyVector {
    fn abs_diff_eq(&self, other: &Self, abs_tolerance: f64) -> bool {
        self.as_slice().abs_diff_eq(other.as_slice(), abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: f64) -> bool {
        self.as_slice().rel_diff_eq(other.as_slice(), rel_tolerance)
    }

    fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
        self.as_slice().ulps_diff_eq(other.as_slice(), ulps_tolerance)
    }
}

/// Applies `matrix` to a vector given by its flat components.
///
/// The components form a column matrix that is left-multiplied by `matrix`;
/// the row count of the product picks the concrete type of the result. Fails
/// with [`Error::DimensionMismatch`] when the matrix's column count does not
/// equal the vector's dimension.
pub(crate) fn apply(matrix: &Matrix, components: &[f64]) -> Result<AnyVector> {
    if matrix.ncols() != components.len() {
        return Err(Error::dim(matrix.ncols(), components.len()));
    }

    let column = Matrix::new(components.len(), 1, components.to_vec())?;
    let product = matrix.matmul(&column)?;

    Ok(AnyVector::from_components(product.as_slice()))
}

#[cfg(test)]
mod tests {
    use crate::{vec1, vec2, vec3, Matrix, VecN};

    use super::*;

    #[test]
    fn from_components_dispatch() {
        assert_eq!(AnyVector::from_components(&[7.0]), AnyVector::One(vec1(7.0)));
        assert_eq!(
            AnyVector::from_components(&[1.0, 2.0]),
            AnyVector::Two(vec2(1.0, 2.0))
        );
        assert_eq!(
            AnyVector::from_components(&[1.0, 2.0, 3.0]),
            AnyVector::Three(vec3(1.0, 2.0, 3.0))
        );
        assert_eq!(
            AnyVector::from_components(&[1.0, 2.0, 3.0, 4.0]),
            AnyVector::N(VecN::new([1.0, 2.0, 3.0, 4.0]))
        );
    }

    #[test]
    fn identity_transform_is_identity() {
        let m = Matrix::from([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
        let v = vec3(1.0, 2.0, 3.0);
        assert_eq!(v.transform(&m).unwrap(), AnyVector::Three(v));
    }

    #[test]
    fn transform_changes_dimension() {
        // down to 1D
        let v = vec3(1.0, 1.0, 1.0);
        let m = Matrix::from([[1.0, 0.0, 0.0]]);
        assert_eq!(v.transform(&m).unwrap(), AnyVector::One(vec1(1.0)));

        // 2D up to 3D
        let v = vec2(1.0, 2.0);
        let m = Matrix::from([[1.0, 0.0], [0.0, 1.0], [1.0, 1.0]]);
        assert_eq!(v.transform(&m).unwrap(), AnyVector::Three(vec3(1.0, 2.0, 3.0)));

        // 2D down to 1D
        let m = Matrix::from([[1.0, 0.0]]);
        assert_eq!(v.transform(&m).unwrap(), AnyVector::One(vec1(1.0)));

        // 2D out to ND
        let m = Matrix::from([[1.0, 0.0], [0.0, 1.0], [3.0, 1.0], [1.0, 3.0]]);
        assert_eq!(
            v.transform(&m).unwrap(),
            AnyVector::N(VecN::new([1.0, 2.0, 5.0, 7.0]))
        );
    }

    #[test]
    fn raw_grid_is_wrapped_on_the_fly() {
        let v = vec2(1.0, 2.0);
        assert_eq!(
            v.transform([[0.0, 1.0], [1.0, 0.0]]).unwrap(),
            AnyVector::Two(vec2(2.0, 1.0))
        );
    }

    #[test]
    fn mismatched_columns() {
        let v = vec2(1.0, 2.0);
        let m = Matrix::from([[1.0, 0.0, 0.0]]);
        assert_eq!(v.transform(&m).unwrap_err(), crate::Error::dim(3, 2));
    }

    #[test]
    fn accessors() {
        let any = AnyVector::from_components(&[3.0, 4.0]);
        assert_eq!(any.dimensions(), 2);
        assert_eq!(any.mag(), 5.0);
        assert_eq!(any.as_slice(), &[3.0, 4.0]);
        assert_eq!(any.into_vecn(), VecN::new([3.0, 4.0]));
    }

    #[test]
    fn fmt() {
        assert_eq!(
            format!("{:?}", AnyVector::from_components(&[1.0, 2.0])),
            "Two(1.0, 2.0)"
        );
        assert_eq!(
            format!("{:?}", AnyVector::from_components(&[1.0, 2.0, 3.0, 4.0])),
            "N([1.0, 2.0, 3.0, 4.0])"
        );
    }
}
