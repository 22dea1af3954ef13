//! Free-standing helpers for building vectors and matrices from raw buffers.

use crate::error::{Error, Result};
use crate::matrix::Matrix;
use crate::transform::AnyVector;
use crate::vecn::VecN;

/// Decodes a flat buffer into vectors of `stride` components each.
///
/// Each chunk becomes the concrete vector type matching the stride. Fails
/// with [`Error::InvalidArgument`] for a zero stride and
/// [`Error::InvalidInput`] when the buffer length is not divisible by the
/// stride.
///
/// # Examples
///
/// ```
/// # use vecmat::*;
/// let vecs = from_flat(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 3).unwrap();
/// assert_eq!(vecs[0], AnyVector::Three(vec3(1.0, 2.0, 3.0)));
/// assert_eq!(vecs[1], AnyVector::Three(vec3(4.0, 5.0, 6.0)));
/// ```
pub fn from_flat(buffer: &[f64], stride: usize) -> Result<Vec<AnyVector>> {
    if stride == 0 {
        return Err(Error::InvalidArgument {
            reason: "stride must be positive",
        });
    }
    if buffer.len() % stride != 0 {
        return Err(Error::InvalidInput {
            reason: "buffer length is not divisible by the stride",
        });
    }

    Ok(buffer
        .chunks_exact(stride)
        .map(AnyVector::from_components)
        .collect())
}

/// Stacks equal-length rows into a matrix.
///
/// Fails with [`Error::InvalidInput`] when no rows are given and with
/// [`Error::DimensionMismatch`] when the rows disagree in length.
pub fn vstack(rows: &[&[f64]]) -> Result<Matrix> {
    let Some(first) = rows.first() else {
        return Err(Error::InvalidInput {
            reason: "matrix must have at least one element",
        });
    };
    let cols = first.len();
    let mut data = Vec::with_capacity(rows.len() * cols);
    for row in rows {
        if row.len() != cols {
            return Err(Error::dim(cols, row.len()));
        }
        data.extend_from_slice(row);
    }
    Matrix::new(rows.len(), cols, data)
}

/// Concatenates the given pieces into one long vector.
pub fn hstack(parts: &[&[f64]]) -> VecN {
    VecN::new(parts.concat())
}

/// Returns `count` evenly spaced values from `start` to `stop`, inclusive.
///
/// # Examples
///
/// ```
/// # use vecmat::*;
/// let x = linspace(0.0, 1.0, 11);
/// assert_eq!(x.dimensions(), 11);
/// assert_eq!(x.get(5), Some(0.5));
/// ```
pub fn linspace(start: f64, stop: f64, count: usize) -> VecN {
    match count {
        0 => VecN::new(Vec::new()),
        1 => VecN::new([start]),
        _ => {
            let step = (stop - start) / (count - 1) as f64;
            VecN::new(
                (0..count)
                    .map(|i| start + step * i as f64)
                    .collect::<Vec<_>>(),
            )
        }
    }
}

/// Returns the zero vector in `R^n`.
pub fn zeros(n: usize) -> VecN {
    VecN::zeros(n)
}

/// Returns the unit vector pointing in the direction of `v`.
///
/// The zero vector has no direction and is returned unchanged.
pub fn normalize(v: impl AsRef<[f64]>) -> VecN {
    let mut out = VecN::new(v.as_ref());
    out.unit();
    out
}

#[cfg(test)]
mod tests {
    use crate::{assert_approx_eq, vec1, vec2, vec3, VecN};

    use super::*;

    #[test]
    fn from_flat_strides() {
        let vecs = from_flat(&[1.0, 2.0, 3.0, 4.0], 1).unwrap();
        assert_eq!(vecs.len(), 4);
        assert_eq!(vecs[0], AnyVector::One(vec1(1.0)));

        let vecs = from_flat(&[1.0, 2.0, 3.0, 4.0], 2).unwrap();
        assert_eq!(vecs, vec![
            AnyVector::Two(vec2(1.0, 2.0)),
            AnyVector::Two(vec2(3.0, 4.0)),
        ]);

        let vecs = from_flat(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 3).unwrap();
        assert_eq!(vecs, vec![
            AnyVector::Three(vec3(1.0, 2.0, 3.0)),
            AnyVector::Three(vec3(4.0, 5.0, 6.0)),
        ]);

        let vecs = from_flat(&[1.0, 2.0, 3.0, 4.0], 4).unwrap();
        assert_eq!(vecs, vec![AnyVector::N(VecN::new([1.0, 2.0, 3.0, 4.0]))]);
    }

    #[test]
    fn from_flat_errors() {
        assert!(matches!(
            from_flat(&[1.0, 2.0], 0),
            Err(crate::Error::InvalidArgument { .. })
        ));
        assert!(matches!(
            from_flat(&[1.0, 2.0, 3.0], 2),
            Err(crate::Error::InvalidInput { .. })
        ));
    }

    #[test]
    fn stacking() {
        let m = vstack(&[&[1.0, 2.0, 3.0, 4.0], &[4.0, 3.0, 2.0, 1.0]]).unwrap();
        assert_eq!(
            m,
            crate::Matrix::from([[1.0, 2.0, 3.0, 4.0], [4.0, 3.0, 2.0, 1.0]])
        );

        assert!(vstack(&[]).is_err());
        assert!(vstack(&[&[1.0], &[1.0, 2.0]]).is_err());

        let v = hstack(&[&[1.0, 2.0], &[3.0]]);
        assert_eq!(v, [1.0, 2.0, 3.0]);
    }

    #[test]
    fn linspace_endpoints() {
        let x = linspace(0.0, 1.0, 11);
        assert_eq!(x.dimensions(), 11);
        assert_eq!(x.get(0), Some(0.0));
        assert_approx_eq!(x.get(3).unwrap(), 0.3);
        assert_eq!(x.get(10), Some(1.0));

        assert_eq!(linspace(2.0, 5.0, 1), [2.0]);
        assert_eq!(linspace(2.0, 5.0, 0).dimensions(), 0);
    }

    #[test]
    fn zeros_and_normalize() {
        assert_eq!(zeros(3), [0.0, 0.0, 0.0]);
        assert_eq!(normalize([3.0, 4.0]), [0.6, 0.8]);
        assert_eq!(normalize([0.0, 0.0]), [0.0, 0.0]);
    }
}
