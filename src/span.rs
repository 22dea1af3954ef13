use crate::matrix::Matrix;
use crate::transform::AnyVector;
use crate::vecn::VecN;

/// A set of basis vectors describing a subspace.
///
/// Produced by [`span`] (columns of a matrix) or [`span_vector`] (a single
/// vector); consumed by [`collinear`].
#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    /// The basis vectors, each in the concrete type matching its length.
    pub basis: Vec<AnyVector>,
    /// The number of basis vectors.
    pub dimension: usize,
}

/// Derives a candidate basis from a matrix: its columns, read out as vectors.
///
/// # Examples
///
/// ```
/// # use vecmat::*;
/// let m = Matrix::from([[1.0, 0.0], [0.0, 1.0]]);
/// let s = span(&m);
/// assert_eq!(s.dimension, 2);
/// assert_eq!(s.basis[0], AnyVector::Two(vec2(1.0, 0.0)));
/// ```
pub fn span(m: &Matrix) -> Span {
    Span {
        basis: m.columns(),
        dimension: m.ncols(),
    }
}

/// Wraps a single vector-like value in a trivial one-vector span.
pub fn span_vector(v: impl AsRef<[f64]>) -> Span {
    Span {
        basis: vec![AnyVector::N(VecN::new(v.as_ref()))],
        dimension: 1,
    }
}

/// Tests whether `v` lies along the direction of `span`.
///
/// A multi-vector span is first collapsed into the sum of its basis vectors.
/// The result is `false` on dimension mismatch and for a zero `v`, and `true`
/// for a zero span. Otherwise the first nonzero component of `v` fixes a
/// reference ratio that every other component pair must reproduce exactly.
///
/// # Examples
///
/// ```
/// # use vecmat::*;
/// assert!(collinear(&span_vector([1.0, 1.0, 1.0]), [2.0, 2.0, 2.0]));
/// assert!(!collinear(&span_vector([1.0, 1.0, 1.0]), [3.0, 2.0, 5.0]));
/// ```
pub fn collinear(span: &Span, v: impl AsRef<[f64]>) -> bool {
    let v = v.as_ref();

    let Some(flat) = flatten_basis(span) else {
        return false;
    };

    if flat.len() != v.len() {
        return false;
    }
    if v.iter().all(|&c| c == 0.0) {
        return false;
    }
    if flat.iter().all(|&c| c == 0.0) {
        return true;
    }

    // both have at least one nonzero element
    let Some(index) = v.iter().position(|&c| c != 0.0) else {
        return false;
    };
    let ratio = flat[index] / v[index];

    flat.iter()
        .zip(v)
        .enumerate()
        .all(|(i, (&s, &c))| i == index || s / c == ratio)
}

/// Sums the span's basis into one flat sequence; `None` when the basis is
/// empty or its vectors disagree in dimension.
fn flatten_basis(span: &Span) -> Option<Vec<f64>> {
    let mut basis = span.basis.iter();
    let mut flat = basis.next()?.as_slice().to_vec();
    for vector in basis {
        let components = vector.as_slice();
        if components.len() != flat.len() {
            return None;
        }
        for (acc, c) in flat.iter_mut().zip(components) {
            *acc += c;
        }
    }
    Some(flat)
}
