use std::fmt;

use crate::error::{Error, Result};

/// A higher-rank numeric container: flat data plus a shape.
///
/// `Tensor` is an independent placeholder with no ties to the vector and
/// matrix types; it currently supports element-wise addition and subtraction
/// only.
#[derive(Clone, PartialEq)]
pub struct Tensor {
    data: Vec<f64>,
    shape: Vec<usize>,
}

impl Tensor {
    /// Creates a tensor of the given shape from flat data.
    ///
    /// Fails with [`Error::InvalidInput`] when the data length does not equal
    /// the product of the shape's extents.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecmat::*;
    /// let t = Tensor::from_shape_vec(vec![2, 2], vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    /// assert_eq!(t.shape(), &[2, 2]);
    /// ```
    pub fn from_shape_vec(shape: Vec<usize>, data: Vec<f64>) -> Result<Self> {
        let elements: usize = shape.iter().product();
        if data.len() != elements {
            return Err(Error::InvalidInput {
                reason: "data length does not match the tensor shape",
            });
        }
        Ok(Self { data, shape })
    }

    /// Creates a zero-filled tensor of the given shape.
    pub fn zeros(shape: Vec<usize>) -> Self {
        let elements = shape.iter().product();
        Self {
            data: vec![0.0; elements],
            shape,
        }
    }

    /// The extents of each dimension.
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// The flat data in row-major order.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    fn check_shape(&self, other: &Tensor) -> Result<()> {
        if self.shape != other.shape {
            return Err(Error::shape(&self.shape, &other.shape));
        }
        Ok(())
    }

    /// Adds another tensor to this tensor, element-wise.
    ///
    /// Fails with [`Error::DimensionMismatch`] when the shapes differ.
    pub fn add(&mut self, other: &Tensor) -> Result<&mut Self> {
        self.check_shape(other)?;
        for (c, o) in self.data.iter_mut().zip(&other.data) {
            *c += o;
        }
        Ok(self)
    }

    /// Subtracts another tensor from this tensor, element-wise.
    ///
    /// Fails with [`Error::DimensionMismatch`] when the shapes differ.
    pub fn sub(&mut self, other: &Tensor) -> Result<&mut Self> {
        self.check_shape(other)?;
        for (c, o) in self.data.iter_mut().zip(&other.data) {
            *c -= o;
        }
        Ok(self)
    }
}

impl fmt::Debug for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tensor")
            .field("shape", &self.shape)
            .field("data", &self.data)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair() -> (Tensor, Tensor) {
        (
            Tensor::from_shape_vec(vec![2, 2], vec![1.0, 2.0, 3.0, 4.0]).unwrap(),
            Tensor::from_shape_vec(vec![2, 2], vec![5.0, 6.0, 7.0, 8.0]).unwrap(),
        )
    }

    #[test]
    fn add() {
        let (mut a, b) = pair();
        a.add(&b).unwrap();
        assert_eq!(a.as_slice(), &[6.0, 8.0, 10.0, 12.0]);
    }

    #[test]
    fn sub() {
        let (mut a, b) = pair();
        a.sub(&b).unwrap();
        assert_eq!(a.as_slice(), &[-4.0, -4.0, -4.0, -4.0]);
    }

    #[test]
    fn shape_mismatch() {
        let (mut a, _) = pair();
        let c = Tensor::from_shape_vec(vec![2, 3], vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        assert_eq!(
            a.add(&c).unwrap_err(),
            Error::shape(&[2, 2], &[2, 3])
        );
        assert!(a.sub(&c).is_err());
    }

    #[test]
    fn construction() {
        assert!(Tensor::from_shape_vec(vec![2, 2], vec![1.0]).is_err());
        let t = Tensor::zeros(vec![3]);
        assert_eq!(t.shape(), &[3]);
        assert_eq!(t.as_slice(), &[0.0, 0.0, 0.0]);

        let rank3 = Tensor::zeros(vec![2, 2, 2]);
        assert_eq!(rank3.as_slice().len(), 8);
    }
}
