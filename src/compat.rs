//! Adapter traits mirroring the method surface of the popular JS 3D-graphics
//! libraries.
//!
//! Code migrating from such a library can bring these traits into scope and
//! keep calling the names it knows; everything here forwards to the core
//! operations and none of the core types depend on this module.

use crate::matrix::Matrix;
use crate::vector::{vec2, Vector};

/// Graphics-library method aliases for 2D vectors.
pub trait Vec2Compat {
    /// Sets both components at once.
    fn set(&mut self, x: f64, y: f64) -> &mut Self;

    /// Applies a 3x3 affine transform given as a column-major element array.
    fn apply_matrix3(&mut self, elements: &[f64; 9]) -> &mut Self;
}

impl Vec2Compat for Vector<2> {
    fn set(&mut self, x: f64, y: f64) -> &mut Self {
        self.copy_from(vec2(x, y))
    }

    fn apply_matrix3(&mut self, e: &[f64; 9]) -> &mut Self {
        let [x, y] = self.coords();
        self.copy_from(vec2(e[0] * x + e[3] * y + e[6], e[1] * x + e[4] * y + e[7]))
    }
}

/// Graphics-library method aliases for 3D vectors.
pub trait Vec3Compat {
    /// Sets all three components at once.
    fn set(&mut self, x: f64, y: f64, z: f64) -> &mut Self;

    /// The taxicab length `|x| + |y| + |z|`.
    fn manhattan_length(&self) -> f64;

    /// Applies a 4x4 homogeneous transform given as a column-major element
    /// array, dividing by the resulting `w` coordinate.
    fn apply_matrix4(&mut self, elements: &[f64; 16]) -> &mut Self;
}

impl Vec3Compat for Vector<3> {
    fn set(&mut self, x: f64, y: f64, z: f64) -> &mut Self {
        self.copy_from([x, y, z])
    }

    fn manhattan_length(&self) -> f64 {
        self.iter().map(|c| c.abs()).sum()
    }

    fn apply_matrix4(&mut self, e: &[f64; 16]) -> &mut Self {
        let [x, y, z] = self.coords();
        let w = 1.0 / (e[3] * x + e[7] * y + e[11] * z + e[15]);
        self.copy_from([
            (e[0] * x + e[4] * y + e[8] * z + e[12]) * w,
            (e[1] * x + e[5] * y + e[9] * z + e[13]) * w,
            (e[2] * x + e[6] * y + e[10] * z + e[14]) * w,
        ])
    }
}

/// Graphics-library constructors for matrices.
pub trait MatrixCompat {
    /// Builds the 4x4 orthographic projection matrix for the given frustum.
    fn make_orthographic(
        left: f64,
        right: f64,
        top: f64,
        bottom: f64,
        near: f64,
        far: f64,
    ) -> Matrix;
}

impl MatrixCompat for Matrix {
    fn make_orthographic(
        left: f64,
        right: f64,
        top: f64,
        bottom: f64,
        near: f64,
        far: f64,
    ) -> Matrix {
        let w = 1.0 / (right - left);
        let h = 1.0 / (top - bottom);
        let p = 1.0 / (far - near);

        Matrix::from([
            [2.0 * w, 0.0, 0.0, -(right + left) * w],
            [0.0, 2.0 * h, 0.0, -(top + bottom) * h],
            [0.0, 0.0, -2.0 * p, -(far + near) * p],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }
}

#[cfg(test)]
mod tests {
    use crate::{vec2, vec3, Matrix};

    use super::*;

    #[test]
    fn set() {
        let mut v = vec2(1.0, 2.0);
        v.set(3.0, 4.0);
        assert_eq!(v.coords(), [3.0, 4.0]);
        assert_eq!(v.mag(), 5.0);

        let mut v = vec3(1.0, 2.0, 3.0);
        Vec3Compat::set(&mut v, 0.0, 3.0, 4.0);
        assert_eq!(v.coords(), [0.0, 3.0, 4.0]);
        assert_eq!(v.mag(), 5.0);
    }

    #[test]
    fn apply_matrix3() {
        let mut v = vec2(1.0, 2.0);
        // column-major scale(2, 1/2)
        v.apply_matrix3(&[2.0, 0.0, 0.0, 0.0, 0.5, 0.0, 0.0, 0.0, 1.0]);
        assert_eq!(v.coords(), [2.0, 1.0]);

        let mut v = vec2(1.0, 1.0);
        // column-major translation by (5, -3)
        v.apply_matrix3(&[1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 5.0, -3.0, 1.0]);
        assert_eq!(v.coords(), [6.0, -2.0]);
    }

    #[test]
    fn apply_matrix4() {
        let mut v = vec3(1.0, 2.0, 3.0);
        // column-major identity
        let mut e = [0.0; 16];
        e[0] = 1.0;
        e[5] = 1.0;
        e[10] = 1.0;
        e[15] = 1.0;
        v.apply_matrix4(&e);
        assert_eq!(v.coords(), [1.0, 2.0, 3.0]);

        // uniform scale by 2 with w = 1
        e[0] = 2.0;
        e[5] = 2.0;
        e[10] = 2.0;
        v.apply_matrix4(&e);
        assert_eq!(v.coords(), [2.0, 4.0, 6.0]);
    }

    #[test]
    fn manhattan_length() {
        assert_eq!(vec3(1.0, -2.0, 3.0).manhattan_length(), 6.0);
    }

    #[test]
    fn make_orthographic() {
        // a symmetric unit frustum maps to a z-flip
        let m = Matrix::make_orthographic(-1.0, 1.0, 1.0, -1.0, -1.0, 1.0);
        assert_eq!(
            m,
            Matrix::from([
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, -1.0, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ])
        );
    }
}
