use std::{array, fmt};

use crate::error::{Error, Result};
use crate::matrix::Matrix;
use crate::transform::{self, AnyVector};
use crate::vecn::VecN;

mod ops;
mod view;

/// A 1-dimensional vector.
pub type Vec1 = Vector<1>;
/// A 2-dimensional vector.
pub type Vec2 = Vector<2>;
/// A 3-dimensional vector.
pub type Vec3 = Vector<3>;

/// An angle, either in radians or in degrees.
///
/// Every angle-taking operation accepts `impl Into<Angle>`; a bare `f64` is
/// interpreted as radians. Returned angles are always radians.
///
/// # Examples
///
/// ```
/// # use vecmat::*;
/// assert_eq!(Angle::Degrees(180.0).into_radians(), std::f64::consts::PI);
/// assert_eq!(Angle::from(1.5).into_radians(), 1.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Angle {
    Radians(f64),
    Degrees(f64),
}

impl Angle {
    /// Returns the angle value in radians.
    pub fn into_radians(self) -> f64 {
        match self {
            Self::Radians(r) => r,
            Self::Degrees(d) => d.to_radians(),
        }
    }
}

impl From<f64> for Angle {
    #[inline]
    fn from(radians: f64) -> Self {
        Self::Radians(radians)
    }
}

/// A positive coordinate axis.
///
/// The `i`/`j`/`k` unit-vector symbols are provided as associated constant
/// aliases for the corresponding axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// The `i` unit-vector symbol (alias of [`Axis::X`]).
    pub const I: Axis = Axis::X;
    /// The `j` unit-vector symbol (alias of [`Axis::Y`]).
    pub const J: Axis = Axis::Y;
    /// The `k` unit-vector symbol (alias of [`Axis::Z`]).
    pub const K: Axis = Axis::Z;

    fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }
}

/// An `N`-element column vector with a cached Euclidean magnitude.
///
/// # Construction
///
/// There is a variety of ways to create a [`Vector`]:
///
/// - The freestanding [`vec1`], [`vec2`] and [`vec3`] functions directly
///   create vectors from provided values.
/// - [`Vector::splat`] creates a vector by copying the given value into each
///   element.
/// - [`Vector::from_fn`] creates a vector by invoking a closure with the index
///   of each element.
/// - Vectors can be created from arrays and coordinate tuples using their
///   [`From`] implementations, and from slices with [`TryFrom`] (which fails
///   with [`Error::InvalidInput`] when the length does not match `N`).
/// - [`Vector::ZERO`] is a vector containing all-zeroes.
/// - For vectors with up to 3 dimensions, `Vector::X`, `Vector::Y` and
///   `Vector::Z` can be used to obtain unit vectors pointing in the given
///   direction.
///
/// # Element access
///
/// - Elements can be read as fields `x`, `y` and `z` (aliases `i`, `j`, `k`)
///   through read-only views.
/// - The [`Index`] impl can be used just like on arrays.
/// - [`Vector::as_array`], [`Vector::as_slice`] and [`Vector::coords`] expose
///   the underlying elements; [`Vector::iter`] yields them in axis order.
///
/// There is deliberately no `IndexMut` and no mutable view: every mutation
/// goes through a method ([`Vector::set_component`] or the named `set_*`
/// setters) so that the cached magnitude always equals the Euclidean norm of
/// the components.
///
/// # Mutation and chaining
///
/// The mutating operations take `&mut self` and return `&mut Self`, so they
/// can be chained fluently. The `std::ops` operators (`+`, `-`, `*`, `/`,
/// unary `-`) are their non-mutating counterparts and return new vectors;
/// callers that want to keep the pre-operation value either use the operators
/// or clone first.
///
/// [`Index`]: std::ops::Index
#[derive(Clone, Copy)]
#[repr(C)]
pub struct Vector<const N: usize> {
    components: [f64; N],
    mag: f64,
}

impl<const N: usize> Vector<N> {
    /// A vector with each element initialized to 0.
    pub const ZERO: Self = Self {
        components: [0.0; N],
        mag: 0.0,
    };

    /// Creates a vector from its component array.
    pub fn new(components: [f64; N]) -> Self {
        let mut this = Self {
            components,
            mag: 0.0,
        };
        this.refresh();
        this
    }

    /// Creates a vector with each element initialized to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecmat::*;
    /// let v = Vector::splat(2.0);
    /// assert_eq!(v, vec3(2.0, 2.0, 2.0));
    /// ```
    pub fn splat(elem: f64) -> Self {
        Self::new([elem; N])
    }

    /// Creates a vector where each element is initialized by invoking a
    /// closure with its index.
    ///
    /// Analogous to [`array::from_fn`].
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> f64,
    {
        Self::new(array::from_fn(cb))
    }

    /// Applies a closure to each element, returning a new vector.
    pub fn map<F>(self, f: F) -> Self
    where
        F: FnMut(f64) -> f64,
    {
        Self::new(self.components.map(f))
    }

    fn refresh(&mut self) {
        self.mag = self.components.iter().map(|c| c * c).sum::<f64>().sqrt();
    }

    /// The dimension of the vector.
    pub const fn dimensions(&self) -> usize {
        N
    }

    /// The cached Euclidean norm of the components.
    ///
    /// This is kept up to date by every mutating operation.
    #[inline]
    pub const fn mag(&self) -> f64 {
        self.mag
    }

    /// Returns the components as an array.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecmat::*;
    /// assert_eq!(vec2(1.0, 2.0).coords(), [1.0, 2.0]);
    /// ```
    #[inline]
    pub const fn coords(&self) -> [f64; N] {
        self.components
    }

    /// Returns a reference to the underlying elements as an array of length `N`.
    #[inline]
    pub const fn as_array(&self) -> &[f64; N] {
        &self.components
    }

    /// Returns a reference to the underlying elements as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[f64] {
        &self.components
    }

    /// Returns an iterator over the components in axis order.
    ///
    /// The iterator is finite and a fresh one can be obtained at any time.
    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.components.iter()
    }

    /// Returns the component at `index`, or [`None`] if out of bounds.
    pub fn get(&self, index: usize) -> Option<f64> {
        self.components.get(index).copied()
    }

    /// Sets the component at `index`, restoring the magnitude invariant.
    ///
    /// # Panics
    ///
    /// Panics when `index >= N`.
    pub fn set_component(&mut self, index: usize, value: f64) -> &mut Self {
        assert!(index < N, "component index out of bounds");
        self.components[index] = value;
        self.refresh();
        self
    }

    /// Copies the components of another vector-like value into this vector.
    pub fn copy_from(&mut self, v: impl Into<Self>) -> &mut Self {
        self.components = v.into().components;
        self.refresh();
        self
    }

    /// Zeroes all components.
    pub fn zero(&mut self) -> &mut Self {
        self.components = [0.0; N];
        self.mag = 0.0;
        self
    }

    /// Normalizes this vector to magnitude 1, preserving its direction.
    ///
    /// The zero vector has no direction and maps to itself.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecmat::*;
    /// let mut v = vec3(0.0, 0.0, 4.0);
    /// assert_eq!(*v.unit(), vec3(0.0, 0.0, 1.0));
    /// ```
    pub fn unit(&mut self) -> &mut Self {
        if self.mag != 0.0 {
            let m = self.mag;
            for c in &mut self.components {
                *c /= m;
            }
            self.refresh();
        }
        self
    }

    /// Reverses the direction of all axes, making the vector anti-parallel to
    /// its previous direction.
    pub fn antiparallel(&mut self) -> &mut Self {
        for c in &mut self.components {
            *c = -*c;
        }
        self
    }

    /// Alias for [`Vector::antiparallel`].
    pub fn oppose(&mut self) -> &mut Self {
        self.antiparallel()
    }

    /// Element-wise maximum between `self` and `v`.
    pub fn max(&mut self, v: impl Into<Self>) -> &mut Self {
        let v = v.into();
        for (c, o) in self.components.iter_mut().zip(v.components) {
            *c = c.max(o);
        }
        self.refresh();
        self
    }

    /// Element-wise minimum between `self` and `v`.
    pub fn min(&mut self, v: impl Into<Self>) -> &mut Self {
        let v = v.into();
        for (c, o) in self.components.iter_mut().zip(v.components) {
            *c = c.min(o);
        }
        self.refresh();
        self
    }

    /// Rounds all components up.
    pub fn ceil(&mut self) -> &mut Self {
        self.components = self.components.map(f64::ceil);
        self.refresh();
        self
    }

    /// Rounds all components down.
    pub fn floor(&mut self) -> &mut Self {
        self.components = self.components.map(f64::floor);
        self.refresh();
        self
    }

    /// Rounds all components to the nearest integer.
    pub fn round(&mut self) -> &mut Self {
        self.components = self.components.map(f64::round);
        self.refresh();
        self
    }

    /// Clamps each component between the matching components of `min` and
    /// `max`.
    ///
    /// Assumes `min <= max` component-wise.
    pub fn clamp(&mut self, min: impl Into<Self>, max: impl Into<Self>) -> &mut Self {
        let min = min.into();
        let max = max.into();
        for (i, c) in self.components.iter_mut().enumerate() {
            *c = min.components[i].max(max.components[i].min(*c));
        }
        self.refresh();
        self
    }

    /// Makes this vector the segment vector from point `a` to point `b`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecmat::*;
    /// let mut v = Vec2::ZERO;
    /// v.segvec([3.0, 4.0], [5.0, 6.0]);
    /// assert_eq!(v.coords(), [2.0, 2.0]);
    /// ```
    pub fn segvec(&mut self, a: impl Into<Self>, b: impl Into<Self>) -> &mut Self {
        let a = a.into();
        let b = b.into();
        for (i, c) in self.components.iter_mut().enumerate() {
            *c = b.components[i] - a.components[i];
        }
        self.refresh();
        self
    }

    /// Adds another vector to this vector.
    ///
    /// The non-mutating counterpart is the `+` operator.
    pub fn add(&mut self, v: impl Into<Self>) -> &mut Self {
        let v = v.into();
        for (c, o) in self.components.iter_mut().zip(v.components) {
            *c += o;
        }
        self.refresh();
        self
    }

    /// Subtracts another vector from this vector.
    ///
    /// The non-mutating counterpart is the `-` operator.
    pub fn sub(&mut self, v: impl Into<Self>) -> &mut Self {
        let v = v.into();
        for (c, o) in self.components.iter_mut().zip(v.components) {
            *c -= o;
        }
        self.refresh();
        self
    }

    /// Multiplies this vector by a scalar.
    ///
    /// The non-mutating counterpart is the `*` operator.
    pub fn multiply(&mut self, s: f64) -> &mut Self {
        for c in &mut self.components {
            *c *= s;
        }
        self.refresh();
        self
    }

    /// Divides this vector by a scalar.
    ///
    /// The non-mutating counterpart is the `/` operator.
    pub fn divide(&mut self, s: f64) -> &mut Self {
        for c in &mut self.components {
            *c /= s;
        }
        self.refresh();
        self
    }

    /// Computes the dot product between `self` and `v`.
    ///
    /// Geometrically, the dot product provides information about the relative
    /// angle of the two vectors:
    /// - If the dot product is greater than zero, the angle between the
    ///   vectors is less than 90°.
    /// - If the dot product is equal to zero, their angle is exactly 90°.
    /// - If the dot product is negative, the angle is greater than 90°.
    ///
    /// Also see [`Vector::between`] for computing the exact angle between them.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecmat::*;
    /// let a = vec3(1.0, 3.0, -5.0);
    /// let b = vec3(4.0, -2.0, -1.0);
    /// assert_eq!(a.dot(b), 3.0);
    /// ```
    pub fn dot(&self, v: impl Into<Self>) -> f64 {
        let v = v.into();
        self.components
            .iter()
            .zip(v.components)
            .map(|(a, b)| a * b)
            .sum()
    }

    /// Computes the Euclidean distance between `self` and `v`.
    pub fn distance(&self, v: impl Into<Self>) -> f64 {
        let v = v.into();
        self.components
            .iter()
            .zip(v.components)
            .map(|(a, b)| (a - b) * (a - b))
            .sum::<f64>()
            .sqrt()
    }

    /// Computes the smallest positive angle between `self` and `v`, in
    /// radians.
    ///
    /// Fails with [`Error::DivisionByZero`] when either operand has zero
    /// magnitude.
    pub fn between(&self, v: impl Into<Self>) -> Result<f64> {
        let v = v.into();
        if self.mag == 0.0 || v.mag == 0.0 {
            return Err(Error::DivisionByZero {
                context: "angle query on a zero-magnitude vector",
            });
        }
        // clamp guards against rounding pushing the cosine out of [-1, 1]
        Ok((self.dot(v) / (self.mag * v.mag)).clamp(-1.0, 1.0).acos())
    }

    /// Computes the angle between `self` and a positive coordinate axis, in
    /// radians.
    ///
    /// Fails with [`Error::InvalidArgument`] when the axis lies outside this
    /// vector's dimension and with [`Error::DivisionByZero`] when `self` has
    /// zero magnitude.
    pub fn between_axis(&self, axis: Axis) -> Result<f64> {
        let index = axis.index();
        if index >= N {
            return Err(Error::InvalidArgument {
                reason: "axis outside vector dimension",
            });
        }
        if self.mag == 0.0 {
            return Err(Error::DivisionByZero {
                context: "angle query on a zero-magnitude vector",
            });
        }
        Ok((self.components[index] / self.mag).clamp(-1.0, 1.0).acos())
    }

    /// Applies a matrix transformation to this vector.
    ///
    /// The vector is treated as a column matrix and left-multiplied by `m`;
    /// the result is returned as the concrete vector type matching the row
    /// count of the product. The matrix operand may be a [`Matrix`] (borrowed
    /// or owned) or a raw grid literal, which is wrapped on the fly. Fails
    /// with [`Error::DimensionMismatch`] when the matrix's column count does
    /// not equal `N`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecmat::*;
    /// let v = vec3(1.0, 2.0, 3.0)
    ///     .transform([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]])
    ///     .unwrap();
    /// assert_eq!(v, AnyVector::Three(vec3(1.0, 2.0, 3.0)));
    /// ```
    pub fn transform(&self, m: impl Into<Matrix>) -> Result<AnyVector> {
        transform::apply(&m.into(), &self.components)
    }

    /// Converts this vector into a [`VecN`] of the same dimension.
    pub fn to_vecn(&self) -> VecN {
        VecN::new(self.components)
    }
}

impl Vector<1> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self {
        components: [1.0],
        mag: 1.0,
    };

    /// The single coordinate of this vector.
    pub fn coord(&self) -> f64 {
        self.components[0]
    }

    /// Sets the `x` component.
    pub fn set_x(&mut self, x: f64) -> &mut Self {
        self.set_component(0, x)
    }

    /// Lifts this vector into 2D space by appending a zero component.
    pub fn extend(&self) -> Vector<2> {
        vec2(self.components[0], 0.0)
    }
}

impl Vector<2> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self {
        components: [1.0, 0.0],
        mag: 1.0,
    };
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self {
        components: [0.0, 1.0],
        mag: 1.0,
    };

    /// Sets the `x` component.
    pub fn set_x(&mut self, x: f64) -> &mut Self {
        self.set_component(0, x)
    }

    /// Sets the `y` component.
    pub fn set_y(&mut self, y: f64) -> &mut Self {
        self.set_component(1, y)
    }

    /// The angle of this vector in the plane, measured from the positive X
    /// axis, in radians.
    pub fn angle(&self) -> f64 {
        self.components[1].atan2(self.components[0])
    }

    /// Computes the wedge product of `self` and `v`.
    ///
    /// There is no true cross product in two dimensions; the signed scalar
    /// area of the parallelogram spanned by the two vectors is used as its
    /// substitute.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecmat::*;
    /// assert_eq!(Vec2::X.wedge(Vec2::Y), 1.0);
    /// assert_eq!(Vec2::Y.wedge(Vec2::X), -1.0);
    /// ```
    pub fn wedge(&self, v: impl Into<Self>) -> f64 {
        let v = v.into();
        self.components[0] * v.components[1] - self.components[1] * v.components[0]
    }

    /// Alias for [`Vector::wedge`].
    pub fn cross(&self, v: impl Into<Self>) -> f64 {
        self.wedge(v)
    }

    /// Replaces this vector with one of the given magnitude pointing in the
    /// direction `theta`.
    pub fn set_polar(&mut self, magnitude: f64, theta: impl Into<Angle>) -> &mut Self {
        let theta = theta.into().into_radians();
        self.components = [magnitude * theta.cos(), magnitude * theta.sin()];
        self.refresh();
        self
    }

    /// Points this vector in the direction `theta` while sustaining its
    /// magnitude.
    pub fn from_angle(&mut self, theta: impl Into<Angle>) -> &mut Self {
        let mag = self.mag;
        self.set_polar(mag, theta)
    }

    /// Rotates this vector by `delta`, relative to its current angle.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecmat::*;
    /// use std::f64::consts::FRAC_PI_2;
    ///
    /// let mut v = vec2(5.0, 0.0);
    /// v.rotate(FRAC_PI_2);
    /// assert_approx_eq!(v.coords(), [0.0, 5.0]).abs(1e-12);
    /// ```
    pub fn rotate(&mut self, delta: impl Into<Angle>) -> &mut Self {
        let theta = self.angle() + delta.into().into_radians();
        let mag = self.mag;
        self.set_polar(mag, theta)
    }

    /// Lifts this vector into 3D space with a zero `z` component.
    pub fn extend(&self) -> Vector<3> {
        vec3(self.components[0], self.components[1], 0.0)
    }
}

impl Vector<3> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self {
        components: [1.0, 0.0, 0.0],
        mag: 1.0,
    };
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self {
        components: [0.0, 1.0, 0.0],
        mag: 1.0,
    };
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self {
        components: [0.0, 0.0, 1.0],
        mag: 1.0,
    };

    /// Sets the `x` component.
    pub fn set_x(&mut self, x: f64) -> &mut Self {
        self.set_component(0, x)
    }

    /// Sets the `y` component.
    pub fn set_y(&mut self, y: f64) -> &mut Self {
        self.set_component(1, y)
    }

    /// Sets the `z` component.
    pub fn set_z(&mut self, z: f64) -> &mut Self {
        self.set_component(2, z)
    }

    /// Computes the cross product of `self` and `v`.
    ///
    /// The result is a vector that is perpendicular to both `self` and `v`
    /// following the right-hand rule; swapping the arguments inverts the
    /// direction of the resulting vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecmat::*;
    /// assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
    /// assert_eq!(Vec3::Y.cross(Vec3::X), -Vec3::Z);
    /// ```
    pub fn cross(&self, v: impl Into<Self>) -> Self {
        let [a1, a2, a3] = self.components;
        let [b1, b2, b3] = v.into().components;

        vec3(a2 * b3 - a3 * b2, a3 * b1 - a1 * b3, a1 * b2 - a2 * b1)
    }

    /// Computes the outer (direct) product of `self` and `v` as a 3x3 matrix.
    pub fn outer(&self, v: impl Into<Self>) -> Matrix {
        let [x, y, z] = self.components;
        let [u, v, w] = v.into().components;

        Matrix::from([
            [x * u, x * v, x * w],
            [y * u, y * v, y * w],
            [z * u, z * v, z * w],
        ])
    }

    /// The cylindrical coordinates `(rho, phi, z)` of this vector.
    pub fn cylinder(&self) -> (f64, f64, f64) {
        let [x, y, z] = self.components;
        (x.hypot(y), y.atan2(x), z)
    }

    /// The spherical coordinates `(r, theta, phi)` of this vector, using the
    /// mathematics convention: `theta` is the azimuthal angle in the x-y
    /// plane and `phi` the polar angle measured from the positive Z axis.
    pub fn sphere(&self) -> (f64, f64, f64) {
        let [x, y, z] = self.components;
        (self.mag, y.atan2(x), (z / self.mag).acos())
    }

    /// Replaces this vector with one of magnitude `r` pointing in the
    /// spherical direction `(theta, phi)` (mathematics convention).
    pub fn set_spherical(
        &mut self,
        r: f64,
        theta: impl Into<Angle>,
        phi: impl Into<Angle>,
    ) -> &mut Self {
        let theta = theta.into().into_radians();
        let phi = phi.into().into_radians();
        self.components = [
            r * phi.sin() * theta.cos(),
            r * phi.sin() * theta.sin(),
            r * phi.cos(),
        ];
        self.refresh();
        self
    }

    /// Points this vector in the spherical direction `(theta, phi)` while
    /// sustaining its magnitude.
    pub fn from_angles(&mut self, theta: impl Into<Angle>, phi: impl Into<Angle>) -> &mut Self {
        let mag = self.mag;
        self.set_spherical(mag, theta, phi)
    }

    /// Rotates this vector by `dtheta` around the Z axis and `dphi` away from
    /// it, relative to its current spherical direction.
    ///
    /// The zero vector has no direction and is left unchanged.
    pub fn rotate(&mut self, dtheta: impl Into<Angle>, dphi: impl Into<Angle>) -> &mut Self {
        if self.mag == 0.0 {
            return self;
        }
        let (r, theta, phi) = self.sphere();
        let theta = theta + dtheta.into().into_radians();
        let phi = phi + dphi.into().into_radians();
        self.set_spherical(r, theta, phi)
    }

    /// Projects this vector onto the 2D plane orthogonal to `axis`.
    pub fn project_axis(&self, axis: Axis) -> Vector<2> {
        let [x, y, z] = self.components;
        match axis {
            Axis::X => vec2(x, z),
            Axis::Y => vec2(y, z),
            Axis::Z => vec2(x, y),
        }
    }

    /// Projects this vector onto the viewing plane of a camera.
    ///
    /// The camera's viewing direction (the plane normal) is derived from the
    /// spherical angles of its position, offset by `yaw` and `pitch`. The
    /// vector's projection onto that normal is subtracted from it and the
    /// remainder is scaled by the distance between camera and vector to
    /// obtain the 2D plane coordinates.
    ///
    /// Fails with [`Error::DivisionByZero`] when the camera has zero
    /// magnitude (its viewing direction is undefined). A camera coinciding
    /// with the vector projects to the origin.
    pub fn project(
        &self,
        camera: impl Into<Self>,
        yaw: impl Into<Angle>,
        pitch: impl Into<Angle>,
    ) -> Result<Vector<2>> {
        let camera = camera.into();
        if camera.mag == 0.0 {
            return Err(Error::DivisionByZero {
                context: "camera with zero magnitude has no viewing direction",
            });
        }

        let d = self.distance(camera);
        if d == 0.0 {
            return Ok(Vector::ZERO);
        }

        let [cx, cy, cz] = camera.components;
        let r = camera.mag;
        let theta = cy.atan2(cx) + yaw.into().into_radians();
        let phi = (cz / r).clamp(-1.0, 1.0).acos() + pitch.into().into_radians();

        // plane normal
        let n = [
            r * phi.sin() * theta.cos(),
            r * phi.sin() * theta.sin(),
            r * phi.cos(),
        ];

        // proj_n(v) = ((v . n) / (n . n)) n
        let s = self
            .components
            .iter()
            .zip(&n)
            .map(|(a, b)| a * b)
            .sum::<f64>()
            / (r * r);

        Ok(vec2(
            (self.components[0] - s * n[0]) / d,
            (self.components[1] - s * n[1]) / d,
        ))
    }

    /// Converts this vector into a 2D vector by re-deriving `x` and `y` from
    /// the current magnitude and the x-y plane angle.
    ///
    /// This is an intentional simplification, not a true 3D-to-2D projection:
    /// the z component's contribution to the magnitude is folded into the
    /// plane coordinates rather than discarded.
    pub fn flatten(&self) -> Vector<2> {
        let theta = self.components[1].atan2(self.components[0]);
        vec2(self.mag * theta.cos(), self.mag * theta.sin())
    }
}

impl<const N: usize> Default for Vector<N> {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const N: usize> From<[f64; N]> for Vector<N> {
    #[inline]
    fn from(value: [f64; N]) -> Self {
        Self::new(value)
    }
}

impl<const N: usize> From<Vector<N>> for [f64; N] {
    #[inline]
    fn from(value: Vector<N>) -> Self {
        value.components
    }
}

impl<const N: usize> From<&Vector<N>> for Vector<N> {
    #[inline]
    fn from(value: &Vector<N>) -> Self {
        *value
    }
}

impl From<f64> for Vector<1> {
    #[inline]
    fn from(value: f64) -> Self {
        vec1(value)
    }
}

impl From<(f64, f64)> for Vector<2> {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        vec2(x, y)
    }
}

impl From<(f64, f64, f64)> for Vector<3> {
    #[inline]
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        vec3(x, y, z)
    }
}

impl<const N: usize> TryFrom<&[f64]> for Vector<N> {
    type Error = Error;

    fn try_from(value: &[f64]) -> Result<Self> {
        let components: [f64; N] = value.try_into().map_err(|_| Error::InvalidInput {
            reason: "buffer length does not match the vector dimension",
        })?;
        Ok(Self::new(components))
    }
}

impl<const N: usize> TryFrom<&VecN> for Vector<N> {
    type Error = Error;

    fn try_from(value: &VecN) -> Result<Self> {
        if value.dimensions() != N {
            return Err(Error::dim(N, value.dimensions()));
        }
        Self::try_from(value.as_slice())
    }
}

impl<const N: usize> fmt::Debug for Vector<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.components {
            tup.field(elem);
        }
        tup.finish()
    }
}

impl<const N: usize> fmt::Display for Vector<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, elem) in self.components.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{elem}")?;
        }
        write!(f, ")")
    }
}

impl<const N: usize> AsRef<[f64]> for Vector<N> {
    #[inline]
    fn as_ref(&self) -> &[f64] {
        &self.components
    }
}

impl<const N: usize> IntoIterator for Vector<N> {
    type Item = f64;
    type IntoIter = array::IntoIter<f64, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.into_iter()
    }
}

impl<'a, const N: usize> IntoIterator for &'a Vector<N> {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.iter()
    }
}

/// Constructs a [`Vec1`] from its single element.
#[inline]
pub fn vec1(x: f64) -> Vec1 {
    Vector::new([x])
}

/// Constructs a [`Vec2`] from its two elements.
#[inline]
pub fn vec2(x: f64, y: f64) -> Vec2 {
    Vector::new([x, y])
}

/// Constructs a [`Vec3`] from its three elements.
#[inline]
pub fn vec3(x: f64, y: f64, z: f64) -> Vec3 {
    Vector::new([x, y, z])
}
