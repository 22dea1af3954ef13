//! A small linear-algebra toolkit: fixed-arity vectors, an
//! arbitrary-dimension vector, and a dense matrix engine.
//!
//! # Motivation
//!
//! The crate grew out of tooling that needs to pass vectors and matrices
//! across public API boundaries without dragging in a heavyweight
//! linear-algebra dependency. The focus is a small, predictable surface:
//! hand-specialized 1/2/3-dimensional vectors with their geometry operations,
//! a uniform N-dimensional fallback, and the classical dense-matrix
//! algorithms (elimination, determinant, adjugate, inverse, exponential).
//!
//! # Goals & Non-Goals
//!
//! - Fix the element type to `f64`. Straightforward double-precision
//!   arithmetic is the contract; there is no generic scalar parameter to
//!   complicate the API.
//! - Use const generics for the fixed vector family so that same-dimension
//!   operands are enforced at compile time; runtime
//!   [`DimensionMismatch`][Error::DimensionMismatch] checks remain where
//!   dimensions are only known at runtime ([`VecN`], [`Matrix`],
//!   [`transform`][Vector::transform]).
//! - No sparse matrices, no numerical-stability guarantees beyond plain
//!   double-precision arithmetic, no parallel execution, no symbolic
//!   computation.
//!
//! # Mutation, chaining and aliasing
//!
//! Most operations mutate the receiver in place and return it, so calls can
//! be chained fluently:
//!
//! ```
//! # use vecmat::*;
//! let mut v = vec2(1.0, 2.0);
//! v.add(vec2(1.0, 0.0)).multiply(2.0);
//! assert_eq!(v.coords(), [4.0, 4.0]);
//! ```
//!
//! Callers that need the pre-operation value clone first, or use the
//! `std::ops` operators, which are the non-mutating counterparts of every
//! mutating method and always return a new value:
//!
//! ```
//! # use vecmat::*;
//! let v = vec2(1.0, 2.0);
//! let doubled = v * 2.0;
//! assert_eq!(v.coords(), [1.0, 2.0]);
//! assert_eq!(doubled.coords(), [2.0, 4.0]);
//! ```
//!
//! No operation aliases into another instance's storage: arguments are only
//! read, never retained.
//!
//! Every vector keeps its Euclidean magnitude cached; the invariant that the
//! cache equals the norm of the components holds after every mutating
//! operation returns, which is why raw component writes (`IndexMut`, mutable
//! views) are not offered.

pub mod approx;
pub mod compat;
mod error;
mod matrix;
mod span;
mod tensor;
mod transform;
mod util;
mod vecn;
mod vector;

pub use error::{Error, Result};
pub use matrix::Matrix;
pub use span::{collinear, span, span_vector, Span};
pub use tensor::Tensor;
pub use transform::AnyVector;
pub use util::{from_flat, hstack, linspace, normalize, vstack, zeros};
pub use vecn::VecN;
pub use vector::{vec1, vec2, vec3, Angle, Axis, Vec1, Vec2, Vec3, Vector};
