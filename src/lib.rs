#![doc(html_logo_url = "https://raw.githubusercontent.com/georust/meta/master/logo/logo.png")]
// Copyright 2017 The Spade Developers.
// Copyright 2020 The GeoRust Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Sign-Exact Determinant Predicates for Computational Geometry in Any Small Dimension
//!
//! The crate offers orientation queries – "on which side of a line (2d),
//! plane (3d) or hyperplane does a point lie?" – and in-sphere queries –
//! "is a point contained in the circumsphere of a simplex?" – for point sets
//! of any dimension known at compile time, together with the determinant
//! they are built on.
//!
//! Every predicate is the determinant of a small matrix, computed by
//! division-free cofactor expansion. The expansion is first carried out in
//! outward-rounded interval arithmetic. When the resulting interval excludes
//! zero the sign is certain and the evaluation is done; only otherwise is the
//! determinant recomputed exactly over big rationals. Near-degenerate input
//! is rare in practice, so the cost is usually that of the interval pass.
//!
//! The returned `f64` always carries the exact sign of the true determinant
//! of the (exactly representable) input. Its magnitude is exact up to one
//! rounding when the rational fallback ran, and an approximation otherwise.
//! A result of exactly `0` means the input is degenerate: collinear,
//! coplanar or cospherical points, or a singular matrix.
//!
//! Points are passed as the columns of an [`nalgebra::SMatrix`]. The
//! coordinate helpers [`orient2d`], [`orient3d`], [`incircle`] and
//! [`insphere3d`] accept `f32` or `f64` [`Coord`] / [`Coord3D`] values; the
//! conversion to `f64` is exact.
//!
//! ```
//! use nalgebra::{Matrix2, Matrix2x3};
//!
//! assert_eq!(robust_nd::determinant(&Matrix2::new(1.0, 2.0, 3.0, 4.0)), -2.0);
//!
//! // (0, 0), (1, 0), (0, 1): counterclockwise
//! let triangle = Matrix2x3::new(
//!     0.0, 1.0, 0.0,
//!     0.0, 0.0, 1.0,
//! );
//! assert!(robust_nd::orientation(&triangle) > 0.0);
//! ```

pub mod adaptive;
pub mod cofactor;
mod error;
pub mod index_set;
pub mod interval;
pub mod lift;
pub mod predicates;
pub mod rational;
pub mod simplex;


use nalgebra::SMatrix;

pub use adaptive::{Evaluation, Stage};
pub use error::PredicateError;
pub use interval::Interval;
pub use predicates::{
    determinant, exact, insphere, naive, orientation, try_determinant, try_insphere, try_orientation,
};

/// A two dimensional coordinate.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Coord<T: Into<f64>> {
    pub x: T,
    pub y: T,
}

/// A three dimensional coordinate.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Coord3D<T: Into<f64>> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T: Into<f64>> Coord<T> {
    fn into_array(self) -> [f64; 2] {
        [self.x.into(), self.y.into()]
    }
}

impl<T: Into<f64>> Coord3D<T> {
    fn into_array(self) -> [f64; 3] {
        [self.x.into(), self.y.into(), self.z.into()]
    }
}

fn columns<const N: usize, const M: usize>(points: [[f64; N]; M]) -> SMatrix<f64, N, M> {
    SMatrix::from_fn(|r, c| points[c][r])
}

/// Returns a positive value if the coordinates `pa`, `pb`, and `pc` occur in counterclockwise order
/// (`pc` lies to the **left** of the directed line defined by coordinates `pa` and `pb`).
/// Returns a negative value if they occur in clockwise order (`pc` lies to the **right** of the directed line `pa, pb`).
/// Returns `0` if they are **collinear**.
pub fn orient2d<T: Into<f64>>(pa: Coord<T>, pb: Coord<T>, pc: Coord<T>) -> f64 {
    orientation(&columns([pa, pb, pc].map(Coord::into_array)))
}

/// Returns a positive value if the vectors `pb - pa`, `pc - pa`, `pd - pa`
/// form a right-handed system: `pd` lies on the side of the plane through
/// `pa`, `pb`, `pc` from which these three appear in counterclockwise order.
/// Returns a negative value if `pd` lies on the other side.
/// Returns `0` if the four points are **coplanar**.
pub fn orient3d<T: Into<f64>>(pa: Coord3D<T>, pb: Coord3D<T>, pc: Coord3D<T>, pd: Coord3D<T>) -> f64 {
    orientation(&columns([pa, pb, pc, pd].map(Coord3D::into_array)))
}

/// Returns a **negative** value if the coordinate `pd` lies inside the circle passing through `pa`, `pb`, and `pc`,
/// which must appear in counterclockwise order; a **positive** value if `pd` lies outside the circle.
/// Returns `0` if the four points are **cocircular**.
/// If `pa`, `pb` and `pc` appear in clockwise order, the signs are reversed.
pub fn incircle<T: Into<f64>>(pa: Coord<T>, pb: Coord<T>, pc: Coord<T>, pd: Coord<T>) -> f64 {
    insphere(&columns([pa, pb, pc, pd].map(Coord::into_array)))
}

/// Returns a **negative** value if the coordinate `pe` lies inside the sphere passing through `pa`, `pb`, `pc`, and `pd`,
/// a **positive** value if it lies outside, and `0` if the five points are **cospherical**.
/// This holds when [`orient3d`] of `pa`, `pb`, `pc`, `pd` is positive; otherwise the signs are reversed.
pub fn insphere3d<T: Into<f64>>(
    pa: Coord3D<T>,
    pb: Coord3D<T>,
    pc: Coord3D<T>,
    pd: Coord3D<T>,
    pe: Coord3D<T>,
) -> f64 {
    insphere(&columns([pa, pb, pc, pd, pe].map(Coord3D::into_array)))
}
