// Copyright 2017 The Spade Developers.
// Copyright 2020 The GeoRust Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Sign-exact determinant, orientation and in-sphere predicates.
//!
//! The point-set predicates take an `N × M` matrix whose columns are the
//! points. The relation between `N` and `M` is checked when the function is
//! instantiated, so passing the wrong number of points does not build.
//! The check fires during monomorphization: `cargo check` accepts such a
//! call and only `cargo build` (or `cargo test`) rejects it.

use nalgebra::SMatrix;

use crate::adaptive::{self, Square};
use crate::error::PredicateError;
use crate::lift::Lifted;
use crate::simplex::Simplex;

/// Returns the determinant of `matrix` with its exact sign.
///
/// Returns NaN if any entry is NaN or infinite.
pub fn determinant<const N: usize>(matrix: &SMatrix<f64, N, N>) -> f64 {
    try_determinant(matrix).unwrap_or(f64::NAN)
}

/// Returns the signed volume of the simplex spanned by the `N + 1` columns
/// of `points`, times `N!`, with its exact sign.
///
/// In 2D the value is positive if the points occur in counterclockwise order,
/// negative if they occur in clockwise order and `0` if they are collinear.
/// In general it is positive for the vertices `0, e_1, ..., e_N` in that
/// order and changes sign whenever two points are swapped.
///
/// Returns NaN if any coordinate is NaN or infinite.
pub fn orientation<const N: usize, const M: usize>(points: &SMatrix<f64, N, M>) -> f64 {
    try_orientation(points).unwrap_or(f64::NAN)
}

/// Locates the last of the `N + 2` columns of `points` relative to the
/// sphere through the first `N + 1`, with an exact sign.
///
/// If the first `N + 1` points have positive [`orientation`], the result is
/// negative when the last point lies strictly **inside** the sphere, positive
/// when it lies strictly **outside** and `0` when the points are
/// **cospherical**. Negatively oriented leading points flip the sign.
///
/// Returns NaN if any coordinate is NaN or infinite.
pub fn insphere<const N: usize, const M: usize>(points: &SMatrix<f64, N, M>) -> f64 {
    try_insphere(points).unwrap_or(f64::NAN)
}

/// Fallible form of [`determinant`].
///
/// # Errors
///
/// Returns [`PredicateError::NonFinite`] if any entry is NaN or infinite.
pub fn try_determinant<const N: usize>(matrix: &SMatrix<f64, N, N>) -> Result<f64, PredicateError> {
    adaptive::evaluate::<Square, N, N>(matrix).map(|eval| eval.value)
}

/// Fallible form of [`orientation`].
///
/// # Errors
///
/// Returns [`PredicateError::NonFinite`] if any coordinate is NaN or
/// infinite.
pub fn try_orientation<const N: usize, const M: usize>(
    points: &SMatrix<f64, N, M>,
) -> Result<f64, PredicateError> {
    adaptive::evaluate::<Simplex, N, M>(points).map(|eval| eval.value)
}

/// Fallible form of [`insphere`].
///
/// # Errors
///
/// Returns [`PredicateError::NonFinite`] if any coordinate is NaN or
/// infinite.
pub fn try_insphere<const N: usize, const M: usize>(
    points: &SMatrix<f64, N, M>,
) -> Result<f64, PredicateError> {
    adaptive::evaluate::<Lifted, N, M>(points).map(|eval| eval.value)
}

/// The same predicates evaluated in plain `f64`, without any guarantee on
/// the sign. Useful as a baseline in tests and benchmarks.
pub mod naive {
    use nalgebra::SMatrix;

    use crate::adaptive::{naive_determinant, Square};
    use crate::lift::Lifted;
    use crate::simplex::Simplex;

    pub fn determinant<const N: usize>(matrix: &SMatrix<f64, N, N>) -> f64 {
        naive_determinant::<Square, N, N>(matrix)
    }

    pub fn orientation<const N: usize, const M: usize>(points: &SMatrix<f64, N, M>) -> f64 {
        naive_determinant::<Simplex, N, M>(points)
    }

    pub fn insphere<const N: usize, const M: usize>(points: &SMatrix<f64, N, M>) -> f64 {
        naive_determinant::<Lifted, N, M>(points)
    }
}

/// The same predicates evaluated exactly over big rationals, skipping the
/// interval filter.
pub mod exact {
    use nalgebra::SMatrix;
    use num_rational::BigRational;

    use crate::adaptive::{exact_determinant, Square};
    use crate::error::PredicateError;
    use crate::lift::Lifted;
    use crate::simplex::Simplex;

    /// # Errors
    ///
    /// Returns [`PredicateError::NonFinite`] if any entry is NaN or infinite.
    pub fn determinant<const N: usize>(
        matrix: &SMatrix<f64, N, N>,
    ) -> Result<BigRational, PredicateError> {
        exact_determinant::<Square, N, N>(matrix)
    }

    /// # Errors
    ///
    /// Returns [`PredicateError::NonFinite`] if any coordinate is NaN or
    /// infinite.
    pub fn orientation<const N: usize, const M: usize>(
        points: &SMatrix<f64, N, M>,
    ) -> Result<BigRational, PredicateError> {
        exact_determinant::<Simplex, N, M>(points)
    }

    /// # Errors
    ///
    /// Returns [`PredicateError::NonFinite`] if any coordinate is NaN or
    /// infinite.
    pub fn insphere<const N: usize, const M: usize>(
        points: &SMatrix<f64, N, M>,
    ) -> Result<BigRational, PredicateError> {
        exact_determinant::<Lifted, N, M>(points)
    }
}
