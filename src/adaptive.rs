// Copyright 2017 The Spade Developers.
// Copyright 2020 The GeoRust Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Two-tier, sign-exact evaluation of determinant predicates.
//!
//! Every predicate in this crate is the determinant of a square matrix
//! assembled from the input. The determinant is first evaluated in interval
//! arithmetic. If the resulting interval excludes zero, its sign is certified
//! and the midpoint is returned. Only when zero cannot be ruled out is the
//! determinant re-evaluated exactly over big rationals. The fallback is exact
//! and therefore final: there is no third tier.

use core::cmp::Ordering;

use nalgebra::SMatrix;
use num_rational::BigRational;

use crate::cofactor::{self, Accumulator};
use crate::error::PredicateError;
use crate::interval::Interval;
use crate::rational::rational_to_f64;

/// Compile-time relations between the row count `N` and column count `M` of
/// a predicate input. Referencing one of the constants from a generic
/// function turns a shape mismatch into a build error.
pub(crate) struct Shape<const N: usize, const M: usize>;

impl<const N: usize, const M: usize> Shape<N, M> {
    pub(crate) const SQUARE: () = assert!(N == M, "determinant input must be square");
    pub(crate) const SIMPLEX: () = assert!(
        M == N + 1,
        "orientation needs N + 1 points in N dimensions"
    );
    pub(crate) const LIFTED: () = assert!(M == N + 2, "insphere needs N + 2 points in N dimensions");
}

/// How an `N × M` input is turned into the `M × M` matrix whose determinant
/// decides a predicate.
///
/// The assembly runs in the accumulation type, so any arithmetic it performs
/// (such as the squared norms of the parabolic lift) is as precise as the
/// determinant itself.
pub trait Assemble {
    fn assemble<R: Accumulator, const N: usize, const M: usize>(
        input: &SMatrix<R, N, M>,
    ) -> SMatrix<R, M, M>;
}

/// The input already is the decision matrix.
#[derive(Copy, Clone, Debug)]
pub struct Square;

impl Assemble for Square {
    fn assemble<R: Accumulator, const N: usize, const M: usize>(
        input: &SMatrix<R, N, M>,
    ) -> SMatrix<R, M, M> {
        let () = Shape::<N, M>::SQUARE;
        SMatrix::from_fn(|r, c| input[(r, c)].clone())
    }
}

/// The evaluation tier that produced a result.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Stage {
    /// The interval filter excluded zero.
    Interval,
    /// Exact rational arithmetic was required.
    Exact,
}

/// A sign-exact predicate value.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Evaluation {
    /// Carries the exact sign of the determinant. The magnitude is exact
    /// up to rounding on the [`Stage::Exact`] path and an approximation on
    /// the [`Stage::Interval`] path.
    pub value: f64,
    pub stage: Stage,
}

impl Evaluation {
    /// The certified sign as an ordering against zero.
    pub fn sign(&self) -> Ordering {
        if self.value > 0.0 {
            Ordering::Greater
        } else if self.value < 0.0 {
            Ordering::Less
        } else {
            Ordering::Equal
        }
    }

    /// `true` if the exact determinant is zero.
    pub fn is_degenerate(&self) -> bool {
        self.value == 0.0
    }
}

/// Sign-exact determinant of the matrix assembled by `C` from `input`.
///
/// # Errors
///
/// Returns [`PredicateError::NonFinite`] if any input entry is NaN or
/// infinite.
pub fn evaluate<C: Assemble, const N: usize, const M: usize>(
    input: &SMatrix<f64, N, M>,
) -> Result<Evaluation, PredicateError> {
    check_finite(input)?;

    let enclosure: Interval = cofactor::determinant(&C::assemble(&input.map(Interval::from_finite)));
    if !enclosure.contains_zero() {
        tracing::trace!(
            lower = enclosure.lower(),
            upper = enclosure.upper(),
            "interval filter certified the sign"
        );
        return Ok(Evaluation {
            value: enclosure.midpoint(),
            stage: Stage::Interval,
        });
    }

    tracing::debug!(
        dimension = M,
        lower = enclosure.lower(),
        upper = enclosure.upper(),
        "interval filter inconclusive, evaluating exactly"
    );
    let exact = exact_determinant::<C, N, M>(input)?;
    Ok(Evaluation {
        value: rational_to_f64(&exact),
        stage: Stage::Exact,
    })
}

/// The exact determinant of the matrix assembled by `C`, skipping the
/// interval filter.
///
/// # Errors
///
/// Returns [`PredicateError::NonFinite`] if any input entry is NaN or
/// infinite.
pub fn exact_determinant<C: Assemble, const N: usize, const M: usize>(
    input: &SMatrix<f64, N, M>,
) -> Result<BigRational, PredicateError> {
    check_finite(input)?;
    Ok(cofactor::determinant(&C::assemble(
        &input.map(BigRational::from_finite),
    )))
}

/// The determinant of the matrix assembled by `C`, in plain `f64`.
///
/// Carries no guarantee at all; it exists to compare against.
pub fn naive_determinant<C: Assemble, const N: usize, const M: usize>(
    input: &SMatrix<f64, N, M>,
) -> f64 {
    cofactor::determinant(&C::assemble(input))
}

fn check_finite<const N: usize, const M: usize>(
    input: &SMatrix<f64, N, M>,
) -> Result<(), PredicateError> {
    // storage is column-major
    match input.iter().position(|value| !value.is_finite()) {
        Some(i) => Err(PredicateError::NonFinite {
            row: i % N,
            column: i / N,
            value: input[i],
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn determinant<const N: usize>(m: &SMatrix<f64, N, N>) -> Result<Evaluation, PredicateError> {
        evaluate::<Square, N, N>(m)
    }
    use float_extras::f64::nextafter;
    use nalgebra::{Matrix2, Matrix3, Matrix4};

    #[test]
    fn simple_determinant_is_certified_by_intervals() {
        let eval = evaluate::<Square, 2, 2>(&Matrix2::new(1.0, 2.0, 3.0, 4.0)).unwrap();
        assert_eq!(eval.value, -2.0);
        assert_eq!(eval.stage, Stage::Interval);
        assert_eq!(eval.sign(), Ordering::Less);
    }

    #[test]
    fn one_ulp_apart_rows_fall_back_to_exact_arithmetic() {
        let z = nextafter(0.5, 1.5);
        let m = Matrix3::new(
            1.0, 1.0, 1.0, //
            0.5, 12.0, 24.0, //
            z, 12.0, 24.0,
        );
        let eval = determinant(&m).unwrap();
        assert_eq!(eval.stage, Stage::Exact);
        // -6 + 12 * z == 12 * 2^-53
        assert_eq!(eval.value, 12.0 * 2f64.powi(-53));
        assert_ne!(naive_determinant::<Square, 3, 3>(&m), eval.value);
    }

    #[test]
    fn singular_matrix_is_exactly_zero() {
        let m = Matrix3::new(
            1.0, 2.0, 3.0, //
            4.0, 5.0, 6.0, //
            7.0, 8.0, 9.0,
        );
        let eval = determinant(&m).unwrap();
        assert!(eval.is_degenerate());
        assert_eq!(eval.sign(), Ordering::Equal);
        assert_eq!(eval.stage, Stage::Exact);
    }

    #[test]
    fn rounded_inputs_of_a_singular_matrix() {
        // singular over the reals, but the rounded entries are not
        let m = Matrix3::new(
            0.1, 0.2, 0.3, //
            0.4, 0.5, 0.6, //
            0.7, 0.8, 0.9,
        );
        let eval = determinant(&m).unwrap();
        let exact = exact_determinant::<Square, 3, 3>(&m).unwrap();
        assert!(eval.value > 0.0);
        assert!(rational_to_f64(&exact) > 0.0);
    }

    #[test]
    fn exact_and_filtered_signs_agree() {
        let m = Matrix4::new(
            1.0, 3.0, 5.0, 9.0, //
            1.0, 3.0, 1.0, 7.0, //
            4.0, 3.0, 9.0, 7.0, //
            5.0, 2.0, 0.0, 9.0,
        );
        let eval = determinant(&m).unwrap();
        let exact = exact_determinant::<Square, 4, 4>(&m).unwrap();
        assert_eq!(eval.stage, Stage::Interval);
        assert_eq!(eval.value, -376.0);
        assert_eq!(rational_to_f64(&exact), -376.0);
    }

    #[test]
    fn non_finite_entries_are_rejected() {
        let m = Matrix2::new(1.0, 2.0, f64::NAN, 4.0);
        match determinant(&m) {
            Err(PredicateError::NonFinite { row, column, value }) => {
                assert_eq!((row, column), (1, 0));
                assert!(value.is_nan());
            }
            other => panic!("expected a non-finite error, got {other:?}"),
        }
        let m = Matrix2::new(1.0, f64::INFINITY, 3.0, 4.0);
        assert_eq!(
            determinant(&m),
            Err(PredicateError::NonFinite {
                row: 0,
                column: 1,
                value: f64::INFINITY
            })
        );
    }

    #[test]
    fn facade_reports_the_evaluated_value() {
        let z = nextafter(0.5, 1.5);
        let m = Matrix3::new(1.0, 1.0, 1.0, 0.5, 12.0, 24.0, z, 12.0, 24.0);
        let eval = evaluate::<Square, 3, 3>(&m).unwrap();
        assert_eq!(crate::predicates::try_determinant(&m), Ok(eval.value));
    }

    #[test]
    fn repeated_evaluation_is_bit_identical() {
        let z = nextafter(0.5, 1.5);
        let m = Matrix3::new(1.0, 1.0, 1.0, 0.5, 12.0, 24.0, z, 12.0, 24.0);
        let first = determinant(&m).unwrap();
        for _ in 0..8 {
            let again = determinant(&m).unwrap();
            assert_eq!(again.value.to_bits(), first.value.to_bits());
            assert_eq!(again.stage, first.stage);
        }
    }
}
