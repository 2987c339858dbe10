// Copyright 2017 The Spade Developers.
// Copyright 2020 The GeoRust Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Exact rational arithmetic, the certifying fallback of the adaptive
//! evaluator.

use num_rational::BigRational;
use num_traits::{Signed, ToPrimitive, Zero};

use crate::cofactor::Accumulator;

impl Accumulator for BigRational {
    /// The exact value of a finite `f64`. Callers reject NaN and infinities
    /// beforehand; should one slip through it embeds as zero.
    fn from_finite(value: f64) -> Self {
        BigRational::from_float(value).unwrap_or_else(BigRational::zero)
    }
}

/// Converts an exact value back to the closest `f64` without losing its sign.
///
/// A nonzero value too small for `f64` becomes the smallest subnormal of the
/// same sign rather than zero; a value too large saturates to `±f64::MAX`.
pub fn rational_to_f64(value: &BigRational) -> f64 {
    if value.is_zero() {
        return 0.0;
    }
    let negative = value.is_negative();
    let approx = value.to_f64().unwrap_or(f64::NAN);
    if approx.is_nan() || approx.is_infinite() {
        return if negative { -f64::MAX } else { f64::MAX };
    }
    if approx == 0.0 {
        let smallest = f64::from_bits(1);
        return if negative { -smallest } else { smallest };
    }
    approx
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_extras::f64::nextafter;

    #[test]
    fn floats_convert_exactly() {
        for &x in &[0.0, -0.0, 1.0, -2.5, 0.1, 1e300, -1e-310, f64::MAX, f64::MIN_POSITIVE] {
            let q = BigRational::from_finite(x);
            assert_eq!(rational_to_f64(&q), x, "round trip of {x}");
        }
    }

    #[test]
    fn non_finite_values_embed_as_zero() {
        for &x in &[f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(BigRational::from_finite(x).is_zero());
        }
    }

    #[test]
    fn one_ulp_differences_survive() {
        let a = BigRational::from_finite(0.5);
        let b = BigRational::from_finite(nextafter(0.5, 1.5));
        let diff = b - a;
        assert!(diff.is_positive());
        assert_eq!(rational_to_f64(&diff), nextafter(0.5, 1.5) - 0.5);
    }

    #[test]
    fn tiny_values_keep_their_sign() {
        let tiny = BigRational::from_finite(f64::from_bits(1));
        let square = tiny.clone() * tiny;
        assert!(rational_to_f64(&square) > 0.0);
        assert!(rational_to_f64(&-square) < 0.0);
    }

    #[test]
    fn huge_values_saturate() {
        let huge = BigRational::from_finite(f64::MAX);
        let square = huge.clone() * huge;
        assert_eq!(rational_to_f64(&square), f64::MAX);
        assert_eq!(rational_to_f64(&-square), -f64::MAX);
    }
}
