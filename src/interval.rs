// Copyright 2017 The Spade Developers.
// Copyright 2020 The GeoRust Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Outward-rounded interval arithmetic over `f64`.
//!
//! Every operation returns an interval guaranteed to contain the exact
//! result of applying the operation to any reals inside the operands. The
//! rounding direction of each primitive operation is recovered exactly with
//! the error-free transformations of Dekker and Knuth (the same building
//! blocks Shewchuk's adaptive predicates use), so a bound only moves by one
//! ulp when the floating-point result was actually inexact.

use core::ops::{Add, Mul, Neg, Sub};

use ieee754::Ieee754;
use num_traits::{One, Zero};

use crate::cofactor::Accumulator;

// 2^27 + 1, see Shewchuk's "exactinit".
const SPLITTER: f64 = 134_217_729f64;

// Below 2^-969 the partial products of `split` may underflow, which makes
// the recovered product tail unreliable.
const UNDERFLOW_GUARD: f64 = 2.004_168_360_008_973e-292;

/// A closed interval `[lo, hi]` of reals.
///
/// An infinite bound means "beyond the largest finite float". A NaN bound is
/// never stored: operations that would produce one yield
/// [`Interval::ENTIRE`] instead.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Interval {
    lo: f64,
    hi: f64,
}

impl Interval {
    /// The whole real line.
    pub const ENTIRE: Interval = Interval {
        lo: f64::NEG_INFINITY,
        hi: f64::INFINITY,
    };

    /// Creates `[lo, hi]`. Returns [`Interval::ENTIRE`] if either bound is NaN.
    pub fn new(lo: f64, hi: f64) -> Self {
        if lo.is_nan() || hi.is_nan() {
            return Self::ENTIRE;
        }
        debug_assert!(lo <= hi, "interval bounds out of order: [{lo}, {hi}]");
        Interval { lo, hi }
    }

    /// The zero-width interval `[value, value]`.
    pub fn point(value: f64) -> Self {
        Self::new(value, value)
    }

    #[inline]
    pub fn lower(&self) -> f64 {
        self.lo
    }

    #[inline]
    pub fn upper(&self) -> f64 {
        self.hi
    }

    /// `true` if zero lies inside the closed interval.
    #[inline]
    pub fn contains_zero(&self) -> bool {
        self.lo <= 0.0 && self.hi >= 0.0
    }

    /// A representative value of the interval.
    ///
    /// The result always lies inside `[lo, hi]`, so whenever the interval
    /// excludes zero the midpoint carries the sign of every value it encloses.
    /// Unbounded ends saturate to `±f64::MAX`.
    pub fn midpoint(&self) -> f64 {
        if self.lo == f64::NEG_INFINITY && self.hi == f64::INFINITY {
            return 0.0;
        }
        let mid = if self.lo == self.hi {
            self.lo
        } else {
            // halving first keeps the sum from overflowing
            (0.5 * self.lo + 0.5 * self.hi).max(self.lo).min(self.hi)
        };
        mid.clamp(-f64::MAX, f64::MAX)
    }
}

impl From<f64> for Interval {
    fn from(value: f64) -> Self {
        Interval::point(value)
    }
}

impl Accumulator for Interval {
    #[inline]
    fn from_finite(value: f64) -> Self {
        Interval::point(value)
    }
}

impl Zero for Interval {
    fn zero() -> Self {
        Interval::point(0.0)
    }

    fn is_zero(&self) -> bool {
        self.lo == 0.0 && self.hi == 0.0
    }
}

impl One for Interval {
    fn one() -> Self {
        Interval::point(1.0)
    }
}

impl Neg for Interval {
    type Output = Interval;

    fn neg(self) -> Interval {
        Interval {
            lo: -self.hi,
            hi: -self.lo,
        }
    }
}

impl Add for Interval {
    type Output = Interval;

    fn add(self, rhs: Interval) -> Interval {
        let (lo, _) = sum_enclosure(self.lo, rhs.lo);
        let (_, hi) = sum_enclosure(self.hi, rhs.hi);
        Interval::new(lo, hi)
    }
}

impl Sub for Interval {
    type Output = Interval;

    fn sub(self, rhs: Interval) -> Interval {
        let (lo, _) = difference_enclosure(self.lo, rhs.hi);
        let (_, hi) = difference_enclosure(self.hi, rhs.lo);
        Interval::new(lo, hi)
    }
}

impl Mul for Interval {
    type Output = Interval;

    fn mul(self, rhs: Interval) -> Interval {
        let corners = [
            (self.lo, rhs.lo),
            (self.lo, rhs.hi),
            (self.hi, rhs.lo),
            (self.hi, rhs.hi),
        ];
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for (a, b) in corners {
            let (corner_lo, corner_hi) = product_enclosure(a, b);
            if corner_lo.is_nan() || corner_hi.is_nan() {
                return Interval::ENTIRE;
            }
            lo = lo.min(corner_lo);
            hi = hi.max(corner_hi);
        }
        Interval::new(lo, hi)
    }
}

/// Tightest float bounds on `x + tail`, where `x` is a rounded result and
/// `tail` the (exact) rounding error.
fn enclose(x: f64, tail: f64) -> (f64, f64) {
    if x.is_nan() {
        return (f64::NEG_INFINITY, f64::INFINITY);
    }
    if x.is_infinite() {
        // overflow, the exact value is beyond the largest finite float
        return if x > 0.0 { (f64::MAX, x) } else { (x, -f64::MAX) };
    }
    if !tail.is_finite() {
        return (step_down(x), step_up(x));
    }
    if tail > 0.0 {
        (x, step_up(x))
    } else if tail < 0.0 {
        (step_down(x), x)
    } else {
        (x, x)
    }
}

fn sum_enclosure(a: f64, b: f64) -> (f64, f64) {
    let (x, tail) = two_sum(a, b);
    enclose(x, tail)
}

fn difference_enclosure(a: f64, b: f64) -> (f64, f64) {
    let (x, tail) = two_diff(a, b);
    enclose(x, tail)
}

fn product_enclosure(a: f64, b: f64) -> (f64, f64) {
    if a == 0.0 || b == 0.0 {
        return (0.0, 0.0);
    }
    let (x, tail) = two_product(a, b);
    if x.is_finite() && x.abs() < UNDERFLOW_GUARD {
        // IEEE products are correctly rounded even when they underflow, so
        // one step in both directions is always enough
        return (step_down(x), step_up(x));
    }
    enclose(x, tail)
}

fn step_up(x: f64) -> f64 {
    if x == 0.0 {
        f64::from_bits(1)
    } else if x.is_infinite() {
        x
    } else {
        x.next()
    }
}

fn step_down(x: f64) -> f64 {
    if x == 0.0 {
        -f64::from_bits(1)
    } else if x.is_infinite() {
        x
    } else {
        x.prev()
    }
}

#[inline]
fn two_sum(a: f64, b: f64) -> (f64, f64) {
    let x = a + b;
    let bvirt = x - a;
    let avirt = x - bvirt;
    let bround = b - bvirt;
    let around = a - avirt;
    (x, around + bround)
}

#[inline]
fn two_diff(a: f64, b: f64) -> (f64, f64) {
    let x = a - b;
    let bvirt = a - x;
    let avirt = x + bvirt;
    let bround = bvirt - b;
    let around = a - avirt;
    (x, around + bround)
}

#[inline]
fn two_product(a: f64, b: f64) -> (f64, f64) {
    let x = a * b;
    let (ahi, alo) = split(a);
    let (bhi, blo) = split(b);
    let err1 = x - (ahi * bhi);
    let err2 = err1 - (alo * bhi);
    let err3 = err2 - (ahi * blo);
    (x, (alo * blo) - err3)
}

#[inline]
fn split(a: f64) -> (f64, f64) {
    let c = SPLITTER * a;
    let abig = c - a;
    let ahi = c - abig;
    let alo = a - ahi;
    (ahi, alo)
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_extras::f64::nextafter;

    #[test]
    fn exact_operations_stay_tight() {
        let a = Interval::point(1.5);
        let b = Interval::point(2.25);
        assert_eq!(a + b, Interval::point(3.75));
        assert_eq!(a - b, Interval::point(-0.75));
        assert_eq!(a * b, Interval::point(3.375));
    }

    #[test]
    fn inexact_sum_is_widened_by_one_ulp() {
        let sum = Interval::point(1.0) + Interval::point(1e-20);
        assert_eq!(sum.lower(), 1.0);
        assert_eq!(sum.upper(), nextafter(1.0, 2.0));
    }

    #[test]
    fn inexact_difference_is_widened_by_one_ulp() {
        let diff = Interval::point(1.0) - Interval::point(1e-20);
        assert_eq!(diff.lower(), nextafter(1.0, 0.0));
        assert_eq!(diff.upper(), 1.0);
    }

    #[test]
    fn inexact_product_encloses_the_exact_value() {
        // 0.1 * 0.1 is not representable
        let p = Interval::point(0.1) * Interval::point(0.1);
        assert!(p.lower() < p.upper());
        assert_eq!(nextafter(p.lower(), 1.0), p.upper());
        assert!(p.lower() <= 0.1 * 0.1 && 0.1 * 0.1 <= p.upper());
    }

    #[test]
    fn product_with_mixed_signs() {
        let a = Interval::new(-2.0, 3.0);
        let b = Interval::new(-5.0, 4.0);
        assert_eq!(a * b, Interval::new(-15.0, 12.0));
    }

    #[test]
    fn underflowing_product_contains_zero() {
        let tiny = Interval::point(1e-200);
        let p = tiny * tiny;
        assert!(p.contains_zero());
        assert!(p.upper() > 0.0);
    }

    #[test]
    fn overflowing_product_keeps_its_sign() {
        let huge = Interval::point(1e300);
        let p = huge * huge;
        assert_eq!(p.lower(), f64::MAX);
        assert!(!p.contains_zero());
        assert!(p.midpoint() > 0.0);
        let n = -huge * huge;
        assert_eq!(n.upper(), -f64::MAX);
        assert!(n.midpoint() < 0.0);
    }

    #[test]
    fn nan_collapses_to_the_whole_line() {
        assert_eq!(Interval::point(f64::NAN), Interval::ENTIRE);
        assert!(Interval::ENTIRE.contains_zero());
        let inf = Interval::point(f64::INFINITY);
        assert_eq!(inf - inf, Interval::ENTIRE);
    }

    #[test]
    fn midpoint_has_the_certified_sign() {
        let smallest = f64::from_bits(1);
        let i = Interval::new(smallest, nextafter(smallest, 1.0));
        assert!(!i.contains_zero());
        assert!(i.midpoint() > 0.0);
        assert_eq!(Interval::new(-3.0, -1.0).midpoint(), -2.0);
        assert_eq!(Interval::point(7.0).midpoint(), 7.0);
        assert_eq!(Interval::new(f64::MAX, f64::INFINITY).midpoint(), f64::MAX);
        assert_eq!(Interval::new(f64::NEG_INFINITY, -1.0).midpoint(), -f64::MAX);
    }

    #[test]
    fn zero_membership() {
        assert!(Interval::new(-1.0, 0.0).contains_zero());
        assert!(Interval::new(0.0, 0.0).contains_zero());
        assert!(!Interval::new(1e-300, 1.0).contains_zero());
        assert!(!Interval::new(-1.0, -1e-300).contains_zero());
    }
}
