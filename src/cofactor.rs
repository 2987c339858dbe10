// Copyright 2017 The Spade Developers.
// Copyright 2020 The GeoRust Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Division-free determinants by recursive Laplace (cofactor) expansion.
//!
//! The expansion only ever adds, subtracts and multiplies, so it stays exact
//! over rationals and does not widen interval bounds through division. The
//! cost is `O(N!)` operations, which is fine for the small matrices that
//! geometric predicates produce.

use core::ops::{Add, Index, Mul, Sub};

use nalgebra::{SMatrix, Scalar};
use num_traits::{One, Zero};

use crate::index_set::IndexSet;

/// A number type a determinant can be accumulated in.
///
/// Every implementor must be able to represent any finite `f64` exactly, so
/// embedding the input matrix never loses information. Only the arithmetic
/// performed afterwards decides how precise the result is.
pub trait Accumulator:
    Scalar + Zero + One + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self>
{
    /// Embeds a finite scalar. The behaviour for NaN or infinities is
    /// implementation specific.
    fn from_finite(value: f64) -> Self;
}

impl Accumulator for f64 {
    #[inline(always)]
    fn from_finite(value: f64) -> Self {
        value
    }
}

/// Determinant of a square matrix, computed entirely in `R`.
pub fn determinant<R: Accumulator, const N: usize>(matrix: &SMatrix<R, N, N>) -> R {
    let all = IndexSet::full(N);
    expand(matrix, &all, &all)
}

/// Determinant of the minor of `matrix` selected by `rows` and `cols`.
///
/// Expands along the first remaining row; term `k` is signed by its position
/// in `cols`, not by the absolute column number.
pub fn expand<R, M>(matrix: &M, rows: &IndexSet, cols: &IndexSet) -> R
where
    R: Accumulator,
    M: Index<(usize, usize), Output = R> + ?Sized,
{
    debug_assert_eq!(rows.len(), cols.len(), "minor must be square");

    let entry = |r: usize, c: usize| matrix[(rows[r], cols[c])].clone();
    match rows.len() {
        0 => R::one(),
        1 => entry(0, 0),
        2 => entry(0, 0) * entry(1, 1) - entry(0, 1) * entry(1, 0),
        n => {
            let sub_rows = rows.drop(0);
            let mut det = R::zero();
            for k in 0..n {
                let term = entry(0, k) * expand(matrix, &sub_rows, &cols.drop(k));
                det = if k % 2 == 0 { det + term } else { det - term };
            }
            det
        }
    }
}
