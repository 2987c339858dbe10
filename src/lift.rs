// Copyright 2017 The Spade Developers.
// Copyright 2020 The GeoRust Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Lifting onto the paraboloid `x_{N+1} = |x|^2`.
//!
//! Points on a common sphere in `N` dimensions lift to points on a common
//! hyperplane in `N + 1` dimensions, which turns the in-sphere test into an
//! orientation test of the lifted points.

use nalgebra::{Const, Dyn, OMatrix, SMatrix};

use crate::adaptive::{Assemble, Shape};
use crate::cofactor::Accumulator;
use crate::simplex::simplex_matrix;

/// Appends the squared norm of every column as an extra row.
///
/// The result has `N + 1` rows; the norms are computed in `R`.
pub fn parabolic_lift<R: Accumulator, const N: usize, const M: usize>(
    points: &SMatrix<R, N, M>,
) -> OMatrix<R, Dyn, Const<M>> {
    OMatrix::<R, Dyn, Const<M>>::from_fn_generic(Dyn(N + 1), Const::<M>, |r, c| {
        if r < N {
            points[(r, c)].clone()
        } else {
            squared_norm(points, c)
        }
    })
}

/// The simplex matrix of the lifted points.
pub fn lifted_simplex_matrix<R: Accumulator, const N: usize, const M: usize>(
    points: &SMatrix<R, N, M>,
) -> SMatrix<R, M, M> {
    simplex_matrix(&parabolic_lift(points))
}

fn squared_norm<R: Accumulator, const N: usize, const M: usize>(
    points: &SMatrix<R, N, M>,
    column: usize,
) -> R {
    (0..N).fold(R::zero(), |acc, r| {
        let x = points[(r, column)].clone();
        acc + x.clone() * x
    })
}

/// `N + 2` points in `N` dimensions, decided by the simplex matrix of their
/// parabolic lift.
#[derive(Copy, Clone, Debug)]
pub struct Lifted;

impl Assemble for Lifted {
    fn assemble<R: Accumulator, const N: usize, const M: usize>(
        input: &SMatrix<R, N, M>,
    ) -> SMatrix<R, M, M> {
        let () = Shape::<N, M>::LIFTED;
        lifted_simplex_matrix(input)
    }
}
