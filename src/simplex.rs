// Copyright 2017 The Spade Developers.
// Copyright 2020 The GeoRust Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Homogeneous simplex matrices for orientation / signed volume queries.

use nalgebra::base::storage::RawStorage;
use nalgebra::{Const, Dim, Matrix, SMatrix};

use crate::adaptive::{Assemble, Shape};
use crate::cofactor::Accumulator;

/// Stacks a row of ones on top of `M - 1` coordinate rows.
///
/// Column `j` of `points` holds the coordinates of point `j`. The
/// determinant of the result is `N!` times the signed volume of the simplex
/// spanned by the points; it is positive for the unit simplex
/// `0, e_1, ..., e_N` listed in that order (counterclockwise in 2D).
///
/// The row count of `points` may be static or dynamic, but must be `M - 1`.
pub fn simplex_matrix<R, Rows, S, const M: usize>(
    points: &Matrix<R, Rows, Const<M>, S>,
) -> SMatrix<R, M, M>
where
    R: Accumulator,
    Rows: Dim,
    S: RawStorage<R, Rows, Const<M>>,
{
    debug_assert_eq!(
        points.nrows() + 1,
        M,
        "a simplex in {} dimensions has {} vertices",
        points.nrows(),
        points.nrows() + 1
    );
    SMatrix::from_fn(|r, c| {
        if r == 0 {
            R::one()
        } else {
            points[(r - 1, c)].clone()
        }
    })
}

/// `N + 1` points in `N` dimensions, decided by their simplex matrix.
#[derive(Copy, Clone, Debug)]
pub struct Simplex;

impl Assemble for Simplex {
    fn assemble<R: Accumulator, const N: usize, const M: usize>(
        input: &SMatrix<R, N, M>,
    ) -> SMatrix<R, M, M> {
        let () = Shape::<N, M>::SIMPLEX;
        simplex_matrix(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cofactor::determinant;
    use nalgebra::{Matrix2x3, Matrix3, Matrix3x4, SMatrix};

    #[test]
    fn ones_row_on_top() {
        let points = Matrix2x3::new(
            0.0, 1.0, 0.0, //
            0.0, 0.0, 1.0,
        );
        let m = simplex_matrix(&points);
        assert_eq!(
            m,
            Matrix3::new(
                1.0, 1.0, 1.0, //
                0.0, 1.0, 0.0, //
                0.0, 0.0, 1.0,
            )
        );
    }

    #[test]
    fn counterclockwise_triangle_is_positive() {
        let ccw = Matrix2x3::new(
            0.0, 1.0, 0.0, //
            0.0, 0.0, 1.0,
        );
        let cw = Matrix2x3::new(
            0.0, 0.0, 1.0, //
            0.0, 1.0, 0.0,
        );
        assert_eq!(determinant(&simplex_matrix(&ccw)), 1.0);
        assert_eq!(determinant(&simplex_matrix(&cw)), -1.0);
    }

    #[test]
    fn magnitude_is_factorial_times_volume() {
        // tetrahedron with legs 2, 3 and 4: volume 4, 3! * 4 == 24
        let points = Matrix3x4::new(
            0.0, 2.0, 0.0, 0.0, //
            0.0, 0.0, 3.0, 0.0, //
            0.0, 0.0, 0.0, 4.0,
        );
        assert_eq!(determinant(&simplex_matrix(&points)), 24.0);
    }

    #[test]
    fn one_dimensional_segments() {
        let forward = SMatrix::<f64, 1, 2>::new(1.0, 3.5);
        let backward = SMatrix::<f64, 1, 2>::new(3.5, 1.0);
        assert_eq!(determinant(&Simplex::assemble(&forward)), 2.5);
        assert_eq!(determinant(&Simplex::assemble(&backward)), -2.5);
    }
}
