// Copyright 2017 The Spade Developers.
// Copyright 2020 The GeoRust Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use thiserror::Error;

/// Reasons a predicate cannot produce a certified sign.
///
/// A degenerate configuration (collinear, coplanar or cospherical points) is
/// not an error: it evaluates to exactly `0.0`.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum PredicateError {
    /// An input entry is NaN or infinite.
    #[error("non-finite input {value} at row {row}, column {column}")]
    NonFinite {
        /// Row of the offending entry in the input matrix.
        row: usize,
        /// Column (point index for point sets) of the offending entry.
        column: usize,
        /// The offending value.
        value: f64,
    },
}
