// Copyright 2017 The Spade Developers.
// Copyright 2020 The GeoRust Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Ordered row / column index sequences used while expanding minors.

use core::ops::{Deref, Index};
use smallvec::SmallVec;

/// Dimension up to which an [`IndexSet`] is stored inline.
pub const INLINE_INDICES: usize = 8;

/// An ordered sequence of distinct row or column indices.
///
/// The length of the set is the dimension of the minor currently being
/// expanded; every [`drop`](IndexSet::drop) shortens it by one while keeping
/// the relative order of the remaining indices.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct IndexSet {
    indices: SmallVec<[usize; INLINE_INDICES]>,
}

impl IndexSet {
    /// Returns `{0, 1, ..., n - 1}`.
    pub fn full(n: usize) -> Self {
        Self {
            indices: (0..n).collect(),
        }
    }

    /// Returns a copy of this set with the entry at position `k` removed.
    ///
    /// `k` must be smaller than [`len`](IndexSet::len).
    #[must_use]
    pub fn drop(&self, k: usize) -> Self {
        debug_assert!(
            k < self.indices.len(),
            "drop position {k} out of range for index set of length {}",
            self.indices.len()
        );
        let indices = self
            .indices
            .iter()
            .enumerate()
            .filter(|&(position, _)| position != k)
            .map(|(_, &index)| index)
            .collect();
        Self { indices }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        &self.indices
    }
}

impl Deref for IndexSet {
    type Target = [usize];

    fn deref(&self) -> &[usize] {
        self.as_slice()
    }
}

impl Index<usize> for IndexSet {
    type Output = usize;

    #[inline]
    fn index(&self, position: usize) -> &usize {
        &self.indices[position]
    }
}

impl FromIterator<usize> for IndexSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self {
            indices: iter.into_iter().collect(),
        }
    }
}
