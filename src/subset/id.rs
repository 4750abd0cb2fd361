//! Bitmask identity of a vertex subset

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a vertex subset: bit `v` is set iff vertex `v` is a member,
/// so the id equals the sum of `2^v` over the members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubsetId(u64);

impl SubsetId {
    /// Largest vertex count whose subsets fit in the id type
    pub const MAX_VERTICES: usize = 63;

    /// The empty subset
    pub const EMPTY: SubsetId = SubsetId(0);

    /// Wrap a raw id
    #[inline]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Subset containing every vertex of a universe of size `n`
    #[inline]
    pub const fn full(n: usize) -> Self {
        debug_assert!(n <= Self::MAX_VERTICES);
        Self((1u64 << n) - 1)
    }

    /// Number of distinct subsets of a universe of size `n`
    #[inline]
    pub const fn subset_count(n: usize) -> usize {
        1usize << n
    }

    /// Build an id from a list of vertices (duplicates are absorbed)
    pub fn from_vertices<I: IntoIterator<Item = usize>>(vertices: I) -> Self {
        vertices.into_iter().fold(Self::EMPTY, |id, v| id.with(v))
    }

    #[inline]
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Position of this subset in an id-sorted catalog
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Test bit `v`
    #[inline]
    pub const fn contains(self, v: usize) -> bool {
        self.0 & (1u64 << v) != 0
    }

    /// Set bit `v`
    #[inline]
    pub const fn with(self, v: usize) -> Self {
        Self(self.0 | (1u64 << v))
    }

    /// Clear bit `v`
    #[inline]
    pub const fn without(self, v: usize) -> Self {
        Self(self.0 & !(1u64 << v))
    }

    /// Cardinality of the subset
    #[inline]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True when every member of `self` is also a member of `other`
    #[inline]
    pub const fn is_subset_of(self, other: SubsetId) -> bool {
        self.0 & !other.0 == 0
    }

    /// Members in increasing order
    pub fn vertices(self) -> Vertices {
        Vertices { bits: self.0 }
    }
}

impl fmt::Display for SubsetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Iterator over the members of a [`SubsetId`], lowest vertex first
#[derive(Debug, Clone)]
pub struct Vertices {
    bits: u64,
}

impl Iterator for Vertices {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.bits == 0 {
            return None;
        }
        let v = self.bits.trailing_zeros() as usize;
        self.bits &= self.bits - 1;
        Some(v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.bits.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Vertices {}
