//! Gray-code enumeration of vertex subsets and the id-indexed catalog

use super::SubsetId;
use itertools::Itertools;
use rayon::prelude::*;
use std::fmt;
use std::ops::Index;

/// A vertex subset together with its bitmask identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subset {
    /// Members in increasing order
    pub elements: Vec<usize>,
    pub id: SubsetId,
}

impl Subset {
    /// Build a subset from its id
    pub fn from_id(id: SubsetId) -> Self {
        Self {
            elements: id.vertices().collect(),
            id,
        }
    }

    #[inline]
    pub fn contains(&self, v: usize) -> bool {
        self.id.contains(v)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

/// Renders as `id:` followed by a tab and the members in increasing order
impl fmt::Display for Subset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:\t{}", self.id, self.elements.iter().join(" "))
    }
}

/// Generate every subset of `{0, …, n-1}` in reflected Gray-code order.
///
/// Starting from the empty subset, each vertex `v` doubles the sequence by
/// appending its reverse with `v` added, so consecutive subsets differ by
/// exactly one element. Since `v` is larger than every vertex already present,
/// pushing it keeps `elements` sorted.
pub fn gray_code_subsets(n: usize) -> Vec<Subset> {
    assert!(
        n <= SubsetId::MAX_VERTICES,
        "cannot enumerate subsets of {} vertices (limit {})",
        n,
        SubsetId::MAX_VERTICES
    );

    let mut subsets = Vec::with_capacity(SubsetId::subset_count(n));
    subsets.push(Subset {
        elements: Vec::new(),
        id: SubsetId::EMPTY,
    });

    for v in 0..n {
        for i in (0..subsets.len()).rev() {
            let mut elements = subsets[i].elements.clone();
            elements.push(v);
            let id = subsets[i].id.with(v);
            subsets.push(Subset { elements, id });
        }
    }

    subsets
}

/// All subsets of the vertex universe, stored so that `catalog[id].id == id`
#[derive(Debug, Clone)]
pub struct SubsetCatalog {
    vertex_count: usize,
    subsets: Vec<Subset>,
}

impl SubsetCatalog {
    /// Enumerate in Gray-code order, then re-sort by id for O(1) lookup
    pub fn new(vertex_count: usize) -> Self {
        let mut subsets = gray_code_subsets(vertex_count);
        subsets.par_sort_unstable_by_key(|subset| subset.id);

        log::debug!(
            "Built subset catalog: {} subsets over {} vertices",
            subsets.len(),
            vertex_count
        );

        Self {
            vertex_count,
            subsets,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of subsets (always `2^n`)
    pub fn len(&self) -> usize {
        self.subsets.len()
    }

    /// Never true: the empty subset is always present
    pub fn is_empty(&self) -> bool {
        self.subsets.is_empty()
    }

    /// Look up a subset by id
    #[inline]
    pub fn get(&self, id: SubsetId) -> &Subset {
        &self.subsets[id.index()]
    }

    /// The subset containing every vertex
    pub fn full(&self) -> &Subset {
        self.get(SubsetId::full(self.vertex_count))
    }

    /// Subsets in increasing id order
    pub fn iter(&self) -> impl Iterator<Item = &Subset> {
        self.subsets.iter()
    }
}

impl Index<SubsetId> for SubsetCatalog {
    type Output = Subset;

    fn index(&self, id: SubsetId) -> &Subset {
        self.get(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_gray_code_single_element_steps() {
        for n in 0..=6 {
            let subsets = gray_code_subsets(n);
            assert_eq!(subsets.len(), 1 << n);

            for pair in subsets.windows(2) {
                let diff = pair[0].id.raw() ^ pair[1].id.raw();
                assert_eq!(diff.count_ones(), 1, "n = {}: {} -> {}", n, pair[0], pair[1]);
            }
        }
    }

    #[test]
    fn test_gray_code_order_for_three_vertices() {
        let ids: Vec<u64> = gray_code_subsets(3).iter().map(|s| s.id.raw()).collect();
        assert_eq!(ids, vec![0, 1, 3, 2, 6, 7, 5, 4]);
    }

    #[test]
    fn test_elements_match_id() {
        for subset in gray_code_subsets(5) {
            assert_eq!(SubsetId::from_vertices(subset.elements.iter().copied()), subset.id);
            assert!(subset.elements.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_catalog_indexed_by_id() {
        let catalog = SubsetCatalog::new(5);
        assert_eq!(catalog.len(), 32);

        let distinct: HashSet<SubsetId> = catalog.iter().map(|s| s.id).collect();
        assert_eq!(distinct.len(), 32);

        for raw in 0..32u64 {
            let id = SubsetId::new(raw);
            assert_eq!(catalog[id].id, id);
        }
        assert_eq!(catalog.full().elements, vec![0, 1, 2, 3, 4]);
        assert_eq!(catalog.full().len(), 5);
        assert!(catalog.get(SubsetId::new(6)).contains(2));
    }

    #[test]
    fn test_empty_universe() {
        let catalog = SubsetCatalog::new(0);
        assert_eq!(catalog.len(), 1);
        assert!(catalog.full().is_empty());
        assert_eq!(catalog.full().id, SubsetId::EMPTY);
    }

    #[test]
    fn test_subset_display() {
        let subset = Subset::from_id(SubsetId::from_vertices([2, 0]));
        assert_eq!(subset.to_string(), "5:\t0 2");
        assert_eq!(Subset::from_id(SubsetId::EMPTY).to_string(), "0:\t");
    }
}
