//! Zero forcing family, minimality filter and the zero forcing number

use crate::subset::SubsetId;
use rayon::prelude::*;
use std::collections::BTreeSet;

/// Every zero forcing subset of a graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZeroForcingFamily {
    sets: BTreeSet<SubsetId>,
}

/// Zero forcing subsets with no zero forcing proper subset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinimalZeroForcingSets {
    sets: BTreeSet<SubsetId>,
    zero_forcing_number: Option<usize>,
}

impl ZeroForcingFamily {
    pub fn new(sets: BTreeSet<SubsetId>) -> Self {
        Self { sets }
    }

    #[inline]
    pub fn contains(&self, id: SubsetId) -> bool {
        self.sets.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Members in increasing id order
    pub fn iter(&self) -> impl Iterator<Item = SubsetId> + '_ {
        self.sets.iter().copied()
    }

    /// True when removing a single vertex from `id` still gives a member.
    ///
    /// Subsets of a non zero forcing set are never zero forcing, so looking one
    /// vertex down is enough to decide whether any proper subset is a member.
    pub fn has_zero_forcing_subset(&self, id: SubsetId) -> bool {
        id.vertices().any(|v| self.contains(id.without(v)))
    }

    /// Filter the family down to its minimal members
    pub fn minimal_sets(&self) -> MinimalZeroForcingSets {
        let sets: BTreeSet<SubsetId> = self
            .sets
            .par_iter()
            .copied()
            .filter(|&id| !self.has_zero_forcing_subset(id))
            .collect();

        let zero_forcing_number = sets.iter().map(|id| id.len()).min();
        log::debug!(
            "{} of {} zero forcing sets are minimal, zero forcing number {:?}",
            sets.len(),
            self.sets.len(),
            zero_forcing_number
        );

        MinimalZeroForcingSets {
            sets,
            zero_forcing_number,
        }
    }
}

impl MinimalZeroForcingSets {
    #[inline]
    pub fn contains(&self, id: SubsetId) -> bool {
        self.sets.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = SubsetId> + '_ {
        self.sets.iter().copied()
    }

    /// Smallest cardinality among the minimal sets; `None` when there are none
    pub fn zero_forcing_number(&self) -> Option<usize> {
        self.zero_forcing_number
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(vertices: &[usize]) -> SubsetId {
        SubsetId::from_vertices(vertices.iter().copied())
    }

    #[test]
    fn test_minimal_filter() {
        // Zero forcing family of the path 0-1-2
        let family = ZeroForcingFamily::new(BTreeSet::from([
            ids(&[0]),
            ids(&[2]),
            ids(&[0, 1]),
            ids(&[0, 2]),
            ids(&[1, 2]),
            ids(&[0, 1, 2]),
        ]));

        let minimal = family.minimal_sets();
        assert_eq!(minimal.iter().collect::<Vec<_>>(), vec![ids(&[0]), ids(&[2])]);
        assert_eq!(minimal.zero_forcing_number(), Some(1));
        assert!(family.has_zero_forcing_subset(ids(&[0, 1])));
        assert!(!family.has_zero_forcing_subset(ids(&[2])));
    }

    #[test]
    fn test_universe_only() {
        let family = ZeroForcingFamily::new(BTreeSet::from([ids(&[0, 1])]));
        let minimal = family.minimal_sets();
        assert_eq!(minimal.len(), 1);
        assert_eq!(minimal.zero_forcing_number(), Some(2));
    }

    #[test]
    fn test_empty_family_has_no_number() {
        let minimal = ZeroForcingFamily::new(BTreeSet::new()).minimal_sets();
        assert!(minimal.is_empty());
        assert_eq!(minimal.zero_forcing_number(), None);
    }

    #[test]
    fn test_empty_set_member_is_minimal() {
        // Graph with no vertices: the empty set is the universe
        let family = ZeroForcingFamily::new(BTreeSet::from([SubsetId::EMPTY]));
        let minimal = family.minimal_sets();
        assert!(minimal.contains(SubsetId::EMPTY));
        assert_eq!(minimal.zero_forcing_number(), Some(0));
    }
}
