//! Memoized zero forcing decision procedure

use crate::graph::{ColorChangeRule, Graph};
use crate::subset::{SubsetCatalog, SubsetId};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

/// Verdicts confirmed during one classification run.
///
/// The two sets are disjoint and only ever grow.
#[derive(Debug, Clone, Default)]
pub struct ClassificationCache {
    zero_forcing: HashSet<SubsetId>,
    non_zero_forcing: HashSet<SubsetId>,
}

impl ClassificationCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached verdict for `id`, if any
    #[inline]
    pub fn verdict(&self, id: SubsetId) -> Option<bool> {
        if self.zero_forcing.contains(&id) {
            Some(true)
        } else if self.non_zero_forcing.contains(&id) {
            Some(false)
        } else {
            None
        }
    }

    /// Record a verdict; recording the same verdict twice is a no-op
    pub fn record(&mut self, id: SubsetId, is_zero_forcing: bool) {
        if is_zero_forcing {
            debug_assert!(!self.non_zero_forcing.contains(&id), "{} already cached as non zero forcing", id);
            self.zero_forcing.insert(id);
        } else {
            debug_assert!(!self.zero_forcing.contains(&id), "{} already cached as zero forcing", id);
            self.non_zero_forcing.insert(id);
        }
    }

    pub fn zero_forcing_count(&self) -> usize {
        self.zero_forcing.len()
    }

    pub fn non_zero_forcing_count(&self) -> usize {
        self.non_zero_forcing.len()
    }

    pub fn len(&self) -> usize {
        self.zero_forcing.len() + self.non_zero_forcing.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Counters collected while classifying
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationStatistics {
    /// Calls to the decision procedure
    pub subsets_examined: usize,
    /// Verdicts answered from the cache
    pub cache_hits: usize,
    /// Propagation rounds played
    pub propagation_rounds: usize,
    /// Non-universal fixed points reached
    pub fixed_points: usize,
}

impl std::fmt::Display for ClassificationStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Classification Statistics:")?;
        writeln!(f, "  Subsets examined: {}", self.subsets_examined)?;
        writeln!(f, "  Cache hits: {}", self.cache_hits)?;
        writeln!(f, "  Propagation rounds: {}", self.propagation_rounds)?;
        writeln!(f, "  Fixed points: {}", self.fixed_points)?;
        Ok(())
    }
}

/// Decides whether subsets are zero forcing, sharing verdicts across calls
#[derive(Debug, Default)]
pub struct ZeroForcingClassifier {
    cache: ClassificationCache,
    statistics: ClassificationStatistics,
}

impl ZeroForcingClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decide whether repeated propagation from `start` infects every vertex.
    ///
    /// Walks the propagation chain `S, S', S'', …` until a base case, a cached
    /// verdict or a fixed point settles it; every subset reached along the
    /// way shares that verdict, since a set whose successor is zero forcing
    /// is itself zero forcing. Successors on the chain are cached, `start`
    /// itself only when it is a fixed point.
    pub fn is_zero_forcing(&mut self, graph: &Graph, start: SubsetId) -> bool {
        self.statistics.subsets_examined += 1;

        let universe = graph.universe();
        let mut successors = Vec::new();
        let mut current = start;

        let verdict = loop {
            if current == universe {
                break true;
            }
            if current.is_empty() {
                break false;
            }
            if let Some(verdict) = self.cache.verdict(current) {
                self.statistics.cache_hits += 1;
                break verdict;
            }

            let next = ColorChangeRule::propagate(graph, current);
            self.statistics.propagation_rounds += 1;

            if next == current {
                self.statistics.fixed_points += 1;
                self.cache.record(current, false);
                break false;
            }

            successors.push(next);
            current = next;
        };

        for id in successors {
            self.cache.record(id, verdict);
        }
        verdict
    }

    /// Classify every subset of the catalog and return the zero forcing family.
    ///
    /// `progress` receives the number of subsets classified so far.
    pub fn classify_all<F>(&mut self, graph: &Graph, catalog: &SubsetCatalog, mut progress: F) -> BTreeSet<SubsetId>
    where
        F: FnMut(usize),
    {
        let mut zero_forcing = BTreeSet::new();
        for (done, subset) in catalog.iter().enumerate() {
            if self.is_zero_forcing(graph, subset.id) {
                zero_forcing.insert(subset.id);
            }
            progress(done + 1);
        }

        // Full universe qualifies by definition
        zero_forcing.insert(catalog.full().id);

        log::debug!(
            "Classified {} subsets: {} zero forcing, cache holds {} verdicts",
            catalog.len(),
            zero_forcing.len(),
            self.cache.len()
        );
        zero_forcing
    }

    pub fn cache(&self) -> &ClassificationCache {
        &self.cache
    }

    pub fn statistics(&self) -> ClassificationStatistics {
        self.statistics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(vertices: &[usize]) -> SubsetId {
        SubsetId::from_vertices(vertices.iter().copied())
    }

    fn path3() -> Graph {
        Graph::from_edges(3, [(0, 1), (1, 2)])
    }

    #[test]
    fn test_path_verdicts() {
        let graph = path3();
        let mut classifier = ZeroForcingClassifier::new();

        assert!(classifier.is_zero_forcing(&graph, ids(&[0])));
        assert!(classifier.is_zero_forcing(&graph, ids(&[2])));
        assert!(!classifier.is_zero_forcing(&graph, ids(&[1])));
        assert!(classifier.is_zero_forcing(&graph, ids(&[0, 1, 2])));
        assert!(!classifier.is_zero_forcing(&graph, SubsetId::EMPTY));
    }

    #[test]
    fn test_cache_write_pattern() {
        let graph = path3();
        let mut classifier = ZeroForcingClassifier::new();

        assert!(classifier.is_zero_forcing(&graph, ids(&[0])));
        // Successors are cached, the starting subset is not
        assert_eq!(classifier.cache().verdict(ids(&[0])), None);
        assert_eq!(classifier.cache().verdict(ids(&[0, 1])), Some(true));
        assert_eq!(classifier.cache().verdict(ids(&[0, 1, 2])), Some(true));

        // Fixed points cache the starting subset
        assert!(!classifier.is_zero_forcing(&graph, ids(&[1])));
        assert_eq!(classifier.cache().verdict(ids(&[1])), Some(false));
    }

    #[test]
    fn test_reclassification_is_stable() {
        let graph = Graph::from_edges(5, [(0, 1), (1, 2), (2, 3), (3, 4), (4, 0), (0, 2)]);
        let mut classifier = ZeroForcingClassifier::new();

        let first: Vec<bool> = (0..32).map(|raw| classifier.is_zero_forcing(&graph, SubsetId::new(raw))).collect();
        let second: Vec<bool> = (0..32).map(|raw| classifier.is_zero_forcing(&graph, SubsetId::new(raw))).collect();
        assert_eq!(first, second);

        // A fresh run without a warm cache agrees as well
        let mut fresh = ZeroForcingClassifier::new();
        for raw in (0..32).rev() {
            assert_eq!(fresh.is_zero_forcing(&graph, SubsetId::new(raw)), first[raw as usize]);
        }
    }

    #[test]
    fn test_verdict_matches_closure() {
        let graph = Graph::from_edges(6, [(0, 1), (1, 2), (1, 3), (3, 4), (4, 5), (2, 5)]);
        let mut classifier = ZeroForcingClassifier::new();
        for raw in 0..64 {
            let id = SubsetId::new(raw);
            let expected = ColorChangeRule::closure(&graph, id) == graph.universe();
            assert_eq!(classifier.is_zero_forcing(&graph, id), expected, "subset {}", id);
        }
    }

    #[test]
    fn test_classify_all_includes_universe() {
        let graph = Graph::empty(2);
        let catalog = SubsetCatalog::new(2);
        let mut classifier = ZeroForcingClassifier::new();

        let family = classifier.classify_all(&graph, &catalog, |_| {});
        assert_eq!(family, BTreeSet::from([ids(&[0, 1])]));
    }

    #[test]
    fn test_classify_all_reports_progress() {
        let graph = path3();
        let catalog = SubsetCatalog::new(3);
        let mut classifier = ZeroForcingClassifier::new();

        let mut last = 0;
        classifier.classify_all(&graph, &catalog, |done| last = done);
        assert_eq!(last, 8);
        assert_eq!(classifier.statistics().subsets_examined, 8);
    }

    #[test]
    fn test_empty_universe_is_zero_forcing() {
        let graph = Graph::empty(0);
        let mut classifier = ZeroForcingClassifier::new();
        assert!(classifier.is_zero_forcing(&graph, SubsetId::EMPTY));
    }

    #[test]
    fn test_cache_sets_are_disjoint() {
        let graph = Graph::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)]);
        let catalog = SubsetCatalog::new(4);
        let mut classifier = ZeroForcingClassifier::new();
        classifier.classify_all(&graph, &catalog, |_| {});

        let cache = classifier.cache();
        assert_eq!(cache.len(), cache.zero_forcing_count() + cache.non_zero_forcing_count());
        for raw in 0..16 {
            let id = SubsetId::new(raw);
            let in_both = cache.zero_forcing.contains(&id) && cache.non_zero_forcing.contains(&id);
            assert!(!in_both);
        }
    }
}
