//! Color-change propagation rule

use super::Graph;
use crate::subset::SubsetId;

/// One application of the rule: `forcer` infected `forced`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Force {
    pub forcer: usize,
    pub forced: usize,
}

/// One synchronous round of propagation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropagationRound {
    pub before: SubsetId,
    pub after: SubsetId,
    pub forces: Vec<Force>,
}

/// Color-change rules engine
pub struct ColorChangeRule;

impl ColorChangeRule {
    /// Vertex `v` forces when exactly one of its neighbors is outside `infected`.
    /// Returns that neighbor. An isolated vertex never forces.
    #[inline]
    pub fn forced_by(graph: &Graph, infected: SubsetId, v: usize) -> Option<usize> {
        match graph.uninfected_neighbors(v, infected) {
            (1, target) => target,
            _ => None,
        }
    }

    /// Play one synchronous round from `infected`.
    ///
    /// Every decision reads the original `infected` set; the new id is built by
    /// setting the bit of each forced vertex, so a vertex forced by several
    /// neighbors is only added once.
    pub fn propagate(graph: &Graph, infected: SubsetId) -> SubsetId {
        let mut next = infected;
        for v in infected.vertices() {
            if let Some(u) = Self::forced_by(graph, infected, v) {
                next = next.with(u);
            }
        }

        assert!(
            next.is_subset_of(graph.universe()),
            "propagation left the vertex universe: {} from {} over {} vertices",
            next,
            infected,
            graph.vertex_count()
        );
        next
    }

    /// Forces performed in one round; a vertex forced by several infected
    /// neighbors is credited to the lowest-numbered one
    pub fn forces(graph: &Graph, infected: SubsetId) -> Vec<Force> {
        let mut claimed = SubsetId::EMPTY;
        let mut forces = Vec::new();
        for forcer in infected.vertices() {
            if let Some(forced) = Self::forced_by(graph, infected, forcer) {
                if !claimed.contains(forced) {
                    claimed = claimed.with(forced);
                    forces.push(Force { forcer, forced });
                }
            }
        }
        forces
    }

    /// Propagate until nothing changes and return the derived set
    pub fn closure(graph: &Graph, infected: SubsetId) -> SubsetId {
        let mut current = infected;
        loop {
            let next = Self::propagate(graph, current);
            if next == current {
                return current;
            }
            current = next;
        }
    }

    /// Every round that changes the infected set, in order
    pub fn trace(graph: &Graph, infected: SubsetId) -> Vec<PropagationRound> {
        let mut rounds = Vec::new();
        let mut current = infected;
        loop {
            let forces = Self::forces(graph, current);
            if forces.is_empty() {
                return rounds;
            }
            let after = forces.iter().fold(current, |id, force| id.with(force.forced));
            rounds.push(PropagationRound {
                before: current,
                after,
                forces,
            });
            current = after;
        }
    }
}
