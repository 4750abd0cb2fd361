//! Checking a single candidate vertex set

use super::classifier::ZeroForcingClassifier;
use crate::graph::{ColorChangeRule, Graph, PropagationRound};
use crate::subset::{Subset, SubsetId};
use anyhow::Result;
use itertools::Itertools;

/// Decides one vertex set and explains the verdict
pub struct ForcingValidator<'g> {
    graph: &'g Graph,
}

/// Outcome of checking a candidate set
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub set: Subset,
    pub is_zero_forcing: bool,
    /// Vertices infected once propagation stalls
    pub derived_set: Subset,
    pub rounds: Vec<PropagationRound>,
    /// Zero forcing and no single vertex can be dropped
    pub is_minimal: bool,
    /// Vertices whose removal leaves a zero forcing set
    pub redundant_vertices: Vec<usize>,
}

impl<'g> ForcingValidator<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self { graph }
    }

    /// Check whether `vertices` form a (minimal) zero forcing set
    pub fn check(&self, vertices: &[usize]) -> Result<CheckResult> {
        let vertex_count = self.graph.vertex_count();
        if vertex_count > SubsetId::MAX_VERTICES {
            anyhow::bail!(
                "Graph has {} vertices, more than the supported limit of {}",
                vertex_count,
                SubsetId::MAX_VERTICES
            );
        }
        if let Some(&bad) = vertices.iter().find(|&&v| v >= vertex_count) {
            anyhow::bail!(
                "Vertex {} is outside the graph (vertices are 0..{})",
                bad,
                vertex_count
            );
        }

        let id = SubsetId::from_vertices(vertices.iter().copied());
        let mut classifier = ZeroForcingClassifier::new();
        let is_zero_forcing = classifier.is_zero_forcing(self.graph, id);

        let redundant_vertices: Vec<usize> = if is_zero_forcing {
            id.vertices()
                .filter(|&v| classifier.is_zero_forcing(self.graph, id.without(v)))
                .collect()
        } else {
            Vec::new()
        };

        let rounds = ColorChangeRule::trace(self.graph, id);
        let derived = rounds.last().map_or(id, |round| round.after);
        debug_assert_eq!(derived == self.graph.universe(), is_zero_forcing);

        log::debug!(
            "Checked {{{}}}: zero forcing = {}, {} rounds",
            id.vertices().join(", "),
            is_zero_forcing,
            rounds.len()
        );

        Ok(CheckResult {
            set: Subset::from_id(id),
            is_zero_forcing,
            derived_set: Subset::from_id(derived),
            rounds,
            is_minimal: is_zero_forcing && redundant_vertices.is_empty(),
            redundant_vertices,
        })
    }
}

impl std::fmt::Display for CheckResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Check Result: {}",
            if self.is_zero_forcing { "ZERO FORCING" } else { "NOT ZERO FORCING" }
        )?;
        writeln!(f, "Set: {{{}}}", self.set.elements.iter().join(", "))?;
        writeln!(f, "Derived set: {{{}}}", self.derived_set.elements.iter().join(", "))?;
        writeln!(f, "Propagation rounds: {}", self.rounds.len())?;
        if self.is_zero_forcing {
            writeln!(f, "Minimal: {}", self.is_minimal)?;
            if !self.redundant_vertices.is_empty() {
                writeln!(f, "Redundant vertices: {}", self.redundant_vertices.iter().join(", "))?;
            }
        }
        Ok(())
    }
}
