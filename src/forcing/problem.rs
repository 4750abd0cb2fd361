//! One zero forcing run over a single graph

use super::classifier::{ClassificationStatistics, ZeroForcingClassifier};
use super::family::{MinimalZeroForcingSets, ZeroForcingFamily};
use super::report::{ReportSummary, SubsetRecord, ZeroForcingReport};
use crate::config::Settings;
use crate::graph::{load_graph_from_file, read_graph, Graph};
use crate::subset::SubsetCatalog;
use crate::utils::ProgressIndicator;
use anyhow::{Context, Result};
use std::time::{Duration, Instant};

/// Owns the graph, the subset catalog and the classification state of a run
pub struct ZeroForcingProblem {
    settings: Settings,
    graph: Graph,
    catalog: SubsetCatalog,
    classifier: ZeroForcingClassifier,
    family: Option<ZeroForcingFamily>,
    minimal: Option<MinimalZeroForcingSets>,
    solve_time: Duration,
}

impl ZeroForcingProblem {
    /// Create a problem from settings, reading the graph from the configured
    /// file or from stdin
    pub fn new(settings: Settings) -> Result<Self> {
        let max_vertices = settings.analysis.max_vertices;
        let graph = match settings.input.graph_file {
            Some(ref path) => load_graph_from_file(path, max_vertices)?,
            None => read_graph(std::io::stdin().lock(), max_vertices)
                .context("Failed to read graph from stdin")?,
        };

        Self::with_graph(settings, graph)
    }

    /// Create a problem with an explicit graph
    pub fn with_graph(settings: Settings, graph: Graph) -> Result<Self> {
        if graph.vertex_count() > settings.analysis.max_vertices {
            anyhow::bail!(
                "Graph has {} vertices, more than the configured maximum of {}",
                graph.vertex_count(),
                settings.analysis.max_vertices
            );
        }

        let catalog = SubsetCatalog::new(graph.vertex_count());
        log::info!(
            "Loaded graph with {} vertices and {} edges",
            graph.vertex_count(),
            graph.edge_count()
        );

        Ok(Self {
            settings,
            graph,
            catalog,
            classifier: ZeroForcingClassifier::new(),
            family: None,
            minimal: None,
            solve_time: Duration::ZERO,
        })
    }

    /// Classify every subset; runs once, later calls return the stored family
    pub fn find_zero_forcing(&mut self) -> &ZeroForcingFamily {
        let family = match self.family.take() {
            Some(family) => family,
            None => {
                let start_time = Instant::now();
                let mut progress = self
                    .settings
                    .analysis
                    .show_progress
                    .then(|| ProgressIndicator::new(self.catalog.len()));

                let sets = self.classifier.classify_all(&self.graph, &self.catalog, |done| {
                    if let Some(ref mut progress) = progress {
                        progress.update(done);
                    }
                });
                if let Some(ref progress) = progress {
                    progress.finish();
                }

                self.solve_time += start_time.elapsed();
                ZeroForcingFamily::new(sets)
            }
        };

        self.family.insert(family)
    }

    /// Filter the family down to its minimal members, classifying first if needed
    pub fn find_minimal_zero_forcing(&mut self) -> &MinimalZeroForcingSets {
        let minimal = match self.minimal.take() {
            Some(minimal) => minimal,
            None => {
                let family = self.find_zero_forcing();
                let start_time = Instant::now();
                let minimal = family.minimal_sets();
                self.solve_time += start_time.elapsed();
                minimal
            }
        };

        self.minimal.insert(minimal)
    }

    /// Run both phases and collect the report
    pub fn solve(&mut self) -> ZeroForcingReport {
        self.find_minimal_zero_forcing();
        self.report()
    }

    /// Snapshot the computed results; phases not yet run show up empty
    pub fn report(&self) -> ZeroForcingReport {
        let catalog = self
            .settings
            .output
            .show_catalog
            .then(|| self.catalog.iter().map(SubsetRecord::from).collect());

        let zero_forcing_sets: Vec<SubsetRecord> = self
            .family
            .iter()
            .flat_map(ZeroForcingFamily::iter)
            .map(|id| SubsetRecord::from(&self.catalog[id]))
            .collect();

        let minimal_zero_forcing_sets: Vec<SubsetRecord> = self
            .minimal
            .iter()
            .flat_map(MinimalZeroForcingSets::iter)
            .map(|id| SubsetRecord::from(&self.catalog[id]))
            .collect();

        ZeroForcingReport {
            vertex_count: self.graph.vertex_count(),
            edge_count: self.graph.edge_count(),
            catalog,
            summary: ReportSummary {
                num_zero_forcing: zero_forcing_sets.len(),
                num_minimal_zero_forcing: minimal_zero_forcing_sets.len(),
                zero_forcing_number: self.zero_forcing_number(),
            },
            zero_forcing_sets,
            minimal_zero_forcing_sets,
            statistics: self.statistics(),
            solve_time: self.solve_time,
        }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn catalog(&self) -> &SubsetCatalog {
        &self.catalog
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Number of zero forcing sets, once classified
    pub fn num_zero_forcing(&self) -> Option<usize> {
        self.family.as_ref().map(ZeroForcingFamily::len)
    }

    /// Number of minimal zero forcing sets, once filtered
    pub fn num_minimal_zero_forcing(&self) -> Option<usize> {
        self.minimal.as_ref().map(MinimalZeroForcingSets::len)
    }

    /// Zero forcing number, once filtered
    pub fn zero_forcing_number(&self) -> Option<usize> {
        self.minimal
            .as_ref()
            .and_then(MinimalZeroForcingSets::zero_forcing_number)
    }

    pub fn statistics(&self) -> ClassificationStatistics {
        self.classifier.statistics()
    }
}
