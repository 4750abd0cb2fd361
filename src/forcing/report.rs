//! Serializable results of a zero forcing run

use super::classifier::ClassificationStatistics;
use crate::subset::{Subset, SubsetId};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A subset as written to reports
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubsetRecord {
    pub id: SubsetId,
    pub vertices: Vec<usize>,
}

impl From<&Subset> for SubsetRecord {
    fn from(subset: &Subset) -> Self {
        Self {
            id: subset.id,
            vertices: subset.elements.clone(),
        }
    }
}

impl From<SubsetId> for SubsetRecord {
    fn from(id: SubsetId) -> Self {
        Self {
            id,
            vertices: id.vertices().collect(),
        }
    }
}

/// Everything a run produced
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZeroForcingReport {
    pub vertex_count: usize,
    pub edge_count: usize,
    /// Every subset in id order, when requested
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub catalog: Option<Vec<SubsetRecord>>,
    pub zero_forcing_sets: Vec<SubsetRecord>,
    pub minimal_zero_forcing_sets: Vec<SubsetRecord>,
    pub summary: ReportSummary,
    pub statistics: ClassificationStatistics,
    #[serde(skip)]
    pub solve_time: Duration,
}

/// The three scalar results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub num_zero_forcing: usize,
    pub num_minimal_zero_forcing: usize,
    /// `None` when undefined
    pub zero_forcing_number: Option<usize>,
}

impl ZeroForcingReport {
    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Save to file as JSON
    pub fn save_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> anyhow::Result<()> {
        let json = self.to_json()?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

impl std::fmt::Display for ReportSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "# of zero forcing subsets: {}", self.num_zero_forcing)?;
        writeln!(f, "# of minimal zero forcing subsets: {}", self.num_minimal_zero_forcing)?;
        match self.zero_forcing_number {
            Some(number) => write!(f, "Zero forcing number: {}", number),
            None => write!(f, "Zero forcing number: undefined"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> ZeroForcingReport {
        ZeroForcingReport {
            vertex_count: 2,
            edge_count: 1,
            catalog: None,
            zero_forcing_sets: vec![SubsetId::new(1).into(), SubsetId::new(3).into()],
            minimal_zero_forcing_sets: vec![SubsetId::new(1).into()],
            summary: ReportSummary {
                num_zero_forcing: 2,
                num_minimal_zero_forcing: 1,
                zero_forcing_number: Some(1),
            },
            statistics: ClassificationStatistics::default(),
            solve_time: Duration::from_millis(3),
        }
    }

    #[test]
    fn test_record_from_id() {
        let record = SubsetRecord::from(SubsetId::new(6));
        assert_eq!(record.vertices, vec![1, 2]);
    }

    #[test]
    fn test_json_serialization() {
        let report = sample_report();
        let json = report.to_json().unwrap();
        assert!(json.contains("\"zero_forcing_number\": 1"));
        assert!(!json.contains("catalog"));

        let parsed: ZeroForcingReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.summary, report.summary);
        assert_eq!(parsed.zero_forcing_sets, report.zero_forcing_sets);
        assert_eq!(parsed.solve_time, Duration::ZERO);
    }

    #[test]
    fn test_summary_display() {
        let mut summary = sample_report().summary;
        assert!(summary.to_string().ends_with("Zero forcing number: 1"));

        summary.zero_forcing_number = None;
        assert!(summary.to_string().ends_with("Zero forcing number: undefined"));
    }
}
