//! Zero forcing classification, aggregation and reporting

pub mod classifier;
pub mod family;
pub mod problem;
pub mod report;
pub mod validator;

pub use classifier::{ClassificationCache, ClassificationStatistics, ZeroForcingClassifier};
pub use family::{MinimalZeroForcingSets, ZeroForcingFamily};
pub use problem::ZeroForcingProblem;
pub use report::{ReportSummary, SubsetRecord, ZeroForcingReport};
pub use validator::{CheckResult, ForcingValidator};
