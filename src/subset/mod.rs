//! Vertex subsets: bitmask identities and their enumeration

pub mod id;
pub mod catalog;

pub use id::{SubsetId, Vertices};
pub use catalog::{gray_code_subsets, Subset, SubsetCatalog};
