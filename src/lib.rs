//! Structuring of AI-generated hostel comparisons.
//!
//! `hostel-compare-core` turns a model's free-form comparison narrative into
//! an ordered list of titled points ready to render as cards, decides between
//! the backend's tabular comparison and that narrative, and decodes model
//! replies with the same fallbacks the service applies. All operations are
//! pure and deterministic: identical inputs always produce identical outputs.

pub mod comparison;
pub mod segmentation;
pub mod types;

pub use crate::comparison::{ComparisonResult, ComparisonRow, DetailedAnalysis};
pub use crate::segmentation::{segment, AnalysisSegmenter, SegmenterConfig};
pub use crate::types::{AnalysisPoint, PointId};
