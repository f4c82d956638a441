pub mod analysis;
pub mod identifiers;

pub use analysis::{AnalysisPoint, SegmentationMetadata, SegmentationResult};
pub use identifiers::{NarrativeVersion, PointId};
