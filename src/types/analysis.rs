use serde::{Deserialize, Serialize};

use crate::types::identifiers::{NarrativeVersion, PointId};

/// One renderable unit of a segmented narrative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisPoint {
    pub id: PointId,
    pub title: String,
    /// Body text. Source line breaks are kept as `\n`.
    pub content: String,
}

impl AnalysisPoint {
    pub fn new(id: PointId, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
        }
    }
}

/// Counters describing how a narrative was segmented.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentationMetadata {
    pub source_version: NarrativeVersion,

    pub lines_total: usize,
    pub lines_blank: usize,

    pub headings_matched: usize,
    pub overview_lines: usize,
    pub points_emitted: usize,
}

/// The points of one narrative plus the metadata explaining them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentationResult {
    pub points: Vec<AnalysisPoint>,
    pub segmentation: SegmentationMetadata,
}

impl SegmentationResult {
    /// An empty result means "nothing to display", not a failure.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
