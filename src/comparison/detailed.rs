use serde::Serialize;

use crate::comparison::payload::{ComparisonResult, ComparisonRow};
use crate::segmentation::AnalysisSegmenter;
use crate::types::analysis::AnalysisPoint;

/// What the "detailed analysis" area of a comparison should show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "items", rename_all = "snake_case")]
pub enum DetailedAnalysis {
    /// Pre-structured rows supplied by the backend.
    Table(Vec<ComparisonRow>),
    /// Points segmented out of the narrative.
    Points(Vec<AnalysisPoint>),
    /// Neither a table nor any narrative text: nothing to display.
    Empty,
}

impl DetailedAnalysis {
    /// A non-empty table is used as is and the narrative is never segmented.
    pub fn resolve(result: &ComparisonResult, segmenter: &AnalysisSegmenter) -> Self {
        if result.has_table() {
            return DetailedAnalysis::Table(result.comparison_table.clone());
        }

        let points = segmenter.segment(&result.analysis);
        if points.is_empty() {
            DetailedAnalysis::Empty
        } else {
            DetailedAnalysis::Points(points)
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, DetailedAnalysis::Empty)
    }
}
