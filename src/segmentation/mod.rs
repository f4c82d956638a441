pub mod accumulator;
pub mod config;
pub mod heading;

use log::debug;

use crate::types::analysis::{AnalysisPoint, SegmentationMetadata, SegmentationResult};
use crate::types::identifiers::NarrativeVersion;
pub use accumulator::Accumulator;
pub use config::SegmenterConfig;
pub use heading::{
    default_matchers, BoldHeading, BoxedMatcher, HeadingMatch, HeadingMatcher, PlainHeading,
};

/// Splits free-form analysis text into numbered, titled points.
///
/// Single forward pass over the lines, no backtracking. A line is a heading
/// when one of the matchers accepts it (tried in order, first success wins),
/// otherwise it continues the open point, or feeds the overview point when no
/// point is open yet. Total: every input yields a result.
pub struct AnalysisSegmenter {
    config: SegmenterConfig,
    matchers: Vec<BoxedMatcher>,
}

impl Default for AnalysisSegmenter {
    fn default() -> Self {
        Self::new(SegmenterConfig::v0())
    }
}

impl AnalysisSegmenter {
    pub fn new(config: SegmenterConfig) -> Self {
        Self::with_matchers(config, default_matchers())
    }

    pub fn with_matchers(config: SegmenterConfig, matchers: Vec<BoxedMatcher>) -> Self {
        Self { config, matchers }
    }

    pub fn config(&self) -> &SegmenterConfig {
        &self.config
    }

    pub fn segment(&self, text: &str) -> Vec<AnalysisPoint> {
        self.segment_with_metadata(text).points
    }

    pub fn segment_with_metadata(&self, text: &str) -> SegmentationResult {
        let mut acc = Accumulator::new(self.config.overview_id(), &self.config.overview_title);

        let mut lines_total = 0;
        let mut lines_blank = 0;
        let mut headings_matched = 0;
        let mut overview_lines = 0;

        for line in split_lines(text) {
            lines_total += 1;
            if line.trim().is_empty() {
                lines_blank += 1;
            }

            match self.match_heading(line) {
                Some(heading) => {
                    headings_matched += 1;
                    acc.open_heading(heading);
                }
                None => {
                    if acc.push_unstructured(line) {
                        overview_lines += 1;
                    }
                }
            }
        }

        let points = acc.finish();

        debug_assert!(points.len() <= lines_total - lines_blank);

        debug!(
            "event=segment module=segmentation lines_total={} lines_blank={} headings={} overview_lines={} points={}",
            lines_total,
            lines_blank,
            headings_matched,
            overview_lines,
            points.len()
        );

        let segmentation = SegmentationMetadata {
            source_version: NarrativeVersion::from_text(text),
            lines_total,
            lines_blank,
            headings_matched,
            overview_lines,
            points_emitted: points.len(),
        };

        SegmentationResult {
            points,
            segmentation,
        }
    }

    fn match_heading<'a>(&self, line: &'a str) -> Option<HeadingMatch<'a>> {
        self.matchers.iter().find_map(|m| m.match_heading(line))
    }
}

/// Segments `text` with the default configuration.
pub fn segment(text: &str) -> Vec<AnalysisPoint> {
    AnalysisSegmenter::default().segment(text)
}

/// Lines on `\n`, each without a trailing `\r`. Empty input has no lines.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let lines = if text.is_empty() { None } else { Some(text.split('\n')) };
    lines
        .into_iter()
        .flatten()
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_lines_keeps_empty_segments() {
        let lines: Vec<&str> = split_lines("a\n\nb\n").collect();
        assert_eq!(lines, vec!["a", "", "b", ""]);
    }

    #[test]
    fn split_lines_strips_carriage_returns() {
        let lines: Vec<&str> = split_lines("a\r\nb\r").collect();
        assert_eq!(lines, vec!["a", "b"]);
    }

    #[test]
    fn split_lines_of_empty_text_is_empty() {
        assert_eq!(split_lines("").count(), 0);
    }
}
