use crate::segmentation::heading::HeadingMatch;
use crate::types::analysis::AnalysisPoint;
use crate::types::identifiers::PointId;

/// A point that may still receive continuation lines.
#[derive(Debug)]
struct OpenPoint<'a> {
    point: AnalysisPoint,
    // Blank continuation lines held until a non-blank line follows them.
    pending_blank: Vec<&'a str>,
}

impl<'a> OpenPoint<'a> {
    fn push_line(&mut self, line: &'a str) {
        if line.trim().is_empty() {
            if !self.point.content.is_empty() {
                self.pending_blank.push(line);
            }
            return;
        }
        for blank in self.pending_blank.drain(..) {
            self.point.content.push('\n');
            self.point.content.push_str(blank);
        }
        if !self.point.content.is_empty() {
            self.point.content.push('\n');
        }
        self.point.content.push_str(line);
    }

    fn close(self) -> AnalysisPoint {
        self.point
    }
}

/// Single-pass fold state: closed points plus the currently open one.
#[derive(Debug)]
pub struct Accumulator<'a> {
    output: Vec<AnalysisPoint>,
    current: Option<OpenPoint<'a>>,
    overview_id: PointId,
    overview_title: &'a str,
}

impl<'a> Accumulator<'a> {
    pub fn new(overview_id: PointId, overview_title: &'a str) -> Self {
        Self {
            output: Vec::new(),
            current: None,
            overview_id,
            overview_title,
        }
    }

    /// A heading always closes the open point, even an empty one.
    pub fn open_heading(&mut self, heading: HeadingMatch<'_>) {
        if let Some(open) = self.current.take() {
            self.output.push(open.close());
        }
        self.current = Some(OpenPoint {
            point: AnalysisPoint::new(PointId::new(heading.number), heading.title, heading.detail),
            pending_blank: Vec::new(),
        });
    }

    /// Routes a non-heading line. Returns true when the line landed in the overview point.
    pub fn push_unstructured(&mut self, line: &'a str) -> bool {
        if let Some(open) = self.current.as_mut() {
            open.push_line(line);
            return false;
        }
        if line.trim().is_empty() {
            return false;
        }
        match self.output.first_mut() {
            Some(first) if first.id == self.overview_id => {
                first.content.push('\n');
                first.content.push_str(line);
            }
            _ => {
                debug_assert!(self.output.is_empty(), "overview must be the first point");
                self.output.push(AnalysisPoint::new(
                    self.overview_id.clone(),
                    self.overview_title,
                    line,
                ));
            }
        }
        true
    }

    pub fn finish(mut self) -> Vec<AnalysisPoint> {
        if let Some(open) = self.current.take() {
            self.output.push(open.close());
        }
        self.output
    }
}
