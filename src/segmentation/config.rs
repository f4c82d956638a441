use crate::types::identifiers::PointId;

// Serializable
// Comparable
// Explicit defaults
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SegmenterConfig {
    pub version: String,
    pub overview_identifier: String,
    pub overview_title: String,
}

impl SegmenterConfig {
    pub fn v0() -> Self {
        Self {
            version: "1".into(),
            overview_identifier: "overview".into(),
            overview_title: "Overview".into(),
        }
    }

    pub fn overview_id(&self) -> PointId {
        PointId::new(self.overview_identifier.clone())
    }
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self::v0()
    }
}
