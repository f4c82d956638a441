use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Label of one analysis point.
///
/// Either the numeral of a recognized heading, kept as written (`"01"` stays
/// `"01"`), or the overview sentinel configured on the segmenter.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointId(String);

impl PointId {
    pub fn new(value: impl Into<String>) -> Self {
        PointId(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the label is made of ASCII digits only, i.e. it came from a heading.
    pub fn is_numbered(&self) -> bool {
        !self.0.is_empty() && self.0.bytes().all(|b| b.is_ascii_digit())
    }
}

impl std::fmt::Display for PointId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<&str> for PointId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Content hash of a narrative.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NarrativeVersion(String);

impl NarrativeVersion {
    pub fn from_text(text: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(text.as_bytes());

        let hash = hasher.finalize();
        let hex = hex::encode(hash);

        NarrativeVersion(format!("sha256:{hex}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
