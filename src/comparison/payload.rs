use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Most recent comparisons shown in a user's history.
pub const HISTORY_LIMIT: usize = 10;

/// One feature line of a tabular comparison.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparisonRow {
    pub feature: String,
    pub details: String,
    pub hostel1_has: bool,
    pub hostel2_has: bool,
}

/// A comparison of two hostels as returned by the backend.
///
/// Carries a tabular form, a narrative form, both, or neither. The table
/// always wins when present; see [`crate::comparison::DetailedAnalysis`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ComparisonResult {
    #[serde(default)]
    pub recommendation: String,
    #[serde(default)]
    pub analysis: String,
    #[serde(default)]
    pub comparison_table: Vec<ComparisonRow>,
    #[serde(default)]
    pub hostel_names: Vec<String>,
}

impl ComparisonResult {
    pub fn has_table(&self) -> bool {
        !self.comparison_table.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonHistoryItem {
    pub id: String,
    #[serde(default)]
    pub hostel_names: Vec<String>,
    pub recommendation: String,
    pub created_at: DateTime<Utc>,
}

/// Newest first, ties broken by id ascending, at most [`HISTORY_LIMIT`] items.
pub fn recent_history(mut items: Vec<ComparisonHistoryItem>) -> Vec<ComparisonHistoryItem> {
    items.sort_by(|a, b| match b.created_at.cmp(&a.created_at) {
        Ordering::Equal => a.id.cmp(&b.id),
        other => other,
    });
    items.truncate(HISTORY_LIMIT);
    items
}
