pub mod detailed;
pub mod payload;
pub mod prompt;
pub mod reply;

pub use detailed::DetailedAnalysis;
pub use payload::{recent_history, ComparisonHistoryItem, ComparisonResult, ComparisonRow, HISTORY_LIMIT};
pub use prompt::{comparison_prompt, hostel_prompt, HostelSummary, SYSTEM_PROMPT};
pub use reply::{HostelAnalysis, ReplyError};
