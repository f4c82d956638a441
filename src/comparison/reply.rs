use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::comparison::payload::{ComparisonResult, ComparisonRow};
use crate::comparison::prompt::HostelSummary;

const DEFAULT_RECOMMENDATION: &str = "Check analysis details.";
const UNDECODED_RECOMMENDATION: &str = "Analysis Available";
const UNAVAILABLE_RECOMMENDATION: &str = "AI Unavailable";
const DEFAULT_SUMMARY: &str = "No summary available.";
const UNAVAILABLE_SUMMARY: &str = "AI Analysis unavailable at the moment.";
const UNAVAILABLE_CON: &str = "Could not generate detailed analysis.";

#[derive(Debug, Error)]
pub enum ReplyError {
    #[error("Reply is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Reply is not a JSON object")]
    NotAnObject,
}

fn parse_object(reply: &str) -> Result<Map<String, Value>, ReplyError> {
    match serde_json::from_str::<Value>(reply)? {
        Value::Object(map) => Ok(map),
        _ => Err(ReplyError::NotAnObject),
    }
}

fn string_field(map: &Map<String, Value>, key: &str, default: &str) -> String {
    map.get(key)
        .and_then(Value::as_str)
        .unwrap_or(default)
        .to_string()
}

fn table_field(map: &Map<String, Value>) -> Vec<ComparisonRow> {
    let rows = match map.get("comparison_table") {
        None | Some(Value::Null) => return Vec::new(),
        Some(Value::Array(rows)) => rows,
        Some(_) => {
            warn!("event=reply_decode module=comparison status=table_not_array");
            return Vec::new();
        }
    };

    rows.iter()
        .enumerate()
        .filter_map(|(index, row)| match serde_json::from_value(row.clone()) {
            Ok(row) => Some(row),
            Err(err) => {
                warn!("event=reply_decode module=comparison status=row_dropped index={index} error={err}");
                None
            }
        })
        .collect()
}

impl ComparisonResult {
    /// Strict decoding of a model reply; errors when the reply is not a JSON object.
    pub fn try_from_model_reply(
        reply: &str,
        hostel_names: Vec<String>,
    ) -> Result<Self, ReplyError> {
        let map = parse_object(reply)?;
        Ok(Self::from_object(&map, hostel_names))
    }

    /// Lenient decoding: an undecodable reply becomes the narrative itself.
    pub fn from_model_reply(reply: &str, hostel_names: Vec<String>) -> Self {
        match parse_object(reply) {
            Ok(map) => Self::from_object(&map, hostel_names),
            Err(err) => {
                warn!("event=reply_decode module=comparison status=fallback_narrative error={err}");
                ComparisonResult {
                    recommendation: UNDECODED_RECOMMENDATION.to_string(),
                    analysis: reply.to_string(),
                    comparison_table: Vec::new(),
                    hostel_names,
                }
            }
        }
    }

    fn from_object(map: &Map<String, Value>, hostel_names: Vec<String>) -> Self {
        ComparisonResult {
            recommendation: string_field(map, "recommendation", DEFAULT_RECOMMENDATION),
            analysis: string_field(map, "detailed_analysis", ""),
            comparison_table: table_field(map),
            hostel_names,
        }
    }

    /// The comparison shown when the model could not be reached at all.
    pub fn service_unavailable(
        first: &HostelSummary,
        second: &HostelSummary,
        error: &str,
    ) -> Self {
        let analysis = format!(
            "(Unable to connect to AI Service. Error: {error})\n\n\
             **Comparison Analysis (Fallback):**\n\n\
             **Price:** {n1} is priced at ${p1}, while {n2} is ${p2}.\n\n\
             **Rating:** {n1} has a rating of {r1}, whereas {n2} has {r2}.",
            n1 = first.name,
            n2 = second.name,
            p1 = first.price_per_night,
            p2 = second.price_per_night,
            r1 = first.rating,
            r2 = second.rating,
        );

        ComparisonResult {
            recommendation: UNAVAILABLE_RECOMMENDATION.to_string(),
            analysis,
            comparison_table: Vec::new(),
            hostel_names: vec![first.name.clone(), second.name.clone()],
        }
    }
}

/// Model summary of a single hostel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostelAnalysis {
    #[serde(default = "default_summary")]
    pub summary: String,
    #[serde(default)]
    pub pros: Vec<String>,
    #[serde(default)]
    pub cons: Vec<String>,
}

fn default_summary() -> String {
    DEFAULT_SUMMARY.to_string()
}

impl HostelAnalysis {
    pub fn try_from_model_reply(reply: &str) -> Result<Self, ReplyError> {
        let map = parse_object(reply)?;
        Ok(serde_json::from_value(Value::Object(map))?)
    }

    pub fn from_model_reply(reply: &str, hostel: &HostelSummary) -> Self {
        Self::try_from_model_reply(reply).unwrap_or_else(|err| {
            warn!("event=reply_decode module=comparison status=fallback_hostel error={err}");
            Self::unavailable(hostel)
        })
    }

    pub fn unavailable(hostel: &HostelSummary) -> Self {
        HostelAnalysis {
            summary: UNAVAILABLE_SUMMARY.to_string(),
            pros: vec![
                format!("Price: ${}", hostel.price_per_night),
                format!("Rating: {}", hostel.rating),
            ],
            cons: vec![UNAVAILABLE_CON.to_string()],
        }
    }
}
