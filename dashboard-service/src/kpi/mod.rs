//! Text summaries shown next to the charts.

pub mod coverage;
pub mod evolution;
pub mod incident_start;
pub mod ramps;

use chrono::NaiveDateTime;
use serde::Serialize;

/// A KPI panel: a headed list of findings, or a single message when there
/// is nothing to list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Panel {
    List { heading: String, items: Vec<String> },
    Message(String),
}

impl Panel {
    pub fn message(text: impl Into<String>) -> Self {
        Self::Message(text.into())
    }

    /// A list, or `fallback` as a message when `items` is empty.
    pub fn list_or(heading: String, items: Vec<String>, fallback: &str) -> Self {
        if items.is_empty() {
            Self::message(fallback)
        } else {
            Self::List { heading, items }
        }
    }

    pub fn is_message(&self) -> bool {
        matches!(self, Self::Message(_))
    }

    /// Plain-text rendering for terminals and logs.
    pub fn to_text(&self) -> String {
        match self {
            Self::Message(text) => text.clone(),
            Self::List { heading, items } => {
                let mut out = heading.clone();
                for item in items {
                    out.push_str("\n  - ");
                    out.push_str(item);
                }
                out
            }
        }
    }
}

/// Short wall-clock label, e.g. `28-Apr 12:33`.
pub(crate) fn time_label(at: NaiveDateTime) -> String {
    at.format("%d-%b %H:%M").to_string()
}
