use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// The three-valued qualitative tag on a thought.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    clap::ValueEnum,
)]
#[strum(ascii_case_insensitive)]
pub enum Classification {
    Good,
    Harmful,
    Unsure,
}

/// Sort order for list browsing.
///
/// `Newest`/`Oldest` order by creation id (millisecond timestamps),
/// `Recurring` by vote score. Equal keys keep the stored order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, clap::ValueEnum)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum SortMode {
    #[default]
    Newest,
    Oldest,
    Recurring,
}

/// A single journal record.
///
/// Field names serialize in camelCase to stay compatible with backup
/// payloads exported by the web version of the journal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Thought {
    /// Creation time in milliseconds; doubles as the unique id.
    pub id: u64,
    pub content: String,
    pub root_cause: String,
    pub classification: Classification,
    #[serde(default)]
    pub score: i64,
    pub timestamp: DateTime<Utc>,
}

impl Thought {
    pub fn new(content: &str, root_cause: &str, classification: Classification) -> Self {
        let now = Utc::now();
        Self {
            id: now.timestamp_millis() as u64,
            content: content.to_string(),
            root_cause: root_cause.to_string(),
            classification,
            score: 0,
            timestamp: now,
        }
    }

    /// Case-insensitive substring match across content, root cause and
    /// classification, mirroring the list search box.
    pub fn matches(&self, query: &str) -> bool {
        let q = query.to_lowercase();
        self.content.to_lowercase().contains(&q)
            || self.root_cause.to_lowercase().contains(&q)
            || self.classification.to_string().to_lowercase().contains(&q)
    }
}
