use serde::{Deserialize, Serialize};

use super::RepositoryRecord;

/// A row of the persisted history table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRow {
    pub id: i64,
    #[serde(flatten)]
    pub record: RepositoryRecord,
}

impl HistoryRow {
    pub fn url(&self) -> &str {
        &self.record.url
    }
}
