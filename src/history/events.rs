/// Post-commit notification from the history store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryEvent {
    /// An upsert committed; `inserted` is false when the url was already present
    Added { url: String, inserted: bool },
    /// A remove committed; `deleted` is false when the url was absent
    Removed { url: String, deleted: bool },
}

impl HistoryEvent {
    pub fn url(&self) -> &str {
        match self {
            HistoryEvent::Added { url, .. } | HistoryEvent::Removed { url, .. } => url,
        }
    }

    /// Whether the table contents changed
    pub fn changed(&self) -> bool {
        match self {
            HistoryEvent::Added { inserted, .. } => *inserted,
            HistoryEvent::Removed { deleted, .. } => *deleted,
        }
    }
}
