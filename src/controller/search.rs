/// Which page a search should land on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRequest {
    /// An explicit page; values below 1 are treated as 1
    Page(u32),
    /// Re-issue the current page
    Current,
    Next,
    /// No-op on page 1
    Previous,
}

/// Fetch lifecycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchPhase {
    #[default]
    Idle,
    Searching,
}

/// Everything a background worker needs to run one fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub generation: u64,
    pub topics: Vec<String>,
    pub page: u32,
}
