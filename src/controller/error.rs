use thiserror::Error;

use crate::browser::BrowserError;
use crate::github::SearchError;
use crate::history::HistoryError;

/// Failures surfaced by controller operations.
///
/// An empty topic list is not an error; it raises the `nothing_to_search` alert instead.
#[derive(Debug, Error)]
pub enum ControllerError {
    #[error(transparent)]
    Search(#[from] SearchError),

    #[error(transparent)]
    History(#[from] HistoryError),

    #[error(transparent)]
    Browser(#[from] BrowserError),
}
