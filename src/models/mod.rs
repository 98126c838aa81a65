//! Data models shared by the search client, the history store and the UI.
//!
//! - [`RepositoryRecord`] - One repository from a search result page
//! - [`HistoryRow`] - A persisted copy of a record the user chose to keep
//!
//! Records are immutable once built; history rows never reference the search
//! results they were copied from, membership is decided by url equality.

pub mod history;
pub mod repository;

pub use history::HistoryRow;
pub use repository::{RepositoryRecord, same_topic};
