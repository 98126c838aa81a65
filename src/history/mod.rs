//! Persisted "recently opened" history.
//!
//! One SQLite table, at most one row per repository url. Writes run in
//! exclusive transactions and every committed write is announced to
//! subscribers as a [`HistoryEvent`].

pub mod error;
pub mod events;
pub mod store;
pub mod tags;

pub use error::HistoryError;
pub use events::HistoryEvent;
pub use store::HistoryStore;
pub use tags::{TAG_SEPARATOR, join_tags, split_tags};
