//! GitHub Topics - find repositories by topic and keep a local history
//!
//! This library provides the pieces behind the `github-topics` binary:
//!
//! - Querying the GitHub repository search API for repositories tagged with
//!   every topic in a list, most recently updated first
//! - A SQLite history of opened repositories, one row per url
//! - A controller holding topics, paging, selection cursors and history view
//! - A terminal interface and plain command-line subcommands on top of it
//!
//! # Example
//!
//! ```no_run
//! use github_topics::{GithubClient, RepositorySearch};
//!
//! let client = GithubClient::new();
//! let repos = client.fetch_page(&["rust".to_string(), "tui".to_string()], 1)?;
//! for repo in &repos {
//!     println!("{} ({} stars)", repo.full_name, repo.star_count);
//! }
//! # Ok::<(), github_topics::SearchError>(())
//! ```

pub mod browser;
pub mod cli;
pub mod config;
pub mod controller;
pub mod github;
pub mod history;
pub mod logging;
pub mod models;
pub mod tui;
pub mod utils;

// Re-export commonly used types
pub use controller::{Controller, ControllerError, ListKind, PageRequest};
pub use github::{GithubClient, RepositorySearch, SearchError};
pub use history::{HistoryError, HistoryEvent, HistoryStore};
pub use models::{HistoryRow, RepositoryRecord};
