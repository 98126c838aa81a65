use std::fs;
use std::path::Path;
use std::sync::mpsc::{self, Receiver, Sender};

use rusqlite::{Connection, OptionalExtension, Row, TransactionBehavior, params};
use tracing::{debug, info};

use super::error::HistoryError;
use super::events::HistoryEvent;
use super::tags::{join_tags, split_tags};
use crate::models::{HistoryRow, RepositoryRecord};

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS topic (
  id          INTEGER PRIMARY KEY AUTOINCREMENT,
  name        TEXT NOT NULL,
  full_name   TEXT NOT NULL,
  description TEXT NOT NULL,
  image       TEXT,
  link        TEXT NOT NULL UNIQUE,
  stars       INTEGER NOT NULL,
  watchers    INTEGER NOT NULL,
  updated_at  TEXT NOT NULL,
  pushed_at   TEXT NOT NULL,
  created_at  TEXT NOT NULL,
  topics      TEXT,
  language    TEXT
);
"#;

const SELECT_COLUMNS: &str = "id, name, full_name, description, image, link, stars, watchers, \
                              updated_at, pushed_at, created_at, topics, language";

/// SQLite-backed history table
pub struct HistoryStore {
    conn: Connection,
    subscribers: Vec<Sender<HistoryEvent>>,
}

impl HistoryStore {
    /// Open (creating if needed) the database file and its schema
    pub fn open(path: &Path) -> Result<Self, HistoryError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent).map_err(|source| HistoryError::Directory {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let conn = Connection::open(path)?;
        debug!(path = %path.display(), "opened history database");
        Self::with_connection(conn)
    }

    /// Private in-memory database (tests, `--db :memory:`)
    pub fn open_in_memory() -> Result<Self, HistoryError> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self, HistoryError> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn, subscribers: Vec::new() })
    }

    /// Receive a [`HistoryEvent`] after every committed write
    pub fn subscribe(&mut self) -> Receiver<HistoryEvent> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    /// All rows, oldest insertion first
    pub fn list_all(&self) -> Result<Vec<HistoryRow>, HistoryError> {
        let mut stmt =
            self.conn.prepare(&format!("SELECT {} FROM topic ORDER BY id ASC", SELECT_COLUMNS))?;
        let rows = stmt.query_map([], row_to_history)?.collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    pub fn get(&self, url: &str) -> Result<Option<HistoryRow>, HistoryError> {
        let row = self
            .conn
            .query_row(
                &format!("SELECT {} FROM topic WHERE link = ?1", SELECT_COLUMNS),
                params![url],
                row_to_history,
            )
            .optional()?;
        Ok(row)
    }

    pub fn contains(&self, url: &str) -> Result<bool, HistoryError> {
        Ok(self.get(url)?.is_some())
    }

    pub fn len(&self) -> Result<usize, HistoryError> {
        let count: i64 = self.conn.query_row("SELECT COUNT(*) FROM topic", [], |r| r.get(0))?;
        Ok(count as usize)
    }

    pub fn is_empty(&self) -> Result<bool, HistoryError> {
        Ok(self.len()? == 0)
    }

    /// Insert the record unless its url is already stored; returns whether a row was added
    pub fn upsert(&mut self, record: &RepositoryRecord) -> Result<bool, HistoryError> {
        let tx = self.conn.transaction_with_behavior(TransactionBehavior::Exclusive)?;
        let inserted = tx.execute(
            "INSERT OR IGNORE INTO topic \
             (name, full_name, description, image, link, stars, watchers, \
              updated_at, pushed_at, created_at, topics, language) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
            params![
                record.name,
                record.full_name,
                record.description,
                record.avatar_url,
                record.url,
                record.star_count,
                record.watcher_count,
                record.updated_at,
                record.pushed_at,
                record.created_at,
                join_tags(&record.topic_tags),
                record.primary_language,
            ],
        )? > 0;
        tx.commit()?;

        if inserted {
            info!(url = %record.url, "added repository to history");
        }
        self.notify(HistoryEvent::Added { url: record.url.clone(), inserted });
        Ok(inserted)
    }

    /// Delete the row for `url`; an absent url is not an error
    pub fn remove(&mut self, url: &str) -> Result<bool, HistoryError> {
        let tx = self.conn.transaction_with_behavior(TransactionBehavior::Exclusive)?;
        let deleted = tx.execute("DELETE FROM topic WHERE link = ?1", params![url])? > 0;
        tx.commit()?;

        if deleted {
            info!(url, "removed repository from history");
        }
        self.notify(HistoryEvent::Removed { url: url.to_string(), deleted });
        Ok(deleted)
    }

    fn notify(&mut self, event: HistoryEvent) {
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }
}

fn row_to_history(row: &Row<'_>) -> rusqlite::Result<HistoryRow> {
    let topics: Option<String> = row.get(11)?;
    Ok(HistoryRow {
        id: row.get(0)?,
        record: RepositoryRecord {
            name: row.get(1)?,
            full_name: row.get(2)?,
            description: row.get(3)?,
            avatar_url: row.get(4)?,
            url: row.get(5)?,
            star_count: row.get(6)?,
            watcher_count: row.get(7)?,
            updated_at: row.get(8)?,
            pushed_at: row.get(9)?,
            created_at: row.get(10)?,
            topic_tags: split_tags(topics.as_deref()),
            primary_language: row.get(12)?,
        },
    })
}
