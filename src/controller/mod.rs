//! Search and selection state for one UI session.
//!
//! The [`Controller`] owns the topic list, the current page, the last result
//! page, the cached history view and a cursor for each of the three lists. It
//! is driven from a single thread; network fetches may run elsewhere by
//! splitting a search into [`Controller::begin_search`] and
//! [`Controller::finish_search`].
//!
//! # Overlapping searches
//!
//! Every search bumps a generation counter. Only the completion carrying the
//! newest generation is applied; older completions are dropped, so the last
//! request issued always wins.

pub mod error;
pub mod search;
pub mod selection;

use std::sync::Arc;
use std::sync::mpsc::Receiver;

pub use error::ControllerError;
pub use search::{PageRequest, SearchPhase, SearchTicket};
pub use selection::{Cursors, ListKind, ScrollRequest};
use tracing::{debug, info, warn};

use crate::browser::BrowserLauncher;
use crate::github::{RepositorySearch, SearchError};
use crate::history::{HistoryEvent, HistoryStore};
use crate::models::{HistoryRow, RepositoryRecord, same_topic};

pub struct Controller {
    client: Arc<dyn RepositorySearch>,
    history: HistoryStore,
    history_events: Receiver<HistoryEvent>,
    browser: Box<dyn BrowserLauncher>,

    input: String,
    topics: Vec<String>,
    page: u32,
    page_before_search: u32,
    results: Vec<RepositoryRecord>,
    history_rows: Vec<HistoryRow>,
    cursors: Cursors,
    phase: SearchPhase,
    generation: u64,
    nothing_to_search: bool,
    last_error: Option<String>,
    scroll_requests: Vec<ScrollRequest>,
}

impl Controller {
    pub fn new(
        client: Arc<dyn RepositorySearch>,
        mut history: HistoryStore,
        browser: Box<dyn BrowserLauncher>,
    ) -> Result<Self, ControllerError> {
        let history_events = history.subscribe();
        let history_rows = history.list_all()?;

        Ok(Self {
            client,
            history,
            history_events,
            browser,
            input: String::new(),
            topics: Vec::new(),
            page: 1,
            page_before_search: 1,
            results: Vec::new(),
            history_rows,
            cursors: Cursors::default(),
            phase: SearchPhase::Idle,
            generation: 0,
            nothing_to_search: false,
            last_error: None,
            scroll_requests: Vec::new(),
        })
    }

    // ---- read access -------------------------------------------------

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn topics(&self) -> &[String] {
        &self.topics
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn results(&self) -> &[RepositoryRecord] {
        &self.results
    }

    pub fn history(&self) -> &[HistoryRow] {
        &self.history_rows
    }

    pub fn cursor(&self, list: ListKind) -> Option<usize> {
        self.cursors.get(list)
    }

    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    /// Spinner flag
    pub fn is_searching(&self) -> bool {
        self.phase == SearchPhase::Searching
    }

    /// Raised when a search was requested with no topics
    pub fn nothing_to_search(&self) -> bool {
        self.nothing_to_search
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn selected_result(&self) -> Option<&RepositoryRecord> {
        self.cursors.results.and_then(|i| self.results.get(i))
    }

    pub fn selected_topic(&self) -> Option<&str> {
        self.cursors.topics.and_then(|i| self.topics.get(i)).map(String::as_str)
    }

    pub fn selected_history(&self) -> Option<&HistoryRow> {
        self.cursors.history.and_then(|i| self.history_rows.get(i))
    }

    /// Membership by url in the cached history view
    pub fn is_in_history(&self, url: &str) -> bool {
        self.history_rows.iter().any(|row| row.url() == url)
    }

    pub fn len(&self, list: ListKind) -> usize {
        match list {
            ListKind::Results => self.results.len(),
            ListKind::Topics => self.topics.len(),
            ListKind::History => self.history_rows.len(),
        }
    }

    /// Scroll requests queued since the last call
    pub fn take_scroll_requests(&mut self) -> Vec<ScrollRequest> {
        std::mem::take(&mut self.scroll_requests)
    }

    // ---- topic input and list ----------------------------------------

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn push_input(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn pop_input(&mut self) -> Option<char> {
        self.input.pop()
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    /// Append a topic unless it is blank or already listed (exact match)
    pub fn add_topic(&mut self, text: &str) -> bool {
        let topic = text.trim();
        if topic.is_empty() || self.topics.iter().any(|t| t == topic) {
            return false;
        }
        debug!(topic, "adding topic");
        self.topics.push(topic.to_string());
        true
    }

    /// Add the pending input as a topic; the input is cleared only when it was added
    pub fn add_topic_from_input(&mut self) -> bool {
        let text = std::mem::take(&mut self.input);
        if self.add_topic(&text) {
            true
        } else {
            self.input = text;
            false
        }
    }

    pub fn remove_topic(&mut self, text: &str) -> bool {
        let Some(pos) = self.topics.iter().position(|t| t == text) else {
            return false;
        };
        self.remove_topic_at(pos);
        true
    }

    /// Remove the topic if present (ignoring case), otherwise add it.
    /// Returns whether the topic is listed afterwards.
    pub fn toggle_topic(&mut self, text: &str) -> bool {
        let topic = text.trim();
        match self.topics.iter().position(|t| same_topic(t, topic)) {
            Some(pos) => {
                self.remove_topic_at(pos);
                false
            }
            None => self.add_topic(topic),
        }
    }

    /// Toggle the `n`-th tag (0-based) of the selected result
    pub fn toggle_selected_result_tag(&mut self, n: usize) -> Option<bool> {
        let tag = self.selected_result()?.topic_tags.get(n)?.clone();
        Some(self.toggle_topic(&tag))
    }

    /// Remove the topic under the topic cursor
    pub fn delete_selected_topic(&mut self) -> Option<String> {
        let index = self.cursors.topics.filter(|&i| i < self.topics.len())?;
        Some(self.remove_topic_at(index))
    }

    fn remove_topic_at(&mut self, index: usize) -> String {
        let removed = self.topics.remove(index);
        debug!(topic = %removed, "removed topic");
        self.cursors.topics = selection::clamp_index(self.cursors.topics, self.topics.len());
        removed
    }

    // ---- searching ---------------------------------------------------

    /// Start a search. Returns `None` without fetching when there are no
    /// topics (the alert flag is raised) or when asking for the page before 1.
    pub fn begin_search(&mut self, request: PageRequest) -> Option<SearchTicket> {
        if self.topics.is_empty() {
            info!("search requested with no topics");
            self.nothing_to_search = true;
            return None;
        }

        let page = match request {
            PageRequest::Page(n) => n.max(1),
            PageRequest::Current => self.page,
            PageRequest::Next => self.page.saturating_add(1),
            PageRequest::Previous if self.page <= 1 => return None,
            PageRequest::Previous => self.page - 1,
        };

        if self.phase == SearchPhase::Idle {
            self.page_before_search = self.page;
        }
        self.page = page;
        self.cursors.results = None;
        self.phase = SearchPhase::Searching;
        self.last_error = None;
        self.generation += 1;

        debug!(generation = self.generation, page, topics = ?self.topics, "search started");
        Some(SearchTicket { generation: self.generation, topics: self.topics.clone(), page })
    }

    /// Apply the outcome of a fetch started by [`begin_search`](Self::begin_search).
    ///
    /// Completions of superseded searches are ignored. On failure the spinner
    /// is cleared, the previous results and page are kept, and the error is
    /// both recorded in [`last_error`](Self::last_error) and returned.
    pub fn finish_search(
        &mut self,
        generation: u64,
        outcome: Result<Vec<RepositoryRecord>, SearchError>,
    ) -> Result<(), ControllerError> {
        if generation != self.generation {
            debug!(generation, current = self.generation, "dropping stale search result");
            return Ok(());
        }

        self.phase = SearchPhase::Idle;
        match outcome {
            Ok(records) => {
                info!(page = self.page, count = records.len(), "search finished");
                self.results = records;
                self.request_scroll(ListKind::Results, 0, false);
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, page = self.page, "search failed");
                self.page = self.page_before_search;
                self.last_error = Some(err.to_string());
                Err(err.into())
            }
        }
    }

    /// Fetch `to_page` on the calling thread
    pub fn search(&mut self, to_page: u32) -> Result<(), ControllerError> {
        self.run_search(PageRequest::Page(to_page))
    }

    pub fn refresh(&mut self) -> Result<(), ControllerError> {
        self.run_search(PageRequest::Current)
    }

    pub fn next_page(&mut self) -> Result<(), ControllerError> {
        self.run_search(PageRequest::Next)
    }

    pub fn previous_page(&mut self) -> Result<(), ControllerError> {
        self.run_search(PageRequest::Previous)
    }

    fn run_search(&mut self, request: PageRequest) -> Result<(), ControllerError> {
        let Some(ticket) = self.begin_search(request) else {
            return Ok(());
        };
        let outcome = self.client.fetch_page(&ticket.topics, ticket.page);
        self.finish_search(ticket.generation, outcome)
    }

    /// Handle for running fetches off the controller's thread
    pub fn search_client(&self) -> Arc<dyn RepositorySearch> {
        Arc::clone(&self.client)
    }

    pub fn dismiss_alert(&mut self) {
        self.nothing_to_search = false;
    }

    pub fn clear_error(&mut self) {
        self.last_error = None;
    }

    // ---- cursors -----------------------------------------------------

    pub fn select_next(&mut self, list: ListKind) {
        let current = self.cursors.get(list);
        let next = selection::next_index(current, self.len(list));
        if next != current {
            *self.cursors.get_mut(list) = next;
            if let Some(index) = next {
                self.request_scroll(list, index, true);
            }
        }
    }

    pub fn select_previous(&mut self, list: ListKind) {
        let current = self.cursors.get(list);
        let previous = selection::previous_index(current, self.len(list));
        if previous != current {
            *self.cursors.get_mut(list) = previous;
            self.request_scroll(list, previous.unwrap_or(0), true);
        }
    }

    pub fn scroll_to_top(&mut self, list: ListKind) {
        if self.len(list) == 0 {
            return;
        }
        *self.cursors.get_mut(list) = Some(0);
        self.request_scroll(list, 0, true);
    }

    pub fn scroll_to_bottom(&mut self, list: ListKind) {
        let Some(last) = self.len(list).checked_sub(1) else {
            return;
        };
        *self.cursors.get_mut(list) = Some(last);
        self.request_scroll(list, last, true);
    }

    fn request_scroll(&mut self, list: ListKind, index: usize, animated: bool) {
        self.scroll_requests.push(ScrollRequest { list, index, animated });
    }

    // ---- opening and history -----------------------------------------

    /// Open the selected result in the browser and record it in history.
    /// Returns the opened url, or `None` when nothing is selected.
    pub fn open_selected_result(&mut self) -> Result<Option<String>, ControllerError> {
        let Some(record) = self.selected_result().cloned() else {
            return Ok(None);
        };
        self.browser.open_url(&record.url)?;
        self.history.upsert(&record)?;
        self.sync_history()?;
        Ok(Some(record.url))
    }

    pub fn open_selected_history(&mut self) -> Result<Option<String>, ControllerError> {
        let Some(url) = self.selected_history().map(|row| row.url().to_string()) else {
            return Ok(None);
        };
        self.browser.open_url(&url)?;
        Ok(Some(url))
    }

    /// Returns `Some(true)` when a new row was stored
    pub fn add_selected_result_to_history(&mut self) -> Result<Option<bool>, ControllerError> {
        let Some(record) = self.selected_result().cloned() else {
            return Ok(None);
        };
        let inserted = self.history.upsert(&record)?;
        self.sync_history()?;
        Ok(Some(inserted))
    }

    /// Remove the history row under the cursor; returns its url
    pub fn remove_selected_from_history(&mut self) -> Result<Option<String>, ControllerError> {
        let Some(url) = self.selected_history().map(|row| row.url().to_string()) else {
            return Ok(None);
        };
        self.history.remove(&url)?;
        self.sync_history()?;
        Ok(Some(url))
    }

    /// Drain store notifications and reload the cached view if the table changed
    pub fn sync_history(&mut self) -> Result<bool, ControllerError> {
        let changed = self.history_events.try_iter().fold(false, |acc, ev| acc | ev.changed());
        if changed {
            self.history_rows = self.history.list_all()?;
            self.cursors.history =
                selection::clamp_index(self.cursors.history, self.history_rows.len());
            debug!(rows = self.history_rows.len(), "history view refreshed");
        }
        Ok(changed)
    }
}
