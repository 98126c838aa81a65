//! TUI application state and event handling.
//!
//! The `App` wraps a [`Controller`] and adds what only the terminal needs:
//!
//! - **Focus**: which of the three lists the arrow keys drive
//! - **Background search**: each fetch runs on a worker thread and its result
//!   comes back over a channel, so the UI keeps drawing the spinner
//! - **Status messages**: transient feedback for history writes and errors
//! - **Dirty state tracking**: redraw only when something changed
//!
//! # Example
//!
//! ```rust,ignore
//! let mut app = App::new(controller, ViewConfig::default());
//! app.run(&mut terminal)?;
//! ```

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::Terminal;
use ratatui::backend::Backend;
use tracing::{error, warn};

use super::events::{Action, poll_event};
use super::rendering::{ListStates, RenderState, render_ui};
use crate::config::ViewConfig;
use crate::controller::{Controller, ControllerError, ListKind, PageRequest};
use crate::github::SearchError;
use crate::models::RepositoryRecord;

/// Duration for success status messages (milliseconds)
const STATUS_SUCCESS_DURATION_MS: u64 = 3000;
/// Duration for error status messages (milliseconds)
const STATUS_ERROR_DURATION_MS: u64 = 6000;
/// Longest topic accepted in the input box
const MAX_INPUT_CHARS: usize = 100;

/// Type of status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Success,
    Error,
}

/// Transient status message with expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub message_type: MessageType,
    pub expires_at: Instant,
}

/// Result of one background fetch
struct SearchCompletion {
    generation: u64,
    outcome: Result<Vec<RepositoryRecord>, SearchError>,
}

pub struct App {
    controller: Controller,
    view: ViewConfig,
    focus: ListKind,
    show_history: bool,
    list_states: ListStates,
    should_quit: bool,
    status_message: Option<StatusMessage>,
    completions_tx: Sender<SearchCompletion>,
    completions_rx: Receiver<SearchCompletion>,
    spinner_frame: usize,
    // Dirty state tracking for efficient rendering
    needs_redraw: bool,
    last_draw_time: Instant,
}

impl App {
    pub fn new(controller: Controller, view: ViewConfig) -> Self {
        let (completions_tx, completions_rx) = mpsc::channel();
        Self {
            controller,
            view,
            focus: ListKind::Results,
            show_history: true,
            list_states: ListStates::default(),
            should_quit: false,
            status_message: None,
            completions_tx,
            completions_rx,
            spinner_frame: 0,
            needs_redraw: true,
            last_draw_time: Instant::now(),
        }
    }

    /// Set a transient status message with automatic expiry
    fn set_status(&mut self, text: impl Into<String>, message_type: MessageType, duration_ms: u64) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            message_type,
            expires_at: Instant::now() + Duration::from_millis(duration_ms),
        });
        self.needs_redraw = true;
    }

    fn set_error(&mut self, err: &ControllerError) {
        self.set_status(format!("✗ {}", err), MessageType::Error, STATUS_ERROR_DURATION_MS);
    }

    fn check_and_clear_expired_status(&mut self) {
        let expired =
            self.status_message.as_ref().is_some_and(|msg| Instant::now() >= msg.expires_at);
        if expired {
            self.status_message = None;
            self.needs_redraw = true;
        }
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.should_quit {
            self.check_and_clear_expired_status();
            self.poll_search_completions();
            self.apply_scroll_requests();

            let now = Instant::now();
            let elapsed = now.duration_since(self.last_draw_time);
            let animating = self.controller.is_searching();
            if self.needs_redraw
                || (animating && elapsed >= Duration::from_millis(80))
                || elapsed >= Duration::from_millis(250)
            {
                if animating {
                    self.spinner_frame = self.spinner_frame.wrapping_add(1);
                }
                terminal.draw(|f| {
                    let state = RenderState {
                        controller: &self.controller,
                        focus: self.focus,
                        show_history: self.show_history,
                        view: self.view,
                        status_message: self.status_message.as_ref(),
                        spinner_frame: self.spinner_frame,
                    };
                    render_ui(f, &state, &mut self.list_states);
                })?;
                self.needs_redraw = false;
                self.last_draw_time = now;
            }

            let action = poll_event(Duration::from_millis(50))?;
            self.handle_action(action);
        }

        Ok(())
    }

    /// Handle a user action (extracted for testing)
    fn handle_action(&mut self, action: Action) {
        if action == Action::None {
            return;
        }
        self.needs_redraw = true;

        // The alert is modal: any key closes it
        if self.controller.nothing_to_search() {
            match action {
                Action::Quit => self.should_quit = true,
                _ => self.controller.dismiss_alert(),
            }
            return;
        }

        match action {
            Action::Quit => self.should_quit = true,
            Action::Escape => {
                if !self.controller.input().is_empty() {
                    self.controller.clear_input();
                } else if self.controller.last_error().is_some() {
                    self.controller.clear_error();
                } else {
                    self.should_quit = true;
                }
            }
            Action::InputChar(c) => {
                if self.controller.input().chars().count() < MAX_INPUT_CHARS {
                    self.controller.push_input(c);
                }
            }
            Action::DeleteChar => {
                self.controller.pop_input();
            }
            Action::Submit => {
                if self.controller.input().trim().is_empty() {
                    self.open_focused();
                } else if !self.controller.add_topic_from_input() {
                    self.set_status(
                        "✗ Topic already listed",
                        MessageType::Error,
                        STATUS_ERROR_DURATION_MS,
                    );
                }
            }
            Action::Search => self.start_search(PageRequest::Page(1)),
            Action::Refresh => self.start_search(PageRequest::Current),
            Action::PreviousPage => self.start_search(PageRequest::Previous),
            Action::NextPage => self.start_search(PageRequest::Next),
            Action::MoveUp => self.controller.select_previous(self.focus),
            Action::MoveDown => self.controller.select_next(self.focus),
            Action::ScrollTop => self.controller.scroll_to_top(self.focus),
            Action::ScrollBottom => self.controller.scroll_to_bottom(self.focus),
            Action::CycleFocus => {
                self.focus = self.focus.next();
                if self.focus == ListKind::History && !self.show_history {
                    self.focus = self.focus.next();
                }
            }
            Action::Open => self.open_focused(),
            Action::AddToHistory => match self.controller.add_selected_result_to_history() {
                Ok(Some(true)) => self.set_status(
                    "✓ Added to history",
                    MessageType::Success,
                    STATUS_SUCCESS_DURATION_MS,
                ),
                Ok(Some(false)) => self.set_status(
                    "Already in history",
                    MessageType::Success,
                    STATUS_SUCCESS_DURATION_MS,
                ),
                Ok(None) => {}
                Err(e) => self.set_error(&e),
            },
            Action::DeleteSelected => self.delete_focused(),
            Action::ToggleTag(n) => {
                let tag = self
                    .controller
                    .selected_result()
                    .and_then(|r| r.topic_tags.get(n))
                    .cloned();
                if let (Some(tag), Some(added)) =
                    (tag, self.controller.toggle_selected_result_tag(n))
                {
                    let verb = if added { "Added" } else { "Removed" };
                    self.set_status(
                        format!("{} topic '{}'", verb, tag),
                        MessageType::Success,
                        STATUS_SUCCESS_DURATION_MS,
                    );
                }
            }
            Action::ToggleHistory => {
                self.show_history = !self.show_history;
                if !self.show_history && self.focus == ListKind::History {
                    self.focus = ListKind::Results;
                }
            }
            Action::ToggleIcons => self.view.toggle_icons(),
            Action::ToggleTheme => self.view.toggle_theme(),
            Action::None => {}
        }
    }

    fn open_focused(&mut self) {
        let opened = match self.focus {
            ListKind::Results => self.controller.open_selected_result(),
            ListKind::History => self.controller.open_selected_history(),
            ListKind::Topics => return,
        };
        match opened {
            Ok(Some(url)) => self.set_status(
                format!("✓ Opened {}", url),
                MessageType::Success,
                STATUS_SUCCESS_DURATION_MS,
            ),
            Ok(None) => {}
            Err(e) => self.set_error(&e),
        }
    }

    fn delete_focused(&mut self) {
        match self.focus {
            ListKind::Topics => {
                self.controller.delete_selected_topic();
            }
            ListKind::History => match self.controller.remove_selected_from_history() {
                Ok(Some(_)) => self.set_status(
                    "✓ Removed from history",
                    MessageType::Success,
                    STATUS_SUCCESS_DURATION_MS,
                ),
                Ok(None) => {}
                Err(e) => self.set_error(&e),
            },
            ListKind::Results => {}
        }
    }

    /// Begin a search and hand the fetch to a worker thread
    fn start_search(&mut self, request: PageRequest) {
        let Some(ticket) = self.controller.begin_search(request) else {
            return;
        };

        let generation = ticket.generation;
        let client = self.controller.search_client();
        let tx = self.completions_tx.clone();
        let spawned = thread::Builder::new().name("search-worker".to_string()).spawn(move || {
            let outcome = client.fetch_page(&ticket.topics, ticket.page);
            // The receiver only disappears when the app is shutting down
            let _ = tx.send(SearchCompletion { generation: ticket.generation, outcome });
        });

        if let Err(e) = spawned {
            error!(error = %e, "could not start search worker");
            let outcome = Err(SearchError::Network(format!("could not start search: {}", e)));
            if let Err(err) = self.controller.finish_search(generation, outcome) {
                self.set_error(&err);
            }
        }
    }

    fn poll_search_completions(&mut self) {
        while let Ok(done) = self.completions_rx.try_recv() {
            if let Err(e) = self.controller.finish_search(done.generation, done.outcome) {
                warn!(error = %e, "search failed");
                self.set_error(&e);
            }
            self.needs_redraw = true;
        }
    }

    fn apply_scroll_requests(&mut self) {
        for request in self.controller.take_scroll_requests() {
            let cursor = self.controller.cursor(request.list);
            let state = self.list_states.get_mut(request.list);
            state.select(cursor);
            if cursor.is_none() {
                *state.offset_mut() = request.index;
            }
            self.needs_redraw = true;
        }
        // Cursors also move without scroll requests (deletes, history refresh)
        for list in [ListKind::Results, ListKind::Topics, ListKind::History] {
            let cursor = self.controller.cursor(list);
            let state = self.list_states.get_mut(list);
            if state.selected() != cursor {
                state.select(cursor);
                self.needs_redraw = true;
            }
        }
    }
}
