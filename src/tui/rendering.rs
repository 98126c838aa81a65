use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};

use super::app::{MessageType, StatusMessage};
use super::layout::{AppLayout, centered_rect};
use super::theme::Palette;
use super::timestamps::format_timestamp;
use crate::config::ViewConfig;
use crate::controller::{Controller, ListKind};
use crate::models::{RepositoryRecord, same_topic};
use crate::utils::{sanitize_line, truncate_chars};

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const DESCRIPTION_MAX_CHARS: usize = 160;
/// Tags shown on a card; Alt+1..9 reach the first nine
const MAX_CARD_TAGS: usize = 9;

/// Scroll state of each list widget, kept between frames
#[derive(Debug, Default)]
pub struct ListStates {
    pub results: ListState,
    pub topics: ListState,
    pub history: ListState,
}

impl ListStates {
    pub fn get_mut(&mut self, list: ListKind) -> &mut ListState {
        match list {
            ListKind::Results => &mut self.results,
            ListKind::Topics => &mut self.topics,
            ListKind::History => &mut self.history,
        }
    }
}

/// Everything a frame needs besides the scroll state
pub struct RenderState<'a> {
    pub controller: &'a Controller,
    pub focus: ListKind,
    pub show_history: bool,
    pub view: ViewConfig,
    pub status_message: Option<&'a StatusMessage>,
    pub spinner_frame: usize,
}

/// Render the entire UI
pub fn render_ui(frame: &mut Frame, state: &RenderState<'_>, lists: &mut ListStates) {
    let palette = Palette::for_view(&state.view);
    let layout = AppLayout::new(frame.area(), state.show_history);

    render_input(frame, layout.input_area, state.controller.input(), &palette);
    render_topics(frame, layout.topics_area, state, &palette, &mut lists.topics);
    render_results(frame, layout.results_area, state, &palette, &mut lists.results);
    if let Some(area) = layout.history_area {
        render_history(frame, area, state, &palette, &mut lists.history);
    }
    render_status_bar(frame, layout.status_area, state, &palette);

    if state.controller.nothing_to_search() {
        render_alert(frame, &palette);
    }
}

fn pane_block(title: &str, focused: bool, palette: &Palette) -> Block<'static> {
    let border = if focused { palette.accent } else { palette.muted };
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(format!(" {} ", title))
}

fn highlight_style(palette: &Palette) -> Style {
    Style::default().fg(palette.on_accent).bg(palette.accent).add_modifier(Modifier::BOLD)
}

fn render_input(frame: &mut Frame, area: Rect, input: &str, palette: &Palette) {
    let line = if input.is_empty() {
        Line::from(Span::styled("Press Enter to add topic", Style::default().fg(palette.muted)))
    } else {
        Line::from(vec![
            Span::styled(input.to_string(), Style::default().fg(palette.text)),
            Span::styled("█", Style::default().fg(palette.accent)),
        ])
    };

    let paragraph = Paragraph::new(line).block(pane_block("Topic", false, palette));
    frame.render_widget(paragraph, area);
}

fn render_topics(
    frame: &mut Frame,
    area: Rect,
    state: &RenderState<'_>,
    palette: &Palette,
    list_state: &mut ListState,
) {
    let topics = state.controller.topics();
    let items: Vec<ListItem> = topics
        .iter()
        .map(|t| {
            let prefix = if state.view.show_icons { "# " } else { "" };
            ListItem::new(format!("{}{}", prefix, sanitize_line(t)))
                .style(Style::default().fg(palette.tag))
        })
        .collect();

    let title = format!("{} ({})", ListKind::Topics.title(), topics.len());
    let list = List::new(items)
        .block(pane_block(&title, state.focus == ListKind::Topics, palette))
        .highlight_style(highlight_style(palette));

    frame.render_stateful_widget(list, area, list_state);
}

fn render_results(
    frame: &mut Frame,
    area: Rect,
    state: &RenderState<'_>,
    palette: &Palette,
    list_state: &mut ListState,
) {
    let controller = state.controller;
    let block = pane_block(
        &format!("{} · page {}", ListKind::Results.title(), controller.page()),
        state.focus == ListKind::Results,
        palette,
    );

    if controller.results().is_empty() {
        let hint = if controller.is_searching() {
            "Searching…"
        } else if controller.topics().is_empty() {
            "Add a topic, then press Ctrl+S to search"
        } else {
            "No repositories on this page"
        };
        let paragraph = Paragraph::new(Span::styled(hint, Style::default().fg(palette.muted)))
            .block(block)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
        return;
    }

    let width = area.width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = controller
        .results()
        .iter()
        .map(|record| {
            let saved = controller.is_in_history(&record.url);
            ListItem::new(result_card(record, controller.topics(), saved, state.view, palette, width))
        })
        .collect();

    let list = List::new(items).block(block).highlight_style(highlight_style(palette));
    frame.render_stateful_widget(list, area, list_state);
}

/// Three-line card: header, description, tag chips
fn result_card(
    record: &RepositoryRecord,
    selected_topics: &[String],
    saved: bool,
    view: ViewConfig,
    palette: &Palette,
    width: usize,
) -> Text<'static> {
    let muted = Style::default().fg(palette.muted);

    let mut header = Vec::new();
    if view.show_icons {
        header.push(Span::raw(if saved { "★ " } else { "☆ " }));
    }
    header.push(Span::styled(
        sanitize_line(&record.full_name),
        Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
    ));
    header.push(Span::styled(
        format!(
            "  {} stars  {} watchers  {}  updated {}",
            record.star_count,
            record.watcher_count,
            record.primary_language.as_deref().map(sanitize_line).unwrap_or_else(|| "-".into()),
            format_timestamp(&record.updated_at),
        ),
        muted,
    ));

    let description = truncate_chars(
        &sanitize_line(&record.description),
        DESCRIPTION_MAX_CHARS.min(width.max(1)),
    );

    let mut chips = Vec::new();
    for (i, tag) in record.topic_tags.iter().take(MAX_CARD_TAGS).enumerate() {
        let active = selected_topics.iter().any(|t| same_topic(t, tag));
        let style = if active {
            Style::default().fg(palette.on_accent).bg(palette.tag)
        } else {
            Style::default().fg(palette.tag)
        };
        chips.push(Span::styled(format!("{}:{}", i + 1, sanitize_line(tag)), style));
        chips.push(Span::raw(" "));
    }
    if record.topic_tags.len() > MAX_CARD_TAGS {
        chips.push(Span::styled(format!("+{}", record.topic_tags.len() - MAX_CARD_TAGS), muted));
    }

    Text::from(vec![
        Line::from(header),
        Line::from(Span::styled(format!("  {}", description), Style::default().fg(palette.text))),
        Line::from(chips),
    ])
}

fn render_history(
    frame: &mut Frame,
    area: Rect,
    state: &RenderState<'_>,
    palette: &Palette,
    list_state: &mut ListState,
) {
    let rows = state.controller.history();
    let width = area.width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = rows
        .iter()
        .map(|row| {
            let record = &row.record;
            ListItem::new(Text::from(vec![
                Line::from(Span::styled(
                    truncate_chars(&sanitize_line(&record.full_name), width.max(1)),
                    Style::default().fg(palette.text),
                )),
                Line::from(Span::styled(
                    format!("  {} stars", record.star_count),
                    Style::default().fg(palette.muted),
                )),
            ]))
        })
        .collect();

    let title = format!("{} ({})", ListKind::History.title(), rows.len());
    let list = List::new(items)
        .block(pane_block(&title, state.focus == ListKind::History, palette))
        .highlight_style(highlight_style(palette));

    frame.render_stateful_widget(list, area, list_state);
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &RenderState<'_>, palette: &Palette) {
    let controller = state.controller;
    let base = Style::default().fg(palette.text).bg(palette.bar_bg);

    let mut parts = Vec::new();
    if controller.is_searching() {
        let frame_char = SPINNER[state.spinner_frame % SPINNER.len()];
        parts.push(format!("{} Searching…", frame_char));
    }
    parts.push(format!("page {}", controller.page()));
    parts.push(format!("{} results", controller.results().len()));
    if let Some(index) = controller.cursor(state.focus) {
        parts.push(format!(
            "{} {}/{}",
            state.focus.title().to_lowercase(),
            index + 1,
            controller.len(state.focus)
        ));
    }

    let (text, style) = if let Some(msg) = state.status_message {
        let color = match msg.message_type {
            MessageType::Success => palette.success,
            MessageType::Error => palette.error,
        };
        parts.push(sanitize_line(&msg.text));
        (format!(" {} ", parts.join(" | ")), base.fg(color))
    } else if let Some(error) = controller.last_error() {
        parts.push(format!("[ERROR] {}", sanitize_line(error)));
        (format!(" {} ", parts.join(" | ")), base.fg(palette.error))
    } else {
        parts.push("Ctrl+S: search".to_string());
        parts.push("Ctrl+←/→: page".to_string());
        parts.push("Tab: focus".to_string());
        parts.push("Ctrl+O: open".to_string());
        parts.push("Ctrl+T: history".to_string());
        parts.push("Ctrl+C: quit".to_string());
        (format!(" {} ", parts.join(" | ")), base)
    };

    frame.render_widget(Paragraph::new(text).style(style), area);
}

fn render_alert(frame: &mut Frame, palette: &Palette) {
    let area = centered_rect(frame.area(), 44, 5);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.error))
        .title(" Enter topics to search ");
    let paragraph = Paragraph::new(vec![
        Line::from(Span::styled(
            "Please enter topics to search",
            Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled("Press any key to continue", Style::default().fg(palette.muted))),
    ])
    .block(block)
    .wrap(Wrap { trim: true });

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}
