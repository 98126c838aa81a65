use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Pane layout:
/// - Left column: topic input above the pending topic list
/// - Centre: result cards
/// - Right: history drawer, when open
/// - Bottom row: status bar
pub struct AppLayout {
    pub input_area: Rect,
    pub topics_area: Rect,
    pub results_area: Rect,
    pub history_area: Option<Rect>,
    pub status_area: Rect,
}

impl AppLayout {
    pub fn new(area: Rect, show_history: bool) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(1)])
            .split(area);

        let columns: Vec<Rect> = if show_history {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Percentage(22),
                    Constraint::Percentage(50),
                    Constraint::Percentage(28),
                ])
                .split(rows[0])
                .to_vec()
        } else {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(25), Constraint::Percentage(75)])
                .split(rows[0])
                .to_vec()
        };

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(columns[0]);

        Self {
            input_area: left[0],
            topics_area: left[1],
            results_area: columns[1],
            history_area: columns.get(2).copied(),
            status_area: rows[1],
        }
    }
}

/// Centered box of at most `width` x `height` cells inside `area`
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_without_history() {
        let layout = AppLayout::new(Rect::new(0, 0, 100, 30), false);

        assert_eq!(layout.status_area.height, 1);
        assert_eq!(layout.status_area.y, 29);
        assert_eq!(layout.input_area.height, 3);
        assert_eq!(layout.topics_area.height, 26);
        assert_eq!(layout.input_area.width, 25);
        assert_eq!(layout.results_area.width, 75);
        assert!(layout.history_area.is_none());
    }

    #[test]
    fn test_layout_with_history() {
        let layout = AppLayout::new(Rect::new(0, 0, 100, 30), true);

        assert_eq!(layout.input_area.width, 22);
        assert_eq!(layout.results_area.width, 50);
        let history = layout.history_area.unwrap();
        assert_eq!(history.width, 28);
        assert_eq!(history.height, 29);
    }

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 30);
        let popup = centered_rect(area, 40, 6);
        assert_eq!(popup, Rect::new(30, 12, 40, 6));

        // larger than the screen: clamped
        let tiny = Rect::new(0, 0, 20, 4);
        assert_eq!(centered_rect(tiny, 40, 6), tiny);
    }
}
