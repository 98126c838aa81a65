use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// User actions from keyboard events
#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    Quit,
    Escape,
    // Topic input
    InputChar(char),
    DeleteChar,
    Submit,
    // Searching
    Search,
    Refresh,
    PreviousPage,
    NextPage,
    // Focused list
    MoveUp,
    MoveDown,
    ScrollTop,
    ScrollBottom,
    CycleFocus,
    Open,
    AddToHistory,
    DeleteSelected,
    ToggleTag(usize),
    // View
    ToggleHistory,
    ToggleIcons,
    ToggleTheme,
    None,
}

/// Poll for keyboard events and convert to actions
pub fn poll_event(timeout: Duration) -> anyhow::Result<Action> {
    if event::poll(timeout)?
        && let Event::Key(key) = event::read()?
        && key.kind == KeyEventKind::Press
    {
        return Ok(key_to_action(key));
    }
    Ok(Action::None)
}

fn key_to_action(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Esc, _) => Action::Escape,

        // Search and paging
        (KeyCode::Char('s'), KeyModifiers::CONTROL) => Action::Search,
        (KeyCode::Char('r'), KeyModifiers::CONTROL) => Action::Refresh,
        (KeyCode::Left, KeyModifiers::CONTROL) => Action::PreviousPage,
        (KeyCode::Right, KeyModifiers::CONTROL) => Action::NextPage,

        // Navigation (arrows or Emacs style)
        (KeyCode::Up, _) | (KeyCode::Char('p'), KeyModifiers::CONTROL) => Action::MoveUp,
        (KeyCode::Down, _) | (KeyCode::Char('n'), KeyModifiers::CONTROL) => Action::MoveDown,
        (KeyCode::Home, _) => Action::ScrollTop,
        (KeyCode::End, _) => Action::ScrollBottom,
        (KeyCode::Tab, _) => Action::CycleFocus,

        // Selection actions
        (KeyCode::Enter, _) => Action::Submit,
        (KeyCode::Char('o'), KeyModifiers::CONTROL) => Action::Open,
        (KeyCode::Char('a'), KeyModifiers::CONTROL) => Action::AddToHistory,
        (KeyCode::Delete, _) => Action::DeleteSelected,
        (KeyCode::Char(c @ '1'..='9'), KeyModifiers::ALT) => {
            Action::ToggleTag(c as usize - '1' as usize)
        }

        // View
        (KeyCode::Char('t'), KeyModifiers::CONTROL) => Action::ToggleHistory,
        (KeyCode::F(2), _) => Action::ToggleIcons,
        (KeyCode::F(3), _) => Action::ToggleTheme,

        // Topic input
        (KeyCode::Char(c), KeyModifiers::NONE) | (KeyCode::Char(c), KeyModifiers::SHIFT) => {
            Action::InputChar(c)
        }
        (KeyCode::Backspace, _) => Action::DeleteChar,

        _ => Action::None,
    }
}
