use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Input action that can be performed
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    /// Wheel-equivalent notches (positive = down)
    Scroll(f64),
    PageDown,
    PageUp,
    /// Commanded scroll to the section after the active one
    NextSection,
    /// Commanded scroll to the n-th registered section
    GoToSection(usize),
    /// The "Connect" affordance
    Connect,
    JumpToTop,
    JumpToBottom,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Esc, _) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

        // Native scrolling
        (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Down, _) => Action::Scroll(1.0),
        (KeyCode::Char('k'), KeyModifiers::NONE) | (KeyCode::Up, _) => Action::Scroll(-1.0),
        (KeyCode::Char('d'), KeyModifiers::CONTROL)
        | (KeyCode::PageDown, _)
        | (KeyCode::Char(' '), KeyModifiers::NONE) => Action::PageDown,
        (KeyCode::Char('u'), KeyModifiers::CONTROL) | (KeyCode::PageUp, _) => Action::PageUp,

        // Commanded scrolling
        (KeyCode::Char('n'), KeyModifiers::NONE) | (KeyCode::Tab, _) => Action::NextSection,
        (KeyCode::Char('c'), KeyModifiers::NONE) | (KeyCode::Enter, _) => Action::Connect,
        (KeyCode::Char(digit @ '1'..='9'), KeyModifiers::NONE) => {
            Action::GoToSection(digit as usize - '1' as usize)
        }
        (KeyCode::Char('g'), KeyModifiers::NONE) | (KeyCode::Home, _) => Action::JumpToTop,
        (KeyCode::Char('G'), _) | (KeyCode::End, _) => Action::JumpToBottom,

        _ => Action::None,
    }
}
