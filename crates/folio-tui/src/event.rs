use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind, MouseEvent, MouseEventKind};

/// Event handler for terminal events
pub struct EventHandler {
    tick_rate: Duration,
    /// Poll interval while something is animating
    animation_rate: Duration,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64) -> Self {
        Self::with_animation_fps(tick_rate_ms, 60)
    }

    pub fn with_animation_fps(tick_rate_ms: u64, fps: u32) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
            animation_rate: Duration::from_millis(1000 / u64::from(fps.max(1))),
        }
    }

    pub fn animation_rate(&self) -> Duration {
        self.animation_rate
    }

    /// Poll for the next event at the idle tick rate
    pub fn next(&self) -> Result<Option<AppEvent>> {
        self.poll(self.tick_rate)
    }

    /// Poll for the next event at animation frame rate
    pub fn next_animation(&self) -> Result<Option<AppEvent>> {
        self.poll(self.animation_rate)
    }

    fn poll(&self, timeout: Duration) -> Result<Option<AppEvent>> {
        if event::poll(timeout)? {
            Ok(translate(event::read()?))
        } else {
            Ok(Some(AppEvent::Tick))
        }
    }
}

fn translate(event: Event) -> Option<AppEvent> {
    match event {
        Event::Key(key) => {
            // Only handle key press events, ignore release events
            // (crossterm 0.27+ sends release events on some systems)
            (key.kind == KeyEventKind::Press).then_some(AppEvent::Key(key))
        }
        Event::Mouse(mouse) => translate_mouse(mouse),
        Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
        _ => None,
    }
}

fn translate_mouse(mouse: MouseEvent) -> Option<AppEvent> {
    match mouse.kind {
        MouseEventKind::ScrollDown => Some(AppEvent::Wheel(1.0)),
        MouseEventKind::ScrollUp => Some(AppEvent::Wheel(-1.0)),
        MouseEventKind::Moved => Some(AppEvent::Pointer {
            column: mouse.column,
            row: mouse.row,
        }),
        MouseEventKind::Drag(_) => Some(AppEvent::Drag {
            column: mouse.column,
            row: mouse.row,
        }),
        MouseEventKind::Up(_) => Some(AppEvent::Release),
        MouseEventKind::Down(_) => Some(AppEvent::Click {
            column: mouse.column,
            row: mouse.row,
        }),
        _ => None,
    }
}

/// Application events
#[derive(Debug, PartialEq)]
pub enum AppEvent {
    /// A key was pressed
    Key(KeyEvent),
    /// Mouse wheel notches (positive = down)
    Wheel(f64),
    /// Pointer moved over a cell
    Pointer { column: u16, row: u16 },
    /// Mouse button pressed
    Click { column: u16, row: u16 },
    /// Pointer moved with a button held
    Drag { column: u16, row: u16 },
    /// Mouse button released
    Release,
    /// Terminal was resized
    Resize(u16, u16),
    /// Tick event for periodic updates
    Tick,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers, MouseButton};

    fn mouse(kind: MouseEventKind) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column: 3,
            row: 4,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_wheel_direction() {
        assert_eq!(translate(mouse(MouseEventKind::ScrollDown)), Some(AppEvent::Wheel(1.0)));
        assert_eq!(translate(mouse(MouseEventKind::ScrollUp)), Some(AppEvent::Wheel(-1.0)));
    }

    #[test]
    fn test_pointer_and_click() {
        assert_eq!(
            translate(mouse(MouseEventKind::Moved)),
            Some(AppEvent::Pointer { column: 3, row: 4 })
        );
        assert_eq!(
            translate(mouse(MouseEventKind::Down(MouseButton::Left))),
            Some(AppEvent::Click { column: 3, row: 4 })
        );
    }

    #[test]
    fn test_drag_and_release() {
        assert_eq!(
            translate(mouse(MouseEventKind::Drag(MouseButton::Left))),
            Some(AppEvent::Drag { column: 3, row: 4 })
        );
        assert_eq!(
            translate(mouse(MouseEventKind::Up(MouseButton::Left))),
            Some(AppEvent::Release)
        );
    }

    #[test]
    fn test_key_release_ignored() {
        let release = KeyEvent {
            code: KeyCode::Char('j'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(translate(Event::Key(release)), None);
    }

    #[test]
    fn test_animation_rate() {
        let handler = EventHandler::with_animation_fps(100, 50);
        assert_eq!(handler.animation_rate(), Duration::from_millis(20));
        assert_eq!(EventHandler::with_animation_fps(100, 0).animation_rate(), Duration::from_millis(1000));
    }
}
