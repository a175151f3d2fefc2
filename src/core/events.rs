// Event handling
// Adapts host terminal events into toolkit-level pointer and app events

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Pointer button identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Left,
    Right,
    Middle,
}

impl From<MouseButton> for PointerButton {
    fn from(button: MouseButton) -> Self {
        match button {
            MouseButton::Left => PointerButton::Left,
            MouseButton::Right => PointerButton::Right,
            MouseButton::Middle => PointerButton::Middle,
        }
    }
}

/// What a pointer event reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    /// Button pressed at the position.
    Down(PointerButton),
    /// Button released at the position. Delivered wherever the pointer is,
    /// not necessarily over the element that saw the press.
    Up(PointerButton),
    /// Pointer moved (with or without a button held).
    Move,
    /// Wheel scrolled; positive is down.
    Scroll(i32),
}

/// A pointer event with its absolute terminal position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub x: u16,
    pub y: u16,
}

/// Application events that can be handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// Quit the application
    Quit,

    /// Pointer interaction
    Pointer(PointerEvent),

    /// Cycle to the next tab
    NextTab,

    /// Cycle to the previous tab
    PrevTab,

    /// Printable character (search input, shortcuts)
    Char(char),

    /// Delete one character from the search query
    Backspace,

    /// Leave search input / dismiss
    Escape,

    /// No operation
    None,
}

/// Event handler that converts terminal events to application events
pub struct EventHandler;

impl EventHandler {
    /// Convert a crossterm event to an application event
    pub fn handle(event: Event) -> AppEvent {
        match event {
            Event::Key(key) => Self::handle_key(key),
            Event::Mouse(mouse) => Self::handle_mouse(mouse),
            _ => AppEvent::None,
        }
    }

    /// Handle keyboard events
    fn handle_key(key: KeyEvent) -> AppEvent {
        // Only handle key press events
        if key.kind != crossterm::event::KeyEventKind::Press {
            return AppEvent::None;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => AppEvent::Quit,

            // Tab cycling
            KeyCode::Tab => AppEvent::NextTab,
            KeyCode::BackTab => AppEvent::PrevTab,

            // Search input
            KeyCode::Backspace => AppEvent::Backspace,
            KeyCode::Esc => AppEvent::Escape,
            KeyCode::Char(c) => AppEvent::Char(c),

            _ => AppEvent::None,
        }
    }

    /// Handle mouse events
    fn handle_mouse(mouse: MouseEvent) -> AppEvent {
        let kind = match mouse.kind {
            MouseEventKind::Down(button) => PointerKind::Down(button.into()),
            MouseEventKind::Up(button) => PointerKind::Up(button.into()),
            MouseEventKind::Drag(_) | MouseEventKind::Moved => PointerKind::Move,
            MouseEventKind::ScrollDown => PointerKind::Scroll(1),
            MouseEventKind::ScrollUp => PointerKind::Scroll(-1),
            _ => return AppEvent::None,
        };
        AppEvent::Pointer(PointerEvent {
            kind,
            x: mouse.column,
            y: mouse.row,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    fn mouse(kind: MouseEventKind, x: u16, y: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column: x,
            row: y,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(EventHandler::handle(key(KeyCode::Tab)), AppEvent::NextTab);
        assert_eq!(EventHandler::handle(key(KeyCode::BackTab)), AppEvent::PrevTab);
        assert_eq!(EventHandler::handle(key(KeyCode::Esc)), AppEvent::Escape);
        assert_eq!(EventHandler::handle(key(KeyCode::Char('x'))), AppEvent::Char('x'));
        assert_eq!(EventHandler::handle(key(KeyCode::F(5))), AppEvent::None);
    }

    #[test]
    fn test_release_events_are_ignored() {
        let release = Event::Key(KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(EventHandler::handle(release), AppEvent::None);
    }

    #[test]
    fn test_mouse_mapping() {
        let down = EventHandler::handle(mouse(MouseEventKind::Down(MouseButton::Left), 3, 7));
        assert_eq!(
            down,
            AppEvent::Pointer(PointerEvent {
                kind: PointerKind::Down(PointerButton::Left),
                x: 3,
                y: 7,
            })
        );

        // Drags and plain moves both map to Move; drag state lives in the
        // controls, not in the event stream
        let drag = EventHandler::handle(mouse(MouseEventKind::Drag(MouseButton::Left), 4, 7));
        let moved = EventHandler::handle(mouse(MouseEventKind::Moved, 4, 7));
        assert_eq!(drag, moved);

        let scroll = EventHandler::handle(mouse(MouseEventKind::ScrollUp, 0, 0));
        assert_eq!(
            scroll,
            AppEvent::Pointer(PointerEvent { kind: PointerKind::Scroll(-1), x: 0, y: 0 })
        );
    }
}
