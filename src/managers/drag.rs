// Drag controller
// Generic pointer-drag state machine shared by window-move and slider-drag

/// Ephemeral state of an in-progress drag. Created on pointer-down,
/// destroyed on pointer-up, never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession<T> {
    /// Pointer position at the press that started the drag.
    pub start_x: u16,
    pub start_y: u16,
    /// Value or position of the dragged entity at drag start.
    pub origin: T,
}

/// One pointer-move step of an active drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragUpdate<T> {
    /// Pointer delta since the press, in cells.
    pub dx: i32,
    pub dy: i32,
    pub origin: T,
}

/// State machine `Idle -> Dragging -> Idle`.
///
/// Pointer moves keep producing updates wherever the pointer goes — the drag
/// owns the pointer until an explicit release, including outside the
/// draggable element's bounds. There is no cancellation path besides
/// pointer-up; a second press while dragging restarts the session.
#[derive(Debug, Clone, Copy, Default)]
pub struct DragController<T> {
    session: Option<DragSession<T>>,
}

impl<T: Copy> DragController<T> {
    pub fn new() -> Self {
        Self { session: None }
    }

    /// `Idle -> Dragging`: capture the start pointer position and the
    /// target's start value/position.
    pub fn begin(&mut self, x: u16, y: u16, origin: T) {
        self.session = Some(DragSession {
            start_x: x,
            start_y: y,
            origin,
        });
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Recompute the target for the current pointer position. Returns None
    /// when idle.
    pub fn update(&self, x: u16, y: u16) -> Option<DragUpdate<T>> {
        self.session.map(|session| DragUpdate {
            dx: i32::from(x) - i32::from(session.start_x),
            dy: i32::from(y) - i32::from(session.start_y),
            origin: session.origin,
        })
    }

    /// `Dragging -> Idle`: release, anywhere on screen. Returns the session
    /// that just ended, if any.
    pub fn end(&mut self) -> Option<DragSession<T>> {
        self.session.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_reports_nothing() {
        let drag: DragController<(u16, u16)> = DragController::new();
        assert!(!drag.is_dragging());
        assert_eq!(drag.update(5, 5), None);
    }

    #[test]
    fn test_full_drag_cycle() {
        let mut drag = DragController::new();
        drag.begin(10, 10, (40u16, 8u16));
        assert!(drag.is_dragging());

        let step = drag.update(13, 9).unwrap();
        assert_eq!((step.dx, step.dy), (3, -1));
        assert_eq!(step.origin, (40, 8));

        let ended = drag.end().unwrap();
        assert_eq!((ended.start_x, ended.start_y), (10, 10));
        assert!(!drag.is_dragging());
        assert_eq!(drag.update(13, 9), None);
    }

    #[test]
    fn test_tracking_continues_far_from_origin() {
        // Pointer leaving the draggable region does not end the session
        let mut drag = DragController::new();
        drag.begin(50, 20, 0.25f64);
        let step = drag.update(0, 0).unwrap();
        assert_eq!((step.dx, step.dy), (-50, -20));
        assert!(drag.is_dragging());
    }

    #[test]
    fn test_second_press_restarts_session() {
        let mut drag = DragController::new();
        drag.begin(10, 10, 1u8);
        drag.begin(20, 20, 2u8);
        let step = drag.update(21, 20).unwrap();
        assert_eq!((step.dx, step.origin), (1, 2));
    }

    #[test]
    fn test_end_when_idle_is_noop() {
        let mut drag: DragController<u8> = DragController::new();
        assert_eq!(drag.end(), None);
    }
}
