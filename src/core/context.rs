// Application context
// Owns the theme registry, the window set, and the notification center;
// routes host events and keeps "theme change affects all open windows"
// behavior without ambient global state

use std::time::Instant;

use ratatui::Frame;

use crate::elements::{render_toasts, Window, WindowConfig};
use crate::error::PanelError;
use crate::theme::ThemeRegistry;

use super::events::{AppEvent, PointerEvent, PointerKind};
use super::notify::NotificationCenter;

/// The application context: one per process.
pub struct App {
    themes: ThemeRegistry,
    windows: Vec<Window>,
    notices: NotificationCenter,
    /// Window that keyboard input goes to; updated by pointer presses.
    active_window: usize,
    should_quit: bool,
}

impl App {
    pub fn new() -> Self {
        Self {
            themes: ThemeRegistry::new(),
            windows: Vec::new(),
            notices: NotificationCenter::new(),
            active_window: 0,
            should_quit: false,
        }
    }

    pub fn themes(&self) -> &ThemeRegistry {
        &self.themes
    }

    pub fn themes_mut(&mut self) -> &mut ThemeRegistry {
        &mut self.themes
    }

    pub fn notices(&self) -> &NotificationCenter {
        &self.notices
    }

    pub fn notices_mut(&mut self) -> &mut NotificationCenter {
        &mut self.notices
    }

    /// Create a window with the current theme pre-applied. The new window
    /// becomes the keyboard-active one.
    pub fn create_window(&mut self, config: WindowConfig) -> &mut Window {
        let window = Window::new(config, self.themes.current());
        self.windows.push(window);
        self.active_window = self.windows.len() - 1;
        &mut self.windows[self.active_window]
    }

    pub fn windows(&self) -> &[Window] {
        &self.windows
    }

    pub fn window_mut(&mut self, index: usize) -> Option<&mut Window> {
        self.windows.get_mut(index)
    }

    /// Switch the current theme and cascade it to every open window.
    ///
    /// Registry subscribers fire first, synchronously and in subscription
    /// order; the window cascade completes before this returns. An unknown
    /// name changes nothing.
    pub fn set_theme(&mut self, name: &str) -> Result<(), PanelError> {
        self.themes.set_current(name)?;
        let theme = self.themes.current().clone();
        for window in &mut self.windows {
            window.apply_theme(&theme);
        }
        Ok(())
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Per-frame housekeeping: expire stale notifications.
    pub fn tick(&mut self) {
        self.notices.prune(Instant::now());
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Quit => self.should_quit = true,
            AppEvent::Pointer(pointer) => self.handle_pointer(pointer),
            AppEvent::NextTab => self.with_active(|window, notices| window.cycle_tab(1, notices)),
            AppEvent::PrevTab => self.with_active(|window, notices| window.cycle_tab(-1, notices)),
            AppEvent::Char(c) => {
                let consumed = self
                    .windows
                    .get_mut(self.active_window)
                    .map(|window| window.handle_char(c))
                    .unwrap_or(false);
                if !consumed && c == 'q' {
                    self.should_quit = true;
                }
            }
            AppEvent::Backspace => {
                if let Some(window) = self.windows.get_mut(self.active_window) {
                    window.handle_backspace();
                }
            }
            AppEvent::Escape => {
                if let Some(window) = self.windows.get_mut(self.active_window) {
                    window.handle_escape();
                }
            }
            AppEvent::None => {}
        }
    }

    fn with_active(&mut self, f: impl FnOnce(&mut Window, &mut NotificationCenter)) {
        let App {
            windows,
            notices,
            active_window,
            ..
        } = self;
        if let Some(window) = windows.get_mut(*active_window) {
            f(window, notices);
        }
    }

    /// Route a pointer event. A window with an in-flight drag or press owns
    /// the pointer and sees every event wherever it lands; otherwise events
    /// go to the topmost window under the pointer.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        let App {
            windows,
            notices,
            active_window,
            ..
        } = self;

        if let Some(window) = windows.iter_mut().find(|w| w.is_capturing()) {
            window.handle_pointer(event, notices);
            return;
        }

        // Topmost window = last created; scan in reverse
        let hit = windows
            .iter()
            .enumerate()
            .rev()
            .find(|(_, w)| w.contains(event.x, event.y))
            .map(|(index, _)| index);
        let Some(index) = hit else {
            return;
        };
        if matches!(event.kind, PointerKind::Down(_)) {
            *active_window = index;
        }
        windows[index].handle_pointer(event, notices);
    }

    /// Draw every window and the toast stack.
    pub fn render(&mut self, f: &mut Frame) {
        let area = f.area();
        for window in &mut self.windows {
            window.render(f);
        }
        render_toasts(f, area, self.notices.active(), self.themes.current());
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PointerButton;
    use crate::elements::TabConfig;
    use crate::theme::{light, Theme};
    use ratatui::{backend::TestBackend, Terminal};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn pointer(kind: PointerKind, x: u16, y: u16) -> PointerEvent {
        PointerEvent { kind, x, y }
    }

    #[test]
    fn test_set_theme_reaches_every_window() {
        let mut app = App::new();
        app.create_window(WindowConfig::default());
        app.create_window(WindowConfig {
            title: "Second".to_string(),
            ..WindowConfig::default()
        });

        app.set_theme("Light").unwrap();

        let expected = light().main_background;
        for window in app.windows() {
            assert_eq!(window.background_target(), expected);
        }
    }

    #[test]
    fn test_set_theme_notifies_subscribers_before_returning() {
        let mut app = App::new();
        let seen: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        app.themes_mut()
            .subscribe(Box::new(move |theme: &Theme| {
                sink.borrow_mut().push(String::from(theme.accent));
            }));

        app.set_theme("Midnight").unwrap();
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn test_unknown_theme_is_a_noop() {
        let mut app = App::new();
        app.create_window(WindowConfig::default());
        let before = app.windows()[0].background_target();

        assert!(app.set_theme("Nonexistent").is_err());
        assert_eq!(app.themes().current_name(), "Dark");
        assert_eq!(app.windows()[0].background_target(), before);
    }

    #[test]
    fn test_quit_events() {
        let mut app = App::new();
        assert!(!app.should_quit());
        app.handle_event(AppEvent::Char('q'));
        assert!(app.should_quit());

        let mut app = App::new();
        app.handle_event(AppEvent::Quit);
        assert!(app.should_quit());
    }

    #[test]
    fn test_capture_routes_moves_outside_window_bounds() {
        let mut app = App::new();
        let window = app.create_window(WindowConfig::default());
        window.create_tab(TabConfig::default());

        let backend = TestBackend::new(100, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();

        let (x0, y0) = app.windows()[0].position();
        app.handle_event(AppEvent::Pointer(pointer(
            PointerKind::Down(PointerButton::Left),
            x0 + 3,
            y0,
        )));
        // Far outside the window frame: the drag still tracks
        app.handle_event(AppEvent::Pointer(pointer(PointerKind::Move, 90, 35)));
        let moved = app.windows()[0].position();
        assert_ne!(moved, (x0, y0));

        app.handle_event(AppEvent::Pointer(pointer(
            PointerKind::Up(PointerButton::Left),
            90,
            35,
        )));
        app.handle_event(AppEvent::Pointer(pointer(PointerKind::Move, 10, 10)));
        assert_eq!(app.windows()[0].position(), moved);
    }

    #[test]
    fn test_tab_cycling_goes_to_active_window() {
        let mut app = App::new();
        let window = app.create_window(WindowConfig::default());
        let first = window.create_tab(TabConfig {
            title: "First".to_string(),
            ..TabConfig::default()
        });
        let second = window.create_tab(TabConfig {
            title: "Second".to_string(),
            ..TabConfig::default()
        });

        app.handle_event(AppEvent::NextTab);
        assert_eq!(app.windows()[0].current_tab(), Some(second));
        app.handle_event(AppEvent::PrevTab);
        assert_eq!(app.windows()[0].current_tab(), Some(first));
    }
}
