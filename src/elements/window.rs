// Window component
// Root of the composition tree: owns the tab set, the single-current-tab
// selection, the applied theme, and the title-bar drag interaction

use std::time::Instant;

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use serde::Deserialize;

use crate::core::{Bounds, Notification, Notifier, PointerButton, PointerEvent, PointerKind};
use crate::managers::{DragController, Tween, THEME_TWEEN};
use crate::theme::{Rgb, Theme};
use crate::utilities::resolve_icon;

use super::tab::{Tab, TabConfig};

/// Configuration for a window. Unknown fields in YAML input are ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub author: String,
    /// (columns, rows)
    pub size: (u16, u16),
    /// Translucent body rendering; display-only.
    pub acrylic: bool,
    pub hide_search_bar: bool,
    pub sidebar_width: u16,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Window".to_string(),
            author: String::new(),
            size: (76, 24),
            acrylic: false,
            hide_search_bar: false,
            sidebar_width: 18,
        }
    }
}

/// Identifier of a tab within its owning window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabId(pub(crate) usize);

/// A themed panel window with a tab sidebar and a page area.
pub struct Window {
    title: String,
    author: String,
    size: (u16, u16),
    acrylic: bool,
    hide_search_bar: bool,
    sidebar_width: u16,
    position: (u16, u16),

    tabs: Vec<Tab>,
    /// Index of the current tab. At most one tab is current at any time.
    current: Option<usize>,

    search_query: String,
    search_focused: bool,

    theme: Theme,
    background: Tween,
    drag: DragController<(u16, u16)>,

    // Hit bounds recorded at the last render
    frame_bounds: Bounds,
    title_bounds: Bounds,
    search_bounds: Bounds,
    page_bounds: Bounds,
}

impl Window {
    pub(crate) fn new(config: WindowConfig, theme: &Theme) -> Self {
        Self {
            title: config.title,
            author: config.author,
            size: config.size,
            acrylic: config.acrylic,
            hide_search_bar: config.hide_search_bar,
            sidebar_width: config.sidebar_width,
            position: (4, 2),
            tabs: Vec::new(),
            current: None,
            search_query: String::new(),
            search_focused: false,
            theme: theme.clone(),
            background: Tween::settled(theme.main_background),
            drag: DragController::new(),
            frame_bounds: Bounds::ZERO,
            title_bounds: Bounds::ZERO,
            search_bounds: Bounds::ZERO,
            page_bounds: Bounds::ZERO,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn is_acrylic(&self) -> bool {
        self.acrylic
    }

    pub fn position(&self) -> (u16, u16) {
        self.position
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// The background color the window is showing or animating toward.
    pub fn background_target(&self) -> Rgb {
        self.background.target()
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn search_focused(&self) -> bool {
        self.search_focused
    }

    // === Tabs and selection ===

    /// Append a tab. The first selectable (unlocked) tab created becomes
    /// current automatically, so a fresh window always shows something.
    pub fn create_tab(&mut self, config: TabConfig) -> TabId {
        let id = TabId(self.tabs.len());
        let mut tab = Tab::new(config, &self.theme);
        if self.current.is_none() && !tab.is_locked() {
            tab.show_page();
            self.current = Some(id.0);
        }
        self.tabs.push(tab);
        id
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn tab(&self, id: TabId) -> Option<&Tab> {
        self.tabs.get(id.0)
    }

    pub fn tab_mut(&mut self, id: TabId) -> Option<&mut Tab> {
        self.tabs.get_mut(id.0)
    }

    pub fn current_tab(&self) -> Option<TabId> {
        self.current.map(TabId)
    }

    /// Switch the current tab.
    ///
    /// Selecting a locked tab changes nothing and reports through the
    /// notification sink — never a propagated error. Otherwise the previous
    /// tab is deselected (page hidden) before the new one is selected, so
    /// there is never a moment with two visible pages.
    pub fn select_tab(&mut self, id: TabId, notices: &mut dyn Notifier) {
        let Some(target) = self.tabs.get(id.0) else {
            return;
        };
        if target.is_locked() {
            notices.notify(
                Notification::new("Tab Locked", format!("{} is locked", target.title()))
                    .with_icon("lock"),
            );
            return;
        }
        if self.current == Some(id.0) {
            return;
        }
        if let Some(old) = self.current.take() {
            self.tabs[old].hide_page();
        }
        self.current = Some(id.0);
        self.tabs[id.0].show_page();
    }

    /// Keyboard navigation: step to the next/previous tab, skipping locked
    /// tabs rather than parking on them.
    pub fn cycle_tab(&mut self, direction: i32, notices: &mut dyn Notifier) {
        if self.tabs.is_empty() {
            return;
        }
        let len = self.tabs.len() as i32;
        let start = self.current.map(|i| i as i32).unwrap_or(0);
        let mut index = start;
        for _ in 0..self.tabs.len() {
            index = (index + direction).rem_euclid(len);
            if !self.tabs[index as usize].is_locked() {
                self.select_tab(TabId(index as usize), notices);
                return;
            }
        }
    }

    // === Theme ===

    /// Idempotent re-application of the theme: retargets the background
    /// tween (latest-wins) and cascades to tabs, sections, and controls.
    pub fn apply_theme(&mut self, theme: &Theme) {
        self.theme = theme.clone();
        self.background
            .retarget(theme.main_background, Instant::now(), THEME_TWEEN);
        for tab in &mut self.tabs {
            tab.apply_theme(theme);
        }
    }

    // === Search ===

    /// Tabs whose titles match the search query, in display order. Filtering
    /// affects the sidebar only; the current-tab selection is untouched.
    pub fn filtered_tabs(&self) -> Vec<TabId> {
        let query = self.search_query.to_lowercase();
        self.tabs
            .iter()
            .enumerate()
            .filter(|(_, tab)| query.is_empty() || tab.title().to_lowercase().contains(&query))
            .map(|(index, _)| TabId(index))
            .collect()
    }

    /// Feed a typed character to the search field. Returns false when the
    /// field is not focused so the caller can treat the key as a shortcut.
    pub fn handle_char(&mut self, c: char) -> bool {
        if !self.search_focused {
            return false;
        }
        self.search_query.push(c);
        true
    }

    pub fn handle_backspace(&mut self) -> bool {
        if !self.search_focused {
            return false;
        }
        self.search_query.pop();
        true
    }

    pub fn handle_escape(&mut self) {
        self.search_focused = false;
    }

    // === Pointer ===

    /// True while this window owns the pointer: a title-bar drag, a slider
    /// drag, or an armed button press is in flight.
    pub(crate) fn is_capturing(&self) -> bool {
        self.drag.is_dragging()
            || self
                .current
                .map(|i| self.tabs[i].is_capturing())
                .unwrap_or(false)
    }

    pub(crate) fn contains(&self, x: u16, y: u16) -> bool {
        self.frame_bounds.contains(x, y)
    }

    pub fn handle_pointer(&mut self, event: PointerEvent, notices: &mut dyn Notifier) {
        let PointerEvent { kind, x, y } = event;
        match kind {
            PointerKind::Down(PointerButton::Left) => {
                if self.title_bounds.contains(x, y) {
                    self.drag.begin(x, y, self.position);
                    return;
                }
                if !self.hide_search_bar && self.search_bounds.contains(x, y) {
                    self.search_focused = true;
                    return;
                }
                self.search_focused = false;
                if let Some(hit) = self
                    .tabs
                    .iter()
                    .position(|tab| tab.button_bounds().contains(x, y))
                {
                    self.select_tab(TabId(hit), notices);
                    return;
                }
                if let Some(i) = self.current {
                    self.tabs[i].pointer_down(x, y);
                }
            }
            PointerKind::Down(_) => {}
            PointerKind::Move => {
                if let Some(step) = self.drag.update(x, y) {
                    let (start_x, start_y) = step.origin;
                    self.position = (
                        (i32::from(start_x) + step.dx).max(0) as u16,
                        (i32::from(start_y) + step.dy).max(0) as u16,
                    );
                }
                if let Some(i) = self.current {
                    self.tabs[i].pointer_move(x, y);
                }
            }
            PointerKind::Up(PointerButton::Left) => {
                self.drag.end();
                if let Some(i) = self.current {
                    self.tabs[i].pointer_up(x, y);
                }
            }
            PointerKind::Up(_) => {}
            PointerKind::Scroll(delta) => {
                if self.page_bounds.contains(x, y) {
                    let viewport = self.page_bounds.height as usize;
                    if let Some(i) = self.current {
                        self.tabs[i].scroll_by(delta, viewport);
                    }
                }
            }
        }
    }

    // === Rendering ===

    pub fn render(&mut self, f: &mut Frame) {
        let frame_area = f.area();
        let width = self.size.0.min(frame_area.width);
        let height = self.size.1.min(frame_area.height);
        if width < 4 || height < 4 {
            return;
        }
        // Pin the window inside the terminal; dragging past an edge parks it
        let x = self.position.0.min(frame_area.width - width);
        let y = self.position.1.min(frame_area.height - height);
        let area = Rect { x, y, width, height };
        self.frame_bounds = area.into();
        self.title_bounds = Bounds::new(area.x, area.y, area.width, 1);

        let opacity = if self.acrylic {
            self.theme.acrylic_opacity
        } else {
            self.theme.window_opacity
        };
        let bg = self.background.sample(Instant::now()).scale(opacity);

        let mut title_spans = vec![Span::styled(
            format!(" {} ", self.title),
            Style::default()
                .fg(self.theme.text_primary.color())
                .add_modifier(Modifier::BOLD),
        )];
        if !self.author.is_empty() {
            title_spans.push(Span::styled(
                format!("· {} ", self.author),
                Style::default().fg(self.theme.text_secondary.color()),
            ));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.theme.border.color()))
            .style(Style::default().bg(bg.color()))
            .title(Line::from(title_spans));
        let inner = block.inner(area);

        f.render_widget(Clear, area);
        f.render_widget(block, area);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        // Sidebar | page split
        let sidebar_width = self.sidebar_width.clamp(1, (inner.width / 2).max(1));
        let sidebar = Rect {
            x: inner.x,
            y: inner.y,
            width: sidebar_width,
            height: inner.height,
        };
        let page = Rect {
            x: inner.x + sidebar_width + 1,
            y: inner.y,
            width: inner.width.saturating_sub(sidebar_width + 1),
            height: inner.height,
        };
        self.page_bounds = page.into();

        self.render_sidebar(f, sidebar);

        if let Some(i) = self.current {
            self.tabs[i].render_page(f, page);
        }
    }

    fn render_sidebar(&mut self, f: &mut Frame, sidebar: Rect) {
        let mut row_y = sidebar.y;
        let bottom = sidebar.y + sidebar.height;

        if self.hide_search_bar {
            self.search_bounds = Bounds::ZERO;
        } else if row_y < bottom {
            let row = Rect {
                x: sidebar.x,
                y: row_y,
                width: sidebar.width,
                height: 1,
            };
            self.search_bounds = row.into();

            let style = if self.search_focused {
                Style::default().fg(self.theme.accent.color())
            } else if self.search_query.is_empty() {
                Style::default().fg(self.theme.text_disabled.color())
            } else {
                Style::default().fg(self.theme.text_primary.color())
            };
            let text = if self.search_query.is_empty() && !self.search_focused {
                format!("{} Search", resolve_icon("search"))
            } else {
                format!("{} {}", resolve_icon("search"), self.search_query)
            };
            f.render_widget(Paragraph::new(Line::from(Span::styled(text, style))), row);
            row_y += 2;
        }

        let visible = self.filtered_tabs();
        for (index, tab) in self.tabs.iter_mut().enumerate() {
            if !visible.contains(&TabId(index)) || row_y >= bottom {
                tab.set_button_bounds(Bounds::ZERO);
                continue;
            }
            let row = Rect {
                x: sidebar.x,
                y: row_y,
                width: sidebar.width,
                height: 1,
            };
            tab.set_button_bounds(row.into());
            row_y += 1;

            let is_current = self.current == Some(index);
            let marker = if is_current { "▌" } else { " " };
            let icon = resolve_icon(tab.icon());
            let label = if icon.is_empty() {
                format!("{marker}{}", tab.title())
            } else {
                format!("{marker}{icon} {}", tab.title())
            };
            let label = if tab.is_locked() {
                format!("{label} {}", resolve_icon("lock"))
            } else {
                label
            };

            let style = if is_current {
                Style::default()
                    .fg(self.theme.accent.color())
                    .add_modifier(Modifier::BOLD)
            } else if tab.is_locked() {
                Style::default().fg(self.theme.text_disabled.color())
            } else {
                Style::default().fg(self.theme.text_secondary.color())
            };
            f.render_widget(Paragraph::new(Line::from(Span::styled(label, style))), row);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::{SectionConfig, SliderConfig, ToggleConfig};
    use crate::theme;
    use ratatui::{backend::TestBackend, Terminal};

    #[derive(Default)]
    struct RecordingNotifier {
        seen: Vec<Notification>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&mut self, notification: Notification) {
            self.seen.push(notification);
        }
    }

    fn window() -> Window {
        Window::new(WindowConfig::default(), &theme::dark())
    }

    fn pointer(kind: PointerKind, x: u16, y: u16) -> PointerEvent {
        PointerEvent { kind, x, y }
    }

    #[test]
    fn test_config_defaults_and_unknown_fields() {
        let config: WindowConfig = serde_yaml::from_str(
            "title: Settings\nacrylic: true\nfancy_blur_radius: 12\n",
        )
        .unwrap();
        assert_eq!(config.title, "Settings");
        assert!(config.acrylic);
        // Unspecified fields take their defaults; unknown fields are ignored
        assert_eq!(config.size, (76, 24));
        assert_eq!(config.sidebar_width, 18);
        assert!(!config.hide_search_bar);
    }

    #[test]
    fn test_first_tab_becomes_current_automatically() {
        let mut window = window();
        let dashboard = window.create_tab(TabConfig {
            title: "Dashboard".to_string(),
            ..TabConfig::default()
        });
        let settings = window.create_tab(TabConfig {
            title: "Settings".to_string(),
            ..TabConfig::default()
        });

        assert_eq!(window.current_tab(), Some(dashboard));
        assert!(window.tab(dashboard).unwrap().page_visible());
        assert!(!window.tab(settings).unwrap().page_visible());
    }

    #[test]
    fn test_locked_first_tab_defers_to_first_unlocked() {
        let mut window = window();
        let locked = window.create_tab(TabConfig {
            title: "Premium".to_string(),
            locked: true,
            ..TabConfig::default()
        });
        let open = window.create_tab(TabConfig {
            title: "Free".to_string(),
            ..TabConfig::default()
        });
        assert_eq!(window.current_tab(), Some(open));
        assert!(!window.tab(locked).unwrap().page_visible());
    }

    #[test]
    fn test_selecting_locked_tab_notifies_and_changes_nothing() {
        let mut window = window();
        let mut notices = RecordingNotifier::default();
        let dashboard = window.create_tab(TabConfig {
            title: "Dashboard".to_string(),
            ..TabConfig::default()
        });
        let premium = window.create_tab(TabConfig {
            title: "Premium".to_string(),
            locked: true,
            ..TabConfig::default()
        });

        window.select_tab(premium, &mut notices);

        assert_eq!(window.current_tab(), Some(dashboard));
        assert_eq!(notices.seen.len(), 1);
        assert_eq!(notices.seen[0].title, "Tab Locked");
    }

    #[test]
    fn test_at_most_one_tab_current() {
        let mut window = window();
        let mut notices = RecordingNotifier::default();
        let ids: Vec<TabId> = (0..4)
            .map(|i| {
                window.create_tab(TabConfig {
                    title: format!("Tab {i}"),
                    ..TabConfig::default()
                })
            })
            .collect();

        for &id in &[ids[2], ids[1], ids[3], ids[3]] {
            window.select_tab(id, &mut notices);
            let visible = window.tabs().iter().filter(|t| t.page_visible()).count();
            assert_eq!(visible, 1);
        }
        assert_eq!(window.current_tab(), Some(ids[3]));
        assert!(notices.seen.is_empty());
    }

    #[test]
    fn test_cycle_skips_locked_tabs() {
        let mut window = window();
        let mut notices = RecordingNotifier::default();
        let first = window.create_tab(TabConfig {
            title: "First".to_string(),
            ..TabConfig::default()
        });
        window.create_tab(TabConfig {
            title: "Locked".to_string(),
            locked: true,
            ..TabConfig::default()
        });
        let third = window.create_tab(TabConfig {
            title: "Third".to_string(),
            ..TabConfig::default()
        });

        window.cycle_tab(1, &mut notices);
        assert_eq!(window.current_tab(), Some(third));
        window.cycle_tab(1, &mut notices);
        assert_eq!(window.current_tab(), Some(first));
        window.cycle_tab(-1, &mut notices);
        assert_eq!(window.current_tab(), Some(third));
        assert!(notices.seen.is_empty());
    }

    #[test]
    fn test_apply_theme_retargets_background_and_cascades() {
        let mut window = window();
        let tab = window.create_tab(TabConfig::default());
        let section = window
            .tab_mut(tab)
            .unwrap()
            .create_section(SectionConfig::default());
        let toggle = section.create_toggle(ToggleConfig::default());

        let light = theme::light();
        window.apply_theme(&light);

        assert_eq!(window.background_target(), light.main_background);
        assert_eq!(window.theme().accent, light.accent);
        let toggle = window
            .tab_mut(tab)
            .unwrap()
            .section_mut(0)
            .unwrap()
            .toggle_mut(toggle)
            .unwrap();
        assert_eq!(toggle.colors().accent, light.accent);
    }

    #[test]
    fn test_search_filters_sidebar_without_touching_selection() {
        let mut window = window();
        let dashboard = window.create_tab(TabConfig {
            title: "Dashboard".to_string(),
            ..TabConfig::default()
        });
        let settings = window.create_tab(TabConfig {
            title: "Settings".to_string(),
            ..TabConfig::default()
        });

        window.search_focused = true;
        for c in "set".chars() {
            assert!(window.handle_char(c));
        }
        assert_eq!(window.filtered_tabs(), vec![settings]);
        assert_eq!(window.current_tab(), Some(dashboard));

        assert!(window.handle_backspace());
        assert_eq!(window.search_query(), "se");
        window.handle_escape();
        assert!(!window.search_focused());
        // Unfocused fields ignore input
        assert!(!window.handle_char('x'));
    }

    #[test]
    fn test_title_bar_drag_moves_window() {
        let mut window = window();
        let mut notices = RecordingNotifier::default();
        window.create_tab(TabConfig::default());

        let backend = TestBackend::new(100, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| window.render(f)).unwrap();

        let (x0, y0) = window.position();
        let grab = (x0 + 5, y0);
        window.handle_pointer(
            pointer(PointerKind::Down(PointerButton::Left), grab.0, grab.1),
            &mut notices,
        );
        assert!(window.is_capturing());
        window.handle_pointer(
            pointer(PointerKind::Move, grab.0 + 7, grab.1 + 3),
            &mut notices,
        );
        assert_eq!(window.position(), (x0 + 7, y0 + 3));

        // The pointer may wander anywhere mid-drag
        window.handle_pointer(pointer(PointerKind::Move, 0, 0), &mut notices);
        assert_eq!(window.position(), (0, 0));

        window.handle_pointer(
            pointer(PointerKind::Up(PointerButton::Left), 0, 0),
            &mut notices,
        );
        assert!(!window.is_capturing());
        window.handle_pointer(pointer(PointerKind::Move, 50, 20), &mut notices);
        assert_eq!(window.position(), (0, 0));
    }

    #[test]
    fn test_clicking_tab_button_selects_it() {
        let mut window = window();
        let mut notices = RecordingNotifier::default();
        let first = window.create_tab(TabConfig {
            title: "First".to_string(),
            ..TabConfig::default()
        });
        let second = window.create_tab(TabConfig {
            title: "Second".to_string(),
            ..TabConfig::default()
        });

        let backend = TestBackend::new(100, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| window.render(f)).unwrap();

        let bounds = window.tab(second).unwrap().button_bounds();
        assert_ne!(bounds, Bounds::ZERO);
        window.handle_pointer(
            pointer(PointerKind::Down(PointerButton::Left), bounds.x + 1, bounds.y),
            &mut notices,
        );
        assert_eq!(window.current_tab(), Some(second));
        assert_ne!(window.current_tab(), Some(first));
    }

    #[test]
    fn test_slider_drag_through_rendered_window() {
        let mut window = window();
        let mut notices = RecordingNotifier::default();
        let tab = window.create_tab(TabConfig::default());
        let section = window
            .tab_mut(tab)
            .unwrap()
            .create_section(SectionConfig::default());
        let slider = section
            .create_slider(SliderConfig {
                title: "Volume".to_string(),
                min: 0.0,
                max: 100.0,
                step: 1.0,
                value: 0.0,
                ..SliderConfig::default()
            })
            .unwrap();

        let backend = TestBackend::new(100, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| window.render(f)).unwrap();

        let track = match &window.tab(tab).unwrap().sections()[0].controls()[0] {
            crate::elements::Control::Slider(s) => s.track_bounds(),
            _ => unreachable!(),
        };
        assert_ne!(track, Bounds::ZERO);

        window.handle_pointer(
            pointer(PointerKind::Down(PointerButton::Left), track.x + 1, track.y),
            &mut notices,
        );
        assert!(window.is_capturing());
        // Drag wildly off to the right: value clamps at max
        window.handle_pointer(pointer(PointerKind::Move, 99, track.y), &mut notices);
        window.handle_pointer(
            pointer(PointerKind::Up(PointerButton::Left), 99, track.y),
            &mut notices,
        );

        let value = window
            .tab_mut(tab)
            .unwrap()
            .section_mut(0)
            .unwrap()
            .slider_mut(slider)
            .unwrap()
            .value();
        assert_eq!(value, 100.0);
        assert!(!window.is_capturing());
    }
}
