// Toggle control
// A boolean switch with a sync-without-side-effect external setter

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use serde::Deserialize;

use crate::core::Bounds;

use super::control::ControlColors;

/// Invoked with the new value on every user-driven toggle.
pub type ToggleCallback = Box<dyn FnMut(bool)>;

/// Configuration for a toggle. Unknown fields in YAML input are ignored.
#[derive(Deserialize)]
#[serde(default)]
pub struct ToggleConfig {
    pub title: String,
    pub value: bool,
    #[serde(skip)]
    pub on_change: Option<ToggleCallback>,
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self {
            title: "Toggle".to_string(),
            value: false,
            on_change: None,
        }
    }
}

const TRACK: &str = "╌╌╌╌";

/// A boolean switch.
pub struct Toggle {
    title: String,
    value: bool,
    on_change: Option<ToggleCallback>,
    colors: ControlColors,
    bounds: Bounds,
}

impl Toggle {
    pub(crate) fn new(config: ToggleConfig, colors: ControlColors) -> Self {
        Self {
            title: config.title,
            value: config.value,
            on_change: config.on_change,
            colors,
            bounds: Bounds::ZERO,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn value(&self) -> bool {
        self.value
    }

    /// Set the value from program code: state and visuals update, the
    /// callback does not fire. This is the "sync state without side effect"
    /// path, deliberately asymmetric with `Slider::set_value`.
    pub fn set_value(&mut self, value: bool) {
        self.value = value;
    }

    /// The user-interaction path: flip the value, then invoke the callback.
    /// The callback always observes the post-flip value.
    pub fn toggle(&mut self) {
        self.value = !self.value;
        let value = self.value;
        if let Some(on_change) = &mut self.on_change {
            on_change(value);
        }
    }

    pub(crate) fn set_colors(&mut self, colors: ControlColors) {
        self.colors = colors;
    }

    pub(crate) fn colors(&self) -> ControlColors {
        self.colors
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub(crate) fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    pub(crate) fn render_row(&mut self, f: &mut Frame, area: Rect) {
        self.bounds = area.into();

        // Switch graphic on the right edge: knob slides across the track
        let switch_width = (TRACK.chars().count() + 1) as u16;
        let title_width = area.width.saturating_sub(switch_width + 1) as usize;
        let mut title: String = self.title.chars().take(title_width).collect();
        while title.chars().count() < title_width {
            title.push(' ');
        }

        let track_style = Style::default()
            .fg(self.colors.muted.color())
            .bg(self.colors.track.color());
        let knob_style = if self.value {
            Style::default()
                .fg(self.colors.accent.color())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.colors.muted.color())
        };

        let mut spans = vec![
            Span::styled(title, Style::default().fg(self.colors.title.color())),
            Span::raw(" "),
        ];
        if self.value {
            spans.push(Span::styled(TRACK, track_style));
            spans.push(Span::styled("●", knob_style));
        } else {
            spans.push(Span::styled("●", knob_style));
            spans.push(Span::styled(TRACK, track_style));
        }

        f.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn colors() -> ControlColors {
        ControlColors::from_theme(&theme::dark())
    }

    fn counting_toggle(initial: bool) -> (Toggle, Rc<RefCell<Vec<bool>>>) {
        let seen: Rc<RefCell<Vec<bool>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let toggle = Toggle::new(
            ToggleConfig {
                title: "Enable".to_string(),
                value: initial,
                on_change: Some(Box::new(move |v| sink.borrow_mut().push(v))),
            },
            colors(),
        );
        (toggle, seen)
    }

    #[test]
    fn test_set_value_syncs_without_callback() {
        let (mut toggle, seen) = counting_toggle(false);
        toggle.set_value(true);
        assert!(toggle.value());
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_click_twice_round_trips_with_two_callbacks() {
        let (mut toggle, seen) = counting_toggle(false);
        toggle.toggle();
        toggle.toggle();
        assert!(!toggle.value());
        assert_eq!(seen.borrow().as_slice(), &[true, false]);
    }

    #[test]
    fn test_callback_observes_post_flip_value() {
        let (mut toggle, seen) = counting_toggle(true);
        toggle.toggle();
        assert_eq!(seen.borrow().as_slice(), &[false]);
    }

    #[test]
    fn test_default_config() {
        let config = ToggleConfig::default();
        assert_eq!(config.title, "Toggle");
        assert!(!config.value);
    }
}
