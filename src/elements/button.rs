// Button control
// Trigger-only control; fires once per completed press-then-release-inside cycle

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

/// Invoked once per completed click.
pub type ButtonCallback = Box<dyn FnMut()>;

/// Visual variant. Styling only, never behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    #[default]
    Default,
    Primary,
}

/// Configuration for a button. Unknown fields in YAML input are ignored.
#[derive(Deserialize)]
#[serde(default)]
pub struct ButtonConfig {
    pub title: String,
    pub variant: ButtonVariant,
    #[serde(skip)]
    pub on_click: Option<ButtonCallback>,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            title: "Button".to_string(),
            variant: ButtonVariant::Default,
            on_click: None,
        }
    }
}

/// A trigger control with no persisted value. Hover and pressed states are
/// pure functions of pointer state.
pub struct Button {
    title: String,
    variant: ButtonVariant,
    hovered: bool,
    pressed: bool,
    on_click: Option<ButtonCallback>,
    colors: ControlColors,
    bounds: Bounds,
}

impl Button {
    pub(crate) fn new(config: ButtonConfig, colors: ControlColors) -> Self {
        Self {
            title: config.title,
            variant: config.variant,
            hovered: false,
            pressed: false,
            on_click: config.on_click,
            colors,
            bounds: Bounds::ZERO,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn variant(&self) -> ButtonVariant {
        self.variant
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub(crate) fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    /// Pointer-down over the button. Arms the click; nothing fires yet.
    pub fn press(&mut self) {
        self.pressed = true;
    }

    /// Pointer-up, anywhere. Fires the callback exactly when the press was
    /// armed and the release landed inside the bounds. Returns whether it
    /// fired. The pressed flag clears before the callback runs.
    pub fn release(&mut self, inside: bool) -> bool {
        let fire = self.pressed && inside;
        self.pressed = false;
        if fire {
            if let Some(on_click) = &mut self.on_click {
                on_click();
            }
        }
        fire
    }

    pub(crate) fn set_colors(&mut self, colors: ControlColors) {
        self.colors = colors;
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub(crate) fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    pub(crate) fn render_row(&mut self, f: &mut Frame, area: Rect) {
        self.bounds = area.into();

        let label = format!("[ {} ]", self.title);
        let mut style = match self.variant {
            ButtonVariant::Primary => Style::default()
                .fg(self.colors.accent.color())
                .add_modifier(Modifier::BOLD),
            ButtonVariant::Default => Style::default().fg(self.colors.title.color()),
        };
        if self.hovered {
            style = style.add_modifier(Modifier::BOLD);
        }
        if self.pressed {
            style = style.add_modifier(Modifier::REVERSED);
        }

        f.render_widget(
            Paragraph::new(Line::from(Span::styled(label, style))),
            area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn counting_button() -> (Button, Rc<RefCell<u32>>) {
        let clicks = Rc::new(RefCell::new(0u32));
        let sink = Rc::clone(&clicks);
        let button = Button::new(
            ButtonConfig {
                title: "Apply".to_string(),
                variant: ButtonVariant::Primary,
                on_click: Some(Box::new(move || *sink.borrow_mut() += 1)),
            },
            ControlColors::from_theme(&theme::dark()),
        );
        (button, clicks)
    }

    #[test]
    fn test_press_release_inside_fires_once() {
        let (mut button, clicks) = counting_button();
        button.press();
        assert!(button.is_pressed());
        assert_eq!(*clicks.borrow(), 0); // nothing on press-down

        assert!(button.release(true));
        assert!(!button.is_pressed());
        assert_eq!(*clicks.borrow(), 1);
    }

    #[test]
    fn test_release_outside_does_not_fire() {
        let (mut button, clicks) = counting_button();
        button.press();
        assert!(!button.release(false));
        assert_eq!(*clicks.borrow(), 0);
        assert!(!button.is_pressed());
    }

    #[test]
    fn test_release_without_press_does_not_fire() {
        let (mut button, clicks) = counting_button();
        assert!(!button.release(true));
        assert_eq!(*clicks.borrow(), 0);
    }

    #[test]
    fn test_hover_is_pure_pointer_state() {
        let (mut button, _) = counting_button();
        assert!(!button.is_hovered());
        button.set_hovered(true);
        assert!(button.is_hovered());
        button.set_hovered(false);
        assert!(!button.is_hovered());
    }
}
