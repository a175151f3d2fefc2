// Control plumbing
// Shared variant dispatch, theme-derived colors, and pointer routing

use ratatui::{layout::Rect, Frame};

use crate::core::Bounds;
use crate::theme::{Rgb, Theme};

use super::{Button, Slider, Toggle};

/// Identifier of a control within its owning section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlId(pub(crate) usize);

/// Theme-derived colors cached on each control.
///
/// Updated by the top-down theme cascade; controls render purely from this
/// cache, so re-applying a theme is always safe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlColors {
    pub title: Rgb,
    pub muted: Rgb,
    pub accent: Rgb,
    pub track: Rgb,
}

impl ControlColors {
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            title: theme.text_primary,
            muted: theme.text_secondary,
            accent: theme.accent,
            track: theme.control_background.scale(theme.control_opacity),
        }
    }
}

/// A leaf widget: one of the three control variants.
pub enum Control {
    Toggle(Toggle),
    Button(Button),
    Slider(Slider),
}

impl Control {
    pub fn title(&self) -> &str {
        match self {
            Control::Toggle(toggle) => toggle.title(),
            Control::Button(button) => button.title(),
            Control::Slider(slider) => slider.title(),
        }
    }

    pub fn apply_theme(&mut self, theme: &Theme) {
        let colors = ControlColors::from_theme(theme);
        match self {
            Control::Toggle(toggle) => toggle.set_colors(colors),
            Control::Button(button) => button.set_colors(colors),
            Control::Slider(slider) => slider.set_colors(colors),
        }
    }

    /// Hit bounds of the control's row as of the last render.
    pub fn bounds(&self) -> Bounds {
        match self {
            Control::Toggle(toggle) => toggle.bounds(),
            Control::Button(button) => button.bounds(),
            Control::Slider(slider) => slider.bounds(),
        }
    }

    /// Forget stale bounds when the row scrolls out of view.
    pub(crate) fn clear_bounds(&mut self) {
        match self {
            Control::Toggle(toggle) => toggle.set_bounds(Bounds::ZERO),
            Control::Button(button) => button.set_bounds(Bounds::ZERO),
            Control::Slider(slider) => slider.set_bounds(Bounds::ZERO),
        }
    }

    pub(crate) fn render_row(&mut self, f: &mut Frame, area: Rect) {
        match self {
            Control::Toggle(toggle) => toggle.render_row(f, area),
            Control::Button(button) => button.render_row(f, area),
            Control::Slider(slider) => slider.render_row(f, area),
        }
    }

    /// Route a press that landed inside this control's row. A slider only
    /// arms its drag when the press is over the track itself.
    pub(crate) fn pointer_down(&mut self, x: u16, y: u16) {
        match self {
            Control::Toggle(toggle) => toggle.toggle(),
            Control::Button(button) => button.press(),
            Control::Slider(slider) => {
                if slider.track_bounds().contains(x, y) {
                    slider.begin_drag(x, y);
                }
            }
        }
    }

    /// Pointer movement; delivered to every control of the visible page so
    /// hover state and captured drags stay live outside the row bounds.
    pub(crate) fn pointer_move(&mut self, x: u16, y: u16) {
        match self {
            Control::Toggle(_) => {}
            Control::Button(button) => {
                let inside = button.bounds().contains(x, y);
                button.set_hovered(inside);
            }
            Control::Slider(slider) => slider.drag_to(x),
        }
    }

    /// Pointer release, anywhere on screen.
    pub(crate) fn pointer_up(&mut self, x: u16, y: u16) {
        match self {
            Control::Toggle(_) => {}
            Control::Button(button) => {
                let inside = button.bounds().contains(x, y);
                button.release(inside);
            }
            Control::Slider(slider) => slider.end_drag(),
        }
    }

    /// True while this control owns the pointer (mid-press or mid-drag).
    pub(crate) fn is_capturing(&self) -> bool {
        match self {
            Control::Toggle(_) => false,
            Control::Button(button) => button.is_pressed(),
            Control::Slider(slider) => slider.is_dragging(),
        }
    }
}
