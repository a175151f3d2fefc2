// Slider control
// Stepped numeric control; pointer and programmatic updates share one path

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use serde::Deserialize;

use crate::core::Bounds;
use crate::error::PanelError;
use crate::managers::DragController;

use super::control::ControlColors;

/// Invoked with the final quantized value on every effective change.
pub type SliderCallback = Box<dyn FnMut(f64)>;

/// Configuration for a slider. Unknown fields in YAML input are ignored.
#[derive(Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    pub title: String,
    pub value: f64,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    #[serde(skip)]
    pub on_change: Option<SliderCallback>,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            title: "Slider".to_string(),
            value: 0.0,
            min: 0.0,
            max: 100.0,
            step: 1.0,
            on_change: None,
        }
    }
}

/// Width of the rendered track in cells.
const TRACK_WIDTH: u16 = 20;

/// A stepped numeric control.
///
/// Invariant: the value is always `min + k*step` for some integer `k`,
/// clamped into `[min, max]`. Both pointer-driven and programmatic updates
/// run the same quantize+clamp path, so they are indistinguishable in result.
pub struct Slider {
    title: String,
    min: f64,
    max: f64,
    step: f64,
    value: f64,
    on_change: Option<SliderCallback>,
    drag: DragController<f64>,
    colors: ControlColors,
    bounds: Bounds,
    track_bounds: Bounds,
}

impl Slider {
    /// Fails fast on bounds that would break quantization: empty ranges and
    /// non-positive steps are rejected at creation, not at first use.
    pub(crate) fn new(config: SliderConfig, colors: ControlColors) -> Result<Self, PanelError> {
        if !(config.step > 0.0) {
            return Err(PanelError::SliderStep {
                title: config.title,
                step: config.step,
            });
        }
        if !(config.min < config.max) {
            return Err(PanelError::SliderRange {
                title: config.title,
                min: config.min,
                max: config.max,
            });
        }
        let mut slider = Self {
            title: config.title,
            min: config.min,
            max: config.max,
            step: config.step,
            value: config.min,
            on_change: config.on_change,
            drag: DragController::new(),
            colors,
            bounds: Bounds::ZERO,
            track_bounds: Bounds::ZERO,
        };
        // Initial value goes through the same quantize path, silently
        slider.value = slider.quantize(config.value);
        Ok(slider)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Snap a raw value onto the step grid anchored at `min`, clamped into
    /// the bounds.
    fn quantize(&self, raw: f64) -> f64 {
        let stepped = self.min + ((raw - self.min) / self.step).round() * self.step;
        stepped.clamp(self.min, self.max)
    }

    /// The raw value a pointer fraction along the track maps to.
    pub fn value_at_fraction(&self, fraction: f64) -> f64 {
        self.min + fraction.clamp(0.0, 1.0) * (self.max - self.min)
    }

    /// Current value as a fraction of the range.
    pub fn fraction(&self) -> f64 {
        (self.value - self.min) / (self.max - self.min)
    }

    /// Set the value from program code. Runs the identical quantize+clamp
    /// path as pointer-driven updates and — unlike `Toggle::set_value` —
    /// invokes the callback when the quantized value actually changes.
    /// Setting the current value again is an idempotent no-op.
    pub fn set_value(&mut self, raw: f64) {
        self.apply(raw);
    }

    /// Shared update path: quantize, store, then notify.
    fn apply(&mut self, raw: f64) {
        let next = self.quantize(raw);
        if next == self.value {
            return;
        }
        self.value = next;
        if let Some(on_change) = &mut self.on_change {
            on_change(next);
        }
    }

    /// Pointer-down over the row: start a drag session and jump the value to
    /// the pressed position.
    pub(crate) fn begin_drag(&mut self, x: u16, y: u16) {
        self.drag.begin(x, y, self.value);
        self.drag_to(x);
    }

    /// Pointer-move while dragging: recompute from the track fraction. The
    /// pointer may be far outside the track; the fraction clamps.
    pub(crate) fn drag_to(&mut self, x: u16) {
        if !self.drag.is_dragging() {
            return;
        }
        let fraction = self.track_bounds.fraction_x(x);
        self.apply(self.value_at_fraction(fraction));
    }

    pub(crate) fn end_drag(&mut self) {
        self.drag.end();
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub(crate) fn set_colors(&mut self, colors: ControlColors) {
        self.colors = colors;
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub(crate) fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
        if bounds == Bounds::ZERO {
            self.track_bounds = Bounds::ZERO;
        }
    }

    /// The draggable track region as of the last render.
    pub fn track_bounds(&self) -> Bounds {
        self.track_bounds
    }

    fn format_value(&self) -> String {
        if self.step.fract() == 0.0 {
            format!("{:.0}", self.value)
        } else {
            format!("{:.2}", self.value)
        }
    }

    pub(crate) fn render_row(&mut self, f: &mut Frame, area: Rect) {
        self.bounds = area.into();

        let value_text = self.format_value();
        let track_width = TRACK_WIDTH.min(area.width / 2);
        let title_width =
            area.width.saturating_sub(track_width + value_text.len() as u16 + 2) as usize;
        let mut title: String = self.title.chars().take(title_width).collect();
        while title.chars().count() < title_width {
            title.push(' ');
        }

        // Knob cell within the track
        let knob = if track_width > 1 {
            (self.fraction() * f64::from(track_width - 1)).round() as u16
        } else {
            0
        };

        self.track_bounds = Bounds::new(area.x + title_width as u16 + 1, area.y, track_width, 1);

        let filled_style = Style::default()
            .fg(self.colors.accent.color())
            .bg(self.colors.track.color());
        let empty_style = Style::default()
            .fg(self.colors.muted.color())
            .bg(self.colors.track.color());

        let mut spans = vec![
            Span::styled(title, Style::default().fg(self.colors.title.color())),
            Span::raw(" "),
        ];
        if knob > 0 {
            spans.push(Span::styled("━".repeat(knob as usize), filled_style));
        }
        spans.push(Span::styled("●", filled_style));
        let rest = track_width.saturating_sub(knob + 1);
        if rest > 0 {
            spans.push(Span::styled("─".repeat(rest as usize), empty_style));
        }
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            value_text,
            Style::default().fg(self.colors.accent.color()),
        ));

        f.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
