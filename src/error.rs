// Error types
// Validation and state-consistency failures surfaced by the toolkit

use thiserror::Error;

/// Errors surfaced by the toolkit.
///
/// Selecting a locked tab is deliberately absent: it is reported through the
/// notification sink, never propagated as an error.
#[derive(Debug, Error)]
pub enum PanelError {
    /// A theme switch named a theme that was never registered.
    /// The current theme is left unchanged.
    #[error("theme '{0}' is not registered")]
    ThemeNotFound(String),

    /// Slider bounds rejected at creation time.
    #[error("slider '{title}': min {min} must be less than max {max}")]
    SliderRange { title: String, min: f64, max: f64 },

    /// Slider step rejected at creation time.
    #[error("slider '{title}': step {step} must be positive")]
    SliderStep { title: String, step: f64 },

    /// A color literal that is not of the form #RRGGBB.
    #[error("invalid color literal '{0}', expected #RRGGBB")]
    ColorFormat(String),

    /// A theme transparency scalar outside 0.0..=1.0.
    #[error("theme '{name}': {field} must be within 0.0..=1.0")]
    OpacityRange { name: String, field: &'static str },

    /// Theme file could not be read.
    #[error("failed to read theme file: {0}")]
    Io(#[from] std::io::Error),

    /// Theme file could not be parsed (includes incomplete theme records).
    #[error("failed to parse theme file: {0}")]
    Parse(#[from] serde_yaml::Error),
}
