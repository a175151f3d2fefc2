// Theme system
// Color tokens, theme records, and the registry that keeps every live
// window on the same palette

mod builtin;
mod loader;

pub use builtin::{dark, light, midnight};
pub use loader::load_themes;

use std::collections::HashMap;
use std::fmt;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

use crate::error::PanelError;

/// A color token, serialized as a `#RRGGBB` string in theme files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed 0xRRGGBB literal.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }

    /// Convert to the host color type.
    pub fn color(self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }

    /// Linear interpolation toward `other`, `t` clamped into 0..=1.
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| -> u8 {
            (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8
        };
        Rgb {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
        }
    }

    /// Dim toward black by an opacity scalar. A terminal cell grid has no
    /// real alpha channel, so transparency renders as darkening.
    pub fn scale(self, opacity: f32) -> Rgb {
        Rgb::new(0, 0, 0).lerp(self, opacity)
    }
}

impl TryFrom<String> for Rgb {
    type Error = PanelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let hex = value
            .strip_prefix('#')
            .ok_or_else(|| PanelError::ColorFormat(value.clone()))?;
        if hex.len() != 6 {
            return Err(PanelError::ColorFormat(value));
        }
        let packed = u32::from_str_radix(hex, 16)
            .map_err(|_| PanelError::ColorFormat(value.clone()))?;
        Ok(Rgb::from_hex(packed))
    }
}

impl From<Rgb> for String {
    fn from(rgb: Rgb) -> Self {
        format!("#{:02X}{:02X}{:02X}", rgb.r, rgb.g, rgb.b)
    }
}

/// An immutable bundle of colors and transparencies applied uniformly across
/// a window's visual tree.
///
/// Every field is required: a theme file with a missing field fails to
/// deserialize, so partial themes cannot exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Window body background.
    pub main_background: Rgb,
    /// Section group background tier.
    pub section_background: Rgb,
    /// Control row background tier.
    pub control_background: Rgb,
    /// Selection and value emphasis color.
    pub accent: Rgb,
    /// Primary text.
    pub text_primary: Rgb,
    /// Secondary text (descriptions, section titles).
    pub text_secondary: Rgb,
    /// Disabled/locked text.
    pub text_disabled: Rgb,
    /// Window and track borders.
    pub border: Rgb,
    /// Opacity of an opaque window body.
    pub window_opacity: f32,
    /// Opacity of an acrylic window body.
    pub acrylic_opacity: f32,
    /// Opacity of control backgrounds and tracks.
    pub control_opacity: f32,
}

impl Theme {
    /// Reject transparency scalars outside 0.0..=1.0.
    pub fn validate(&self, name: &str) -> Result<(), PanelError> {
        let scalars = [
            ("window_opacity", self.window_opacity),
            ("acrylic_opacity", self.acrylic_opacity),
            ("control_opacity", self.control_opacity),
        ];
        for (field, value) in scalars {
            if !(0.0..=1.0).contains(&value) {
                return Err(PanelError::OpacityRange {
                    name: name.to_string(),
                    field,
                });
            }
        }
        Ok(())
    }
}

/// Handle for a registered theme listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    /// Get the internal ID of this handle.
    pub fn id(&self) -> u64 {
        self.0
    }
}

type ThemeListener = Box<dyn FnMut(&Theme)>;

/// Registry of named themes plus the single current selection.
///
/// Created once at process start and shared for the process lifetime. Only
/// `set_current` mutates the selection; on success every subscriber is
/// notified synchronously, in subscription order, before the call returns.
pub struct ThemeRegistry {
    themes: HashMap<String, Theme>,
    current: String,
    /// Copy of the current theme, kept so `current()` never fails.
    active: Theme,
    subscribers: Vec<(SubscriptionId, ThemeListener)>,
    next_id: u64,
}

impl ThemeRegistry {
    /// Create a registry with the builtin themes installed and "Dark" current.
    pub fn new() -> Self {
        let mut themes = HashMap::new();
        themes.insert("Dark".to_string(), dark());
        themes.insert("Light".to_string(), light());
        themes.insert("Midnight".to_string(), midnight());
        Self {
            themes,
            current: "Dark".to_string(),
            active: dark(),
            subscribers: Vec::new(),
            next_id: 1, // Start at 1, 0 can be used as invalid handle
        }
    }

    /// Register a theme under a name. Re-registering a name replaces the
    /// stored theme; if the name is the current one, the active copy is
    /// refreshed without notifying subscribers (only `set_current` notifies).
    pub fn register(&mut self, name: &str, theme: Theme) {
        if name == self.current {
            self.active = theme.clone();
        }
        self.themes.insert(name.to_string(), theme);
    }

    /// Check whether a theme name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.themes.contains_key(name)
    }

    /// Registered theme names, sorted for stable display order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.themes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Name of the current theme.
    pub fn current_name(&self) -> &str {
        &self.current
    }

    /// The current theme.
    pub fn current(&self) -> &Theme {
        &self.active
    }

    /// Switch the current theme.
    ///
    /// An unknown name fails with `ThemeNotFound` and changes nothing: the
    /// switch is atomic, all-or-nothing. On success every subscriber runs
    /// synchronously, in subscription order, before this returns, so two
    /// back-to-back switches can never interleave their notifications.
    pub fn set_current(&mut self, name: &str) -> Result<(), PanelError> {
        let theme = self
            .themes
            .get(name)
            .cloned()
            .ok_or_else(|| PanelError::ThemeNotFound(name.to_string()))?;
        self.current = name.to_string();
        self.active = theme;
        for (_, listener) in &mut self.subscribers {
            listener(&self.active);
        }
        Ok(())
    }

    /// Subscribe a listener to theme switches. Listeners are expected to be
    /// idempotent re-appliers of visual properties.
    pub fn subscribe(&mut self, listener: ThemeListener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, listener));
        id
    }

    /// Remove a listener. Returns false if the handle was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ThemeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeRegistry")
            .field("themes", &self.names())
            .field("current", &self.current)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
