// PanelKit Library
// Declarative themed panel UI toolkit for terminal applications

// Core infrastructure - context, events, notifications
pub mod core;

// Errors - validation and state-consistency failures
pub mod error;

// GUI elements - windows, tabs, sections, controls
pub mod elements;

// Managers - drag and animation state machines
pub mod managers;

// Themes - color tokens, builtin palettes, registry
pub mod theme;

// Utilities - icon table and helpers
pub mod utilities;

// Re-export commonly used items for convenience
pub use core::{
    App, AppEvent, Bounds, EventHandler, Notification, NotificationCenter, Notifier,
    PointerButton, PointerEvent, PointerKind,
};
pub use elements::{
    Button, ButtonConfig, ButtonVariant, Control, ControlId, Section, SectionConfig, Slider,
    SliderConfig, Tab, TabConfig, TabId, Toggle, ToggleConfig, Window, WindowConfig,
};
pub use error::PanelError;
pub use managers::{DragController, Tween};
pub use theme::{Rgb, SubscriptionId, Theme, ThemeRegistry};
pub use utilities::resolve_icon;
