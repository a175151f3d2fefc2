// Utilities and helpers

pub mod icons;

pub use icons::resolve_icon;
