// Icon table
// Symbolic icon names resolve to display glyphs; unknown names pass through

/// Resolve a symbolic icon name to a terminal glyph.
///
/// Unknown names are returned unchanged (identity fallback), never an error,
/// so callers can pass a literal glyph directly.
pub fn resolve_icon(name: &str) -> &str {
    match name {
        "home" => "⌂",
        "dashboard" => "▦",
        "settings" => "⚙",
        "palette" => "✎",
        "search" => "⌕",
        "lock" => "⚿",
        "star" => "★",
        "info" => "ℹ",
        "warning" => "⚠",
        "check" => "✓",
        "cross" => "✗",
        "audio" => "♫",
        _ => name,
    }
}
