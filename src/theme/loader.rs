// Theme file loading
// User themes load from a YAML file mapping theme names to full records

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::Theme;
use crate::error::PanelError;

/// Parse a YAML document of named themes.
///
/// Every record must be complete; serde rejects missing fields, and
/// transparency scalars are range-checked afterward. Unknown fields inside a
/// record are ignored.
pub fn parse_themes(contents: &str) -> Result<HashMap<String, Theme>, PanelError> {
    let themes: HashMap<String, Theme> = serde_yaml::from_str(contents)?;
    for (name, theme) in &themes {
        theme.validate(name)?;
    }
    Ok(themes)
}

/// Load themes from a YAML file on disk.
pub fn load_themes(path: &Path) -> Result<HashMap<String, Theme>, PanelError> {
    let contents = fs::read_to_string(path)?;
    parse_themes(&contents)
}
