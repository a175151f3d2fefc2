// Section container
// A titled group of controls; pure grouping node with no state of its own

use serde::Deserialize;

use crate::error::PanelError;
use crate::theme::{Rgb, Theme};

use super::control::{Control, ControlColors, ControlId};
use super::{Button, ButtonConfig, Slider, SliderConfig, Toggle, ToggleConfig};

/// Configuration for a section. Unknown fields in YAML input are ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SectionConfig {
    pub title: String,
}

impl Default for SectionConfig {
    fn default() -> Self {
        Self {
            title: "Section".to_string(),
        }
    }
}

/// Ordered container of controls under a titled group. Insertion order is
/// display order. Duplicate titles are permitted everywhere — distinctness
/// is a display concern only.
pub struct Section {
    title: String,
    controls: Vec<Control>,
    /// Colors stamped onto controls created after the last theme change.
    colors: ControlColors,
    title_color: Rgb,
}

impl Section {
    pub(crate) fn new(config: SectionConfig, theme: &Theme) -> Self {
        Self {
            title: config.title,
            controls: Vec::new(),
            colors: ControlColors::from_theme(theme),
            title_color: theme.text_secondary,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Append a toggle control.
    pub fn create_toggle(&mut self, config: ToggleConfig) -> ControlId {
        self.push(Control::Toggle(Toggle::new(config, self.colors)))
    }

    /// Append a button control.
    pub fn create_button(&mut self, config: ButtonConfig) -> ControlId {
        self.push(Control::Button(Button::new(config, self.colors)))
    }

    /// Append a slider control. Fails fast on an empty range or a
    /// non-positive step.
    pub fn create_slider(&mut self, config: SliderConfig) -> Result<ControlId, PanelError> {
        let slider = Slider::new(config, self.colors)?;
        Ok(self.push(Control::Slider(slider)))
    }

    fn push(&mut self, control: Control) -> ControlId {
        self.controls.push(control);
        ControlId(self.controls.len() - 1)
    }

    pub fn controls(&self) -> &[Control] {
        &self.controls
    }

    pub(crate) fn controls_mut(&mut self) -> &mut [Control] {
        &mut self.controls
    }

    pub fn control(&self, id: ControlId) -> Option<&Control> {
        self.controls.get(id.0)
    }

    pub fn control_mut(&mut self, id: ControlId) -> Option<&mut Control> {
        self.controls.get_mut(id.0)
    }

    /// Typed accessor for external `set_value` calls.
    pub fn toggle_mut(&mut self, id: ControlId) -> Option<&mut Toggle> {
        match self.controls.get_mut(id.0) {
            Some(Control::Toggle(toggle)) => Some(toggle),
            _ => None,
        }
    }

    /// Typed accessor for external `set_value` calls.
    pub fn slider_mut(&mut self, id: ControlId) -> Option<&mut Slider> {
        match self.controls.get_mut(id.0) {
            Some(Control::Slider(slider)) => Some(slider),
            _ => None,
        }
    }

    pub fn button_mut(&mut self, id: ControlId) -> Option<&mut Button> {
        match self.controls.get_mut(id.0) {
            Some(Control::Button(button)) => Some(button),
            _ => None,
        }
    }

    pub(crate) fn title_color(&self) -> Rgb {
        self.title_color
    }

    /// Idempotent re-application of theme colors, cascading to controls.
    pub fn apply_theme(&mut self, theme: &Theme) {
        self.colors = ControlColors::from_theme(theme);
        self.title_color = theme.text_secondary;
        for control in &mut self.controls {
            control.apply_theme(theme);
        }
    }

    /// Rows this section occupies in the page: title, controls, spacer.
    pub(crate) fn row_count(&self) -> usize {
        self.controls.len() + 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme;

    #[test]
    fn test_create_appends_in_order() {
        let mut section = Section::new(SectionConfig::default(), &theme::dark());
        section.create_toggle(ToggleConfig {
            title: "A".to_string(),
            ..ToggleConfig::default()
        });
        section.create_button(ButtonConfig {
            title: "B".to_string(),
            ..ButtonConfig::default()
        });
        section
            .create_slider(SliderConfig {
                title: "C".to_string(),
                ..SliderConfig::default()
            })
            .unwrap();

        let titles: Vec<&str> = section.controls().iter().map(|c| c.title()).collect();
        assert_eq!(titles, vec!["A", "B", "C"]);
        assert_eq!(section.row_count(), 5);
    }

    #[test]
    fn test_duplicate_titles_are_permitted() {
        let mut section = Section::new(SectionConfig::default(), &theme::dark());
        let first = section.create_toggle(ToggleConfig {
            title: "Same".to_string(),
            ..ToggleConfig::default()
        });
        let second = section.create_toggle(ToggleConfig {
            title: "Same".to_string(),
            ..ToggleConfig::default()
        });
        assert_ne!(first, second);
        assert_eq!(section.controls().len(), 2);
    }

    #[test]
    fn test_typed_accessors() {
        let mut section = Section::new(SectionConfig::default(), &theme::dark());
        let toggle_id = section.create_toggle(ToggleConfig::default());
        let slider_id = section.create_slider(SliderConfig::default()).unwrap();

        assert!(section.toggle_mut(toggle_id).is_some());
        assert!(section.slider_mut(toggle_id).is_none());
        assert!(section.slider_mut(slider_id).is_some());
        assert!(section.button_mut(slider_id).is_none());

        section.toggle_mut(toggle_id).unwrap().set_value(true);
        assert!(matches!(
            section.control(toggle_id),
            Some(Control::Toggle(t)) if t.value()
        ));
    }

    #[test]
    fn test_invalid_slider_rejected_without_append() {
        let mut section = Section::new(SectionConfig::default(), &theme::dark());
        let result = section.create_slider(SliderConfig {
            step: -1.0,
            ..SliderConfig::default()
        });
        assert!(result.is_err());
        assert!(section.controls().is_empty());
    }
}
