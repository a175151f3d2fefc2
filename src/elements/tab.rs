// Tab component
// Owns one section tree and one page surface; participates in the
// single-active-tab protocol driven by the window

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use serde::Deserialize;

use crate::core::Bounds;
use crate::theme::Theme;

use super::section::{Section, SectionConfig};

/// Configuration for a tab. Unknown fields in YAML input are ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TabConfig {
    pub title: String,
    /// Symbolic icon name, resolved through the icon table at render time.
    pub icon: String,
    pub desc: String,
    /// A locked tab can never become the current tab.
    pub locked: bool,
}

impl Default for TabConfig {
    fn default() -> Self {
        Self {
            title: "Tab".to_string(),
            icon: String::new(),
            desc: String::new(),
            locked: false,
        }
    }
}

/// A tab: sidebar button plus a page of sections.
pub struct Tab {
    title: String,
    icon: String,
    desc: String,
    locked: bool,
    sections: Vec<Section>,
    /// Page surface state: shown only while this tab is current.
    page_visible: bool,
    scroll_offset: usize,
    /// Sidebar button bounds as of the last render.
    button_bounds: Bounds,
    theme: Theme,
}

impl Tab {
    pub(crate) fn new(config: TabConfig, theme: &Theme) -> Self {
        Self {
            title: config.title,
            icon: config.icon,
            desc: config.desc,
            locked: config.locked,
            sections: Vec::new(),
            page_visible: false,
            scroll_offset: 0,
            button_bounds: Bounds::ZERO,
            theme: theme.clone(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }

    pub fn desc(&self) -> &str {
        &self.desc
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn page_visible(&self) -> bool {
        self.page_visible
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Append a section. Insertion order is display order, top to bottom.
    pub fn create_section(&mut self, config: SectionConfig) -> &mut Section {
        let index = self.sections.len();
        self.sections.push(Section::new(config, &self.theme));
        &mut self.sections[index]
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section_mut(&mut self, index: usize) -> Option<&mut Section> {
        self.sections.get_mut(index)
    }

    /// Selection protocol: show this tab's page.
    pub(crate) fn show_page(&mut self) {
        self.page_visible = true;
    }

    /// Selection protocol: hide this tab's page and forget stale hit bounds
    /// so its controls are unreachable while another tab is current.
    pub(crate) fn hide_page(&mut self) {
        self.page_visible = false;
        for section in &mut self.sections {
            for control in section.controls_mut() {
                control.clear_bounds();
            }
        }
    }

    /// Idempotent re-application of theme colors, cascading to sections.
    pub fn apply_theme(&mut self, theme: &Theme) {
        self.theme = theme.clone();
        for section in &mut self.sections {
            section.apply_theme(theme);
        }
    }

    pub(crate) fn button_bounds(&self) -> Bounds {
        self.button_bounds
    }

    pub(crate) fn set_button_bounds(&mut self, bounds: Bounds) {
        self.button_bounds = bounds;
    }

    /// Rows the page content occupies: optional description header plus the
    /// sections with their spacers.
    fn content_rows(&self) -> usize {
        let desc_rows = if self.desc.is_empty() { 0 } else { 2 };
        desc_rows + self.sections.iter().map(Section::row_count).sum::<usize>()
    }

    /// Wheel scroll over the page, clamped to the content height.
    pub(crate) fn scroll_by(&mut self, delta: i32, viewport: usize) {
        let max_scroll = self.content_rows().saturating_sub(viewport);
        let next = i64::try_from(self.scroll_offset).unwrap_or(i64::MAX) + i64::from(delta);
        self.scroll_offset = next.clamp(0, max_scroll as i64) as usize;
    }

    /// Route a press inside the page. Returns true if a control took it.
    pub(crate) fn pointer_down(&mut self, x: u16, y: u16) -> bool {
        for section in &mut self.sections {
            for control in section.controls_mut() {
                if control.bounds().contains(x, y) {
                    control.pointer_down(x, y);
                    return true;
                }
            }
        }
        false
    }

    /// Pointer movement: keeps hover state and captured drags live.
    pub(crate) fn pointer_move(&mut self, x: u16, y: u16) {
        for section in &mut self.sections {
            for control in section.controls_mut() {
                control.pointer_move(x, y);
            }
        }
    }

    /// Pointer release, anywhere on screen.
    pub(crate) fn pointer_up(&mut self, x: u16, y: u16) {
        for section in &mut self.sections {
            for control in section.controls_mut() {
                control.pointer_up(x, y);
            }
        }
    }

    /// True while any control of this page owns the pointer.
    pub(crate) fn is_capturing(&self) -> bool {
        self.sections
            .iter()
            .flat_map(|s| s.controls().iter())
            .any(|c| c.is_capturing())
    }

    /// Render the page surface into `area`.
    pub(crate) fn render_page(&mut self, f: &mut Frame, area: Rect) {
        if !self.page_visible || area.width == 0 || area.height == 0 {
            return;
        }

        let viewport = area.height as usize;
        let max_scroll = self.content_rows().saturating_sub(viewport);
        self.scroll_offset = self.scroll_offset.min(max_scroll);

        let scroll = self.scroll_offset;
        let mut virtual_row = 0usize;
        let place = move |virtual_row: usize| -> Option<Rect> {
            let visible = virtual_row
                .checked_sub(scroll)
                .filter(|row| *row < viewport)?;
            Some(Rect {
                x: area.x,
                y: area.y + visible as u16,
                width: area.width,
                height: 1,
            })
        };

        if !self.desc.is_empty() {
            if let Some(row) = place(virtual_row) {
                let desc_style = Style::default()
                    .fg(self.theme.text_secondary.color())
                    .add_modifier(Modifier::ITALIC);
                f.render_widget(
                    Paragraph::new(Line::from(Span::styled(self.desc.clone(), desc_style))),
                    row,
                );
            }
            virtual_row += 2;
        }

        for section in &mut self.sections {
            if let Some(row) = place(virtual_row) {
                let title_style = Style::default()
                    .fg(section.title_color().color())
                    .add_modifier(Modifier::BOLD);
                f.render_widget(
                    Paragraph::new(Line::from(Span::styled(
                        section.title().to_string(),
                        title_style,
                    ))),
                    row,
                );
            }
            virtual_row += 1;

            for control in section.controls_mut() {
                match place(virtual_row) {
                    Some(row) => {
                        // Indent control rows under the section title
                        let indent = row.width.min(2);
                        let row = Rect {
                            x: row.x + indent,
                            width: row.width - indent,
                            ..row
                        };
                        control.render_row(f, row);
                    }
                    None => control.clear_bounds(),
                }
                virtual_row += 1;
            }

            virtual_row += 1; // spacer between sections
        }
    }
}
