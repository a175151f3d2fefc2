// Toast stack
// Renders live notifications in the bottom-left corner, stacked upward

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

use crate::core::ActiveNotification;
use crate::theme::Theme;
use crate::utilities::resolve_icon;

/// Render the live notifications, oldest on top of the stack, inset by 1
/// from the left and bottom edges.
pub fn render_toasts(f: &mut Frame, area: Rect, notices: &[ActiveNotification], theme: &Theme) {
    if notices.is_empty() {
        return;
    }

    // Normalize all toasts to the widest line
    let mut max_width = 0usize;
    let mut lines: Vec<(String, String)> = Vec::new();
    for entry in notices {
        let note = &entry.notification;
        let icon = resolve_icon(note.icon.as_deref().unwrap_or("info"));
        let head = format!(" {icon} {} ", note.title);
        let body = if note.content.is_empty() {
            String::new()
        } else {
            format!("{} ", note.content)
        };
        max_width = max_width.max(head.chars().count() + body.chars().count());
        lines.push((head, body));
    }

    let bg = theme.section_background.scale(theme.control_opacity);
    let head_style = Style::default()
        .fg(theme.accent.color())
        .bg(bg.color())
        .add_modifier(Modifier::BOLD);
    let body_style = Style::default().fg(theme.text_primary.color()).bg(bg.color());

    let mut y_offset = 0u16;
    for (head, body) in lines.iter().rev() {
        let used = head.chars().count() + body.chars().count();
        let padding = " ".repeat(max_width.saturating_sub(used));

        let toast_area = Rect {
            x: area.x + 1,
            y: area
                .y
                .saturating_add(area.height.saturating_sub(2 + y_offset)),
            width: (max_width as u16).min(area.width.saturating_sub(2)),
            height: 1,
        };
        if toast_area.width == 0 {
            return;
        }

        f.render_widget(Clear, toast_area);
        let line = Line::from(vec![
            Span::styled(head.clone(), head_style),
            Span::styled(body.clone(), body_style),
            Span::styled(padding, body_style),
        ]);
        f.render_widget(Paragraph::new(line), toast_area);

        y_offset += 1;
        if y_offset >= area.height {
            return;
        }
    }
}
