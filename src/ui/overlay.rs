//! Emoji overlay widget
//!
//! A bordered box centered over whatever is behind it: the query line on
//! top, the filtered entries below.

use crate::picker::FilterSelectList;
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Widget},
};

/// Borders plus the query line
const CHROME_ROWS: u16 = 3;

/// Area of the overlay box inside `area`
///
/// The box is `width_percent` of the available width and `height` rows
/// tall, both clamped to `area`, and centered in both directions.
#[must_use]
pub fn overlay_rect(area: Rect, width_percent: u16, height: u16) -> Rect {
    let width_percent = width_percent.clamp(1, 100);
    #[allow(clippy::cast_possible_truncation)]
    let width = ((u32::from(area.width) * u32::from(width_percent)) / 100) as u16;
    let width = width.max(1).min(area.width);
    let height = height.min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Number of list rows visible inside an overlay box
#[must_use]
pub const fn list_height(overlay: Rect) -> u16 {
    overlay.height.saturating_sub(CHROME_ROWS)
}

/// Widget rendering a [`FilterSelectList`] as a centered overlay
pub struct EmojiOverlay<'a> {
    picker: &'a FilterSelectList,
    theme: &'a Theme,
    title: &'a str,
    width_percent: u16,
    height: u16,
}

impl<'a> EmojiOverlay<'a> {
    /// Create an overlay with the default geometry (40% wide, 20 rows)
    #[must_use]
    pub const fn new(picker: &'a FilterSelectList, theme: &'a Theme) -> Self {
        Self {
            picker,
            theme,
            title: "Emoji",
            width_percent: 40,
            height: 20,
        }
    }

    /// Set the box title
    #[must_use]
    pub const fn title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    /// Set the box geometry
    #[must_use]
    pub const fn size(mut self, width_percent: u16, height: u16) -> Self {
        self.width_percent = width_percent;
        self.height = height;
        self
    }

    fn render_query(&self, area: Rect, buf: &mut Buffer) {
        let query = self.picker.query();
        let (before, after) = query.text().split_at(query.caret());
        let caret = Style::default().add_modifier(Modifier::SLOW_BLINK);

        let line = Line::from(vec![
            Span::styled("> ", self.theme.dimmed_style()),
            Span::styled(before, self.theme.input_style()),
            Span::styled("│", caret),
            Span::styled(after, self.theme.input_style()),
        ]);
        Paragraph::new(line).render(area, buf);
    }

    fn render_list(&self, area: Rect, buf: &mut Buffer) {
        let Some(cursor) = self.picker.cursor() else {
            Paragraph::new(Span::styled(" No matching emoji", self.theme.dimmed_style()))
                .render(area, buf);
            return;
        };

        let visible = area.height as usize;
        let mut start = self.picker.scroll_offset();
        if cursor >= start + visible {
            start = cursor + 1 - visible;
        }

        let items: Vec<ListItem> = self
            .picker
            .view()
            .enumerate()
            .skip(start)
            .take(visible)
            .map(|(pos, entry)| {
                let focused = pos == cursor;
                let key_style = if focused {
                    self.theme.focus_style()
                } else {
                    self.theme.dimmed_style()
                };
                let line = Line::from(vec![
                    Span::raw(" "),
                    Span::raw(entry.value.as_str()),
                    Span::raw("  "),
                    Span::styled(entry.key.as_str(), key_style),
                ]);

                if focused {
                    ListItem::new(line).style(self.theme.focus_style())
                } else {
                    ListItem::new(line).style(self.theme.item_style())
                }
            })
            .collect();

        List::new(items).render(area, buf);
    }
}

impl Widget for EmojiOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rect = overlay_rect(area, self.width_percent, self.height);
        Clear.render(rect, buf);

        let title = format!(
            " {} ({}/{}) ",
            self.title,
            self.picker.view_len(),
            self.picker.source().len()
        );
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .style(self.theme.dialog_style())
            .title(Span::styled(title, self.theme.title_style()));

        let inner = block.inner(rect);
        block.render(rect, buf);

        if inner.height == 0 {
            return;
        }

        let [header, body] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(inner);
        self.render_query(header, buf);
        if body.height > 0 {
            self.render_list(body, buf);
        }
    }
}
