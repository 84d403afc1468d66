//! Shared option-panel rendering for the dropdown/select/combobox family.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::style::Style;
use termkit_core::render;
use termkit_core::theme::Theme;

pub(crate) enum PanelRow<'a> {
    Header(&'a str),
    Separator,
    Empty(&'a str),
    Option {
        /// Index into the navigator's filtered list.
        filtered_index: usize,
        label: &'a str,
        disabled: bool,
        selected: bool,
        danger: bool,
    },
}

/// Renders rows with the highlighted option kept in view, scrolling whole
/// rows; draws a scrollbar when the list overflows.
pub(crate) fn render_rows(
    area: Rect,
    buf: &mut Buffer,
    theme: &Theme,
    rows: &[PanelRow<'_>],
    highlight: Option<usize>,
    offset: &mut usize,
) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let visible = area.height as usize;
    let highlight_row = highlight.and_then(|h| {
        rows.iter().position(
            |row| matches!(row, PanelRow::Option { filtered_index, .. } if *filtered_index == h),
        )
    });
    if let Some(row) = highlight_row {
        if row < *offset {
            *offset = row;
        } else if row >= *offset + visible {
            *offset = row + 1 - visible;
        }
    }
    if *offset + visible > rows.len() {
        *offset = rows.len().saturating_sub(visible);
    }

    let overflow = rows.len() > visible;
    let text_w = if overflow { area.width - 1 } else { area.width };

    for (slot, row) in rows.iter().skip(*offset).take(visible).enumerate() {
        let y = area.y + slot as u16;
        match row {
            PanelRow::Header(title) => {
                render::line(
                    buf,
                    area.x + 1,
                    y,
                    text_w.saturating_sub(1),
                    &render::truncate(title, text_w.saturating_sub(1)),
                    theme.text_muted.patch(Style::new().add_modifier(Modifier::BOLD)),
                );
            }
            PanelRow::Separator => {
                for dx in 0..text_w {
                    render::line(buf, area.x + dx, y, 1, "─", theme.border);
                }
            }
            PanelRow::Empty(message) => {
                let w = render::display_width(message).min(text_w);
                let x = area.x + (text_w - w) / 2;
                render::line(buf, x, y, w, message, theme.text_muted);
            }
            PanelRow::Option {
                filtered_index,
                label,
                disabled,
                selected,
                danger,
            } => {
                let highlighted = highlight == Some(*filtered_index);
                let mut style = if *disabled {
                    theme.text_disabled
                } else if *danger {
                    theme.danger
                } else {
                    theme.text_primary
                };
                if *selected {
                    style = style.patch(Style::new().add_modifier(Modifier::BOLD));
                }
                if highlighted {
                    style = style.patch(theme.highlight);
                    buf.set_style(Rect::new(area.x, y, text_w, 1), theme.highlight);
                }
                let mark = if *selected { "✓ " } else { "  " };
                render::line(buf, area.x, y, 2, mark, style);
                let w = text_w.saturating_sub(2);
                render::line(buf, area.x + 2, y, w, &render::truncate(label, w), style);
            }
        }
    }

    if overflow {
        render::scrollbar(
            buf,
            Rect::new(area.right() - 1, area.y, 1, area.height),
            *offset,
            rows.len(),
            visible,
            theme.border,
        );
    }
}
