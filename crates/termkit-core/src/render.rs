//! Width-aware buffer helpers shared by the catalog.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

/// Display width of `text` in cells, saturated to `u16`.
pub fn display_width(text: &str) -> u16 {
    text.width().min(u16::MAX as usize) as u16
}

/// Writes `text` at `(x, y)`, clipped to `max_cols` display columns. A wide
/// character that would straddle the limit is dropped rather than split.
pub fn line(buf: &mut Buffer, x: u16, y: u16, max_cols: u16, text: &str, style: Style) {
    if max_cols == 0 {
        return;
    }
    let mut dx = 0u16;
    let mut tmp = [0u8; 4];
    for ch in text.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0) as u16;
        if w == 0 {
            continue;
        }
        if dx + w > max_cols {
            return;
        }
        if let Some(cell) = buf.cell_mut((x + dx, y)) {
            cell.set_style(style);
            cell.set_symbol(ch.encode_utf8(&mut tmp));
        }
        dx += 1;
        if w == 2 {
            if let Some(cell) = buf.cell_mut((x + dx, y)) {
                cell.set_style(style);
                cell.set_symbol("");
            }
            dx += 1;
        }
    }
}

/// Truncates `text` to `max_cols`, appending `…` when anything was cut.
pub fn truncate(text: &str, max_cols: u16) -> String {
    if display_width(text) <= max_cols {
        return text.to_string();
    }
    if max_cols == 0 {
        return String::new();
    }
    let budget = max_cols - 1;
    let mut out = String::new();
    let mut used = 0u16;
    for ch in text.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0) as u16;
        if used + w > budget {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// A `width` × `height` rect centered inside `area`, shrunk to fit.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect::new(
        area.x + (area.width - w) / 2,
        area.y + (area.height - h) / 2,
        w,
        h,
    )
}

/// Applies `style` over every cell of `area` without touching symbols;
/// used as the backdrop dim under modal layers.
pub fn dim(buf: &mut Buffer, area: Rect, style: Style) {
    buf.set_style(area, style);
}

/// Fills `area` with `symbol`.
pub fn fill(buf: &mut Buffer, area: Rect, symbol: &str, style: Style) {
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_style(style);
                cell.set_symbol(symbol);
            }
        }
    }
}

/// One-column scrollbar for an item list scrolled to `offset` with
/// `visible` of `total` rows shown.
pub fn scrollbar(
    buf: &mut Buffer,
    area: Rect,
    offset: usize,
    total: usize,
    visible: usize,
    style: Style,
) {
    if area.height == 0 || total == 0 || visible == 0 || total <= visible {
        return;
    }
    let track = area.height as f64;
    let thumb = ((visible as f64 / total as f64) * track).round().clamp(1.0, track) as u16;
    let max_offset = (total - visible).max(1) as f64;
    let top = ((offset as f64 / max_offset) * (track - thumb as f64))
        .round()
        .clamp(0.0, (track - thumb as f64).max(0.0)) as u16;
    for dy in 0..area.height {
        let symbol = if dy >= top && dy < top + thumb { "█" } else { "│" };
        if let Some(cell) = buf.cell_mut((area.x, area.y + dy)) {
            cell.set_style(style);
            cell.set_symbol(symbol);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_clips_at_the_column_budget() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 1));
        line(&mut buf, 0, 0, 3, "abcdef", Style::default());
        assert_eq!(buf[(0, 0)].symbol(), "a");
        assert_eq!(buf[(2, 0)].symbol(), "c");
        assert_eq!(buf[(3, 0)].symbol(), " ");
    }

    #[test]
    fn line_never_splits_wide_chars() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 1));
        line(&mut buf, 0, 0, 3, "你好", Style::default());
        assert_eq!(buf[(0, 0)].symbol(), "你");
        assert_eq!(buf[(3, 0)].symbol(), " ");
    }

    #[test]
    fn truncate_accounts_for_the_ellipsis() {
        assert_eq!(truncate("Ethereum", 20), "Ethereum");
        assert_eq!(truncate("Ethereum", 5), "Ethe…");
        assert_eq!(truncate("你好世界", 5), "你好…");
        assert_eq!(truncate("abc", 0), "");
    }

    #[test]
    fn centered_shrinks_to_fit() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(centered(area, 40, 10), Rect::new(20, 7, 40, 10));
        assert_eq!(centered(area, 200, 50), area);
    }
}
