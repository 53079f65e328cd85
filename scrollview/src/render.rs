use crate::buffer::{Buffer, Cell};
use crate::layout::Rect;
use crate::text::char_width;
use crate::types::{Color, Style};
use crate::view::ScrollView;

/// Draw the view into `buf` at its on-screen rectangle: the visible window
/// of the content, shifted up by the scroll offset, plus the scrollbar in
/// the rightmost column when the content overflows.
pub fn render(view: &ScrollView, rect: Rect, buf: &mut Buffer) {
    if rect.is_empty() {
        return;
    }

    // Erase the widget area so rows vacated by a scroll don't linger.
    for y in rect.y..rect.bottom() {
        for x in rect.x..rect.right() {
            buf.set(x, y, Cell::default());
        }
    }

    let show_scrollbar = view.is_overflowing();
    let content_width = if show_scrollbar {
        rect.width - 1
    } else {
        rect.width
    };

    let visible = view.visible_rows();
    for (child, child_rect) in view.children().iter().zip(view.child_rects()) {
        if child_rect.bottom() <= visible.start || child_rect.y >= visible.end {
            continue;
        }

        let mut lines = child.lines();
        for i in 0..child_rect.height {
            // Rows past the text still get the label's background.
            let line = lines.next().unwrap_or("");
            let row = child_rect.y + i;
            if !visible.contains(&row) {
                continue;
            }
            let screen_y = rect.y + (row - visible.start);
            draw_line(buf, rect.x, screen_y, line, content_width, child.style_ref());
        }
    }

    if show_scrollbar {
        draw_scrollbar(view, rect, buf);
    }
}

/// Write one text line starting at `(x, y)`, stopping at `max_width`
/// display cells. A wide character that would cross the boundary is
/// dropped rather than half-drawn.
fn draw_line(buf: &mut Buffer, x: u16, y: u16, line: &str, max_width: u16, style: &Style) {
    let fg = style.foreground.map(|c| c.to_rgb());
    let bg = style.background.map(|c| c.to_rgb());

    let mut col = 0u16;
    for ch in line.chars() {
        let w = char_width(ch) as u16;
        if w == 0 {
            continue;
        }
        if col + w > max_width {
            break;
        }
        if let Some(cell) = buf.get_mut(x + col, y) {
            cell.ch = ch;
            if let Some(fg) = fg {
                cell.fg = fg;
            }
            if let Some(bg) = bg {
                cell.bg = bg;
            }
            cell.bold = style.bold;
            cell.dim = style.dim;
        }
        // Blank out the continuation cell of a wide character.
        if w == 2 {
            if let Some(cell) = buf.get_mut(x + col + 1, y) {
                cell.ch = ' ';
                if let Some(bg) = bg {
                    cell.bg = bg;
                }
            }
        }
        col += w;
    }

    // Paint the remainder of the row in the label's background.
    if let Some(bg) = bg {
        for fill in col..max_width {
            if let Some(cell) = buf.get_mut(x + fill, y) {
                cell.bg = bg;
            }
        }
    }
}

fn draw_scrollbar(view: &ScrollView, rect: Rect, buf: &mut Buffer) {
    let track_color = Color::oklch(0.35, 0.0, 0.0).to_rgb();
    let thumb_color = Color::oklch(0.72, 0.0, 0.0).to_rgb();

    let x = rect.right() - 1;
    let (thumb_pos, thumb_size) = view.scrollbar().thumb(rect.height);

    for row in 0..rect.height {
        let in_thumb = row >= thumb_pos && row < thumb_pos + thumb_size;
        if let Some(cell) = buf.get_mut(x, rect.y + row) {
            cell.ch = if in_thumb { '█' } else { '░' };
            cell.fg = if in_thumb { thumb_color } else { track_color };
        }
    }
}

/// Convenience for hosts without their own compositing: render into a
/// fresh buffer exactly the size of the widget.
pub fn render_to_buffer(view: &ScrollView) -> Buffer {
    let (width, height) = view.viewport_size();
    let mut buf = Buffer::new(width, height);
    render(view, Rect::from_size(width, height), &mut buf);
    buf
}
