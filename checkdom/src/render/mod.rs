use crate::buffer::{Buffer, Cell};
use crate::element::{Element, Kind};
use crate::layout::{LayoutResult, Rect};
use crate::text::{tail_to_width, truncate_to_width};
use crate::types::TextStyle;

pub fn render_to_buffer(element: &Element, layout: &LayoutResult, buf: &mut Buffer) {
    let Some(rect) = layout.get(&element.id).copied() else {
        return;
    };
    if rect.is_empty() {
        return;
    }

    let style = if element.focused && element.kind != Kind::Input {
        element.style.reverse()
    } else {
        element.style
    };

    match element.kind {
        Kind::Column | Kind::Row => {
            for child in element.content.children() {
                render_to_buffer(child, layout, buf);
            }
        }
        Kind::Text => {
            let text = element.text_content().unwrap_or("");
            draw_text(buf, rect, text, style);
        }
        Kind::Button => {
            let label = format!("[ {} ]", element.text_content().unwrap_or(""));
            draw_text(buf, rect, &label, style);
        }
        Kind::Checkbox => {
            let glyph = if element.checked { "[x]" } else { "[ ]" };
            draw_text(buf, rect, glyph, style);
        }
        Kind::Input => render_input(element, rect, buf),
    }
}

fn draw_text(buf: &mut Buffer, rect: Rect, text: &str, style: TextStyle) {
    let visible = truncate_to_width(text, rect.width as usize);
    buf.set_str(rect.x, rect.y, &visible, style, rect.width);
}

fn render_input(element: &Element, rect: Rect, buf: &mut Buffer) {
    let field_style = element.style.underline();
    for x in rect.x..rect.right() {
        buf.set(x, rect.y, Cell::new(' ').with_style(field_style));
    }

    let text = element.text_content().unwrap_or("");
    let cursor = if text.is_char_boundary(element.cursor.min(text.len())) {
        element.cursor.min(text.len())
    } else {
        text.len()
    };

    // Keep the caret in view: show as much text before it as fits, then
    // whatever follows.
    let before = tail_to_width(&text[..cursor], rect.width.saturating_sub(1) as usize);
    let written = buf.set_str(rect.x, rect.y, before, field_style, rect.width);
    let caret_x = rect.x + written;
    buf.set_str(
        caret_x,
        rect.y,
        &text[cursor..],
        field_style,
        rect.width - written,
    );

    if element.focused && caret_x < rect.right() {
        if let Some(cell) = buf.get_mut(caret_x, rect.y) {
            cell.style = cell.style.reverse();
        }
    }
}
