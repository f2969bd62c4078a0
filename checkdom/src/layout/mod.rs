mod rect;

use std::collections::HashMap;

pub use rect::Rect;

use crate::element::{Element, Kind};
use crate::text::display_width;

/// Element id → the rectangle it was laid out in.
pub type LayoutResult = HashMap<String, Rect>;

/// Gap between children of a `Kind::Row`.
pub const ROW_GAP: u16 = 1;

pub fn layout(element: &Element, available: Rect) -> LayoutResult {
    let mut result = LayoutResult::new();
    layout_element(element, available, &mut result);
    result
}

fn layout_element(element: &Element, available: Rect, result: &mut LayoutResult) -> Rect {
    let (width, height) = measure(element, available.width);
    let rect = Rect::new(
        available.x,
        available.y,
        width.min(available.width),
        height.min(available.height),
    );
    result.insert(element.id.clone(), rect);
    layout_children(element, rect, result);
    rect
}

fn layout_children(element: &Element, rect: Rect, result: &mut LayoutResult) {
    let children = element.content.children();
    if children.is_empty() {
        return;
    }

    match element.kind {
        Kind::Column => {
            let mut y = rect.y;
            for child in children {
                if y >= rect.bottom() {
                    break;
                }
                let available = Rect::new(rect.x, y, rect.width, rect.bottom() - y);
                let placed = layout_element(child, available, result);
                y = y.saturating_add(placed.height);
            }
        }
        Kind::Row => {
            let mut x = rect.x;
            for child in children {
                if x >= rect.right() {
                    break;
                }
                let available = Rect::new(x, rect.y, rect.right() - x, rect.height);
                let placed = layout_element(child, available, result);
                x = x.saturating_add(placed.width).saturating_add(ROW_GAP);
            }
        }
        _ => {}
    }
}

/// Natural size of an element when given at most `max_width` columns.
pub fn measure(element: &Element, max_width: u16) -> (u16, u16) {
    let text_width = || cols(display_width(element.text_content().unwrap_or("")));

    let (width, height) = match element.kind {
        Kind::Column => {
            let width = element.width.unwrap_or(max_width).min(max_width);
            let height = element
                .content
                .children()
                .iter()
                .fold(0u16, |acc, child| acc.saturating_add(measure(child, width).1));
            (width, height)
        }
        Kind::Row => {
            let width = element.width.unwrap_or(max_width).min(max_width);
            let height = element
                .content
                .children()
                .iter()
                .map(|child| measure(child, width).1)
                .max()
                .unwrap_or(0);
            (width, height)
        }
        Kind::Text => (element.width.unwrap_or_else(text_width), 1),
        Kind::Button => (element.width.unwrap_or_else(|| text_width().saturating_add(4)), 1),
        Kind::Checkbox => (3, 1),
        Kind::Input => (element.width.unwrap_or_else(|| text_width().saturating_add(1)), 1),
    };

    (width.min(max_width), height)
}

fn cols(n: usize) -> u16 {
    n.min(u16::MAX as usize) as u16
}
