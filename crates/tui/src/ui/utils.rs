//! Small rendering helpers shared across components.

use ratatui::layout::Rect;

/// Centers a fixed-size rectangle inside `r`, shrinking it when `r` is too
/// small.
pub fn centered_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    let x = r.x + (r.width - width) / 2;
    let y = r.y + (r.height - height) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centers_within_the_parent() {
        let parent = Rect::new(0, 0, 100, 40);
        let dialog = centered_fixed(40, 10, parent);
        assert_eq!(dialog, Rect::new(30, 15, 40, 10));
    }

    #[test]
    fn shrinks_to_fit_small_parents() {
        let parent = Rect::new(2, 2, 20, 6);
        let dialog = centered_fixed(40, 10, parent);
        assert!(dialog.width <= parent.width);
        assert!(dialog.height <= parent.height);
        assert!(dialog.x >= parent.x && dialog.y >= parent.y);
    }
}
