//! Layout helpers for dialogs

use ratatui::layout::Rect;

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

/// Dialog width that fits `text` plus borders and padding, clamped to `[min, max]`
pub fn dialog_width(text: &str, min: u16, max: u16) -> u16 {
    let widest = text.lines().map(|l| l.chars().count()).max().unwrap_or(0);
    let wanted = u16::try_from(widest).unwrap_or(u16::MAX).saturating_add(6);
    wanted.clamp(min, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_fixed() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(centered_rect_fixed(50, 10, area), Rect::new(25, 15, 50, 10));
    }

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let area = Rect::new(0, 0, 20, 5);
        assert_eq!(centered_rect_fixed(50, 10, area), Rect::new(0, 0, 20, 5));
    }

    #[test]
    fn test_dialog_width() {
        assert_eq!(dialog_width("short", 40, 70), 40);
        assert_eq!(dialog_width(&"x".repeat(50), 40, 70), 56);
        assert_eq!(dialog_width(&"x".repeat(200), 40, 70), 70);
    }
}
