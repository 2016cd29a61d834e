//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Header height: top border + title row + bottom border
pub const HEADER_HEIGHT: u16 = 3;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title, current screen and key hints
    pub header: Rect,

    /// Routed screen content
    pub body: Rect,

    /// Single-row footer, absent when disabled in settings
    pub footer: Option<Rect>,
}

/// Split the terminal into header, body and optional footer
pub fn create(area: Rect, show_footer: bool) -> ScreenAreas {
    let footer_height = u16::from(show_footer);

    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(footer_height),
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        body: chunks[1],
        footer: show_footer.then_some(chunks[2]),
    }
}

/// Split the body into two side-by-side panels (form | result, list | detail)
pub fn split_panels(area: Rect, left_percent: u16) -> (Rect, Rect) {
    let chunks = Layout::horizontal([
        Constraint::Percentage(left_percent),
        Constraint::Percentage(100 - left_percent.min(100)),
    ])
    .split(area);
    (chunks[0], chunks[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_with_footer() {
        let layout = create(Rect::new(0, 0, 80, 24), true);

        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.body.y, 3);
        assert_eq!(layout.body.height, 20); // 24 - 3 - 1
        let footer = layout.footer.expect("footer enabled");
        assert_eq!(footer.height, 1);
        assert_eq!(footer.y, 23);
    }

    #[test]
    fn test_layout_without_footer() {
        let layout = create(Rect::new(0, 0, 80, 24), false);

        assert!(layout.footer.is_none());
        assert_eq!(layout.body.height, 21);
    }

    #[test]
    fn test_split_panels_covers_width() {
        let (left, right) = split_panels(Rect::new(0, 3, 100, 20), 55);

        assert_eq!(left.width, 55);
        assert_eq!(right.x, 55);
        assert_eq!(left.width + right.width, 100);
    }
}
