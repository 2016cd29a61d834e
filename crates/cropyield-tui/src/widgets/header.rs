//! Header bar widget
//!
//! Shows the app title, the routed screen and that screen's key hints.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use cropyield_app::Screen;

use crate::theme::{palette, styles};

const APP_TITLE: &str = "Crop Yield";

/// Main header: title on the left, key hints right-aligned
pub struct MainHeader {
    screen: Screen,
}

impl MainHeader {
    pub fn new(screen: Screen) -> Self {
        Self { screen }
    }

    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        match self.screen {
            Screen::Landing => &[("Enter", "Get Started"), ("d", "Districts"), ("q", "Quit")],
            Screen::Prediction => &[
                ("Tab", "Next"),
                ("Enter", "Predict"),
                ("^D", "Districts"),
                ("Esc", "Home"),
            ],
            Screen::Districts => &[
                ("↑↓", "Move"),
                ("Enter", "Select"),
                ("p", "Predict"),
                ("Esc", "Home"),
            ],
        }
    }
}

/// `[key] Label  [key] Label` spans
fn hint_spans(hints: &[(&'static str, &'static str)]) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(hints.len() * 3);
    for (i, (key, label)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled("[", styles::text_muted()));
        spans.push(Span::styled(*key, styles::keybinding()));
        spans.push(Span::styled(format!("] {label}"), styles::text_muted()));
    }
    spans
}

impl Widget for MainHeader {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let left_line = Line::from(vec![
            Span::raw(" "),
            Span::styled("🌾", styles::accent()),
            Span::raw(" "),
            Span::styled(APP_TITLE, styles::accent_bold()),
            Span::raw(" "),
            Span::styled("/", styles::text_muted()),
            Span::raw(" "),
            Span::styled(self.screen.title(), styles::text_secondary()),
        ]);
        let left_width = left_line.width() as u16;
        buf.set_line(inner.x, inner.y, &left_line, inner.width);

        let hints_line = Line::from(hint_spans(self.hints()));
        let hints_width = hints_line.width() as u16 + 1;

        // Hints only when they fit without touching the title
        if left_width + hints_width + 2 <= inner.width {
            let x = inner.x + inner.width - hints_width;
            buf.set_line(x, inner.y, &hints_line, hints_width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_header_renders_title_and_screen() {
        let mut term = TestTerminal::new();
        term.render_widget(MainHeader::new(Screen::Districts), term.area());

        assert!(term.buffer_contains("Crop Yield"));
        assert!(term.buffer_contains("District Crop Information"));
    }

    #[test]
    fn test_header_hints_follow_screen() {
        let mut term = TestTerminal::with_size(120, 3);
        term.render_widget(MainHeader::new(Screen::Prediction), term.area());
        assert!(term.buffer_contains("Predict"));
        assert!(term.buffer_contains("Esc"));

        let mut term = TestTerminal::with_size(120, 3);
        term.render_widget(MainHeader::new(Screen::Landing), term.area());
        assert!(term.buffer_contains("Get Started"));
        assert!(term.buffer_contains("Quit"));
    }

    #[test]
    fn test_header_drops_hints_when_narrow() {
        let mut term = TestTerminal::compact();
        term.render_widget(MainHeader::new(Screen::Prediction), term.area());

        assert!(term.buffer_contains("Crop Yield"));
        assert!(!term.buffer_contains("[Tab]"));
    }
}
