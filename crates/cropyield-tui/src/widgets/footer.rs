//! One-line footer

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

pub struct Footer;

impl Widget for Footer {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Line::from(vec![
            Span::styled(
                "Crop Yield Prediction | Precision Agriculture",
                styles::text_muted(),
            ),
            Span::raw("  "),
            Span::styled("GO GREEN", styles::accent_bold()),
        ]))
        .alignment(Alignment::Center)
        .render(area, buf);
    }
}
