//! Toast overlay stacked in the top-right corner

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use cropyield_app::Toasts;

use crate::theme::{palette, styles};

const MAX_WIDTH: u16 = 48;
const TOAST_HEIGHT: u16 = 3;

pub struct ToastStack<'a> {
    toasts: &'a Toasts,
}

impl<'a> ToastStack<'a> {
    pub fn new(toasts: &'a Toasts) -> Self {
        Self { toasts }
    }
}

/// Rect of the `index`-th toast, right-aligned one cell in from the edge.
///
/// Returns `None` once the stack would run past the bottom of `area`.
pub fn toast_rect(index: u16, width: u16, area: Rect) -> Option<Rect> {
    let w = width.min(area.width.saturating_sub(2));
    let y = area.y + index * TOAST_HEIGHT;
    if w == 0 || y + TOAST_HEIGHT > area.y + area.height {
        return None;
    }
    let x = area.x + area.width.saturating_sub(w + 1);
    Some(Rect::new(x, y, w, TOAST_HEIGHT))
}

impl Widget for ToastStack<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (i, toast) in self.toasts.iter().enumerate() {
            let (icon, style) = styles::toast_indicator(toast.level);
            let line = Line::from(vec![
                Span::styled(icon, style),
                Span::raw(" "),
                Span::styled(toast.message.as_str(), styles::text_primary()),
            ]);
            let width = (line.width() as u16 + 4).min(MAX_WIDTH);

            let Some(rect) = toast_rect(i as u16, width, area) else {
                return;
            };

            Clear.render(rect, buf);
            Paragraph::new(line)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .border_style(style)
                        .style(Style::default().bg(palette::POPUP_BG)),
                )
                .render(rect, buf);
        }
    }
}
