//! District list panel of the catalogue screen

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use cropyield_app::state::DistrictScreenState;
use cropyield_core::RequestState;

use crate::theme::styles;

pub const LOADING_TEXT: &str = "Loading districts...";

/// Loading text, inline error with retry hint, or the scrollable list
pub struct DistrictList<'a> {
    state: &'a DistrictScreenState,
}

impl<'a> DistrictList<'a> {
    pub fn new(state: &'a DistrictScreenState) -> Self {
        Self { state }
    }
}

/// First visible row so that `highlighted` stays on screen
fn scroll_offset(highlighted: usize, visible: usize) -> usize {
    if visible == 0 {
        0
    } else {
        highlighted.saturating_sub(visible - 1)
    }
}

impl Widget for DistrictList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::titled_block("Districts", true);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let catalogue = match self.state.catalogue.state() {
            RequestState::Idle | RequestState::Pending => {
                Paragraph::new(Span::styled(LOADING_TEXT, styles::text_muted()))
                    .render(inner, buf);
                return;
            }
            RequestState::Failed(message) => {
                Paragraph::new(vec![
                    Line::from(Span::styled(format!("Error: {message}"), styles::status_red())),
                    Line::from(""),
                    Line::from(vec![
                        Span::styled("[", styles::text_muted()),
                        Span::styled("r", styles::keybinding()),
                        Span::styled("] Retry", styles::text_muted()),
                    ]),
                ])
                .wrap(Wrap { trim: true })
                .render(inner, buf);
                return;
            }
            RequestState::Succeeded(catalogue) => catalogue,
        };

        if catalogue.is_empty() {
            Paragraph::new(Span::styled("No districts available", styles::text_muted()))
                .render(inner, buf);
            return;
        }

        let visible = inner.height as usize;
        let offset = scroll_offset(self.state.highlighted, visible);
        let selected = self.state.selected.as_deref();

        for (row, (idx, record)) in catalogue
            .records()
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible)
            .enumerate()
        {
            let is_selected = selected == Some(record.name.as_str());
            let style = if idx == self.state.highlighted {
                styles::focused_selected()
            } else if is_selected {
                styles::accent_bold()
            } else {
                styles::text_primary()
            };
            let marker = if is_selected { "● " } else { "  " };
            let line = Line::from(Span::styled(
                format!("{marker}{:<width$}", record.name, width = inner.width as usize),
                style,
            ));
            buf.set_line(inner.x, inner.y + row as u16, &line, inner.width);
        }
    }
}
