//! Detail panel for the selected district

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use cropyield_core::DistrictRecord;

use crate::theme::{palette, styles};

pub const EMPTY_TEXT: &str = "Select a district to view details 🌾";

pub struct DistrictDetail<'a> {
    record: Option<&'a DistrictRecord>,
}

impl<'a> DistrictDetail<'a> {
    pub fn new(record: Option<&'a DistrictRecord>) -> Self {
        Self { record }
    }
}

/// Heading followed by one bullet per item; empty lists render no bullets
fn list_section(heading: &'static str, color: Color, items: Vec<String>) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(items.len() + 2);
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(heading, Style::default().fg(color))));
    lines.extend(items.into_iter().map(|item| {
        Line::from(vec![
            Span::styled("  • ", styles::text_muted()),
            Span::styled(item, styles::text_primary()),
        ])
    }));
    lines
}

fn record_lines(record: &DistrictRecord) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(record.name.clone(), styles::accent_bold())),
        Line::from(Span::styled(
            record.description.clone(),
            styles::text_secondary(),
        )),
    ];
    lines.extend(list_section(
        "Major Field Crops",
        palette::SECTION_CROPS,
        record.major_crop_list(),
    ));
    lines.extend(list_section(
        "Fruits",
        palette::SECTION_FRUITS,
        record.fruit_list(),
    ));
    lines.extend(list_section(
        "Vegetables",
        palette::SECTION_VEGETABLES,
        record.vegetable_list(),
    ));
    lines
}

impl Widget for DistrictDetail<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::titled_block("Details", self.record.is_some());

        let lines = match self.record {
            Some(record) => record_lines(record),
            None => vec![Line::from(Span::styled(EMPTY_TEXT, styles::text_muted()))],
        };

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
