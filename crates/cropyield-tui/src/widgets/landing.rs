//! Landing screen: project introduction and the entry points

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::styles;

const ABOUT: &str = "Our crop yield prediction tool combines machine learning with IoT-based \
field data to help farmers and agricultural planners estimate the expected yield of a crop. \
It looks at soil nutrients, pH and local weather to support better planting decisions.";

const WHY: &str = "Accurate yield estimates help allocate resources, reduce losses and improve \
profitability. Predictions draw on both historical records and current weather for the district.";

/// Static landing page with "Get Started" and the district catalogue link
pub struct Landing;

impl Widget for Landing {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true);
        let inner = block.inner(area);
        block.render(area, buf);

        let [title, about, why, actions] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Min(3),
            Constraint::Length(2),
        ])
        .areas(inner);

        Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled("Crop Yield Prediction", styles::accent_bold())),
        ])
        .alignment(Alignment::Center)
        .render(title, buf);

        section("About the Project", ABOUT).render(about, buf);
        section("Why Crop Yield Prediction?", WHY).render(why, buf);

        Paragraph::new(Line::from(vec![
            Span::styled(" Get Started ", styles::focused_selected()),
            Span::styled(" Enter", styles::keybinding()),
            Span::raw("     "),
            Span::styled("District Crops", styles::accent()),
            Span::styled(" d", styles::keybinding()),
        ]))
        .alignment(Alignment::Center)
        .render(actions, buf);
    }
}

fn section<'a>(heading: &'a str, body: &'a str) -> Paragraph<'a> {
    Paragraph::new(vec![
        Line::from(Span::styled(heading, styles::heading())),
        Line::from(Span::styled(body, styles::text_secondary())),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
}
