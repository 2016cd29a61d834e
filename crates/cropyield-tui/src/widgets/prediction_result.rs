//! Result panel of the prediction screen

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use cropyield_core::{PredictionResult, Reading, RequestState};

use crate::theme::{palette, styles};

pub const IDLE_TEXT: &str = "Prediction results will appear here";
pub const PENDING_TEXT: &str = "Analyzing farm data...";
pub const ANOTHER_TEXT: &str = "Make Another Prediction";

/// Renders whichever of the four request states the prediction is in
pub struct PredictionPanel<'a> {
    state: &'a RequestState<PredictionResult>,
}

impl<'a> PredictionPanel<'a> {
    pub fn new(state: &'a RequestState<PredictionResult>) -> Self {
        Self { state }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        match self.state {
            RequestState::Idle => vec![
                Line::from(""),
                Line::from(Span::styled(IDLE_TEXT, styles::text_secondary())),
                Line::from(Span::styled(
                    "Fill the form and press Enter to predict",
                    styles::text_muted(),
                )),
            ],
            RequestState::Pending => vec![
                Line::from(""),
                Line::from(vec![
                    Span::styled("◐", styles::accent()),
                    Span::raw(" "),
                    Span::styled(PENDING_TEXT, styles::status_yellow()),
                ]),
            ],
            RequestState::Succeeded(result) => result_lines(result),
            RequestState::Failed(message) => vec![
                Line::from(""),
                Line::from(Span::styled(
                    "Prediction failed",
                    styles::status_red().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(message.clone(), styles::text_secondary())),
                Line::from(""),
                another_hint(),
            ],
        }
    }
}

fn reading_line(label: &'static str, reading: Reading, color: Color) -> Line<'static> {
    let value_style = if reading.is_available() {
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    } else {
        styles::text_muted()
    };
    Line::from(vec![
        Span::styled(format!("{label:<14}"), styles::text_secondary()),
        Span::styled(reading.to_string(), value_style),
    ])
}

fn another_hint() -> Line<'static> {
    Line::from(vec![
        Span::styled("[", styles::text_muted()),
        Span::styled("^N", styles::keybinding()),
        Span::styled(format!("] {ANOTHER_TEXT}"), styles::text_muted()),
    ])
}

fn result_lines(result: &PredictionResult) -> Vec<Line<'static>> {
    let production = result.predicted_production();
    let production_style = if production.is_available() {
        Style::default()
            .fg(palette::READING_YIELD)
            .add_modifier(Modifier::BOLD)
    } else {
        styles::text_muted()
    };

    vec![
        Line::from(""),
        Line::from(Span::styled("Predicted Yield", styles::heading())),
        Line::from(Span::styled(production.to_string(), production_style)),
        Line::from(""),
        Line::from(Span::styled("Weather", styles::heading())),
        reading_line("Temperature", result.temperature(), palette::READING_TEMPERATURE),
        reading_line("Humidity", result.humidity(), palette::READING_HUMIDITY),
        reading_line("Rainfall", result.rainfall(), palette::READING_RAINFALL),
        Line::from(""),
        another_hint(),
    ]
}

impl Widget for PredictionPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let focused = matches!(self.state, RequestState::Succeeded(_));
        let block = styles::titled_block("Prediction Result", focused);

        Paragraph::new(self.lines())
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
