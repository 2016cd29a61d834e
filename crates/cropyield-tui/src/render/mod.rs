//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use cropyield_app::state::{AppState, Screen};

use crate::theme::palette;
use crate::{layout, widgets};

/// Share of the body width given to the left panel
const FORM_PANEL_PERCENT: u16 = 55;
const LIST_PANEL_PERCENT: u16 = 35;

/// Render the complete UI (View function in TEA).
///
/// Pure: reads state, never mutates it.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let areas = layout::create(area, state.settings.ui.show_footer);

    frame.render_widget(widgets::MainHeader::new(state.screen), areas.header);

    match state.screen {
        Screen::Landing => frame.render_widget(widgets::Landing, areas.body),
        Screen::Prediction => {
            let (form, result) = layout::split_panels(areas.body, FORM_PANEL_PERCENT);
            frame.render_widget(widgets::PredictionForm::new(&state.prediction), form);
            frame.render_widget(
                widgets::PredictionPanel::new(state.prediction.request.state()),
                result,
            );
        }
        Screen::Districts => {
            let (list, detail) = layout::split_panels(areas.body, LIST_PANEL_PERCENT);
            frame.render_widget(widgets::DistrictList::new(&state.districts), list);
            frame.render_widget(
                widgets::DistrictDetail::new(state.districts.selected_record()),
                detail,
            );
        }
    }

    if let Some(footer) = areas.footer {
        frame.render_widget(widgets::Footer, footer);
    }

    if !state.toasts.is_empty() {
        frame.render_widget(widgets::ToastStack::new(&state.toasts), areas.body);
    }
}
