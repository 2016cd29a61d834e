//! Farm input form of the prediction screen

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use cropyield_app::state::PredictionScreenState;
use cropyield_core::{FieldKind, FormField};

use crate::theme::styles;

/// Placeholder shown in the district field until a district is chosen
pub const DISTRICT_PLACEHOLDER: &str = "Select District";

const LABEL_WIDTH: u16 = 20;

/// The seven form fields followed by the submit button
pub struct PredictionForm<'a> {
    state: &'a PredictionScreenState,
}

impl<'a> PredictionForm<'a> {
    pub fn new(state: &'a PredictionScreenState) -> Self {
        Self { state }
    }

    fn placeholder(field: FormField) -> &'static str {
        match field {
            FormField::CropName => "e.g. Rice",
            FormField::District => DISTRICT_PLACEHOLDER,
            FormField::Nitrogen | FormField::Phosphorous | FormField::Potassium => "kg/ha",
            FormField::Ph => "0 - 14",
            FormField::Area => "hectares",
        }
    }

    fn field_line(&self, field: FormField, invalid: bool) -> Line<'a> {
        let focused = self.state.focus == field;
        let value = self.state.form.value(field);

        let label_style = if invalid {
            styles::status_red()
        } else if focused {
            styles::accent_bold()
        } else {
            styles::text_secondary()
        };
        let marker = if focused { "▸ " } else { "  " };

        let mut spans = vec![
            Span::styled(marker, styles::accent()),
            Span::styled(
                format!("{:<width$}", field.label(), width = LABEL_WIDTH as usize),
                label_style,
            ),
        ];

        if value.is_empty() {
            spans.push(Span::styled(Self::placeholder(field), styles::text_muted()));
        } else {
            let value_style = if focused {
                styles::text_primary()
            } else {
                styles::text_secondary()
            };
            spans.push(Span::styled(value.to_string(), value_style));
        }

        if focused {
            match field.kind() {
                FieldKind::Choice => spans.push(Span::styled("  ◀ ▶", styles::keybinding())),
                FieldKind::Text | FieldKind::Number => {
                    spans.push(Span::styled("▏", styles::accent()))
                }
            }
        }

        Line::from(spans)
    }

    fn button_line(&self) -> Line<'a> {
        let (label, style) = if self.state.request.is_pending() {
            (" Predicting... ", styles::disabled())
        } else if self.state.can_submit() {
            (" Predict Yield ", styles::focused_selected())
        } else {
            (" Predict Yield ", styles::disabled())
        };
        Line::from(vec![
            Span::raw("  "),
            Span::styled(label, style),
            Span::styled("  Enter", styles::keybinding()),
        ])
    }
}

impl Widget for PredictionForm<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::titled_block("Farm Details", true);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let invalid = self.state.form.invalid_fields();
        // One blank row between fields when there is room for it
        let step: u16 = if inner.height >= (FormField::ALL.len() as u16 + 1) * 2 {
            2
        } else {
            1
        };

        let mut y = inner.y;
        let bottom = inner.y + inner.height;
        for field in FormField::ALL {
            if y >= bottom {
                return;
            }
            let line = self.field_line(field, invalid.contains(&field));
            buf.set_line(inner.x, y, &line, inner.width);
            y += step;
        }

        if y < bottom {
            buf.set_line(inner.x, y, &self.button_line(), inner.width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use cropyield_core::{District, RequestLifecycle};

    fn filled_state() -> PredictionScreenState {
        let mut state = PredictionScreenState::default();
        for (field, value) in [
            (FormField::CropName, "Rice"),
            (FormField::Nitrogen, "90"),
            (FormField::Phosphorous, "42"),
            (FormField::Potassium, "43"),
            (FormField::Ph, "6.5"),
            (FormField::Area, "2"),
        ] {
            state.form.set_text(field, value);
        }
        state.form.district = Some(District::Nadia);
        state
    }

    #[test]
    fn test_empty_form_shows_labels_and_placeholder() {
        let state = PredictionScreenState::default();
        let mut term = TestTerminal::with_size(70, 24);
        term.render_widget(PredictionForm::new(&state), term.area());

        for field in FormField::ALL {
            assert!(term.buffer_contains(field.label()), "missing {}", field.label());
        }
        assert!(term.buffer_contains(DISTRICT_PLACEHOLDER));
        assert!(term.buffer_contains("Predict Yield"));
    }

    #[test]
    fn test_filled_form_shows_values() {
        let state = filled_state();
        let mut term = TestTerminal::with_size(70, 24);
        term.render_widget(PredictionForm::new(&state), term.area());

        assert!(term.buffer_contains("Rice"));
        assert!(term.buffer_contains("Nadia"));
        assert!(term.buffer_contains("6.5"));
        assert!(!term.buffer_contains(DISTRICT_PLACEHOLDER));
    }

    #[test]
    fn test_pending_request_shows_predicting() {
        let mut state = filled_state();
        state.request = RequestLifecycle::new();
        state.request.begin();

        let mut term = TestTerminal::with_size(70, 24);
        term.render_widget(PredictionForm::new(&state), term.area());

        assert!(term.buffer_contains("Predicting..."));
        assert!(!term.buffer_contains("Predict Yield"));
    }

    #[test]
    fn test_focused_field_has_marker() {
        let mut state = filled_state();
        state.focus = FormField::Ph;

        let mut term = TestTerminal::with_size(70, 24);
        term.render_widget(PredictionForm::new(&state), term.area());

        let content = term.content();
        let line = content
            .lines()
            .find(|l| l.contains("Soil pH"))
            .expect("pH row rendered");
        assert!(line.contains('▸'));
    }
}
