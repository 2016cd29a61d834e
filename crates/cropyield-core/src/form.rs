//! Farm input form values

use crate::district::District;
use crate::error::{Error, Result};
use crate::prediction::PredictionRequest;

/// How a field accepts input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text
    Text,
    /// Choice from [`District::ALL`]
    Choice,
    /// Decimal number typed as text
    Number,
}

/// Fields of the farm input form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    CropName,
    District,
    Nitrogen,
    Phosphorous,
    Potassium,
    Ph,
    Area,
}

impl FormField {
    pub const ALL: [FormField; 7] = [
        FormField::CropName,
        FormField::District,
        FormField::Nitrogen,
        FormField::Phosphorous,
        FormField::Potassium,
        FormField::Ph,
        FormField::Area,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::CropName => "Crop Name",
            FormField::District => "Region (District)",
            FormField::Nitrogen => "Nitrogen (N)",
            FormField::Phosphorous => "Phosphorous (P)",
            FormField::Potassium => "Potassium (K)",
            FormField::Ph => "Soil pH",
            FormField::Area => "Area (ha)",
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            FormField::CropName => FieldKind::Text,
            FormField::District => FieldKind::Choice,
            _ => FieldKind::Number,
        }
    }

    /// Inclusive bounds enforced on numeric fields, if any
    pub fn bounds(&self) -> Option<(f64, f64)> {
        match self {
            FormField::Ph => Some((0.0, 14.0)),
            _ => None,
        }
    }

    pub fn next(&self) -> FormField {
        let idx = FormField::ALL.iter().position(|f| f == self).unwrap_or(0);
        FormField::ALL[(idx + 1) % FormField::ALL.len()]
    }

    pub fn prev(&self) -> FormField {
        let idx = FormField::ALL.iter().position(|f| f == self).unwrap_or(0);
        FormField::ALL[(idx + FormField::ALL.len() - 1) % FormField::ALL.len()]
    }
}

/// Whether `c` may be typed into a numeric field
fn is_numeric_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.' || c == '-'
}

/// Raw values entered on the prediction form.
///
/// Values are kept exactly as typed and sent verbatim; the service parses them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FarmInputForm {
    pub crop_name: String,
    pub district: Option<District>,
    pub nitrogen: String,
    pub phosphorous: String,
    pub potassium: String,
    pub ph: String,
    pub area: String,
}

impl FarmInputForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text value of a field (the district's display name for the choice field)
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::CropName => &self.crop_name,
            FormField::District => self.district.map(|d| d.as_str()).unwrap_or(""),
            FormField::Nitrogen => &self.nitrogen,
            FormField::Phosphorous => &self.phosphorous,
            FormField::Potassium => &self.potassium,
            FormField::Ph => &self.ph,
            FormField::Area => &self.area,
        }
    }

    fn text_mut(&mut self, field: FormField) -> Option<&mut String> {
        match field {
            FormField::CropName => Some(&mut self.crop_name),
            FormField::District => None,
            FormField::Nitrogen => Some(&mut self.nitrogen),
            FormField::Phosphorous => Some(&mut self.phosphorous),
            FormField::Potassium => Some(&mut self.potassium),
            FormField::Ph => Some(&mut self.ph),
            FormField::Area => Some(&mut self.area),
        }
    }

    /// Append a typed character. Returns `false` if the field rejected it.
    pub fn push_char(&mut self, field: FormField, c: char) -> bool {
        if c.is_control() {
            return false;
        }
        if field.kind() == FieldKind::Number && !is_numeric_char(c) {
            return false;
        }
        match self.text_mut(field) {
            Some(text) => {
                text.push(c);
                true
            }
            None => false,
        }
    }

    /// Delete the last character of a text field, or clear the district choice
    pub fn backspace(&mut self, field: FormField) {
        match self.text_mut(field) {
            Some(text) => {
                text.pop();
            }
            None => self.district = None,
        }
    }

    /// Replace a text field's value wholesale
    pub fn set_text(&mut self, field: FormField, value: impl Into<String>) {
        if let Some(text) = self.text_mut(field) {
            *text = value.into();
        }
    }

    /// Step the district choice forward, wrapping through "no selection"
    pub fn next_district(&mut self) {
        self.district = match self.district {
            None => District::ALL.first().copied(),
            Some(d) => District::ALL.get(d.index() + 1).copied(),
        };
    }

    /// Step the district choice backward, wrapping through "no selection"
    pub fn prev_district(&mut self) {
        self.district = match self.district {
            None => District::ALL.last().copied(),
            Some(d) if d.index() == 0 => None,
            Some(d) => District::ALL.get(d.index() - 1).copied(),
        };
    }

    /// Fields that are still empty, in display order
    pub fn missing_fields(&self) -> Vec<FormField> {
        FormField::ALL
            .iter()
            .copied()
            .filter(|f| self.value(*f).trim().is_empty())
            .collect()
    }

    /// Numeric fields whose value is not a number or falls outside its bounds
    pub fn invalid_fields(&self) -> Vec<FormField> {
        FormField::ALL
            .iter()
            .copied()
            .filter(|f| f.kind() == FieldKind::Number)
            .filter(|f| {
                let raw = self.value(*f).trim();
                if raw.is_empty() {
                    return false;
                }
                match raw.parse::<f64>() {
                    Ok(v) if v.is_finite() => f
                        .bounds()
                        .map(|(lo, hi)| v < lo || v > hi)
                        .unwrap_or(false),
                    _ => true,
                }
            })
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Check the form the way a browser checks `required` inputs
    pub fn validate(&self) -> Result<()> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(Error::MissingFields {
                fields: missing.iter().map(|f| f.label().to_string()).collect(),
            });
        }
        let invalid = self.invalid_fields();
        if !invalid.is_empty() {
            return Err(Error::InvalidFields {
                fields: invalid.iter().map(|f| f.label().to_string()).collect(),
            });
        }
        Ok(())
    }

    /// Build the `POST /predict` payload. `region` is the fixed locale string.
    pub fn to_request(&self, region: &str) -> PredictionRequest {
        PredictionRequest {
            nitrogen: self.nitrogen.clone(),
            phosphorous: self.phosphorous.clone(),
            potassium: self.potassium.clone(),
            ph: self.ph.clone(),
            area: self.area.clone(),
            crop: self.crop_name.clone(),
            region: region.to_string(),
        }
    }
}
