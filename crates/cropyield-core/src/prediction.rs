//! Prediction request and result types
//!
//! The result mirrors the service's JSON with an `Option` on every level, so a
//! partially missing body is a normal value and "N/A" is an explicit case.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Region string sent with every prediction request
pub const DEFAULT_REGION: &str = "West Bengal";

/// Shown in place of any value the service did not provide
pub const PLACEHOLDER: &str = "N/A";

/// Payload of `POST /predict`. Values are sent exactly as entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub nitrogen: String,
    pub phosphorous: String,
    pub potassium: String,
    pub ph: String,
    pub area: String,
    pub crop: String,
    pub region: String,
}

/// Response of `POST /predict`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    #[serde(default, deserialize_with = "lenient")]
    pub prediction: Option<PredictedYield>,

    #[serde(default, deserialize_with = "lenient")]
    pub weather: Option<WeatherReport>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictedYield {
    #[serde(default, deserialize_with = "lenient_number")]
    pub predicted_production: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    #[serde(default, deserialize_with = "lenient_number")]
    pub temperature: Option<f64>,

    #[serde(default, deserialize_with = "lenient_number")]
    pub humidity: Option<f64>,

    #[serde(default, deserialize_with = "lenient_number")]
    pub rainfall: Option<f64>,
}

/// Decode a nested object, treating anything of the wrong shape as absent
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Accept a JSON number or a numeric string; everything else is absent
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|v| v.is_finite()))
}

impl PredictionResult {
    pub fn predicted_production(&self) -> Reading {
        Reading::new(
            self.prediction
                .as_ref()
                .and_then(|p| p.predicted_production),
            Unit::Tonnes,
        )
    }

    pub fn temperature(&self) -> Reading {
        Reading::new(
            self.weather.as_ref().and_then(|w| w.temperature),
            Unit::Celsius,
        )
    }

    pub fn humidity(&self) -> Reading {
        Reading::new(self.weather.as_ref().and_then(|w| w.humidity), Unit::Percent)
    }

    pub fn rainfall(&self) -> Reading {
        Reading::new(
            self.weather.as_ref().and_then(|w| w.rainfall),
            Unit::Millimetres,
        )
    }
}

/// Measurement unit of a displayed reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Tonnes,
    Celsius,
    Percent,
    Millimetres,
}

impl Unit {
    pub fn suffix(&self) -> &'static str {
        match self {
            Unit::Tonnes => " tonnes",
            Unit::Celsius => "°C",
            Unit::Percent => "%",
            Unit::Millimetres => " mm",
        }
    }
}

/// A value ready for display: `"<number><unit>"` or [`PLACEHOLDER`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    pub value: Option<f64>,
    pub unit: Unit,
}

impl Reading {
    pub fn new(value: Option<f64>, unit: Unit) -> Self {
        Self { value, unit }
    }

    pub fn is_available(&self) -> bool {
        self.value.is_some()
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Some(v) => write!(f, "{}{}", format_number(v), self.unit.suffix()),
            None => f.write_str(PLACEHOLDER),
        }
    }
}

/// Round to two decimals and drop trailing zeros: `4.2`, `30`, `0.35`
pub fn format_number(value: f64) -> String {
    let fixed = format!("{value:.2}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_BODY: &str = r#"{"prediction":{"predicted_production":4.2},"weather":{"temperature":30,"humidity":70,"rainfall":120}}"#;

    #[test]
    fn test_full_body_renders_every_reading() {
        let result: PredictionResult = serde_json::from_str(FULL_BODY).unwrap();
        assert_eq!(result.predicted_production().to_string(), "4.2 tonnes");
        assert_eq!(result.temperature().to_string(), "30°C");
        assert_eq!(result.humidity().to_string(), "70%");
        assert_eq!(result.rainfall().to_string(), "120 mm");
    }

    #[test]
    fn test_missing_weather_renders_placeholders() {
        let result: PredictionResult =
            serde_json::from_str(r#"{"prediction":{"predicted_production":4.2}}"#).unwrap();
        assert_eq!(result.predicted_production().to_string(), "4.2 tonnes");
        assert_eq!(result.temperature().to_string(), PLACEHOLDER);
        assert_eq!(result.humidity().to_string(), PLACEHOLDER);
        assert_eq!(result.rainfall().to_string(), PLACEHOLDER);
    }

    #[test]
    fn test_empty_object_is_all_placeholders() {
        let result: PredictionResult = serde_json::from_str("{}").unwrap();
        assert!(!result.predicted_production().is_available());
        assert!(!result.temperature().is_available());
    }

    #[test]
    fn test_wrong_shapes_degrade_to_placeholders() {
        let body = r#"{"prediction":"soon","weather":{"temperature":"31.5","humidity":null,"rainfall":[1]}}"#;
        let result: PredictionResult = serde_json::from_str(body).unwrap();
        assert_eq!(result.predicted_production().to_string(), PLACEHOLDER);
        assert_eq!(result.temperature().to_string(), "31.5°C");
        assert_eq!(result.humidity().to_string(), PLACEHOLDER);
        assert_eq!(result.rainfall().to_string(), PLACEHOLDER);
    }

    #[test]
    fn test_zero_is_a_value_not_a_placeholder() {
        let body = r#"{"weather":{"temperature":0,"humidity":0,"rainfall":0}}"#;
        let result: PredictionResult = serde_json::from_str(body).unwrap();
        assert_eq!(result.temperature().to_string(), "0°C");
        assert_eq!(result.rainfall().to_string(), "0 mm");
    }

    #[test]
    fn test_non_object_body_is_an_error() {
        assert!(serde_json::from_str::<PredictionResult>("[1,2,3]").is_err());
        assert!(serde_json::from_str::<PredictionResult>("not json").is_err());
    }

    #[test]
    fn test_format_number_trims() {
        assert_eq!(format_number(4.2), "4.2");
        assert_eq!(format_number(30.0), "30");
        assert_eq!(format_number(1234.5678), "1234.57");
        assert_eq!(format_number(0.05), "0.05");
        assert_eq!(format_number(-0.001), "0");
    }

    #[test]
    fn test_request_serializes_wire_field_names() {
        let request = PredictionRequest {
            nitrogen: "90".into(),
            phosphorous: "42".into(),
            potassium: "43".into(),
            ph: "6.5".into(),
            area: "2".into(),
            crop: "Rice".into(),
            region: DEFAULT_REGION.into(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["phosphorous"], "42");
        assert_eq!(value["crop"], "Rice");
        assert_eq!(value["region"], "West Bengal");
        assert_eq!(value.as_object().unwrap().len(), 7);
    }
}
