//! District types: the fixed district choice list and the crop catalogue

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Error, Result};

/// Separator used by the catalogue's list-like text fields
pub const LIST_DELIMITER: char = ';';

/// Split a semicolon-delimited text field into trimmed, non-empty tokens.
///
/// Absent or blank input yields an empty list. Consecutive delimiters and
/// whitespace-only segments are dropped; token order is preserved.
///
/// ```
/// use cropyield_core::parse_delimited_list;
///
/// assert_eq!(parse_delimited_list(Some("Rice; Jute ;Wheat")), ["Rice", "Jute", "Wheat"]);
/// assert!(parse_delimited_list(None).is_empty());
/// ```
pub fn parse_delimited_list(source: Option<&str>) -> Vec<String> {
    source
        .map(|text| {
            text.split(LIST_DELIMITER)
                .map(str::trim)
                .filter(|token| !token.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

// ─────────────────────────────────────────────────────────────────────────────
// District choice list
// ─────────────────────────────────────────────────────────────────────────────

/// Districts selectable on the prediction form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum District {
    Alipurduar,
    Bankura,
    Birbhum,
    #[serde(rename = "Cooch Behar")]
    CoochBehar,
    #[serde(rename = "Dakshin Dinajpur")]
    DakshinDinajpur,
    Darjeeling,
    Hooghly,
    Howrah,
    Jalpaiguri,
    Jhargram,
    Kalimpong,
    Kolkata,
    Malda,
    Murshidabad,
    Nadia,
    #[serde(rename = "North 24 Parganas")]
    North24Parganas,
    #[serde(rename = "Paschim Bardhaman")]
    PaschimBardhaman,
    #[serde(rename = "Paschim Medinipur")]
    PaschimMedinipur,
    #[serde(rename = "Purba Bardhaman")]
    PurbaBardhaman,
    #[serde(rename = "Purba Medinipur")]
    PurbaMedinipur,
    Purulia,
    #[serde(rename = "South 24 Parganas")]
    South24Parganas,
    #[serde(rename = "Uttar Dinajpur")]
    UttarDinajpur,
}

impl District {
    /// Every district, in the order the selector presents them
    pub const ALL: [District; 23] = [
        District::Alipurduar,
        District::Bankura,
        District::Birbhum,
        District::CoochBehar,
        District::DakshinDinajpur,
        District::Darjeeling,
        District::Hooghly,
        District::Howrah,
        District::Jalpaiguri,
        District::Jhargram,
        District::Kalimpong,
        District::Kolkata,
        District::Malda,
        District::Murshidabad,
        District::Nadia,
        District::North24Parganas,
        District::PaschimBardhaman,
        District::PaschimMedinipur,
        District::PurbaBardhaman,
        District::PurbaMedinipur,
        District::Purulia,
        District::South24Parganas,
        District::UttarDinajpur,
    ];

    /// Display name as shown to the user
    pub fn as_str(&self) -> &'static str {
        match self {
            District::Alipurduar => "Alipurduar",
            District::Bankura => "Bankura",
            District::Birbhum => "Birbhum",
            District::CoochBehar => "Cooch Behar",
            District::DakshinDinajpur => "Dakshin Dinajpur",
            District::Darjeeling => "Darjeeling",
            District::Hooghly => "Hooghly",
            District::Howrah => "Howrah",
            District::Jalpaiguri => "Jalpaiguri",
            District::Jhargram => "Jhargram",
            District::Kalimpong => "Kalimpong",
            District::Kolkata => "Kolkata",
            District::Malda => "Malda",
            District::Murshidabad => "Murshidabad",
            District::Nadia => "Nadia",
            District::North24Parganas => "North 24 Parganas",
            District::PaschimBardhaman => "Paschim Bardhaman",
            District::PaschimMedinipur => "Paschim Medinipur",
            District::PurbaBardhaman => "Purba Bardhaman",
            District::PurbaMedinipur => "Purba Medinipur",
            District::Purulia => "Purulia",
            District::South24Parganas => "South 24 Parganas",
            District::UttarDinajpur => "Uttar Dinajpur",
        }
    }

    /// Look up a district by its display name (case-insensitive)
    pub fn from_name(name: &str) -> Result<Self> {
        let wanted = name.trim();
        District::ALL
            .iter()
            .copied()
            .find(|d| d.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::unknown_district(name))
    }

    /// Position of this district in [`District::ALL`]
    pub fn index(&self) -> usize {
        District::ALL
            .iter()
            .position(|d| d == self)
            .unwrap_or_default()
    }
}

impl fmt::Display for District {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Crop catalogue
// ─────────────────────────────────────────────────────────────────────────────

/// One row of the crop catalogue served by `GET /districts`.
///
/// Every field tolerates being absent or `null`; the list-like fields are kept
/// as the raw delimited text and parsed on access.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistrictRecord {
    #[serde(rename = "Name", default, deserialize_with = "null_as_empty")]
    pub name: String,

    #[serde(rename = "Description", default, deserialize_with = "null_as_empty")]
    pub description: String,

    #[serde(rename = "MajorCrops", default)]
    pub major_crops: Option<String>,

    #[serde(rename = "Fruits", default)]
    pub fruits: Option<String>,

    #[serde(rename = "Vegetables", default)]
    pub vegetables: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl DistrictRecord {
    pub fn major_crop_list(&self) -> Vec<String> {
        parse_delimited_list(self.major_crops.as_deref())
    }

    pub fn fruit_list(&self) -> Vec<String> {
        parse_delimited_list(self.fruits.as_deref())
    }

    pub fn vegetable_list(&self) -> Vec<String> {
        parse_delimited_list(self.vegetables.as_deref())
    }
}

/// The loaded district collection. Immutable once constructed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DistrictCatalogue {
    records: Vec<DistrictRecord>,
}

impl DistrictCatalogue {
    pub fn new(records: Vec<DistrictRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[DistrictRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&DistrictRecord> {
        self.records.get(index)
    }

    /// Find the first record whose name equals `name`
    pub fn find(&self, name: &str) -> Option<&DistrictRecord> {
        self.records.iter().find(|r| r.name == name)
    }

    /// Index of the first record whose name equals `name`
    pub fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name == name)
    }
}
