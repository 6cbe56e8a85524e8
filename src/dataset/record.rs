//! Typed representation of one row of the EV population dataset.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use serde::Deserialize;

use crate::error::{Result, TrendError};

/// Raw CSV row as published on data.gov. Every field is optional text so
/// that incomplete rows survive deserialization and are handled by the
/// cleaning step instead of failing inside serde.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawRecord {
    #[serde(rename = "VIN (1-10)")]
    pub vin_prefix: Option<String>,
    #[serde(rename = "County")]
    pub county: Option<String>,
    #[serde(rename = "City")]
    pub city: Option<String>,
    #[serde(rename = "State")]
    pub state: Option<String>,
    #[serde(rename = "Postal Code")]
    pub postal_code: Option<String>,
    #[serde(rename = "Model Year")]
    pub model_year: Option<String>,
    #[serde(rename = "Make")]
    pub make: Option<String>,
    #[serde(rename = "Model")]
    pub model: Option<String>,
    #[serde(rename = "Electric Vehicle Type")]
    pub ev_type: Option<String>,
    #[serde(rename = "Clean Alternative Fuel Vehicle (CAFV) Eligibility")]
    pub cafv_eligibility: Option<String>,
    #[serde(rename = "Electric Range")]
    pub electric_range: Option<String>,
    #[serde(rename = "Base MSRP")]
    pub base_msrp: Option<String>,
    #[serde(rename = "Legislative District")]
    pub legislative_district: Option<String>,
    #[serde(rename = "DOL Vehicle ID")]
    pub dol_vehicle_id: Option<String>,
    #[serde(rename = "Vehicle Location")]
    pub vehicle_location: Option<String>,
    #[serde(rename = "Electric Utility")]
    pub electric_utility: Option<String>,
    #[serde(rename = "2020 Census Tract")]
    pub census_tract: Option<String>,
}

/// One validated vehicle registration record.
///
/// `model_year` is the independent variable of the trend analysis; the
/// remaining fields are descriptive payload used only by the exploratory
/// statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleRecord {
    pub vin_prefix: Option<String>,
    pub county: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub model_year: Option<i32>,
    pub make: Option<String>,
    pub model: Option<String>,
    pub ev_type: Option<String>,
    pub cafv_eligibility: Option<String>,
    pub electric_range: Option<f64>,
    pub base_msrp: Option<f64>,
    pub legislative_district: Option<String>,
    pub dol_vehicle_id: Option<String>,
    pub vehicle_location: Option<String>,
    pub electric_utility: Option<String>,
    pub census_tract: Option<String>,
}

fn non_empty(field: Option<String>) -> Option<String> {
    field.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn parse_numeric(field: Option<String>) -> Option<f64> {
    non_empty(field).and_then(|s| s.parse::<f64>().ok())
}

impl RawRecord {
    /// Validate a raw row into a typed record.
    ///
    /// A non-integer model year is a fatal input error; silent coercion
    /// would corrupt the aggregation downstream. Numeric payload columns
    /// (range, MSRP) are parsed leniently and unparseable values become
    /// missing, to be dropped by the cleaning step.
    pub(crate) fn validate(self, line: u64) -> Result<VehicleRecord> {
        let model_year = match non_empty(self.model_year) {
            None => None,
            Some(text) => match text.parse::<i32>() {
                Ok(year) => Some(year),
                Err(_) => return Err(TrendError::InvalidYear { value: text, line }),
            },
        };

        Ok(VehicleRecord {
            vin_prefix: non_empty(self.vin_prefix),
            county: non_empty(self.county),
            city: non_empty(self.city),
            state: non_empty(self.state),
            postal_code: non_empty(self.postal_code),
            model_year,
            make: non_empty(self.make),
            model: non_empty(self.model),
            ev_type: non_empty(self.ev_type),
            cafv_eligibility: non_empty(self.cafv_eligibility),
            electric_range: parse_numeric(self.electric_range),
            base_msrp: parse_numeric(self.base_msrp),
            legislative_district: non_empty(self.legislative_district),
            dol_vehicle_id: non_empty(self.dol_vehicle_id),
            vehicle_location: non_empty(self.vehicle_location),
            electric_utility: non_empty(self.electric_utility),
            census_tract: non_empty(self.census_tract),
        })
    }
}

impl VehicleRecord {
    /// Whether every column carries a value.
    pub fn is_complete(&self) -> bool {
        self.vin_prefix.is_some()
            && self.county.is_some()
            && self.city.is_some()
            && self.state.is_some()
            && self.postal_code.is_some()
            && self.model_year.is_some()
            && self.make.is_some()
            && self.model.is_some()
            && self.ev_type.is_some()
            && self.cafv_eligibility.is_some()
            && self.electric_range.is_some()
            && self.base_msrp.is_some()
            && self.legislative_district.is_some()
            && self.dol_vehicle_id.is_some()
            && self.vehicle_location.is_some()
            && self.electric_utility.is_some()
            && self.census_tract.is_some()
    }

    /// Hash of the full row, used for exact-duplicate detection.
    pub(crate) fn row_key(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.vin_prefix.hash(&mut hasher);
        self.county.hash(&mut hasher);
        self.city.hash(&mut hasher);
        self.state.hash(&mut hasher);
        self.postal_code.hash(&mut hasher);
        self.model_year.hash(&mut hasher);
        self.make.hash(&mut hasher);
        self.model.hash(&mut hasher);
        self.ev_type.hash(&mut hasher);
        self.cafv_eligibility.hash(&mut hasher);
        self.electric_range.map(f64::to_bits).hash(&mut hasher);
        self.base_msrp.map(f64::to_bits).hash(&mut hasher);
        self.legislative_district.hash(&mut hasher);
        self.dol_vehicle_id.hash(&mut hasher);
        self.vehicle_location.hash(&mut hasher);
        self.electric_utility.hash(&mut hasher);
        self.census_tract.hash(&mut hasher);
        hasher.finish()
    }
}
