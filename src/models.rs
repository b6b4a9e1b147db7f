// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pricing {
    #[serde(rename = "high_season_avg_night_price")]
    pub nightly_high: Decimal,
    #[serde(rename = "low_season_avg_night_price")]
    pub nightly_low: Decimal,
    #[serde(rename = "high_season_monthly_price")]
    pub monthly_high: Decimal,
    #[serde(rename = "low_season_monthly_price")]
    pub monthly_low: Decimal,
}

/// Monthly running costs of a house type. All figures are THB per month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expenses {
    pub water: Decimal,
    pub electricity: Decimal,
    pub internet: Decimal,
    pub wear_and_tear: Decimal,
}

impl Expenses {
    /// Costs that do not depend on how much the unit earns.
    pub fn dry_monthly(&self) -> Decimal {
        self.water
            .saturating_add(self.electricity)
            .saturating_add(self.internet)
            .saturating_add(self.wear_and_tear)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseTypeProfile {
    #[serde(rename = "type")]
    pub type_tag: String,
    pub pricing: Pricing,
    pub expenses: Expenses,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    #[serde(rename = "unitNumber", deserialize_with = "de_unit_number")]
    pub id: String,
    #[serde(rename = "type")]
    pub type_tag: String,
    pub price: Decimal,
    #[serde(rename = "plotArea_sqm", default)]
    pub plot_area_sqm: Decimal,
    #[serde(rename = "usableArea_gross_sqm", default)]
    pub usable_area_sqm: Decimal,
    #[serde(default)]
    pub bedrooms: u32,
    #[serde(default)]
    pub floors: u32,
    #[serde(rename = "image_coordinates", default, skip_serializing_if = "Option::is_none")]
    pub outline: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Location {
    pub name: String,
    pub units: Vec<Unit>,
    pub high_season_occupancy: Decimal,
    pub low_season_occupancy: Decimal,
    pub house_types: Vec<HouseTypeProfile>,
}

impl Location {
    pub fn find_unit(&self, unit_id: &str) -> Option<&Unit> {
        self.units.iter().find(|u| u.id == unit_id)
    }

    pub fn find_house_type_profile(&self, type_tag: &str) -> Option<&HouseTypeProfile> {
        self.house_types.iter().find(|h| h.type_tag == type_tag)
    }
}

// Unit numbers appear both as strings ("A1") and bare numbers (12) in the datasets.
fn de_unit_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s.trim().to_string()),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "unitNumber must be a string or number, got {}",
            other
        ))),
    }
}
