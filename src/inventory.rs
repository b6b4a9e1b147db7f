// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::Settings;
use crate::models::{Expenses, HouseTypeProfile, Location, Pricing, Unit};
use anyhow::{Context, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

pub const BUNDLED_INVENTORY: &str = include_str!("../data/house_inventory.json");
pub const BUNDLED_HOUSE_TYPES: &str = include_str!("../data/house_types.json");

/// Version written by `migrate_legacy`. Files without a version are read as current.
pub const SCHEMA_VERSION: u32 = 2;

#[derive(Debug, Error, PartialEq)]
pub enum InventoryError {
    #[error("Location '{0}' not found")]
    UnknownLocation(String),
    #[error("Unit '{unit}' not found in {location}")]
    UnknownUnit { location: String, unit: String },
    #[error("House type '{type_tag}' not found for location {location}")]
    UnknownHouseType { location: String, type_tag: String },
    #[error("Unsupported house types schema: {0}")]
    UnsupportedSchema(String),
}

#[derive(Debug, Deserialize)]
struct InventoryDocument {
    locations: Vec<InventoryLocation>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InventoryLocation {
    location_name: String,
    #[serde(default)]
    houses: Vec<Unit>,
    #[serde(default)]
    high_season_occupancy: Option<Decimal>,
    #[serde(default)]
    low_season_occupancy: Option<Decimal>,
}

/// Per-location house types, the canonical shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseTypesDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_version: Option<u32>,
    pub locations: Vec<LocationHouseTypes>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationHouseTypes {
    pub name: String,
    pub houses: Vec<HouseTypeProfile>,
}

/// Global house types with flat management fees, as shipped before
/// per-location pricing existed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LegacyHouseTypes {
    pub houses: Vec<LegacyProfile>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LegacyProfile {
    #[serde(rename = "type")]
    pub type_tag: String,
    pub pricing: Pricing,
    pub expenses: LegacyExpenses,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LegacyExpenses {
    pub water: Decimal,
    pub electricity: Decimal,
    pub internet: Decimal,
    pub wear_and_tear: Decimal,
    #[serde(default)]
    pub management: Option<Decimal>,
    #[serde(default)]
    pub long_term_management: Option<Decimal>,
}

/// Replicate every global profile into each named location. Flat management
/// fees are dropped: commissions are now a share of income.
pub fn migrate_legacy(legacy: &LegacyHouseTypes, location_names: &[String]) -> HouseTypesDocument {
    for p in &legacy.houses {
        if let Some(fee) = p.expenses.management {
            log::warn!(
                "Dropping flat management fee {} for house type '{}'",
                fee,
                p.type_tag
            );
        }
        if let Some(fee) = p.expenses.long_term_management {
            log::warn!(
                "Dropping flat long-term management fee {} for house type '{}'",
                fee,
                p.type_tag
            );
        }
    }
    let houses: Vec<HouseTypeProfile> = legacy
        .houses
        .iter()
        .map(|p| HouseTypeProfile {
            type_tag: p.type_tag.clone(),
            pricing: p.pricing.clone(),
            expenses: Expenses {
                water: p.expenses.water,
                electricity: p.expenses.electricity,
                internet: p.expenses.internet,
                wear_and_tear: p.expenses.wear_and_tear,
            },
        })
        .collect();
    HouseTypesDocument {
        schema_version: Some(SCHEMA_VERSION),
        locations: location_names
            .iter()
            .map(|name| LocationHouseTypes {
                name: name.clone(),
                houses: houses.clone(),
            })
            .collect(),
    }
}

pub enum HouseTypesFile {
    Current(HouseTypesDocument),
    Legacy(LegacyHouseTypes),
}

/// Detect which house-types shape a document uses.
pub fn parse_house_types(raw: &str) -> Result<HouseTypesFile> {
    let value: serde_json::Value =
        serde_json::from_str(raw).context("House types file is not valid JSON")?;
    if value.get("locations").is_some() {
        let doc: HouseTypesDocument =
            serde_json::from_value(value).context("Invalid house types document")?;
        match doc.schema_version {
            None | Some(SCHEMA_VERSION) => Ok(HouseTypesFile::Current(doc)),
            Some(v) => Err(InventoryError::UnsupportedSchema(format!("version {}", v)).into()),
        }
    } else if value.get("houses").is_some() {
        let legacy: LegacyHouseTypes =
            serde_json::from_value(value).context("Invalid legacy house types document")?;
        Ok(HouseTypesFile::Legacy(legacy))
    } else {
        Err(InventoryError::UnsupportedSchema(
            "expected a 'locations' or 'houses' array".into(),
        )
        .into())
    }
}

/// A unit together with everything needed to project it.
#[derive(Debug, Clone, Copy)]
pub struct Resolved<'a> {
    pub location: &'a Location,
    pub unit: &'a Unit,
    pub profile: &'a HouseTypeProfile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    UnknownHouseType,
    OccupancyOutOfRange,
    DuplicateUnit,
    DuplicateLocation,
}

impl IssueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueKind::UnknownHouseType => "unknown_house_type",
            IssueKind::OccupancyOutOfRange => "occupancy_out_of_range",
            IssueKind::DuplicateUnit => "duplicate_unit",
            IssueKind::DuplicateLocation => "duplicate_location",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntegrityIssue {
    pub kind: IssueKind,
    pub detail: String,
}

/// Immutable inventory: locations, their units and house-type economics.
#[derive(Debug, Clone, Serialize)]
pub struct Inventory {
    locations: Vec<Location>,
    default_high_occupancy: Decimal,
    default_low_occupancy: Decimal,
}

impl Inventory {
    /// Read the datasets named in `settings`, or the bundled ones.
    pub fn load(settings: &Settings) -> Result<Self> {
        let inventory_raw = read_or_bundled(settings.inventory_path.as_deref(), BUNDLED_INVENTORY)?;
        let types_raw = read_or_bundled(settings.house_types_path.as_deref(), BUNDLED_HOUSE_TYPES)?;
        Inventory::from_json(&inventory_raw, &types_raw, settings)
    }

    pub fn from_json(inventory_json: &str, house_types_json: &str, settings: &Settings) -> Result<Self> {
        let doc: InventoryDocument =
            serde_json::from_str(inventory_json).context("Invalid house inventory document")?;
        let names: Vec<String> = doc.locations.iter().map(|l| l.location_name.clone()).collect();
        let types = match parse_house_types(house_types_json)? {
            HouseTypesFile::Current(d) => d,
            HouseTypesFile::Legacy(legacy) => {
                log::info!("Migrating legacy house types to per-location schema");
                migrate_legacy(&legacy, &names)
            }
        };

        for t in &types.locations {
            if !names.contains(&t.name) {
                log::debug!("House types for unknown location '{}' ignored", t.name);
            }
        }

        let high_default = settings.default_high_occupancy;
        let low_default = settings.default_low_occupancy;
        let locations = doc
            .locations
            .into_iter()
            .map(|l| {
                let house_types = types
                    .locations
                    .iter()
                    .find(|t| t.name == l.location_name)
                    .map(|t| t.houses.clone())
                    .unwrap_or_default();
                Location {
                    high_season_occupancy: non_zero_or(l.high_season_occupancy, high_default),
                    low_season_occupancy: non_zero_or(l.low_season_occupancy, low_default),
                    name: l.location_name,
                    units: l.houses,
                    house_types,
                }
            })
            .collect();

        Ok(Inventory {
            locations,
            default_high_occupancy: high_default,
            default_low_occupancy: low_default,
        })
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn location_names(&self) -> Vec<String> {
        self.locations.iter().map(|l| l.name.clone()).collect()
    }

    pub fn find_location(&self, name: &str) -> Option<&Location> {
        self.locations.iter().find(|l| l.name == name)
    }

    /// High/low occupancy for a location, or the configured defaults when
    /// the location is unknown.
    pub fn occupancy_for(&self, name: &str) -> (Decimal, Decimal) {
        match self.find_location(name) {
            Some(l) => (l.high_season_occupancy, l.low_season_occupancy),
            None => (self.default_high_occupancy, self.default_low_occupancy),
        }
    }

    /// `Ok(None)` when the location or unit does not exist; an error only when
    /// an existing unit names a house type its location does not define.
    pub fn resolve_unit(
        &self,
        location_name: &str,
        unit_id: &str,
    ) -> Result<Option<Resolved<'_>>, InventoryError> {
        let Some(location) = self.find_location(location_name) else {
            return Ok(None);
        };
        let Some(unit) = location.find_unit(unit_id) else {
            return Ok(None);
        };
        match location.find_house_type_profile(&unit.type_tag) {
            Some(profile) => Ok(Some(Resolved {
                location,
                unit,
                profile,
            })),
            None => Err(InventoryError::UnknownHouseType {
                location: location.name.clone(),
                type_tag: unit.type_tag.clone(),
            }),
        }
    }

    /// Like `resolve_unit` but for callers that need the unit to exist.
    pub fn require_unit(&self, location_name: &str, unit_id: &str) -> Result<Resolved<'_>> {
        if self.find_location(location_name).is_none() {
            return Err(InventoryError::UnknownLocation(location_name.to_string()).into());
        }
        self.resolve_unit(location_name, unit_id)?.ok_or_else(|| {
            InventoryError::UnknownUnit {
                location: location_name.to_string(),
                unit: unit_id.to_string(),
            }
            .into()
        })
    }

    pub fn integrity_issues(&self) -> Vec<IntegrityIssue> {
        let mut issues = Vec::new();
        let mut seen_locations = HashSet::new();
        for l in &self.locations {
            if !seen_locations.insert(l.name.as_str()) {
                issues.push(IntegrityIssue {
                    kind: IssueKind::DuplicateLocation,
                    detail: l.name.clone(),
                });
            }
            for (season, occ) in [
                ("high", l.high_season_occupancy),
                ("low", l.low_season_occupancy),
            ] {
                if occ < Decimal::ZERO || occ > Decimal::ONE {
                    issues.push(IntegrityIssue {
                        kind: IssueKind::OccupancyOutOfRange,
                        detail: format!("{} {} season {}", l.name, season, occ),
                    });
                }
            }
            let mut seen_units = HashSet::new();
            for u in &l.units {
                if !seen_units.insert(u.id.as_str()) {
                    issues.push(IntegrityIssue {
                        kind: IssueKind::DuplicateUnit,
                        detail: format!("{} unit {}", l.name, u.id),
                    });
                }
                if l.find_house_type_profile(&u.type_tag).is_none() {
                    issues.push(IntegrityIssue {
                        kind: IssueKind::UnknownHouseType,
                        detail: format!("{} unit {} type {}", l.name, u.id, u.type_tag),
                    });
                }
            }
        }
        issues
    }
}

fn read_or_bundled(path: Option<&Path>, bundled: &str) -> Result<String> {
    match path {
        Some(p) => fs::read_to_string(p).with_context(|| format!("Read dataset at {}", p.display())),
        None => Ok(bundled.to_string()),
    }
}

fn non_zero_or(v: Option<Decimal>, default: Decimal) -> Decimal {
    match v {
        Some(d) if !d.is_zero() => d,
        _ => default,
    }
}
