// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::inventory::{Inventory, InventoryError};
use crate::projection::{PriceOverrides, Term, project};
use anyhow::{Result, bail};
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ExportRow {
    pub unit: String,
    pub house_type: String,
    pub price: Decimal,
    pub short_term_income: Decimal,
    pub short_term_expenses: Decimal,
    pub short_term_profit: Decimal,
    pub short_term_roi: String,
    pub long_term_income: Decimal,
    pub long_term_expenses: Decimal,
    pub long_term_profit: Decimal,
    pub long_term_roi: String,
}

pub fn handle(inv: &Inventory, sub: &clap::ArgMatches) -> Result<()> {
    let location = sub.get_one::<String>("location").unwrap().trim();
    let fmt = sub.get_one::<String>("format").unwrap().trim().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();

    let rows = export_rows(inv, location)?;
    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record([
                "unit",
                "type",
                "price",
                "short_term_income",
                "short_term_expenses",
                "short_term_profit",
                "short_term_roi",
                "long_term_income",
                "long_term_expenses",
                "long_term_profit",
                "long_term_roi",
            ])?;
            for r in &rows {
                wtr.write_record([
                    r.unit.clone(),
                    r.house_type.clone(),
                    format!("{:.2}", r.price),
                    format!("{:.2}", r.short_term_income),
                    format!("{:.2}", r.short_term_expenses),
                    format!("{:.2}", r.short_term_profit),
                    r.short_term_roi.clone(),
                    format!("{:.2}", r.long_term_income),
                    format!("{:.2}", r.long_term_expenses),
                    format!("{:.2}", r.long_term_profit),
                    r.long_term_roi.clone(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            std::fs::write(out, serde_json::to_string_pretty(&rows)?)?;
        }
        _ => bail!("Unknown format: {} (use csv|json)", fmt),
    }
    println!("Exported {} units of {} to {}", rows.len(), location, out);
    Ok(())
}

/// Projections at list prices and the location's default occupancy. Units
/// whose house type is missing are reported and skipped.
pub fn export_rows(inv: &Inventory, location_name: &str) -> Result<Vec<ExportRow>> {
    let location = inv
        .find_location(location_name)
        .ok_or_else(|| InventoryError::UnknownLocation(location_name.to_string()))?;
    let mut rows = Vec::with_capacity(location.units.len());
    for unit in &location.units {
        let Some(profile) = location.find_house_type_profile(&unit.type_tag) else {
            log::error!(
                "{}",
                InventoryError::UnknownHouseType {
                    location: location.name.clone(),
                    type_tag: unit.type_tag.clone(),
                }
            );
            continue;
        };
        let overrides = PriceOverrides::from_defaults(profile, unit);
        let s = project(
            profile,
            location.high_season_occupancy,
            location.low_season_occupancy,
            Some(&overrides),
        );
        rows.push(ExportRow {
            unit: unit.id.clone(),
            house_type: unit.type_tag.clone(),
            price: unit.price,
            short_term_income: s.short_term_annual_income,
            short_term_expenses: s.short_term_annual_expenses(),
            short_term_profit: s.short_term_annual_profit,
            short_term_roi: s.roi(Term::ShortTerm),
            long_term_income: s.long_term_annual_income,
            long_term_expenses: s.long_term_annual_expenses(),
            long_term_profit: s.long_term_annual_profit,
            long_term_roi: s.roi(Term::LongTerm),
        });
    }
    Ok(rows)
}
