// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::project::summary_rows;
use crate::inventory::{Inventory, InventoryError};
use crate::projection::{PriceOverrides, project};
use crate::utils::{fmt_number, maybe_print_json, pretty_table, start_case};
use anyhow::Result;

pub fn list(inv: &Inventory, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let name = sub.get_one::<String>("location").unwrap().trim();
    let location = inv
        .find_location(name)
        .ok_or_else(|| InventoryError::UnknownLocation(name.to_string()))?;

    if maybe_print_json(json_flag, jsonl_flag, &location.units)? {
        return Ok(());
    }
    let data = location
        .units
        .iter()
        .map(|u| {
            vec![
                u.id.clone(),
                start_case(&u.type_tag),
                format!("{} sqm", u.plot_area_sqm),
                format!("{} sqm", u.usable_area_sqm),
                u.bedrooms.to_string(),
                u.floors.to_string(),
                fmt_number(&u.price),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["Unit", "Type", "Plot", "Usable", "Bedrooms", "Floors", "Price"],
            data
        )
    );
    Ok(())
}

/// Unit details with ROI at list prices and the location's occupancy.
pub fn show(inv: &Inventory, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let location = sub.get_one::<String>("location").unwrap().trim();
    let unit = sub.get_one::<String>("unit").unwrap().trim();

    let r = inv.require_unit(location, unit)?;
    let overrides = PriceOverrides::from_defaults(r.profile, r.unit);
    let snapshot = project(
        r.profile,
        r.location.high_season_occupancy,
        r.location.low_season_occupancy,
        Some(&overrides),
    );
    let rows = summary_rows(r.unit, &snapshot);
    if !maybe_print_json(json_flag, jsonl_flag, &rows)? {
        println!("Unit {} at {}", r.unit.id, r.location.name);
        println!("{}", pretty_table(&["Field", "Value"], rows));
    }
    Ok(())
}
