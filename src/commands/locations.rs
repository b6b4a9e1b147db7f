// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::inventory::Inventory;
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(inv: &Inventory, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data: Vec<Vec<String>> = inv
        .locations()
        .iter()
        .map(|l| {
            vec![
                l.name.clone(),
                l.units.len().to_string(),
                l.high_season_occupancy.to_string(),
                l.low_season_occupancy.to_string(),
            ]
        })
        .collect();
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        println!(
            "{}",
            pretty_table(&["Location", "Units", "High Occ.", "Low Occ."], data)
        );
    }
    Ok(())
}
