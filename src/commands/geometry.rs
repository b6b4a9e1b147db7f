// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::geometry::{CoverFit, adjust_path};
use crate::inventory::{Inventory, InventoryError};
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(inv: &Inventory, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let name = sub.get_one::<String>("location").unwrap().trim();
    let dim = |k: &str| *sub.get_one::<f64>(k).unwrap();
    let location = inv
        .find_location(name)
        .ok_or_else(|| InventoryError::UnknownLocation(name.to_string()))?;

    let fit = CoverFit::new(
        dim("image-width"),
        dim("image-height"),
        dim("view-width"),
        dim("view-height"),
    );
    let data: Vec<Vec<String>> = location
        .units
        .iter()
        .filter_map(|u| {
            u.outline
                .as_deref()
                .map(|p| vec![u.id.clone(), adjust_path(p, fit.as_ref())])
        })
        .collect();
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        println!("{}", pretty_table(&["Unit", "Path"], data));
    }
    Ok(())
}
