// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::inventory::{HouseTypesFile, Inventory, migrate_legacy, parse_house_types};
use anyhow::{Context, Result};

pub fn handle(inv: &Inventory, sub: &clap::ArgMatches) -> Result<()> {
    let input = sub.get_one::<String>("input").unwrap().trim();
    let out = sub.get_one::<String>("out").unwrap().trim();
    let locations: Vec<String> = match sub.get_many::<String>("location") {
        Some(vals) => vals.map(|s| s.trim().to_string()).collect(),
        None => inv.location_names(),
    };

    let raw = std::fs::read_to_string(input).with_context(|| format!("Read {}", input))?;
    let doc = match parse_house_types(&raw)? {
        HouseTypesFile::Legacy(legacy) => migrate_legacy(&legacy, &locations),
        HouseTypesFile::Current(doc) => {
            println!("{} already uses the per-location schema", input);
            doc
        }
    };
    std::fs::write(out, serde_json::to_string_pretty(&doc)?)
        .with_context(|| format!("Write {}", out))?;
    println!(
        "Wrote house types for {} location(s) to {}",
        doc.locations.len(),
        out
    );
    Ok(())
}
