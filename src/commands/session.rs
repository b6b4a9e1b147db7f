// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::inventory::Inventory;
use crate::state::{AppState, Event, replay};
use anyhow::{Context, Result};
use std::path::Path;

pub fn handle(inv: &Inventory, sub: &clap::ArgMatches) -> Result<()> {
    let path = sub.get_one::<String>("events").unwrap().trim();
    let state = run(inv, Path::new(path))?;
    println!("{}", serde_json::to_string_pretty(&state)?);
    Ok(())
}

pub fn run(inv: &Inventory, path: &Path) -> Result<AppState> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Read events at {}", path.display()))?;
    let events: Vec<Event> = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid events file {}", path.display()))?;
    let (high, low) = inv.occupancy_for("");
    Ok(replay(inv, AppState::new(high, low), &events))
}
