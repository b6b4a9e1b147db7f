// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use std::path::PathBuf;

use satori_roi::{cli, commands, config::Settings, inventory::Inventory, logging};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let mut settings = Settings::load()?;
    if let Some(p) = matches.get_one::<PathBuf>("inventory") {
        settings.inventory_path = Some(p.clone());
    }
    if let Some(p) = matches.get_one::<PathBuf>("house-types") {
        settings.house_types_path = Some(p.clone());
    }
    logging::init(settings.log_level.as_deref())?;

    let inv = Inventory::load(&settings)?;

    match matches.subcommand() {
        Some(("locations", sub)) => commands::locations::handle(&inv, sub)?,
        Some(("units", sub)) => commands::units::list(&inv, sub)?,
        Some(("unit", sub)) => commands::units::show(&inv, sub)?,
        Some(("project", sub)) => commands::project::handle(&inv, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&inv, sub)?,
        Some(("doctor", _)) => commands::doctor::handle(&inv)?,
        Some(("session", sub)) => commands::session::handle(&inv, sub)?,
        Some(("migrate", sub)) => commands::migrate::handle(&inv, sub)?,
        Some(("geometry", sub)) => commands::geometry::handle(&inv, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
