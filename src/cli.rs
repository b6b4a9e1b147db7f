// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, command, value_parser};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print JSON lines"),
    )
}

fn location_arg() -> Arg {
    Arg::new("location")
        .long("location")
        .short('l')
        .required(true)
        .help("Location name, e.g. 'Haad Yao'")
}

fn unit_arg() -> Arg {
    Arg::new("unit")
        .long("unit")
        .short('u')
        .required(true)
        .help("Unit number within the location")
}

fn decimal_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name).long(name).allow_hyphen_values(true).help(help)
}

pub fn build_cli() -> Command {
    command!()
        .name("satori-roi")
        .about("Browse villa inventory and project rental returns")
        .arg(
            Arg::new("inventory")
                .long("inventory")
                .global(true)
                .value_parser(value_parser!(std::path::PathBuf))
                .help("House inventory JSON (defaults to settings or bundled data)"),
        )
        .arg(
            Arg::new("house-types")
                .long("house-types")
                .global(true)
                .value_parser(value_parser!(std::path::PathBuf))
                .help("House types JSON (defaults to settings or bundled data)"),
        )
        .subcommand(json_flags(
            Command::new("locations").about("List locations and their default occupancy"),
        ))
        .subcommand(json_flags(
            Command::new("units")
                .about("List the units of a location")
                .arg(location_arg()),
        ))
        .subcommand(json_flags(
            Command::new("unit")
                .about("Show one unit with its annual ROI")
                .arg(location_arg())
                .arg(unit_arg()),
        ))
        .subcommand(json_flags(
            Command::new("project")
                .about("Project short-term and long-term returns for a unit")
                .arg(location_arg())
                .arg(unit_arg())
                .arg(decimal_arg("high-occupancy", "High season occupancy (0-1)"))
                .arg(decimal_arg("low-occupancy", "Low season occupancy (0-1)"))
                .arg(decimal_arg("nightly-high", "High season nightly price"))
                .arg(decimal_arg("nightly-low", "Low season nightly price"))
                .arg(decimal_arg("monthly-high", "High season monthly price"))
                .arg(decimal_arg("monthly-low", "Low season monthly price"))
                .arg(decimal_arg("price", "Purchase price"))
                .arg(
                    Arg::new("term")
                        .long("term")
                        .value_parser(["short", "long"])
                        .help("Show the detail breakdown for one term"),
                ),
        ))
        .subcommand(
            Command::new("export")
                .about("Export projections for every unit of a location")
                .arg(location_arg())
                .arg(
                    Arg::new("format")
                        .long("format")
                        .default_value("csv")
                        .help("csv|json"),
                )
                .arg(Arg::new("out").long("out").required(true)),
        )
        .subcommand(Command::new("doctor").about("Check inventory data integrity"))
        .subcommand(
            Command::new("session")
                .about("Replay a JSON list of UI events and print the final state")
                .arg(Arg::new("events").long("events").required(true)),
        )
        .subcommand(
            Command::new("migrate")
                .about("Convert a legacy global house types file to the per-location schema")
                .arg(Arg::new("input").long("input").required(true))
                .arg(Arg::new("out").long("out").required(true))
                .arg(
                    Arg::new("location")
                        .long("location")
                        .action(ArgAction::Append)
                        .help("Target location (repeatable; defaults to all inventory locations)"),
                ),
        )
        .subcommand(json_flags(
            Command::new("geometry")
                .about("Map unit outlines onto a viewport showing the aerial photo")
                .arg(location_arg())
                .arg(
                    Arg::new("image-width")
                        .long("image-width")
                        .required(true)
                        .value_parser(value_parser!(f64)),
                )
                .arg(
                    Arg::new("image-height")
                        .long("image-height")
                        .required(true)
                        .value_parser(value_parser!(f64)),
                )
                .arg(
                    Arg::new("view-width")
                        .long("view-width")
                        .required(true)
                        .value_parser(value_parser!(f64)),
                )
                .arg(
                    Arg::new("view-height")
                        .long("view-height")
                        .required(true)
                        .value_parser(value_parser!(f64)),
                ),
        ))
}
