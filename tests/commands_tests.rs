// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use satori_roi::commands::{doctor, exporter, geometry, locations, migrate, project, session, units};
use satori_roi::config::Settings;
use satori_roi::inventory::{HouseTypesFile, Inventory, parse_house_types};
use satori_roi::projection::Term;
use satori_roi::state::Screen;
use satori_roi::cli;
use std::io::Write;
use tempfile::NamedTempFile;

const INVENTORY: &str = r#"{
  "locations": [
    { "locationName": "Test Bay", "highSeasonOccupancy": 0.8, "lowSeasonOccupancy": 0.7,
      "houses": [
        { "unitNumber": "1", "type": "villa", "price": 4026000, "plotArea_sqm": 400,
          "usableArea_gross_sqm": 150, "bedrooms": 2, "floors": 1,
          "image_coordinates": "M100,200 C110,210 120,220 130,230" },
        { "unitNumber": "2", "type": "ghost", "price": 1000000 }
      ] }
  ]
}"#;

const HOUSE_TYPES: &str = r#"{
  "locations": [
    { "name": "Test Bay", "houses": [
      { "type": "villa",
        "pricing": { "high_season_avg_night_price": 3000, "low_season_avg_night_price": 2000,
                     "high_season_monthly_price": 30000, "low_season_monthly_price": 20000 },
        "expenses": { "water": 1000, "electricity": 1500, "internet": 500, "wear_and_tear": 500 } }
    ] }
  ]
}"#;

fn setup() -> Inventory {
    Inventory::from_json(INVENTORY, HOUSE_TYPES, &Settings::default()).unwrap()
}

fn sub_matches(name: &str, args: &[&str]) -> clap::ArgMatches {
    let mut argv = vec!["satori-roi", name];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    match matches.subcommand() {
        Some((parsed, sub)) if parsed == name => sub.clone(),
        _ => panic!("{} command not parsed", name),
    }
}

fn project_matches(args: &[&str]) -> clap::ArgMatches {
    sub_matches("project", args)
}

#[test]
fn project_applies_flag_overrides() {
    let inv = setup();
    let m = project_matches(&[
        "--location",
        " Test Bay ",
        "--unit",
        "1",
        "--nightly-high",
        "4000",
        "--low-occupancy",
        "0",
        "--term",
        "short",
    ]);
    let state = project::build_state(&inv, &m).unwrap();
    assert_eq!(state.screen, Screen::Detail(Term::ShortTerm));
    let s = state.snapshot.unwrap();
    assert_eq!(s.short_term_annual_income, Decimal::from(576000));
}

#[test]
fn project_treats_garbage_flags_as_zero() {
    let inv = setup();
    let m = project_matches(&["-l", "Test Bay", "-u", "1", "--price", "n/a"]);
    let state = project::build_state(&inv, &m).unwrap();
    let s = state.snapshot.unwrap();
    assert_eq!(s.purchase_price, Some(Decimal::ZERO));
    assert_eq!(s.roi(Term::ShortTerm), "0.00%");
}

#[test]
fn project_rejects_unknown_unit() {
    let inv = setup();
    let m = project_matches(&["-l", "Test Bay", "-u", "9"]);
    let err = project::build_state(&inv, &m).unwrap_err();
    assert!(err.to_string().contains("Unit '9' not found"));
}

#[test]
fn project_handler_reports_unresolved_house_type() {
    let inv = setup();
    let m = project_matches(&["-l", "Test Bay", "-u", "2"]);
    let err = project::handle(&inv, &m).unwrap_err();
    assert!(err.to_string().contains("House type 'ghost' not found"));
}

#[test]
fn summary_and_detail_rows_match_screens() {
    let inv = setup();
    let m = project_matches(&["-l", "Test Bay", "-u", "1"]);
    let state = project::build_state(&inv, &m).unwrap();
    let s = state.snapshot.as_ref().unwrap();
    let r = inv.require_unit("Test Bay", "1").unwrap();

    let summary = project::summary_rows(r.unit, s);
    assert_eq!(summary[0], vec!["Type".to_string(), "Villa".to_string()]);
    assert_eq!(summary[5][1], "4,026,000");
    assert_eq!(summary[6][1], "402,600 or 10.00%");
    assert_eq!(summary[7][1], "225,000 or 5.59%");

    let short = project::detail_rows(s, Term::ShortTerm, state.high_occupancy, state.low_occupancy);
    assert_eq!(short[2], vec!["Management Fee (Monthly)".to_string(), "19,950".to_string()]);
    assert_eq!(short[10][1], "281,400");

    let long = project::detail_rows(s, Term::LongTerm, state.high_occupancy, state.low_occupancy);
    assert_eq!(long[3], vec!["Total Annual Expenses".to_string(), "75,000".to_string()]);
}

#[test]
fn export_csv_skips_unresolved_units() {
    let inv = setup();
    let out = NamedTempFile::new().unwrap();
    let path = out.path().to_str().unwrap().to_string();
    let matches = cli::build_cli().get_matches_from([
        "satori-roi",
        "export",
        "--location",
        "Test Bay",
        "--format",
        "csv",
        "--out",
        &path,
    ]);
    let Some(("export", sub)) = matches.subcommand() else {
        panic!("export command not parsed");
    };
    exporter::handle(&inv, sub).unwrap();

    let mut rdr = csv::Reader::from_path(&path).unwrap();
    let records: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
    assert_eq!(records.len(), 1);
    assert_eq!(&records[0][0], "1");
    assert_eq!(&records[0][5], "402600.00");
    assert_eq!(&records[0][6], "10.00%");
    assert_eq!(&records[0][10], "5.59%");
}

#[test]
fn export_json_and_bad_format() {
    let inv = setup();
    let out = NamedTempFile::new().unwrap();
    let path = out.path().to_str().unwrap().to_string();
    let matches = cli::build_cli().get_matches_from([
        "satori-roi", "export", "-l", "Test Bay", "--format", "JSON", "--out", &path,
    ]);
    let Some(("export", sub)) = matches.subcommand() else {
        panic!("export command not parsed");
    };
    exporter::handle(&inv, sub).unwrap();
    let v: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(v.as_array().unwrap().len(), 1);
    assert_eq!(v[0]["long_term_roi"], "5.59%");

    let matches = cli::build_cli().get_matches_from([
        "satori-roi", "export", "-l", "Test Bay", "--format", "xml", "--out", &path,
    ]);
    let Some(("export", sub)) = matches.subcommand() else {
        panic!("export command not parsed");
    };
    let err = exporter::handle(&inv, sub).unwrap_err();
    assert!(err.to_string().contains("Unknown format"));
}

#[test]
fn session_replays_events_file() {
    let inv = setup();
    let mut f = NamedTempFile::new().unwrap();
    write!(
        f,
        r#"[
            {{ "event": "select_location", "name": "Test Bay" }},
            {{ "event": "select_unit", "unit": "2" }},
            {{ "event": "select_unit", "unit": "1" }},
            {{ "event": "set_occupancy", "season": "high", "value": "1" }}
        ]"#
    )
    .unwrap();
    let state = session::run(&inv, f.path()).unwrap();
    assert_eq!(state.unit.as_deref(), Some("1"));
    assert_eq!(state.diagnostics.len(), 1);
    // 3000*180 + 2000*180*0.7
    assert_eq!(
        state.snapshot.unwrap().short_term_annual_income,
        Decimal::from(792000)
    );
}

#[test]
fn migrate_writes_per_location_schema() {
    let inv = setup();
    let mut legacy = NamedTempFile::new().unwrap();
    write!(
        legacy,
        r#"{{ "houses": [ {{ "type": "villa",
            "pricing": {{ "high_season_avg_night_price": 1, "low_season_avg_night_price": 1,
                         "high_season_monthly_price": 1, "low_season_monthly_price": 1 }},
            "expenses": {{ "water": 1, "electricity": 1, "internet": 1, "wear_and_tear": 1,
                          "management": 5000 }} }} ] }}"#
    )
    .unwrap();
    let out = NamedTempFile::new().unwrap();
    let input = legacy.path().to_str().unwrap().to_string();
    let path = out.path().to_str().unwrap().to_string();
    let matches = cli::build_cli().get_matches_from([
        "satori-roi", "migrate", "--input", &input, "--out", &path,
    ]);
    let Some(("migrate", sub)) = matches.subcommand() else {
        panic!("migrate command not parsed");
    };
    migrate::handle(&inv, sub).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    let HouseTypesFile::Current(doc) = parse_house_types(&written).unwrap() else {
        panic!("migrated file is not in the current schema");
    };
    assert_eq!(doc.locations.len(), 1);
    assert_eq!(doc.locations[0].name, "Test Bay");
    assert!(!written.contains("management"));
}

#[test]
fn project_survives_huge_price_flags() {
    let inv = setup();
    let m = project_matches(&[
        "-l", "Test Bay", "-u", "1", "--nightly-high", "1e27", "--price", "0.0000000000000000000001",
    ]);
    let state = project::build_state(&inv, &m).unwrap();
    let snapshot = state.snapshot.as_ref().unwrap();
    assert!(snapshot.short_term_annual_income > Decimal::from(684000));
    assert!(snapshot.roi(Term::ShortTerm).ends_with('%'));

    let target = project::resolve_target(&inv, &m).unwrap();
    let rows = project::summary_rows(target.unit, snapshot);
    assert_eq!(rows[0][1], "Villa");
    project::handle(&inv, &m).unwrap();
}

#[test]
fn locations_handler_lists_inventory() {
    let inv = setup();
    locations::handle(&inv, &sub_matches("locations", &[])).unwrap();
    locations::handle(&inv, &sub_matches("locations", &["--json"])).unwrap();
    locations::handle(&inv, &sub_matches("locations", &["--jsonl"])).unwrap();
}

#[test]
fn units_handlers_list_and_show() {
    let inv = setup();
    units::list(&inv, &sub_matches("units", &["-l", "Test Bay"])).unwrap();
    units::list(&inv, &sub_matches("units", &["-l", " Test Bay ", "--json"])).unwrap();
    units::show(&inv, &sub_matches("unit", &["-l", "Test Bay", "-u", "1"])).unwrap();
    units::show(&inv, &sub_matches("unit", &["-l", "Test Bay", "-u", "1", "--json"])).unwrap();
}

#[test]
fn units_handlers_report_missing_targets() {
    let inv = setup();
    let err = units::list(&inv, &sub_matches("units", &["-l", "Nowhere"])).unwrap_err();
    assert!(err.to_string().contains("Location 'Nowhere' not found"));

    let err = units::show(&inv, &sub_matches("unit", &["-l", "Test Bay", "-u", "9"])).unwrap_err();
    assert!(err.to_string().contains("Unit '9' not found"));

    let err = units::show(&inv, &sub_matches("unit", &["-l", "Test Bay", "-u", "2"])).unwrap_err();
    assert!(err.to_string().contains("ghost"));
}

#[test]
fn doctor_handler_runs_on_inconsistent_data() {
    let inv = setup();
    assert!(!inv.integrity_issues().is_empty());
    doctor::handle(&inv).unwrap();
}

#[test]
fn geometry_handler_maps_outlines() {
    let inv = setup();
    let dims = [
        "--image-width", "2000", "--image-height", "1000", "--view-width", "1000",
        "--view-height", "1000",
    ];
    let mut args = vec!["-l", "Test Bay"];
    args.extend_from_slice(&dims);
    geometry::handle(&inv, &sub_matches("geometry", &args)).unwrap();
    args.push("--json");
    geometry::handle(&inv, &sub_matches("geometry", &args)).unwrap();

    let mut args = vec!["-l", "Nowhere"];
    args.extend_from_slice(&dims);
    let err = geometry::handle(&inv, &sub_matches("geometry", &args)).unwrap_err();
    assert!(err.to_string().contains("not found"));
}

#[test]
fn geometry_handler_tolerates_degenerate_viewport() {
    let inv = setup();
    let args = [
        "-l", "Test Bay", "--image-width", "0", "--image-height", "0", "--view-width", "0",
        "--view-height", "0",
    ];
    geometry::handle(&inv, &sub_matches("geometry", &args)).unwrap();
}
