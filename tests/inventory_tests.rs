// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use satori_roi::config::Settings;
use satori_roi::inventory::{
    HouseTypesFile, Inventory, InventoryError, IssueKind, SCHEMA_VERSION, migrate_legacy,
    parse_house_types,
};

const INVENTORY: &str = r#"{
  "locations": [
    { "locationName": "Test Bay", "highSeasonOccupancy": 0.9, "lowSeasonOccupancy": 0.5,
      "houses": [
        { "unitNumber": "1", "type": "villa", "price": 4026000, "plotArea_sqm": 400,
          "usableArea_gross_sqm": 150, "bedrooms": 2, "floors": 1, "image_coordinates": "M1,2" },
        { "unitNumber": 2, "type": "ghost", "price": 1000000 }
      ] },
    { "locationName": "Empty Hill", "houses": [] }
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

const LEGACY_TYPES: &str = r#"{
  "houses": [
    { "type": "villa",
      "pricing": { "high_season_avg_night_price": 3000, "low_season_avg_night_price": 2000,
                   "high_season_monthly_price": 30000, "low_season_monthly_price": 20000 },
      "expenses": { "water": 1000, "electricity": 1500, "internet": 500, "wear_and_tear": 500,
                    "management": 8000, "long_term_management": 4000 } }
  ]
}"#;

fn setup() -> Inventory {
    Inventory::from_json(INVENTORY, HOUSE_TYPES, &Settings::default()).unwrap()
}

#[test]
fn lookups_match_by_key() {
    let inv = setup();
    let loc = inv.find_location("Test Bay").unwrap();
    assert_eq!(loc.units.len(), 2);
    let unit = loc.find_unit("1").unwrap();
    assert_eq!(unit.price, Decimal::from(4026000));
    assert_eq!(unit.outline.as_deref(), Some("M1,2"));
    // numeric unit numbers are read as text
    assert!(loc.find_unit("2").is_some());
    assert!(loc.find_house_type_profile("villa").is_some());
    assert!(loc.find_house_type_profile("ghost").is_none());
}

#[test]
fn not_found_is_not_an_error() {
    let inv = setup();
    assert!(inv.find_location("Nowhere").is_none());
    assert!(inv.find_location("Test Bay").unwrap().find_unit("99").is_none());
    assert!(inv.resolve_unit("Test Bay", "99").unwrap().is_none());
    assert!(inv.resolve_unit("Nowhere", "1").unwrap().is_none());
}

#[test]
fn missing_house_type_is_an_integrity_error() {
    let inv = setup();
    let err = inv.resolve_unit("Test Bay", "2").unwrap_err();
    assert_eq!(
        err,
        InventoryError::UnknownHouseType {
            location: "Test Bay".into(),
            type_tag: "ghost".into()
        }
    );
    let r = inv.resolve_unit("Test Bay", "1").unwrap().unwrap();
    assert_eq!(r.profile.type_tag, "villa");
}

#[test]
fn require_unit_names_what_is_missing() {
    let inv = setup();
    let err = inv.require_unit("Nowhere", "1").unwrap_err();
    assert!(err.to_string().contains("Location 'Nowhere' not found"));
    let err = inv.require_unit("Test Bay", "42").unwrap_err();
    assert!(err.to_string().contains("Unit '42' not found"));
}

#[test]
fn occupancy_falls_back_to_defaults() {
    let inv = setup();
    assert_eq!(
        inv.occupancy_for("Test Bay"),
        (Decimal::new(9, 1), Decimal::new(5, 1))
    );
    assert_eq!(
        inv.occupancy_for("Empty Hill"),
        (Decimal::new(8, 1), Decimal::new(7, 1))
    );
    assert_eq!(inv.occupancy_for(""), (Decimal::new(8, 1), Decimal::new(7, 1)));
}

#[test]
fn integrity_issues_flag_bad_units() {
    let inv = setup();
    let issues = inv.integrity_issues();
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].kind, IssueKind::UnknownHouseType);
    assert!(issues[0].detail.contains("ghost"));
}

#[test]
fn legacy_house_types_are_migrated_per_location() {
    let inv = Inventory::from_json(INVENTORY, LEGACY_TYPES, &Settings::default()).unwrap();
    let villa = inv
        .find_location("Empty Hill")
        .unwrap()
        .find_house_type_profile("villa")
        .unwrap();
    assert_eq!(villa.expenses.dry_monthly(), Decimal::from(3500));

    let HouseTypesFile::Legacy(legacy) = parse_house_types(LEGACY_TYPES).unwrap() else {
        panic!("legacy shape not detected");
    };
    let doc = migrate_legacy(&legacy, &["A".to_string(), "B".to_string()]);
    assert_eq!(doc.schema_version, Some(SCHEMA_VERSION));
    assert_eq!(doc.locations.len(), 2);
    assert_eq!(doc.locations[1].houses[0].type_tag, "villa");
}

#[test]
fn unknown_schema_version_is_rejected() {
    let raw = r#"{ "schema_version": 9, "locations": [] }"#;
    let err = Inventory::from_json(INVENTORY, raw, &Settings::default()).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<InventoryError>(),
        Some(InventoryError::UnsupportedSchema(_))
    ));
    let err = Inventory::from_json(INVENTORY, "{}", &Settings::default()).unwrap_err();
    assert!(err.to_string().contains("Unsupported house types schema"));
}

#[test]
fn bundled_data_is_consistent() {
    let inv = Inventory::load(&Settings::default()).unwrap();
    assert_eq!(inv.locations().len(), 3);
    assert!(inv.integrity_issues().is_empty());
    assert!(inv.resolve_unit("Haad Yao", "1").unwrap().is_some());
}
