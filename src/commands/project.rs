// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::inventory::{Inventory, Resolved};
use crate::models::Unit;
use crate::projection::{ProjectionSnapshot, Term};
use crate::state::{AppState, Event, PriceField, Screen, Season, replay};
use crate::utils::{fmt_number, maybe_print_json, pretty_table, start_case};
use anyhow::{Context, Result};
use rust_decimal::Decimal;

const PRICE_FLAGS: [(&str, PriceField); 5] = [
    ("nightly-high", PriceField::NightlyHigh),
    ("nightly-low", PriceField::NightlyLow),
    ("monthly-high", PriceField::MonthlyHigh),
    ("monthly-low", PriceField::MonthlyLow),
    ("price", PriceField::Purchase),
];

pub fn handle(inv: &Inventory, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let target = resolve_target(inv, sub)?;
    let state = state_for(inv, &target, sub);
    let snapshot = state
        .snapshot
        .as_ref()
        .context("No projection available for this unit")?;

    if maybe_print_json(json_flag, jsonl_flag, snapshot)? {
        return Ok(());
    }
    let rows = match state.screen {
        Screen::Detail(term) => detail_rows(snapshot, term, state.high_occupancy, state.low_occupancy),
        _ => summary_rows(target.unit, snapshot),
    };
    println!("{}", pretty_table(&["Field", "Value"], rows));
    Ok(())
}

/// Drive the session state the way the interactive screens do: pick the
/// location and unit, then apply each edited field.
pub fn build_state(inv: &Inventory, sub: &clap::ArgMatches) -> Result<AppState> {
    let target = resolve_target(inv, sub)?;
    Ok(state_for(inv, &target, sub))
}

/// The unit named by `--location`/`--unit`, with its house type.
pub fn resolve_target<'a>(inv: &'a Inventory, sub: &clap::ArgMatches) -> Result<Resolved<'a>> {
    let location = sub.get_one::<String>("location").unwrap().trim();
    let unit = sub.get_one::<String>("unit").unwrap().trim();
    inv.require_unit(location, unit)
}

fn state_for(inv: &Inventory, target: &Resolved<'_>, sub: &clap::ArgMatches) -> AppState {
    let mut events = vec![
        Event::SelectLocation {
            name: target.location.name.clone(),
        },
        Event::SelectUnit {
            unit: target.unit.id.clone(),
        },
    ];
    for (flag, season) in [("high-occupancy", Season::High), ("low-occupancy", Season::Low)] {
        if let Some(v) = sub.get_one::<String>(flag) {
            events.push(Event::SetOccupancy {
                season,
                value: v.clone(),
            });
        }
    }
    for (flag, field) in PRICE_FLAGS {
        if let Some(v) = sub.get_one::<String>(flag) {
            events.push(Event::SetPrice {
                field,
                value: v.clone(),
            });
        }
    }
    match sub.get_one::<String>("term").map(String::as_str) {
        Some("short") => events.push(Event::ShowDetail {
            term: Term::ShortTerm,
        }),
        Some("long") => events.push(Event::ShowDetail {
            term: Term::LongTerm,
        }),
        _ => {}
    }

    let (high, low) = inv.occupancy_for("");
    replay(inv, AppState::new(high, low), &events)
}

pub fn summary_rows(unit: &Unit, snapshot: &ProjectionSnapshot) -> Vec<Vec<String>> {
    let price = snapshot.purchase_price.unwrap_or(unit.price);
    vec![
        vec!["Type".into(), start_case(&unit.type_tag)],
        vec!["Plot Area".into(), format!("{} sqm", unit.plot_area_sqm)],
        vec!["Usable Area".into(), format!("{} sqm", unit.usable_area_sqm)],
        vec!["Bedrooms".into(), unit.bedrooms.to_string()],
        vec!["Floors".into(), unit.floors.to_string()],
        vec!["Price".into(), fmt_number(&price)],
        vec![
            "Short Term Annual ROI".into(),
            format!(
                "{} or {}",
                fmt_number(&snapshot.short_term_annual_profit),
                snapshot.roi(Term::ShortTerm)
            ),
        ],
        vec![
            "Long Term Annual ROI".into(),
            format!(
                "{} or {}",
                fmt_number(&snapshot.long_term_annual_profit),
                snapshot.roi(Term::LongTerm)
            ),
        ],
    ]
}

pub fn detail_rows(
    snapshot: &ProjectionSnapshot,
    term: Term,
    high_occupancy: Decimal,
    low_occupancy: Decimal,
) -> Vec<Vec<String>> {
    let row = |label: &str, v: &Decimal| vec![label.to_string(), fmt_number(v)];
    let expenses = &snapshot.profile.expenses;
    match term {
        Term::ShortTerm => vec![
            row("High Season Nightly Price", &snapshot.pricing.nightly_high),
            row("Low Season Nightly Price", &snapshot.pricing.nightly_low),
            row("Management Fee (Monthly)", &snapshot.short_term_management_fee),
            row("Water", &expenses.water),
            row("Electricity", &expenses.electricity),
            row("Internet", &expenses.internet),
            row("Wear and Tear", &expenses.wear_and_tear),
            vec!["High Season Occupancy".into(), high_occupancy.to_string()],
            vec!["Low Season Occupancy".into(), low_occupancy.to_string()],
            row("Total Annual Income", &snapshot.short_term_annual_income),
            row("Total Annual Expenses", &snapshot.short_term_annual_expenses()),
            row("Total Annual Profit", &snapshot.short_term_annual_profit),
        ],
        Term::LongTerm => vec![
            row("High Season Monthly Price", &snapshot.pricing.monthly_high),
            row("Low Season Monthly Price", &snapshot.pricing.monthly_low),
            row("Total Annual Income", &snapshot.long_term_annual_income),
            row("Total Annual Expenses", &snapshot.long_term_annual_expenses()),
            row("Total Annual Profit", &snapshot.long_term_annual_profit),
        ],
    }
}
