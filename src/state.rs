// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Selection and edit state of a browsing session.
//!
//! State only changes through [`update`], which takes the previous state and
//! one [`Event`] and returns the next state with its projection recomputed.

use crate::inventory::Inventory;
use crate::projection::{PriceOverrides, ProjectionSnapshot, Term, project};
use crate::utils::parse_or_zero;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    Picker,
    Summary,
    Detail(Term),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    High,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceField {
    NightlyHigh,
    NightlyLow,
    MonthlyHigh,
    MonthlyLow,
    Purchase,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    /// An empty name clears the selection.
    SelectLocation { name: String },
    SelectUnit { unit: String },
    DeselectUnit,
    SetOccupancy { season: Season, value: String },
    SetPrice { field: PriceField, value: String },
    ShowDetail { term: Term },
    Back,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    pub location: Option<String>,
    pub unit: Option<String>,
    pub high_occupancy: Decimal,
    pub low_occupancy: Decimal,
    pub overrides: Option<PriceOverrides>,
    pub screen: Screen,
    pub snapshot: Option<ProjectionSnapshot>,
    pub diagnostics: Vec<String>,
}

impl AppState {
    pub fn new(high_occupancy: Decimal, low_occupancy: Decimal) -> Self {
        AppState {
            location: None,
            unit: None,
            high_occupancy,
            low_occupancy,
            overrides: None,
            screen: Screen::Picker,
            snapshot: None,
            diagnostics: Vec::new(),
        }
    }

    fn clear_unit(&mut self) {
        self.unit = None;
        self.overrides = None;
        self.screen = Screen::Picker;
    }
}

impl Default for AppState {
    fn default() -> Self {
        AppState::new(Decimal::new(8, 1), Decimal::new(7, 1))
    }
}

pub fn update(inventory: &Inventory, state: AppState, event: &Event) -> AppState {
    let mut next = state;
    match event {
        Event::SelectLocation { name } => {
            let name = name.trim();
            next.clear_unit();
            next.location = if name.is_empty() {
                None
            } else {
                Some(name.to_string())
            };
            let (high, low) = inventory.occupancy_for(name);
            next.high_occupancy = high;
            next.low_occupancy = low;
        }
        Event::SelectUnit { unit } => select_unit(inventory, &mut next, unit.trim()),
        Event::DeselectUnit => next.clear_unit(),
        Event::SetOccupancy { season, value } => {
            let v = parse_or_zero(value);
            match season {
                Season::High => next.high_occupancy = v,
                Season::Low => next.low_occupancy = v,
            }
        }
        Event::SetPrice { field, value } => {
            if let Some(o) = next.overrides.as_mut() {
                let v = parse_or_zero(value);
                match field {
                    PriceField::NightlyHigh => o.nightly_high = v,
                    PriceField::NightlyLow => o.nightly_low = v,
                    PriceField::MonthlyHigh => o.monthly_high = v,
                    PriceField::MonthlyLow => o.monthly_low = v,
                    PriceField::Purchase => o.purchase_price = v,
                }
            }
        }
        Event::ShowDetail { term } => {
            if next.unit.is_some() {
                next.screen = Screen::Detail(*term);
            }
        }
        Event::Back => match next.screen {
            Screen::Detail(_) => next.screen = Screen::Summary,
            Screen::Summary => next.clear_unit(),
            Screen::Picker => {}
        },
    }
    next.snapshot = derive_snapshot(inventory, &next);
    next
}

fn select_unit(inventory: &Inventory, state: &mut AppState, unit_id: &str) {
    let Some(location) = state.location.clone() else {
        return;
    };
    match inventory.resolve_unit(&location, unit_id) {
        Ok(Some(r)) => {
            state.unit = Some(r.unit.id.clone());
            state.overrides = Some(PriceOverrides::from_defaults(r.profile, r.unit));
            state.screen = Screen::Summary;
        }
        Ok(None) => log::debug!("No unit '{}' in {}", unit_id, location),
        Err(e) => {
            log::error!("{}", e);
            state.clear_unit();
            state.diagnostics.push(e.to_string());
        }
    }
}

/// Fresh projection for the current selection, if one is complete.
pub fn derive_snapshot(inventory: &Inventory, state: &AppState) -> Option<ProjectionSnapshot> {
    let location = state.location.as_deref()?;
    let unit = state.unit.as_deref()?;
    let overrides = state.overrides.as_ref()?;
    let resolved = inventory.resolve_unit(location, unit).ok()??;
    Some(project(
        resolved.profile,
        state.high_occupancy,
        state.low_occupancy,
        Some(overrides),
    ))
}

/// Fold a sequence of events over `initial`.
pub fn replay<'a, I>(inventory: &Inventory, initial: AppState, events: I) -> AppState
where
    I: IntoIterator<Item = &'a Event>,
{
    events
        .into_iter()
        .fold(initial, |state, event| update(inventory, state, event))
}
