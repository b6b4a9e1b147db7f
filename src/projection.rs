// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Short-term (nightly) and long-term (monthly lease) return projections.
//!
//! A year is two six-month seasons of thirty-day months. Short-term rentals
//! pay a 35% management commission on gross income plus the house type's
//! running costs; long-term leases pay a flat 25% commission and nothing else,
//! utilities being on the tenant.

use crate::models::{HouseTypeProfile, Pricing, Unit};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

pub const DAYS_PER_MONTH: Decimal = Decimal::from_parts(30, 0, 0, false, 0);
pub const MONTHS_PER_SEASON: Decimal = Decimal::from_parts(6, 0, 0, false, 0);
pub const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);
pub const SHORT_TERM_COMMISSION: Decimal = Decimal::from_parts(35, 0, 0, false, 2);
pub const LONG_TERM_COMMISSION: Decimal = Decimal::from_parts(25, 0, 0, false, 2);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Term {
    ShortTerm,
    LongTerm,
}

/// User-edited prices that stand in for the profile pricing and the unit's
/// list price during a projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceOverrides {
    pub nightly_high: Decimal,
    pub nightly_low: Decimal,
    pub monthly_high: Decimal,
    pub monthly_low: Decimal,
    pub purchase_price: Decimal,
}

impl PriceOverrides {
    pub fn from_defaults(profile: &HouseTypeProfile, unit: &Unit) -> Self {
        PriceOverrides {
            nightly_high: profile.pricing.nightly_high,
            nightly_low: profile.pricing.nightly_low,
            monthly_high: profile.pricing.monthly_high,
            monthly_low: profile.pricing.monthly_low,
            purchase_price: unit.price,
        }
    }

    fn pricing(&self) -> Pricing {
        Pricing {
            nightly_high: self.nightly_high,
            nightly_low: self.nightly_low,
            monthly_high: self.monthly_high,
            monthly_low: self.monthly_low,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSnapshot {
    pub profile: HouseTypeProfile,
    /// Prices the figures were computed from.
    pub pricing: Pricing,
    pub short_term_dry_monthly_expenses: Decimal,
    pub short_term_management_fee: Decimal,
    pub short_term_monthly_expenses: Decimal,
    pub short_term_annual_income: Decimal,
    pub short_term_annual_profit: Decimal,
    pub long_term_monthly_expenses: Decimal,
    pub long_term_annual_income: Decimal,
    pub long_term_annual_profit: Decimal,
    pub purchase_price: Option<Decimal>,
}

impl ProjectionSnapshot {
    pub fn short_term_annual_expenses(&self) -> Decimal {
        self.short_term_monthly_expenses.saturating_mul(MONTHS_PER_YEAR)
    }

    pub fn long_term_annual_expenses(&self) -> Decimal {
        self.long_term_monthly_expenses.saturating_mul(MONTHS_PER_YEAR)
    }

    pub fn annual_profit(&self, term: Term) -> Decimal {
        match term {
            Term::ShortTerm => self.short_term_annual_profit,
            Term::LongTerm => self.long_term_annual_profit,
        }
    }

    pub fn roi(&self, term: Term) -> String {
        roi_percentage(
            self.annual_profit(term),
            self.purchase_price.unwrap_or(Decimal::ZERO),
        )
    }
}

// Dividing by twelve only shrinks the magnitude, so it cannot overflow.
fn per_month(annual: Decimal) -> Decimal {
    annual / MONTHS_PER_YEAR
}

/// Every operation saturates at `Decimal::MAX`/`Decimal::MIN`, so extreme
/// edits give extreme figures rather than a panic.
///
/// Occupancies are deliberately unchecked: values outside [0, 1] yield
/// skewed but well-defined figures.
pub fn project(
    profile: &HouseTypeProfile,
    high_occupancy: Decimal,
    low_occupancy: Decimal,
    overrides: Option<&PriceOverrides>,
) -> ProjectionSnapshot {
    let pricing = match overrides {
        Some(o) => o.pricing(),
        None => profile.pricing.clone(),
    };

    let season_nights = DAYS_PER_MONTH * MONTHS_PER_SEASON;
    let dry = profile.expenses.dry_monthly();
    let st_income = pricing
        .nightly_high
        .saturating_mul(season_nights)
        .saturating_mul(high_occupancy)
        .saturating_add(
            pricing
                .nightly_low
                .saturating_mul(season_nights)
                .saturating_mul(low_occupancy),
        );
    let st_fee = per_month(st_income.saturating_mul(SHORT_TERM_COMMISSION));
    let st_monthly = dry.saturating_add(st_fee);
    let st_profit = st_income.saturating_sub(st_monthly.saturating_mul(MONTHS_PER_YEAR));

    let lt_income = pricing
        .monthly_high
        .saturating_mul(MONTHS_PER_SEASON)
        .saturating_add(pricing.monthly_low.saturating_mul(MONTHS_PER_SEASON));
    let lt_monthly = per_month(lt_income.saturating_mul(LONG_TERM_COMMISSION));
    let lt_profit = lt_income.saturating_sub(lt_monthly.saturating_mul(MONTHS_PER_YEAR));

    ProjectionSnapshot {
        profile: profile.clone(),
        pricing,
        short_term_dry_monthly_expenses: dry,
        short_term_management_fee: st_fee,
        short_term_monthly_expenses: st_monthly,
        short_term_annual_income: st_income,
        short_term_annual_profit: st_profit,
        long_term_monthly_expenses: lt_monthly,
        long_term_annual_income: lt_income,
        long_term_annual_profit: lt_profit,
        purchase_price: overrides.map(|o| o.purchase_price),
    }
}

/// Annual profit as a share of the purchase price, e.g. `"12.34%"`.
/// A zero price gives `"0.00%"`; a ratio too large to represent saturates.
pub fn roi_percentage(profit: Decimal, purchase_price: Decimal) -> String {
    if purchase_price.is_zero() {
        return "0.00%".to_string();
    }
    let pct = match profit.checked_div(purchase_price) {
        Some(ratio) => ratio.saturating_mul(Decimal::ONE_HUNDRED),
        None if profit.is_sign_negative() != purchase_price.is_sign_negative() => Decimal::MIN,
        None => Decimal::MAX,
    }
    .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}%", pct)
}
