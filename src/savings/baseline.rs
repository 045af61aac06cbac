//! Baseline consumption implied by the declared bills.

use serde::Serialize;

use super::profile::HouseholdProfile;
use crate::tariff::{Assumptions, DAYS_PER_YEAR, Tariff};

/// Daily and annual electricity demand before and after electrifying gas loads.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BaselineUsage {
    /// Consumption implied by the electricity bill alone (kWh/day).
    pub daily_kwh: f64,
    /// `daily_kwh` plus demand moved over from replaced gas appliances (kWh/day).
    pub adjusted_daily_kwh: f64,
    /// Continuous base load (kW), capped by the assumptions.
    pub base_load_kw: f64,
}

impl BaselineUsage {
    /// Derives usage from the bill, the blended rate, and any gas appliances
    /// the profile replaces.
    pub fn from_profile(profile: &HouseholdProfile, tariff: &Tariff, a: &Assumptions) -> Self {
        let blended = tariff.blended_rate();
        let daily_kwh = if blended > 0.0 {
            profile.electricity_bill / DAYS_PER_YEAR / blended
        } else {
            0.0
        };

        let mut added_daily = 0.0;
        if profile.upgrades_hot_water() {
            added_daily += electrified_daily_kwh(profile.gas_bill, a.gas_share_hot_water, a.hot_water_cop, a);
        }
        if profile.upgrades_heating() {
            added_daily += electrified_daily_kwh(profile.gas_bill, a.gas_share_heating, a.heating_cop, a);
        }
        if profile.upgrades_cooking() {
            added_daily += electrified_daily_kwh(profile.gas_bill, a.gas_share_cooking, a.cooking_factor, a);
        }

        let adjusted_daily_kwh = daily_kwh + added_daily;
        Self {
            daily_kwh,
            adjusted_daily_kwh,
            base_load_kw: a.base_load_cap_kw.min(adjusted_daily_kwh / 24.0),
        }
    }

    /// Adjusted consumption over a year (kWh).
    pub fn adjusted_annual_kwh(&self) -> f64 {
        self.adjusted_daily_kwh * DAYS_PER_YEAR
    }

    /// Consumption falling in the peak period (kWh/day).
    pub fn peak_kwh(&self, a: &Assumptions) -> f64 {
        self.adjusted_daily_kwh * a.peak_fraction
    }
}

/// Electrical demand (kWh/day) that replaces one gas category.
///
/// The category's share of the gas bill is converted to energy with the
/// gas-energy constant and divided by the replacement's efficiency.
fn electrified_daily_kwh(gas_bill: f64, share: f64, efficiency: f64, a: &Assumptions) -> f64 {
    if gas_bill <= 0.0 || efficiency <= 0.0 {
        return 0.0;
    }
    let gas_energy = gas_bill * share * a.gas_mj_per_dollar;
    gas_energy / efficiency / DAYS_PER_YEAR
}
