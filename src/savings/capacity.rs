//! Service-fuse capacity check for the free window.

use serde::Serialize;
use tracing::debug;

use super::profile::HouseholdProfile;
use crate::tariff::Assumptions;

/// Window loads that are both selected and applicable to this household.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WindowLoads {
    pub ev: bool,
    pub battery: bool,
    pub pool: bool,
    pub hot_water: bool,
}

impl WindowLoads {
    /// Resolves strategy flags against what the household actually owns.
    ///
    /// A flag for an appliance the household does not have never adds load.
    pub fn from_profile(profile: &HouseholdProfile, usable_battery_kwh: f64) -> Self {
        let s = &profile.strategy;
        Self {
            ev: profile.is_ev && s.charge_ev_in_window,
            battery: usable_battery_kwh > 0.0 && s.charge_battery_in_window,
            pool: profile.pool_present() && s.run_pool_in_window,
            hot_water: profile.electric_hot_water() && s.run_hot_water_in_window,
        }
    }
}

/// Outcome of comparing window demand with the service rating.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CapacityCheck {
    /// Maximum sustainable import (kW).
    pub max_kw: f64,
    /// Instantaneous load with every window device running (kW).
    pub peak_load_kw: f64,
    pub breaker_tripped: bool,
    /// Energy the household tries to import over the window (kWh).
    pub requested_kwh: f64,
    /// Energy the service can deliver over the window (kWh).
    pub deliverable_kwh: f64,
    /// Requested energy the service cannot carry (kWh).
    pub wasted_kwh: f64,
}

impl CapacityCheck {
    /// Evaluates the window against the service fuse.
    ///
    /// # Arguments
    ///
    /// * `profile` - Household, for the fuse rating
    /// * `loads` - Applicable window loads
    /// * `base_load_kw` - Continuous household base load
    /// * `usable_battery_kwh` - Storage available for window charging
    /// * `a` - Device draw and energy figures
    pub fn evaluate(
        profile: &HouseholdProfile,
        loads: WindowLoads,
        base_load_kw: f64,
        usable_battery_kwh: f64,
        a: &Assumptions,
    ) -> Self {
        let max_kw = profile.service_fuse.max_kw(a.supply_voltage);

        let mut peak_load_kw = base_load_kw;
        let mut requested_kwh = base_load_kw * a.window_hours;
        if loads.ev {
            peak_load_kw += a.ev_draw_kw;
            requested_kwh += a.ev_window_kwh;
        }
        if loads.battery {
            peak_load_kw += a.battery_draw_kw;
            requested_kwh += usable_battery_kwh.min(a.battery_window_cap_kwh);
        }
        if loads.pool {
            peak_load_kw += a.pool_draw_kw;
            requested_kwh += a.pool_window_kwh;
        }
        if loads.hot_water {
            peak_load_kw += a.hot_water_draw_kw;
            requested_kwh += a.hot_water_window_kwh;
        }

        let deliverable_kwh = max_kw * a.window_hours;
        let check = Self {
            max_kw,
            peak_load_kw,
            breaker_tripped: peak_load_kw > max_kw,
            requested_kwh,
            deliverable_kwh,
            wasted_kwh: (requested_kwh - deliverable_kwh).max(0.0),
        };
        debug!(
            max_kw = check.max_kw,
            peak_load_kw = check.peak_load_kw,
            wasted_kwh = check.wasted_kwh,
            "capacity check"
        );
        check
    }

    /// Energy actually imported over the window (kWh).
    pub fn actual_import_kwh(&self) -> f64 {
        self.requested_kwh.min(self.deliverable_kwh)
    }
}
