//! Retail rates and fixed modelling assumptions shared by both models.
//!
//! Everything here is immutable input: the models never mutate a [`Tariff`]
//! or [`Assumptions`], so a regional rate table can be swapped in without
//! touching the algorithms.

use serde::{Deserialize, Serialize};

/// Days in a modelled year.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Lower bound of the plausible blended retail rate ($/kWh).
const BLENDED_RATE_MIN: f64 = 0.15;
/// Upper bound of the plausible blended retail rate ($/kWh).
const BLENDED_RATE_MAX: f64 = 1.00;

/// Time-of-use retail tariff with a free midday window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Tariff {
    /// Peak-period import rate ($/kWh).
    pub peak_rate: f64,
    /// Off-peak / shoulder import rate ($/kWh).
    pub off_peak_rate: f64,
    /// Import rate inside the free window ($/kWh).
    pub free_rate: f64,
    /// Rate applied to EV charging in the window ($/kWh).
    pub ev_rate: f64,
    /// Solar feed-in credit ($/kWh).
    pub feed_in_rate: f64,
    /// Retail fuel price ($/L).
    pub fuel_price_per_litre: f64,
    /// Annual gas supply charge avoided on disconnection ($/yr).
    pub gas_supply_charge: f64,
    /// Annual cost inflation used for liabilities and projections.
    pub inflation: f64,
}

impl Default for Tariff {
    fn default() -> Self {
        Self {
            peak_rate: 0.58,
            off_peak_rate: 0.24,
            free_rate: 0.00,
            ev_rate: 0.08,
            feed_in_rate: 0.05,
            fuel_price_per_litre: 2.15,
            gas_supply_charge: 350.0,
            inflation: 0.03,
        }
    }
}

impl Tariff {
    /// Value of moving one kWh from the peak period into the free window.
    pub fn peak_spread(&self) -> f64 {
        self.peak_rate - self.free_rate
    }

    /// Simple average of the peak and off-peak rates.
    pub fn blended_rate(&self) -> f64 {
        (self.peak_rate + self.off_peak_rate) / 2.0
    }

    /// Returns an advisory when the blended rate falls outside typical
    /// Australian retail pricing.
    pub fn plausibility_warning(&self) -> Option<String> {
        let blended = self.blended_rate();
        if (BLENDED_RATE_MIN..=BLENDED_RATE_MAX).contains(&blended) {
            return None;
        }
        Some(format!(
            "Blended grid rate of ${blended:.2}/kWh deviates significantly from Australian averages \
             (${BLENDED_RATE_MIN:.2}-${BLENDED_RATE_MAX:.2}/kWh)."
        ))
    }

    /// Sum of `annual × (1 + inflation)^y` for `y` in `1..=years`.
    pub fn compounded(&self, annual: f64, years: u32) -> f64 {
        (1..=years)
            .map(|y| annual * (1.0 + self.inflation).powi(y as i32))
            .sum()
    }
}

/// Fixed device figures, efficiencies and heuristics used by the savings model.
///
/// These mirror published appliance averages and are deliberately coarse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Assumptions {
    /// Share of daily consumption that falls in the peak period.
    pub peak_fraction: f64,
    /// Ceiling on the continuous household base load (kW).
    pub base_load_cap_kw: f64,
    /// Length of the free window (hours).
    pub window_hours: f64,
    /// Supply voltage used for fuse arithmetic (V).
    pub supply_voltage: f64,

    /// Peak energy moved by a pool pump timer (kWh/day).
    pub pool_timer_shift_kwh: f64,
    /// Peak energy moved by a hot water timer (kWh/day).
    pub hot_water_timer_shift_kwh: f64,
    /// Usable storage of a vehicle-to-home EV (kWh).
    pub v2h_capacity_kwh: f64,
    /// Share of battery charge assumed to displace exportable solar.
    pub solar_opportunity_fraction: f64,

    /// EV charger draw in the window (kW).
    pub ev_draw_kw: f64,
    /// Home battery charge draw in the window (kW).
    pub battery_draw_kw: f64,
    /// Pool pump draw in the window (kW).
    pub pool_draw_kw: f64,
    /// Hot water element or compressor draw in the window (kW).
    pub hot_water_draw_kw: f64,
    /// EV energy requested over the window (kWh).
    pub ev_window_kwh: f64,
    /// Cap on battery energy requested over the window (kWh).
    pub battery_window_cap_kwh: f64,
    /// Pool energy requested over the window (kWh).
    pub pool_window_kwh: f64,
    /// Hot water energy requested over the window (kWh).
    pub hot_water_window_kwh: f64,

    /// Solar yield (kWh per kW per day).
    pub solar_yield_kwh_per_kw: f64,
    /// Maximum share of generation consumed on site.
    pub solar_self_use_fraction: f64,
    /// Export limit value meaning "unlimited" (kW).
    pub unlimited_export_kw: f64,
    /// Share of average load coincident with midday generation.
    pub daytime_load_factor: f64,
    /// Daily hours during which export clipping bites.
    pub clipping_hours_per_day: f64,

    /// Fuel efficiency of the displaced petrol car (L/100 km).
    pub petrol_l_per_100km: f64,
    /// EV efficiency (kWh/100 km).
    pub ev_kwh_per_100km: f64,

    /// Share of the gas bill attributed to hot water.
    pub gas_share_hot_water: f64,
    /// Share of the gas bill attributed to space heating.
    pub gas_share_heating: f64,
    /// Share of the gas bill attributed to cooking.
    pub gas_share_cooking: f64,
    /// Energy content assumed per gas dollar when converting a gas bill into
    /// electrical demand (MJ/$, treated as kWh-equivalent before COP).
    pub gas_mj_per_dollar: f64,
    /// Resistive hot water consumption (kWh/yr).
    pub resistive_hot_water_kwh: f64,
    /// Resistive heating consumption (kWh/yr).
    pub resistive_heating_kwh: f64,
    /// Heat-pump hot water coefficient of performance.
    pub hot_water_cop: f64,
    /// Reverse-cycle heating coefficient of performance.
    pub heating_cop: f64,
    /// Induction efficiency gain over gas cooking.
    pub cooking_factor: f64,

    /// Single-speed pool pump consumption (kWh/yr).
    pub pool_single_speed_kwh: f64,
    /// Variable-speed pool pump consumption (kWh/yr).
    pub pool_variable_speed_kwh: f64,
    /// Vented dryer consumption (kWh/yr).
    pub dryer_vented_kwh: f64,
    /// Heat-pump dryer consumption (kWh/yr).
    pub dryer_heat_pump_kwh: f64,
    /// Heating cost reduction from draught proofing.
    pub draught_proofing_fraction: f64,

    /// Horizon of the inaction liability (years).
    pub liability_years: u32,
    /// Horizon of the cumulative cost projection (years).
    pub projection_years: u32,
    /// Payback reported when there are no savings (years).
    pub payback_sentinel_years: f64,

    /// Installed upgrade prices.
    pub costs: UpgradeCosts,
}

impl Default for Assumptions {
    fn default() -> Self {
        Self {
            peak_fraction: 0.45,
            base_load_cap_kw: 0.8,
            window_hours: 3.0,
            supply_voltage: 230.0,
            pool_timer_shift_kwh: 4.0,
            hot_water_timer_shift_kwh: 3.0,
            v2h_capacity_kwh: 60.0,
            solar_opportunity_fraction: 0.30,
            ev_draw_kw: 7.0,
            battery_draw_kw: 5.0,
            pool_draw_kw: 1.5,
            hot_water_draw_kw: 1.0,
            ev_window_kwh: 21.0,
            battery_window_cap_kwh: 15.0,
            pool_window_kwh: 4.5,
            hot_water_window_kwh: 3.0,
            solar_yield_kwh_per_kw: 3.8,
            solar_self_use_fraction: 0.3,
            unlimited_export_kw: 999.0,
            daytime_load_factor: 0.6,
            clipping_hours_per_day: 2.5,
            petrol_l_per_100km: 9.5,
            ev_kwh_per_100km: 18.5,
            gas_share_hot_water: 0.35,
            gas_share_heating: 0.55,
            gas_share_cooking: 0.15,
            gas_mj_per_dollar: 40.0,
            resistive_hot_water_kwh: 3600.0,
            resistive_heating_kwh: 2000.0,
            hot_water_cop: 4.0,
            heating_cop: 4.5,
            cooking_factor: 2.0,
            pool_single_speed_kwh: 4380.0,
            pool_variable_speed_kwh: 730.0,
            dryer_vented_kwh: 1000.0,
            dryer_heat_pump_kwh: 250.0,
            draught_proofing_fraction: 0.10,
            liability_years: 10,
            projection_years: 15,
            payback_sentinel_years: 999.0,
            costs: UpgradeCosts::default(),
        }
    }
}

/// Installed prices for each upgrade ($).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UpgradeCosts {
    /// Rooftop solar ($/kW).
    pub solar_per_kw: f64,
    /// Home battery ($/kWh).
    pub battery_per_kwh: f64,
    /// EV premium over a petrol car.
    pub ev: f64,
    /// Heat-pump hot water system.
    pub heat_pump_hot_water: f64,
    /// Reverse-cycle heating.
    pub reverse_cycle: f64,
    /// Induction cooktop.
    pub induction: f64,
    /// Variable-speed pool pump.
    pub pool_pump: f64,
    /// Heat-pump dryer.
    pub dryer: f64,
    /// Draught proofing.
    pub draught_proofing: f64,
}

impl Default for UpgradeCosts {
    fn default() -> Self {
        Self {
            solar_per_kw: 1000.0,
            battery_per_kwh: 1200.0,
            ev: 15000.0,
            heat_pump_hot_water: 3500.0,
            reverse_cycle: 5500.0,
            induction: 2000.0,
            pool_pump: 1500.0,
            dryer: 1200.0,
            draught_proofing: 300.0,
        }
    }
}
