//! Fixed physical parameters of the daily simulation.

use serde::{Deserialize, Serialize};

use super::types::HourWindow;

/// Device figures, windows and thermal constants for the hourly model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationParams {
    /// Always-on household load (kW).
    pub base_load_kw: f64,
    /// Space heating draw while scheduled (kW).
    pub heating_load_kw: f64,
    /// Pool, EV and hot water lumped together (kW).
    pub shiftable_load_kw: f64,
    /// Free import window.
    pub free_window: HourWindow,
    /// Evening hours unshifted loads run in.
    pub evening_window: HourWindow,
    /// Inverter limit when force-charging from the grid (kW).
    pub forced_charge_kw: f64,
    /// Battery energy at midnight (kWh).
    pub initial_soc_kwh: f64,

    /// Hour of peak solar output.
    pub solar_peak_hour: f64,
    /// Standard deviation of the solar curve (hours).
    pub solar_spread_hours: f64,
    /// Winter output relative to summer.
    pub winter_solar_factor: f64,

    /// Indoor temperature at midnight (°C).
    pub initial_temp_c: f64,
    /// Heating setpoint (°C).
    pub heating_target_c: f64,
    /// Temperature the house decays towards (°C).
    pub ambient_temp_c: f64,
    /// Temperature rise per heated hour (°C).
    pub heating_rate_c: f64,
    /// Heat loss per unheated hour for a sealed house (°C).
    pub sealed_decay_c: f64,
    /// Heat loss per unheated hour for a leaky house (°C).
    pub leaky_decay_c: f64,
    /// Temperatures below this raise a comfort warning (°C).
    pub comfort_floor_c: f64,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            base_load_kw: 0.3,
            heating_load_kw: 2.5,
            shiftable_load_kw: 6.0,
            free_window: HourWindow::new(11, 13),
            evening_window: HourWindow::new(18, 20),
            forced_charge_kw: 5.0,
            initial_soc_kwh: 0.0,
            solar_peak_hour: 12.0,
            solar_spread_hours: 3.5,
            winter_solar_factor: 0.6,
            initial_temp_c: 18.0,
            heating_target_c: 21.0,
            ambient_temp_c: 14.0,
            heating_rate_c: 2.0,
            sealed_decay_c: 0.3,
            leaky_decay_c: 0.8,
            comfort_floor_c: 16.0,
        }
    }
}
