//! Layered household consumption for one hour.

use super::params::SimulationParams;
use super::types::SimulationConfig;

/// Consumption split into its three layers (kW).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadLayers {
    pub base_kw: f64,
    pub heating_kw: f64,
    pub shiftable_kw: f64,
}

impl LoadLayers {
    /// Builds the layers for `hour`.
    ///
    /// Shiftable loads run in the free window when shifting is enabled and in
    /// the evening otherwise.
    pub fn at_hour(hour: usize, config: &SimulationConfig, params: &SimulationParams) -> Self {
        let heating_kw = if config.heating.contains(hour) {
            params.heating_load_kw
        } else {
            0.0
        };
        let shift_window = if config.load_shifting {
            params.free_window
        } else {
            params.evening_window
        };
        let shiftable_kw = if shift_window.contains(hour) {
            params.shiftable_load_kw
        } else {
            0.0
        };
        Self {
            base_kw: params.base_load_kw,
            heating_kw,
            shiftable_kw,
        }
    }

    pub fn total_kw(&self) -> f64 {
        self.base_kw + self.heating_kw + self.shiftable_kw
    }
}
