//! Core simulation types: day configuration and hourly records.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Season driving solar amplitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    #[default]
    #[serde(alias = "Summer")]
    Summer,
    #[serde(alias = "Winter")]
    Winter,
}

/// Battery dispatch strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChargingStrategy {
    /// Solar self-consumption all day.
    #[default]
    Standard,
    /// Force-charge from the grid during the free window.
    #[serde(alias = "ovo")]
    FreeWindow,
}

/// Building envelope quality, driving heat loss when heating is off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Insulation {
    #[default]
    #[serde(alias = "Sealed")]
    Sealed,
    #[serde(alias = "Leaky")]
    Leaky,
}

impl FromStr for Season {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "summer" => Ok(Self::Summer),
            "winter" => Ok(Self::Winter),
            _ => Err(format!("unknown season \"{s}\", expected summer or winter")),
        }
    }
}

impl FromStr for ChargingStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "standard" => Ok(Self::Standard),
            "free_window" | "free-window" | "ovo" => Ok(Self::FreeWindow),
            _ => Err(format!(
                "unknown strategy \"{s}\", expected standard or free_window"
            )),
        }
    }
}

impl FromStr for Insulation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sealed" => Ok(Self::Sealed),
            "leaky" => Ok(Self::Leaky),
            _ => Err(format!("unknown insulation \"{s}\", expected sealed or leaky")),
        }
    }
}

/// Inclusive range of hours within a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HourWindow {
    pub start: usize,
    pub end: usize,
}

impl HourWindow {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Whether `hour` falls inside the window. An inverted window is empty.
    pub fn contains(&self, hour: usize) -> bool {
        hour >= self.start && hour <= self.end
    }
}

/// Inputs for one simulated day.
///
/// # Examples
///
/// ```
/// use energy_savings_sim::sim::types::{Season, SimulationConfig};
///
/// let cfg = SimulationConfig::default();
/// assert_eq!(cfg.solar_kw, 6.6);
/// assert_eq!(cfg.season, Season::Summer);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    /// Rooftop solar size (kW).
    pub solar_kw: f64,
    /// Home battery capacity (kWh).
    pub battery_kwh: f64,
    /// Hours with space heating running, inclusive.
    pub heating: HourWindow,
    /// Run shiftable loads in the free window instead of the evening peak.
    pub load_shifting: bool,
    pub season: Season,
    pub strategy: ChargingStrategy,
    pub insulation: Insulation,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            solar_kw: 6.6,
            battery_kwh: 13.5,
            heating: HourWindow::new(17, 22),
            load_shifting: false,
            season: Season::Summer,
            strategy: ChargingStrategy::Standard,
            insulation: Insulation::Sealed,
        }
    }
}

/// Complete record of one simulated hour.
///
/// Power values are kW averaged over the hour, so they equal kWh for the hour.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourlyRecord {
    /// Hour of day (0-23).
    pub hour: usize,
    /// Clock label, e.g. `"07:00"`.
    pub label: String,
    /// Solar generation (kW, non-negative).
    pub solar_kw: f64,
    /// Total household consumption: base + heating + shiftable (kW).
    pub consumption_kw: f64,
    pub base_load_kw: f64,
    pub heating_load_kw: f64,
    pub shiftable_load_kw: f64,
    /// Battery energy after this hour (kWh).
    pub battery_soc_kwh: f64,
    /// Battery energy as a share of capacity (0 when there is no battery).
    pub battery_soc_percent: f64,
    /// Battery power (kW; positive=charge, negative=discharge).
    pub battery_activity_kw: f64,
    /// Grid import (kW, non-negative).
    pub grid_import_kw: f64,
    /// Grid export (kW, non-negative).
    pub grid_export_kw: f64,
    /// Indoor temperature at the end of the hour (°C).
    pub indoor_temp_c: f64,
    pub is_free_window: bool,
    pub is_heating_hour: bool,
}

impl fmt::Display for HourlyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | solar={:>5.2} kW  load={:>5.2} kW | bat={:>6.2} kW (SoC={:>5.1}%) | \
             import={:>5.2}  export={:>5.2} | {:>4.1}°C{}{}",
            self.label,
            self.solar_kw,
            self.consumption_kw,
            self.battery_activity_kw,
            self.battery_soc_percent,
            self.grid_import_kw,
            self.grid_export_kw,
            self.indoor_temp_c,
            if self.is_free_window { " [free]" } else { "" },
            if self.is_heating_hour { " [heat]" } else { "" },
        )
    }
}
