//! TOML-based scenario configuration and preset definitions.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::savings::{
    CookingSource, HeatingSource, HotWaterSource, HouseholdProfile, PoolPump, SavingsModel,
    ServiceFuse,
};
use crate::sim::{
    ChargingStrategy, DailySimulation, HourWindow, Insulation, Season, SimulationConfig,
    SimulationParams,
};
use crate::tariff::{Assumptions, Tariff};

/// Top-level scenario configuration parsed from TOML.
///
/// All sections have defaults matching the baseline scenario. Load from
/// TOML with [`ScenarioConfig::from_toml_file`] or use
/// [`ScenarioConfig::baseline`] for the built-in default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScenarioConfig {
    /// Household answers fed to the savings model.
    pub household: HouseholdProfile,
    /// Inputs of the daily simulation.
    pub simulation: SimulationConfig,
    /// Physical constants of the daily simulation.
    pub simulation_params: SimulationParams,
    pub tariff: Tariff,
    pub assumptions: Assumptions,
}

/// Configuration error.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The scenario file could not be read.
    #[error("cannot read \"{}\": {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The TOML is malformed or contains unknown fields.
    #[error("invalid scenario TOML: {0}")]
    Toml(#[from] toml::de::Error),
    /// A field violates a constraint.
    #[error("config error: {field}: {message}")]
    Invalid {
        /// Dotted field path (e.g. `"household.gas_bill"`).
        field: String,
        /// Human-readable constraint description.
        message: String,
    },
}

impl ConfigError {
    fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Invalid {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Field path for constraint violations.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Invalid { field, .. } => Some(field.as_str()),
            _ => None,
        }
    }
}

impl ScenarioConfig {
    /// Returns the baseline scenario: a gas household with solar and a battery.
    pub fn baseline() -> Self {
        Self::default()
    }

    /// Returns the all-electric preset: every gas appliance replaced and all
    /// flexible loads moved into the free window.
    pub fn all_electric() -> Self {
        let mut household = HouseholdProfile {
            heat_pump_upgrade: true,
            induction_upgrade: true,
            ..HouseholdProfile::default()
        };
        household.strategy.charge_battery_in_window = true;
        household.strategy.run_hot_water_in_window = true;

        Self {
            household,
            simulation: SimulationConfig {
                load_shifting: true,
                strategy: ChargingStrategy::FreeWindow,
                ..SimulationConfig::default()
            },
            ..Self::default()
        }
    }

    /// Returns the pool-owner preset: single-speed pump on a timer.
    pub fn pool_owner() -> Self {
        let mut household = HouseholdProfile {
            has_pool: true,
            has_old_dryer: true,
            ..HouseholdProfile::default()
        };
        household.current_setup.pool_pump = PoolPump::SingleSpeed;
        household.current_setup.hot_water = HotWaterSource::Resistive;
        household.strategy.run_pool_in_window = true;
        household.strategy.run_hot_water_in_window = true;

        Self {
            household,
            ..Self::default()
        }
    }

    /// Returns the EV preset: vehicle-to-home with windowed charging on an
    /// 80 A service.
    pub fn ev_v2h() -> Self {
        let mut household = HouseholdProfile {
            is_ev: true,
            is_v2h: true,
            service_fuse: ServiceFuse::Amps80,
            ..HouseholdProfile::default()
        };
        household.strategy.charge_ev_in_window = true;
        household.strategy.charge_battery_in_window = true;

        Self {
            household,
            simulation: SimulationConfig {
                strategy: ChargingStrategy::FreeWindow,
                ..SimulationConfig::default()
            },
            ..Self::default()
        }
    }

    /// Returns the winter preset: leaky house on gas heating with no upgrades.
    pub fn winter_leaky() -> Self {
        let mut household = HouseholdProfile {
            gas_bill: 1400.0,
            battery_kwh: 0.0,
            ..HouseholdProfile::default()
        };
        household.current_setup.heating = HeatingSource::Gas;
        household.current_setup.cooking = CookingSource::Gas;

        Self {
            household,
            simulation: SimulationConfig {
                battery_kwh: 0.0,
                heating: HourWindow::new(6, 9),
                season: Season::Winter,
                insulation: Insulation::Leaky,
                ..SimulationConfig::default()
            },
            ..Self::default()
        }
    }

    /// Available preset names.
    pub const PRESETS: &[&str] = &[
        "baseline",
        "all_electric",
        "pool_owner",
        "ev_v2h",
        "winter_leaky",
    ];

    /// Loads a scenario from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "baseline" => Ok(Self::baseline()),
            "all_electric" => Ok(Self::all_electric()),
            "pool_owner" => Ok(Self::pool_owner()),
            "ev_v2h" => Ok(Self::ev_v2h()),
            "winter_leaky" => Ok(Self::winter_leaky()),
            _ => Err(ConfigError::invalid(
                "preset",
                format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            )),
        }
    }

    /// Parses a scenario from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loading scenario");
        Self::from_toml_str(&content)
    }

    /// Parses a scenario from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Savings model bound to this scenario's tariff and assumptions.
    pub fn savings_model(&self) -> SavingsModel {
        SavingsModel::new(self.tariff.clone(), self.assumptions.clone())
    }

    /// Daily simulation bound to this scenario's physical parameters.
    pub fn daily_simulation(&self) -> DailySimulation {
        DailySimulation::new(self.simulation_params.clone())
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        let mut non_negative = |field: &str, value: f64| {
            if !value.is_finite() || value < 0.0 {
                errors.push(ConfigError::invalid(field, "must be a finite value >= 0"));
            }
        };

        let h = &self.household;
        non_negative("household.electricity_bill", h.electricity_bill);
        non_negative("household.gas_bill", h.gas_bill);
        non_negative("household.fuel_bill", h.fuel_bill);
        non_negative("household.solar_kw", h.solar_kw);
        non_negative("household.battery_kwh", h.battery_kwh);
        non_negative("household.export_limit_kw", h.export_limit_kw);

        let s = &self.simulation;
        non_negative("simulation.solar_kw", s.solar_kw);
        non_negative("simulation.battery_kwh", s.battery_kwh);

        let t = &self.tariff;
        non_negative("tariff.peak_rate", t.peak_rate);
        non_negative("tariff.off_peak_rate", t.off_peak_rate);
        non_negative("tariff.free_rate", t.free_rate);
        non_negative("tariff.ev_rate", t.ev_rate);
        non_negative("tariff.feed_in_rate", t.feed_in_rate);
        non_negative("tariff.fuel_price_per_litre", t.fuel_price_per_litre);
        non_negative("tariff.gas_supply_charge", t.gas_supply_charge);

        if s.heating.start > 23 {
            errors.push(ConfigError::invalid(
                "simulation.heating.start",
                "must be an hour in 0..=23",
            ));
        }
        if s.heating.end > 23 {
            errors.push(ConfigError::invalid(
                "simulation.heating.end",
                "must be an hour in 0..=23",
            ));
        }
        if t.inflation <= -1.0 {
            errors.push(ConfigError::invalid("tariff.inflation", "must be > -1.0"));
        }

        let a = &self.assumptions;
        if a.window_hours <= 0.0 {
            errors.push(ConfigError::invalid("assumptions.window_hours", "must be > 0"));
        }
        if a.gas_mj_per_dollar <= 0.0 {
            errors.push(ConfigError::invalid(
                "assumptions.gas_mj_per_dollar",
                "must be > 0",
            ));
        }
        if !(0.0..=1.0).contains(&a.peak_fraction) {
            errors.push(ConfigError::invalid(
                "assumptions.peak_fraction",
                "must be in [0.0, 1.0]",
            ));
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn baseline_preset_valid() {
        let cfg = ScenarioConfig::baseline();
        let errors = cfg.validate();
        assert!(errors.is_empty(), "baseline should be valid: {errors:?}");
    }

    #[test]
    fn from_preset_unknown() {
        let err = ScenarioConfig::from_preset("nonexistent");
        assert!(err.is_err());
        let msg = err.err().map(|e| e.to_string()).unwrap_or_default();
        assert!(msg.contains("unknown preset"));
    }

    #[test]
    fn valid_toml_parses() {
        let toml = r#"
[household]
electricity_bill = 4200.0
gas_bill = 0.0
is_ev = true
service_fuse = 80

[household.current_setup]
hot_water = "resistive"
heating = "reverse_cycle"
pool_pump = "variable_speed"

[household.strategy]
charge_ev_in_window = true

[simulation]
solar_kw = 10.0
season = "winter"
strategy = "free_window"
heating = { start = 6, end = 8 }

[tariff]
peak_rate = 0.45

[assumptions]
liability_years = 12
"#;
        let cfg = ScenarioConfig::from_toml_str(toml);
        assert!(cfg.is_ok(), "valid TOML should parse: {:?}", cfg.err());
        let cfg = cfg.ok();
        let cfg = cfg.as_ref();
        assert_eq!(cfg.map(|c| c.household.electricity_bill), Some(4200.0));
        assert_eq!(cfg.map(|c| c.household.service_fuse), Some(ServiceFuse::Amps80));
        assert_eq!(
            cfg.map(|c| c.household.current_setup.heating),
            Some(HeatingSource::ReverseCycle)
        );
        assert_eq!(cfg.map(|c| c.simulation.season), Some(Season::Winter));
        assert_eq!(
            cfg.map(|c| c.simulation.heating),
            Some(HourWindow::new(6, 8))
        );
        assert_eq!(cfg.map(|c| c.tariff.peak_rate), Some(0.45));
        assert_eq!(cfg.map(|c| c.tariff.off_peak_rate), Some(0.24));
        assert_eq!(cfg.map(|c| c.assumptions.liability_years), Some(12));
    }

    #[test]
    fn invalid_toml_unknown_field() {
        let toml = r#"
[household]
gas_bill = 100.0
bogus_field = true
"#;
        let result = ScenarioConfig::from_toml_str(toml);
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn unsupported_fuse_rejected_at_parse() {
        let toml = "[household]\nservice_fuse = 50\n";
        assert!(ScenarioConfig::from_toml_str(toml).is_err());
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = ScenarioConfig::from_toml_file(Path::new("/nonexistent/scenario.toml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn validation_catches_negative_bill() {
        let mut cfg = ScenarioConfig::baseline();
        cfg.household.gas_bill = -5.0;
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field() == Some("household.gas_bill")));
    }

    #[test]
    fn validation_catches_bad_heating_hour() {
        let mut cfg = ScenarioConfig::baseline();
        cfg.simulation.heating = HourWindow::new(17, 24);
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field() == Some("simulation.heating.end")));
    }

    #[test]
    fn validation_catches_nan_rate() {
        let mut cfg = ScenarioConfig::baseline();
        cfg.tariff.peak_rate = f64::NAN;
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field() == Some("tariff.peak_rate")));
    }

    #[test]
    fn all_presets_are_valid() {
        for name in ScenarioConfig::PRESETS {
            let cfg = ScenarioConfig::from_preset(name);
            assert!(cfg.is_ok(), "preset \"{name}\" should load");
            let errors = cfg.as_ref().map(|c| c.validate()).unwrap_or_default();
            assert!(
                errors.is_empty(),
                "preset \"{name}\" should be valid: {errors:?}"
            );
        }
    }

    #[test]
    fn winter_leaky_is_cold_and_leaky() {
        let cfg = ScenarioConfig::winter_leaky();
        assert_eq!(cfg.simulation.season, Season::Winter);
        assert_eq!(cfg.simulation.insulation, Insulation::Leaky);
    }

    #[test]
    fn ev_v2h_sets_both_flags() {
        let cfg = ScenarioConfig::ev_v2h();
        assert!(cfg.household.v2h_active());
    }

    #[test]
    fn partial_toml_uses_defaults() {
        let toml = r#"
[household]
solar_kw = 3.0
"#;
        let cfg = ScenarioConfig::from_toml_str(toml).ok();
        assert_eq!(cfg.as_ref().map(|c| c.household.solar_kw), Some(3.0));
        assert_eq!(cfg.as_ref().map(|c| c.household.gas_bill), Some(800.0));
        assert_eq!(cfg.as_ref().map(|c| c.simulation.battery_kwh), Some(13.5));
    }
}
