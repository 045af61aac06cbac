//! Household electrification savings calculator and daily energy simulator.

/// TOML scenarios and built-in presets.
pub mod config;
pub mod fragment;
/// CSV export.
pub mod io;
/// Annual savings model and peak-shift waterfall.
pub mod savings;
/// Hour-by-hour simulation of one day.
pub mod sim;
pub mod tariff;

pub use config::{ConfigError, ScenarioConfig};
pub use savings::{HouseholdProfile, SavingsModel, SavingsResult, calculate_savings};
pub use sim::{DailySummary, HourlyRecord, SimulationConfig, generate_daily_profile};
