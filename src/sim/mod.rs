/// Home battery dispatch.
pub mod battery;
pub mod engine;
/// Layered household load.
pub mod load;
pub mod params;
pub mod power_balance;
/// Seasonal solar generation curve.
pub mod solar;
pub mod summary;
/// Indoor temperature model.
pub mod thermal;
pub mod types;

pub use engine::{DailySimulation, HOURS_PER_DAY, HourState, generate_daily_profile};
pub use params::SimulationParams;
pub use summary::DailySummary;
pub use types::{ChargingStrategy, HourWindow, HourlyRecord, Insulation, Season, SimulationConfig};
