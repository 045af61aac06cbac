//! Hour-by-hour simulation of one day.

use tracing::{debug, info};

use super::battery::HomeBattery;
use super::load::LoadLayers;
use super::params::SimulationParams;
use super::solar::solar_output_kw;
use super::summary::DailySummary;
use super::thermal::next_temperature;
use super::types::{ChargingStrategy, HourlyRecord, SimulationConfig};

/// Hours in a simulated day.
pub const HOURS_PER_DAY: usize = 24;

/// State carried from one hour to the next.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HourState {
    pub battery: HomeBattery,
    pub indoor_temp_c: f64,
}

/// Daily simulation bound to a set of physical parameters.
///
/// Stateless between runs: every call to [`DailySimulation::run`] starts from
/// an empty battery and the initial indoor temperature.
#[derive(Debug, Clone, Default)]
pub struct DailySimulation {
    params: SimulationParams,
}

impl DailySimulation {
    pub fn new(params: SimulationParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &SimulationParams {
        &self.params
    }

    /// State at midnight.
    pub fn initial_state(&self, config: &SimulationConfig) -> HourState {
        HourState {
            battery: HomeBattery::new(config.battery_kwh, self.params.initial_soc_kwh),
            indoor_temp_c: self.params.initial_temp_c,
        }
    }

    /// Advances one hour.
    ///
    /// # Arguments
    ///
    /// * `config` - Day configuration
    /// * `state` - State at the start of the hour
    /// * `hour` - Hour of day (0-23)
    ///
    /// # Returns
    ///
    /// The state at the end of the hour and the record describing it.
    pub fn step(
        &self,
        config: &SimulationConfig,
        state: HourState,
        hour: usize,
    ) -> (HourState, HourlyRecord) {
        let p = &self.params;
        let layers = LoadLayers::at_hour(hour, config, p);
        let consumption_kw = layers.total_kw();
        let solar_kw = solar_output_kw(hour, config.season, config.solar_kw, p);
        let is_free_window = p.free_window.contains(hour);
        let is_heating_hour = config.heating.contains(hour);

        let (battery, flows) = match config.strategy {
            ChargingStrategy::FreeWindow if is_free_window => {
                state
                    .battery
                    .force_charge(solar_kw, consumption_kw, p.forced_charge_kw)
            }
            _ => state.battery.self_consume(solar_kw, consumption_kw),
        };
        let indoor_temp_c =
            next_temperature(state.indoor_temp_c, is_heating_hour, config.insulation, p);

        let record = HourlyRecord {
            hour,
            label: format!("{hour:02}:00"),
            solar_kw,
            consumption_kw,
            base_load_kw: layers.base_kw,
            heating_load_kw: layers.heating_kw,
            shiftable_load_kw: layers.shiftable_kw,
            battery_soc_kwh: battery.soc_kwh,
            battery_soc_percent: battery.soc_percent(),
            battery_activity_kw: flows.battery_kw,
            grid_import_kw: flows.import_kw,
            grid_export_kw: flows.export_kw,
            indoor_temp_c,
            is_free_window,
            is_heating_hour,
        };
        debug!(
            hour,
            solar_kw,
            consumption_kw,
            soc_kwh = battery.soc_kwh,
            import_kw = flows.import_kw,
            export_kw = flows.export_kw,
            "simulated hour"
        );

        (
            HourState {
                battery,
                indoor_temp_c,
            },
            record,
        )
    }

    /// Runs a full day and returns one record per hour.
    pub fn run(&self, config: &SimulationConfig) -> Vec<HourlyRecord> {
        let start = self.initial_state(config);
        let (_, records) = (0..HOURS_PER_DAY).fold(
            (start, Vec::with_capacity(HOURS_PER_DAY)),
            |(state, mut records), hour| {
                let (next, record) = self.step(config, state, hour);
                records.push(record);
                (next, records)
            },
        );
        info!(
            solar_kw = config.solar_kw,
            battery_kwh = config.battery_kwh,
            strategy = ?config.strategy,
            season = ?config.season,
            "daily profile generated"
        );
        records
    }

    /// Summarizes a day using this simulation's comfort threshold.
    pub fn summarize(&self, records: &[HourlyRecord]) -> DailySummary {
        DailySummary::from_records(records, self.params.comfort_floor_c)
    }
}

/// Runs a day with the default physical parameters.
pub fn generate_daily_profile(config: &SimulationConfig) -> Vec<HourlyRecord> {
    DailySimulation::default().run(config)
}
