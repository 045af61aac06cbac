//! Indoor temperature step.

use super::params::SimulationParams;
use super::types::Insulation;

/// Temperature at the end of an hour.
///
/// Heating raises the temperature towards the setpoint; otherwise the house
/// loses heat towards ambient at a rate set by its insulation.
pub fn next_temperature(
    previous_c: f64,
    heating_on: bool,
    insulation: Insulation,
    params: &SimulationParams,
) -> f64 {
    if heating_on {
        (previous_c + params.heating_rate_c).min(params.heating_target_c)
    } else {
        let decay = match insulation {
            Insulation::Sealed => params.sealed_decay_c,
            Insulation::Leaky => params.leaky_decay_c,
        };
        (previous_c - decay).max(params.ambient_temp_c)
    }
}
