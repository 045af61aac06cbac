//! Clear-sky solar output curve.

use super::params::SimulationParams;
use super::types::Season;

/// Solar output (kW) for a given hour.
///
/// A Gaussian centred on the peak hour, scaled by array size and by the
/// seasonal amplitude. Non-positive array sizes produce nothing.
///
/// # Arguments
///
/// * `hour` - Hour of day (0-23)
/// * `season` - Summer or winter amplitude
/// * `solar_kw` - Array size
/// * `params` - Curve shape
pub fn solar_output_kw(hour: usize, season: Season, solar_kw: f64, params: &SimulationParams) -> f64 {
    if solar_kw <= 0.0 || params.solar_spread_hours <= 0.0 {
        return 0.0;
    }
    let amplitude = match season {
        Season::Summer => 1.0,
        Season::Winter => params.winter_solar_factor,
    };
    let offset = hour as f64 - params.solar_peak_hour;
    let sigma = params.solar_spread_hours;
    let gaussian = (-(offset * offset) / (2.0 * sigma * sigma)).exp();
    solar_kw * gaussian * amplitude
}
