//! Household power balance.

use super::types::HourlyRecord;

/// Net grid flow implied by household load, solar and battery power.
///
/// Inputs use the household convention:
/// - `consumption_kw` positive load
/// - `solar_kw` positive generation
/// - `battery_kw` positive=charge, negative=discharge
///
/// # Returns
///
/// Net grid power in kW (positive=import, negative=export)
pub fn grid_net_kw(consumption_kw: f64, solar_kw: f64, battery_kw: f64) -> f64 {
    consumption_kw + battery_kw - solar_kw
}

/// How far a record is from closing its energy balance (kW).
///
/// Zero when `solar − consumption == battery + export − import`.
pub fn balance_residual_kw(r: &HourlyRecord) -> f64 {
    (r.solar_kw - r.consumption_kw)
        - (r.battery_activity_kw + r.grid_export_kw - r.grid_import_kw)
}

/// How far a record's consumption is from the sum of its layers (kW).
pub fn layer_residual_kw(r: &HourlyRecord) -> f64 {
    r.consumption_kw - (r.base_load_kw + r.heating_load_kw + r.shiftable_load_kw)
}
