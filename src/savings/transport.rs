//! Petrol-to-EV running cost comparison.

use crate::tariff::{Assumptions, Tariff};

/// Annual distance implied by the fuel bill (km).
pub fn annual_km(fuel_bill: f64, tariff: &Tariff, a: &Assumptions) -> f64 {
    if tariff.fuel_price_per_litre <= 0.0 || a.petrol_l_per_100km <= 0.0 {
        return 0.0;
    }
    fuel_bill / tariff.fuel_price_per_litre / a.petrol_l_per_100km * 100.0
}

/// Savings from driving the same distance on electricity charged at the EV rate.
///
/// Returns zero for households without an EV.
pub fn transport_savings(is_ev: bool, fuel_bill: f64, tariff: &Tariff, a: &Assumptions) -> f64 {
    if !is_ev {
        return 0.0;
    }
    let km = annual_km(fuel_bill, tariff, a);
    let ev_cost = km / 100.0 * a.ev_kwh_per_100km * tariff.ev_rate;
    fuel_bill - ev_cost
}
