//! Annual rooftop solar value with export clipping.

use serde::Serialize;

use crate::tariff::{Assumptions, DAYS_PER_YEAR, Tariff};

/// Annual solar energy split and its value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SolarOutcome {
    pub generation_kwh: f64,
    pub self_use_kwh: f64,
    /// Export after clipping (kWh/yr).
    pub export_kwh: f64,
    /// Export lost to the network limit (kWh/yr).
    pub clipping_loss_kwh: f64,
    pub savings: f64,
}

impl SolarOutcome {
    /// Values a solar system against the remaining household load.
    ///
    /// # Arguments
    ///
    /// * `solar_kw` - Array size
    /// * `export_limit_kw` - Network export limit; the unlimited sentinel disables clipping
    /// * `adjusted_daily_kwh` - Household consumption after electrification
    /// * `battery_shift_daily_kwh` - Peak energy already covered by storage
    pub fn evaluate(
        solar_kw: f64,
        export_limit_kw: f64,
        adjusted_daily_kwh: f64,
        battery_shift_daily_kwh: f64,
        tariff: &Tariff,
        a: &Assumptions,
    ) -> Self {
        if solar_kw <= 0.0 {
            return Self {
                generation_kwh: 0.0,
                self_use_kwh: 0.0,
                export_kwh: 0.0,
                clipping_loss_kwh: 0.0,
                savings: 0.0,
            };
        }

        let generation_kwh = solar_kw * a.solar_yield_kwh_per_kw * DAYS_PER_YEAR;
        let remaining_load_kwh =
            (adjusted_daily_kwh - battery_shift_daily_kwh) * DAYS_PER_YEAR;
        let self_use_kwh = remaining_load_kwh
            .min(generation_kwh * a.solar_self_use_fraction)
            .max(0.0);
        let mut export_kwh = generation_kwh - self_use_kwh;

        let mut clipping_loss_kwh = 0.0;
        if export_limit_kw < a.unlimited_export_kw {
            let daytime_load_kw = adjusted_daily_kwh / 24.0 * a.daytime_load_factor;
            let excess_kw = solar_kw - daytime_load_kw - export_limit_kw;
            if excess_kw > 0.0 {
                clipping_loss_kwh = excess_kw * a.clipping_hours_per_day * DAYS_PER_YEAR;
                export_kwh = (export_kwh - clipping_loss_kwh).max(0.0);
            }
        }

        Self {
            generation_kwh,
            self_use_kwh,
            export_kwh,
            clipping_loss_kwh,
            savings: self_use_kwh * tariff.off_peak_rate + export_kwh * tariff.feed_in_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluate(solar_kw: f64, limit: f64) -> SolarOutcome {
        // 3000 / 365 / 0.41 kWh/day
        let daily = 3000.0 / 365.0 / 0.41;
        SolarOutcome::evaluate(solar_kw, limit, daily, 0.0, &Tariff::default(), &Assumptions::default())
    }

    #[test]
    fn no_array_no_savings() {
        let s = evaluate(0.0, 5.0);
        assert_eq!(s.savings, 0.0);
        assert_eq!(s.clipping_loss_kwh, 0.0);
    }

    #[test]
    fn generation_uses_yield() {
        let s = evaluate(6.6, 999.0);
        assert!((s.generation_kwh - 6.6 * 3.8 * 365.0).abs() < 1e-9);
        assert!((s.self_use_kwh + s.export_kwh - s.generation_kwh).abs() < 1e-9);
    }

    #[test]
    fn self_use_capped_at_thirty_percent() {
        let s = evaluate(6.6, 999.0);
        assert!((s.self_use_kwh - s.generation_kwh * 0.3).abs() < 1e-9);
    }

    #[test]
    fn small_array_not_clipped() {
        assert_eq!(evaluate(3.0, 5.0).clipping_loss_kwh, 0.0);
    }

    #[test]
    fn clipping_monotone_in_limit() {
        let five = evaluate(17.0, 5.0);
        let ten = evaluate(17.0, 10.0);
        let unlimited = evaluate(17.0, 999.0);
        assert!(five.clipping_loss_kwh > ten.clipping_loss_kwh);
        assert_eq!(unlimited.clipping_loss_kwh, 0.0);
        assert!(five.savings < ten.savings);
        assert!(ten.savings < unlimited.savings);
    }

    #[test]
    fn zero_limit_clips_heavily() {
        let zero = evaluate(6.6, 0.0);
        assert!(zero.clipping_loss_kwh > 0.0);
        assert!(zero.export_kwh >= 0.0);
        assert!(zero.savings < evaluate(6.6, 999.0).savings);
    }

    #[test]
    fn clipping_loss_uses_daytime_load_and_clipping_hours() {
        let s = SolarOutcome::evaluate(10.0, 2.0, 24.0, 0.0, &Tariff::default(), &Assumptions::default());
        // (10 - 24 / 24 * 0.6 - 2) kW over 2.5 h a day
        assert!((s.clipping_loss_kwh - 7.4 * 2.5 * 365.0).abs() < 1e-9);
        let unclipped = 10.0 * 3.8 * 365.0 * 0.7;
        assert!((s.export_kwh - (unclipped - 7.4 * 2.5 * 365.0)).abs() < 1e-9);
    }

    #[test]
    fn export_floors_at_zero_when_clipping_exceeds_it() {
        let a = Assumptions {
            clipping_hours_per_day: 5.0,
            ..Assumptions::default()
        };
        let t = Tariff::default();
        let s = SolarOutcome::evaluate(10.0, 0.0, 24.0, 0.0, &t, &a);
        assert!((s.clipping_loss_kwh - 9.4 * 5.0 * 365.0).abs() < 1e-9);
        assert!(s.clipping_loss_kwh > s.generation_kwh - s.self_use_kwh);
        assert_eq!(s.export_kwh, 0.0);
        assert!((s.savings - s.self_use_kwh * t.off_peak_rate).abs() < 1e-9);
    }

    #[test]
    fn battery_shift_reduces_self_use_headroom() {
        let daily = 10.0;
        let t = Tariff::default();
        let a = Assumptions::default();
        let without = SolarOutcome::evaluate(10.0, 999.0, daily, 0.0, &t, &a);
        let with = SolarOutcome::evaluate(10.0, 999.0, daily, 8.0, &t, &a);
        assert!(with.self_use_kwh < without.self_use_kwh);
        assert!((with.self_use_kwh - 2.0 * 365.0).abs() < 1e-9);
    }
}
