//! Per-upgrade return on investment.

use serde::Serialize;

use super::appliances::ApplianceOutcome;
use super::profile::{HouseholdProfile, PoolPump};
use super::projection::payback_years;
use crate::tariff::Assumptions;

/// One row of the return-on-investment breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpgradeLine {
    pub name: &'static str,
    /// Installed price ($).
    pub cost: f64,
    /// Annual saving attributed to this upgrade ($/yr).
    pub annual_savings: f64,
    /// Cost of not upgrading over the liability horizon ($).
    pub liability: f64,
    pub payback_years: f64,
}

/// Annual savings already split by mechanism.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SavingsByMechanism<'a> {
    pub battery_and_timers: f64,
    pub solar: f64,
    pub transport: f64,
    pub appliances: &'a ApplianceOutcome,
}

/// Builds the ROI rows for every upgrade that costs or saves something.
pub(crate) fn upgrade_lines(
    profile: &HouseholdProfile,
    savings: SavingsByMechanism<'_>,
    a: &Assumptions,
) -> Vec<UpgradeLine> {
    let c = &a.costs;
    let app = savings.appliances;
    let gas = &app.gas;

    let pool_cost = if profile.pool_present()
        && profile.current_setup.pool_pump == PoolPump::SingleSpeed
        && !profile.strategy.run_pool_in_window
    {
        c.pool_pump
    } else {
        0.0
    };

    let candidates = [
        ("Solar", profile.solar_kw.max(0.0) * c.solar_per_kw, savings.solar, 0.0),
        (
            "Battery & timers",
            profile.battery_kwh.max(0.0) * c.battery_per_kwh,
            savings.battery_and_timers,
            0.0,
        ),
        (
            "Electric vehicle",
            if profile.is_ev { c.ev } else { 0.0 },
            savings.transport,
            0.0,
        ),
        (
            "Heat-pump hot water",
            if profile.upgrades_hot_water() { c.heat_pump_hot_water } else { 0.0 },
            gas.hot_water.savings,
            gas.hot_water.liability,
        ),
        (
            "Reverse-cycle heating",
            if profile.upgrades_heating() { c.reverse_cycle } else { 0.0 },
            gas.heating.savings,
            gas.heating.liability,
        ),
        (
            "Induction cooktop",
            if profile.upgrades_cooking() { c.induction } else { 0.0 },
            gas.cooking.savings,
            gas.cooking.liability,
        ),
        ("Gas disconnection", 0.0, gas.disconnection_bonus, 0.0),
        ("Pool pump", pool_cost, app.pool.savings, app.pool.liability),
        (
            "Heat-pump dryer",
            if app.dryer_savings > 0.0 { c.dryer } else { 0.0 },
            app.dryer_savings,
            0.0,
        ),
        (
            "Draught proofing",
            if app.draught_proofing_savings > 0.0 { c.draught_proofing } else { 0.0 },
            app.draught_proofing_savings,
            0.0,
        ),
    ];

    candidates
        .into_iter()
        .filter(|(_, cost, saving, _)| *cost > 0.0 || *saving > 0.0)
        .map(|(name, cost, annual_savings, liability)| UpgradeLine {
            name,
            cost,
            annual_savings,
            liability,
            payback_years: payback_years(cost, annual_savings, a.payback_sentinel_years),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tariff::Tariff;

    fn lines_for(profile: &HouseholdProfile, battery_and_timers: f64, solar: f64) -> Vec<UpgradeLine> {
        let a = Assumptions::default();
        let appliances = ApplianceOutcome::evaluate(profile, &Tariff::default(), &a);
        upgrade_lines(
            profile,
            SavingsByMechanism {
                battery_and_timers,
                solar,
                transport: 0.0,
                appliances: &appliances,
            },
            &a,
        )
    }

    #[test]
    fn default_household_lines() {
        let lines = lines_for(&HouseholdProfile::default(), 2000.0, 500.0);
        let names: Vec<&str> = lines.iter().map(|l| l.name).collect();
        assert_eq!(
            names,
            vec!["Solar", "Battery & timers", "Reverse-cycle heating", "Draught proofing"]
        );
        assert!((lines[0].cost - 6600.0).abs() < 1e-9);
        assert!((lines[1].cost - 16200.0).abs() < 1e-9);
    }

    #[test]
    fn free_upgrade_has_zero_payback() {
        let profile = HouseholdProfile {
            heat_pump_upgrade: true,
            induction_upgrade: true,
            ..HouseholdProfile::default()
        };
        let mut p = profile.clone();
        p.current_setup.heating = crate::savings::profile::HeatingSource::None;
        let lines = lines_for(&p, 0.0, 0.0);
        let bonus = lines.iter().find(|l| l.name == "Gas disconnection");
        assert!(bonus.is_some());
        assert_eq!(bonus.map(|l| l.payback_years), Some(0.0));
    }

    #[test]
    fn unprofitable_line_uses_sentinel() {
        let profile = HouseholdProfile {
            solar_kw: 0.0,
            battery_kwh: 10.0,
            ..HouseholdProfile::default()
        };
        let lines = lines_for(&profile, 0.0, 0.0);
        let battery = lines.iter().find(|l| l.name == "Battery & timers");
        assert_eq!(battery.map(|l| l.payback_years), Some(999.0));
    }
}
