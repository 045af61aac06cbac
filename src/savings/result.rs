//! Savings model output.

use std::fmt;

use serde::Serialize;

use super::capacity::CapacityCheck;
use super::projection::CostProjection;
use super::upgrades::UpgradeLine;
use super::waterfall::StageShift;

/// Paybacks beyond this many years are shown as not applicable.
const PAYBACK_DISPLAY_LIMIT_YEARS: f64 = 100.0;

/// Inflated cost of keeping each current appliance.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct LiabilityCosts {
    pub hot_water: f64,
    pub heating: f64,
    pub cooking: f64,
    pub pool: f64,
}

impl LiabilityCosts {
    pub fn total(&self) -> f64 {
        self.hot_water + self.heating + self.cooking + self.pool
    }
}

/// Annual savings, liabilities, capacity check and projection for one household.
///
/// Every dollar figure is per year unless noted. Nothing here is negative
/// except `transport_savings`, which can only be negative under a tariff
/// where charging costs more than fuel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SavingsResult {
    /// Timers moving fixed loads into the free window.
    pub manual_shift_savings: f64,
    /// Storage shifting net of solar opportunity and fuse constraint costs.
    pub battery_arbitrage_savings: f64,
    /// `manual_shift_savings + battery_arbitrage_savings`.
    pub battery_savings: f64,
    pub solar_savings: f64,
    pub transport_savings: f64,
    pub hot_water_savings: f64,
    pub heating_savings: f64,
    pub cooking_savings: f64,
    pub gas_disconnection_bonus: f64,
    /// Sum of the three gas categories and the disconnection bonus.
    pub gas_savings: f64,
    pub gas_disconnected: bool,
    pub pool_pump_savings: f64,
    pub dryer_savings: f64,
    pub draught_proofing_savings: f64,
    pub total_savings: f64,

    /// Peak-period consumption before shifting (kWh/day).
    pub peak_consumption_kwh: f64,
    /// Peak energy moved by storage (kWh/day).
    pub battery_shift_kwh: f64,
    /// Feed-in revenue forgone by charging storage from solar ($/yr).
    pub solar_opportunity_cost: f64,
    /// Value of window energy the service fuse cannot carry ($/yr).
    pub fuse_constraint_cost: f64,
    /// Stage-by-stage waterfall record.
    pub waterfall: Vec<StageShift>,
    /// Export lost to the network limit (kWh/yr).
    pub export_clipping_loss_kwh: f64,

    pub liability: LiabilityCosts,
    pub capacity: CapacityCheck,
    pub projection: CostProjection,
    /// Upfront price of every selected upgrade ($).
    pub system_cost: f64,
    pub payback_years: f64,
    pub upgrades: Vec<UpgradeLine>,
    /// Advisory when the tariff looks implausible.
    pub grid_price_warning: Option<String>,
}

impl SavingsResult {
    pub fn upgrades(&self) -> &[UpgradeLine] {
        &self.upgrades
    }

    /// Payback for display, `None` when it is effectively never.
    pub fn display_payback_years(&self) -> Option<f64> {
        display_payback(self.payback_years)
    }
}

fn display_payback(years: f64) -> Option<f64> {
    (years <= PAYBACK_DISPLAY_LIMIT_YEARS).then_some(years)
}

fn fmt_payback(years: f64) -> String {
    match display_payback(years) {
        Some(y) => format!("{y:.1} yrs"),
        None => "N/A".to_string(),
    }
}

impl fmt::Display for SavingsResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Annual Savings ---")?;
        writeln!(f, "Timer shifting:        ${:.2}", self.manual_shift_savings)?;
        writeln!(f, "Battery arbitrage:     ${:.2}", self.battery_arbitrage_savings)?;
        writeln!(f, "Solar:                 ${:.2}", self.solar_savings)?;
        writeln!(f, "Transport:             ${:.2}", self.transport_savings)?;
        writeln!(
            f,
            "Gas appliances:        ${:.2} (hot water {:.2}, heating {:.2}, cooking {:.2}, supply {:.2})",
            self.gas_savings,
            self.hot_water_savings,
            self.heating_savings,
            self.cooking_savings,
            self.gas_disconnection_bonus
        )?;
        writeln!(f, "Pool pump:             ${:.2}", self.pool_pump_savings)?;
        writeln!(f, "Dryer:                 ${:.2}", self.dryer_savings)?;
        writeln!(f, "Draught proofing:      ${:.2}", self.draught_proofing_savings)?;
        writeln!(f, "Total:                 ${:.2}", self.total_savings)?;
        writeln!(f)?;

        writeln!(f, "--- Free Window Capacity ---")?;
        let c = &self.capacity;
        writeln!(f, "Service limit:         {:.2} kW", c.max_kw)?;
        writeln!(
            f,
            "Peak load:             {:.2} kW{}",
            c.peak_load_kw,
            if c.breaker_tripped { " (breaker trips)" } else { "" }
        )?;
        writeln!(
            f,
            "Window import:         {:.2} of {:.2} kWh requested ({:.2} kWh wasted)",
            c.actual_import_kwh(),
            c.requested_kwh,
            c.wasted_kwh
        )?;
        writeln!(f, "Export clipping loss:  {:.0} kWh/yr", self.export_clipping_loss_kwh)?;
        writeln!(f)?;

        writeln!(f, "--- 10-Year Liability ---")?;
        writeln!(f, "Hot water:             ${:.0}", self.liability.hot_water)?;
        writeln!(f, "Heating:               ${:.0}", self.liability.heating)?;
        writeln!(f, "Cooking:               ${:.0}", self.liability.cooking)?;
        writeln!(f, "Pool:                  ${:.0}", self.liability.pool)?;
        writeln!(f)?;

        if !self.upgrades.is_empty() {
            writeln!(f, "--- Upgrades ---")?;
            for line in &self.upgrades {
                writeln!(
                    f,
                    "{:<22} cost ${:>9.0}  saves ${:>8.2}/yr  payback {}",
                    line.name,
                    line.cost,
                    line.annual_savings,
                    fmt_payback(line.payback_years)
                )?;
            }
            writeln!(f)?;
        }

        writeln!(f, "--- Projection ---")?;
        writeln!(f, "System cost:           ${:.0}", self.system_cost)?;
        writeln!(f, "Payback:               {}", fmt_payback(self.payback_years))?;
        let years = self.projection.years();
        if let (Some(legacy), Some(optimized)) =
            (self.projection.legacy.last(), self.projection.optimized.last())
        {
            writeln!(
                f,
                "{years}-year spend:         ${legacy:.0} legacy vs ${optimized:.0} upgraded"
            )?;
        }
        if let Some(warning) = &self.grid_price_warning {
            writeln!(f)?;
            write!(f, "Warning: {warning}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payback_over_limit_is_not_applicable() {
        assert_eq!(fmt_payback(999.0), "N/A");
        assert_eq!(fmt_payback(7.24), "7.2 yrs");
        assert_eq!(display_payback(100.0), Some(100.0));
    }

    #[test]
    fn liability_total_sums_categories() {
        let l = LiabilityCosts {
            hot_water: 1.0,
            heating: 2.0,
            cooking: 3.0,
            pool: 4.0,
        };
        assert_eq!(l.total(), 10.0);
    }
}
