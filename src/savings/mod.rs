//! Annual savings model for a household on a free-window tariff.
//!
//! [`SavingsModel::evaluate`] turns a [`HouseholdProfile`] into a
//! [`SavingsResult`]. Peak-shifting mechanisms are resolved through the
//! [`waterfall`] so timers and storage never claim the same energy.

/// Per-category gas, pool, dryer and draught-proofing outcomes.
pub mod appliances;
/// Consumption implied by the declared bills.
pub mod baseline;
/// Service-fuse check for the free window.
pub mod capacity;
pub mod profile;
pub mod projection;
pub mod result;
/// Rooftop solar valuation.
pub mod solar;
pub mod transport;
pub mod upgrades;
pub mod waterfall;

use tracing::{info, warn};

pub use profile::{
    CookingSource, CurrentApplianceSetup, DryerType, HeatingSource, HotWaterSource,
    HouseholdProfile, LoadShiftStrategy, PoolPump, ServiceFuse,
};
pub use result::{LiabilityCosts, SavingsResult};

use appliances::ApplianceOutcome;
use baseline::BaselineUsage;
use capacity::{CapacityCheck, WindowLoads};
use projection::{CostProjection, payback_years};
use solar::SolarOutcome;
use upgrades::{SavingsByMechanism, upgrade_lines};
use waterfall::{PeakWaterfall, ShiftStage, StorageStage, TimerStage};

use crate::tariff::{Assumptions, DAYS_PER_YEAR, Tariff};

/// Savings model bound to one tariff and set of assumptions.
#[derive(Debug, Clone, Default)]
pub struct SavingsModel {
    pub tariff: Tariff,
    pub assumptions: Assumptions,
}

impl SavingsModel {
    pub fn new(tariff: Tariff, assumptions: Assumptions) -> Self {
        Self {
            tariff,
            assumptions,
        }
    }

    /// Evaluates every savings mechanism for a household.
    ///
    /// Never fails: divisions are guarded and every savings figure is
    /// clamped where the model requires it.
    pub fn evaluate(&self, profile: &HouseholdProfile) -> SavingsResult {
        let t = &self.tariff;
        let a = &self.assumptions;

        let usage = BaselineUsage::from_profile(profile, t, a);
        let usable_battery_kwh = if profile.v2h_active() {
            a.v2h_capacity_kwh
        } else {
            profile.battery_kwh.max(0.0)
        };
        let loads = WindowLoads::from_profile(profile, usable_battery_kwh);
        let capacity =
            CapacityCheck::evaluate(profile, loads, usage.base_load_kw, usable_battery_kwh, a);

        // Timers first, storage takes what is left.
        let peak_consumption_kwh = usage.peak_kwh(a);
        let mut waterfall = PeakWaterfall::new(peak_consumption_kwh);
        let pool_timer = TimerStage {
            label: "pool",
            shift_kwh: a.pool_timer_shift_kwh,
        };
        let hot_water_timer = TimerStage {
            label: "hot_water",
            shift_kwh: a.hot_water_timer_shift_kwh,
        };
        let mut timers: Vec<&dyn ShiftStage> = Vec::new();
        if loads.pool {
            timers.push(&pool_timer);
        }
        if loads.hot_water {
            timers.push(&hot_water_timer);
        }
        let manual_kwh = waterfall.apply_all(&timers);
        let battery_shift_kwh = waterfall.apply(&StorageStage {
            capacity_kwh: usable_battery_kwh,
        });

        let spread = t.peak_spread();
        let manual_shift_savings = manual_kwh * spread * DAYS_PER_YEAR;
        let gross_battery = battery_shift_kwh * spread * DAYS_PER_YEAR;
        let solar_opportunity_cost = if profile.solar_kw > 0.0 && loads.battery {
            battery_shift_kwh * a.solar_opportunity_fraction * t.feed_in_rate * DAYS_PER_YEAR
        } else {
            0.0
        };
        let fuse_constraint_cost = capacity.wasted_kwh * spread * DAYS_PER_YEAR;
        let battery_arbitrage_savings =
            (gross_battery - solar_opportunity_cost - fuse_constraint_cost).max(0.0);
        let battery_savings = manual_shift_savings + battery_arbitrage_savings;

        let solar = SolarOutcome::evaluate(
            profile.solar_kw,
            profile.export_limit_kw,
            usage.adjusted_daily_kwh,
            battery_shift_kwh,
            t,
            a,
        );
        let transport_savings =
            transport::transport_savings(profile.is_ev, profile.fuel_bill, t, a);
        let app = ApplianceOutcome::evaluate(profile, t, a);
        let gas_savings = app.gas.total_savings();

        let total_savings = battery_savings
            + solar.savings
            + transport_savings
            + gas_savings
            + app.pool.savings
            + app.dryer_savings
            + app.draught_proofing_savings;

        let upgrades = upgrade_lines(
            profile,
            SavingsByMechanism {
                battery_and_timers: battery_savings,
                solar: solar.savings,
                transport: transport_savings,
                appliances: &app,
            },
            a,
        );
        let system_cost: f64 = upgrades.iter().map(|u| u.cost).sum();
        let annual_spend = profile.electricity_bill + profile.gas_bill + profile.fuel_bill;
        let projection = CostProjection::build(
            annual_spend,
            total_savings,
            system_cost,
            a.projection_years,
            t,
        );

        let grid_price_warning = t.plausibility_warning();
        if let Some(warning) = &grid_price_warning {
            warn!("{warning}");
        }
        info!(
            total_savings,
            system_cost,
            breaker_tripped = capacity.breaker_tripped,
            "savings evaluated"
        );

        SavingsResult {
            manual_shift_savings,
            battery_arbitrage_savings,
            battery_savings,
            solar_savings: solar.savings,
            transport_savings,
            hot_water_savings: app.gas.hot_water.savings,
            heating_savings: app.gas.heating.savings,
            cooking_savings: app.gas.cooking.savings,
            gas_disconnection_bonus: app.gas.disconnection_bonus,
            gas_savings,
            gas_disconnected: app.gas.gas_disconnected,
            pool_pump_savings: app.pool.savings,
            dryer_savings: app.dryer_savings,
            draught_proofing_savings: app.draught_proofing_savings,
            total_savings,
            peak_consumption_kwh,
            battery_shift_kwh,
            solar_opportunity_cost,
            fuse_constraint_cost,
            waterfall: waterfall.into_shifts(),
            export_clipping_loss_kwh: solar.clipping_loss_kwh,
            liability: LiabilityCosts {
                hot_water: app.gas.hot_water.liability,
                heating: app.gas.heating.liability,
                cooking: app.gas.cooking.liability,
                pool: app.pool.liability,
            },
            capacity,
            projection,
            system_cost,
            payback_years: payback_years(system_cost, total_savings, a.payback_sentinel_years),
            upgrades,
            grid_price_warning,
        }
    }
}

/// Evaluates a household against the default tariff and assumptions.
pub fn calculate_savings(profile: &HouseholdProfile) -> SavingsResult {
    SavingsModel::default().evaluate(profile)
}
