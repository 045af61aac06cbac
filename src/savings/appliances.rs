//! Appliance electrification: gas categories, pool pump, dryer and draught proofing.

use serde::Serialize;
use tracing::debug;

use super::profile::{
    CookingSource, DryerType, HeatingSource, HotWaterSource, HouseholdProfile, PoolPump,
};
use crate::tariff::{Assumptions, Tariff};

/// Running cost, saving and inaction liability of one appliance category.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct CategoryOutcome {
    /// What the current appliance costs to run ($/yr).
    pub current_annual_cost: f64,
    /// Saving from the selected upgrade ($/yr); zero when not upgraded.
    pub savings: f64,
    /// Inflated cost of keeping the current appliance over the liability horizon ($).
    pub liability: f64,
}

/// Gas-appliance categories plus the supply charge avoided on disconnection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GasOutcome {
    pub hot_water: CategoryOutcome,
    pub heating: CategoryOutcome,
    pub cooking: CategoryOutcome,
    pub gas_disconnected: bool,
    pub disconnection_bonus: f64,
}

impl GasOutcome {
    /// Category savings plus the disconnection bonus.
    pub fn total_savings(&self) -> f64 {
        self.hot_water.savings + self.heating.savings + self.cooking.savings + self.disconnection_bonus
    }
}

/// Appliance savings and liabilities for one household.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ApplianceOutcome {
    pub gas: GasOutcome,
    pub pool: CategoryOutcome,
    pub dryer_savings: f64,
    pub draught_proofing_savings: f64,
}

impl ApplianceOutcome {
    /// Evaluates every appliance category for a household.
    pub fn evaluate(profile: &HouseholdProfile, tariff: &Tariff, a: &Assumptions) -> Self {
        let gas = evaluate_gas(profile, tariff, a);
        let pool = evaluate_pool(profile, tariff, a);

        let dryer_savings = if profile.has_old_dryer && profile.current_setup.dryer == DryerType::Vented {
            (a.dryer_vented_kwh - a.dryer_heat_pump_kwh) * tariff.off_peak_rate
        } else {
            0.0
        };
        let draught_proofing_savings = gas.heating.current_annual_cost * a.draught_proofing_fraction;

        Self {
            gas,
            pool,
            dryer_savings,
            draught_proofing_savings,
        }
    }
}

fn evaluate_gas(profile: &HouseholdProfile, tariff: &Tariff, a: &Assumptions) -> GasOutcome {
    let setup = &profile.current_setup;
    let off_peak = tariff.off_peak_rate;
    let years = a.liability_years;

    let hot_water = {
        let (cost, resistive) = match setup.hot_water {
            HotWaterSource::Gas => (profile.gas_bill * a.gas_share_hot_water, false),
            HotWaterSource::Resistive => (a.resistive_hot_water_kwh * off_peak, true),
            HotWaterSource::Heatpump => (0.0, false),
        };
        category(cost, resistive, profile.upgrades_hot_water(), a.hot_water_cop, tariff, years)
    };

    let heating = {
        let (cost, resistive) = match setup.heating {
            HeatingSource::Gas => (profile.gas_bill * a.gas_share_heating, false),
            HeatingSource::Resistive => (a.resistive_heating_kwh * off_peak, true),
            HeatingSource::ReverseCycle | HeatingSource::None => (0.0, false),
        };
        category(cost, resistive, profile.upgrades_heating(), a.heating_cop, tariff, years)
    };

    let cooking = {
        let cost = match setup.cooking {
            CookingSource::Gas => profile.gas_bill * a.gas_share_cooking,
            CookingSource::Induction => 0.0,
        };
        category(cost, false, profile.upgrades_cooking(), a.cooking_factor, tariff, years)
    };

    let hot_water_on_gas = setup.hot_water == HotWaterSource::Gas && !profile.upgrades_hot_water();
    let cooking_on_gas = setup.cooking == CookingSource::Gas && !profile.upgrades_cooking();
    let heating_on_gas = setup.heating == HeatingSource::Gas && !profile.upgrades_heating();
    let gas_disconnected =
        profile.gas_bill > 0.0 && !hot_water_on_gas && !cooking_on_gas && !heating_on_gas;

    let disconnection_bonus = if gas_disconnected {
        tariff.gas_supply_charge
    } else {
        0.0
    };
    debug!(gas_disconnected, disconnection_bonus, "gas categories evaluated");

    GasOutcome {
        hot_water,
        heating,
        cooking,
        gas_disconnected,
        disconnection_bonus,
    }
}

/// Saving and liability for one category.
///
/// Gas baselines pay `cost / efficiency` kWh at the off-peak rate after the
/// upgrade. Resistive baselines keep `1 / efficiency` of their cost.
fn category(
    current_annual_cost: f64,
    resistive: bool,
    upgraded: bool,
    efficiency: f64,
    tariff: &Tariff,
    liability_years: u32,
) -> CategoryOutcome {
    let savings = if !upgraded || current_annual_cost <= 0.0 || efficiency <= 0.0 {
        0.0
    } else if resistive {
        current_annual_cost * (1.0 - 1.0 / efficiency)
    } else {
        current_annual_cost - current_annual_cost / efficiency * tariff.off_peak_rate
    };

    CategoryOutcome {
        current_annual_cost,
        savings,
        liability: tariff.compounded(current_annual_cost, liability_years),
    }
}

fn evaluate_pool(profile: &HouseholdProfile, tariff: &Tariff, a: &Assumptions) -> CategoryOutcome {
    if !profile.pool_present() {
        return CategoryOutcome::default();
    }
    let off_peak = tariff.off_peak_rate;
    let single_cost = a.pool_single_speed_kwh * off_peak;
    let variable_cost = a.pool_variable_speed_kwh * off_peak;

    let (current_annual_cost, savings) = match profile.current_setup.pool_pump {
        PoolPump::SingleSpeed if profile.strategy.run_pool_in_window => (single_cost, single_cost),
        PoolPump::SingleSpeed => (single_cost, single_cost - variable_cost),
        PoolPump::VariableSpeed => (variable_cost, 0.0),
        PoolPump::None => (0.0, 0.0),
    };

    CategoryOutcome {
        current_annual_cost,
        savings,
        liability: tariff.compounded(current_annual_cost, a.liability_years),
    }
}
