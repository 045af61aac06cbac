//! Shared test fixtures for integration tests.
#![allow(dead_code)]

use rand::Rng;
use rand::rngs::StdRng;

use energy_savings_sim::savings::{
    CookingSource, DryerType, HeatingSource, HotWaterSource, HouseholdProfile, PoolPump,
    ServiceFuse,
};
use energy_savings_sim::sim::{
    ChargingStrategy, HourWindow, Insulation, Season, SimulationConfig,
};

/// Default residential household: gas appliances, 6.6 kW solar, 13.5 kWh
/// battery, 63 A service, no strategies enabled.
pub fn default_household() -> HouseholdProfile {
    HouseholdProfile::default()
}

/// Household that already runs every appliance on electricity.
pub fn electric_household() -> HouseholdProfile {
    let mut p = HouseholdProfile {
        gas_bill: 0.0,
        ..HouseholdProfile::default()
    };
    p.current_setup.hot_water = HotWaterSource::Resistive;
    p.current_setup.heating = HeatingSource::ReverseCycle;
    p.current_setup.cooking = CookingSource::Induction;
    p
}

/// Household whose gas can be disconnected: heat-pump and induction
/// upgrades selected, no space heating.
pub fn gas_disconnection_household() -> HouseholdProfile {
    let mut p = HouseholdProfile {
        gas_bill: 800.0,
        heat_pump_upgrade: true,
        induction_upgrade: true,
        ..HouseholdProfile::default()
    };
    p.current_setup.hot_water = HotWaterSource::Gas;
    p.current_setup.heating = HeatingSource::None;
    p.current_setup.cooking = CookingSource::Gas;
    p
}

/// Household with every window load enabled on the given service.
pub fn fully_shifted_household(fuse: ServiceFuse) -> HouseholdProfile {
    let mut p = HouseholdProfile {
        is_ev: true,
        has_pool: true,
        service_fuse: fuse,
        ..electric_household()
    };
    p.current_setup.pool_pump = PoolPump::SingleSpeed;
    p.strategy.charge_ev_in_window = true;
    p.strategy.charge_battery_in_window = true;
    p.strategy.run_pool_in_window = true;
    p.strategy.run_hot_water_in_window = true;
    p
}

fn pick<T: Copy>(rng: &mut StdRng, options: &[T]) -> T {
    options[rng.random_range(0..options.len())]
}

/// Random but plausible household answers.
pub fn random_household(rng: &mut StdRng) -> HouseholdProfile {
    let mut p = HouseholdProfile {
        electricity_bill: rng.random_range(0.0..8000.0),
        gas_bill: rng.random_range(0.0..2500.0),
        fuel_bill: rng.random_range(0.0..6000.0),
        solar_kw: rng.random_range(0.0..20.0),
        battery_kwh: rng.random_range(0.0..40.0),
        is_ev: rng.random_bool(0.5),
        is_v2h: rng.random_bool(0.5),
        heat_pump_upgrade: rng.random_bool(0.5),
        induction_upgrade: rng.random_bool(0.5),
        has_pool: rng.random_bool(0.5),
        has_old_dryer: rng.random_bool(0.5),
        export_limit_kw: pick(rng, &[0.0, 1.5, 5.0, 10.0, 999.0]),
        service_fuse: pick(
            rng,
            &[ServiceFuse::Amps63, ServiceFuse::Amps80, ServiceFuse::ThreePhase100],
        ),
        ..HouseholdProfile::default()
    };
    p.current_setup.hot_water = pick(
        rng,
        &[HotWaterSource::Gas, HotWaterSource::Resistive, HotWaterSource::Heatpump],
    );
    p.current_setup.heating = pick(
        rng,
        &[
            HeatingSource::Gas,
            HeatingSource::Resistive,
            HeatingSource::ReverseCycle,
            HeatingSource::None,
        ],
    );
    p.current_setup.cooking = pick(rng, &[CookingSource::Gas, CookingSource::Induction]);
    p.current_setup.pool_pump = pick(
        rng,
        &[PoolPump::None, PoolPump::SingleSpeed, PoolPump::VariableSpeed],
    );
    p.current_setup.dryer = pick(rng, &[DryerType::Vented, DryerType::Heatpump]);
    p.strategy.charge_ev_in_window = rng.random_bool(0.5);
    p.strategy.charge_battery_in_window = rng.random_bool(0.5);
    p.strategy.run_pool_in_window = rng.random_bool(0.5);
    p.strategy.run_hot_water_in_window = rng.random_bool(0.5);
    p
}

/// Random day configuration, including inverted heating windows.
pub fn random_simulation(rng: &mut StdRng) -> SimulationConfig {
    SimulationConfig {
        solar_kw: rng.random_range(0.0..15.0),
        battery_kwh: pick(rng, &[0.0, 5.0, 13.5, 27.0]),
        heating: HourWindow::new(rng.random_range(0..24), rng.random_range(0..24)),
        load_shifting: rng.random_bool(0.5),
        season: pick(rng, &[Season::Summer, Season::Winter]),
        strategy: pick(rng, &[ChargingStrategy::Standard, ChargingStrategy::FreeWindow]),
        insulation: pick(rng, &[Insulation::Sealed, Insulation::Leaky]),
    }
}
