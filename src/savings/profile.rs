//! Household inputs to the savings model.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Current hot water system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HotWaterSource {
    #[default]
    Gas,
    Resistive,
    #[serde(alias = "heat_pump")]
    Heatpump,
}

/// Current space heating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeatingSource {
    #[default]
    Gas,
    Resistive,
    #[serde(alias = "reverse-cycle")]
    ReverseCycle,
    None,
}

/// Current cooktop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CookingSource {
    #[default]
    Gas,
    Induction,
}

/// Installed pool pump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PoolPump {
    #[default]
    None,
    SingleSpeed,
    VariableSpeed,
}

/// Installed clothes dryer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DryerType {
    #[default]
    Vented,
    #[serde(alias = "heat_pump")]
    Heatpump,
}

macro_rules! literal_names {
    ($ty:ty { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $ty {
            /// Literal name used in scenario files and share fragments.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($name => Ok(Self::$variant),)+
                    _ => Err(format!(
                        "expected one of {}",
                        [$($name),+].join(", ")
                    )),
                }
            }
        }
    };
}

literal_names!(HotWaterSource {
    Gas => "gas",
    Resistive => "resistive",
    Heatpump => "heatpump",
});
literal_names!(HeatingSource {
    Gas => "gas",
    Resistive => "resistive",
    ReverseCycle => "reverse_cycle",
    None => "none",
});
literal_names!(CookingSource {
    Gas => "gas",
    Induction => "induction",
});
literal_names!(PoolPump {
    None => "none",
    SingleSpeed => "single_speed",
    VariableSpeed => "variable_speed",
});
literal_names!(DryerType {
    Vented => "vented",
    Heatpump => "heatpump",
});

/// Main service fuse rating.
///
/// The 100 A option stands for a three-phase supply and is rated at
/// 3 × 63 A rather than its literal value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum ServiceFuse {
    #[default]
    Amps63,
    Amps80,
    ThreePhase100,
}

/// Per-phase rating of a three-phase service (A).
const THREE_PHASE_AMPS_PER_PHASE: f64 = 63.0;

impl ServiceFuse {
    /// All selectable ratings, in amps.
    pub const RATINGS: &[u32] = &[63, 80, 100];

    /// Nominal rating in amps.
    pub fn amps(self) -> u32 {
        match self {
            Self::Amps63 => 63,
            Self::Amps80 => 80,
            Self::ThreePhase100 => 100,
        }
    }

    /// Maximum sustainable import (kW) at the given supply voltage.
    pub fn max_kw(self, voltage: f64) -> f64 {
        match self {
            Self::ThreePhase100 => 3.0 * THREE_PHASE_AMPS_PER_PHASE * voltage / 1000.0,
            other => f64::from(other.amps()) * voltage / 1000.0,
        }
    }
}

impl TryFrom<u32> for ServiceFuse {
    type Error = String;

    fn try_from(amps: u32) -> Result<Self, Self::Error> {
        match amps {
            63 => Ok(Self::Amps63),
            80 => Ok(Self::Amps80),
            100 => Ok(Self::ThreePhase100),
            other => Err(format!(
                "unsupported service fuse {other} A, expected one of 63, 80, 100"
            )),
        }
    }
}

impl From<ServiceFuse> for u32 {
    fn from(fuse: ServiceFuse) -> Self {
        fuse.amps()
    }
}

/// What the household runs today.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CurrentApplianceSetup {
    pub hot_water: HotWaterSource,
    pub heating: HeatingSource,
    pub cooking: CookingSource,
    pub pool_pump: PoolPump,
    pub dryer: DryerType,
}

/// Loads the household moves into the free window.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoadShiftStrategy {
    pub charge_ev_in_window: bool,
    pub charge_battery_in_window: bool,
    pub run_pool_in_window: bool,
    pub run_hot_water_in_window: bool,
}

/// Declared bills, installed hardware and proposed upgrades for one home.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HouseholdProfile {
    /// Annual electricity bill ($).
    pub electricity_bill: f64,
    /// Annual gas bill ($).
    pub gas_bill: f64,
    /// Annual fuel bill for the household car ($).
    pub fuel_bill: f64,
    /// Rooftop solar size (kW).
    pub solar_kw: f64,
    /// Home battery capacity (kWh).
    pub battery_kwh: f64,
    pub is_ev: bool,
    /// Vehicle-to-home; only meaningful together with `is_ev`.
    pub is_v2h: bool,
    /// Replace the hot water system with a heat pump.
    pub heat_pump_upgrade: bool,
    /// Replace a gas cooktop with induction.
    pub induction_upgrade: bool,
    pub has_pool: bool,
    pub has_old_dryer: bool,
    /// Export limit imposed by the network (kW).
    pub export_limit_kw: f64,
    pub service_fuse: ServiceFuse,
    pub current_setup: CurrentApplianceSetup,
    pub strategy: LoadShiftStrategy,
}

impl Default for HouseholdProfile {
    fn default() -> Self {
        Self {
            electricity_bill: 3000.0,
            gas_bill: 800.0,
            fuel_bill: 3000.0,
            solar_kw: 6.6,
            battery_kwh: 13.5,
            is_ev: false,
            is_v2h: false,
            heat_pump_upgrade: false,
            induction_upgrade: false,
            has_pool: false,
            has_old_dryer: false,
            export_limit_kw: 5.0,
            service_fuse: ServiceFuse::Amps63,
            current_setup: CurrentApplianceSetup::default(),
            strategy: LoadShiftStrategy::default(),
        }
    }
}

impl HouseholdProfile {
    /// Vehicle-to-home is only active when the household also owns an EV.
    pub fn v2h_active(&self) -> bool {
        self.is_ev && self.is_v2h
    }

    /// A pool counts only when a pump is actually installed.
    pub fn pool_present(&self) -> bool {
        self.has_pool && self.current_setup.pool_pump != PoolPump::None
    }

    /// Hot water is electric either today or after the heat-pump upgrade.
    pub fn electric_hot_water(&self) -> bool {
        self.heat_pump_upgrade || self.current_setup.hot_water != HotWaterSource::Gas
    }

    /// Hot water is replaced by a heat pump.
    pub fn upgrades_hot_water(&self) -> bool {
        self.heat_pump_upgrade && self.current_setup.hot_water != HotWaterSource::Heatpump
    }

    /// Gas or resistive heating is always modelled as moving to reverse-cycle.
    pub fn upgrades_heating(&self) -> bool {
        matches!(
            self.current_setup.heating,
            HeatingSource::Gas | HeatingSource::Resistive
        )
    }

    /// A gas cooktop is replaced by induction.
    pub fn upgrades_cooking(&self) -> bool {
        self.induction_upgrade && self.current_setup.cooking == CookingSource::Gas
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fuse_single_phase_ratings() {
        assert!((ServiceFuse::Amps63.max_kw(230.0) - 14.49).abs() < 1e-9);
        assert!((ServiceFuse::Amps80.max_kw(230.0) - 18.4).abs() < 1e-9);
    }

    #[test]
    fn fuse_three_phase_uses_per_phase_rating() {
        assert!((ServiceFuse::ThreePhase100.max_kw(230.0) - 43.47).abs() < 1e-9);
    }

    #[test]
    fn fuse_rejects_unknown_rating() {
        assert!(ServiceFuse::try_from(40).is_err());
        assert_eq!(ServiceFuse::try_from(100), Ok(ServiceFuse::ThreePhase100));
    }

    #[test]
    fn v2h_requires_ev() {
        let profile = HouseholdProfile {
            is_v2h: true,
            ..HouseholdProfile::default()
        };
        assert!(!profile.v2h_active());
    }

    #[test]
    fn pool_flag_without_pump_is_absent() {
        let profile = HouseholdProfile {
            has_pool: true,
            ..HouseholdProfile::default()
        };
        assert!(!profile.pool_present());
    }

    #[test]
    fn heating_upgrade_implied_for_gas_and_resistive() {
        let mut profile = HouseholdProfile::default();
        assert!(profile.upgrades_heating());
        profile.current_setup.heating = HeatingSource::Resistive;
        assert!(profile.upgrades_heating());
        profile.current_setup.heating = HeatingSource::None;
        assert!(!profile.upgrades_heating());
    }

    #[test]
    fn enum_literals_parse() {
        assert_eq!("single_speed".parse::<PoolPump>(), Ok(PoolPump::SingleSpeed));
        assert_eq!(
            "reverse_cycle".parse::<HeatingSource>(),
            Ok(HeatingSource::ReverseCycle)
        );
        assert!("oil".parse::<HeatingSource>().is_err());
    }
}
