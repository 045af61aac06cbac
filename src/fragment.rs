//! Shareable `key=value&...` encoding of a household profile.
//!
//! The fragment is what a results link carries after the `#`, so a profile
//! can be reproduced from a URL.

use std::fmt::Display;
use std::str::FromStr;

use thiserror::Error;

use crate::savings::{HouseholdProfile, ServiceFuse};

/// Keys understood by [`decode`], in encoding order.
pub const KEYS: &[&str] = &[
    "bill",
    "gas",
    "petrol",
    "solar",
    "battery",
    "ev",
    "v2h",
    "heatpump",
    "induction",
    "exportLimit",
    "fuse",
    "pool",
    "oldDryer",
    "evWindow",
    "batWindow",
    "poolWindow",
    "hwWindow",
    "hotWater",
    "heating",
    "cooking",
    "poolPump",
    "dryer",
];

/// Fragment decoding error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("at `{key}`: {message}")]
pub struct FragmentError {
    pub key: String,
    pub message: String,
}

impl FragmentError {
    fn new(key: &str, message: impl Into<String>) -> Self {
        Self {
            key: key.to_string(),
            message: message.into(),
        }
    }
}

/// Encodes every profile field. Output is stable for identical profiles.
pub fn encode(profile: &HouseholdProfile) -> String {
    let setup = &profile.current_setup;
    let strategy = &profile.strategy;
    let values: [String; 22] = [
        profile.electricity_bill.to_string(),
        profile.gas_bill.to_string(),
        profile.fuel_bill.to_string(),
        profile.solar_kw.to_string(),
        profile.battery_kwh.to_string(),
        profile.is_ev.to_string(),
        profile.v2h_active().to_string(),
        profile.heat_pump_upgrade.to_string(),
        profile.induction_upgrade.to_string(),
        profile.export_limit_kw.to_string(),
        profile.service_fuse.amps().to_string(),
        profile.has_pool.to_string(),
        profile.has_old_dryer.to_string(),
        strategy.charge_ev_in_window.to_string(),
        strategy.charge_battery_in_window.to_string(),
        strategy.run_pool_in_window.to_string(),
        strategy.run_hot_water_in_window.to_string(),
        setup.hot_water.to_string(),
        setup.heating.to_string(),
        setup.cooking.to_string(),
        setup.pool_pump.to_string(),
        setup.dryer.to_string(),
    ];

    KEYS.iter()
        .zip(values)
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&")
}

/// Decodes a fragment, with or without its leading `#`.
///
/// Missing keys keep their default. Vehicle-to-home is dropped when the
/// fragment has no EV.
///
/// # Errors
///
/// Returns a `FragmentError` for unknown or repeated keys, pairs without
/// `=`, and values that do not parse.
pub fn decode(fragment: &str) -> Result<HouseholdProfile, FragmentError> {
    let pairs = split_pairs(fragment.strip_prefix('#').unwrap_or(fragment))?;
    let defaults = HouseholdProfile::default();

    let mut profile = HouseholdProfile {
        electricity_bill: parse_amount(&pairs, "bill", defaults.electricity_bill)?,
        gas_bill: parse_amount(&pairs, "gas", defaults.gas_bill)?,
        fuel_bill: parse_amount(&pairs, "petrol", defaults.fuel_bill)?,
        solar_kw: parse_amount(&pairs, "solar", defaults.solar_kw)?,
        battery_kwh: parse_amount(&pairs, "battery", defaults.battery_kwh)?,
        is_ev: parse_value(&pairs, "ev", defaults.is_ev)?,
        is_v2h: parse_value(&pairs, "v2h", defaults.is_v2h)?,
        heat_pump_upgrade: parse_value(&pairs, "heatpump", defaults.heat_pump_upgrade)?,
        induction_upgrade: parse_value(&pairs, "induction", defaults.induction_upgrade)?,
        export_limit_kw: parse_amount(&pairs, "exportLimit", defaults.export_limit_kw)?,
        service_fuse: parse_fuse(&pairs, defaults.service_fuse)?,
        has_pool: parse_value(&pairs, "pool", defaults.has_pool)?,
        has_old_dryer: parse_value(&pairs, "oldDryer", defaults.has_old_dryer)?,
        ..defaults
    };

    let strategy = &mut profile.strategy;
    strategy.charge_ev_in_window = parse_value(&pairs, "evWindow", false)?;
    strategy.charge_battery_in_window = parse_value(&pairs, "batWindow", false)?;
    strategy.run_pool_in_window = parse_value(&pairs, "poolWindow", false)?;
    strategy.run_hot_water_in_window = parse_value(&pairs, "hwWindow", false)?;

    let setup = &mut profile.current_setup;
    setup.hot_water = parse_value(&pairs, "hotWater", setup.hot_water)?;
    setup.heating = parse_value(&pairs, "heating", setup.heating)?;
    setup.cooking = parse_value(&pairs, "cooking", setup.cooking)?;
    setup.pool_pump = parse_value(&pairs, "poolPump", setup.pool_pump)?;
    setup.dryer = parse_value(&pairs, "dryer", setup.dryer)?;

    if !profile.is_ev {
        profile.is_v2h = false;
    }
    Ok(profile)
}

fn split_pairs(raw: &str) -> Result<Vec<(&str, &str)>, FragmentError> {
    let mut pairs: Vec<(&str, &str)> = Vec::new();
    for segment in raw.split('&').filter(|s| !s.is_empty()) {
        let Some((key, value)) = segment.split_once('=') else {
            return Err(FragmentError::new(segment, "expected key=value"));
        };
        if !KEYS.contains(&key) {
            return Err(FragmentError::new(key, "unknown key"));
        }
        if pairs.iter().any(|(k, _)| *k == key) {
            return Err(FragmentError::new(key, "repeated key"));
        }
        pairs.push((key, value));
    }
    Ok(pairs)
}

fn find_value<'a>(pairs: &[(&'a str, &'a str)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find_map(|(k, v)| if *k == key { Some(*v) } else { None })
}

fn parse_value<T>(pairs: &[(&str, &str)], key: &str, default: T) -> Result<T, FragmentError>
where
    T: FromStr,
    T::Err: Display,
{
    let Some(v) = find_value(pairs, key) else {
        return Ok(default);
    };
    v.parse::<T>()
        .map_err(|err| FragmentError::new(key, format!("invalid value \"{v}\": {err}")))
}

fn parse_amount(pairs: &[(&str, &str)], key: &str, default: f64) -> Result<f64, FragmentError> {
    let n: f64 = parse_value(pairs, key, default)?;
    if !n.is_finite() || n < 0.0 {
        return Err(FragmentError::new(key, "must be a finite value >= 0"));
    }
    Ok(n)
}

fn parse_fuse(pairs: &[(&str, &str)], default: ServiceFuse) -> Result<ServiceFuse, FragmentError> {
    let amps: u32 = parse_value(pairs, "fuse", default.amps())?;
    ServiceFuse::try_from(amps).map_err(|err| FragmentError::new("fuse", err))
}
