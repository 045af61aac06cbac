//! Home battery dispatch for one hour.

use super::power_balance::grid_net_kw;

/// Energy flows resulting from one hour of dispatch.
///
/// # Power Flow Convention
/// - `battery_kw` positive: charging; negative: discharging
/// - `import_kw` and `export_kw` are non-negative magnitudes
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HourFlows {
    pub battery_kw: f64,
    pub import_kw: f64,
    pub export_kw: f64,
}

/// Lossless home battery tracked in kWh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HomeBattery {
    /// Usable capacity (kWh).
    pub capacity_kwh: f64,
    /// Stored energy (kWh), always within `[0, capacity_kwh]`.
    pub soc_kwh: f64,
}

impl HomeBattery {
    /// Creates a battery, clamping the initial charge into range.
    ///
    /// Negative capacities are treated as no battery.
    pub fn new(capacity_kwh: f64, soc_kwh: f64) -> Self {
        let capacity_kwh = capacity_kwh.max(0.0);
        Self {
            capacity_kwh,
            soc_kwh: soc_kwh.clamp(0.0, capacity_kwh),
        }
    }

    /// Room left to charge (kWh).
    pub fn headroom_kwh(&self) -> f64 {
        (self.capacity_kwh - self.soc_kwh).max(0.0)
    }

    /// Charge as a percentage of capacity, 0 for an absent battery.
    pub fn soc_percent(&self) -> f64 {
        if self.capacity_kwh > 0.0 {
            self.soc_kwh / self.capacity_kwh * 100.0
        } else {
            0.0
        }
    }

    /// Solar self-consumption.
    ///
    /// Surplus charges the battery and the rest is exported; a deficit is
    /// met from the battery first and then from the grid.
    ///
    /// # Arguments
    ///
    /// * `solar_kw` - Generation this hour
    /// * `consumption_kw` - Household load this hour
    ///
    /// # Returns
    ///
    /// The battery after the hour and the resulting flows.
    pub fn self_consume(self, solar_kw: f64, consumption_kw: f64) -> (Self, HourFlows) {
        let net = solar_kw - consumption_kw;
        if net > 0.0 {
            let charge = net.min(self.headroom_kwh());
            let next = Self {
                soc_kwh: self.soc_kwh + charge,
                ..self
            };
            let flows = HourFlows {
                battery_kw: charge,
                import_kw: 0.0,
                export_kw: net - charge,
            };
            (next, flows)
        } else {
            let deficit = -net;
            let discharge = deficit.min(self.soc_kwh);
            let next = Self {
                soc_kwh: self.soc_kwh - discharge,
                ..self
            };
            let flows = HourFlows {
                battery_kw: -discharge,
                import_kw: deficit - discharge,
                export_kw: 0.0,
            };
            (next, flows)
        }
    }

    /// Charges from the grid at up to `max_charge_kw` regardless of solar.
    ///
    /// Load and charging are met by solar first, any shortfall is imported
    /// and any solar left over is exported.
    pub fn force_charge(self, solar_kw: f64, consumption_kw: f64, max_charge_kw: f64) -> (Self, HourFlows) {
        let charge = self.headroom_kwh().min(max_charge_kw.max(0.0));
        let next = Self {
            soc_kwh: self.soc_kwh + charge,
            ..self
        };
        let net_from_grid = grid_net_kw(consumption_kw, solar_kw, charge);
        let flows = HourFlows {
            battery_kw: charge,
            import_kw: net_from_grid.max(0.0),
            export_kw: (-net_from_grid).max(0.0),
        };
        (next, flows)
    }
}
