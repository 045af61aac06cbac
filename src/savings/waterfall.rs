//! Peak-shifting waterfall.
//!
//! Timers and storage compete for the same peak-period energy. Each
//! [`ShiftStage`] claims energy from a shared remaining-peak accumulator in a
//! fixed order, so nothing is counted twice.

use serde::Serialize;
use tracing::debug;

/// One consumer of peak-period energy.
pub trait ShiftStage {
    /// Short label used in logs and reports.
    fn name(&self) -> &'static str;

    /// Energy (kWh/day) this stage moves out of the peak, given what remains.
    fn claim(&self, remaining_kwh: f64) -> f64;
}

/// Appliance on a timer. Moves a fixed amount regardless of what remains.
#[derive(Debug, Clone, Copy)]
pub struct TimerStage {
    pub label: &'static str,
    pub shift_kwh: f64,
}

impl ShiftStage for TimerStage {
    fn name(&self) -> &'static str {
        self.label
    }

    fn claim(&self, _remaining_kwh: f64) -> f64 {
        self.shift_kwh.max(0.0)
    }
}

/// Storage that can only displace the peak left over by earlier stages.
#[derive(Debug, Clone, Copy)]
pub struct StorageStage {
    pub capacity_kwh: f64,
}

impl ShiftStage for StorageStage {
    fn name(&self) -> &'static str {
        "battery"
    }

    fn claim(&self, remaining_kwh: f64) -> f64 {
        remaining_kwh.min(self.capacity_kwh).max(0.0)
    }
}

/// Energy moved by one stage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageShift {
    pub stage: &'static str,
    /// Energy moved into the free window (kWh/day).
    pub shifted_kwh: f64,
    /// Peak still unclaimed after this stage (kWh/day).
    pub remaining_after_kwh: f64,
}

/// Running remaining-peak accumulator.
#[derive(Debug, Clone)]
pub struct PeakWaterfall {
    remaining_kwh: f64,
    shifts: Vec<StageShift>,
}

impl PeakWaterfall {
    /// Starts a waterfall over the daily peak consumption.
    pub fn new(peak_kwh: f64) -> Self {
        Self {
            remaining_kwh: peak_kwh.max(0.0),
            shifts: Vec::new(),
        }
    }

    /// Applies one stage and returns the energy it moved.
    ///
    /// The remaining peak never drops below zero.
    pub fn apply(&mut self, stage: &dyn ShiftStage) -> f64 {
        let shifted_kwh = stage.claim(self.remaining_kwh);
        self.remaining_kwh = (self.remaining_kwh - shifted_kwh).max(0.0);
        debug!(
            stage = stage.name(),
            shifted_kwh,
            remaining_kwh = self.remaining_kwh,
            "waterfall stage"
        );
        self.shifts.push(StageShift {
            stage: stage.name(),
            shifted_kwh,
            remaining_after_kwh: self.remaining_kwh,
        });
        shifted_kwh
    }

    /// Applies stages in order and returns the total energy moved.
    pub fn apply_all(&mut self, stages: &[&dyn ShiftStage]) -> f64 {
        stages.iter().map(|stage| self.apply(*stage)).sum()
    }

    pub fn remaining_kwh(&self) -> f64 {
        self.remaining_kwh
    }

    pub fn shifts(&self) -> &[StageShift] {
        &self.shifts
    }

    pub fn into_shifts(self) -> Vec<StageShift> {
        self.shifts
    }
}
