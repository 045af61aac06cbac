//! Cumulative cost projection and payback.

use serde::Serialize;

use crate::tariff::Tariff;

/// Cumulative household spend with and without the upgrades.
///
/// Index `y` holds the running total at the end of year `y`; index 0 is the
/// day of installation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostProjection {
    pub legacy: Vec<f64>,
    pub optimized: Vec<f64>,
}

impl CostProjection {
    /// Projects both paths with annual inflation.
    ///
    /// # Arguments
    ///
    /// * `annual_spend` - Electricity, gas and fuel bills combined
    /// * `annual_savings` - Total savings of the upgraded household
    /// * `system_cost` - Upfront spend, charged at year 0 on the optimized path
    /// * `years` - Projection horizon
    pub fn build(
        annual_spend: f64,
        annual_savings: f64,
        system_cost: f64,
        years: u32,
        tariff: &Tariff,
    ) -> Self {
        let mut legacy = Vec::with_capacity(years as usize + 1);
        let mut optimized = Vec::with_capacity(years as usize + 1);
        let mut legacy_total = 0.0;
        let mut optimized_total = system_cost;
        legacy.push(legacy_total);
        optimized.push(optimized_total);

        for year in 1..=years {
            let factor = (1.0 + tariff.inflation).powi(year as i32);
            legacy_total += annual_spend * factor;
            optimized_total += (annual_spend - annual_savings) * factor;
            legacy.push(legacy_total);
            optimized.push(optimized_total);
        }

        Self { legacy, optimized }
    }

    /// First year in which the optimized path is no more expensive, if any.
    pub fn breakeven_year(&self) -> Option<usize> {
        self.legacy
            .iter()
            .zip(&self.optimized)
            .position(|(legacy, optimized)| optimized <= legacy)
    }

    /// Years covered, excluding year 0.
    pub fn years(&self) -> usize {
        self.legacy.len().saturating_sub(1)
    }
}

/// Simple payback in years, or `sentinel` when nothing is saved.
pub fn payback_years(system_cost: f64, annual_savings: f64, sentinel: f64) -> f64 {
    if annual_savings > 0.0 {
        system_cost / annual_savings
    } else {
        sentinel
    }
}
