//! Post-hoc daily totals computed from hourly records.

use std::fmt;

use serde::Serialize;

use super::types::HourlyRecord;

/// Aggregate figures for one simulated day.
///
/// Computed from `&[HourlyRecord]` so the summary always agrees with the
/// hourly data it was built from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySummary {
    /// Total solar generation (kWh).
    pub total_solar_kwh: f64,
    /// Total household consumption (kWh).
    pub total_consumption_kwh: f64,
    pub total_import_kwh: f64,
    pub total_export_kwh: f64,
    /// Share of consumption not met by imports (%), 0 for a day with no load.
    pub grid_independence_pct: f64,
    /// Solar sent to the grid rather than used or stored (kWh).
    pub wasted_solar_kwh: f64,
    /// Largest hourly import (kW).
    pub peak_import_kw: f64,
    pub min_indoor_temp_c: f64,
    pub max_indoor_temp_c: f64,
    /// Set when the house falls below the comfort floor.
    pub comfort_warning: Option<String>,
}

impl DailySummary {
    /// Builds the summary.
    ///
    /// # Arguments
    ///
    /// * `records` - Hourly records for the day
    /// * `comfort_floor_c` - Temperature below which a warning is raised
    pub fn from_records(records: &[HourlyRecord], comfort_floor_c: f64) -> Self {
        if records.is_empty() {
            return Self {
                total_solar_kwh: 0.0,
                total_consumption_kwh: 0.0,
                total_import_kwh: 0.0,
                total_export_kwh: 0.0,
                grid_independence_pct: 0.0,
                wasted_solar_kwh: 0.0,
                peak_import_kw: 0.0,
                min_indoor_temp_c: 0.0,
                max_indoor_temp_c: 0.0,
                comfort_warning: None,
            };
        }

        let mut solar = 0.0;
        let mut consumption = 0.0;
        let mut import = 0.0;
        let mut export = 0.0;
        let mut peak_import = 0.0_f64;
        let mut min_temp = f64::INFINITY;
        let mut max_temp = f64::NEG_INFINITY;

        for r in records {
            solar += r.solar_kw;
            consumption += r.consumption_kw;
            import += r.grid_import_kw;
            export += r.grid_export_kw;
            peak_import = peak_import.max(r.grid_import_kw);
            min_temp = min_temp.min(r.indoor_temp_c);
            max_temp = max_temp.max(r.indoor_temp_c);
        }

        let grid_independence_pct = if consumption > 0.0 {
            (consumption - import) / consumption * 100.0
        } else {
            0.0
        };
        let comfort_warning =
            (min_temp < comfort_floor_c).then(|| format!("Temperature drops to {min_temp:.1}°C"));

        Self {
            total_solar_kwh: solar,
            total_consumption_kwh: consumption,
            total_import_kwh: import,
            total_export_kwh: export,
            grid_independence_pct,
            wasted_solar_kwh: export,
            peak_import_kw: peak_import,
            min_indoor_temp_c: min_temp,
            max_indoor_temp_c: max_temp,
            comfort_warning,
        }
    }
}

impl fmt::Display for DailySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Daily Summary ---")?;
        writeln!(f, "Solar generated:       {:.2} kWh", self.total_solar_kwh)?;
        writeln!(f, "Consumption:           {:.2} kWh", self.total_consumption_kwh)?;
        writeln!(f, "Grid import:           {:.2} kWh", self.total_import_kwh)?;
        writeln!(
            f,
            "Grid export:           {:.2} kWh (wasted solar)",
            self.total_export_kwh
        )?;
        writeln!(f, "Grid independence:     {:.1}%", self.grid_independence_pct)?;
        writeln!(f, "Peak import:           {:.2} kW", self.peak_import_kw)?;
        write!(
            f,
            "Indoor temperature:    {:.1}°C to {:.1}°C",
            self.min_indoor_temp_c, self.max_indoor_temp_c
        )?;
        if let Some(warning) = &self.comfort_warning {
            write!(f, "\nWarning: {warning}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record(hour: usize, solar: f64, load: f64, import: f64, export: f64, temp: f64) -> HourlyRecord {
        HourlyRecord {
            hour,
            label: format!("{hour:02}:00"),
            solar_kw: solar,
            consumption_kw: load,
            base_load_kw: load,
            heating_load_kw: 0.0,
            shiftable_load_kw: 0.0,
            battery_soc_kwh: 0.0,
            battery_soc_percent: 0.0,
            battery_activity_kw: solar - load - export + import,
            grid_import_kw: import,
            grid_export_kw: export,
            indoor_temp_c: temp,
            is_free_window: false,
            is_heating_hour: false,
        }
    }

    #[test]
    fn empty_day_is_zeroed() {
        let s = DailySummary::from_records(&[], 16.0);
        assert_eq!(s.total_consumption_kwh, 0.0);
        assert_eq!(s.grid_independence_pct, 0.0);
        assert!(s.comfort_warning.is_none());
    }

    #[test]
    fn totals_and_independence() {
        let records = vec![
            make_record(0, 0.0, 1.0, 1.0, 0.0, 18.0),
            make_record(1, 4.0, 1.0, 0.0, 3.0, 19.0),
            make_record(2, 0.0, 2.0, 0.0, 0.0, 20.0),
        ];
        let s = DailySummary::from_records(&records, 16.0);
        assert_eq!(s.total_solar_kwh, 4.0);
        assert_eq!(s.total_consumption_kwh, 4.0);
        assert_eq!(s.total_import_kwh, 1.0);
        assert_eq!(s.wasted_solar_kwh, 3.0);
        assert_eq!(s.grid_independence_pct, 75.0);
        assert_eq!(s.peak_import_kw, 1.0);
        assert_eq!(s.min_indoor_temp_c, 18.0);
        assert_eq!(s.max_indoor_temp_c, 20.0);
    }

    #[test]
    fn grid_charging_makes_independence_negative() {
        let records = vec![
            make_record(0, 0.0, 1.0, 3.0, 0.0, 20.0),
            make_record(1, 0.0, 1.0, 1.0, 0.0, 20.0),
        ];
        let s = DailySummary::from_records(&records, 16.0);
        assert_eq!(s.grid_independence_pct, -100.0);
    }

    #[test]
    fn cold_house_warns() {
        let records = vec![make_record(0, 0.0, 1.0, 1.0, 0.0, 14.0)];
        let s = DailySummary::from_records(&records, 16.0);
        assert_eq!(s.comfort_warning.as_deref(), Some("Temperature drops to 14.0°C"));
        assert!(s.to_string().contains("Warning: Temperature drops"));
    }

    #[test]
    fn display_starts_with_header() {
        let s = DailySummary::from_records(&[make_record(0, 1.0, 1.0, 0.0, 0.0, 20.0)], 16.0);
        assert!(s.to_string().starts_with("--- Daily Summary ---"));
    }
}
