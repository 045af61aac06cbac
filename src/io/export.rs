//! CSV export for hourly records and cost projections.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::savings::projection::CostProjection;
use crate::sim::types::HourlyRecord;

/// Column header for the hourly export.
const HOURLY_HEADER: &str = "hour,label,solar_kw,consumption_kw,base_load_kw,heating_load_kw,\
                             shiftable_load_kw,battery_soc_kwh,battery_soc_pct,battery_kw,\
                             grid_import_kw,grid_export_kw,indoor_temp_c,free_window,heating";

/// Column header for the projection export.
const PROJECTION_HEADER: &str = "year,legacy,optimized";

/// Exports hourly records to a CSV file at the given path.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_hourly_csv(records: &[HourlyRecord], path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    write_hourly_csv(records, io::BufWriter::new(file))
}

/// Writes hourly records as CSV to any writer.
///
/// One header row followed by one row per hour. Output is deterministic for
/// identical inputs.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_hourly_csv(records: &[HourlyRecord], writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);
    wtr.write_record(HOURLY_HEADER.split(',').map(str::trim))?;

    for r in records {
        wtr.write_record(&[
            r.hour.to_string(),
            r.label.clone(),
            format!("{:.4}", r.solar_kw),
            format!("{:.4}", r.consumption_kw),
            format!("{:.4}", r.base_load_kw),
            format!("{:.4}", r.heating_load_kw),
            format!("{:.4}", r.shiftable_load_kw),
            format!("{:.4}", r.battery_soc_kwh),
            format!("{:.2}", r.battery_soc_percent),
            format!("{:.4}", r.battery_activity_kw),
            format!("{:.4}", r.grid_import_kw),
            format!("{:.4}", r.grid_export_kw),
            format!("{:.2}", r.indoor_temp_c),
            r.is_free_window.to_string(),
            r.is_heating_hour.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Exports a cost projection to a CSV file at the given path.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_projection_csv(projection: &CostProjection, path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    write_projection_csv(projection, io::BufWriter::new(file))
}

/// Writes a cost projection as `year,legacy,optimized` rows.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_projection_csv(projection: &CostProjection, writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);
    wtr.write_record(PROJECTION_HEADER.split(','))?;

    for (year, (legacy, optimized)) in projection
        .legacy
        .iter()
        .zip(projection.optimized.iter())
        .enumerate()
    {
        wtr.write_record(&[
            year.to_string(),
            format!("{legacy:.2}"),
            format!("{optimized:.2}"),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
