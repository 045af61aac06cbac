/// Hourly record and projection CSV writers.
pub mod export;
