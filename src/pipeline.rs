use std::path::PathBuf;
use tracing::{error, info};

use crate::config::Config;
use crate::constants::{LAT_FIELD, LONG_FIELD};
use crate::coords::CoordRange;
use crate::dataset;
use crate::enrich::DeterministicGeocoder;
use crate::error::{GeocodeError, Result};
use crate::types::Record;

/// Summary of one backfill run.
#[derive(Debug)]
pub struct BackfillOutcome {
    pub rows_updated: usize,
    pub output_file: PathBuf,
}

/// Summary of a read-only coordinate check.
#[derive(Debug, Default, PartialEq)]
pub struct CheckOutcome {
    pub total: usize,
    pub plausible: usize,
    pub out_of_bounds: usize,
    pub missing: usize,
}

/// Loads the dataset, stamps deterministic coordinates onto every row, and
/// rewrites the file. Aborts before any write when there is nothing to
/// enrich.
pub fn run_backfill(config: &Config) -> Result<BackfillOutcome> {
    info!(path = %config.dataset.display(), "loading dataset");
    let mut records = dataset::read_records(&config.dataset)?;
    if records.is_empty() {
        error!(path = %config.dataset.display(), "dataset has no rows, nothing written");
        return Err(GeocodeError::EmptyDataset);
    }

    let geocoder = DeterministicGeocoder::new(config.lat_range, config.lon_range)?;
    let rows_updated = geocoder.backfill(&mut records)?;

    dataset::write_records(&config.dataset, &records)?;
    info!(rows = rows_updated, "dataset rewritten with derived coordinates");

    Ok(BackfillOutcome {
        rows_updated,
        output_file: config.dataset.clone(),
    })
}

/// Scans the dataset without writing and reports how many rows carry
/// coordinates inside the configured bounding box.
pub fn run_check(config: &Config) -> Result<CheckOutcome> {
    let records = dataset::read_records(&config.dataset)?;
    let lat_range = CoordRange::new(config.lat_range.0, config.lat_range.1)?;
    let lon_range = CoordRange::new(config.lon_range.0, config.lon_range.1)?;

    let mut outcome = CheckOutcome::default();
    for record in &records {
        outcome.total += 1;
        match (parse_coord(record, LAT_FIELD), parse_coord(record, LONG_FIELD)) {
            (Some(lat), Some(long)) => {
                if lat_range.contains(lat) && lon_range.contains(long) {
                    outcome.plausible += 1;
                } else {
                    outcome.out_of_bounds += 1;
                }
            }
            _ => outcome.missing += 1,
        }
    }
    info!(
        total = outcome.total,
        plausible = outcome.plausible,
        "coordinate check finished"
    );
    Ok(outcome)
}

fn parse_coord(record: &Record, field: &str) -> Option<f64> {
    record.get(field).and_then(|value| value.parse().ok())
}
