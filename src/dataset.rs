use csv::{ReaderBuilder, WriterBuilder};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{GeocodeError, Result};
use crate::types::Record;

/// Reads the whole CSV into memory, pairing each row with the header.
///
/// Short rows are tolerated; a row simply ends up without the trailing
/// columns, the same way a missing `zip` or `city` is tolerated downstream.
pub fn read_records(path: &Path) -> Result<Vec<Record>> {
    let file = File::open(path)?;
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(file);
    let headers = reader.headers()?.clone();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let mut record = Record::new();
        for (name, value) in headers.iter().zip(row.iter()) {
            record.set(name, value.to_string());
        }
        records.push(record);
    }
    debug!(rows = records.len(), path = %path.display(), "dataset loaded");
    Ok(records)
}

/// Rewrites the dataset through a sibling temp file renamed over the
/// original, so a failed write never leaves a half-written CSV behind.
///
/// Column order follows the field names of the first record; rows missing a
/// column are padded with the empty string.
pub fn write_records(path: &Path, records: &[Record]) -> Result<()> {
    let first = records.first().ok_or(GeocodeError::EmptyDataset)?;
    let fieldnames: Vec<&str> = first.field_names().collect();

    let tmp = temp_path(path);
    if let Err(err) = write_rows(&tmp, &fieldnames, records) {
        let _ = fs::remove_file(&tmp);
        return Err(err);
    }
    fs::rename(&tmp, path)?;
    debug!(rows = records.len(), path = %path.display(), "dataset rewritten");
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".tmp");
    PathBuf::from(name)
}

fn write_rows(path: &Path, fieldnames: &[&str], records: &[Record]) -> Result<()> {
    let mut writer = WriterBuilder::new().from_path(path)?;
    writer.write_record(fieldnames)?;
    for record in records {
        let row: Vec<&str> = fieldnames
            .iter()
            .map(|name| record.get(name).unwrap_or(""))
            .collect();
        writer.write_record(&row)?;
    }
    writer.flush()?;
    Ok(())
}
