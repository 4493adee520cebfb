/// Fixed names and defaults shared across the backfill pipeline.

// Dataset rewritten by the backfill, relative to the working directory
pub const SERVICES_CSV: &str = "Services_rows.csv";

// Optional override file for paths and ranges
pub const CONFIG_PATH: &str = "config.toml";

// Coarse continental-US bounding box keeping derived pins plausible
pub const LAT_RANGE: (f64, f64) = (24.5, 49.5);
pub const LON_RANGE: (f64, f64) = (-124.8, -66.9);

// Separator between the identity fields in the hash seed
pub const SEED_SEPARATOR: char = '|';

// Identity columns the seed is built from
pub const ZIP_FIELD: &str = "zip";
pub const CITY_FIELD: &str = "city";

// Columns written back by the backfill
pub const LAT_FIELD: &str = "lat";
pub const LONG_FIELD: &str = "long";
