use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeocodeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV processing failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("no data rows found in dataset")]
    EmptyDataset,

    #[error("degenerate coordinate range [{start}, {end})")]
    DegenerateRange { start: f64, end: f64 },
}

pub type Result<T> = std::result::Result<T, GeocodeError>;
