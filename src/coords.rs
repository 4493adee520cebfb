use crate::error::{GeocodeError, Result};

/// Scale factor between degrees and the integer microdegree grid the
/// derivation works on.
const MICRODEGREES: f64 = 1_000_000.0;

/// Inclusive-lower, exclusive-upper bound pair for one coordinate axis.
///
/// The span is pre-scaled to whole microdegrees at construction; a range
/// whose scaled span truncates to zero would make the modulo reduction
/// divide by zero, so it is rejected here instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordRange {
    start: f64,
    end: f64,
    scaled_span: u64,
}

impl CoordRange {
    pub fn new(start: f64, end: f64) -> Result<Self> {
        let scaled_span = ((end - start) * MICRODEGREES) as u64;
        if end <= start || scaled_span == 0 {
            return Err(GeocodeError::DegenerateRange { start, end });
        }
        Ok(Self {
            start,
            end,
            scaled_span,
        })
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.start && value < self.end
    }
}

/// Maps eight opaque bytes onto a coordinate inside `range`.
///
/// The bytes are read as a big-endian integer and reduced modulo the range's
/// microdegree span. Same bytes and range always give the same value. The
/// modulo reduction carries a slight bias toward the low end of the range
/// for integers near `u64::MAX`; at plausibility-only accuracy that bias is
/// a documented limitation, not something to correct.
pub fn derive_coordinate(seed: &[u8; 8], range: &CoordRange) -> f64 {
    let value = u64::from_be_bytes(*seed) % range.scaled_span;
    range.start + value as f64 / MICRODEGREES
}
