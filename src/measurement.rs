use std::fmt;

/// Samples at or below this value are sentinels for a missing or faulty reading.
pub const SENTINEL_THRESHOLD: f64 = -900.0;

/// A single real-valued sample.
///
/// Mesonet files mark bad samples with large negative codes (`-996`, `-999`, ...)
/// rather than leaving them out, so validity is derived from the value itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    value: f64,
    valid: bool,
}

impl Measurement {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            valid: value > SENTINEL_THRESHOLD,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }
}

impl Default for Measurement {
    fn default() -> Self {
        Self {
            value: f64::NAN,
            valid: false,
        }
    }
}

impl From<f64> for Measurement {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.valid {
            write!(f, "{:.4}", self.value)
        } else {
            f.write_str("bad")
        }
    }
}
