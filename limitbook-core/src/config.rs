use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Construction-time configuration for a `DefaultOrderBook`.
///
/// `tick_size` is the granularity prices must align to; `precision` is the
/// fraction of a tick a submitted price may drift from an exact multiple
/// and still be accepted (and snapped).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BookConfig {
    pub tick_size: f64,
    pub precision: f64,
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("tick_size must be positive, got {0}")]
    NonPositiveTickSize(f64),
    #[error("precision must be in (0, 1), got {0}")]
    InvalidPrecision(f64),
}

impl BookConfig {
    pub fn new(tick_size: f64, precision: f64) -> Result<Self, ConfigError> {
        if !(tick_size > 0.0) {
            return Err(ConfigError::NonPositiveTickSize(tick_size));
        }
        if !(precision > 0.0 && precision < 1.0) {
            return Err(ConfigError::InvalidPrecision(precision));
        }
        Ok(Self { tick_size, precision })
    }

    /// Snaps `price` to the nearest multiple of `tick_size`, within
    /// `tick_size * precision` of it; `None` if it's too far off-grid.
    pub(crate) fn align(&self, price: f64) -> Option<f64> {
        let n = (price / self.tick_size).trunc();
        let rem = price % self.tick_size;
        let tolerance = self.tick_size * self.precision;
        if rem < tolerance || self.tick_size - rem < tolerance {
            Some(n * self.tick_size)
        } else {
            None
        }
    }
}
