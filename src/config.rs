//! Knobs shared by the parser and the aggregators.

use tracing::debug;

/// Expected first token of every time-series file.
pub const DEFAULT_COPYRIGHT_MARKER: &str = "101";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// First token the copyright line must carry.
    pub copyright_marker: String,

    /// Leave sentinel (invalid) samples out of the day statistics.
    /// When off, sentinels take part like any other value.
    pub skip_invalid: bool,

    /// Also push the daily solar radiation total into the SRAD average sequence,
    /// the layout older consumers of the multi-day aggregate expect.
    /// Totals always get their own sequence regardless.
    pub srad_total_in_avg: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            copyright_marker: DEFAULT_COPYRIGHT_MARKER.to_string(),
            skip_invalid: false,
            srad_total_in_avg: false,
        }
    }
}

impl Config {
    pub fn with_copyright_marker(mut self, marker: impl Into<String>) -> Self {
        self.copyright_marker = marker.into();
        self
    }

    pub fn with_skip_invalid(mut self, skip: bool) -> Self {
        self.skip_invalid = skip;
        self
    }

    pub fn with_srad_total_in_avg(mut self, enabled: bool) -> Self {
        if enabled {
            debug!("solar radiation totals will also be folded into the average sequence");
        }
        self.srad_total_in_avg = enabled;
        self
    }
}
