use std::{cmp::Ordering, fmt, str::FromStr};

use time::{Duration, OffsetDateTime, UtcOffset};

use crate::{
    timestamp::{format_utc, TimeComparable},
    Measurement, Parameter,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatType {
    Min,
    Max,
    Avg,
    Tot,
}

impl StatType {
    pub const ALL: [StatType; 4] = [StatType::Min, StatType::Max, StatType::Avg, StatType::Tot];

    pub const fn as_str(self) -> &'static str {
        match self {
            StatType::Min => "MIN",
            StatType::Max => "MAX",
            StatType::Avg => "AVG",
            StatType::Tot => "TOT",
        }
    }
}

impl fmt::Display for StatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StatType::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown statistic {s}. Expecting MIN, MAX, AVG or TOT"))
    }
}

/// A statistic together with where and when it was observed.
#[derive(Debug, Clone, PartialEq)]
pub struct StatMeasurement {
    measurement: Measurement,
    // Always UTC, truncated to the minute.
    timestamp: OffsetDateTime,
    station_id: String,
    parameter: Parameter,
    kind: StatType,
}

impl StatMeasurement {
    pub fn new(
        value: f64,
        timestamp: OffsetDateTime,
        station_id: impl Into<String>,
        parameter: Parameter,
        kind: StatType,
    ) -> Self {
        let utc = timestamp.to_offset(UtcOffset::UTC);
        let timestamp = utc
            - Duration::seconds(i64::from(utc.second()))
            - Duration::nanoseconds(i64::from(utc.nanosecond()));

        Self {
            measurement: Measurement::new(value),
            timestamp,
            station_id: station_id.into(),
            parameter,
            kind,
        }
    }

    pub fn value(&self) -> f64 {
        self.measurement.value()
    }

    pub fn is_valid(&self) -> bool {
        self.measurement.is_valid()
    }

    pub fn measurement(&self) -> Measurement {
        self.measurement
    }

    pub fn timestamp(&self) -> OffsetDateTime {
        self.timestamp
    }

    /// The timestamp in canonical form, e.g. `2018-01-02T21:40:00 UTC`.
    pub fn timestamp_string(&self) -> String {
        format_utc(self.timestamp)
    }

    pub fn station_id(&self) -> &str {
        &self.station_id
    }

    pub fn parameter(&self) -> Parameter {
        self.parameter
    }

    pub fn kind(&self) -> StatType {
        self.kind
    }

    /// Order by value alone; station and time are ignored.
    /// Incomparable values (NaN) are treated as equal.
    pub fn cmp_value(&self, other: &Self) -> Ordering {
        self.value()
            .partial_cmp(&other.value())
            .unwrap_or(Ordering::Equal)
    }

    /// True if both are valid and `self` is strictly smaller, or if only `self` is valid.
    pub fn is_less_than(&self, other: &Self) -> bool {
        match (self.is_valid(), other.is_valid()) {
            (true, true) => self.value() < other.value(),
            (true, false) => true,
            _ => false,
        }
    }

    /// True if both are valid and `self` is strictly greater, or if only `self` is valid.
    pub fn is_greater_than(&self, other: &Self) -> bool {
        match (self.is_valid(), other.is_valid()) {
            (true, true) => self.value() > other.value(),
            (true, false) => true,
            _ => false,
        }
    }
}

impl TimeComparable for StatMeasurement {
    fn utc_timestamp(&self) -> OffsetDateTime {
        self.timestamp
    }
}

impl fmt::Display for StatMeasurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {:.4} {} {}",
            self.parameter,
            self.kind,
            self.value(),
            self.station_id.to_uppercase(),
            self.timestamp_string()
        )
    }
}

/// First element with the smallest value, in iteration order.
///
/// NaN statistics (days with no usable sample) never win over a real value and are
/// only returned when nothing else is there.
pub fn stable_min<'a>(stats: impl IntoIterator<Item = &'a StatMeasurement>) -> Option<&'a StatMeasurement> {
    stable_extreme(stats, Ordering::Less)
}

/// First element with the largest value, in iteration order. NaN is skipped as in
/// [`stable_min`].
///
/// `Iterator::max_by` keeps the *last* maximum, hence the explicit reduction.
pub fn stable_max<'a>(stats: impl IntoIterator<Item = &'a StatMeasurement>) -> Option<&'a StatMeasurement> {
    stable_extreme(stats, Ordering::Greater)
}

fn stable_extreme<'a>(
    stats: impl IntoIterator<Item = &'a StatMeasurement>,
    wins: Ordering,
) -> Option<&'a StatMeasurement> {
    stats.into_iter().reduce(|best, stat| {
        let replaces = if best.value().is_nan() {
            !stat.value().is_nan()
        } else {
            stat.value().partial_cmp(&best.value()) == Some(wins)
        };
        if replaces {
            stat
        } else {
            best
        }
    })
}
