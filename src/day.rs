use std::fmt;

use time::Date;

use crate::{Config, Error, Parameter, Record, Result, StatMeasurement, StatType};

/// The four statistics of one parameter over one station-day.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterStats {
    pub min: StatMeasurement,
    pub max: StatMeasurement,
    pub avg: StatMeasurement,
    pub tot: StatMeasurement,
}

impl ParameterStats {
    pub fn get(&self, kind: StatType) -> &StatMeasurement {
        match kind {
            StatType::Min => &self.min,
            StatType::Max => &self.max,
            StatType::Avg => &self.avg,
            StatType::Tot => &self.tot,
        }
    }
}

/// Statistics of a single station over a single day.
#[derive(Debug, Clone, PartialEq)]
pub struct DayStatistics {
    station_id: String,
    date: Date,
    stats: [ParameterStats; 3],
}

impl DayStatistics {
    /// Records are expected to share one station and one day; station and date are
    /// taken from the first one.
    pub fn from_records(records: &[Record]) -> Result<Self> {
        Self::with_config(records, &Config::default())
    }

    pub fn with_config(records: &[Record], config: &Config) -> Result<Self> {
        let first = records.first().ok_or(Error::EmptyDay)?;
        let station_id = first.station_id().to_string();
        let date = first.date();

        let stats = Parameter::ALL.map(|param| {
            compute(records, param, &station_id, date, config.skip_invalid)
        });

        Ok(Self {
            station_id,
            date,
            stats,
        })
    }

    pub fn station_id(&self) -> &str {
        &self.station_id
    }

    pub fn date(&self) -> Date {
        self.date
    }

    pub fn parameter(&self, param: Parameter) -> &ParameterStats {
        &self.stats[param.index()]
    }

    pub fn stat(&self, param: Parameter, kind: StatType) -> &StatMeasurement {
        self.parameter(param).get(kind)
    }

    /// Lookup by case-insensitive parameter name.
    pub fn get(&self, name: &str, kind: StatType) -> Result<&StatMeasurement> {
        Ok(self.stat(name.parse()?, kind))
    }
}

fn compute(
    records: &[Record],
    param: Parameter,
    station_id: &str,
    date: Date,
    skip_invalid: bool,
) -> ParameterStats {
    let midnight = date.midnight().assume_utc();
    let stat = |value, timestamp, kind| StatMeasurement::new(value, timestamp, station_id, param, kind);

    let mut samples = records
        .iter()
        .map(|record| (record, record.measurement(param)))
        .filter(|(_, measurement)| !skip_invalid || measurement.is_valid())
        .map(|(record, measurement)| (record, measurement.value()));

    let Some(first) = samples.next() else {
        return ParameterStats {
            min: stat(f64::NAN, midnight, StatType::Min),
            max: stat(f64::NAN, midnight, StatType::Max),
            avg: stat(f64::NAN, midnight, StatType::Avg),
            tot: stat(f64::NAN, midnight, StatType::Tot),
        };
    };

    // Strict comparisons keep the earliest row on ties.
    let (mut min, mut max) = (first, first);
    let (mut sum, mut count) = (first.1, 1usize);
    for sample in samples {
        if sample.1 < min.1 {
            min = sample;
        }
        if sample.1 > max.1 {
            max = sample;
        }
        sum += sample.1;
        count += 1;
    }

    ParameterStats {
        min: stat(min.1, min.0.timestamp(), StatType::Min),
        max: stat(max.1, max.0.timestamp(), StatType::Max),
        avg: stat(sum / count as f64, midnight, StatType::Avg),
        tot: stat(sum, midnight, StatType::Tot),
    }
}

impl fmt::Display for DayStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [tair, ta9m, srad] = &self.stats;
        writeln!(
            f,
            "{:04}-{:02}-{:02}, {}:",
            self.date.year(),
            u8::from(self.date.month()),
            self.date.day(),
            self.station_id.to_uppercase()
        )?;
        writeln!(
            f,
            " Air Temperature[1.5m] = [{:.4}, {:.4}, {:.4}],",
            tair.min.value(),
            tair.avg.value(),
            tair.max.value()
        )?;
        writeln!(
            f,
            " Air Temperature[9m] = [{:.4}, {:.4}, {:.4}],",
            ta9m.min.value(),
            ta9m.avg.value(),
            ta9m.max.value()
        )?;
        write!(
            f,
            " Solar Radiation = [{:.4}, {:.4}, {:.4}, {:.4}]",
            srad.min.value(),
            srad.avg.value(),
            srad.max.value(),
            srad.tot.value()
        )
    }
}
