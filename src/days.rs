use std::{fmt, path::PathBuf};

use tracing::{debug, info, warn};

use crate::{
    day::ParameterStats,
    file::read_file,
    stat::{stable_max, stable_min},
    Config, DayStatistics, Error, Parameter, Result, StatMeasurement, StatType,
};

/// Lookup of the extreme days of a parameter, by case-insensitive name.
pub trait Extremes {
    fn minimum_day(&self, name: &str) -> Result<&StatMeasurement>;
    fn maximum_day(&self, name: &str) -> Result<&StatMeasurement>;
}

impl Extremes for DayStatistics {
    fn minimum_day(&self, name: &str) -> Result<&StatMeasurement> {
        self.get(name, StatType::Min)
    }

    fn maximum_day(&self, name: &str) -> Result<&StatMeasurement> {
        self.get(name, StatType::Max)
    }
}

/// Per-day statistics of one parameter, in the order the days were folded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Accumulator {
    pub min: Vec<StatMeasurement>,
    pub max: Vec<StatMeasurement>,
    pub avg: Vec<StatMeasurement>,
    pub tot: Vec<StatMeasurement>,
}

impl Accumulator {
    pub fn get(&self, kind: StatType) -> &[StatMeasurement] {
        match kind {
            StatType::Min => &self.min,
            StatType::Max => &self.max,
            StatType::Avg => &self.avg,
            StatType::Tot => &self.tot,
        }
    }

    fn push(&mut self, stats: &ParameterStats, total_in_avg: bool) {
        self.min.push(stats.min.clone());
        self.max.push(stats.max.clone());
        self.avg.push(stats.avg.clone());
        if total_in_avg {
            self.avg.push(stats.tot.clone());
        }
        self.tot.push(stats.tot.clone());
    }

    fn append(&mut self, mut other: Self) {
        self.min.append(&mut other.min);
        self.max.append(&mut other.max);
        self.avg.append(&mut other.avg);
        self.tot.append(&mut other.tot);
    }
}

/// Statistics over many station-days, one time-series file per day.
#[derive(Debug, Clone)]
pub struct DaysStatistics {
    files: Vec<PathBuf>,
    config: Config,
    accumulators: [Accumulator; 3],
    days: usize,
}

impl DaysStatistics {
    pub fn new<I, P>(files: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self::with_config(files, Config::default())
    }

    pub fn with_config<I, P>(files: I, config: Config) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            files: files.into_iter().map(Into::into).collect(),
            config,
            accumulators: Default::default(),
            days: 0,
        }
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Number of days folded so far.
    pub fn days(&self) -> usize {
        self.days
    }

    /// Parse every file and fold its day statistics, in list order.
    ///
    /// The first file that fails to parse aborts the run with its error; days folded
    /// before it are kept. Every call folds the whole list again.
    pub fn find_statistics(&mut self) -> Result<()> {
        for path in self.files.clone() {
            let file = read_file(&path, &self.config)?;
            let day = DayStatistics::with_config(file.records(), &self.config)?;
            self.fold(&day);
        }
        info!(files = self.files.len(), days = self.days, "collected multi-day statistics");
        Ok(())
    }

    /// Append one day to the per-parameter sequences.
    pub fn fold(&mut self, day: &DayStatistics) {
        for param in Parameter::ALL {
            let total_in_avg = param == Parameter::Srad && self.config.srad_total_in_avg;
            self.accumulators[param.index()].push(day.parameter(param), total_in_avg);
        }
        self.days += 1;
        debug!(station = day.station_id(), date = %day.date(), "folded day");
    }

    /// Append everything `other` collected after what `self` already holds.
    /// Ties are resolved in favor of `self`.
    pub fn merge(&mut self, other: Self) {
        self.files.extend(other.files);
        for (mine, theirs) in self.accumulators.iter_mut().zip(other.accumulators) {
            mine.append(theirs);
        }
        self.days += other.days;
    }

    pub fn accumulator(&self, param: Parameter) -> &Accumulator {
        &self.accumulators[param.index()]
    }

    pub fn sequence(&self, param: Parameter, kind: StatType) -> &[StatMeasurement] {
        self.accumulator(param).get(kind)
    }

    /// Smallest daily minimum; the earliest folded day wins ties.
    pub fn minimum(&self, param: Parameter) -> Result<&StatMeasurement> {
        stable_min(&self.accumulator(param).min).ok_or(Error::NoStatistics(param))
    }

    /// Largest daily maximum; the earliest folded day wins ties.
    pub fn maximum(&self, param: Parameter) -> Result<&StatMeasurement> {
        stable_max(&self.accumulator(param).max).ok_or(Error::NoStatistics(param))
    }

    /// `"<max>\n<min>\n"` for the parameter named `name`.
    pub fn combine_min_max_statistics(&self, name: &str) -> Result<String> {
        let max = self.maximum_day(name)?;
        let min = self.minimum_day(name)?;
        Ok(format!(
            "{}\n{}\n",
            plain_number(max.value()),
            plain_number(min.value())
        ))
    }
}

impl Extremes for DaysStatistics {
    fn minimum_day(&self, name: &str) -> Result<&StatMeasurement> {
        self.minimum(name.parse()?)
    }

    fn maximum_day(&self, name: &str) -> Result<&StatMeasurement> {
        self.maximum(name.parse()?)
    }
}

// Shortest representation that reads back to the same value, with at least one decimal.
fn plain_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

impl fmt::Display for DaysStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lines = Vec::with_capacity(Parameter::ALL.len() * 2);
        for param in Parameter::ALL {
            for extreme in [self.maximum(param), self.minimum(param)] {
                match extreme {
                    Ok(stat) => lines.push(stat.to_string()),
                    Err(e) => {
                        warn!(parameter = %param, "cannot render statistic: {e}");
                        lines.push(String::new());
                    }
                }
            }
        }
        f.write_str(&lines.join("\n"))
    }
}
