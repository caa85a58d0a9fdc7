//! Daily and multi-day statistics from Mesonet station time-series files.
//!
//! A [`MesonetFile`] holds the [`Record`]s of one station-day. [`DayStatistics`] reduces
//! them to the minimum, maximum, average and total of each tracked [`Parameter`], each
//! tagged with the station and instant it came from. [`DaysStatistics`] folds many days
//! and finds the overall extremes.
//!
//! ```no_run
//! use mesonet::{DaysStatistics, Extremes};
//!
//! let mut days = DaysStatistics::new(["20180102okcn.mts", "20180102stil.mts"]);
//! days.find_statistics()?;
//! println!("{}", days.maximum_day("tair")?);
//! # Ok::<(), mesonet::Error>(())
//! ```

pub mod columns;
pub mod config;
pub mod day;
pub mod days;
pub mod error;
pub mod file;
mod lexer;
pub mod measurement;
pub mod parameter;
pub mod record;
pub mod stat;
pub mod timestamp;

pub use columns::ColumnMap;
pub use config::Config;
pub use day::{DayStatistics, ParameterStats};
pub use days::{Accumulator, DaysStatistics, Extremes};
pub use error::{Error, ParseError, Result};
pub use file::{parse_file, read_file, DateHeader, MesonetFile};
pub use measurement::Measurement;
pub use parameter::Parameter;
pub use record::Record;
pub use stat::{StatMeasurement, StatType};
pub use timestamp::TimeComparable;
