//! Mesonet time-series (`.mts`) files.
//!
//! ```text
//!   101 ! (c) 2018 Oklahoma Climatological Survey and the Oklahoma Mesonet
//!   20 2018 01 02 00 00 00
//!  STID  STNM  TIME   RELH   TAIR   SRAD   TA9M
//!  STIL    86     0     73  -10.5      0  -10.0
//!  STIL    86     5     73  -10.6      0  -10.1
//! ```
//!
//! The first line carries the copyright marker, the second the reference date of the
//! file, the third names the columns of every following row.

use std::{fs, path::Path, str::FromStr};

use time::{Date, Month, OffsetDateTime};
use tracing::debug;

use crate::{
    columns::{ColumnMap, STATION_COLUMN, TIME_COLUMN},
    lexer::{self, Field, Token},
    timestamp::format_utc,
    Config, Error, Measurement, Parameter, ParseError, Record, Result,
};

/// Reference date of a file, from its second line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateHeader {
    pub tag: String,
    pub timestamp: OffsetDateTime,
}

impl DateHeader {
    fn parse(fields: &[Field<'_>], line: usize) -> std::result::Result<Self, ParseError> {
        if fields.len() < 7 {
            return Err(ParseError::BadDateHeader {
                line,
                reason: format!("expected 7 fields, found {}", fields.len()),
            });
        }

        let number = |index: usize, what: &str| -> std::result::Result<i32, ParseError> {
            let field = fields[index];
            if field.kind != Token::Integer {
                return Err(ParseError::BadDateHeader {
                    line,
                    reason: format!("{what} `{}` is not an integer", field.text),
                });
            }
            field.text.parse().map_err(|_| ParseError::BadDateHeader {
                line,
                reason: format!("{what} `{}` is out of range", field.text),
            })
        };
        let component = |index: usize, what: &str| -> std::result::Result<u8, ParseError> {
            let value = number(index, what)?;
            u8::try_from(value).map_err(|_| ParseError::BadDateHeader {
                line,
                reason: format!("{what} `{value}` is out of range"),
            })
        };

        let year = number(1, "year")?;
        let month = component(2, "month")?;
        let day = component(3, "day")?;
        let hour = component(4, "hour")?;
        let minute = component(5, "minute")?;
        let second = component(6, "second")?;

        let invalid = |source| ParseError::InvalidDate { line, source };
        let month = Month::try_from(month).map_err(invalid)?;
        let date = Date::from_calendar_date(year, month, day).map_err(invalid)?;
        let timestamp = date
            .with_hms(hour, minute, second)
            .map_err(invalid)?
            .assume_utc();

        Ok(Self {
            tag: fields[0].text.to_string(),
            timestamp,
        })
    }

    pub fn date(&self) -> Date {
        self.timestamp.date()
    }
}

/// A fully parsed time-series file for one station-day.
#[derive(Debug, Clone)]
pub struct MesonetFile {
    header: DateHeader,
    columns: ColumnMap,
    // In file order
    records: Vec<Record>,
}

impl MesonetFile {
    pub fn parse_with(s: &str, config: &Config) -> Result<Self> {
        let mut lines = s.lines().enumerate().map(|(index, line)| (index + 1, line));

        let copyright = lines.next().map(|(_, line)| line).unwrap_or_default();
        check_copyright(copyright, &config.copyright_marker)?;

        let (number, line) = lines.next().ok_or(ParseError::MissingLine {
            line: 2,
            what: "date header",
        })?;
        let header = DateHeader::parse(&lexer::fields(line, number)?, number)?;

        let (number, line) = lines.next().ok_or(ParseError::MissingLine {
            line: 3,
            what: "column header",
        })?;
        let columns = ColumnMap::from_fields(&lexer::fields(line, number)?, number)?;

        let date = header.date();
        let mut records = Vec::new();
        for (number, line) in lines {
            let fields = lexer::fields(line, number)?;
            if fields.is_empty() {
                continue;
            }
            records.push(parse_row(&fields, number, &columns, date)?);
        }

        Ok(Self {
            header,
            columns,
            records,
        })
    }

    pub fn header(&self) -> &DateHeader {
        &self.header
    }

    pub fn header_timestamp(&self) -> OffsetDateTime {
        self.header.timestamp
    }

    /// The header timestamp in canonical form, e.g. `2018-01-02T00:00:00 UTC`.
    pub fn header_timestamp_string(&self) -> String {
        format_utc(self.header.timestamp)
    }

    pub fn date(&self) -> Date {
        self.header.date()
    }

    pub fn columns(&self) -> &ColumnMap {
        &self.columns
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}

impl FromStr for MesonetFile {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_with(s, &Config::default())
    }
}

/// Read and parse the file at `path`.
pub fn read_file(path: impl AsRef<Path>, config: &Config) -> Result<MesonetFile> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(Error::FileNotFound {
            path: path.to_path_buf(),
            at: format_utc(OffsetDateTime::now_utc()),
        });
    }

    let contents = fs::read_to_string(path)?;
    let file = MesonetFile::parse_with(&contents, config)?;
    debug!(
        path = %path.display(),
        date = %file.date(),
        records = file.records.len(),
        "parsed time-series file"
    );

    Ok(file)
}

/// The records of the file at `path`, in file order.
pub fn parse_file(path: impl AsRef<Path>) -> Result<Vec<Record>> {
    read_file(path, &Config::default()).map(MesonetFile::into_records)
}

fn check_copyright(line: &str, marker: &str) -> Result<()> {
    let fields = lexer::fields(line, 1)?;
    let found = fields.first().map(|field| field.text).unwrap_or_default();
    if found != marker {
        return Err(Error::InvalidCopyright {
            found: found.to_string(),
        });
    }
    Ok(())
}

fn parse_row(
    fields: &[Field<'_>],
    line: usize,
    columns: &ColumnMap,
    date: Date,
) -> std::result::Result<Record, ParseError> {
    let get = |index: usize, column: &'static str| {
        fields.get(index).copied().ok_or(ParseError::ShortRow {
            line,
            column,
            index,
            fields: fields.len(),
        })
    };

    let station = get(columns.station(), STATION_COLUMN)?;

    let time = get(columns.time(), TIME_COLUMN)?;
    if time.kind != Token::Integer {
        return Err(ParseError::BadInteger {
            line,
            column: TIME_COLUMN,
            text: time.text.to_string(),
            source: None,
        });
    }
    let minute_offset = time.text.parse().map_err(|e| ParseError::BadInteger {
        line,
        column: TIME_COLUMN,
        text: time.text.to_string(),
        source: Some(e),
    })?;

    let measurement = |param: Parameter| -> std::result::Result<Measurement, ParseError> {
        let field = get(columns.parameter(param), param.as_str())?;
        field
            .text
            .parse::<f64>()
            .map(Measurement::new)
            .map_err(|e| ParseError::BadFloat {
                line,
                column: param.as_str(),
                text: field.text.to_string(),
                source: e,
            })
    };

    Ok(Record::new(
        station.text,
        date,
        minute_offset,
        measurement(Parameter::Tair)?,
        measurement(Parameter::Ta9m)?,
        measurement(Parameter::Srad)?,
    ))
}
