use std::{num::ParseFloatError, num::ParseIntError, path::PathBuf};

use miette::Diagnostic;
use thiserror::Error;
use time::UtcOffset;

use crate::parameter::Parameter;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("[{at}] file {} does not exist", path.display())]
    #[diagnostic(code(mesonet::file_not_found))]
    FileNotFound { path: PathBuf, at: String },

    #[error(transparent)]
    #[diagnostic(code(mesonet::io))]
    Io(#[from] std::io::Error),

    #[error("Invalid copyright marker: `{found}`")]
    #[diagnostic(
        code(mesonet::invalid_copyright),
        help("the first token of a mesonet time-series file must be `101`")
    )]
    InvalidCopyright { found: String },

    #[error("Invalid parameter id: {0}")]
    #[diagnostic(
        code(mesonet::invalid_parameter_id),
        help("expected one of TAIR, TA9M or SRAD (case-insensitive)")
    )]
    InvalidParameterId(String),

    #[error("Invalid time zone: expected UTC, got {offset}")]
    #[diagnostic(code(mesonet::invalid_time_zone))]
    InvalidTimeZone { offset: UtcOffset },

    #[error("Bad timestamp `{input}`: {reason}")]
    #[diagnostic(
        code(mesonet::time_format),
        help("timestamps look like `2018-01-02T21:40:00 UTC`")
    )]
    TimeFormat { input: String, reason: String },

    #[error("Cannot compute day statistics without records")]
    #[diagnostic(code(mesonet::empty_day))]
    EmptyDay,

    #[error("No statistics collected for {0}")]
    #[diagnostic(
        code(mesonet::no_statistics),
        help("run `find_statistics` or fold at least one day first")
    )]
    NoStatistics(Parameter),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),
}

/// Structural failures inside a time-series file. Line numbers start at 1.
#[derive(Debug, Error, Diagnostic)]
pub enum ParseError {
    #[error("Missing {what} on line {line}")]
    #[diagnostic(code(mesonet::parse::missing_line))]
    MissingLine { line: usize, what: &'static str },

    #[error("Bad date header on line {line}: {reason}")]
    #[diagnostic(
        code(mesonet::parse::date_header),
        help("expected `<tag> <year> <month> <day> <hour> <minute> <second>`")
    )]
    BadDateHeader { line: usize, reason: String },

    #[error("Invalid date on line {line}: {source}")]
    #[diagnostic(code(mesonet::parse::invalid_date))]
    InvalidDate {
        line: usize,
        #[source]
        source: time::error::ComponentRange,
    },

    #[error("Missing column {column} in header on line {line}")]
    #[diagnostic(
        code(mesonet::parse::missing_column),
        help("the header must name STID, TIME, TAIR, TA9M and SRAD")
    )]
    MissingColumn { line: usize, column: &'static str },

    #[error("Line {line} has {fields} fields, column {column} is at index {index}")]
    #[diagnostic(code(mesonet::parse::short_row))]
    ShortRow {
        line: usize,
        column: &'static str,
        index: usize,
        fields: usize,
    },

    #[error("Bad integer `{text}` in column {column} on line {line}")]
    #[diagnostic(code(mesonet::parse::bad_integer))]
    BadInteger {
        line: usize,
        column: &'static str,
        text: String,
        #[source]
        source: Option<ParseIntError>,
    },

    #[error("Bad number `{text}` in column {column} on line {line}")]
    #[diagnostic(code(mesonet::parse::bad_float))]
    BadFloat {
        line: usize,
        column: &'static str,
        text: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("Unrecognized input `{slice}` on line {line}")]
    #[diagnostic(code(mesonet::parse::lexing))]
    Lexing { line: usize, slice: String },
}
