use crate::{lexer::Field, Parameter, ParseError};

pub const STATION_COLUMN: &str = "STID";
pub const TIME_COLUMN: &str = "TIME";

/// Position of every required field in a data row, resolved from the column header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    station: usize,
    time: usize,
    parameters: [usize; 3],
}

impl ColumnMap {
    /// Resolve the required columns by exact name. The first occurrence of a
    /// name wins and unknown names are ignored.
    pub fn from_names<'a>(
        names: impl IntoIterator<Item = &'a str>,
        line: usize,
    ) -> Result<Self, ParseError> {
        let names: Vec<&str> = names.into_iter().collect();
        let find = |column: &'static str| {
            names
                .iter()
                .position(|name| *name == column)
                .ok_or(ParseError::MissingColumn { line, column })
        };

        Ok(Self {
            station: find(STATION_COLUMN)?,
            time: find(TIME_COLUMN)?,
            parameters: [
                find(Parameter::Tair.as_str())?,
                find(Parameter::Ta9m.as_str())?,
                find(Parameter::Srad.as_str())?,
            ],
        })
    }

    pub(crate) fn from_fields(fields: &[Field<'_>], line: usize) -> Result<Self, ParseError> {
        Self::from_names(fields.iter().map(|field| field.text), line)
    }

    pub fn station(&self) -> usize {
        self.station
    }

    pub fn time(&self) -> usize {
        self.time
    }

    pub fn parameter(&self, param: Parameter) -> usize {
        self.parameters[param.index()]
    }
}
