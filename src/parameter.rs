use std::{fmt, str::FromStr};

use crate::Error;

/// The parameters tracked by the statistics engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Parameter {
    /// Air temperature at 1.5m.
    Tair,
    /// Air temperature at 9m.
    Ta9m,
    /// Solar radiation.
    Srad,
}

impl Parameter {
    /// Rendering order of the aggregated summaries.
    pub const ALL: [Parameter; 3] = [Parameter::Tair, Parameter::Ta9m, Parameter::Srad];

    /// Column name in the file header, also the canonical uppercase id.
    pub const fn as_str(self) -> &'static str {
        match self {
            Parameter::Tair => "TAIR",
            Parameter::Ta9m => "TA9M",
            Parameter::Srad => "SRAD",
        }
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            Parameter::Tair => 0,
            Parameter::Ta9m => 1,
            Parameter::Srad => 2,
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Parameter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Parameter::ALL
            .into_iter()
            .find(|param| param.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::InvalidParameterId(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_case_insensitive() {
        assert_eq!("tair".parse::<Parameter>().unwrap(), Parameter::Tair);
        assert_eq!("Ta9m".parse::<Parameter>().unwrap(), Parameter::Ta9m);
        assert_eq!("SRAD".parse::<Parameter>().unwrap(), Parameter::Srad);
    }

    #[test]
    fn unknown_name_keeps_the_offending_text() {
        match "Stuff".parse::<Parameter>() {
            Err(Error::InvalidParameterId(name)) => assert_eq!(name, "Stuff"),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
