use time::{Date, Duration, OffsetDateTime, UtcOffset};

use crate::{timestamp::TimeComparable, Error, Measurement, Parameter, Result};

/// One row of a time-series file: a station's readings at one instant.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    station_id: String,
    date: Date,
    // Minutes past the file's midnight, may exceed 59 (and even a whole day).
    minute_offset: i32,
    measurements: [Measurement; 3],
}

impl Record {
    pub fn new(
        station_id: impl Into<String>,
        date: Date,
        minute_offset: i32,
        tair: Measurement,
        ta9m: Measurement,
        srad: Measurement,
    ) -> Self {
        Self {
            station_id: station_id.into(),
            date,
            minute_offset,
            measurements: [tair, ta9m, srad],
        }
    }

    /// Build a record from an explicit instant, which must be expressed in UTC.
    /// Seconds are dropped.
    pub fn from_timestamp(
        station_id: impl Into<String>,
        datetime: OffsetDateTime,
        tair: Measurement,
        ta9m: Measurement,
        srad: Measurement,
    ) -> Result<Self> {
        if datetime.offset() != UtcOffset::UTC {
            return Err(Error::InvalidTimeZone {
                offset: datetime.offset(),
            });
        }
        let minute_offset = i32::from(datetime.hour()) * 60 + i32::from(datetime.minute());

        Ok(Self::new(
            station_id,
            datetime.date(),
            minute_offset,
            tair,
            ta9m,
            srad,
        ))
    }

    pub fn station_id(&self) -> &str {
        &self.station_id
    }

    /// Calendar day of the file this record belongs to.
    pub fn date(&self) -> Date {
        self.date
    }

    pub fn minute_offset(&self) -> i32 {
        self.minute_offset
    }

    /// The instant of the reading: the offset is folded into hours (and days) past midnight.
    pub fn timestamp(&self) -> OffsetDateTime {
        self.date
            .midnight()
            .saturating_add(Duration::minutes(i64::from(self.minute_offset)))
            .assume_utc()
    }

    pub fn hour(&self) -> u8 {
        self.timestamp().hour()
    }

    pub fn minute(&self) -> u8 {
        self.timestamp().minute()
    }

    pub fn measurement(&self, param: Parameter) -> Measurement {
        self.measurements[param.index()]
    }

    /// Lookup by case-insensitive parameter name.
    pub fn measurement_by_name(&self, name: &str) -> Result<Measurement> {
        Ok(self.measurement(name.parse()?))
    }
}

impl TimeComparable for Record {
    fn utc_timestamp(&self) -> OffsetDateTime {
        self.timestamp()
    }
}
