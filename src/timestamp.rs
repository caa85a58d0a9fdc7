//! Canonical textual timestamps, `yyyy-MM-dd'T'HH:mm:ss <zone>`, always rendered in UTC.

use std::cmp::Ordering;

use time::{macros::format_description, OffsetDateTime, PrimitiveDateTime, UtcOffset};

use crate::{Error, Result};

/// Render `datetime` in UTC, e.g. `2018-01-02T21:40:00 UTC`.
pub fn format_utc(datetime: OffsetDateTime) -> String {
    let utc = datetime.to_offset(UtcOffset::UTC);
    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02} UTC",
        utc.year(),
        u8::from(utc.month()),
        utc.day(),
        utc.hour(),
        utc.minute(),
        utc.second()
    )
}

/// Parse a canonical timestamp and normalize it to UTC.
///
/// The zone is mandatory. Besides `UTC`/`GMT`, the US zone abbreviations and numeric
/// offsets (`+05:30`, `GMT-06:00`, `UTC+0100`) are understood.
pub fn parse_utc(input: &str) -> Result<OffsetDateTime> {
    let bad = |reason: String| Error::TimeFormat {
        input: input.to_string(),
        reason,
    };

    let (stamp, zone) = input
        .trim()
        .rsplit_once(char::is_whitespace)
        .ok_or_else(|| bad(String::from("missing time zone")))?;

    let format = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
    let local = PrimitiveDateTime::parse(stamp.trim_end(), &format).map_err(|e| bad(e.to_string()))?;
    let offset = zone_offset(zone).ok_or_else(|| bad(format!("unknown time zone `{zone}`")))?;

    Ok(local.assume_offset(offset).to_offset(UtcOffset::UTC))
}

fn zone_offset(zone: &str) -> Option<UtcOffset> {
    let zone = zone.to_ascii_uppercase();
    let hours = match zone.as_str() {
        "UTC" | "GMT" | "UT" | "Z" => return Some(UtcOffset::UTC),
        "EST" => -5,
        "EDT" => -4,
        "CST" => -6,
        "CDT" => -5,
        "MST" => -7,
        "MDT" => -6,
        "PST" => -8,
        "PDT" => -7,
        _ => return numeric_offset(&zone),
    };
    UtcOffset::from_hms(hours, 0, 0).ok()
}

fn numeric_offset(zone: &str) -> Option<UtcOffset> {
    let rest = zone
        .strip_prefix("GMT")
        .or_else(|| zone.strip_prefix("UTC"))
        .unwrap_or(zone);
    let (sign, digits) = if let Some(digits) = rest.strip_prefix('+') {
        (1, digits)
    } else if let Some(digits) = rest.strip_prefix('-') {
        (-1, digits)
    } else {
        return None;
    };

    let (hours, minutes) = match digits.split_once(':') {
        Some(parts) => parts,
        None if digits.len() == 4 && digits.is_ascii() => digits.split_at(2),
        None => (digits, "0"),
    };
    if hours.is_empty() || !hours.bytes().chain(minutes.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }

    let hours: i8 = hours.parse().ok()?;
    let minutes: i8 = minutes.parse().ok()?;
    UtcOffset::from_hms(sign * hours, sign * minutes, 0).ok()
}

/// Ordering of a timestamped value against canonical timestamp text.
pub trait TimeComparable {
    /// The instant this value is associated with.
    fn utc_timestamp(&self) -> OffsetDateTime;

    fn compare_with_time_string(&self, input: &str) -> Result<Ordering> {
        let other = parse_utc(input)?;
        Ok(self.utc_timestamp().cmp(&other))
    }

    fn newer_than(&self, input: &str) -> Result<bool> {
        Ok(self.compare_with_time_string(input)? == Ordering::Greater)
    }

    fn older_than(&self, input: &str) -> Result<bool> {
        Ok(self.compare_with_time_string(input)? == Ordering::Less)
    }
}
