use chrono::{DateTime, Datelike, Duration, TimeZone, Utc};

use crate::error::DownloadError;

use super::de::datetime_utc_from_epoch_duration;

/// Trade id cursor. The venue encodes these as `unixSeconds * 1_000_000`,
/// which is not a true microsecond timestamp, just the scale the API expects
/// for its `since` parameter. The factor is a wire contract and must not change.
pub type TradeId = u64;

pub const TID_PER_SECOND: u64 = 1_000_000;

pub fn timestamp_to_tid(unix_time: u64) -> TradeId {
    unix_time * TID_PER_SECOND
}

pub fn datetime_to_tid(date_time: DateTime<Utc>) -> Result<TradeId, DownloadError> {
    // Pre-epoch dates have no id in the venue's encoding.
    let unix_time =
        u64::try_from(date_time.timestamp()).map_err(|_| DownloadError::InvalidDate {
            year: date_time.year(),
            month: date_time.month(),
            day: date_time.day(),
        })?;
    Ok(timestamp_to_tid(unix_time))
}

pub fn tid_to_datetime(tid: TradeId) -> DateTime<Utc> {
    // Numerically tid / 1_000_000 seconds, exact as a microsecond duration.
    datetime_utc_from_epoch_duration(std::time::Duration::from_micros(tid))
}

/*----- */
// Tid range
/*----- */
/// Half-open `[begin, end)` range over trade id space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TidRange {
    pub begin: TradeId,
    pub end: TradeId,
}

impl TidRange {
    pub fn new(begin: TradeId, end: TradeId) -> Self {
        Self { begin, end }
    }

    pub fn year(year: i32) -> Result<Self, DownloadError> {
        let begin = utc_midnight(year, 1, 1)?;
        let end = utc_midnight(year + 1, 1, 1)?;
        Ok(Self::new(datetime_to_tid(begin)?, datetime_to_tid(end)?))
    }

    pub fn month(year: i32, month: u32) -> Result<Self, DownloadError> {
        let begin = utc_midnight(year, month, 1)?;
        let end = if month == 12 {
            utc_midnight(year + 1, 1, 1)?
        } else {
            utc_midnight(year, month + 1, 1)?
        };
        Ok(Self::new(datetime_to_tid(begin)?, datetime_to_tid(end)?))
    }

    pub fn day(year: i32, month: u32, day: u32) -> Result<Self, DownloadError> {
        let begin = utc_midnight(year, month, day)?;
        let end = begin + Duration::days(1);
        Ok(Self::new(datetime_to_tid(begin)?, datetime_to_tid(end)?))
    }
}

fn utc_midnight(year: i32, month: u32, day: u32) -> Result<DateTime<Utc>, DownloadError> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .ok_or(DownloadError::InvalidDate { year, month, day })
}
