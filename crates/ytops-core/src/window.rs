//! Half-open reporting windows and the calendar windows the dashboard shows.

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, TimeZone, Utc};

use crate::WindowError;

/// Half-open interval `[start, end)` of instants.
///
/// A record published exactly at `end` falls outside the window, so adjacent
/// day or month windows never count the same upload twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TimeWindow {
    /// # Errors
    ///
    /// Returns [`WindowError::Inverted`] when `start > end`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, WindowError> {
        if start > end {
            return Err(WindowError::Inverted {
                start: start.to_rfc3339(),
                end: end.to_rfc3339(),
            });
        }
        Ok(Self { start, end })
    }

    #[must_use]
    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    #[must_use]
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant < self.end
    }
}

/// From local midnight of `now`'s calendar day up to `now`.
///
/// # Errors
///
/// Returns [`WindowError::InvalidDate`] if the day has no local midnight
/// or early-morning instant in `now`'s time zone.
pub fn today_window<Tz: TimeZone>(now: &DateTime<Tz>) -> Result<TimeWindow, WindowError> {
    let start = local_midnight(&now.timezone(), now.date_naive())?;
    TimeWindow::new(start, now.with_timezone(&Utc))
}

/// From local midnight on the first of `now`'s month up to `now`.
///
/// # Errors
///
/// Returns [`WindowError::InvalidDate`] if the first of the month has no
/// local midnight in `now`'s time zone.
pub fn month_window<Tz: TimeZone>(now: &DateTime<Tz>) -> Result<TimeWindow, WindowError> {
    let today = now.date_naive();
    let first = today
        .with_day(1)
        .ok_or_else(|| WindowError::InvalidDate(today.to_string()))?;
    let start = local_midnight(&now.timezone(), first)?;
    TimeWindow::new(start, now.with_timezone(&Utc))
}

/// Whole calendar days `start_date..=end_date` in `tz`.
///
/// The window ends at local midnight of the day after `end_date`, so every
/// upload on the last day is included.
///
/// # Errors
///
/// - [`WindowError::Inverted`] when `start_date` is after `end_date`.
/// - [`WindowError::InvalidDate`] when a boundary cannot be represented.
pub fn custom_window<Tz: TimeZone>(
    tz: &Tz,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Result<TimeWindow, WindowError> {
    let after_end = end_date
        .succ_opt()
        .ok_or_else(|| WindowError::InvalidDate(end_date.to_string()))?;
    let start = local_midnight(tz, start_date)?;
    let end = local_midnight(tz, after_end)?;
    TimeWindow::new(start, end)
}

/// First instant of `date` in `tz`, as UTC.
///
/// Ambiguous midnights (DST fall-back) resolve to the earlier instant. Zones
/// that skip midnight for a DST jump start the day at 01:00 local instead.
fn local_midnight<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> Result<DateTime<Utc>, WindowError> {
    let candidates = [NaiveTime::MIN, NaiveTime::from_hms_opt(1, 0, 0).unwrap_or(NaiveTime::MIN)];
    candidates
        .iter()
        .find_map(|time| tz.from_local_datetime(&date.and_time(*time)).earliest())
        .map(|local| local.with_timezone(&Utc))
        .ok_or_else(|| WindowError::InvalidDate(date.to_string()))
}
