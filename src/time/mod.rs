//! Midnight calculations.
//!
//! - [`midnight`]: start of today in the local zone
//! - [`midnight_in`]: start of today in a given zone
//! - [`midnight_by_time_zone`]: start of today in a zone looked up by IANA name
//! - [`midnight_of`]: start of the day of a given instant
//!
//! "Midnight" is 00:00:00 local time. On days where that wall-clock time
//! does not exist because of a daylight-saving jump, the earliest valid
//! instant of the day is returned instead.
//!
//! # Examples
//!
//! ```rust
//! use chrono::{TimeZone, Timelike};
//! use chrono_tz::Europe::Brussels;
//! use utilkit::time::midnight_of;
//!
//! let afternoon = Brussels.with_ymd_and_hms(2024, 3, 12, 15, 30, 0).unwrap();
//! let start = midnight_of(&afternoon);
//!
//! assert_eq!(start, Brussels.with_ymd_and_hms(2024, 3, 12, 0, 0, 0).unwrap());
//! assert_eq!(start.hour(), 0);
//! ```

use chrono::{DateTime, Local, NaiveTime, TimeDelta, TimeZone, Utc};
use chrono_tz::Tz;

/// Upper bound, in minutes, on how far past 00:00 the first valid local
/// time of a day is searched for.
const MAX_DAY_START_SHIFT_MINUTES: i64 = 24 * 60;

/// Error returned by the time helpers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimeError {
    /// The time-zone identifier is not in the IANA database.
    #[error("time zone {name:?} not found")]
    ZoneNotFound {
        /// The identifier that failed to resolve.
        name: String,
    },
}

/// Returns the start of the calendar day that contains `instant`, in the
/// same zone as `instant`.
pub fn midnight_of<Z: TimeZone>(instant: &DateTime<Z>) -> DateTime<Z> {
    let zone = instant.timezone();
    let day_start = instant.date_naive().and_time(NaiveTime::MIN);

    (0..=MAX_DAY_START_SHIFT_MINUTES)
        .find_map(|minutes| {
            zone.from_local_datetime(&(day_start + TimeDelta::minutes(minutes)))
                .earliest()
        })
        .unwrap_or_else(|| instant.clone())
}

/// Returns today's midnight in the local time zone.
pub fn midnight() -> DateTime<Local> {
    midnight_of(&Local::now())
}

/// Returns today's midnight in `zone`, where "today" is the current date as
/// observed in `zone`.
///
/// # Examples
///
/// ```rust
/// use chrono::Timelike;
/// use chrono_tz::Asia::Tokyo;
/// use utilkit::time::midnight_in;
///
/// let start = midnight_in(&Tokyo);
/// assert_eq!((start.hour(), start.minute(), start.second()), (0, 0, 0));
/// ```
pub fn midnight_in<Z: TimeZone>(zone: &Z) -> DateTime<Z> {
    midnight_of(&Utc::now().with_timezone(zone))
}

/// Resolves `name` in the IANA time-zone database and returns today's
/// midnight there.
///
/// # Errors
///
/// Returns [`TimeError::ZoneNotFound`] when `name` is not a known zone.
///
/// # Examples
///
/// ```rust
/// use utilkit::time::{TimeError, midnight_by_time_zone};
///
/// assert!(midnight_by_time_zone("Europe/Brussels").is_ok());
/// assert_eq!(
///     midnight_by_time_zone("Mars/Olympus_Mons"),
///     Err(TimeError::ZoneNotFound { name: "Mars/Olympus_Mons".to_string() })
/// );
/// ```
pub fn midnight_by_time_zone(name: &str) -> Result<DateTime<Tz>, TimeError> {
    let zone: Tz = name.parse().map_err(|_| {
        tracing::debug!(name, "unknown time zone");
        TimeError::ZoneNotFound {
            name: name.to_owned(),
        }
    })?;

    Ok(midnight_in(&zone))
}

// =============================================================================
// Tests
// =============================================================================
