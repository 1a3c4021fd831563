//! Tabular Hijri calendar arithmetic.
//!
//! Converts between the proleptic Gregorian calendar and the arithmetic
//! (Kuwaiti) Hijri calendar through a Julian Day pivot, counts down to
//! recurring observances, and lays out Hijri months for display.
//!
//! The tabular calendar alternates 30- and 29-day months and adds a day to
//! Dhu al-Hijjah in 11 years of every 30. It can differ by a day or two from
//! calendars based on moon sighting.
//!
//! ```
//! use hijri_date::{GregorianDate, HijriDate, days_until_hijri_date, gregorian_to_hijri};
//!
//! let today = GregorianDate::new(2024, 3, 11).unwrap();
//! assert_eq!(gregorian_to_hijri(today), HijriDate::new(1445, 9, 1).unwrap());
//! assert_eq!(days_until_hijri_date(10, 1, today), 30); // Eid al-Fitr
//! ```

mod calendar;
mod config;
mod consts;
mod convert;
mod error;
mod events;
mod julian;
mod month;
mod prelude;
mod types;

pub use calendar::HijriCalendar;
pub use config::{CalendarConfig, DEFAULT_UPCOMING_LIMIT, Validation};
pub use consts::*;
pub use convert::{
    Alignment, days_between, gregorian_to_hijri, gregorian_to_hijri_aligned, hijri_to_gregorian,
};
pub use error::{InvalidDateError, ParseError};
pub use events::{
    EventCategory, ISLAMIC_EVENTS, IslamicEvent, UpcomingEvent, days_until_hijri_date,
    days_until_hijri_date_aligned, event_on, events_in_month, next_occurrence, upcoming_events,
};
pub use month::{GridDay, HijriYearMonth, MonthGrid};
pub use types::{
    GregorianDate, HijriDate, HijriMonth, gregorian_days_in_month, hijri_days_in_month,
    hijri_days_in_year, is_gregorian_leap_year, is_hijri_leap_year, month_name,
};
