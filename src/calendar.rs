//! Configured entry point for UI code.

use crate::config::{CalendarConfig, Validation};
use crate::convert::{gregorian_to_hijri_aligned, hijri_to_gregorian};
use crate::events::{UpcomingEvent, days_until_hijri_date_aligned, upcoming_events};
use crate::month::{HijriYearMonth, MonthGrid};
use crate::{GregorianDate, HijriDate, HijriMonth, InvalidDateError, MIN_DAY};
use std::fmt;

/// Calendar operations bound to one [`CalendarConfig`].
///
/// Every time-dependent method takes `today` explicitly; the calendar never
/// reads the system clock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HijriCalendar {
    config: CalendarConfig,
}

impl HijriCalendar {
    pub const fn new(config: CalendarConfig) -> Self {
        Self { config }
    }

    pub const fn config(&self) -> &CalendarConfig {
        &self.config
    }

    /// Hijri date of a Gregorian day.
    ///
    /// # Errors
    /// Under [`Validation::Strict`], returns an error for an invalid date.
    pub fn to_hijri(&self, date: GregorianDate) -> Result<HijriDate, InvalidDateError> {
        let date = self.admit(date, GregorianDate::validate)?;
        Ok(gregorian_to_hijri_aligned(date, self.config.alignment))
    }

    /// Gregorian day on which a Hijri date falls.
    ///
    /// # Errors
    /// Under [`Validation::Strict`], returns an error for an invalid date.
    pub fn to_gregorian(&self, date: HijriDate) -> Result<GregorianDate, InvalidDateError> {
        let date = self.admit(date, HijriDate::validate)?;
        Ok(hijri_to_gregorian(date))
    }

    /// Days from `today` until the next occurrence of a Hijri month/day.
    ///
    /// A day the month reaches only in leap years, such as 30 Dhu al-Hijjah,
    /// is accepted in every year. In a common year it falls on the day after
    /// the month ends, 1 Muharram of the following year.
    ///
    /// # Errors
    /// Under [`Validation::Strict`], returns an error for an invalid `today`,
    /// a month outside 1-12, or a day the month never reaches.
    pub fn days_until(
        &self,
        hijri_month: u8,
        hijri_day: u8,
        today: GregorianDate,
    ) -> Result<u32, InvalidDateError> {
        let today = self.admit(today, GregorianDate::validate)?;
        if self.config.validation == Validation::Strict {
            let year = gregorian_to_hijri_aligned(today, self.config.alignment).year();
            check_recurring(year, hijri_month, hijri_day).inspect_err(|err| {
                tracing::warn!(hijri_month, hijri_day, %err, "rejected recurring Hijri date");
            })?;
        }
        Ok(days_until_hijri_date_aligned(
            hijri_month,
            hijri_day,
            today,
            self.config.alignment,
        ))
    }

    /// The nearest observances, soonest first, capped at the configured limit.
    ///
    /// # Errors
    /// Under [`Validation::Strict`], returns an error for an invalid `today`.
    pub fn upcoming_events(&self, today: GregorianDate) -> Result<Vec<UpcomingEvent>, InvalidDateError> {
        let today = self.admit(today, GregorianDate::validate)?;
        Ok(upcoming_events(
            today,
            self.config.upcoming_limit,
            self.config.alignment,
        ))
    }

    /// Today's Hijri date as the header shows it, e.g. `"1 رمضان 1445"`.
    ///
    /// # Errors
    /// Under [`Validation::Strict`], returns an error for an invalid `today`.
    pub fn today_string(&self, today: GregorianDate) -> Result<String, InvalidDateError> {
        Ok(self.to_hijri(today)?.to_arabic_string())
    }

    /// The Hijri month containing `today`, where the calendar page opens.
    ///
    /// # Errors
    /// Returns an error when `today` is invalid under strict validation or
    /// falls before 1 AH.
    pub fn current_month(&self, today: GregorianDate) -> Result<HijriYearMonth, InvalidDateError> {
        HijriYearMonth::of(self.to_hijri(today)?)
    }

    /// Month view for `year_month` with today's cell marked.
    ///
    /// # Errors
    /// Under [`Validation::Strict`], returns an error for an invalid `today`.
    pub fn month_grid(
        &self,
        year_month: HijriYearMonth,
        today: GregorianDate,
    ) -> Result<MonthGrid, InvalidDateError> {
        Ok(MonthGrid::build(year_month, self.to_hijri(today)?))
    }

    fn admit<T: Copy + fmt::Display>(
        &self,
        value: T,
        check: fn(T) -> Result<T, InvalidDateError>,
    ) -> Result<T, InvalidDateError> {
        match self.config.validation {
            Validation::Permissive => Ok(value),
            Validation::Strict => check(value).inspect_err(|err| {
                tracing::warn!(%value, %err, "rejected out-of-range date");
            }),
        }
    }
}

/// A month/day pair is acceptable if the month exists and the day occurs in
/// that month in at least some year. `year` only labels the error.
fn check_recurring(year: i32, month: u8, day: u8) -> Result<(), InvalidDateError> {
    let max = HijriMonth::try_from(month)?.max_days();
    if (MIN_DAY..=max).contains(&day) {
        Ok(())
    } else {
        Err(InvalidDateError::InvalidDay {
            year,
            month,
            day,
            max,
        })
    }
}
