use crate::consts::{
    CENTURY_CYCLE, COMMON_YEAR_DAYS, CYCLE_LEAP_OFFSET, CYCLE_LEAP_YEARS, CYCLE_YEARS,
    DATE_SEPARATOR, DHU_AL_HIJJAH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE,
    GREGORIAN_DAYS_IN_MONTH, HIJRI_MONTHS_AR, HIJRI_MONTHS_EN, LEAP_YEAR_CYCLE, LEAP_YEAR_DAYS,
    LONG_MONTH_DAYS, MIN_DAY, MONTHS_PER_YEAR, SHORT_MONTH_DAYS,
};
use crate::prelude::*;
use crate::{InvalidDateError, ParseError};
use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::str::FromStr;

/// A day in the proleptic Gregorian calendar.
///
/// Values built with [`GregorianDate::new`] are guaranteed valid. Values built
/// with [`GregorianDate::new_unchecked`] carry whatever components they were
/// given; the conversions accept both and never fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GregorianDate {
    year:  i32,
    month: u8,
    day:   u8,
}

impl GregorianDate {
    /// Creates a validated Gregorian date.
    ///
    /// # Errors
    /// Returns `InvalidDateError::InvalidMonth` for a month outside 1-12 and
    /// `InvalidDateError::InvalidDay` for a day outside the month.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, InvalidDateError> {
        Self::new_unchecked(year, month, day).validate()
    }

    /// Creates a date without checking its components.
    #[inline]
    pub const fn new_unchecked(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Checks that the components form a real Gregorian date.
    ///
    /// # Errors
    /// See [`GregorianDate::new`].
    pub fn validate(self) -> Result<Self, InvalidDateError> {
        if !(1..=MONTHS_PER_YEAR).contains(&self.month) {
            return Err(InvalidDateError::InvalidMonth { month: self.month });
        }
        let max = gregorian_days_in_month(self.year, self.month);
        if !(MIN_DAY..=max).contains(&self.day) {
            return Err(InvalidDateError::InvalidDay {
                year: self.year,
                month: self.month,
                day: self.day,
                max,
            });
        }
        Ok(self)
    }

    #[inline]
    pub const fn year(self) -> i32 {
        self.year
    }

    #[inline]
    pub const fn month(self) -> u8 {
        self.month
    }

    #[inline]
    pub const fn day(self) -> u8 {
        self.day
    }
}

impl fmt::Display for GregorianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for GregorianDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month, day) = parse_ymd(s, true)?;
        Ok(Self::new(year, month, day)?)
    }
}

impl From<NaiveDate> for GregorianDate {
    // chrono months and days always fit in u8
    #[allow(clippy::cast_possible_truncation)]
    fn from(date: NaiveDate) -> Self {
        Self::new_unchecked(date.year(), date.month() as u8, date.day() as u8)
    }
}

impl TryFrom<GregorianDate> for NaiveDate {
    type Error = InvalidDateError;

    fn try_from(date: GregorianDate) -> Result<Self, Self::Error> {
        let date = date.validate()?;
        Self::from_ymd_opt(date.year, u32::from(date.month), u32::from(date.day))
            .ok_or(InvalidDateError::Unrepresentable { year: date.year })
    }
}

/// A day in the tabular Hijri calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HijriDate {
    year:  i32,
    month: u8,
    day:   u8,
}

impl HijriDate {
    /// Creates a validated Hijri date.
    ///
    /// # Errors
    /// Returns `InvalidDateError::InvalidYear` for years before 1 AH,
    /// `InvalidDateError::InvalidMonth` for a month outside 1-12 and
    /// `InvalidDateError::InvalidDay` when the day exceeds the tabular month
    /// length (30 for odd months, 29 for even ones, 30 for Dhu al-Hijjah in a
    /// leap year).
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, InvalidDateError> {
        Self::new_unchecked(year, month, day).validate()
    }

    /// Creates a date without checking its components.
    #[inline]
    pub const fn new_unchecked(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Checks that the components form a real tabular Hijri date.
    ///
    /// # Errors
    /// See [`HijriDate::new`].
    pub fn validate(self) -> Result<Self, InvalidDateError> {
        if self.year < 1 {
            return Err(InvalidDateError::InvalidYear { year: self.year });
        }
        if !(1..=MONTHS_PER_YEAR).contains(&self.month) {
            return Err(InvalidDateError::InvalidMonth { month: self.month });
        }
        let max = hijri_days_in_month(self.year, self.month);
        if !(MIN_DAY..=max).contains(&self.day) {
            return Err(InvalidDateError::InvalidDay {
                year: self.year,
                month: self.month,
                day: self.day,
                max,
            });
        }
        Ok(self)
    }

    #[inline]
    pub const fn year(self) -> i32 {
        self.year
    }

    #[inline]
    pub const fn month(self) -> u8 {
        self.month
    }

    #[inline]
    pub const fn day(self) -> u8 {
        self.day
    }

    /// The month as a [`HijriMonth`], if it is in range.
    pub fn hijri_month(self) -> Option<HijriMonth> {
        HijriMonth::try_from(self.month).ok()
    }

    /// Renders the date the way the calendar header shows it,
    /// e.g. `"1 رمضان 1445"`.
    pub fn to_arabic_string(self) -> String {
        match self.hijri_month() {
            Some(month) => format!("{} {} {}", self.day, month.arabic_name(), self.year),
            None => format!("{} {} {}", self.day, self.month, self.year),
        }
    }

    /// Same as [`HijriDate::to_arabic_string`] with the English month name.
    pub fn to_english_string(self) -> String {
        match self.hijri_month() {
            Some(month) => format!("{} {} {}", self.day, month.english_name(), self.year),
            None => format!("{} {} {}", self.day, self.month, self.year),
        }
    }
}

impl fmt::Display for HijriDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for HijriDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month, day) = parse_ymd(s, false)?;
        Ok(Self::new(year, month, day)?)
    }
}

macro_rules! serde_via_string {
    ($ty:ty) => {
        impl serde::Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(&self.to_string())
            }
        }

        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = <String as serde::Deserialize>::deserialize(deserializer)?;
                s.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

serde_via_string!(GregorianDate);
serde_via_string!(HijriDate);

/// The twelve months of the Hijri year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[repr(u8)]
pub enum HijriMonth {
    #[display(fmt = "Muharram")]
    Muharram = 1,
    #[display(fmt = "Safar")]
    Safar,
    #[display(fmt = "Rabi al-Awwal")]
    RabiAlAwwal,
    #[display(fmt = "Rabi al-Thani")]
    RabiAlThani,
    #[display(fmt = "Jumada al-Ula")]
    JumadaAlUla,
    #[display(fmt = "Jumada al-Akhirah")]
    JumadaAlAkhirah,
    #[display(fmt = "Rajab")]
    Rajab,
    #[display(fmt = "Shaban")]
    Shaban,
    #[display(fmt = "Ramadan")]
    Ramadan,
    #[display(fmt = "Shawwal")]
    Shawwal,
    #[display(fmt = "Dhu al-Qadah")]
    DhuAlQadah,
    #[display(fmt = "Dhu al-Hijjah")]
    DhuAlHijjah,
}

impl HijriMonth {
    pub const ALL: [Self; 12] = [
        Self::Muharram,
        Self::Safar,
        Self::RabiAlAwwal,
        Self::RabiAlThani,
        Self::JumadaAlUla,
        Self::JumadaAlAkhirah,
        Self::Rajab,
        Self::Shaban,
        Self::Ramadan,
        Self::Shawwal,
        Self::DhuAlQadah,
        Self::DhuAlHijjah,
    ];

    /// Month number, 1-12
    #[inline]
    pub const fn number(self) -> u8 {
        self as u8
    }

    #[inline]
    const fn index(self) -> usize {
        self as usize - 1
    }

    pub const fn arabic_name(self) -> &'static str {
        HIJRI_MONTHS_AR[self.index()]
    }

    pub const fn english_name(self) -> &'static str {
        HIJRI_MONTHS_EN[self.index()]
    }

    /// The 30/29 alternation without the leap-year day.
    pub const fn nominal_days(self) -> u8 {
        if self.number() % 2 == 1 {
            LONG_MONTH_DAYS
        } else {
            SHORT_MONTH_DAYS
        }
    }

    /// Longest this month gets in any year.
    pub const fn max_days(self) -> u8 {
        match self {
            Self::DhuAlHijjah => LONG_MONTH_DAYS,
            _ => self.nominal_days(),
        }
    }

    /// Length of this month in the given tabular year.
    pub const fn days_in(self, year: i32) -> u8 {
        hijri_days_in_month(year, self.number())
    }

    /// The following month, wrapping Dhu al-Hijjah to Muharram.
    pub const fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// The preceding month, wrapping Muharram to Dhu al-Hijjah.
    pub const fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl TryFrom<u8> for HijriMonth {
    type Error = InvalidDateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (1..=MONTHS_PER_YEAR).contains(&value) {
            Ok(Self::ALL[usize::from(value) - 1])
        } else {
            Err(InvalidDateError::InvalidMonth { month: value })
        }
    }
}

impl From<HijriMonth> for u8 {
    fn from(month: HijriMonth) -> Self {
        month.number()
    }
}

/// Arabic month name for a month number, `None` outside 1-12.
pub fn month_name(month: u8) -> Option<&'static str> {
    HijriMonth::try_from(month).ok().map(HijriMonth::arabic_name)
}

// Helper functions

pub const fn is_gregorian_leap_year(year: i32) -> bool {
    (year.rem_euclid(LEAP_YEAR_CYCLE) == 0 && year.rem_euclid(CENTURY_CYCLE) != 0)
        || year.rem_euclid(GREGORIAN_CYCLE) == 0
}

/// Days in a Gregorian month. Months outside 1-12 have no days.
pub const fn gregorian_days_in_month(year: i32, month: u8) -> u8 {
    match month {
        FEBRUARY if is_gregorian_leap_year(year) => FEBRUARY_DAYS_LEAP,
        1..=MONTHS_PER_YEAR => GREGORIAN_DAYS_IN_MONTH[month as usize],
        _ => 0,
    }
}

/// Whether a Hijri year is one of the 11 leap years of its 30-year cycle.
pub const fn is_hijri_leap_year(year: i32) -> bool {
    (CYCLE_LEAP_OFFSET + CYCLE_LEAP_YEARS * year).rem_euclid(CYCLE_YEARS) < CYCLE_LEAP_YEARS
}

pub const fn hijri_days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MONTHS_PER_YEAR);

    if month % 2 == 1 || (month == DHU_AL_HIJJAH && is_hijri_leap_year(year)) {
        LONG_MONTH_DAYS
    } else {
        SHORT_MONTH_DAYS
    }
}

pub const fn hijri_days_in_year(year: i32) -> u16 {
    if is_hijri_leap_year(year) {
        LEAP_YEAR_DAYS
    } else {
        COMMON_YEAR_DAYS
    }
}

/// Splits `YYYY-MM-DD` into numeric components. With `signed_year`, a leading
/// `-` marks a negative (astronomical) year.
fn parse_ymd(s: &str, signed_year: bool) -> Result<(i32, u8, u8), ParseError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let (negative, body) = match trimmed.strip_prefix(DATE_SEPARATOR) {
        Some(rest) if signed_year => (true, rest),
        Some(_) => return Err(ParseError::InvalidFormat(trimmed.to_owned())),
        None => (false, trimmed),
    };

    let parts: Vec<&str> = body.split(DATE_SEPARATOR).map(str::trim).collect();
    let [year, month, day] = parts.as_slice() else {
        return Err(ParseError::InvalidFormat(format!(
            "Expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {} component(s): {trimmed}",
            parts.len()
        )));
    };

    let year = year
        .parse::<i32>()
        .map_err(|_| ParseError::InvalidFormat((*year).to_owned()))?;
    let month = month
        .parse::<u8>()
        .map_err(|_| ParseError::InvalidFormat((*month).to_owned()))?;
    let day = day
        .parse::<u8>()
        .map_err(|_| ParseError::InvalidFormat((*day).to_owned()))?;

    Ok((if negative { -year } else { year }, month, day))
}
