use crate::convert::hijri_to_gregorian;
use crate::events::{IslamicEvent, event_on};
use crate::prelude::*;
use crate::types::hijri_days_in_month;
use crate::{GregorianDate, HijriDate, HijriMonth, InvalidDateError};
use serde::Serialize;

/// A month of a specific Hijri year, the unit the calendar page pages through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}", "year", "month.number()")]
pub struct HijriYearMonth {
    year:  i32,
    month: HijriMonth,
}

impl HijriYearMonth {
    /// # Errors
    /// Returns `InvalidDateError::InvalidYear` before 1 AH and
    /// `InvalidDateError::InvalidMonth` outside 1-12.
    pub fn new(year: i32, month: u8) -> Result<Self, InvalidDateError> {
        if year < 1 {
            return Err(InvalidDateError::InvalidYear { year });
        }
        Ok(Self {
            year,
            month: HijriMonth::try_from(month)?,
        })
    }

    /// The month a date falls in.
    ///
    /// # Errors
    /// Returns an error if the date's year or month is out of range.
    pub fn of(date: HijriDate) -> Result<Self, InvalidDateError> {
        Self::new(date.year(), date.month())
    }

    #[inline]
    pub const fn year(self) -> i32 {
        self.year
    }

    #[inline]
    pub const fn month(self) -> HijriMonth {
        self.month
    }

    /// The following month; Dhu al-Hijjah rolls into Muharram of the next year.
    #[must_use]
    pub const fn next(self) -> Self {
        let year = match self.month {
            HijriMonth::DhuAlHijjah => self.year + 1,
            _ => self.year,
        };
        Self {
            year,
            month: self.month.next(),
        }
    }

    /// The preceding month; Muharram rolls back into Dhu al-Hijjah of the
    /// previous year.
    #[must_use]
    pub const fn previous(self) -> Self {
        let year = match self.month {
            HijriMonth::Muharram => self.year - 1,
            _ => self.year,
        };
        Self {
            year,
            month: self.month.previous(),
        }
    }

    /// Number of days in this month.
    pub const fn days(self) -> u8 {
        hijri_days_in_month(self.year, self.month.number())
    }

    /// Every date of the month in order.
    pub fn dates(self) -> impl Iterator<Item = HijriDate> {
        (1..=self.days()).map(move |day| HijriDate::new_unchecked(self.year, self.month.number(), day))
    }
}

impl serde::Serialize for HijriYearMonth {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// One cell of the month view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridDay {
    pub hijri:     HijriDate,
    pub gregorian: GregorianDate,
    pub event:     Option<&'static IslamicEvent>,
    pub is_today:  bool,
}

/// The days of a Hijri month with their Gregorian equivalents and events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    pub year_month: HijriYearMonth,
    pub days:       Vec<GridDay>,
}

impl MonthGrid {
    /// Lays out `year_month`, marking the cell equal to `today`.
    pub fn build(year_month: HijriYearMonth, today: HijriDate) -> Self {
        let days = year_month
            .dates()
            .map(|hijri| GridDay {
                hijri,
                gregorian: hijri_to_gregorian(hijri),
                event: event_on(hijri.month(), hijri.day()),
                is_today: hijri == today,
            })
            .collect();
        Self { year_month, days }
    }

    /// The cell for today, if today falls in this month.
    pub fn today(&self) -> Option<&GridDay> {
        self.days.iter().find(|d| d.is_today)
    }

    /// Cells carrying an observance.
    pub fn event_days(&self) -> impl Iterator<Item = &GridDay> {
        self.days.iter().filter(|d| d.event.is_some())
    }

    /// First and last Gregorian day covered by the month.
    pub fn gregorian_span(&self) -> Option<(GregorianDate, GregorianDate)> {
        Some((self.days.first()?.gregorian, self.days.last()?.gregorian))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ym(year: i32, month: u8) -> HijriYearMonth {
        HijriYearMonth::new(year, month).unwrap()
    }

    #[test]
    fn test_new_validates() {
        assert!(HijriYearMonth::new(1445, 9).is_ok());
        assert!(matches!(
            HijriYearMonth::new(0, 1),
            Err(InvalidDateError::InvalidYear { year: 0 })
        ));
        assert!(matches!(
            HijriYearMonth::new(1445, 13),
            Err(InvalidDateError::InvalidMonth { month: 13 })
        ));
    }

    #[test]
    fn test_navigation_rolls_years() {
        assert_eq!(ym(1445, 12).next(), ym(1446, 1));
        assert_eq!(ym(1446, 1).previous(), ym(1445, 12));
        assert_eq!(ym(1445, 8).next(), ym(1445, 9));
        assert_eq!(ym(1445, 9).previous(), ym(1445, 8));
        assert_eq!(ym(1445, 5).next().previous(), ym(1445, 5));
    }

    #[test]
    fn test_display_and_serialize() {
        let month = ym(1445, 9);
        assert_eq!(month.to_string(), "1445-09");
        assert_eq!(serde_json::to_string(&month).unwrap(), r#""1445-09""#);
    }

    #[test]
    fn test_days() {
        assert_eq!(ym(1445, 9).days(), 30);
        assert_eq!(ym(1445, 8).days(), 29);
        assert_eq!(ym(1445, 12).days(), 30);
        assert_eq!(ym(1446, 12).days(), 29);
        assert_eq!(ym(1445, 1).dates().count(), 30);
    }

    #[test]
    fn test_grid_ramadan_1445() {
        let today = HijriDate::new(1445, 9, 10).unwrap();
        let grid = MonthGrid::build(ym(1445, 9), today);

        assert_eq!(grid.days.len(), 30);
        assert_eq!(
            grid.gregorian_span(),
            Some((
                GregorianDate::new(2024, 3, 11).unwrap(),
                GregorianDate::new(2024, 4, 9).unwrap()
            ))
        );

        let today_cell = grid.today().unwrap();
        assert_eq!(today_cell.hijri, today);
        assert_eq!(today_cell.gregorian, GregorianDate::new(2024, 3, 20).unwrap());

        let event_days: Vec<u8> = grid.event_days().map(|d| d.hijri.day()).collect();
        assert_eq!(event_days, vec![1, 27]);
    }

    #[test]
    fn test_grid_gregorian_days_are_consecutive() {
        let grid = MonthGrid::build(ym(1446, 12), HijriDate::new(1446, 1, 1).unwrap());
        assert!(grid.today().is_none());
        for pair in grid.days.windows(2) {
            assert_eq!(
                crate::convert::days_between(pair[0].gregorian, pair[1].gregorian),
                1
            );
        }
        // The day after the last cell opens the next month
        let next = MonthGrid::build(grid.year_month.next(), HijriDate::new(1446, 1, 1).unwrap());
        let (_, last) = grid.gregorian_span().unwrap();
        let (first, _) = next.gregorian_span().unwrap();
        assert_eq!(crate::convert::days_between(last, first), 1);
    }
}
