//! Julian Day pivot shared by both calendars.
//!
//! Integral values are noon-referenced day numbers as produced by
//! [`gregorian_to_jdn`]; `x.5` values are civil midnights as produced by
//! [`hijri_to_jd`]. Every division is a floor division, including for
//! negative operands.

use crate::consts::HIJRI_EPOCH;
use crate::prelude::*;
use crate::{GregorianDate, HijriDate};

/// A point on the continuous Julian Day count.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Display, From, Into)]
#[display(fmt = "JD {_0}")]
pub(crate) struct JulianDay(f64);

impl JulianDay {
    #[inline]
    pub(crate) const fn value(self) -> f64 {
        self.0
    }

    /// The civil midnight that opens the day this value falls on.
    #[inline]
    pub(crate) fn civil_midnight(self) -> Self {
        Self((self.0 + 0.5).floor() - 0.5)
    }
}

/// Gregorian date to Julian Day Number (civil-calendar algorithm).
///
/// Components are not range-checked; out-of-range months and days spill into
/// neighbouring months the same way the arithmetic does.
pub(crate) fn gregorian_to_jdn(date: GregorianDate) -> i64 {
    let year = i64::from(date.year());
    let month = i64::from(date.month());
    let day = i64::from(date.day());

    let a = (14 - month).div_euclid(12);
    let y = year + 4800 - a;
    let m = month + 12 * a - 3;

    day + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        - 32045
}

/// Julian Day to tabular Hijri date (Kuwaiti algorithm, epoch JD 1948439.5).
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn jd_to_hijri(jd: JulianDay) -> HijriDate {
    let l = (jd.value() - HIJRI_EPOCH + 0.5).floor() + 10632.0;
    let n = ((l - 1.0) / 10631.0).floor();
    let l2 = l - 10631.0 * n + 354.0;
    let j = ((10985.0 - l2) / 5316.0).floor() * ((50.0 * l2) / 17719.0).floor()
        + (l2 / 5670.0).floor() * ((43.0 * l2) / 15238.0).floor();
    let l3 = l2
        - ((30.0 - j) / 15.0).floor() * ((17719.0 * j) / 50.0).floor()
        - (j / 16.0).floor() * ((15238.0 * j) / 43.0).floor()
        + 29.0;
    let month = ((24.0 * l3) / 709.0).floor();
    let day = l3 - ((709.0 * month) / 24.0).floor();
    let year = 30.0 * n + j - 30.0;

    HijriDate::new_unchecked(year as i32, month as u8, day as u8)
}

/// Tabular Hijri date to the Julian Day of its civil midnight.
pub(crate) fn hijri_to_jd(date: HijriDate) -> JulianDay {
    let year = f64::from(date.year());
    let month = f64::from(date.month());
    let day = f64::from(date.day());

    JulianDay(
        day + (29.5 * (month - 1.0)).ceil()
            + (year - 1.0) * 354.0
            + ((3.0 + 11.0 * year) / 30.0).floor()
            + HIJRI_EPOCH
            - 1.0,
    )
}

/// Julian Day to proleptic Gregorian date. `x.5` values round up to the day
/// that starts at that midnight.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn jd_to_gregorian(jd: JulianDay) -> GregorianDate {
    let z = (jd.value() + 0.5).floor();
    let a = ((z - 1_867_216.25) / 36_524.25).floor();
    let aa = z + 1.0 + a - (a / 4.0).floor();
    let b = aa + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor();
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

    GregorianDate::new_unchecked(year as i32, month as u8, day as u8)
}
