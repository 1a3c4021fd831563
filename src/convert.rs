//! Gregorian ⇄ Hijri conversion through the Julian Day pivot.

use crate::julian::{JulianDay, gregorian_to_jdn, hijri_to_jd, jd_to_gregorian, jd_to_hijri};
use crate::prelude::*;
use crate::{GregorianDate, HijriDate};
use serde::{Deserialize, Serialize};

/// How a Gregorian date is placed on the Julian Day axis before the Hijri
/// formula reads it.
///
/// The Hijri epoch (JD 1948439.5) and [`hijri_to_gregorian`] work in civil
/// midnights, while the Gregorian day number is noon-referenced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Use the midnight that opens the Gregorian day. Forward and inverse
    /// conversions are exact inverses and match published tabular tables.
    #[default]
    #[display(fmt = "civil")]
    Civil,
    /// Feed the noon day number straight in. Reproduces the historic output,
    /// one day ahead of [`Alignment::Civil`].
    #[display(fmt = "legacy")]
    Legacy,
}

impl Alignment {
    fn pivot(self, date: GregorianDate) -> JulianDay {
        // day numbers stay far inside f64's exact integer range
        #[allow(clippy::cast_precision_loss)]
        let jdn = JulianDay::from(gregorian_to_jdn(date) as f64);
        match self {
            Self::Civil => jdn.civil_midnight(),
            Self::Legacy => jdn,
        }
    }
}

/// Hijri date of a Gregorian day.
pub fn gregorian_to_hijri(date: GregorianDate) -> HijriDate {
    gregorian_to_hijri_aligned(date, Alignment::Civil)
}

/// [`gregorian_to_hijri`] with an explicit [`Alignment`].
pub fn gregorian_to_hijri_aligned(date: GregorianDate, alignment: Alignment) -> HijriDate {
    let hijri = jd_to_hijri(alignment.pivot(date));
    tracing::trace!(gregorian = %date, hijri = %hijri, %alignment, "gregorian to hijri");
    hijri
}

/// Gregorian day on which a Hijri date falls.
pub fn hijri_to_gregorian(date: HijriDate) -> GregorianDate {
    let jd = hijri_to_jd(date);
    let gregorian = jd_to_gregorian(jd);
    tracing::trace!(hijri = %date, %jd, gregorian = %gregorian, "hijri to gregorian");
    gregorian
}

/// Signed number of days from `from` to `to`.
pub fn days_between(from: GregorianDate, to: GregorianDate) -> i64 {
    gregorian_to_jdn(to) - gregorian_to_jdn(from)
}
