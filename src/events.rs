//! Recurring Islamic observances and countdowns to them.

use crate::convert::{Alignment, days_between, gregorian_to_hijri_aligned, hijri_to_gregorian};
use crate::prelude::*;
use crate::{GregorianDate, HijriDate};
use serde::{Deserialize, Serialize};

/// Kind of observance, used by the UI for badges and colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventCategory {
    #[display(fmt = "holiday")]
    Holiday,
    #[display(fmt = "blessed")]
    Blessed,
    #[display(fmt = "fasting")]
    Fasting,
}

impl EventCategory {
    /// Badge label shown next to the event.
    pub const fn arabic_label(self) -> &'static str {
        match self {
            Self::Holiday => "عيد",
            Self::Blessed => "مبارك",
            Self::Fasting => "صيام",
        }
    }
}

/// An observance that recurs every Hijri year on the same month and day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct IslamicEvent {
    pub name:         &'static str,
    pub english_name: &'static str,
    pub hijri_month:  u8,
    pub hijri_day:    u8,
    pub category:     EventCategory,
}

impl IslamicEvent {
    const fn new(
        name: &'static str,
        english_name: &'static str,
        hijri_month: u8,
        hijri_day: u8,
        category: EventCategory,
    ) -> Self {
        Self {
            name,
            english_name,
            hijri_month,
            hijri_day,
            category,
        }
    }
}

/// The observances shown by the calendar, in Hijri-year order.
pub static ISLAMIC_EVENTS: [IslamicEvent; 10] = [
    IslamicEvent::new("رأس السنة الهجرية", "Islamic New Year", 1, 1, EventCategory::Holiday),
    IslamicEvent::new("يوم عاشوراء", "Ashura", 1, 10, EventCategory::Fasting),
    IslamicEvent::new("المولد النبوي", "Mawlid", 3, 12, EventCategory::Blessed),
    IslamicEvent::new("الإسراء والمعراج", "Isra and Miraj", 7, 27, EventCategory::Blessed),
    IslamicEvent::new("ليلة النصف من شعبان", "Mid-Shaban", 8, 15, EventCategory::Blessed),
    IslamicEvent::new("أول رمضان", "First of Ramadan", 9, 1, EventCategory::Fasting),
    IslamicEvent::new("ليلة القدر (27)", "Laylat al-Qadr", 9, 27, EventCategory::Blessed),
    IslamicEvent::new("عيد الفطر", "Eid al-Fitr", 10, 1, EventCategory::Holiday),
    IslamicEvent::new("يوم عرفة", "Day of Arafah", 12, 9, EventCategory::Blessed),
    IslamicEvent::new("عيد الأضحى", "Eid al-Adha", 12, 10, EventCategory::Holiday),
];

/// The event falling on a Hijri month/day, if any.
pub fn event_on(hijri_month: u8, hijri_day: u8) -> Option<&'static IslamicEvent> {
    ISLAMIC_EVENTS
        .iter()
        .find(|e| e.hijri_month == hijri_month && e.hijri_day == hijri_day)
}

/// All events in a Hijri month.
pub fn events_in_month(hijri_month: u8) -> impl Iterator<Item = &'static IslamicEvent> {
    ISLAMIC_EVENTS
        .iter()
        .filter(move |e| e.hijri_month == hijri_month)
}

/// The next (or current) Gregorian day on which a Hijri month/day falls,
/// counting from `today`.
pub fn next_occurrence(
    hijri_month: u8,
    hijri_day: u8,
    today: GregorianDate,
    alignment: Alignment,
) -> GregorianDate {
    let year = gregorian_to_hijri_aligned(today, alignment).year();
    let target = hijri_to_gregorian(HijriDate::new_unchecked(year, hijri_month, hijri_day));
    // Unchecked dates only order correctly by day number
    if days_between(today, target) >= 0 {
        return target;
    }

    let rolled = hijri_to_gregorian(HijriDate::new_unchecked(year + 1, hijri_month, hijri_day));
    tracing::debug!(
        hijri_month,
        hijri_day,
        passed = %target,
        next = %rolled,
        "occurrence already passed this year, using next Hijri year"
    );
    rolled
}

/// Days from `today` until the next occurrence of a Hijri month/day.
/// An occurrence on `today` itself counts as zero.
pub fn days_until_hijri_date(hijri_month: u8, hijri_day: u8, today: GregorianDate) -> u32 {
    days_until_hijri_date_aligned(hijri_month, hijri_day, today, Alignment::Civil)
}

/// [`days_until_hijri_date`] with an explicit [`Alignment`].
pub fn days_until_hijri_date_aligned(
    hijri_month: u8,
    hijri_day: u8,
    today: GregorianDate,
    alignment: Alignment,
) -> u32 {
    let target = next_occurrence(hijri_month, hijri_day, today, alignment);
    u32::try_from(days_between(today, target).max(0)).unwrap_or(u32::MAX)
}

/// An event paired with how far away it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UpcomingEvent {
    pub event:          &'static IslamicEvent,
    pub date:           GregorianDate,
    pub days_remaining: u32,
}

/// The `limit` nearest events from `today`, soonest first. Ties keep table
/// order.
pub fn upcoming_events(today: GregorianDate, limit: usize, alignment: Alignment) -> Vec<UpcomingEvent> {
    let mut upcoming: Vec<UpcomingEvent> = ISLAMIC_EVENTS
        .iter()
        .map(|event| {
            let date = next_occurrence(event.hijri_month, event.hijri_day, today, alignment);
            UpcomingEvent {
                event,
                date,
                days_remaining: u32::try_from(days_between(today, date).max(0))
                    .unwrap_or(u32::MAX),
            }
        })
        .collect();

    upcoming.sort_by_key(|u| u.days_remaining);
    upcoming.truncate(limit);
    upcoming
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::hijri_days_in_month;

    fn greg(year: i32, month: u8, day: u8) -> GregorianDate {
        GregorianDate::new(year, month, day).unwrap()
    }

    #[test]
    fn test_event_table_integrity() {
        for event in &ISLAMIC_EVENTS {
            assert!(
                (1..=12).contains(&event.hijri_month),
                "{} has month {}",
                event.english_name,
                event.hijri_month
            );
            // Valid in every year, not only leap years
            let max = if event.hijri_month % 2 == 1 { 30 } else { 29 };
            assert!(
                (1..=max).contains(&event.hijri_day),
                "{} has day {}",
                event.english_name,
                event.hijri_day
            );
            assert!(event.hijri_day <= hijri_days_in_month(1446, event.hijri_month));
        }
    }

    #[test]
    fn test_event_table_is_in_year_order() {
        let keys: Vec<(u8, u8)> = ISLAMIC_EVENTS
            .iter()
            .map(|e| (e.hijri_month, e.hijri_day))
            .collect();
        let mut sorted = keys.clone();
        sorted.sort_unstable();
        assert_eq!(keys, sorted);
    }

    #[test]
    fn test_event_on() {
        assert_eq!(event_on(10, 1).map(|e| e.english_name), Some("Eid al-Fitr"));
        assert_eq!(event_on(12, 10).map(|e| e.category), Some(EventCategory::Holiday));
        assert!(event_on(2, 1).is_none());
    }

    #[test]
    fn test_events_in_month() {
        let ramadan: Vec<u8> = events_in_month(9).map(|e| e.hijri_day).collect();
        assert_eq!(ramadan, vec![1, 27]);
        assert_eq!(events_in_month(2).count(), 0);
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(EventCategory::Holiday.arabic_label(), "عيد");
        assert_eq!(EventCategory::Blessed.arabic_label(), "مبارك");
        assert_eq!(EventCategory::Fasting.arabic_label(), "صيام");
        assert_eq!(EventCategory::Fasting.to_string(), "fasting");
    }

    #[test]
    fn test_days_until_on_the_day_is_zero() {
        // 1 Ramadan 1445 = 2024-03-11
        assert_eq!(days_until_hijri_date(9, 1, greg(2024, 3, 11)), 0);
    }

    #[test]
    fn test_days_until_counts_down_then_wraps() {
        let countdown: Vec<u32> = (0..9)
            .map(|offset| {
                let today = GregorianDate::new(2024, 3, 5 + offset).unwrap();
                days_until_hijri_date(9, 1, today)
            })
            .collect();
        assert_eq!(countdown, vec![6, 5, 4, 3, 2, 1, 0, 354, 353]);
    }

    #[test]
    fn test_days_until_from_reference_date() {
        let today = greg(2026, 10, 16);
        assert_eq!(days_until_hijri_date(9, 1, today), 115);
        assert_eq!(days_until_hijri_date(12, 10, today), 213);
        assert_eq!(days_until_hijri_date(1, 1, today), 233);
    }

    #[test]
    fn test_next_occurrence_crosses_hijri_year() {
        // 29 Dhu al-Hijjah 1446 = 2025-06-26, the day before 1 Muharram 1447
        let today = greg(2025, 6, 26);
        assert_eq!(
            next_occurrence(1, 1, today, Alignment::Civil),
            greg(2025, 6, 27)
        );
        assert_eq!(days_until_hijri_date(1, 1, today), 1);
    }

    #[test]
    fn test_days_until_from_spilled_today() {
        // 2024-01-35 is 2024-02-04, three days after 21 Rajab 1445
        let spilled = GregorianDate::new_unchecked(2024, 1, 35);
        let normalized = greg(2024, 2, 4);
        assert_eq!(days_until_hijri_date(7, 21, normalized), 352);
        assert_eq!(days_until_hijri_date(7, 21, spilled), 352);
        assert_eq!(
            next_occurrence(7, 21, spilled, Alignment::Civil),
            next_occurrence(7, 21, normalized, Alignment::Civil)
        );
    }

    #[test]
    fn test_legacy_alignment_is_never_negative() {
        for day in 1..=31 {
            let today = greg(2024, 3, day);
            let days = days_until_hijri_date_aligned(9, 1, today, Alignment::Legacy);
            assert!(days <= 355, "{today}: {days}");
        }
    }

    #[test]
    fn test_upcoming_events_sorted_and_limited() {
        let today = greg(2026, 10, 16);
        let upcoming = upcoming_events(today, 5, Alignment::Civil);
        assert_eq!(upcoming.len(), 5);

        let days: Vec<u32> = upcoming.iter().map(|u| u.days_remaining).collect();
        let mut sorted = days.clone();
        sorted.sort_unstable();
        assert_eq!(days, sorted);

        for u in &upcoming {
            assert_eq!(days_between(today, u.date), i64::from(u.days_remaining));
        }
        assert_eq!(upcoming[0].days_remaining, days.iter().copied().min().unwrap());
    }

    #[test]
    fn test_upcoming_events_without_limit_covers_table() {
        let upcoming = upcoming_events(greg(2024, 3, 11), usize::MAX, Alignment::Civil);
        assert_eq!(upcoming.len(), ISLAMIC_EVENTS.len());
        assert_eq!(upcoming[0].event.english_name, "First of Ramadan");
        assert_eq!(upcoming[0].days_remaining, 0);
    }

    #[test]
    fn test_upcoming_event_serializes() {
        let upcoming = upcoming_events(greg(2024, 3, 11), 1, Alignment::Civil);
        let json = serde_json::to_value(&upcoming[0]).unwrap();
        assert_eq!(json["event"]["hijri_month"], 9);
        assert_eq!(json["event"]["category"], "fasting");
        assert_eq!(json["date"], "2024-03-11");
        assert_eq!(json["days_remaining"], 0);
    }
}
