/// Julian Date of the civil midnight that opens 1 Muharram 1 AH
/// (16 July 622, Julian calendar)
pub const HIJRI_EPOCH: f64 = 1_948_439.5;

/// Number of months in both calendars
pub const MONTHS_PER_YEAR: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Length of an odd-numbered ("full") Hijri month
pub const LONG_MONTH_DAYS: u8 = 30;
/// Length of an even-numbered ("hollow") Hijri month
pub const SHORT_MONTH_DAYS: u8 = 29;

/// Days in a common tabular Hijri year
pub const COMMON_YEAR_DAYS: u16 = 354;
/// Days in a leap tabular Hijri year (Dhu al-Hijjah gains a day)
pub const LEAP_YEAR_DAYS: u16 = 355;

/// Years in one tabular intercalation cycle
pub(crate) const CYCLE_YEARS: i32 = 30;
/// Leap years per intercalation cycle
pub(crate) const CYCLE_LEAP_YEARS: i32 = 11;
/// Offset placing the leap years at 2, 5, 7, 10, 13, 16, 18, 21, 24, 26, 29
pub(crate) const CYCLE_LEAP_OFFSET: i32 = 14;

/// Month number for Dhu al-Hijjah
pub const DHU_AL_HIJJAH: u8 = 12;

/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each Gregorian month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const GREGORIAN_DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_gregorian_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Hijri month names in Arabic (index 0 = Muharram)
pub const HIJRI_MONTHS_AR: [&str; 12] = [
    "محرم",
    "صفر",
    "ربيع الأول",
    "ربيع الثاني",
    "جمادى الأولى",
    "جمادى الآخرة",
    "رجب",
    "شعبان",
    "رمضان",
    "شوال",
    "ذو القعدة",
    "ذو الحجة",
];

/// Hijri month names transliterated to English (index 0 = Muharram)
pub const HIJRI_MONTHS_EN: [&str; 12] = [
    "Muharram",
    "Safar",
    "Rabi al-Awwal",
    "Rabi al-Thani",
    "Jumada al-Ula",
    "Jumada al-Akhirah",
    "Rajab",
    "Shaban",
    "Ramadan",
    "Shawwal",
    "Dhu al-Qadah",
    "Dhu al-Hijjah",
];

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
