//! Regional formatting of the header clock

use std::fmt;
use std::str::FromStr;

use chrono::Timelike;

use crate::domain::DashboardError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClockLocale {
    /// 12-hour, Arabic-Indic digits, `ص`/`م` day period.
    #[default]
    ArSa,
    /// 12-hour with `AM`/`PM`.
    EnUs,
    /// 24-hour.
    EnGb,
}

impl ClockLocale {
    pub fn tag(&self) -> &'static str {
        match self {
            ClockLocale::ArSa => "ar-SA",
            ClockLocale::EnUs => "en-US",
            ClockLocale::EnGb => "en-GB",
        }
    }
}

impl fmt::Display for ClockLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for ClockLocale {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "ar-sa" | "ar" => Ok(ClockLocale::ArSa),
            "en-us" | "en" => Ok(ClockLocale::EnUs),
            "en-gb" | "24h" => Ok(ClockLocale::EnGb),
            _ => Err(DashboardError::UnknownLocale(s.trim().to_string())),
        }
    }
}

const ARABIC_INDIC_DIGITS: [char; 10] = ['٠', '١', '٢', '٣', '٤', '٥', '٦', '٧', '٨', '٩'];

fn to_arabic_digits(value: &str) -> String {
    value
        .chars()
        .map(|ch| match ch.to_digit(10) {
            Some(digit) => ARABIC_INDIC_DIGITS[digit as usize],
            None => ch,
        })
        .collect()
}

/// Format a wall-clock time of day for the given locale.
pub fn format_clock<T: Timelike>(time: &T, locale: ClockLocale) -> String {
    let (pm, hour12) = time.hour12();
    let (minute, second) = (time.minute(), time.second());
    match locale {
        ClockLocale::ArSa => {
            let period = if pm { "م" } else { "ص" };
            let digits = format!("{hour12}:{minute:02}:{second:02}");
            format!("{} {period}", to_arabic_digits(&digits))
        }
        ClockLocale::EnUs => {
            let period = if pm { "PM" } else { "AM" };
            format!("{hour12}:{minute:02}:{second:02} {period}")
        }
        ClockLocale::EnGb => format!("{:02}:{minute:02}:{second:02}", time.hour()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn at(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    #[test]
    fn test_arabic_clock() {
        assert_eq!(format_clock(&at(22, 5, 9), ClockLocale::ArSa), "١٠:٠٥:٠٩ م");
        assert_eq!(format_clock(&at(9, 30, 0), ClockLocale::ArSa), "٩:٣٠:٠٠ ص");
    }

    #[test]
    fn test_us_clock() {
        assert_eq!(format_clock(&at(22, 5, 9), ClockLocale::EnUs), "10:05:09 PM");
        assert_eq!(format_clock(&at(0, 0, 1), ClockLocale::EnUs), "12:00:01 AM");
    }

    #[test]
    fn test_gb_clock() {
        assert_eq!(format_clock(&at(7, 5, 9), ClockLocale::EnGb), "07:05:09");
    }

    #[test]
    fn test_parse_locale() {
        assert_eq!("ar_SA".parse::<ClockLocale>().unwrap(), ClockLocale::ArSa);
        assert_eq!("EN-gb".parse::<ClockLocale>().unwrap(), ClockLocale::EnGb);
        assert!(matches!(
            "fr-FR".parse::<ClockLocale>(),
            Err(DashboardError::UnknownLocale(_))
        ));
    }
}
