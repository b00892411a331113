// src/dates.rs
use anyhow::{Context, Result};
use chrono::{Duration, Local, NaiveDate, Utc};
use chrono_tz::Tz;
use tracing::debug;

/// Where "today" comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum Clock {
    Fixed(NaiveDate),
    Zone(Tz),
    Local,
}

pub fn resolve_today(clock: &Clock) -> NaiveDate {
    match clock {
        Clock::Fixed(d) => *d,
        Clock::Zone(tz) => {
            let now = Utc::now().with_timezone(tz);
            debug!("Using {} clock - current_time={}", tz.name(), now.format("%Y-%m-%d %H:%M:%S %Z"));
            now.date_naive()
        }
        Clock::Local => Local::now().date_naive(),
    }
}

/// The `days` most recent dates up to and including `today`, oldest first.
///
/// Errors when the earliest date would fall outside chrono's calendar.
pub fn date_range(today: NaiveDate, days: u32) -> Result<Vec<NaiveDate>> {
    if days == 0 {
        return Ok(Vec::new());
    }
    let first = today
        .checked_sub_signed(Duration::days(i64::from(days) - 1))
        .with_context(|| format!("{} days back from {} is outside the supported date range", days, today))?;
    Ok(first.iter_days().take(days as usize).collect())
}

pub fn iso(d: NaiveDate) -> String {
    d.format("%Y-%m-%d").to_string()
}

pub fn parse_iso(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").with_context(|| format!("invalid date {:?} (expected YYYY-MM-DD)", s))
}

pub fn parse_zone(s: &str) -> Result<Tz> {
    s.trim()
        .parse::<Tz>()
        .map_err(|e| anyhow::anyhow!("invalid timezone {:?}: {}", s, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn three_days_ending_on_fixed_date() {
        let got: Vec<String> = date_range(ymd(2024, 6, 10), 3).unwrap().into_iter().map(iso).collect();
        assert_eq!(got, vec!["2024-06-08", "2024-06-09", "2024-06-10"]);
    }

    #[test]
    fn range_crosses_month_and_leap_day() {
        let got: Vec<String> = date_range(ymd(2024, 3, 1), 3).unwrap().into_iter().map(iso).collect();
        assert_eq!(got, vec!["2024-02-28", "2024-02-29", "2024-03-01"]);
    }

    #[test]
    fn range_length_and_order() {
        let r = date_range(ymd(2025, 1, 2), 7).unwrap();
        assert_eq!(r.len(), 7);
        assert!(r.windows(2).all(|w| w[1] - w[0] == Duration::days(1)));
        assert_eq!(*r.last().unwrap(), ymd(2025, 1, 2));
        assert!(date_range(ymd(2025, 1, 2), 0).unwrap().is_empty());
    }

    #[test]
    fn oversized_range_is_an_error() {
        let err = date_range(ymd(2024, 6, 10), 100_000_000).unwrap_err();
        assert!(err.to_string().contains("100000000 days"), "{}", err);
        assert!(date_range(ymd(2024, 6, 10), u32::MAX).is_err());
    }

    #[test]
    fn fixed_clock_is_returned_verbatim() {
        assert_eq!(resolve_today(&Clock::Fixed(ymd(2024, 6, 10))), ymd(2024, 6, 10));
    }

    #[test]
    fn parse_helpers() {
        assert_eq!(parse_iso("2024-06-10").unwrap(), ymd(2024, 6, 10));
        assert!(parse_iso("06/10/2024").is_err());
        assert_eq!(parse_zone("America/New_York").unwrap(), chrono_tz::America::New_York);
        assert!(parse_zone("Mars/Olympus").is_err());
    }
}
