use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::warn;

use crate::dates::{parse_iso, parse_zone, Clock};

pub const DEFAULT_OUTPUT_DIR: &str = "summary_ref";
pub const DEFAULT_DAYS: u32 = 7;

/// Robotaxi fixtures - synthetic dashboard summary JSON generator
#[derive(Parser, Debug, Default)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Output directory for generated files (default: "summary_ref")
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Number of days ending today to cover (default: 7)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    pub days: Option<u32>,

    /// Seed for reproducible output; omitted means a fresh random run
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Pin "today" to a fixed date (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,

    /// IANA timezone used to decide "today" (e.g. America/New_York); local time if unset
    #[arg(long)]
    pub timezone: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub output_dir: PathBuf,
    pub days: u32,
    pub seed: Option<u64>,
    pub clock: Clock,
}

/// CLI argument > environment variable > default.
pub fn resolve_settings<F>(args: &Args, env: F) -> Result<Settings>
where
    F: Fn(&str) -> Option<String>,
{
    // 1) Output dir
    let output_dir = args
        .output_dir
        .clone()
        .or_else(|| env("FIXTURES_OUTPUT_DIR").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

    // 2) Days; the CLI parser already enforces >= 1, env values are checked here
    let days = match args.days {
        Some(d) => d,
        None => match env("FIXTURES_DAYS") {
            Some(raw) => {
                let d: u32 = raw
                    .trim()
                    .parse()
                    .with_context(|| format!("FIXTURES_DAYS={:?} is not a whole number", raw))?;
                anyhow::ensure!(d >= 1, "FIXTURES_DAYS must be at least 1 (got {})", d);
                d
            }
            None => DEFAULT_DAYS,
        },
    };

    // 3) Seed
    let seed = match args.seed {
        Some(s) => Some(s),
        None => env("FIXTURES_SEED")
            .map(|raw| {
                raw.trim()
                    .parse::<u64>()
                    .with_context(|| format!("FIXTURES_SEED={:?} is not a u64", raw))
            })
            .transpose()?,
    };

    // 4) Clock: fixed date wins over timezone
    let date = args.date.clone().or_else(|| env("FIXTURES_DATE"));
    let zone = args.timezone.clone().or_else(|| env("FIXTURES_TZ"));
    let clock = if let Some(d) = date {
        if let Some(z) = &zone {
            warn!("Fixed date {} set - ignoring timezone {}", d, z);
        }
        Clock::Fixed(parse_iso(&d)?)
    } else if let Some(z) = zone {
        Clock::Zone(parse_zone(&z)?)
    } else {
        Clock::Local
    };

    Ok(Settings {
        output_dir,
        days,
        seed,
        clock,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn defaults_when_nothing_set() {
        let s = resolve_settings(&Args::default(), env_of(&[])).unwrap();
        assert_eq!(s.output_dir, PathBuf::from("summary_ref"));
        assert_eq!(s.days, 7);
        assert_eq!(s.seed, None);
        assert_eq!(s.clock, Clock::Local);
    }

    #[test]
    fn env_fills_in_missing_args() {
        let env = env_of(&[
            ("FIXTURES_OUTPUT_DIR", "/tmp/fx"),
            ("FIXTURES_DAYS", "3"),
            ("FIXTURES_SEED", "42"),
            ("FIXTURES_TZ", "America/New_York"),
        ]);
        let s = resolve_settings(&Args::default(), env).unwrap();
        assert_eq!(s.output_dir, PathBuf::from("/tmp/fx"));
        assert_eq!(s.days, 3);
        assert_eq!(s.seed, Some(42));
        assert_eq!(s.clock, Clock::Zone(chrono_tz::America::New_York));
    }

    #[test]
    fn args_beat_env_and_date_beats_zone() {
        let args = Args {
            output_dir: Some(PathBuf::from("cli_out")),
            days: Some(2),
            seed: Some(1),
            date: Some("2024-06-10".into()),
            timezone: None,
        };
        let env = env_of(&[("FIXTURES_OUTPUT_DIR", "env_out"), ("FIXTURES_DAYS", "9"), ("FIXTURES_TZ", "UTC")]);
        let s = resolve_settings(&args, env).unwrap();
        assert_eq!(s.output_dir, PathBuf::from("cli_out"));
        assert_eq!(s.days, 2);
        assert_eq!(s.seed, Some(1));
        assert_eq!(s.clock, Clock::Fixed(NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()));
    }

    #[test]
    fn fixed_date_overrides_env_timezone() {
        let args = Args {
            date: Some("2024-06-10".into()),
            ..Args::default()
        };
        let s = resolve_settings(&args, env_of(&[("FIXTURES_TZ", "Asia/Tokyo")])).unwrap();
        assert_eq!(s.clock, Clock::Fixed(NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()));
    }

    #[test]
    fn bad_env_values_are_errors() {
        assert!(resolve_settings(&Args::default(), env_of(&[("FIXTURES_DAYS", "0")])).is_err());
        assert!(resolve_settings(&Args::default(), env_of(&[("FIXTURES_DAYS", "-2")])).is_err());
        assert!(resolve_settings(&Args::default(), env_of(&[("FIXTURES_SEED", "abc")])).is_err());
        assert!(resolve_settings(&Args::default(), env_of(&[("FIXTURES_DATE", "yesterday")])).is_err());
        assert!(resolve_settings(&Args::default(), env_of(&[("FIXTURES_TZ", "Nowhere/Else")])).is_err());
    }

    #[test]
    fn cli_rejects_zero_days() {
        assert!(Args::try_parse_from(["robotaxi_fixtures", "--days", "0"]).is_err());
        let a = Args::try_parse_from(["robotaxi_fixtures", "-d", "3", "-o", "x"]).unwrap();
        assert_eq!(a.days, Some(3));
        assert_eq!(a.output_dir, Some(PathBuf::from("x")));
    }
}
