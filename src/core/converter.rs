//! Chronological and human-equivalent age calculation.
//!
//! Everything here is pure: "now" is always passed in by the caller.

use crate::domain::model::{AgeRecord, AgeReport, SizeCategory, TABLE_YEARS};
use crate::utils::error::{PetAgeError, Result};
use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeDelta, TimeZone};

/// 考慮閏年的平均年長度 (天)
pub const DAYS_PER_YEAR: f64 = 365.2425;
const MS_PER_DAY: f64 = 24.0 * 60.0 * 60.0 * 1000.0;

pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Midnight of `date` in `tz`, as a real instant.
///
/// On a date whose midnight is skipped by a DST jump, the first valid instant
/// after the gap is used.
pub fn local_midnight<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> Result<DateTime<Tz>> {
    let midnight = date.and_time(NaiveTime::MIN);
    tz.from_local_datetime(&midnight)
        .earliest()
        .or_else(|| {
            tz.from_local_datetime(&(midnight + TimeDelta::hours(1)))
                .earliest()
        })
        .ok_or_else(|| PetAgeError::InvalidBirthDate {
            value: date.to_string(),
            reason: "no local midnight on this date".to_string(),
        })
}

/// `--as-of` 指定的日期取當地午夜，否則用現在時間
pub fn resolve_now(as_of: Option<NaiveDate>) -> Result<DateTime<Local>> {
    match as_of {
        Some(date) => local_midnight(date, &Local),
        None => Ok(Local::now()),
    }
}

/// Elapsed years between two instants, to one decimal.
pub fn elapsed_years<Tz: TimeZone>(birth: &DateTime<Tz>, now: &DateTime<Tz>) -> Result<f64> {
    if birth > now {
        return Err(PetAgeError::FutureBirthDate {
            birth_date: birth.date_naive(),
        });
    }

    let diff_days = (now.clone() - birth.clone()).num_milliseconds() as f64 / MS_PER_DAY;
    Ok(round_one_decimal(diff_days / DAYS_PER_YEAR))
}

/// Elapsed years from midnight of `birth_date` (in the zone of `now`) until `now`.
pub fn chronological_age<Tz: TimeZone>(birth_date: NaiveDate, now: &DateTime<Tz>) -> Result<f64> {
    let birth = local_midnight(birth_date, &now.timezone())?;
    elapsed_years(&birth, now)
}

pub fn human_equivalent(years: f64, size: SizeCategory) -> f64 {
    let table = size.table();
    if years <= 0.0 {
        return 0.0;
    }

    // 15 歲以上以最後一年的增幅延伸
    let max_years = TABLE_YEARS as f64;
    if years >= max_years {
        let last = table[TABLE_YEARS - 1];
        let prev = table[TABLE_YEARS - 2];
        return round_one_decimal(last + (years - max_years) * (last - prev));
    }

    let low = years.floor();
    let high = years.ceil();
    if low == high {
        return round_one_decimal(lookup(table, low as usize));
    }

    // 例如 2.6 歲 -> 介於 2 與 3 歲之間；0 歲視為 0
    let fraction = years - low;
    let low_value = if low == 0.0 { 0.0 } else { lookup(table, low as usize) };
    let high_value = lookup(table, high as usize);

    round_one_decimal(low_value + (high_value - low_value) * fraction)
}

pub fn convert<Tz: TimeZone>(record: &AgeRecord, now: &DateTime<Tz>) -> Result<AgeReport> {
    let chronological_years = chronological_age(record.birth_date, now)?;
    let human_years = human_equivalent(chronological_years, record.size);

    tracing::debug!(
        "Converted {} ({}): {} -> {}",
        record.birth_date,
        record.size,
        chronological_years,
        human_years
    );

    Ok(AgeReport {
        birth_date: record.birth_date,
        size: record.size,
        chronological_years,
        human_years,
    })
}

fn lookup(table: &[f64; TABLE_YEARS], year: usize) -> f64 {
    table[year.clamp(1, TABLE_YEARS) - 1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn midnight(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_zero_and_negative_years() {
        for size in SizeCategory::ALL {
            assert_eq!(human_equivalent(0.0, size), 0.0);
            assert_eq!(human_equivalent(-1.5, size), 0.0);
        }
    }

    #[test]
    fn test_whole_years_use_table() {
        assert_eq!(human_equivalent(1.0, SizeCategory::Small), 15.0);
        assert_eq!(human_equivalent(15.0, SizeCategory::Large), 93.0);
        assert_eq!(human_equivalent(6.0, SizeCategory::Medium), 42.0);
        assert_eq!(human_equivalent(9.0, SizeCategory::Medium), 56.0);
    }

    #[test]
    fn test_interpolation() {
        assert_eq!(human_equivalent(2.6, SizeCategory::Small), 26.4);
        assert_eq!(human_equivalent(5.5, SizeCategory::Large), 40.5);
        assert_eq!(human_equivalent(14.5, SizeCategory::Medium), 80.5);
    }

    #[test]
    fn test_under_one_year_interpolates_from_zero() {
        assert_eq!(human_equivalent(0.5, SizeCategory::Small), 7.5);
        assert_eq!(human_equivalent(0.1, SizeCategory::Large), 1.5);
    }

    #[test]
    fn test_extrapolation_past_table() {
        assert_eq!(human_equivalent(16.0, SizeCategory::Small), 80.0);
        assert_eq!(human_equivalent(17.5, SizeCategory::Large), 105.5);
        assert_eq!(human_equivalent(15.3, SizeCategory::Medium), 84.5);
    }

    #[test]
    fn test_chronological_age() {
        assert_eq!(chronological_age(date(2020, 1, 1), &midnight(2020, 1, 1)).unwrap(), 0.0);
        assert_eq!(chronological_age(date(2020, 1, 1), &midnight(2022, 1, 1)).unwrap(), 2.0);
        assert_eq!(chronological_age(date(2020, 1, 1), &midnight(2022, 8, 1)).unwrap(), 2.6);
    }

    #[test]
    fn test_chronological_age_counts_partial_days() {
        let now = Utc.with_ymd_and_hms(2024, 7, 1, 12, 0, 0).unwrap();
        assert_eq!(chronological_age(date(2024, 7, 1), &now).unwrap(), 0.0);
    }

    #[test]
    fn test_elapsed_years_spans_dst_change() {
        // 夏令時間 (UTC-4) 出生，標準時間 (UTC-5) 計算：實際多出一小時
        let edt = FixedOffset::west_opt(4 * 3600).unwrap();
        let est = FixedOffset::west_opt(5 * 3600).unwrap();
        let birth = edt.with_ymd_and_hms(2021, 8, 11, 0, 0, 0).unwrap();
        let now = est.with_ymd_and_hms(2024, 11, 10, 0, 0, 0).unwrap();

        assert_eq!(elapsed_years(&birth, &now).unwrap(), 3.3);

        let same_offset_birth = est.with_ymd_and_hms(2021, 8, 11, 0, 0, 0).unwrap();
        assert_eq!(elapsed_years(&same_offset_birth, &now).unwrap(), 3.2);
    }

    #[test]
    fn test_chronological_age_uses_zone_of_now() {
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        let now = tokyo.with_ymd_and_hms(2022, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(chronological_age(date(2020, 1, 1), &now).unwrap(), 2.0);
        assert_eq!(chronological_age(date(2022, 1, 1), &now).unwrap(), 0.0);
    }

    #[test]
    fn test_resolve_now_pins_as_of_to_local_midnight() {
        let as_of = date(2024, 3, 15);
        let now = resolve_now(Some(as_of)).unwrap();
        assert_eq!(now.date_naive(), as_of);
        assert_eq!(now.time(), NaiveTime::MIN);
    }

    #[test]
    fn test_resolve_now_without_as_of_is_current_time() {
        let before = Local::now();
        let now = resolve_now(None).unwrap();
        assert!(now >= before);
        assert!(now - before < TimeDelta::minutes(1));
    }

    #[test]
    fn test_future_birth_date_rejected() {
        let result = chronological_age(date(2030, 1, 1), &midnight(2026, 1, 1));
        assert!(matches!(result, Err(PetAgeError::FutureBirthDate { .. })));
    }

    #[test]
    fn test_convert_combines_both_steps() {
        let record = AgeRecord {
            birth_date: date(2020, 1, 1),
            size: SizeCategory::Small,
        };
        let report = convert(&record, &midnight(2022, 8, 1)).unwrap();
        assert_eq!(report.chronological_years, 2.6);
        assert_eq!(report.human_years, 26.4);
        assert_eq!(report.size, SizeCategory::Small);
    }
}
