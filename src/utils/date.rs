use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// First and last day of a `YYYY`, `YYYY-MM` or `YYYY-MM-DD` period.
pub fn period_bounds(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let p = p.trim();
    let invalid = || AppError::InvalidDate(format!("Invalid period: {}", p));

    // YYYY-MM-DD
    if let Some(d) = parse_date(p) {
        return Ok((d, d));
    }

    // YYYY-MM
    if p.len() == 7
        && let Some(first) = parse_date(&format!("{p}-01"))
    {
        return Ok((first, last_day_of_month(first.year(), first.month()).ok_or_else(invalid)?));
    }

    // YYYY
    if p.len() == 4
        && let Ok(year) = p.parse::<i32>()
    {
        let first = NaiveDate::from_ymd_opt(year, 1, 1).ok_or_else(invalid)?;
        let last = NaiveDate::from_ymd_opt(year, 12, 31).ok_or_else(invalid)?;
        return Ok((first, last));
    }

    Err(invalid())
}

/// Bounds for a period or an `A:B` range of periods.
pub fn range_bounds(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    if let Some((start, end)) = r.split_once(':') {
        let (from, _) = period_bounds(start)?;
        let (_, to) = period_bounds(end)?;
        if from > to {
            return Err(AppError::InvalidDate(format!(
                "Range start {} is after end {}",
                from, to
            )));
        }
        return Ok((from, to));
    }

    period_bounds(r)
}

pub fn current_month_bounds() -> AppResult<(NaiveDate, NaiveDate)> {
    let t = today();
    let first = t
        .with_day(1)
        .ok_or_else(|| AppError::InvalidDate(t.to_string()))?;
    let last = last_day_of_month(t.year(), t.month())
        .ok_or_else(|| AppError::InvalidDate(t.to_string()))?;
    Ok((first, last))
}

pub fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let (y, m) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(y, m, 1)?.pred_opt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn periods() {
        assert_eq!(period_bounds("2026-10-19").unwrap(), (d(2026, 10, 19), d(2026, 10, 19)));
        assert_eq!(period_bounds("2024-02").unwrap(), (d(2024, 2, 1), d(2024, 2, 29)));
        assert_eq!(period_bounds("2026").unwrap(), (d(2026, 1, 1), d(2026, 12, 31)));
        assert!(period_bounds("yesterday").is_err());
    }

    #[test]
    fn ranges() {
        assert_eq!(
            range_bounds("2026-09:2026-10-05").unwrap(),
            (d(2026, 9, 1), d(2026, 10, 5))
        );
        assert!(range_bounds("2026-10:2026-09").is_err());
    }

    #[test]
    fn december_has_31_days() {
        assert_eq!(last_day_of_month(2026, 12), Some(d(2026, 12, 31)));
    }
}
