//! Cumulative, daily and weekly case series.

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate};
use csv::StringRecord;

use crate::{dataset::DateColumn, error::Error};

/// One dated value of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point<T> {
    pub date: NaiveDate,
    pub value: T,
}

impl<T> Point<T> {
    pub fn new(date: NaiveDate, value: T) -> Self {
        Point { date, value }
    }
}

/// Sums every date column across `subset`, one point per date, ordered by date.
///
/// An empty subset yields an empty series. Blank cells count as zero.
pub fn to_cumulative_series(
    subset: &[&StringRecord],
    columns: &[DateColumn],
) -> Result<Vec<Point<i64>>, Error> {
    if subset.is_empty() {
        return Ok(Vec::new());
    }

    let mut series = Vec::with_capacity(columns.len());

    for column in columns {
        let mut total: i64 = 0;
        for row in subset {
            let cell = row.get(column.index).unwrap_or_default();
            total = total.saturating_add(parse_count(cell)?);
        }
        series.push(Point::new(column.date, total));
    }

    series.sort_by_key(|p| p.date);

    Ok(series)
}

// Counts are integers, but some exports write them as `12.0`.
fn parse_count(cell: &str) -> Result<i64, Error> {
    let cell = cell.trim();
    if cell.is_empty() {
        return Ok(0);
    }

    if let Ok(v) = cell.parse::<i64>() {
        return Ok(v);
    }

    match cell.parse::<f64>() {
        Ok(v) if v.is_finite() && v.fract() == 0.0 => Ok(v as i64),
        _ => Err(Error::Parse(format!("`{}` is not a case count", cell))),
    }
}

/// Day-over-day increase, with downward corrections clamped to zero.
/// The first date has no predecessor and is dropped.
pub fn to_daily_series(cumulative: &[Point<i64>]) -> Vec<Point<u64>> {
    cumulative
        .windows(2)
        .map(|pair| {
            let delta = pair[1].value.saturating_sub(pair[0].value).max(0);
            Point::new(pair[1].date, delta as u64)
        })
        .collect()
}

/// The Sunday closing the week that contains `date`.
pub fn week_ending(date: NaiveDate) -> NaiveDate {
    let days_to_sunday = (7 - date.weekday().num_days_from_sunday()) % 7;
    date + Duration::days(i64::from(days_to_sunday))
}

/// Sums daily values into weeks ending Sunday.
///
/// Every week between the first and the last daily point appears, with zero
/// for a week that holds no points. Weeks outside that span are not emitted.
pub fn to_weekly_series(daily: &[Point<u64>]) -> Vec<Point<u64>> {
    let mut sums: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    for point in daily {
        let total = sums.entry(week_ending(point.date)).or_default();
        *total = total.saturating_add(point.value);
    }

    let (Some(&first), Some(&last)) = (sums.keys().next(), sums.keys().next_back()) else {
        return Vec::new();
    };

    let mut weekly = Vec::new();
    let mut week = first;
    while week <= last {
        weekly.push(Point::new(week, sums.get(&week).copied().unwrap_or(0)));
        week += Duration::days(7);
    }

    weekly
}

// -- Tests -------------------------------------------------------------------
