//! Schema inference: which header columns carry a reporting date.
//!
//! Date columns are named `M/D/YY` (month and day without zero padding). Two
//! digit years are pinned to 2000-2099.

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::error::Error;

/// A header column recognised as a reporting day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateColumn {
    pub date: NaiveDate,
    pub index: usize,
}

fn date_header() -> &'static Regex {
    static DATE_HEADER: OnceLock<Regex> = OnceLock::new();
    DATE_HEADER.get_or_init(|| {
        Regex::new(r"^([0-9]{1,2})/([0-9]{1,2})/([0-9]{2})$")
            .expect("date header pattern is valid")
    })
}

/// Names of the columns that look like `M/D/YY`, in header order.
pub fn select_date_columns(headers: &[String]) -> Vec<&str> {
    headers
        .iter()
        .map(String::as_str)
        .filter(|h| date_header().is_match(h))
        .collect()
}

/// Maps every column picked by [`select_date_columns`] to its calendar date
/// and position in the header.
///
/// A header that matches the pattern but is not a real day (`2/30/21`,
/// `13/1/21`) is a parse error rather than being skipped.
pub fn infer_date_schema(headers: &[String]) -> Result<Vec<DateColumn>, Error> {
    let selected = select_date_columns(headers);
    let mut columns = Vec::with_capacity(selected.len());

    // `selected` is a subsequence of `headers`, so one forward pass pairs them up.
    let mut remaining = selected.into_iter().peekable();
    for (index, header) in headers.iter().enumerate() {
        if remaining.peek() == Some(&header.as_str()) {
            remaining.next();
            columns.push(DateColumn {
                date: parse_header_date(header)?,
                index,
            });
        }
    }

    Ok(columns)
}

fn parse_header_date(header: &str) -> Result<NaiveDate, Error> {
    let invalid = || Error::Parse(format!("`{}` is not a valid M/D/YY date", header));

    let caps = date_header().captures(header).ok_or_else(invalid)?;
    let month: u32 = caps[1].parse().map_err(|_| invalid())?;
    let day: u32 = caps[2].parse().map_err(|_| invalid())?;
    let year: i32 = caps[3].parse().map_err(|_| invalid())?;

    NaiveDate::from_ymd_opt(2000 + year, month, day).ok_or_else(invalid)
}

// -- Tests -------------------------------------------------------------------
