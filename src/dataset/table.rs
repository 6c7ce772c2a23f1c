//! In-memory copy of the downloaded CSV.

use csv::{ReaderBuilder, StringRecord};

use crate::error::Error;

/// Column holding the state or territory name of each row.
pub const REGION_COLUMN: &str = "Province_State";

#[derive(Debug, Clone)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<StringRecord>,
    region_index: usize,
}

impl Table {
    /// Parses CSV text with a header row. Every record must have as many
    /// fields as the header, and the header must name a `Province_State` column.
    pub fn from_csv(text: &str) -> Result<Self, Error> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(false)
            .from_reader(text.as_bytes());

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let region_index = headers
            .iter()
            .position(|h| h == REGION_COLUMN)
            .ok_or_else(|| Error::Parse(format!("no `{}` column in header", REGION_COLUMN)))?;

        let rows = reader.records().collect::<Result<Vec<_>, _>>()?;

        Ok(Table {
            headers,
            rows,
            region_index,
        })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Rows whose region cell equals `region` exactly. Case matters and no
    /// trimming is applied to the cell.
    pub fn filter_region(&self, region: &str) -> Vec<&StringRecord> {
        self.rows
            .iter()
            .filter(|row| row.get(self.region_index) == Some(region))
            .collect()
    }

    /// Distinct region names in the order they first appear.
    pub fn regions(&self) -> Vec<&str> {
        let mut seen = Vec::new();

        for row in &self.rows {
            if let Some(region) = row.get(self.region_index) {
                if !seen.contains(&region) {
                    seen.push(region);
                }
            }
        }

        seen
    }
}

// -- Tests -------------------------------------------------------------------
