use std::{fs::File, path::Path};

use csv::WriterBuilder;

use crate::{error::Error, series::Point};

/// Writes the series with an unnamed date index column, e.g.
///
/// ```text
/// ,cases
/// 2020-01-26,0
/// ```
pub fn save_csv(weekly: &[Point<u64>], file_path: &Path) -> Result<(), Error> {
    let file = File::create(file_path).map_err(|e| Error::io(file_path, e))?;
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);

    writer.write_record(["", "cases"])?;
    for point in weekly {
        writer.write_record([
            point.date.format("%Y-%m-%d").to_string(),
            point.value.to_string(),
        ])?;
    }

    writer.flush().map_err(|e| Error::io(file_path, e))?;

    Ok(())
}

// -- Tests -------------------------------------------------------------------
