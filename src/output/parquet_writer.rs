//! Save the weekly series to a parquet file.

use std::{fs::File, path::Path, sync::Arc};

use arrow::{
    array::{ArrayRef, Date32Array, Int64Array, RecordBatch},
    datatypes::{DataType, Field, Schema},
};
use chrono::{Datelike, NaiveDate};
use parquet::{arrow::ArrowWriter, basic::Compression, file::properties::WriterProperties};

use crate::{error::Error, series::Point};

// Days from 0001-01-01 to 1970-01-01, the Date32 epoch.
const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

pub fn save_parquet(weekly: &[Point<u64>], file_path: &Path) -> Result<(), Error> {
    let file = File::create(file_path).map_err(|e| Error::io(file_path, e))?;

    let schema = Arc::new(Schema::new(vec![
        Field::new("week_ending", DataType::Date32, false),
        Field::new("cases", DataType::Int64, false),
    ]));

    let props = WriterProperties::builder()
        .set_compression(Compression::SNAPPY)
        .build();

    let mut writer = ArrowWriter::try_new(file, schema.clone(), Some(props))?;

    let week_endings: Vec<i32> = weekly.iter().map(|p| to_date32(p.date)).collect();
    let cases: Vec<i64> = weekly
        .iter()
        .map(|p| i64::try_from(p.value).unwrap_or(i64::MAX))
        .collect();

    let columns: Vec<ArrayRef> = vec![
        Arc::new(Date32Array::from(week_endings)),
        Arc::new(Int64Array::from(cases)),
    ];
    let batch = RecordBatch::try_new(schema, columns)?;

    writer.write(&batch)?;
    writer.close()?;

    Ok(())
}

fn to_date32(date: NaiveDate) -> i32 {
    date.num_days_from_ce() - UNIX_EPOCH_DAYS_FROM_CE
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use arrow::array::Array;
    use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
    use tempfile::TempDir;

    #[test]
    fn should_convert_to_date32() {
        assert_eq!(to_date32(NaiveDate::from_ymd_opt(1970, 1, 1).unwrap()), 0);
        assert_eq!(to_date32(NaiveDate::from_ymd_opt(1970, 1, 8).unwrap()), 7);
        assert_eq!(to_date32(NaiveDate::from_ymd_opt(2021, 1, 10).unwrap()), 18_637);
    }

    #[test]
    fn should_write_readable_parquet() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("weekly.parquet");
        let weekly = vec![
            Point::new(NaiveDate::from_ymd_opt(2021, 1, 3).unwrap(), 20),
            Point::new(NaiveDate::from_ymd_opt(2021, 1, 10).unwrap(), 70),
        ];

        save_parquet(&weekly, &path).unwrap();

        let file = File::open(&path).unwrap();
        let reader = ParquetRecordBatchReaderBuilder::try_new(file)
            .unwrap()
            .build()
            .unwrap();
        let batches: Vec<RecordBatch> = reader.map(|b| b.unwrap()).collect();
        let batch = &batches[0];

        assert_eq!(batch.num_rows(), 2);
        assert_eq!(batch.schema().field(0).name(), "week_ending");

        let dates = batch.column(0).as_any().downcast_ref::<Date32Array>().unwrap();
        let cases = batch.column(1).as_any().downcast_ref::<Int64Array>().unwrap();
        assert_eq!(dates.value_as_date(1), NaiveDate::from_ymd_opt(2021, 1, 10));
        assert_eq!(cases.value(0), 20);
        assert_eq!(cases.value(1), 70);
    }

    #[test]
    fn should_fail_when_directory_is_missing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("weekly.parquet");

        assert!(matches!(save_parquet(&[], &path), Err(Error::Io { .. })));
    }
}
