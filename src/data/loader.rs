//! CSV Data Loader Module
//! Loads a city's trip CSV, derives time columns, and applies filters using Polars.

use polars::prelude::*;
use std::path::Path;
use thiserror::Error;

use crate::schema::{self, City, DayFilter, MonthFilter};

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to load CSV: {0}")]
    CsvError(#[from] PolarsError),
}

/// Load the trip data for a city and apply the month/day filters.
///
/// The `Start Time` column is parsed strictly; unparseable timestamps or an
/// unreadable file abort the whole load. The result may be empty.
pub fn load_city_data(
    data_dir: &Path,
    city: City,
    month: MonthFilter,
    day: DayFilter,
) -> Result<DataFrame, LoaderError> {
    let path = data_dir.join(city.csv_filename());
    let path_str = path.to_string_lossy().to_string();

    let mut lazy = LazyCsvReader::new(&path_str)
        .with_infer_schema_length(Some(10000))
        .finish()?
        .with_column(
            col(schema::START_TIME)
                .str()
                .to_datetime(
                    Some(TimeUnit::Microseconds),
                    None,
                    StrptimeOptions::default(),
                    lit("raise"),
                )
                .alias(schema::START_TIME),
        )
        .with_columns([
            col(schema::START_TIME)
                .dt()
                .month()
                .cast(DataType::Int32)
                .alias(schema::MONTH),
            col(schema::START_TIME)
                .dt()
                .to_string("%A")
                .str()
                .to_lowercase()
                .alias(schema::DAY_OF_WEEK),
            col(schema::START_TIME)
                .dt()
                .hour()
                .cast(DataType::Int32)
                .alias(schema::HOUR),
        ]);

    if let MonthFilter::Month(n) = month {
        lazy = lazy.filter(col(schema::MONTH).eq(lit(n as i32)));
    }
    if let DayFilter::Day(_) = day {
        lazy = lazy.filter(col(schema::DAY_OF_WEEK).eq(lit(day.name())));
    }

    let df = lazy.collect()?;
    log::info!(
        "loaded {} rows for {} (month={}, day={})",
        df.height(),
        city.name(),
        month.name(),
        day.name()
    );
    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_fixture_csv(dir: &Path) {
        // 2017-01-02 and 2017-03-06 are Mondays, 2017-01-03 a Tuesday,
        // 2017-06-11 a Sunday.
        let csv = "\
Start Time,Start Station,End Station,Trip Duration,User Type
2017-01-02 08:00:00,A St,B St,300,Subscriber
2017-01-03 09:30:00,A St,C St,620,Customer
2017-03-06 17:15:00,B St,A St,450,Subscriber
2017-06-11 23:59:00,C St,B St,1000,Subscriber
";
        std::fs::write(dir.join("chicago.csv"), csv).unwrap();
    }

    #[test]
    fn test_unfiltered_load_keeps_all_rows_and_derives_columns() {
        let dir = tempfile::tempdir().unwrap();
        write_fixture_csv(dir.path());

        let df =
            load_city_data(dir.path(), City::Chicago, MonthFilter::All, DayFilter::All).unwrap();
        assert_eq!(df.height(), 4);
        for name in [schema::MONTH, schema::DAY_OF_WEEK, schema::HOUR] {
            assert!(df.column(name).is_ok(), "missing derived column {name}");
        }

        let hours: Vec<i32> = df
            .column(schema::HOUR)
            .unwrap()
            .as_materialized_series()
            .i32()
            .unwrap()
            .into_iter()
            .flatten()
            .collect();
        assert_eq!(hours, vec![8, 9, 17, 23]);
    }

    #[test]
    fn test_month_filter_keeps_matching_subset() {
        let dir = tempfile::tempdir().unwrap();
        write_fixture_csv(dir.path());

        let df = load_city_data(
            dir.path(),
            City::Chicago,
            MonthFilter::Month(1),
            DayFilter::All,
        )
        .unwrap();
        assert_eq!(df.height(), 2);

        let months = df.column(schema::MONTH).unwrap().as_materialized_series();
        for v in months.i32().unwrap().into_iter().flatten() {
            assert_eq!(v, 1);
        }
    }

    #[test]
    fn test_day_filter_matches_lowercase_day_name() {
        let dir = tempfile::tempdir().unwrap();
        write_fixture_csv(dir.path());

        let df = load_city_data(
            dir.path(),
            City::Chicago,
            MonthFilter::All,
            DayFilter::Day(0),
        )
        .unwrap();
        assert_eq!(df.height(), 2);

        let days = df
            .column(schema::DAY_OF_WEEK)
            .unwrap()
            .as_materialized_series();
        for v in days.str().unwrap().into_iter().flatten() {
            assert_eq!(v, "monday");
        }
    }

    #[test]
    fn test_combined_filter_can_produce_empty_result() {
        let dir = tempfile::tempdir().unwrap();
        write_fixture_csv(dir.path());

        // No june mondays in the fixture.
        let df = load_city_data(
            dir.path(),
            City::Chicago,
            MonthFilter::Month(6),
            DayFilter::Day(0),
        )
        .unwrap();
        assert!(df.is_empty());
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_city_data(
            dir.path(),
            City::Washington,
            MonthFilter::All,
            DayFilter::All,
        );
        assert!(result.is_err());
    }
}
