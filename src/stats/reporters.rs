//! Statistics Reporters Module
//! The four console reports computed over a filtered trip table.

use polars::prelude::*;
use std::io::Write;
use std::time::Instant;
use thiserror::Error;

use crate::schema;
use crate::stats::aggregate::{mode, value_counts};

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
    #[error("Output error: {0}")]
    IoError(#[from] std::io::Error),
}

const SEPARATOR_WIDTH: usize = 40;

fn write_footer<W: Write>(out: &mut W, started: Instant) -> Result<(), StatsError> {
    writeln!(
        out,
        "\nThis took {} seconds.",
        started.elapsed().as_secs_f64()
    )?;
    writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH))?;
    Ok(())
}

fn i32_values(df: &DataFrame, name: &str) -> PolarsResult<Vec<i32>> {
    Ok(df
        .column(name)?
        .as_materialized_series()
        .i32()?
        .into_iter()
        .flatten()
        .collect())
}

fn str_values(df: &DataFrame, name: &str) -> PolarsResult<Vec<String>> {
    Ok(df
        .column(name)?
        .as_materialized_series()
        .str()?
        .into_iter()
        .flatten()
        .map(|s| s.to_string())
        .collect())
}

/// Most frequent month, day of week, and start hour.
///
/// Month and day are skipped when their derived columns are absent; the hour
/// column is required.
pub fn time_stats<W: Write>(df: &DataFrame, out: &mut W) -> Result<(), StatsError> {
    writeln!(out, "\nCalculating The Most Frequent Times of Travel...\n")?;
    let started = Instant::now();

    if df.column(schema::MONTH).is_ok() {
        if let Some(month) = mode(i32_values(df, schema::MONTH)?) {
            writeln!(out, "Most Common Month: {}", month)?;
        }
    }
    if df.column(schema::DAY_OF_WEEK).is_ok() {
        if let Some(day) = mode(str_values(df, schema::DAY_OF_WEEK)?) {
            writeln!(out, "Most Common Day of Week: {}", day)?;
        }
    }
    if let Some(hour) = mode(i32_values(df, schema::HOUR)?) {
        writeln!(out, "Most Common Start Hour: {}", hour)?;
    }

    write_footer(out, started)
}

/// Most common start station, end station, and start-to-end trip.
///
/// Both station columns are required; a missing one is fatal.
pub fn station_stats<W: Write>(df: &DataFrame, out: &mut W) -> Result<(), StatsError> {
    writeln!(out, "\nCalculating The Most Popular Stations and Trip...\n")?;
    let started = Instant::now();

    if let Some(station) = mode(str_values(df, schema::START_STATION)?) {
        writeln!(out, "Most Common Start Station: {}", station)?;
    }
    if let Some(station) = mode(str_values(df, schema::END_STATION)?) {
        writeln!(out, "Most Common End Station: {}", station)?;
    }

    let start_col = df.column(schema::START_STATION)?;
    let end_col = df.column(schema::END_STATION)?;
    let combos = start_col
        .as_materialized_series()
        .str()?
        .into_iter()
        .zip(end_col.as_materialized_series().str()?)
        .filter_map(|(start, end)| Some(format!("{} to {}", start?, end?)));
    if let Some(trip) = mode(combos) {
        writeln!(out, "Most Common Trip: {}", trip)?;
    }

    write_footer(out, started)
}

/// Total and average trip duration in seconds.
pub fn trip_duration_stats<W: Write>(df: &DataFrame, out: &mut W) -> Result<(), StatsError> {
    writeln!(out, "\nCalculating Trip Duration...\n")?;
    let started = Instant::now();

    let durations = df.column(schema::TRIP_DURATION)?.as_materialized_series();
    let total = durations
        .sum_reduce()?
        .value()
        .try_extract::<f64>()
        .unwrap_or(0.0);
    let average = durations
        .mean_reduce()
        .value()
        .try_extract::<f64>()
        .unwrap_or(f64::NAN);

    writeln!(out, "Total Travel Time: {}", total)?;
    writeln!(out, "Average Travel Time: {}", average)?;

    write_footer(out, started)
}

/// User type breakdown plus gender and birth-year statistics where available.
pub fn user_stats<W: Write>(df: &DataFrame, out: &mut W) -> Result<(), StatsError> {
    writeln!(out, "\nCalculating User Stats...\n")?;
    let started = Instant::now();

    writeln!(out, "User Types:")?;
    for (user_type, count) in value_counts(str_values(df, schema::USER_TYPE)?) {
        writeln!(out, "  {}: {}", user_type, count)?;
    }

    if let Ok(gender_col) = df.column(schema::GENDER) {
        writeln!(out, "\nGender Breakdown:")?;
        for (gender, count) in value_counts(str_values(df, schema::GENDER)?) {
            writeln!(out, "  {}: {}", gender, count)?;
        }
        writeln!(
            out,
            "Missing Gender Data: {}",
            gender_col.as_materialized_series().null_count()
        )?;
    } else {
        writeln!(out, "\nNo Gender data available.")?;
    }

    if let Ok(birth_col) = df.column(schema::BIRTH_YEAR) {
        let years = birth_col.as_materialized_series().cast(&DataType::Float64)?;
        let year_ca = years.f64()?;

        let earliest = years
            .min_reduce()?
            .value()
            .try_extract::<f64>()
            .unwrap_or(f64::NAN);
        let most_recent = years
            .max_reduce()?
            .value()
            .try_extract::<f64>()
            .unwrap_or(f64::NAN);
        writeln!(out, "\nEarliest Birth Year: {}", earliest as i64)?;
        writeln!(out, "Most Recent Birth Year: {}", most_recent as i64)?;

        if let Some(year) = mode(year_ca.into_iter().flatten().map(|y| y as i64)) {
            writeln!(out, "Most Common Birth Year: {}", year)?;
        }

        let average = years
            .mean_reduce()
            .value()
            .try_extract::<f64>()
            .unwrap_or(f64::NAN);
        writeln!(out, "Average Birth Year: {:.1}", average)?;
        writeln!(
            out,
            "Number of Users with Birth Year data: {}",
            years.len() - years.null_count()
        )?;
    } else {
        writeln!(out, "\nNo Birth Year data available.")?;
    }

    writeln!(out, "\nMissing Values Summary:")?;
    for name in [schema::USER_TYPE, schema::GENDER, schema::BIRTH_YEAR] {
        if let Ok(column) = df.column(name) {
            writeln!(
                out,
                "  {}: {} missing",
                name,
                column.as_materialized_series().null_count()
            )?;
        }
    }

    write_footer(out, started)
}
