//! Session Controller
//! Runs repeated rounds of filter collection, loading, preview, and reporting.

use anyhow::{Context, Result};
use polars::prelude::DataFrame;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::console::prompts::{collect_filters, Prompted};
use crate::data::load_city_data;
use crate::stats::{station_stats, time_stats, trip_duration_stats, user_stats};

const PREVIEW_PAGE_SIZE: usize = 5;

/// Interactive analysis session over the city datasets in `data_dir`.
pub struct Session<R, W> {
    input: R,
    out: W,
    data_dir: PathBuf,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, out: W, data_dir: PathBuf) -> Self {
        Self {
            input,
            out,
            data_dir,
        }
    }

    /// Run rounds until the user exits or declines a restart. Loader and
    /// reporter failures are fatal and propagate out.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.out, "Welcome to the Bikeshare Data Explorer!")?;

        loop {
            let selection = match collect_filters(&mut self.input, &mut self.out)? {
                Prompted::Value(selection) => selection,
                Prompted::Exit => {
                    writeln!(self.out, "User exited. Goodbye!")?;
                    return Ok(());
                }
            };
            log::debug!("filter selection: {:?}", selection);

            let df = load_city_data(
                &self.data_dir,
                selection.city,
                selection.month,
                selection.day,
            )
            .context("failed to load trip data")?;

            if df.is_empty() {
                writeln!(self.out, "\nNo data available for the selected filters.")?;
                if self.answered_yes("Would you like to try again? (yes/no): ")? {
                    continue;
                }
                writeln!(self.out, "Goodbye!")?;
                return Ok(());
            }

            if let Prompted::Exit = self.preview(&df)? {
                writeln!(self.out, "User exited. Goodbye!")?;
                return Ok(());
            }

            writeln!(self.out, "\nGenerating statistics...\n")?;
            time_stats(&df, &mut self.out)?;
            station_stats(&df, &mut self.out)?;
            trip_duration_stats(&df, &mut self.out)?;
            user_stats(&df, &mut self.out)?;

            if self.answered_yes("\nWould you like to restart the analysis? (yes/no): ")? {
                continue;
            }
            writeln!(
                self.out,
                "Thanks for using the Bikeshare Data Explorer. Goodbye!"
            )?;
            return Ok(());
        }
    }

    /// Offer the table in 5-row pages at an advancing offset. Invalid input
    /// re-prompts without advancing; "exit" ends the whole session.
    fn preview(&mut self, df: &DataFrame) -> Result<Prompted<()>> {
        let mut offset = 0usize;
        writeln!(self.out, "\nPreview of raw data:")?;

        loop {
            write!(self.out, "Would you like to see 5 rows of data? (yes/no): ")?;
            self.out.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(Prompted::Exit);
            }
            match line.trim().to_lowercase().as_str() {
                "yes" => {
                    writeln!(self.out, "{}", df.slice(offset as i64, PREVIEW_PAGE_SIZE))?;
                    offset += PREVIEW_PAGE_SIZE;
                    if offset >= df.height() {
                        writeln!(self.out, "No more data to display.")?;
                        return Ok(Prompted::Value(()));
                    }
                }
                "no" => return Ok(Prompted::Value(())),
                "exit" => return Ok(Prompted::Exit),
                _ => writeln!(self.out, "Invalid input. Please type 'yes' or 'no'.")?,
            }
        }
    }

    /// Single yes/no decision; anything other than "yes" counts as no.
    fn answered_yes(&mut self, prompt: &str) -> Result<bool> {
        write!(self.out, "{prompt}")?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(false);
        }
        Ok(line.trim().to_lowercase() == "yes")
    }
}
