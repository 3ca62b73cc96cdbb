//! Bikeshare Explorer - Interactive US bikeshare trip data analysis
//!
//! Loads a city's trip CSV, applies optional month/day filters, and prints
//! descriptive statistics through an interactive console session.

mod console;
mod data;
mod schema;
mod stats;

use anyhow::Result;
use console::Session;
use std::io;
use std::path::PathBuf;

fn main() -> Result<()> {
    env_logger::init();

    let data_dir = std::env::var_os("BIKESHARE_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    log::debug!("data directory: {}", data_dir.display());

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), data_dir);
    session.run()
}
