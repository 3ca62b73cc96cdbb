//! Statistics module - aggregate helpers and console reporters

mod aggregate;
mod reporters;

pub use reporters::{station_stats, time_stats, trip_duration_stats, user_stats, StatsError};
