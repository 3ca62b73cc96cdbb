//! Data module - CSV loading and filtering

mod loader;

pub use loader::{load_city_data, LoaderError};
