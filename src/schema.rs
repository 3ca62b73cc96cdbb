//! Column-name constants and fixed vocabularies.
//! Single source of truth for the dataset schema and prompt choices.

// ── Source columns ──────────────────────────────────────────────────────────
pub const START_TIME: &str = "Start Time";
pub const START_STATION: &str = "Start Station";
pub const END_STATION: &str = "End Station";
pub const TRIP_DURATION: &str = "Trip Duration";
pub const USER_TYPE: &str = "User Type";
pub const GENDER: &str = "Gender";
pub const BIRTH_YEAR: &str = "Birth Year";

// ── Derived columns ─────────────────────────────────────────────────────────
pub const MONTH: &str = "month";
pub const DAY_OF_WEEK: &str = "day_of_week";
pub const HOUR: &str = "hour";

// ── Vocabularies ────────────────────────────────────────────────────────────
pub const MONTHS: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

pub const DAYS: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

/// Supported cities, each mapped to its on-disk CSV file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// Parse a city name (already trimmed and lowercased).
    pub fn parse(input: &str) -> Option<City> {
        match input {
            "chicago" => Some(City::Chicago),
            "new york city" => Some(City::NewYorkCity),
            "washington" => Some(City::Washington),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }

    pub fn csv_filename(&self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }
}

/// Month filter: either no filtering or one month, 1 = january.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthFilter {
    All,
    Month(u8),
}

impl MonthFilter {
    pub fn name(&self) -> &'static str {
        match self {
            MonthFilter::All => "all",
            MonthFilter::Month(n) => MONTHS[*n as usize - 1],
        }
    }
}

/// Day-of-week filter: either no filtering or one day, 0 = monday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayFilter {
    All,
    Day(u8),
}

impl DayFilter {
    pub fn name(&self) -> &'static str {
        match self {
            DayFilter::All => "all",
            DayFilter::Day(d) => DAYS[*d as usize],
        }
    }
}

/// The user-chosen (city, month, day) triple controlling which rows are analyzed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterSelection {
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
}
