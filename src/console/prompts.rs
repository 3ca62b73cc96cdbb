//! Interactive prompt loops for collecting the filter selection.

use std::io::{self, BufRead, Write};

use crate::schema::{City, DayFilter, FilterSelection, MonthFilter, DAYS, MONTHS};

/// Outcome of a prompt: either a parsed value or the user typed the exit
/// keyword (or input ended).
#[derive(Debug, PartialEq, Eq)]
pub enum Prompted<T> {
    Value(T),
    Exit,
}

/// Which of the month/day prompts to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FilterMode {
    Month,
    Day,
    Both,
    None,
}

/// Prompt repeatedly until `parse` accepts the trimmed, lowercased input.
/// "exit" and end-of-input both short-circuit to `Prompted::Exit`.
pub fn prompt_until_valid<R, W, T, F>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
    error_message: &str,
    parse: F,
) -> io::Result<Prompted<T>>
where
    R: BufRead,
    W: Write,
    F: Fn(&str) -> Option<T>,
{
    loop {
        write!(out, "{prompt}")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(Prompted::Exit);
        }
        let normalized = line.trim().to_lowercase();
        if normalized == "exit" {
            return Ok(Prompted::Exit);
        }
        if let Some(value) = parse(&normalized) {
            return Ok(Prompted::Value(value));
        }
        writeln!(out, "{error_message}")?;
    }
}

fn parse_filter_mode(input: &str) -> Option<FilterMode> {
    match input {
        "month" => Some(FilterMode::Month),
        "day" => Some(FilterMode::Day),
        "both" => Some(FilterMode::Both),
        "none" => Some(FilterMode::None),
        _ => None,
    }
}

fn parse_month(input: &str) -> Option<MonthFilter> {
    if input == "all" {
        return Some(MonthFilter::All);
    }
    if let Ok(n) = input.parse::<u8>() {
        if (1..=12).contains(&n) {
            return Some(MonthFilter::Month(n));
        }
        return None;
    }
    MONTHS
        .iter()
        .position(|m| *m == input)
        .map(|i| MonthFilter::Month(i as u8 + 1))
}

fn parse_day(input: &str) -> Option<DayFilter> {
    if input == "all" {
        return Some(DayFilter::All);
    }
    if let Ok(n) = input.parse::<u8>() {
        if (1..=7).contains(&n) {
            return Some(DayFilter::Day(n - 1));
        }
        return None;
    }
    DAYS.iter()
        .position(|d| *d == input)
        .map(|i| DayFilter::Day(i as u8))
}

/// Ask for a city, a filter mode, and the month/day filters that mode calls
/// for. Returns `Exit` as soon as the user types the exit keyword.
pub fn collect_filters<R, W>(input: &mut R, out: &mut W) -> io::Result<Prompted<FilterSelection>>
where
    R: BufRead,
    W: Write,
{
    writeln!(out, "Hello! Let's explore some US bikeshare data!")?;
    writeln!(out, "Type 'exit' anytime to quit.\n")?;

    let city = match prompt_until_valid(
        input,
        out,
        "Enter city (chicago, new york city, washington): ",
        "Invalid city. Try again.",
        City::parse,
    )? {
        Prompted::Value(city) => city,
        Prompted::Exit => return Ok(Prompted::Exit),
    };

    let mode = match prompt_until_valid(
        input,
        out,
        "Would you like to filter by 'month', 'day', 'both', or 'none'? ",
        "Invalid option. Please choose: month, day, both, or none.",
        parse_filter_mode,
    )? {
        Prompted::Value(mode) => mode,
        Prompted::Exit => return Ok(Prompted::Exit),
    };

    let mut month = MonthFilter::All;
    let mut day = DayFilter::All;

    if matches!(mode, FilterMode::Month | FilterMode::Both) {
        month = match prompt_until_valid(
            input,
            out,
            "Enter month (1-12 or name), or 'all': ",
            "Invalid month.",
            parse_month,
        )? {
            Prompted::Value(month) => month,
            Prompted::Exit => return Ok(Prompted::Exit),
        };
    }

    if matches!(mode, FilterMode::Day | FilterMode::Both) {
        day = match prompt_until_valid(
            input,
            out,
            "Enter day (1-7 or name), or 'all': ",
            "Invalid day.",
            parse_day,
        )? {
            Prompted::Value(day) => day,
            Prompted::Exit => return Ok(Prompted::Exit),
        };
    }

    writeln!(out, "{}", "-".repeat(40))?;
    Ok(Prompted::Value(FilterSelection { city, month, day }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn collect(script: &str) -> (Prompted<FilterSelection>, String) {
        let mut input = Cursor::new(script.to_string());
        let mut out = Vec::new();
        let result = collect_filters(&mut input, &mut out).unwrap();
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_exit_at_city_prompt() {
        let (result, _) = collect("exit\n");
        assert_eq!(result, Prompted::Exit);
    }

    #[test]
    fn test_end_of_input_acts_as_exit() {
        let (result, _) = collect("");
        assert_eq!(result, Prompted::Exit);
    }

    #[test]
    fn test_invalid_city_reprompts() {
        let (result, output) = collect("boston\nchicago\nnone\n");
        assert!(output.contains("Invalid city. Try again."));
        match result {
            Prompted::Value(selection) => {
                assert_eq!(selection.city, City::Chicago);
                assert_eq!(selection.month, MonthFilter::All);
                assert_eq!(selection.day, DayFilter::All);
            }
            Prompted::Exit => panic!("expected a selection"),
        }
    }

    #[test]
    fn test_numeric_month_maps_to_name_position() {
        let (result, _) = collect("new york city\nmonth\n3\n");
        match result {
            Prompted::Value(selection) => {
                assert_eq!(selection.city, City::NewYorkCity);
                assert_eq!(selection.month, MonthFilter::Month(3));
                assert_eq!(selection.month.name(), "march");
                assert_eq!(selection.day, DayFilter::All);
            }
            Prompted::Exit => panic!("expected a selection"),
        }
    }

    #[test]
    fn test_both_mode_asks_month_then_day() {
        let (result, output) = collect("washington\nboth\njune\n7\n");
        match result {
            Prompted::Value(selection) => {
                assert_eq!(selection.month, MonthFilter::Month(6));
                assert_eq!(selection.day, DayFilter::Day(6));
                assert_eq!(selection.day.name(), "sunday");
            }
            Prompted::Exit => panic!("expected a selection"),
        }
        assert!(output.contains("Enter month"));
        assert!(output.contains("Enter day"));
    }

    #[test]
    fn test_out_of_range_month_reprompts() {
        let (result, output) = collect("chicago\nmonth\n13\nall\n");
        assert!(output.contains("Invalid month."));
        match result {
            Prompted::Value(selection) => assert_eq!(selection.month, MonthFilter::All),
            Prompted::Exit => panic!("expected a selection"),
        }
    }

    #[test]
    fn test_exit_at_day_prompt() {
        let (result, _) = collect("chicago\nday\nexit\n");
        assert_eq!(result, Prompted::Exit);
    }

    #[test]
    fn test_input_is_trimmed_and_case_insensitive() {
        let (result, _) = collect("  ChIcAgO \nNONE\n");
        match result {
            Prompted::Value(selection) => assert_eq!(selection.city, City::Chicago),
            Prompted::Exit => panic!("expected a selection"),
        }
    }
}
