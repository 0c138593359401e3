//! Turning typed dates into the text form event records store.

use anyhow::Result;
use hangout_core::EventTime;

/// Accept `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM`, or natural language
/// ("next friday", "sat 7pm") and return the stored text form.
pub fn normalize_date(input: &str) -> Result<String> {
    let input = input.trim();

    if input.is_empty() {
        return Ok(String::new());
    }

    if let Ok(time) = input.parse::<EventTime>() {
        return Ok(time.to_string());
    }

    let expanded = expand_abbreviations(input);
    let dt = fuzzydate::parse(&expanded)
        .map_err(|_| anyhow::anyhow!("Could not parse date: \"{}\"", input))?;

    let time = if has_time_component(input) {
        EventTime::DateTimeFloating(dt)
    } else {
        EventTime::Date(dt.date())
    };

    Ok(time.to_string())
}

/// Expand weekday and month abbreviations that fuzzydate doesn't know.
fn expand_abbreviations(input: &str) -> String {
    input
        .to_lowercase()
        .split_whitespace()
        .map(|word| match word {
            "mon" => "monday",
            "tue" | "tues" => "tuesday",
            "wed" => "wednesday",
            "thu" | "thur" | "thurs" => "thursday",
            "fri" => "friday",
            "sat" => "saturday",
            "sun" => "sunday",
            "jan" => "january",
            "feb" => "february",
            "mar" => "march",
            "apr" => "april",
            "jun" => "june",
            "jul" => "july",
            "aug" => "august",
            "sep" | "sept" => "september",
            "oct" => "october",
            "nov" => "november",
            "dec" => "december",
            other => other,
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Whether the input names a time of day (7pm, 19:30, noon, "at 7").
fn has_time_component(input: &str) -> bool {
    let lower = input.to_lowercase();

    if lower.contains("noon") || lower.contains("midnight") {
        return true;
    }

    let bytes = lower.as_bytes();
    for i in 0..bytes.len() {
        let b = bytes[i];

        // am/pm right after a digit, optionally with one space
        if (b == b'a' || b == b'p') && bytes.get(i + 1) == Some(&b'm') {
            let digit_before = i > 0 && bytes[i - 1].is_ascii_digit();
            let digit_space_before = i > 1 && bytes[i - 1] == b' ' && bytes[i - 2].is_ascii_digit();
            if digit_before || digit_space_before {
                return true;
            }
        }

        // HH:MM
        if b == b':'
            && i > 0
            && bytes[i - 1].is_ascii_digit()
            && bytes.get(i + 1).is_some_and(u8::is_ascii_digit)
        {
            return true;
        }
    }

    lower
        .split_whitespace()
        .collect::<Vec<_>>()
        .windows(2)
        .any(|w| w[0] == "at" && w[1].starts_with(|c: char| c.is_ascii_digit()))
}
