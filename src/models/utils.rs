use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

const DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"];

/// Renders an API timestamp as `M/D/YYYY`. Unrecognised input is returned
/// untouched so the operator still sees what the API sent.
pub fn format_date(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return String::new();
    }

    let date = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .ok()
        .or_else(|| {
            DATE_TIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
                .map(|dt| dt.date())
        })
        .or_else(|| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok());

    match date {
        Some(date) => date.format("%-m/%-d/%Y").to_string(),
        None => raw.to_string(),
    }
}

/// en-US grouping, at most three fraction digits.
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount
        .round_dp_with_strategy(3, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let text = rounded.abs().to_string();
    let (integer, fraction) = match text.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (text.as_str(), None),
    };

    let mut out = String::with_capacity(text.len() + text.len() / 3 + 1);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        out.push('-');
    }
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

/// Record text that may be missing, `null` or a bare number. Anything else
/// reads as empty so one bad field never sinks the whole list.
pub fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => text,
        Value::Number(number) => number.to_string(),
        _ => String::new(),
    })
}

pub fn lenient_amount<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Decimal>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(text: &str) -> Decimal {
        Decimal::from_str(text).unwrap()
    }

    #[test]
    fn amounts_are_grouped() {
        assert_eq!(format_amount(dec("0")), "0");
        assert_eq!(format_amount(dec("999")), "999");
        assert_eq!(format_amount(dec("1000")), "1,000");
        assert_eq!(format_amount(dec("1234567.5")), "1,234,567.5");
        assert_eq!(format_amount(dec("50000.00")), "50,000");
        assert_eq!(format_amount(dec("-2500")), "-2,500");
    }

    #[test]
    fn amounts_keep_three_fraction_digits() {
        assert_eq!(format_amount(dec("1.23456")), "1.235");
        assert_eq!(format_amount(dec("0.0005")), "0.001");
    }

    #[test]
    fn dates_in_known_shapes() {
        assert_eq!(format_date("2024-01-15T09:30:00Z"), "1/15/2024");
        assert_eq!(format_date("2024-01-15T09:30:00+01:00"), "1/15/2024");
        assert_eq!(format_date("2024-11-05 23:59:59"), "11/5/2024");
        assert_eq!(format_date("2024-11-05T23:59:59.123"), "11/5/2024");
        assert_eq!(format_date("2024-02-29"), "2/29/2024");
    }

    #[test]
    fn empty_and_unknown_dates() {
        assert_eq!(format_date(""), "");
        assert_eq!(format_date("   "), "");
        assert_eq!(format_date("yesterday"), "yesterday");
    }
}
