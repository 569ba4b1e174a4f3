use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use rust_decimal::Decimal;

pub fn parse_decimal(field: &str, field_name: &str) -> Result<Decimal> {
    field
        .trim()
        .parse::<Decimal>()
        .with_context(|| format!("Failed to parse {} '{}'", field_name, field))
}

pub fn format_money(value: Decimal) -> String {
    let rounded = value.round_dp(2);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let text = format!("{:.2}", rounded.abs());
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::new();
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{}${}.{}", sign, grouped, fraction)
}

pub fn format_percent(value: Option<Decimal>) -> String {
    match value {
        Some(pct) if pct >= Decimal::ZERO => format!("+{:.2}%", pct),
        Some(pct) => format!("{:.2}%", pct),
        None => String::from("n/a"),
    }
}

pub fn format_updated(at: Option<&DateTime<Local>>) -> String {
    at.map(|dt| dt.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| String::from("never"))
}
