//! Display formatting for amounts, dates and sizes (en-US conventions).

use chrono::NaiveDate;

/// Format as US dollars with cents and thousands separators: `$1,234.56`.
pub fn format_currency(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, group_thousands(cents / 100), cents % 100)
}

/// Short dollar amount for KPI tiles: `$950`, `$50K`, `$1.2M`, `$3B`.
///
/// Rounding happens before the unit is chosen, so `999_999.0` reads `$1M`.
pub fn format_compact_currency(amount: f64) -> String {
    const UNITS: [(f64, &str); 3] = [(1e3, "K"), (1e6, "M"), (1e9, "B")];
    let abs = amount.abs();
    let whole = abs.round();
    let sign = if amount < 0.0 && whole > 0.0 { "-" } else { "" };
    if whole < 1e3 {
        return format!("{}${}", sign, whole as u64);
    }
    let mut unit = 0;
    let mut scaled = round_tenths(abs / UNITS[unit].0);
    while scaled >= 1e3 && unit < UNITS.len() - 1 {
        unit += 1;
        scaled = round_tenths(abs / UNITS[unit].0);
    }
    let number = format!("{:.1}", scaled);
    format!("{}${}{}", sign, trim_fraction(&number), UNITS[unit].1)
}

/// One-decimal percentage: `12.5%`.
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Medium date: `Jan 5, 2024`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Human-readable byte count using binary units: `512 B`, `2.3 MB`.
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];
    if bytes < 1024 {
        return format!("{} B", bytes);
    }
    let mut size = bytes as f64 / 1024.0;
    let mut unit = 0;
    while round_tenths(size) >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", round_tenths(size), UNITS[unit])
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn trim_fraction(number: &str) -> &str {
    number.strip_suffix(".0").unwrap_or(number)
}

fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
