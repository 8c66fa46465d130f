//! Display formatting for amounts and trends shown on the dashboard cards

/// Group the integer part in threes with commas, keeping up to three
/// fractional digits with trailing zeros dropped: `12345.5` → `"12,345.5"`.
pub fn group_thousands(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let formatted = format!("{:.3}", value.abs());
    let (int_part, frac_part) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(formatted.len() + int_part.len() / 3 + 1);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }

    if value < 0.0 && out.chars().any(|c| c.is_ascii_digit() && c != '0') {
        out.insert(0, '-');
    }
    out
}

/// Dollar amount with thousands separators: `"$1,250"`. The sign follows
/// the dollar sign, as the dashboard has always shown losses: `"$-350"`.
pub fn format_currency(value: f64) -> String {
    format!("${}", group_thousands(value))
}

/// Plain price as listed in the marketplace: `"$49.99"`
pub fn format_price(price: f64) -> String {
    format!("${}", price)
}

/// Trend magnitude as a percentage; direction is shown separately
pub fn format_trend(trend: f64) -> String {
    format!("{}%", trend.abs())
}
