const UNITS: [(f64, &str); 4] = [(1e12, "T"), (1e9, "B"), (1e6, "M"), (1e3, "K")];

/// Formats a number in English compact notation with at most one fraction digit.
///
/// `1234` becomes `1.2K`, `1_500_000` becomes `1.5M` and `999_999` rounds up to `1M`.
/// NaN and infinities format as an empty string.
pub fn format_compact(value: f64) -> String {
    if !value.is_finite() {
        return String::new();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let abs = value.abs();

    let mut unit = UNITS.iter().position(|(size, _)| abs >= *size);
    let mut rounded = round_one_digit(unit.map_or(abs, |i| abs / UNITS[i].0));

    // Rounding can carry into the next unit (999.96 -> 1000 -> 1K).
    if rounded >= 1000.0 {
        let bigger = match unit {
            None => Some(UNITS.len() - 1),
            Some(i) => i.checked_sub(1),
        };
        if let Some(i) = bigger {
            unit = Some(i);
            rounded = round_one_digit(abs / UNITS[i].0);
        }
    }

    let suffix = unit.map_or("", |i| UNITS[i].1);
    if rounded.fract() == 0.0 {
        format!("{sign}{rounded:.0}{suffix}")
    } else {
        format!("{sign}{rounded:.1}{suffix}")
    }
}

/// [`format_compact`] for string-encoded counts; missing, blank or non-numeric input
/// formats as an empty string.
pub fn format_compact_str(value: Option<&str>) -> String {
    let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return String::new();
    };
    value
        .parse::<f64>()
        .map(format_compact)
        .unwrap_or_default()
}

fn round_one_digit(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
