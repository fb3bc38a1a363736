/// Format a budget amount with a currency prefix and thousands separators,
/// keeping up to three fraction digits: `15000.0` → `₹15,000`,
/// `1234.5` → `₹1,234.5`. A negative sign goes after the symbol: `₹-1,500`.
pub fn format_amount(symbol: &str, value: f64) -> String {
    if !value.is_finite() {
        return format!("{symbol}0");
    }
    let fixed = format!("{:.3}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && (grouped != "0" || !frac_part.is_empty()) {
        "-"
    } else {
        ""
    };
    if frac_part.is_empty() {
        format!("{symbol}{sign}{grouped}")
    } else {
        format!("{symbol}{sign}{grouped}.{frac_part}")
    }
}

/// Progress as a percent label.
pub fn format_percent(progress: u8) -> String {
    format!("{progress}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_amount("₹", 88000.0), "₹88,000");
        assert_eq!(format_amount("₹", 1_234_567.0), "₹1,234,567");
        assert_eq!(format_amount("$", 999.0), "$999");
        assert_eq!(format_amount("$", 0.0), "$0");
    }

    #[test]
    fn keeps_short_fractions() {
        assert_eq!(format_amount("$", 1234.5), "$1,234.5");
        assert_eq!(format_amount("$", 0.125), "$0.125");
        assert_eq!(format_amount("$", 2.00049), "$2");
    }

    #[test]
    fn negatives_and_non_finite() {
        assert_eq!(format_amount("$", -1500.0), "$-1,500");
        assert_eq!(format_amount("₹", -1234.5), "₹-1,234.5");
        assert_eq!(format_amount("$", -0.0001), "$0");
        assert_eq!(format_amount("$", f64::NAN), "$0");
    }

    #[test]
    fn percent_label() {
        assert_eq!(format_percent(75), "75%");
    }
}
