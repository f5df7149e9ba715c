/// Fixed-decimal rendering with thousands separators, e.g. `1,234.57`.
pub fn thousands(value: f64, decimals: usize) -> String {
    let formatted = format!("{value:.decimals$}");
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match frac_part {
        Some(frac_part) => format!("{sign}{grouped}.{frac_part}"),
        None => format!("{sign}{grouped}"),
    }
}

/// `$50,000.00`
pub fn price_usd(value: f64) -> String {
    format!("${}", thousands(value, 2))
}

/// `2.50%`, sign kept for negative changes.
pub fn change_pct(change_24h_pct: f64) -> String {
    format!("{change_24h_pct:.2}%")
}

/// Conversion results carry six decimals.
pub fn converted_amount(value: f64) -> String {
    thousands(value, 6)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thousands_grouping() {
        assert_eq!(thousands(50000.0, 2), "50,000.00");
        assert_eq!(thousands(1234567.891, 2), "1,234,567.89");
        assert_eq!(thousands(999.5, 2), "999.50");
        assert_eq!(thousands(0.0, 2), "0.00");
    }

    #[test]
    fn test_thousands_negative_and_zero_decimals() {
        assert_eq!(thousands(-1234.5, 2), "-1,234.50");
        assert_eq!(thousands(1234.5, 0), "1,235");
    }

    #[test]
    fn test_price_and_change() {
        assert_eq!(price_usd(50000.0), "$50,000.00");
        assert_eq!(change_pct(2.5), "2.50%");
        assert_eq!(change_pct(-5.0), "-5.00%");
    }

    #[test]
    fn test_converted_amount_six_decimals() {
        assert_eq!(converted_amount(16.666666666), "16.666667");
        assert_eq!(converted_amount(50000.0), "50,000.000000");
    }
}
