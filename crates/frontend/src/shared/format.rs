//! Форматирование чисел для подписей графиков

/// Вставляет разделитель тысяч (запятую) в целую часть
fn group_thousands(integer_part: &str) -> String {
    let mut result = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Число с разделителем тысяч и заданным количеством знаков после запятой
///
/// # Примеры
///
/// ```
/// use frontend::shared::format::format_number_with_decimals;
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };

    let sign = if value < 0.0 && formatted.chars().any(|c| c != '0' && c != '.') {
        "-"
    } else {
        ""
    };

    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, group_thousands(integer_part), d),
        None => format!("{}{}", sign, group_thousands(integer_part)),
    }
}

/// Денежная подпись без копеек: `$1,234`
pub fn format_currency(value: f64) -> String {
    let digits = format_number_with_decimals(value, 0);
    match digits.strip_prefix('-') {
        Some(rest) => format!("-${}", rest),
        None => format!("${}", digits),
    }
}

/// Денежная сумма с копейками: `$1,234.50`
pub fn format_currency_exact(value: f64) -> String {
    let digits = format_number_with_decimals(value, 2);
    match digits.strip_prefix('-') {
        Some(rest) => format!("-${}", rest),
        None => format!("${}", digits),
    }
}

/// Короткая подпись для осей: `$2.5M`, `$950k`, `$120`
pub fn format_currency_short(value: f64) -> String {
    let abs = value.abs();
    let sign = if value < 0.0 { "-" } else { "" };

    let (scaled, suffix) = if abs >= 1_000_000_000.0 {
        (abs / 1_000_000_000.0, "B")
    } else if abs >= 1_000_000.0 {
        (abs / 1_000_000.0, "M")
    } else if abs >= 1_000.0 {
        (abs / 1_000.0, "k")
    } else {
        (abs, "")
    };

    let text = format!("{:.1}", scaled);
    let text = text.strip_suffix(".0").unwrap_or(&text);
    format!("{}${}{}", sign, text, suffix)
}

/// Доля в процентах: `12.3%`
pub fn format_percent(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
        assert_eq!(format_number_with_decimals(1234567.0, 0), "1,234,567");
        assert_eq!(format_number_with_decimals(999.0, 0), "999");
        assert_eq!(format_number_with_decimals(-1234.5, 1), "-1,234.5");
        assert_eq!(format_number_with_decimals(-0.001, 2), "0.00");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(1234.4), "$1,234");
        assert_eq!(format_currency(1234567.89), "$1,234,568");
        assert_eq!(format_currency(-250.0), "-$250");
    }

    #[test]
    fn test_format_currency_exact() {
        assert_eq!(format_currency_exact(10.0), "$10.00");
        assert_eq!(format_currency_exact(125.64), "$125.64");
        assert_eq!(format_currency_exact(-1234.5), "-$1,234.50");
    }

    #[test]
    fn test_format_currency_short() {
        assert_eq!(format_currency_short(0.0), "$0");
        assert_eq!(format_currency_short(120.0), "$120");
        assert_eq!(format_currency_short(950_000.0), "$950k");
        assert_eq!(format_currency_short(2_500_000.0), "$2.5M");
        assert_eq!(format_currency_short(1_000_000.0), "$1M");
        assert_eq!(format_currency_short(-1_500.0), "-$1.5k");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.123), "12.3%");
        assert_eq!(format_percent(1.0), "100.0%");
    }
}
