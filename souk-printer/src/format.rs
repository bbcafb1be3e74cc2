//! French number formatting for printed amounts

/// Format a number with a comma decimal separator and space-grouped
/// thousands, e.g. 1234.5 -> "1 234,50"
pub fn format_number(amount: f64) -> String {
    let cents = (amount * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.abs();
    let units = (cents / 100).to_string();
    let frac = cents % 100;

    let mut grouped = String::with_capacity(units.len() + units.len() / 3);
    for (i, c) in units.chars().enumerate() {
        if i > 0 && (units.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }

    format!("{}{},{:02}", sign, grouped, frac)
}

/// Format a quantity; whole values drop the decimals
pub fn format_quantity(qty: f64) -> String {
    if qty.fract().abs() < 1e-9 {
        format!("{:.0}", qty)
    } else {
        format!("{:.2}", qty).replace('.', ",")
    }
}

/// Format a MAD amount for display, e.g. 1234.5 -> "1 234,50 DH"
pub fn format_amount(amount: f64) -> String {
    format!("{} DH", format_number(amount))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0.0), "0,00");
        assert_eq!(format_number(12.5), "12,50");
        assert_eq!(format_number(325.50), "325,50");
        assert_eq!(format_number(1234.5), "1 234,50");
        assert_eq!(format_number(1234567.89), "1 234 567,89");
    }

    #[test]
    fn test_format_number_negative() {
        assert_eq!(format_number(-1250.0), "-1 250,00");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(12.5), "12,50 DH");
        assert_eq!(format_amount(100.0), "100,00 DH");
    }

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(10.0), "10");
        assert_eq!(format_quantity(2.5), "2,50");
    }
}
