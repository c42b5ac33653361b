//! Helpers for details forms that edit numbers as text

/// Parses a money amount as typed; an empty field means zero.
/// Accepts a decimal comma. `field` names the input in the error message.
pub fn parse_amount(field: &str, text: &str) -> Result<f64, String> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(0.0);
    }
    let value = text
        .replace(',', ".")
        .parse::<f64>()
        .map_err(|_| format!("{field} \"{text}\" is not a number"))?;
    if !value.is_finite() {
        return Err(format!("{field} \"{text}\" is not a number"));
    }
    Ok(value)
}

/// Formats an amount for an input field
pub fn format_amount(value: f64) -> String {
    format!("{value:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("Price", ""), Ok(0.0));
        assert_eq!(parse_amount("Price", " 250 "), Ok(250.0));
        assert_eq!(parse_amount("Price", "99,5"), Ok(99.5));
        assert_eq!(
            parse_amount("Daily rate", "a lot"),
            Err("Daily rate \"a lot\" is not a number".to_string())
        );
    }

    #[test]
    fn test_parse_amount_rejects_non_finite() {
        assert!(parse_amount("Price", "NaN").is_err());
        assert!(parse_amount("Price", "inf").is_err());
        assert!(parse_amount("Daily rate", "-infinity").is_err());
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(1200.0), "1200.00");
        assert_eq!(format_amount(0.126), "0.13");
    }
}
