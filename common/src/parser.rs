//! Claim value parser
//!
//! `valor_causa` arrives as a pt-BR formatted string ("R$ 1.234,56").
//! Every consumer (bucket tabs, sorting, CLI totals) goes through
//! [`parse_valor_causa`] so the numeric interpretation is identical everywhere.

const CURRENCY_PREFIX: &str = "R$";

/// Parse a pt-BR currency string into a number
///
/// Steps: strip the `R$` prefix, drop `.` thousands separators, turn the
/// decimal comma into a point, parse as `f64`.
///
/// Never fails: empty, unparsable or non-finite input yields `0.0`.
///
/// # Examples
/// ```
/// use processos_common::parse_valor_causa;
///
/// assert_eq!(parse_valor_causa("1.234,56"), 1234.56);
/// assert_eq!(parse_valor_causa("R$ 900,00"), 900.0);
/// assert_eq!(parse_valor_causa("n/d"), 0.0);
/// ```
pub fn parse_valor_causa(raw: &str) -> f64 {
    let trimmed = raw.trim();
    let unprefixed = trimmed
        .strip_prefix(CURRENCY_PREFIX)
        .unwrap_or(trimmed)
        .trim();

    let normalized: String = unprefixed
        .chars()
        .filter(|c| *c != '.' && !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    match normalized.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// Parse an arbitrary JSON value
///
/// Only strings are interpreted; numbers, null, objects etc. yield `0.0`,
/// matching how the dashboard treats malformed rows.
pub fn parse_value(value: &serde_json::Value) -> f64 {
    match value.as_str() {
        Some(s) => parse_valor_causa(s),
        None => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // =============================================
    // parse_valor_causa
    // =============================================

    #[test]
    fn test_parse_thousands_and_decimal_comma() {
        assert_eq!(parse_valor_causa("1.234,56"), 1234.56);
        assert_eq!(parse_valor_causa("150.000,00"), 150000.0);
        assert_eq!(parse_valor_causa("1.200.000,99"), 1200000.99);
        assert_eq!(parse_valor_causa("900,00"), 900.0);
        assert_eq!(parse_valor_causa("12,30"), 12.3);
    }

    #[test]
    fn test_parse_matches_pattern_grid() {
        // \d{1,3}(\.\d{3})*,\d{2}
        let cases = [
            ("0,01", 0.01),
            ("999,99", 999.99),
            ("1.000,00", 1000.0),
            ("12.345,67", 12345.67),
            ("123.456.789,10", 123456789.10),
        ];
        for (input, expected) in cases {
            let parsed = parse_valor_causa(input);
            assert!((parsed - expected).abs() < 1e-9, "{} -> {}", input, parsed);
        }
    }

    #[test]
    fn test_parse_strips_currency_prefix() {
        assert_eq!(parse_valor_causa("R$ 1.234,56"), 1234.56);
        assert_eq!(parse_valor_causa("R$1.234,56"), 1234.56);
        assert_eq!(parse_valor_causa("  R$\u{a0}500.000,00 "), 500000.0);
    }

    #[test]
    fn test_parse_unparsable_is_zero() {
        assert_eq!(parse_valor_causa(""), 0.0);
        assert_eq!(parse_valor_causa("R$"), 0.0);
        assert_eq!(parse_valor_causa("a definir"), 0.0);
        assert_eq!(parse_valor_causa("1,2,3"), 0.0);
        assert_eq!(parse_valor_causa("inf"), 0.0);
        assert_eq!(parse_valor_causa("NaN"), 0.0);
    }

    // =============================================
    // parse_value
    // =============================================

    #[test]
    fn test_parse_value_non_string_is_zero() {
        assert_eq!(parse_value(&json!(null)), 0.0);
        assert_eq!(parse_value(&json!(1234.5)), 0.0);
        assert_eq!(parse_value(&json!(true)), 0.0);
        assert_eq!(parse_value(&json!({"valor": "1,00"})), 0.0);
        assert_eq!(parse_value(&json!(["1,00"])), 0.0);
    }

    #[test]
    fn test_parse_value_string() {
        assert_eq!(parse_value(&json!("2.500,00")), 2500.0);
    }
}
