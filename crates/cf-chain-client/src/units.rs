//! Conversion between ether strings and wei.

use alloy_primitives::U256;

pub const ETHER_DECIMALS: usize = 18;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UnitError {
    #[error("amount is empty")]
    Empty,
    #[error("`{0}` is not a decimal amount")]
    Invalid(String),
    #[error("at most {ETHER_DECIMALS} decimal places are supported")]
    TooPrecise,
    #[error("amount is too large")]
    Overflow,
}

/// Parse a decimal ether amount such as `"0.5"` or `"12"` into wei.
pub fn parse_ether(input: &str) -> Result<U256, UnitError> {
    let text = input.trim();
    if text.is_empty() {
        return Err(UnitError::Empty);
    }

    let (whole, fraction) = match text.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (text, ""),
    };

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if (whole.is_empty() && fraction.is_empty()) || !all_digits(whole) || !all_digits(fraction) {
        return Err(UnitError::Invalid(text.to_owned()));
    }
    if fraction.len() > ETHER_DECIMALS {
        return Err(UnitError::TooPrecise);
    }

    let mut digits = String::with_capacity(whole.len() + ETHER_DECIMALS);
    digits.push_str(whole);
    digits.push_str(fraction);
    digits.extend(std::iter::repeat_n('0', ETHER_DECIMALS - fraction.len()));

    U256::from_str_radix(&digits, 10).map_err(|_| UnitError::Overflow)
}

/// Render wei as an ether amount without trailing zeros (`500000000000000000` → `"0.5"`).
pub fn format_ether(wei: U256) -> String {
    let digits = wei.to_string();
    let padded = if digits.len() <= ETHER_DECIMALS {
        format!("{digits:0>width$}", width = ETHER_DECIMALS + 1)
    } else {
        digits
    };

    let split = padded.len() - ETHER_DECIMALS;
    let (whole, fraction) = padded.split_at(split);
    let fraction = fraction.trim_end_matches('0');
    if fraction.is_empty() {
        whole.to_owned()
    } else {
        format!("{whole}.{fraction}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wei(s: &str) -> U256 {
        U256::from_str_radix(s, 10).unwrap()
    }

    #[test]
    fn parses_fractional_ether() {
        assert_eq!(parse_ether("0.5").unwrap(), wei("500000000000000000"));
        assert_eq!(parse_ether(" 2 ").unwrap(), wei("2000000000000000000"));
        assert_eq!(parse_ether(".25").unwrap(), wei("250000000000000000"));
        assert_eq!(parse_ether("0.000000000000000001").unwrap(), U256::from(1u64));
    }

    #[test]
    fn rejects_malformed_amounts() {
        assert_eq!(parse_ether(""), Err(UnitError::Empty));
        assert_eq!(parse_ether("."), Err(UnitError::Invalid(".".into())));
        assert!(matches!(parse_ether("-1"), Err(UnitError::Invalid(_))));
        assert!(matches!(parse_ether("1e3"), Err(UnitError::Invalid(_))));
        assert!(matches!(parse_ether("1.2.3"), Err(UnitError::Invalid(_))));
        assert_eq!(parse_ether("0.0000000000000000001"), Err(UnitError::TooPrecise));
        assert_eq!(parse_ether(&"9".repeat(80)), Err(UnitError::Overflow));
    }

    #[test]
    fn formats_wei_for_display() {
        assert_eq!(format_ether(U256::ZERO), "0");
        assert_eq!(format_ether(U256::from(1u64)), "0.000000000000000001");
        assert_eq!(format_ether(wei("1500000000000000000")), "1.5");
        assert_eq!(format_ether(wei("42000000000000000000")), "42");
    }

    #[test]
    fn display_value_survives_conversion() {
        for amount in ["0.5", "1", "3.14159", "1000000", "0.000001", "12.000000000000000001"] {
            let back = format_ether(parse_ether(amount).unwrap());
            assert_eq!(back, amount);
        }
        // normalised forms come back canonical
        assert_eq!(format_ether(parse_ether("01.50").unwrap()), "1.5");
    }
}
