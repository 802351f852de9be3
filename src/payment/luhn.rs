//! Luhn checksum.

/// Checks a digit string against the Luhn checksum.
///
/// Every second digit from the right is doubled (subtracting 9 when the
/// product exceeds 9) and the digits summed; the number is valid when the
/// sum is a multiple of 10. Empty strings and anything containing a
/// non-digit are rejected.
pub fn luhn_check(number: &str) -> bool {
    if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    let checksum: u32 = number
        .bytes()
        .rev()
        .enumerate()
        .map(|(position, byte)| {
            let digit = u32::from(byte - b'0');
            if position % 2 == 1 {
                let doubled = digit * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                digit
            }
        })
        .sum();

    checksum % 10 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_valid_numbers() {
        assert!(luhn_check("4532015112830366"));
        assert!(luhn_check("5555555555554444"));
        assert!(luhn_check("378282246310005"));
        assert!(luhn_check("0"));
    }

    #[test]
    fn test_single_digit_change_is_detected() {
        assert!(!luhn_check("4532015112830367"));
        assert!(!luhn_check("5555555555554445"));
    }

    #[test]
    fn test_rejects_empty_and_non_digits() {
        assert!(!luhn_check(""));
        assert!(!luhn_check("4532-0151-1283-0366"));
        assert!(!luhn_check("453201511283036a"));
        assert!(!luhn_check("٤٥٣٢"));
    }
}
