#[derive(Debug)]
pub struct MobileNumber(String);

impl MobileNumber {
    /// Accepts exactly ten ASCII digits.
    pub fn parse(s: &str) -> Result<MobileNumber, String> {
        let is_ten_chars = s.chars().count() == 10;
        let all_digits = s.chars().all(|c| c.is_ascii_digit());

        if !is_ten_chars || !all_digits {
            return Err(format!("`{s}` is not a valid mobile number."));
        }
        Ok(Self(s.into()))
    }
}

impl AsRef<str> for MobileNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use claim::{assert_err, assert_ok};

    use crate::domain::MobileNumber;

    #[test]
    fn valid_ten_digit_number() {
        assert_ok!(MobileNumber::parse("0123456789"));
        assert_ok!(MobileNumber::parse("9876543210"));
    }

    #[test]
    fn number_is_empty() {
        assert_err!(MobileNumber::parse(""));
        assert_err!(MobileNumber::parse(" "));
    }

    #[test]
    fn number_has_wrong_length() {
        assert_err!(MobileNumber::parse("123456789"));
        assert_err!(MobileNumber::parse("01234567890"));
    }

    #[test]
    fn number_contains_non_digits() {
        assert_err!(MobileNumber::parse("01234S6789"));
        assert_err!(MobileNumber::parse("0123 45678"));
        assert_err!(MobileNumber::parse("+123456789"));
    }
}
