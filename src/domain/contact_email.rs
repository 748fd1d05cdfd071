use validator::ValidateEmail;

#[derive(Debug)]
pub struct ContactEmail(String);

impl ContactEmail {
    pub fn parse(s: &str) -> Result<ContactEmail, String> {
        if s.validate_email() {
            Ok(Self(s.into()))
        } else {
            tracing::error!("`{s}` is not a valid contact email.");
            Err(format!("`{s}` is not a valid contact email."))
        }
    }
}

impl AsRef<str> for ContactEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
