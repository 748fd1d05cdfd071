/// The field sets a contact form can be configured with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldSet {
    /// name / email / message
    Basic,
    /// name / mobileNumber / email / subject / message
    Extended,
}

impl FieldSet {
    /// Wire names of the fields, in declaration order.
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            FieldSet::Basic => &["name", "email", "message"],
            FieldSet::Extended => &["name", "mobileNumber", "email", "subject", "message"],
        }
    }
}
