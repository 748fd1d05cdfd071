mod contact_email;
mod field_set;
mod mobile_number;

pub use contact_email::ContactEmail;
pub use field_set::FieldSet;
pub use mobile_number::MobileNumber;
