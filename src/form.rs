use std::collections::HashMap;

use crate::domain::{ContactEmail, FieldSet, MobileNumber};

/// 表单当前值，按字段名索引
pub struct FormState {
    variant: FieldSet,
    values: HashMap<&'static str, String>,
}

impl FormState {
    pub fn new(variant: FieldSet) -> Self {
        let values = variant
            .fields()
            .iter()
            .map(|field| (*field, String::new()))
            .collect();

        Self { variant, values }
    }

    pub fn variant(&self) -> FieldSet {
        self.variant
    }

    /// Replaces the value of one field, leaving every other field untouched.
    pub fn update(&mut self, field: &str, value: &str) -> Result<(), String> {
        match self.variant.fields().iter().find(|f| **f == field) {
            Some(key) => {
                self.values.insert(key, value.into());
                Ok(())
            }
            None => Err(format!("`{field}` is not a field of the contact form.")),
        }
    }

    pub fn reset(&mut self) {
        for value in self.values.values_mut() {
            value.clear();
        }
    }

    pub fn value(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.variant
            .fields()
            .iter()
            .map(|field| (*field, self.values[field].as_str()))
    }

    /// Mirrors the constraints the enclosing form declares: every field is
    /// required, the email field must be email-shaped, the mobile number must
    /// be ten digits.
    pub fn validate(&self) -> Result<(), String> {
        for (field, value) in self.entries() {
            if value.trim().is_empty() {
                return Err(format!("`{field}` is required."));
            }
        }

        ContactEmail::parse(self.value("email").unwrap_or_default())?;
        if self.variant == FieldSet::Extended {
            MobileNumber::parse(self.value("mobileNumber").unwrap_or_default())?;
        }

        Ok(())
    }
}
