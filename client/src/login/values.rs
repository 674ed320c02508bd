//! Raw values of the login form.

use crate::form::schema::FieldSource;
use crate::form::shell::FieldSink;

pub const EMAIL_FIELD: &str = "email";
pub const PASSWORD_FIELD: &str = "password";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginValues {
    pub email: String,
    pub password: String,
}

impl LoginValues {
    /// Initial values at mount: email from the `email` query parameter,
    /// password always empty.
    pub fn prefilled(email: Option<String>) -> Self {
        Self {
            email: email.unwrap_or_default(),
            password: String::new(),
        }
    }
}

impl FieldSource for LoginValues {
    fn field(&self, name: &str) -> Option<&str> {
        match name {
            EMAIL_FIELD => Some(&self.email),
            PASSWORD_FIELD => Some(&self.password),
            _ => None,
        }
    }
}

impl FieldSink for LoginValues {
    fn set_field(&mut self, name: &str, value: String) -> bool {
        match name {
            EMAIL_FIELD => self.email = value,
            PASSWORD_FIELD => self.password = value,
            _ => return false,
        }
        true
    }
}
