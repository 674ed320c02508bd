//! Declarative string-field schema for client-side validation.
//!
//! DESIGN
//! ======
//! A schema is an ordered list of named string fields, each with an ordered
//! list of rules. The first failing rule wins, so a field reports at most one
//! error. The email rule ignores empty input, which leaves `required` as the
//! only rule that can fire on an empty field.

#[cfg(test)]
#[path = "schema_test.rs"]
mod schema_test;

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

/// Non-ASCII letters allowed in local parts and domain labels.
const INTL: &str = r"\x{00A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}";

/// Dot-atom local part, one or more dotted domain labels, alphabetic TLD.
/// `a@localhost` and `user@123.456` are rejected.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let atom = format!(r"[a-z0-9!#$%&'*+\-/=?^_`{{|}}~{INTL}]+");
    let label = format!(r"(?:[a-z0-9{INTL}]|[a-z0-9{INTL}][a-z0-9\-._~{INTL}]*[a-z0-9{INTL}])");
    let tld = format!(r"(?:[a-z{INTL}]|[a-z{INTL}][a-z0-9\-._~{INTL}]*[a-z{INTL}])");
    Regex::new(&format!(r"(?i)^{atom}(?:\.{atom})*@(?:{label}\.)+{tld}$")).expect("email pattern is a valid regex")
});

/// Which rule rejected a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Required,
    EmailFormat,
}

/// Field-level validation failure. Rendered inline, never sent anywhere.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: String,
    pub kind: ErrorKind,
    /// Localized message supplied when the schema was built.
    pub message: String,
}

/// Errors keyed by field name, at most one per field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, ValidationError>);

impl FieldErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&ValidationError> {
        self.0.get(field)
    }

    pub fn insert(&mut self, error: ValidationError) {
        self.0.insert(error.field.clone(), error);
    }

    pub fn remove(&mut self, field: &str) -> Option<ValidationError> {
        self.0.remove(field)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.values()
    }
}

/// Read access to named string fields of a values struct.
pub trait FieldSource {
    /// Current value of `name`, or `None` if the struct has no such field.
    fn field(&self, name: &str) -> Option<&str>;
}

#[derive(Clone, Debug)]
enum Rule {
    Required { message: String },
    Email { message: String },
}

impl Rule {
    fn check(&self, field: &str, value: &str) -> Option<ValidationError> {
        let (kind, message) = match self {
            Self::Required { message } if value.is_empty() => (ErrorKind::Required, message),
            Self::Email { message } if !value.is_empty() && !is_email(value) => (ErrorKind::EmailFormat, message),
            _ => return None,
        };
        Some(ValidationError {
            field: field.to_owned(),
            kind,
            message: message.clone(),
        })
    }
}

/// Rule chain for one string field.
#[derive(Clone, Debug, Default)]
pub struct StringField {
    rules: Vec<Rule>,
}

impl StringField {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject non-empty values that are not a syntactically valid address.
    #[must_use]
    pub fn email(mut self, message: impl Into<String>) -> Self {
        self.rules.push(Rule::Email { message: message.into() });
        self
    }

    /// Reject the empty string.
    #[must_use]
    pub fn required(mut self, message: impl Into<String>) -> Self {
        self.rules.push(Rule::Required { message: message.into() });
        self
    }

    fn check(&self, field: &str, value: &str) -> Option<ValidationError> {
        self.rules.iter().find_map(|rule| rule.check(field, value))
    }
}

/// Object-shaped schema: named fields checked in declaration order.
#[derive(Clone, Debug, Default)]
pub struct Schema {
    fields: Vec<(String, StringField)>,
}

impl Schema {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn field(mut self, name: impl Into<String>, rules: StringField) -> Self {
        self.fields.push((name.into(), rules));
        self
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// Validate every declared field. Missing fields validate as empty.
    pub fn validate<V: FieldSource>(&self, values: &V) -> FieldErrors {
        let mut errors = FieldErrors::default();
        for (name, rules) in &self.fields {
            if let Some(error) = rules.check(name, values.field(name).unwrap_or_default()) {
                errors.insert(error);
            }
        }
        errors
    }

    /// Validate a single field, e.g. when it loses focus.
    /// Returns `None` for valid or undeclared fields.
    pub fn validate_field<V: FieldSource>(&self, values: &V, name: &str) -> Option<ValidationError> {
        let (_, rules) = self.fields.iter().find(|(n, _)| n == name)?;
        rules.check(name, values.field(name).unwrap_or_default())
    }
}

/// Whether `value` matches the email pattern.
#[must_use]
pub fn is_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}
