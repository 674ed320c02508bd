//! Credential transform: raw form values to the wire payload.

#[cfg(test)]
#[path = "transform_test.rs"]
mod transform_test;

use serde::Serialize;
use time::format_description::well_known::Rfc3339;
use time::{OffsetDateTime, UtcOffset};

use super::values::LoginValues;
use crate::util::crypto::{self, PasswordDigest};

/// Body of `POST /api/auth/login`. Built once per submit attempt.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SubmitPayload {
    email: String,
    password: PasswordDigest,
    now: String,
}

impl SubmitPayload {
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &PasswordDigest {
        &self.password
    }

    /// Client timestamp, RFC 3339 in UTC.
    pub fn now(&self) -> &str {
        &self.now
    }
}

/// Build the payload stamped with the current time.
pub fn transform(values: &LoginValues) -> SubmitPayload {
    transform_at(values, OffsetDateTime::now_utc())
}

/// Build the payload stamped with `now`.
pub fn transform_at(values: &LoginValues, now: OffsetDateTime) -> SubmitPayload {
    let now = now.to_offset(UtcOffset::UTC);
    SubmitPayload {
        email: values.email.clone(),
        password: crypto::hash(&values.password),
        now: now.format(&Rfc3339).unwrap_or_else(|_| now.unix_timestamp().to_string()),
    }
}
