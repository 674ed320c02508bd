//! Form state container: field values, field errors, and submit lifecycle.
//!
//! DESIGN
//! ======
//! The shell is a plain struct so it can live inside an `RwSignal` in the
//! view layer and be driven directly in tests. It never performs I/O; the
//! async part of a submit lives in `form::submit`, and callers bracket it with
//! `begin_submit` and `succeed`/`fail`.
//!
//! LIFECYCLE
//! =========
//! `Idle -> Submitting -> { Success, Failed }`. Editing a field moves `Failed`
//! back to `Idle`. `Success` is terminal. A second submit while one is in
//! flight is refused.

#[cfg(test)]
#[path = "shell_test.rs"]
mod shell_test;

use super::schema::{FieldErrors, FieldSource, Schema};

/// Where the form is in its submit lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Failed,
}

/// Why `begin_submit` did not start a submission.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitBlocked {
    #[error("a submission is already in flight")]
    InFlight,
    #[error("the form has already been submitted")]
    Completed,
    #[error("{} field(s) failed validation", .0.len())]
    Invalid(FieldErrors),
}

/// Write access to named string fields of a values struct.
pub trait FieldSink {
    /// Set `name` to `value`. Returns `false` if the struct has no such field.
    fn set_field(&mut self, name: &str, value: String) -> bool;
}

#[derive(Clone, Debug)]
pub struct FormShell<V> {
    values: V,
    schema: Schema,
    status: SubmitStatus,
    errors: FieldErrors,
    submit_error: Option<String>,
}

impl<V> FormShell<V> {
    pub fn new(values: V, schema: Schema) -> Self {
        Self {
            values,
            schema,
            status: SubmitStatus::Idle,
            errors: FieldErrors::default(),
            submit_error: None,
        }
    }

    pub fn values(&self) -> &V {
        &self.values
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Inline error message for `field`, if any.
    pub fn field_error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(|e| e.message.as_str())
    }

    /// Message from the last failed remote call.
    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    /// Swap the rules, e.g. after the UI language changed. Existing errors
    /// keep their old messages until the next validation.
    pub fn set_schema(&mut self, schema: Schema) {
        self.schema = schema;
    }

    /// Mark the in-flight submission as successful.
    pub fn succeed(&mut self) {
        if self.status == SubmitStatus::Submitting {
            self.status = SubmitStatus::Success;
        }
    }

    /// Mark the in-flight submission as failed and surface `message`.
    pub fn fail(&mut self, message: impl Into<String>) {
        if self.status == SubmitStatus::Submitting {
            self.status = SubmitStatus::Failed;
            self.submit_error = Some(message.into());
        }
    }
}

impl<V: FieldSource + FieldSink + Clone> FormShell<V> {
    /// Update a field from user input. Clears that field's error and leaves
    /// the `Failed` state.
    pub fn set_field(&mut self, name: &str, value: String) {
        if !self.values.set_field(name, value) {
            return;
        }
        self.errors.remove(name);
        if self.status == SubmitStatus::Failed {
            self.status = SubmitStatus::Idle;
            self.submit_error = None;
        }
    }

    /// Validate one field after it loses focus.
    pub fn touch(&mut self, name: &str) {
        match self.schema.validate_field(&self.values, name) {
            Some(error) => self.errors.insert(error),
            None => {
                self.errors.remove(name);
            }
        }
    }

    /// Validate all fields and, if they pass, enter `Submitting` and hand
    /// back a snapshot of the values to transform.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitBlocked`] if a submission is in flight, the form has
    /// already succeeded, or validation failed. Validation failures are also
    /// recorded as field errors.
    pub fn begin_submit(&mut self) -> Result<V, SubmitBlocked> {
        match self.status {
            SubmitStatus::Submitting => return Err(SubmitBlocked::InFlight),
            SubmitStatus::Success => return Err(SubmitBlocked::Completed),
            SubmitStatus::Idle | SubmitStatus::Failed => {}
        }

        self.errors = self.schema.validate(&self.values);
        if !self.errors.is_empty() {
            return Err(SubmitBlocked::Invalid(self.errors.clone()));
        }

        self.status = SubmitStatus::Submitting;
        self.submit_error = None;
        Ok(self.values.clone())
    }
}
