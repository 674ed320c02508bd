//! Validation rules of the login form.

use super::values::{EMAIL_FIELD, PASSWORD_FIELD};
use crate::form::schema::{Schema, StringField};
use crate::i18n::Translator;

/// Email must be present and well-formed; password must be present.
pub fn login_schema(t: Translator) -> Schema {
    Schema::new()
        .field(
            EMAIL_FIELD,
            StringField::new()
                .email(t.t("auth", "error", "email"))
                .required(t.t("auth", "error", "required")),
        )
        .field(PASSWORD_FIELD, StringField::new().required(t.t("auth", "error", "required")))
}
