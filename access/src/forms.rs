//! Submission contracts for the login, registration and recovery forms.
//!
//! Each `validate` either returns the cleaned values or the first failing
//! field with the message to show next to it. The caller focuses
//! [`FormError::field`]; nothing is persisted here.
//!
//! `check` validates a single field (run as the user leaves or edits it) and
//! `errors` collects every failing field at once.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use serde::Serialize;

use crate::validate::{is_filled, is_valid_email, is_valid_name, is_valid_password};

pub const MSG_EMAIL: &str = "Please enter a valid email address";
pub const MSG_PASSWORD: &str = "Password must be at least 8 characters and include letters and numbers";
pub const MSG_NAME: &str = "Name must be at least 2 characters";
pub const MSG_REQUIRED: &str = "This field is required";
pub const MSG_MISMATCH: &str = "Passwords do not match";
pub const MSG_TERMS: &str = "You must accept the terms and conditions";

/// A form control that can fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Field {
    LoginEmail,
    LoginPassword,
    RegisterName,
    RegisterEmail,
    RegisterPassword,
    ConfirmPassword,
    AcceptTerms,
    RecoveryEmail,
}

impl Field {
    /// Element id of the control in the page markup.
    #[must_use]
    pub fn dom_id(self) -> &'static str {
        match self {
            Self::LoginEmail => "login-email",
            Self::LoginPassword => "login-password",
            Self::RegisterName => "register-name",
            Self::RegisterEmail => "register-email",
            Self::RegisterPassword => "register-password",
            Self::ConfirmPassword => "confirm-password",
            Self::AcceptTerms => "accept-terms",
            Self::RecoveryEmail => "recovery-email",
        }
    }
}

/// A field that failed and why.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct FormError {
    pub field: Field,
    pub message: &'static str,
}

impl FormError {
    fn new(field: Field, message: &'static str) -> Self {
        Self { field, message }
    }
}

fn fail(ok: bool, field: Field, message: &'static str) -> Option<FormError> {
    if ok { None } else { Some(FormError::new(field, message)) }
}

fn first_error(errors: FieldErrors) -> Result<(), FormError> {
    match errors.0.into_iter().next() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Per-field error state for one or more forms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<FormError>);

impl FieldErrors {
    fn collect(fields: &[Field], check: impl Fn(Field) -> Option<FormError>) -> Self {
        Self(fields.iter().filter_map(|f| check(*f)).collect())
    }

    #[must_use]
    pub fn get(&self, field: Field) -> Option<&FormError> {
        self.0.iter().find(|e| e.field == field)
    }

    #[must_use]
    pub fn is_invalid(&self, field: Field) -> bool {
        self.get(field).is_some()
    }

    /// The earliest failing field in form order.
    #[must_use]
    pub fn first(&self) -> Option<&FormError> {
        self.0.first()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Replace the state of `field`: mark it with `error`, or clear it on `None`.
    pub fn set(&mut self, field: Field, error: Option<FormError>) {
        self.0.retain(|e| e.field != field);
        if let Some(err) = error.filter(|e| e.field == field) {
            self.0.push(err);
        }
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

/// Raw login form values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub remember: bool,
}

/// Login values that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
    pub remember: bool,
}

impl LoginForm {
    pub const FIELDS: [Field; 2] = [Field::LoginEmail, Field::LoginPassword];

    /// Validate one field. Fields of other forms always pass.
    #[must_use]
    pub fn check(&self, field: Field) -> Option<FormError> {
        match field {
            Field::LoginEmail => fail(is_valid_email(self.email.trim()), field, MSG_EMAIL),
            Field::LoginPassword => {
                let password = self.password.trim();
                fail(is_filled(password), field, MSG_REQUIRED)
                    .or_else(|| fail(is_valid_password(password), field, MSG_PASSWORD))
            }
            _ => None,
        }
    }

    /// Every failing field, email first.
    #[must_use]
    pub fn errors(&self) -> FieldErrors {
        FieldErrors::collect(&Self::FIELDS, |f| self.check(f))
    }

    /// # Errors
    ///
    /// Returns the first invalid field: email, then password.
    pub fn validate(&self) -> Result<LoginInput, FormError> {
        first_error(self.errors())?;
        Ok(LoginInput {
            email: self.email.trim().to_owned(),
            password: self.password.trim().to_owned(),
            remember: self.remember,
        })
    }
}

/// Raw registration form values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm: String,
    pub accept_terms: bool,
}

/// Registration values that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl RegisterForm {
    /// Submission order: the terms box is checked before any text field.
    pub const FIELDS: [Field; 5] = [
        Field::AcceptTerms,
        Field::RegisterName,
        Field::RegisterEmail,
        Field::RegisterPassword,
        Field::ConfirmPassword,
    ];

    /// Validate one field. Fields of other forms always pass.
    #[must_use]
    pub fn check(&self, field: Field) -> Option<FormError> {
        match field {
            Field::AcceptTerms => fail(self.accept_terms, field, MSG_TERMS),
            Field::RegisterName => fail(is_valid_name(&self.name), field, MSG_NAME),
            Field::RegisterEmail => fail(is_valid_email(self.email.trim()), field, MSG_EMAIL),
            Field::RegisterPassword => fail(is_valid_password(self.password.trim()), field, MSG_PASSWORD),
            Field::ConfirmPassword => fail(is_filled(&self.confirm), field, MSG_REQUIRED)
                .or_else(|| fail(self.confirm == self.password, field, MSG_MISMATCH)),
            _ => None,
        }
    }

    /// Every failing field, in [`Self::FIELDS`] order.
    #[must_use]
    pub fn errors(&self) -> FieldErrors {
        FieldErrors::collect(&Self::FIELDS, |f| self.check(f))
    }

    /// # Errors
    ///
    /// Returns the first invalid field, in order: terms, name, email,
    /// password, confirmation.
    pub fn validate(&self) -> Result<RegisterInput, FormError> {
        first_error(self.errors())?;
        Ok(RegisterInput {
            name: self.name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            password: self.password.clone(),
        })
    }
}

/// Raw password-recovery form values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecoveryForm {
    pub email: String,
}

impl RecoveryForm {
    pub const FIELDS: [Field; 1] = [Field::RecoveryEmail];

    #[must_use]
    pub fn check(&self, field: Field) -> Option<FormError> {
        match field {
            Field::RecoveryEmail => fail(is_valid_email(self.email.trim()), field, MSG_EMAIL),
            _ => None,
        }
    }

    #[must_use]
    pub fn errors(&self) -> FieldErrors {
        FieldErrors::collect(&Self::FIELDS, |f| self.check(f))
    }

    /// # Errors
    ///
    /// Returns [`Field::RecoveryEmail`] if the email is invalid.
    pub fn validate(&self) -> Result<String, FormError> {
        first_error(self.errors())?;
        Ok(self.email.trim().to_owned())
    }
}
