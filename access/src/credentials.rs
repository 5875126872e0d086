//! Demo credential store.
//!
//! Passwords are kept and compared in plain text. This is a teaching page
//! with no server; nothing here is a security boundary.

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;

use serde::{Deserialize, Serialize};

use crate::store::{KvStore, StoreError, load_json, save_json};
use crate::validate::normalize_email;

/// Storage key for the registered-user list.
pub const USERS_KEY: &str = "users";

/// Storage key for the remember-login flag.
pub const REMEMBER_KEY: &str = "rememberLogin";

/// Accounts that always exist, as `(email, password)`.
pub const SEEDED_ACCOUNTS: [(&str, &str); 3] = [
    ("student@chemistry.edu", "Password123"),
    ("teacher@chemistry.edu", "Teacher123"),
    ("guest@example.com", "Guest123"),
];

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("incorrect email or password")]
    InvalidCredentials,
    #[error("email already registered")]
    EmailTaken,
    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}

/// A locally registered user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub name: String,
    /// Always stored normalized (trimmed, lower-case).
    pub email: String,
    pub password: String,
}

/// Seeded accounts plus users registered into a [`KvStore`].
pub struct Accounts<S: KvStore> {
    store: S,
}

impl<S: KvStore> Accounts<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Registered users. A missing or malformed list reads as empty.
    #[must_use]
    pub fn users(&self) -> Vec<UserRecord> {
        load_json(&self.store, USERS_KEY).unwrap_or_default()
    }

    /// Whether `email` (any case) belongs to a seeded or registered account.
    #[must_use]
    pub fn is_registered(&self, email: &str) -> bool {
        let email = normalize_email(email);
        SEEDED_ACCOUNTS.iter().any(|(e, _)| *e == email)
            || self.users().iter().any(|u| normalize_email(&u.email) == email)
    }

    /// Check a sign-in attempt. Seeded accounts are consulted first.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] if no account matches.
    pub fn login(&self, email: &str, password: &str) -> Result<(), AuthError> {
        let email = normalize_email(email);
        let seeded = SEEDED_ACCOUNTS
            .iter()
            .any(|(e, p)| *e == email && *p == password);
        if seeded {
            log::info!("seeded account signed in");
            return Ok(());
        }
        let registered = self
            .users()
            .iter()
            .any(|u| normalize_email(&u.email) == email && u.password == password);
        if registered {
            log::info!("registered account signed in");
            return Ok(());
        }
        log::debug!("sign-in rejected");
        Err(AuthError::InvalidCredentials)
    }

    /// Register a new user. Emails are unique ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::EmailTaken`] if the email is already in use, or
    /// [`AuthError::Store`] if the user list cannot be written.
    pub fn register(&mut self, name: &str, email: &str, password: &str) -> Result<UserRecord, AuthError> {
        if self.is_registered(email) {
            return Err(AuthError::EmailTaken);
        }
        let record = UserRecord {
            name: name.trim().to_owned(),
            email: normalize_email(email),
            password: password.to_owned(),
        };
        let mut users = self.users();
        users.push(record.clone());
        save_json(&mut self.store, USERS_KEY, &users)?;
        log::info!("registered user {} ({} total)", record.email, users.len());
        Ok(record)
    }

    /// Whether the user asked to be remembered on this device.
    #[must_use]
    pub fn remember_login(&self) -> bool {
        matches!(self.store.get(REMEMBER_KEY), Ok(Some(v)) if v == "true")
    }

    /// Persist the remember-login choice.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Store`] if the flag cannot be written.
    pub fn set_remember_login(&mut self, remember: bool) -> Result<(), AuthError> {
        self.store
            .set(REMEMBER_KEY, if remember { "true" } else { "false" })?;
        Ok(())
    }
}
