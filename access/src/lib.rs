//! # access
//!
//! Sign-in and accessibility-preference logic for the ChemLab pages.
//!
//! Everything here is browser-agnostic: persistence goes through the
//! [`store::KvStore`] trait, which the client implements over
//! `localStorage` and tests implement in memory. Storage is advisory; a
//! failed read degrades to defaults, never to an error page.
//!
//! | Module | Role |
//! |--------|------|
//! | [`store`] | `KvStore` trait, in-memory store, JSON helpers |
//! | [`validate`] | Email / password / name validators |
//! | [`credentials`] | Seeded test accounts plus locally registered users |
//! | [`forms`] | Login, registration and recovery submission contracts |
//! | [`prefs`] | Theme, font size, high contrast, remember-login |

pub mod credentials;
pub mod forms;
pub mod prefs;
pub mod store;
pub mod validate;

pub use credentials::{Accounts, AuthError, UserRecord};
pub use forms::{Field, FieldErrors, FormError};
pub use store::{KvStore, MemoryStore, StoreError};
