//! # Domain model and client for the remote Registration API
//!
//! Everything the front end knows about attendee registrations lives here:
//! the wire types, the typed HTTP client, and the pure domain helpers the
//! views build on.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | `reqwest`-backed client for the create / lookup / list endpoints |
//! | [`config`] | Deployment configuration (API base URL), fail-fast when absent |
//! | [`error`] | [`ApiError`] and user-facing message derivation |
//! | [`models`] | [`Registration`], [`RegistrationDraft`], filtering and age helpers |

pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use client::{ApiClient, RegisterResponse};
pub use config::ApiConfig;
pub use error::ApiError;
pub use models::{age_on, filter_registrations, Gender, Registration, RegistrationDraft};

/// Whether an email value is worth looking up at all.
///
/// The duplicate pre-check fires on field blur; a blank or obviously
/// malformed value is skipped without a request.
pub fn is_checkable_email(email: &str) -> bool {
    let email = email.trim();
    !email.is_empty() && email.contains('@')
}

#[cfg(test)]
mod tests {
    use super::is_checkable_email;

    #[test]
    fn blank_and_at_less_emails_are_not_checkable() {
        assert!(!is_checkable_email(""));
        assert!(!is_checkable_email("   "));
        assert!(!is_checkable_email("not-an-email"));
    }

    #[test]
    fn anything_with_an_at_sign_is_checkable() {
        assert!(is_checkable_email("ana@example.com"));
        assert!(is_checkable_email("  a@b  "));
    }
}
