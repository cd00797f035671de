//! Authenticated identity and the profile-edit rules.
//!
//! The session keeps a copy of the password the user signed in with. That
//! copy exists solely so the profile editor can reject re-using the current
//! password without a round trip. It is a usability hint, never an access
//! control: the backend remains the only authority on credentials.

use serde::{Deserialize, Serialize};

use crate::core::error::ConsoleError;
use crate::core::remote::{
    Credentials, ProfileUpdate, RemoteDataService, SignupRequest,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

/// Volatile authenticated identity. Created on successful login, destroyed on
/// logout or reload; never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub phone: String,
    pub institute: String,
    current_secret: String,
}

impl Session {
    pub fn secret_matches(&self, candidate: &str) -> bool {
        self.current_secret == candidate
    }

    #[cfg(any(test, debug_assertions))]
    pub fn for_tests(name: &str, email: &str, role: Role, secret: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            role,
            phone: String::new(),
            institute: String::new(),
            current_secret: secret.to_string(),
        }
    }
}

/// One profile-edit submission, derived from the overlay's form bag.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileEdit {
    /// Both password fields were filled in.
    PasswordChange {
        new_password: String,
        confirm_password: String,
    },
    /// Name/phone/institute edit (no password fields present).
    Details {
        name: String,
        phone: String,
        institute: String,
    },
}

pub async fn authenticate<R: RemoteDataService>(
    remote: &R,
    email: &str,
    password: &str,
) -> Result<Session, ConsoleError> {
    let credentials = Credentials {
        email: email.to_string(),
        password: password.to_string(),
    };
    let reply = remote.login(&credentials).await.map_err(|_failure| {
        #[cfg(debug_assertions)]
        println!("[session] login rejected: {_failure}");
        ConsoleError::InvalidCredentials
    })?;

    Ok(Session {
        name: reply.name,
        email: email.to_string(),
        role: reply.role,
        phone: reply.phone,
        institute: reply.institute,
        current_secret: password.to_string(),
    })
}

/// Registers a new account. Never authenticates; the caller routes back to
/// the login form on success.
pub async fn register<R: RemoteDataService>(
    remote: &R,
    request: &SignupRequest,
) -> Result<(), ConsoleError> {
    remote.signup(request).await.map_err(|_failure| {
        #[cfg(debug_assertions)]
        println!("[session] signup rejected: {_failure}");
        ConsoleError::SignupRejected
    })
}

/// Password rules checked before anything else mutates. Both failures block
/// the edit entirely.
pub fn validate_password_change(
    session: &Session,
    new_password: &str,
    confirm_password: &str,
) -> Result<(), ConsoleError> {
    if new_password != confirm_password {
        return Err(ConsoleError::PasswordMismatch);
    }
    if session.secret_matches(new_password) {
        return Err(ConsoleError::PasswordReuse);
    }
    Ok(())
}

/// Applies a profile edit.
///
/// Password changes are validated locally and accepted without a network
/// round trip: the observed backend exposes no credential-change operation,
/// so the retained secret is left pointing at the live credential. Detail
/// edits go through the backend's `update-profile` operation and only then
/// update the session copy.
pub async fn save_profile<R: RemoteDataService>(
    remote: &R,
    session: &mut Session,
    edit: ProfileEdit,
) -> Result<(), ConsoleError> {
    match edit {
        ProfileEdit::PasswordChange {
            new_password,
            confirm_password,
        } => validate_password_change(session, &new_password, &confirm_password),
        ProfileEdit::Details {
            name,
            phone,
            institute,
        } => {
            let update = ProfileUpdate {
                email: session.email.clone(),
                name: name.clone(),
                phone: phone.clone(),
                institute: institute.clone(),
            };
            remote.update_profile(&update).await.map_err(|_failure| {
                #[cfg(debug_assertions)]
                println!("[session] profile update rejected: {_failure}");
                ConsoleError::FetchFailed
            })?;
            session.name = name;
            session.phone = phone;
            session.institute = institute;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::for_tests("Ada", "ada@example.com", Role::User, "hunter2")
    }

    #[test]
    fn mismatched_passwords_are_rejected() {
        let err = validate_password_change(&session(), "x", "y").unwrap_err();
        assert_eq!(err, ConsoleError::PasswordMismatch);
    }

    #[test]
    fn reusing_the_current_password_is_rejected() {
        let err = validate_password_change(&session(), "hunter2", "hunter2").unwrap_err();
        assert_eq!(err, ConsoleError::PasswordReuse);
    }

    #[test]
    fn a_fresh_matching_password_passes() {
        assert!(validate_password_change(&session(), "hunter3", "hunter3").is_ok());
    }

    #[test]
    fn mismatch_wins_over_reuse() {
        // Mismatch is detected before the reuse check.
        let err = validate_password_change(&session(), "hunter2", "other").unwrap_err();
        assert_eq!(err, ConsoleError::PasswordMismatch);
    }
}
