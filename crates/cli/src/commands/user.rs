//! User account management commands.
//!
//! # Usage
//!
//! ```bash
//! kb-cli user create -e ramu@example.com -n "Ramu" -r farmer -p pass123
//! ```

use tracing::info;

use krishibazaar_core::{Email, NewUser, Role};

use super::open_store;

/// Create a new account.
///
/// # Errors
///
/// Returns an error if the role is unknown or the email is already
/// registered.
pub async fn create(
    email: &str,
    name: &str,
    role: &str,
    password: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let role: Role = role.parse()?;

    let store = open_store().await?;
    store.ensure_initialized().await?;

    let profile = store
        .signup(NewUser {
            name: name.to_owned(),
            role,
            email: Email::new(email),
            password: password.to_owned(),
        })
        .await?;

    info!("Created {} account {} ({})", profile.role, profile.id, profile.email);

    Ok(())
}
