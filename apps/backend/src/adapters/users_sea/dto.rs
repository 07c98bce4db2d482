//! DTOs for users_sea adapter.

/// Insert payload for a credential record. The hash is computed upstream.
#[derive(Debug, Clone)]
pub struct CredentialCreate {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

impl CredentialCreate {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password_hash: password_hash.into(),
        }
    }
}
