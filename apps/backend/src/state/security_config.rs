use jsonwebtoken::Algorithm;

/// JWT signing settings, built once at startup and shared read-only.
#[derive(Clone)]
pub struct SecurityConfig {
    /// HMAC key used to sign and verify tokens
    pub jwt_secret: Vec<u8>,
    /// Algorithm used when minting (defaults to HS256)
    pub algorithm: Algorithm,
}

impl SecurityConfig {
    pub fn new(jwt_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            algorithm: Algorithm::HS256,
        }
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }
}

impl std::fmt::Debug for SecurityConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecurityConfig")
            .field("jwt_secret", &"[REDACTED]")
            .field("algorithm", &self.algorithm)
            .finish()
    }
}
