//! Port for session token issuing and validation.
//!
//! Tokens are stateless bearer credentials: there is no server-side
//! revocation list, and logout is a client-side discard.

use crate::domain::foundation::{AuthError, Principal};
use async_trait::async_trait;

#[async_trait]
pub trait TokenService: Send + Sync {
    /// Issues a signed token carrying the principal's claims.
    async fn issue(&self, principal: &Principal) -> Result<String, AuthError>;

    /// Validates a token and decodes the principal it carries.
    async fn validate(&self, token: &str) -> Result<Principal, AuthError>;
}
