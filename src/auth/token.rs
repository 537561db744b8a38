use crate::config::Config;
use crate::error::AppError;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Represents the claims encoded within a JWT (JSON Web Token).
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject of the token: the user's unique identifier.
    pub sub: i64,
    /// Expiration timestamp (seconds since epoch) for the token.
    pub exp: usize,
}

/// Signing and verification state for session tokens.
///
/// Built once at startup from the configured secret and shared by cloning;
/// nothing here touches the environment after construction. The token itself
/// is stateless: verification is signature + expiry only.
#[derive(Clone)]
pub struct TokenConfig {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: chrono::Duration,
}

impl TokenConfig {
    pub fn new(secret: &str, ttl: chrono::Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.jwt_secret, config.token_ttl)
    }

    /// Issues a signed token for the given user, expiring `ttl` from now.
    pub fn issue(&self, user_id: i64) -> Result<String, AppError> {
        let expiration = chrono::Utc::now()
            .checked_add_signed(self.ttl)
            .ok_or_else(|| AppError::InternalServerError("Token expiry overflow".into()))?
            .timestamp() as usize;

        let claims = Claims {
            sub: user_id,
            exp: expiration,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::InternalServerError(format!("Failed to generate token: {}", e)))
    }

    /// Verifies a token string and decodes its claims.
    ///
    /// Returns `AppError::Unauthorized` if the token is malformed, its
    /// signature is invalid, or it has expired.
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map(|data| data.claims)
            .map_err(|e| AppError::Unauthorized(format!("Invalid token: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_issue_and_verify() {
        let tokens = TokenConfig::new("test_secret_for_issue_verify", chrono::Duration::hours(1));
        let user_id = 1;
        let token = tokens.issue(user_id).unwrap();
        let claims = tokens.verify(&token).unwrap();
        assert_eq!(claims.sub, user_id);
    }

    #[test]
    fn test_token_expiration() {
        // A negative TTL puts the expiry well past the validation leeway.
        let tokens = TokenConfig::new("test_secret_for_expiration", chrono::Duration::hours(-2));
        let expired_token = tokens.issue(2).unwrap();

        match tokens.verify(&expired_token) {
            Err(AppError::Unauthorized(msg)) => {
                assert!(
                    msg.contains("ExpiredSignature"),
                    "Unexpected error message for expired token: {}",
                    msg
                );
            }
            Ok(_) => panic!("Token should have been invalid due to expiration"),
            Err(e) => panic!("Unexpected error type for expired token: {:?}", e),
        }
    }

    #[test]
    fn test_invalid_token_signature() {
        let issuer = TokenConfig::new("one_secret", chrono::Duration::hours(1));
        let verifier = TokenConfig::new("a_completely_different_secret", chrono::Duration::hours(1));

        let token = issuer.issue(3).unwrap();
        match verifier.verify(&token) {
            Err(AppError::Unauthorized(msg)) => {
                assert!(
                    msg.contains("InvalidSignature") || msg.contains("InvalidToken"),
                    "Unexpected error message for invalid signature: {}",
                    msg
                );
            }
            Ok(_) => panic!("Token should have been invalid due to signature mismatch"),
            Err(e) => panic!("Unexpected error type for invalid signature: {:?}", e),
        }
    }

    #[test]
    fn test_garbage_token_rejected() {
        let tokens = TokenConfig::new("test_secret", chrono::Duration::hours(1));
        assert!(tokens.verify("not-a-jwt-at-all").is_err());
        assert!(tokens.verify("").is_err());
    }
}
