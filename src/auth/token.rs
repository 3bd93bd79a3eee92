use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Lifetime of an issued token.
pub const TOKEN_TTL_HOURS: i64 = 24;

/// Represents the claims encoded within an issued token.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    /// Identifier of the authenticated user.
    pub user_id: i32,
    /// Expiration timestamp (seconds since epoch).
    pub exp: usize,
}

/// Signs and verifies HS256 tokens with a secret fixed at startup.
#[derive(Clone)]
pub struct TokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenIssuer {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Issues a token for `user_id` expiring 24 hours from now.
    ///
    /// # Returns
    /// The compact signed token, or the signing error.
    pub fn issue(&self, user_id: i32) -> Result<String, jsonwebtoken::errors::Error> {
        let expiration = (Utc::now() + Duration::hours(TOKEN_TTL_HOURS)).timestamp();
        let claims = Claims {
            user_id,
            exp: expiration as usize,
        };

        encode(&Header::default(), &claims, &self.encoding)
    }

    /// Verifies a token signed by this issuer and decodes its claims.
    ///
    /// Signature and expiration are checked. No endpoint currently requires
    /// a token; this exists for callers that want to check one.
    pub fn verify(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        decode::<Claims>(token, &self.decoding, &Validation::default()).map(|data| data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::errors::ErrorKind;

    #[test]
    fn test_token_generation_and_verification() {
        let issuer = TokenIssuer::new("test_secret_for_gen_verify");
        let token = issuer.issue(1).unwrap();
        let claims = issuer.verify(&token).unwrap();
        assert_eq!(claims.user_id, 1);

        let expected = (Utc::now() + Duration::hours(24)).timestamp() as usize;
        assert!(claims.exp <= expected && claims.exp + 60 >= expected);
    }

    #[test]
    fn test_token_uses_hs256_compact_form() {
        let token = TokenIssuer::new("s").issue(9).unwrap();
        assert_eq!(token.split('.').count(), 3);
        let header = jsonwebtoken::decode_header(&token).unwrap();
        assert_eq!(header.alg, jsonwebtoken::Algorithm::HS256);
    }

    #[test]
    fn test_token_expiration() {
        let issuer = TokenIssuer::new("test_secret_for_expiration");
        let expired = Claims {
            user_id: 2,
            exp: (Utc::now() - Duration::hours(2)).timestamp() as usize,
        };
        let expired_token = encode(
            &Header::default(),
            &expired,
            &EncodingKey::from_secret("test_secret_for_expiration".as_bytes()),
        )
        .unwrap();

        let err = issuer.verify(&expired_token).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::ExpiredSignature));
    }

    #[test]
    fn test_invalid_token_signature() {
        let token = TokenIssuer::new("one secret").issue(3).unwrap();
        let err = TokenIssuer::new("a_completely_different_secret")
            .verify(&token)
            .unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::InvalidSignature));
    }
}
