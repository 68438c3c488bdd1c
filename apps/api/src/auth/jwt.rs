use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use super::{IdentityResolver, Principal};

/// Claims carried by an access token. `sub` is the auth provider's stable
/// user id and becomes the principal id.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
}

/// HS256 bearer-token verifier keyed by the shared `JWT_SECRET`.
pub struct JwtResolver {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtResolver {
    pub fn new(secret: &str) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::default(),
        }
    }
}

impl IdentityResolver for JwtResolver {
    fn resolve(&self, token: &str) -> Option<Principal> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).ok()?;
        // A token whose subject is empty identifies nobody.
        if data.claims.sub.is_empty() {
            return None;
        }
        Some(Principal {
            id: data.claims.sub,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};

    const SECRET: &str = "test-secret";

    fn token_for(sub: &str, exp: i64, secret: &str) -> String {
        let claims = Claims {
            sub: sub.to_string(),
            exp: exp as usize,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn in_one_hour() -> i64 {
        chrono::Utc::now().timestamp() + 3600
    }

    #[test]
    fn resolves_subject_from_valid_token() {
        let resolver = JwtResolver::new(SECRET);
        let token = token_for("user_2abc", in_one_hour(), SECRET);

        let principal = resolver.resolve(&token).unwrap();
        assert_eq!(principal.id, "user_2abc");
    }

    #[test]
    fn expired_token_is_anonymous() {
        let resolver = JwtResolver::new(SECRET);
        let token = token_for("user_2abc", chrono::Utc::now().timestamp() - 3600, SECRET);

        assert!(resolver.resolve(&token).is_none());
    }

    #[test]
    fn wrong_secret_is_anonymous() {
        let resolver = JwtResolver::new(SECRET);
        let token = token_for("user_2abc", in_one_hour(), "other-secret");

        assert!(resolver.resolve(&token).is_none());
    }

    #[test]
    fn garbage_token_is_anonymous() {
        let resolver = JwtResolver::new(SECRET);
        assert!(resolver.resolve("not-a-jwt").is_none());
    }

    #[test]
    fn empty_subject_is_anonymous() {
        let resolver = JwtResolver::new(SECRET);
        let token = token_for("", in_one_hour(), SECRET);

        assert!(resolver.resolve(&token).is_none());
    }
}
