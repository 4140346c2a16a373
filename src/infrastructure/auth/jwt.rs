//! RS256 token issuance

use std::fmt::Debug;

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, Identity};

/// Issuer claim stamped into every token.
const ISSUER: &str = "self";

/// Issued-token lifetime in seconds. The one-hour expiry is part of the
/// token contract, not a tunable.
const TOKEN_TTL_SECS: i64 = 3600;

/// Claims carried by every issued token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Issuer - always "self"
    pub iss: String,
    /// Subject (authenticated username)
    pub sub: String,
    /// Issued at (Unix epoch seconds)
    pub iat: i64,
    /// Expiration (Unix epoch seconds)
    pub exp: i64,
    /// Space-joined granted authorities
    pub scope: String,
}

impl Claims {
    /// Build the claims set for an identity at the current instant.
    pub fn for_identity(identity: &Identity) -> Self {
        let iat = Utc::now().timestamp();

        Self {
            iss: ISSUER.to_string(),
            sub: identity.subject().to_string(),
            iat,
            exp: iat + TOKEN_TTL_SECS,
            scope: identity.scope(),
        }
    }
}

/// Signs claims into compact RS256 tokens.
///
/// Owns the process's key material: both keys are parsed once at
/// startup and immutable afterwards. The decoding key exists so that a
/// mismatched pair fails fast at startup and so issued tokens can be
/// verified in tests; the server itself never validates inbound tokens.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
}

impl Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("algorithm", &self.algorithm)
            .field("encoding_key", &"[hidden]")
            .field("decoding_key", &"[hidden]")
            .finish()
    }
}

impl TokenIssuer {
    /// Parse PEM key material. Fatal when absent or malformed: the
    /// process must not accept traffic without a usable key pair.
    pub fn from_pem(private_pem: &str, public_pem: &str) -> Result<Self, DomainError> {
        if private_pem.trim().is_empty() || public_pem.trim().is_empty() {
            return Err(DomainError::configuration(
                "RSA key material is not configured",
            ));
        }

        let encoding_key = EncodingKey::from_rsa_pem(private_pem.as_bytes())
            .map_err(|e| DomainError::configuration(format!("invalid RSA private key: {}", e)))?;

        let decoding_key = DecodingKey::from_rsa_pem(public_pem.as_bytes())
            .map_err(|e| DomainError::configuration(format!("invalid RSA public key: {}", e)))?;

        Ok(Self {
            encoding_key,
            decoding_key,
            algorithm: Algorithm::RS256,
        })
    }

    /// Sign a compact three-part token for the identity.
    ///
    /// Pure apart from reading the clock: claims are derived solely
    /// from the identity and the current instant.
    pub fn issue(&self, identity: &Identity) -> Result<String, DomainError> {
        if identity.subject().is_empty() {
            return Err(DomainError::validation(
                "cannot issue a token for an empty subject",
            ));
        }

        let claims = Claims::for_identity(identity);

        encode(&Header::new(self.algorithm), &claims, &self.encoding_key)
            .map_err(|e| DomainError::signing(format!("failed to sign token: {}", e)))
    }

    /// Decode a token and verify its signature against the public key.
    pub fn verify(&self, token: &str) -> Result<Claims, DomainError> {
        let mut validation = Validation::new(self.algorithm);
        validation.set_issuer(&[ISSUER]);

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| DomainError::signing(format!("token verification failed: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::OsRng;
    use rsa::pkcs1::{EncodeRsaPrivateKey, EncodeRsaPublicKey, LineEnding};
    use rsa::{RsaPrivateKey, RsaPublicKey};

    use super::*;

    fn generate_pem_pair() -> (String, String) {
        let mut rng = OsRng;
        let private_key = RsaPrivateKey::new(&mut rng, 2048).unwrap();
        let public_key = RsaPublicKey::from(&private_key);

        let private_pem = private_key.to_pkcs1_pem(LineEnding::LF).unwrap().to_string();
        let public_pem = public_key.to_pkcs1_pem(LineEnding::LF).unwrap();

        (private_pem, public_pem)
    }

    fn issuer() -> TokenIssuer {
        let (private_pem, public_pem) = generate_pem_pair();
        TokenIssuer::from_pem(&private_pem, &public_pem).unwrap()
    }

    #[test]
    fn test_issue_and_verify() {
        let issuer = issuer();
        let identity = Identity::new("client", ["read"]).unwrap();

        let token = issuer.issue(&identity).unwrap();
        assert_eq!(token.split('.').count(), 3);

        let claims = issuer.verify(&token).unwrap();
        assert_eq!(claims.iss, "self");
        assert_eq!(claims.sub, "client");
        assert_eq!(claims.scope, "read");
    }

    #[test]
    fn test_expiry_is_exactly_one_hour() {
        let issuer = issuer();
        let identity = Identity::new("client", ["read"]).unwrap();

        let claims = issuer.verify(&issuer.issue(&identity).unwrap()).unwrap();
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_scope_is_sorted_join_of_authorities() {
        let issuer = issuer();
        let identity = Identity::new("client", ["write", "admin", "read"]).unwrap();

        let claims = issuer.verify(&issuer.issue(&identity).unwrap()).unwrap();
        assert_eq!(claims.scope, "admin read write");
    }

    #[test]
    fn test_empty_authorities_yield_empty_scope_claim() {
        let issuer = issuer();
        let identity = Identity::new("client", Vec::<String>::new()).unwrap();

        let claims = issuer.verify(&issuer.issue(&identity).unwrap()).unwrap();
        assert_eq!(claims.scope, "");
    }

    #[test]
    fn test_tokens_issued_at_different_times_differ() {
        let issuer = issuer();
        let identity = Identity::new("client", ["read"]).unwrap();

        let first = issuer.issue(&identity).unwrap();
        std::thread::sleep(std::time::Duration::from_millis(1100));
        let second = issuer.issue(&identity).unwrap();

        assert_ne!(first, second);
        assert!(issuer.verify(&first).is_ok());
        assert!(issuer.verify(&second).is_ok());
    }

    #[test]
    fn test_wrong_public_key_fails_verification() {
        let signer = issuer();
        let other = issuer();
        let identity = Identity::new("client", ["read"]).unwrap();

        let token = signer.issue(&identity).unwrap();
        assert!(other.verify(&token).is_err());
    }

    #[test]
    fn test_corrupted_signature_fails_verification() {
        let issuer = issuer();
        let identity = Identity::new("client", ["read"]).unwrap();

        let token = issuer.issue(&identity).unwrap();
        let mut corrupted = token[..token.len() - 4].to_string();
        corrupted.push_str("AAAA");

        assert!(issuer.verify(&corrupted).is_err());
    }

    #[test]
    fn test_empty_key_material_rejected() {
        let result = TokenIssuer::from_pem("", "");
        assert!(matches!(
            result,
            Err(DomainError::Configuration { .. })
        ));
    }

    #[test]
    fn test_malformed_key_material_rejected() {
        let result = TokenIssuer::from_pem("not a pem", "also not a pem");
        assert!(matches!(
            result,
            Err(DomainError::Configuration { .. })
        ));
    }
}
