use chrono::{Duration, Utc};
use jsonwebtoken::{errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::configuration::JWTSettings;

#[derive(Clone)]
pub struct Tokenizer{
    pub secret: SecretString,
    pub access_expiry: Duration,
    pub refresh_expiry: Duration
}

/// Profile snapshot carried by an access token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AccessClaims{
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub iat: i64,
    pub jti: Uuid,
    pub exp: i64
}

/// Refresh tokens only prove identity, so they carry the subject and nothing
/// of the user's profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RefreshClaims{
    pub sub: String,
    pub iat: i64,
    pub jti: Uuid,
    pub exp: i64
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair{
    pub token: String,
    pub refresh_token: String
}

// Identity fields needed to mint a pair
pub struct TokenSubject<'a>{
    pub user_id: &'a str,
    pub name: &'a str,
    pub email: &'a str,
    pub avatar: &'a str
}

#[derive(Error, Debug)]
pub enum TokenError{
    #[error("token expired")]
    Expired,
    #[error("invalid token")]
    Invalid(#[source] jsonwebtoken::errors::Error),
    #[error("failed to sign token")]
    Signing(#[source] jsonwebtoken::errors::Error)
}

impl Tokenizer {
    pub fn new(settings: &JWTSettings) -> Self {
        Self{
            secret: SecretString::from(settings.secret.clone()),
            access_expiry: Duration::hours(settings.access_expiry_hours as i64),
            refresh_expiry: Duration::days(settings.refresh_expiry_days as i64)
        }
    }

    fn encoding_key(&self) -> EncodingKey {
        EncodingKey::from_secret(self.secret.expose_secret().as_bytes())
    }

    pub fn generate_pair(&self, subject: TokenSubject<'_>) -> Result<TokenPair, TokenError>{
        let now = Utc::now();

        let access = AccessClaims{
            user_id: subject.user_id.to_string(),
            name: subject.name.to_string(),
            email: subject.email.to_string(),
            avatar: subject.avatar.to_string(),
            iat: now.timestamp(),
            jti: Uuid::new_v4(),
            exp: (now + self.access_expiry).timestamp()
        };

        let refresh = RefreshClaims{
            sub: subject.user_id.to_string(),
            iat: now.timestamp(),
            jti: Uuid::new_v4(),
            exp: (now + self.refresh_expiry).timestamp()
        };

        let header = Header::new(Algorithm::HS256);
        let token = jsonwebtoken::encode(&header, &access, &self.encoding_key())
            .map_err(TokenError::Signing)?;
        let refresh_token = jsonwebtoken::encode(&header, &refresh, &self.encoding_key())
            .map_err(TokenError::Signing)?;

        Ok(TokenPair{ token, refresh_token })
    }

    // Only HMAC-signed tokens are accepted
    fn validation() -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.algorithms = vec![Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];
        validation
    }

    pub fn decode_access(&self, token: &str) -> Result<AccessClaims, TokenError>{
        let claims = jsonwebtoken::decode::<AccessClaims>(
            token,
            &DecodingKey::from_secret(self.secret.expose_secret().as_bytes()),
            &Self::validation()
        )
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => TokenError::Expired,
            _ => TokenError::Invalid(e)
        })?
        .claims;

        // The library allows some leeway on `exp`; this check does not
        if claims.exp < Utc::now().timestamp() {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }

    pub fn decode_refresh(&self, token: &str) -> Result<RefreshClaims, TokenError>{
        let claims = jsonwebtoken::decode::<RefreshClaims>(
            token,
            &DecodingKey::from_secret(self.secret.expose_secret().as_bytes()),
            &Self::validation()
        )
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => TokenError::Expired,
            _ => TokenError::Invalid(e)
        })?
        .claims;

        if claims.exp < Utc::now().timestamp() {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }
}
