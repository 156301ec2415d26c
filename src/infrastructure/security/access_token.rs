// src/infrastructure/security/access_token.rs
use crate::application::{
    dto::Session,
    error::{ApplicationError, ApplicationResult},
    ports::security::AccessTokenVerifier,
};
use crate::domain::user::UserId;
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use serde::Deserialize;
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Verifies HS256 JWT access tokens minted by the hosted auth platform.
#[derive(Clone)]
pub struct Hs256AccessTokenVerifier {
    secret: Vec<u8>,
}

#[derive(Debug, Deserialize)]
struct Header {
    alg: String,
}

#[derive(Debug, Deserialize)]
struct Claims {
    sub: String,
    exp: i64,
    #[serde(default)]
    email: Option<String>,
}

impl Hs256AccessTokenVerifier {
    pub fn new(secret: impl Into<Vec<u8>>) -> ApplicationResult<Self> {
        let secret = secret.into();
        if secret.len() < 32 {
            return Err(ApplicationError::infrastructure(
                "access token secret must be at least 32 bytes",
            ));
        }
        Ok(Self { secret })
    }

    fn mac(&self) -> ApplicationResult<HmacSha256> {
        HmacSha256::new_from_slice(&self.secret)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))
    }

    fn verify_at(&self, token: &str, now: DateTime<Utc>) -> ApplicationResult<Session> {
        let mut parts = token.split('.');
        let (Some(header_b64), Some(payload_b64), Some(signature_b64), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(ApplicationError::unauthorized("malformed access token"));
        };

        let header: Header = decode_segment(header_b64)?;
        if header.alg != "HS256" {
            return Err(ApplicationError::unauthorized(format!(
                "unsupported token algorithm '{}'",
                header.alg
            )));
        }

        let signature = URL_SAFE_NO_PAD
            .decode(signature_b64)
            .map_err(|_| ApplicationError::unauthorized("malformed token signature"))?;
        let mut mac = self.mac()?;
        mac.update(header_b64.as_bytes());
        mac.update(b".");
        mac.update(payload_b64.as_bytes());
        mac.verify_slice(&signature)
            .map_err(|_| ApplicationError::unauthorized("invalid token signature"))?;

        let claims: Claims = decode_segment(payload_b64)?;
        let expires_at = DateTime::<Utc>::from_timestamp(claims.exp, 0)
            .ok_or_else(|| ApplicationError::unauthorized("invalid token expiry"))?;
        if expires_at <= now {
            return Err(ApplicationError::unauthorized("token expired"));
        }

        let user_id: UserId = claims
            .sub
            .parse()
            .map_err(|_| ApplicationError::unauthorized("invalid token subject"))?;

        Ok(Session {
            user_id,
            email: claims.email,
            expires_at,
        })
    }
}

impl AccessTokenVerifier for Hs256AccessTokenVerifier {
    fn verify(&self, token: &str) -> ApplicationResult<Session> {
        self.verify_at(token, Utc::now())
    }
}

fn decode_segment<T: serde::de::DeserializeOwned>(segment: &str) -> ApplicationResult<T> {
    let bytes = URL_SAFE_NO_PAD
        .decode(segment)
        .map_err(|_| ApplicationError::unauthorized("malformed access token"))?;
    serde_json::from_slice(&bytes)
        .map_err(|_| ApplicationError::unauthorized("malformed access token"))
}

/// Mint a token the verifier accepts. Used by tests and local tooling.
pub fn sign_hs256(secret: &[u8], claims: &serde_json::Value) -> ApplicationResult<String> {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(
        serde_json::to_vec(claims).map_err(|err| ApplicationError::infrastructure(err.to_string()))?,
    );
    let mut mac = HmacSha256::new_from_slice(secret)
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
    mac.update(header.as_bytes());
    mac.update(b".");
    mac.update(payload.as_bytes());
    let signature = URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());
    Ok(format!("{header}.{payload}.{signature}"))
}
