use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT claims stored in the session token.
///
/// `name` carries the Worldcoin id, `address` the Ethereum address; both
/// are optional but at least one is present for any issued session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub exp: i64,
    pub iat: i64,
}

fn session_secret() -> String {
    std::env::var("SESSION_SECRET").expect("SESSION_SECRET must be set")
}

pub fn session_expiry_hours() -> i64 {
    std::env::var("SESSION_EXPIRY_HOURS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(24 * 7)
}

/// Issue a session token for a user.
pub fn create_session_token(
    user_id: Uuid,
    name: Option<&str>,
    address: Option<&str>,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now();
    let claims = Claims {
        sub: user_id,
        name: name.map(String::from),
        address: address.map(String::from),
        exp: (now + Duration::hours(session_expiry_hours())).timestamp(),
        iat: now.timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(session_secret().as_bytes()),
    )
}

/// Validate a session token and return its claims.
pub fn validate_session_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(session_secret().as_bytes()),
        &Validation::default(),
    )?;
    Ok(data.claims)
}
