//! Authenticated user claims decoded from the identity cookie.
//!
//! Sign-in itself happens on the central auth service; this application only
//! verifies the JWT it left behind and extracts the claims.

use actix_identity::Identity;
use actix_web::dev::Payload;
use actix_web::error::ErrorUnauthorized;
use actix_web::{Error, FromRequest, HttpRequest, web};
use jsonwebtoken::{DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};

use crate::models::config::ServerConfig;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// Stable subject identifier assigned by the auth service.
    pub sub: String,
    pub email: String,
    pub name: String,
    pub roles: Vec<String>,
    pub exp: usize,
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = std::future::Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        std::future::ready(authenticate(req, payload))
    }
}

fn authenticate(req: &HttpRequest, payload: &mut Payload) -> Result<AuthenticatedUser, Error> {
    let identity = Identity::from_request(req, payload)
        .into_inner()
        .map_err(|_| ErrorUnauthorized("not signed in"))?;
    let token = identity
        .id()
        .map_err(|_| ErrorUnauthorized("missing identity"))?;

    let config = req
        .app_data::<web::Data<ServerConfig>>()
        .ok_or_else(|| ErrorUnauthorized("server configuration missing"))?;

    let decoded = decode::<AuthenticatedUser>(
        &token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|_| ErrorUnauthorized("invalid token"))?;

    Ok(decoded.claims)
}
