use actix_web::{FromRequest, HttpMessage};
use futures_util::future::{ready, Ready};

use crate::response::ApiError;

use super::jwt::AccessClaims;

// Identity placed in request extensions by the auth gate
#[derive(Debug, Clone, PartialEq)]
pub struct AuthenticatedUser{
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub avatar: String
}

impl From<AccessClaims> for AuthenticatedUser {
    fn from(claims: AccessClaims) -> Self {
        Self {
            user_id: claims.user_id,
            name: claims.name,
            email: claims.email,
            avatar: claims.avatar
        }
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &actix_web::HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(ApiError::unauthorized("unauthorized").into()))
        }
    }
}
