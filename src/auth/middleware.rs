use actix_web::{dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform}, http::header::AUTHORIZATION, web, HttpMessage};
use futures_util::future::{ready, LocalBoxFuture, Ready};
use tracing::Instrument;

use crate::response::ApiError;

use super::{extractors::AuthenticatedUser, jwt::Tokenizer};

// Splits `Bearer <token>`; the scheme is matched case-insensitively
pub fn parse_bearer(header: &str) -> Option<&str> {
    let mut parts = header.split(' ');
    let (scheme, token) = (parts.next()?, parts.next()?);

    if parts.next().is_some() || !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return None
    }

    Some(token)
}

fn authenticate(req: &ServiceRequest) -> Result<AuthenticatedUser, ApiError> {
    let tokenizer = req.app_data::<web::Data<Tokenizer>>()
        .ok_or_else(|| ApiError::Internal(anyhow::anyhow!("Tokenizer is not registered")))?;

    let header = req.headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| ApiError::unauthorized("unauthorized"))?;

    let token = parse_bearer(header)
        .ok_or_else(|| ApiError::unauthorized("unauthorized"))?;

    tokenizer.decode_access(token)
        .map(AuthenticatedUser::from)
        .map_err(|e| ApiError::unauthorized(e.to_string()))
}

/// Rejects requests without a valid bearer token with 401 before the handler
/// runs; on success the caller's identity is available as [`AuthenticatedUser`].
pub struct AuthGate;

impl<S> Transform<S, ServiceRequest> for AuthGate
where
    S: Service<ServiceRequest, Response = ServiceResponse, Error = actix_web::Error>,
    S::Future: 'static,
{
    type Response = ServiceResponse;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = AuthGateMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthGateMiddleware{service}))
    }
}

pub struct AuthGateMiddleware<S>{
    service: S
}

impl<S> Service<ServiceRequest> for AuthGateMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse, Error = actix_web::Error>,
    S::Future: 'static
{
    type Error = actix_web::Error;
    type Response = S::Response;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    #[tracing::instrument(
        "Checking bearer token",
        skip(self, req)
    )]
    fn call(&self, req: ServiceRequest) -> Self::Future {
        let current_span = tracing::Span::current();

        let user = match authenticate(&req) {
            Ok(user) => user,
            Err(e) => {
                tracing::info!("Rejected request: {}", e);
                return Box::pin(ready(Err(actix_web::Error::from(e))).instrument(current_span))
            }
        };

        req.extensions_mut().insert(user);
        let fut = self.service.call(req);

        Box::pin(async move {
            let res = fut.await?;
            Ok(res)
        }
        .instrument(current_span))
    }
}
