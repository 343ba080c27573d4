use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::{auth::Tokenizer, db_interaction::users::{get_user, set_user_tokens}, response::{ApiError, ApiResponse, ApiResult}, utils::Database};

use super::issue_tokens;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshForm{
    pub refresh_token: String
}

// Only the most recently issued refresh token is honoured
#[tracing::instrument(
    "Refreshing token pair",
    skip_all
)]
pub async fn refresh_token(
    db: web::Data<Database>,
    tokenizer: web::Data<Tokenizer>,
    form: web::Json<RefreshForm>
) -> ApiResult<HttpResponse> {
    let presented = form.into_inner().refresh_token;
    let claims = tokenizer.decode_refresh(&presented)?;

    let user = get_user(&db, claims.sub)
        .await?
        .filter(|user| user.refresh_token.as_deref() == Some(presented.as_str()))
        .ok_or_else(|| ApiError::unauthorized("invalid refresh token"))?;

    let tokens = issue_tokens(&tokenizer, &user)?;
    set_user_tokens(&db, user.user_id, Some(tokens.clone()))
        .await?
        .ok_or_else(|| ApiError::unauthorized("invalid refresh token"))?;

    Ok(ApiResponse::ok("Token refreshed successfully", tokens))
}
