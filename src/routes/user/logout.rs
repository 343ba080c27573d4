use actix_web::{web, HttpResponse};

use crate::{auth::AuthenticatedUser, db_interaction::users::set_user_tokens, response::{ApiError, ApiResponse, ApiResult}, utils::Database};

#[tracing::instrument(
    "Logging out currently logged in user",
    skip_all,
    fields(user_id = %user.user_id)
)]
pub async fn logout(
    db: web::Data<Database>,
    user: AuthenticatedUser
) -> ApiResult<HttpResponse> {
    set_user_tokens(&db, user.user_id, None)
        .await?
        .ok_or_else(|| ApiError::not_found("user not found"))?;

    Ok(ApiResponse::empty("Logged out successfully"))
}
