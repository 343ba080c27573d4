use actix_web::{web, HttpResponse};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{db_interaction::users, models::User, response::{ApiError, ApiResponse, ApiResult}, utils::Database};

/// What other users may see of an account. Issued tokens only ever go back
/// to their owner through signup, login or refresh.
#[derive(Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile{
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self{
            user_id: user.user_id,
            name: user.name,
            email: user.email,
            avatar: user.avatar,
            created_at: user.created_at,
            updated_at: user.updated_at
        }
    }
}

#[tracing::instrument(
    "Getting user by id",
    skip(db)
)]
pub async fn get_user(
    db: web::Data<Database>,
    user_id: web::Path<String>
) -> ApiResult<HttpResponse> {
    let user = users::get_user(&db, user_id.into_inner())
        .await?
        .ok_or_else(|| ApiError::not_found("user not found"))?;

    Ok(ApiResponse::ok("User retrieved successfully", UserProfile::from(user)))
}

#[tracing::instrument(
    "Getting list of users",
    skip(db)
)]
pub async fn get_all_users(db: web::Data<Database>) -> ApiResult<HttpResponse> {
    let users: Vec<UserProfile> = users::get_all_users(&db)
        .await?
        .into_iter()
        .map(UserProfile::from)
        .collect();

    Ok(ApiResponse::ok("Users retrieved successfully", users))
}
