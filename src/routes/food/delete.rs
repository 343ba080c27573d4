use actix_web::{web, HttpResponse};

use crate::{db_interaction::foods, response::{ApiError, ApiResponse, ApiResult}, utils::Database};

#[tracing::instrument(
    "Deleting food by id",
    skip(db)
)]
pub async fn delete_food(
    db: web::Data<Database>,
    food_id: web::Path<String>
) -> ApiResult<HttpResponse> {
    if foods::delete_food(&db, food_id.into_inner()).await? == 0 {
        return Err(ApiError::not_found("food not found"));
    }

    Ok(ApiResponse::empty("Food deleted successfully"))
}
