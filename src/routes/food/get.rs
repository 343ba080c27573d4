use actix_web::{web, HttpResponse};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::{db_interaction::foods::{self, FOODS_PAGE_SIZE}, response::{ApiError, ApiResponse, ApiResult}, utils::Database};

#[derive(Deserialize, Debug)]
pub struct FoodsQuery{
    pub cursor: Option<String>
}

// Cursor is the RFC-3339 creation time of the last food already seen
pub fn parse_cursor(cursor: Option<&str>) -> Result<Option<DateTime<Utc>>, ApiError> {
    match cursor {
        None | Some("") => Ok(None),
        Some(raw) => DateTime::parse_from_rfc3339(raw)
            .map(|time| Some(time.with_timezone(&Utc)))
            .map_err(|_| ApiError::bad_request(format!("invalid cursor format: {}", raw)))
    }
}

#[tracing::instrument(
    "Getting food by id",
    skip(db)
)]
pub async fn get_food(
    db: web::Data<Database>,
    food_id: web::Path<String>
) -> ApiResult<HttpResponse> {
    let food = foods::get_food(&db, food_id.into_inner())
        .await?
        .ok_or_else(|| ApiError::not_found("food not found"))?;

    Ok(ApiResponse::ok("Food retrieved successfully", food))
}

#[tracing::instrument(
    "Getting page of foods",
    skip(db)
)]
pub async fn get_all_foods(
    db: web::Data<Database>,
    query: web::Query<FoodsQuery>
) -> ApiResult<HttpResponse> {
    let cursor = parse_cursor(query.cursor.as_deref())?;

    let page = foods::get_foods_page(&db, cursor, FOODS_PAGE_SIZE).await?;

    Ok(ApiResponse::ok("Foods retrieved successfully", page))
}
