use actix_web::{web, HttpResponse};

use crate::{db_interaction::orders, response::{ApiError, ApiResponse, ApiResult}, utils::Database};

#[tracing::instrument(
    "Getting order by id",
    skip(db)
)]
pub async fn get_order(
    db: web::Data<Database>,
    order_id: web::Path<String>
) -> ApiResult<HttpResponse> {
    let order = orders::get_order(&db, order_id.into_inner())
        .await?
        .ok_or_else(|| ApiError::not_found("order not found"))?;

    Ok(ApiResponse::ok("Order retrieved successfully", order))
}

#[tracing::instrument(
    "Getting list of orders",
    skip(db)
)]
pub async fn get_all_orders(db: web::Data<Database>) -> ApiResult<HttpResponse> {
    let orders = orders::get_all_orders(&db).await?;

    Ok(ApiResponse::ok("Orders retrieved successfully", orders))
}
