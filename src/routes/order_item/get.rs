use actix_web::{web, HttpResponse};

use crate::{db_interaction::order_items, response::{ApiError, ApiResponse, ApiResult}, utils::Database};

#[tracing::instrument(
    "Getting order item by id",
    skip(db)
)]
pub async fn get_order_item(
    db: web::Data<Database>,
    order_item_id: web::Path<String>
) -> ApiResult<HttpResponse> {
    let item = order_items::get_order_item(&db, order_item_id.into_inner())
        .await?
        .ok_or_else(|| ApiError::not_found("order item not found"))?;

    Ok(ApiResponse::ok("Order item retrieved successfully", item))
}

#[tracing::instrument(
    "Getting list of order items",
    skip(db)
)]
pub async fn get_all_order_items(db: web::Data<Database>) -> ApiResult<HttpResponse> {
    let items = order_items::get_all_order_items(&db).await?;

    Ok(ApiResponse::ok("Order items retrieved successfully", items))
}

// Billing view of one order: items joined with their food and table, with
// the amount due
#[tracing::instrument(
    "Getting order items of an order",
    skip(db)
)]
pub async fn get_order_items_by_order(
    db: web::Data<Database>,
    order_id: web::Path<String>
) -> ApiResult<HttpResponse> {
    let views = order_items::get_billing_view(&db, order_id.into_inner()).await?;

    Ok(ApiResponse::ok("Order items retrieved successfully", views))
}
