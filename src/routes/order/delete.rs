use actix_web::{web, HttpResponse};

use crate::{db_interaction::orders::{delete_order_with_items, DeleteOrderError}, response::{ApiError, ApiResponse, ApiResult}, utils::Database};

// Removes the order and every one of its items in a single transaction
#[tracing::instrument(
    "Deleting order by id",
    skip(db)
)]
pub async fn delete_order(
    db: web::Data<Database>,
    order_id: web::Path<String>
) -> ApiResult<HttpResponse> {
    match delete_order_with_items(&db, order_id.into_inner()).await {
        Ok(items) => {
            tracing::info!(items, "Order deleted together with its items");
            Ok(ApiResponse::empty("Order deleted successfully"))
        },
        Err(DeleteOrderError::NoOrderIdError(_)) => Err(ApiError::not_found("order not found")),
        Err(DeleteOrderError::DbError(e)) => Err(e.into())
    }
}
