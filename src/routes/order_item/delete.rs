use actix_web::{web, HttpResponse};

use crate::{db_interaction::order_items, response::{ApiError, ApiResponse, ApiResult}, utils::Database};

#[tracing::instrument(
    "Deleting order item by id",
    skip(db)
)]
pub async fn delete_order_item(
    db: web::Data<Database>,
    order_item_id: web::Path<String>
) -> ApiResult<HttpResponse> {
    if order_items::delete_order_item(&db, order_item_id.into_inner()).await? == 0 {
        return Err(ApiError::not_found("order item not found"));
    }

    Ok(ApiResponse::empty("Order item deleted successfully"))
}
