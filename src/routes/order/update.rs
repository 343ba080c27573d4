use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::{db_interaction::{orders::update_order_table, tables::table_exists}, response::{ApiError, ApiResponse, ApiResult}, utils::Database};

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderForm{
    pub table_id: Option<String>
}

// Moving an order to another table is the only supported update
#[tracing::instrument(
    "Updating order",
    skip(db)
)]
pub async fn update_order(
    db: web::Data<Database>,
    order_id: web::Path<String>,
    form: web::Json<UpdateOrderForm>
) -> ApiResult<HttpResponse> {
    let table_id = match form.into_inner().table_id {
        Some(id) if !id.is_empty() => id,
        _ => return Err(ApiError::bad_request("tableId is required"))
    };

    if !table_exists(&db, table_id.clone()).await? {
        return Err(ApiError::bad_request("table not found"));
    }

    if update_order_table(&db, order_id.into_inner(), table_id).await? == 0 {
        return Err(ApiError::not_found("order not found"));
    }

    Ok(ApiResponse::empty("Order updated successfully"))
}
