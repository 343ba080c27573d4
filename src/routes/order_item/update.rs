use actix_web::{web, HttpResponse};
use chrono::Utc;
use serde::Deserialize;
use validator::Validate;

use crate::{db_interaction::order_items::{self, missing_food_ids}, domain::Quantity, models::OrderItemChangeset, response::{ApiError, ApiResponse, ApiResult}, utils::{to_fixed, Database}};

#[derive(Deserialize, Debug, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderItemForm{
    pub quantity: Option<Quantity>,
    #[validate(range(min = 0.0))]
    pub unit_price: Option<f64>,
    pub food_id: Option<String>
}

#[tracing::instrument(
    "Updating order item",
    skip(db)
)]
pub async fn update_order_item(
    db: web::Data<Database>,
    order_item_id: web::Path<String>,
    form: web::Json<UpdateOrderItemForm>
) -> ApiResult<HttpResponse> {
    form.validate()?;
    let form = form.into_inner();

    if let Some(food_id) = &form.food_id {
        if !missing_food_ids(&db, vec![food_id.clone()]).await?.is_empty() {
            return Err(ApiError::bad_request("food not found"));
        }
    }

    let changes = OrderItemChangeset{
        quantity: form.quantity.map(|q| q.as_str().to_string()),
        unit_price: form.unit_price.map(|price| to_fixed(price, 2)),
        food_id: form.food_id,
        updated_at: Utc::now()
    };

    if order_items::update_order_item(&db, order_item_id.into_inner(), changes).await? == 0 {
        return Err(ApiError::not_found("order item not found"));
    }

    Ok(ApiResponse::empty("Order item updated successfully"))
}
