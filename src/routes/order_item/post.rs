use actix_web::{web, HttpResponse};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::{db_interaction::{order_items::{insert_order_items, missing_food_ids}, orders::insert_order, tables::table_exists}, domain::Quantity, models::{Order, OrderItemModel}, response::{ApiError, ApiResponse, ApiResult}, utils::{public_id, to_fixed, Database}};

#[derive(Deserialize, Debug, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemForm{
    pub quantity: Quantity,
    #[validate(range(min = 0.0))]
    pub unit_price: f64,
    #[validate(length(min = 1))]
    pub food_id: String
}

#[derive(Deserialize, Debug, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemBatchForm{
    #[validate(length(min = 1))]
    pub table_id: String,
    #[validate(nested)]
    pub order_items: Vec<OrderItemForm>
}

impl OrderItemBatchForm {
    // Field rules of every item, plus at least one item per batch
    pub fn check(&self) -> Result<(), ApiError> {
        self.validate()?;

        if self.order_items.is_empty() {
            return Err(ApiError::bad_request("orderItems must not be empty"));
        }

        Ok(())
    }
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemBatch{
    pub order_id: String,
    pub order_items: Vec<OrderItemModel>
}

// Builds the rows of a batch for an already created order
pub fn build_order_items(order_id: &str, items: Vec<OrderItemForm>) -> Vec<OrderItemModel> {
    let now = Utc::now();

    items.into_iter()
        .map(|item| {
            let id = Uuid::new_v4();
            OrderItemModel{
                id,
                order_item_id: public_id(&id),
                quantity: item.quantity.as_str().to_string(),
                unit_price: to_fixed(item.unit_price, 2),
                order_id: order_id.to_string(),
                food_id: item.food_id,
                created_at: now,
                updated_at: now
            }
        })
        .collect()
}

// Opens a new order for the table and files every item under it. A failed
// item insert leaves the order in place.
#[tracing::instrument(
    "Creating order items",
    skip(db)
)]
pub async fn create_order_items(
    db: web::Data<Database>,
    form: web::Json<OrderItemBatchForm>
) -> ApiResult<HttpResponse> {
    form.check()?;
    let form = form.into_inner();

    if !table_exists(&db, form.table_id.clone()).await? {
        return Err(ApiError::bad_request("table not found"));
    }

    let food_ids = form.order_items.iter()
        .map(|item| item.food_id.clone())
        .collect();
    let missing = missing_food_ids(&db, food_ids).await?;
    if !missing.is_empty() {
        return Err(ApiError::bad_request(format!("food not found: {}", missing.join(", "))));
    }

    let id = Uuid::new_v4();
    let now = Utc::now();
    let order = insert_order(&db, Order{
        id,
        order_id: public_id(&id),
        order_date: now,
        table_id: form.table_id,
        created_at: now,
        updated_at: now
    })
    .await?;

    let items = build_order_items(&order.order_id, form.order_items);
    let order_items = insert_order_items(&db, items).await?;

    Ok(ApiResponse::created(
        "Order items created successfully",
        OrderItemBatch{ order_id: order.order_id, order_items }
    ))
}
