use actix_web::{web, HttpResponse};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::{db_interaction::{orders::insert_order, tables::table_exists}, models::Order, response::{ApiError, ApiResponse, ApiResult}, utils::{public_id, Database}};

#[derive(Deserialize, Debug, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderForm{
    pub order_date: DateTime<Utc>,
    #[validate(length(min = 1))]
    pub table_id: String
}

#[tracing::instrument(
    "Creating order",
    skip(db)
)]
pub async fn create_order(
    db: web::Data<Database>,
    form: web::Json<CreateOrderForm>
) -> ApiResult<HttpResponse> {
    form.validate()?;
    let form = form.into_inner();

    let now = Utc::now();
    if form.order_date <= now {
        return Err(ApiError::bad_request("order date must be in the future"));
    }

    if !table_exists(&db, form.table_id.clone()).await? {
        return Err(ApiError::bad_request("table not found"));
    }

    let id = Uuid::new_v4();
    let order = Order{
        id,
        order_id: public_id(&id),
        order_date: form.order_date,
        table_id: form.table_id,
        created_at: now,
        updated_at: now
    };

    let order = insert_order(&db, order).await?;

    Ok(ApiResponse::created("Order created successfully", order))
}
