use actix_web::{web, HttpResponse};
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::{db_interaction::{foods::insert_food, menus::menu_exists}, models::Food, response::{ApiError, ApiResponse, ApiResult}, utils::{public_id, to_fixed, Database}};

#[derive(Deserialize, Debug, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateFoodForm{
    #[validate(length(min = 2, max = 50))]
    pub name: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[validate(length(min = 1))]
    pub food_image: String,
    #[validate(length(min = 1))]
    pub menu_id: String
}

#[tracing::instrument(
    "Creating food",
    skip(db)
)]
pub async fn create_food(
    db: web::Data<Database>,
    form: web::Json<CreateFoodForm>
) -> ApiResult<HttpResponse> {
    form.validate()?;
    let form = form.into_inner();

    if !menu_exists(&db, form.menu_id.clone()).await? {
        return Err(ApiError::bad_request("menu not found"));
    }

    let id = Uuid::new_v4();
    let now = Utc::now();
    let food = Food{
        id,
        food_id: public_id(&id),
        name: form.name,
        price: to_fixed(form.price, 2),
        food_image: form.food_image,
        menu_id: form.menu_id,
        created_at: now,
        updated_at: now
    };

    let food = insert_food(&db, food).await?;

    Ok(ApiResponse::created("Food created successfully", food))
}
