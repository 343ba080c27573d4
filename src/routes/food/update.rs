use actix_web::{web, HttpResponse};
use chrono::Utc;
use serde::Deserialize;
use validator::Validate;

use crate::{db_interaction::{foods, menus::menu_exists}, models::FoodChangeset, response::{ApiError, ApiResponse, ApiResult}, utils::{to_fixed, Database}};

#[derive(Deserialize, Debug, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFoodForm{
    #[validate(length(min = 2, max = 50))]
    pub name: Option<String>,
    #[validate(range(min = 0.0))]
    pub price: Option<f64>,
    #[validate(length(min = 1))]
    pub food_image: Option<String>,
    pub menu_id: Option<String>
}

#[tracing::instrument(
    "Updating food",
    skip(db)
)]
pub async fn update_food(
    db: web::Data<Database>,
    food_id: web::Path<String>,
    form: web::Json<UpdateFoodForm>
) -> ApiResult<HttpResponse> {
    form.validate()?;
    let form = form.into_inner();

    if let Some(menu_id) = &form.menu_id {
        if !menu_exists(&db, menu_id.clone()).await? {
            return Err(ApiError::bad_request("menu not found"));
        }
    }

    let changes = FoodChangeset{
        name: form.name,
        price: form.price.map(|price| to_fixed(price, 2)),
        food_image: form.food_image,
        menu_id: form.menu_id,
        updated_at: Utc::now()
    };

    if foods::update_food(&db, food_id.into_inner(), changes).await? == 0 {
        return Err(ApiError::not_found("food not found"));
    }

    Ok(ApiResponse::empty("Food updated successfully"))
}
