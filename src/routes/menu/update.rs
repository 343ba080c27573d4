use actix_web::{web, HttpResponse};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

use crate::{db_interaction::menus, models::MenuChangeset, response::{ApiError, ApiResponse, ApiResult}, utils::Database};

use super::check_menu_window;

#[derive(Deserialize, Debug, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMenuForm{
    #[validate(length(min = 2, max = 50))]
    pub name: Option<String>,
    #[validate(length(min = 2, max = 50))]
    pub category: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>
}

#[tracing::instrument(
    "Updating menu",
    skip(db)
)]
pub async fn update_menu(
    db: web::Data<Database>,
    menu_id: web::Path<String>,
    form: web::Json<UpdateMenuForm>
) -> ApiResult<HttpResponse> {
    form.validate()?;
    let form = form.into_inner();

    let now = Utc::now();
    check_menu_window(form.start_date, form.end_date, now)?;

    let changes = MenuChangeset{
        name: form.name,
        category: form.category,
        start_date: form.start_date,
        end_date: form.end_date,
        updated_at: now
    };

    if menus::update_menu(&db, menu_id.into_inner(), changes).await? == 0 {
        return Err(ApiError::not_found("menu not found"));
    }

    Ok(ApiResponse::empty("Menu updated successfully"))
}
