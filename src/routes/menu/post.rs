use actix_web::{web, HttpResponse};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::{db_interaction::menus::insert_menu, models::Menu, response::{ApiResponse, ApiResult}, utils::{public_id, Database}};

use super::check_menu_window;

#[derive(Deserialize, Debug, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateMenuForm{
    #[validate(length(min = 1, max = 50))]
    pub name: String,
    #[validate(length(min = 1, max = 50))]
    pub category: String,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>
}

#[tracing::instrument(
    "Creating menu",
    skip(db)
)]
pub async fn create_menu(
    db: web::Data<Database>,
    form: web::Json<CreateMenuForm>
) -> ApiResult<HttpResponse> {
    form.validate()?;
    let form = form.into_inner();

    let now = Utc::now();
    check_menu_window(form.start_date, form.end_date, now)?;

    let id = Uuid::new_v4();
    let menu = Menu{
        id,
        menu_id: public_id(&id),
        name: form.name,
        category: form.category,
        start_date: form.start_date,
        end_date: form.end_date,
        created_at: now,
        updated_at: now
    };

    let menu = insert_menu(&db, menu).await?;

    Ok(ApiResponse::created("Menu created successfully", menu))
}
