use actix_web::{web, HttpResponse};
use chrono::Utc;
use serde::Deserialize;
use validator::Validate;

use crate::{db_interaction::tables, models::TableChangeset, response::{ApiError, ApiResponse, ApiResult}, utils::Database};

#[derive(Deserialize, Debug, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTableForm{
    #[validate(range(min = 1))]
    pub number_of_guests: Option<i32>,
    #[validate(range(min = 1))]
    pub table_number: Option<i32>
}

#[tracing::instrument(
    "Updating table",
    skip(db)
)]
pub async fn update_table(
    db: web::Data<Database>,
    table_id: web::Path<String>,
    form: web::Json<UpdateTableForm>
) -> ApiResult<HttpResponse> {
    form.validate()?;
    let form = form.into_inner();

    let changes = TableChangeset{
        number_of_guests: form.number_of_guests,
        table_number: form.table_number,
        updated_at: Utc::now()
    };

    if tables::update_table(&db, table_id.into_inner(), changes).await? == 0 {
        return Err(ApiError::not_found("table not found"));
    }

    Ok(ApiResponse::empty("Table updated successfully"))
}
