use actix_web::{web, HttpResponse};
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::{db_interaction::tables::insert_table, models::Table, response::{ApiResponse, ApiResult}, utils::{public_id, Database}};

#[derive(Deserialize, Debug, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTableForm{
    #[validate(range(min = 1))]
    pub number_of_guests: i32,
    #[validate(range(min = 1))]
    pub table_number: i32
}

#[tracing::instrument(
    "Creating table",
    skip(db)
)]
pub async fn create_table(
    db: web::Data<Database>,
    form: web::Json<CreateTableForm>
) -> ApiResult<HttpResponse> {
    form.validate()?;

    let id = Uuid::new_v4();
    let now = Utc::now();
    let table = Table{
        id,
        table_id: public_id(&id),
        number_of_guests: form.number_of_guests,
        table_number: form.table_number,
        created_at: now,
        updated_at: now
    };

    let table = insert_table(&db, table).await?;

    Ok(ApiResponse::created("Table created successfully", table))
}
