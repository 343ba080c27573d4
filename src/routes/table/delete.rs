use actix_web::{web, HttpResponse};

use crate::{db_interaction::tables, response::{ApiError, ApiResponse, ApiResult}, utils::Database};

#[tracing::instrument(
    "Deleting table by id",
    skip(db)
)]
pub async fn delete_table(
    db: web::Data<Database>,
    table_id: web::Path<String>
) -> ApiResult<HttpResponse> {
    if tables::delete_table(&db, table_id.into_inner()).await? == 0 {
        return Err(ApiError::not_found("table not found"));
    }

    Ok(ApiResponse::empty("Table deleted successfully"))
}
