use actix_web::{web, HttpResponse};

use crate::{db_interaction::tables, response::{ApiError, ApiResponse, ApiResult}, utils::Database};

#[tracing::instrument(
    "Getting table by id",
    skip(db)
)]
pub async fn get_table(
    db: web::Data<Database>,
    table_id: web::Path<String>
) -> ApiResult<HttpResponse> {
    let table = tables::get_table(&db, table_id.into_inner())
        .await?
        .ok_or_else(|| ApiError::not_found("table not found"))?;

    Ok(ApiResponse::ok("Table retrieved successfully", table))
}

#[tracing::instrument(
    "Getting list of tables",
    skip(db)
)]
pub async fn get_all_tables(db: web::Data<Database>) -> ApiResult<HttpResponse> {
    let tables = tables::get_all_tables(&db).await?;

    Ok(ApiResponse::ok("Tables retrieved successfully", tables))
}
