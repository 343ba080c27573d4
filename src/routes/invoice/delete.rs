use actix_web::{web, HttpResponse};

use crate::{db_interaction::invoices, response::{ApiError, ApiResponse, ApiResult}, utils::Database};

#[tracing::instrument(
    "Deleting invoice by id",
    skip(db)
)]
pub async fn delete_invoice(
    db: web::Data<Database>,
    invoice_id: web::Path<String>
) -> ApiResult<HttpResponse> {
    if invoices::delete_invoice(&db, invoice_id.into_inner()).await? == 0 {
        return Err(ApiError::not_found("invoice not found"));
    }

    Ok(ApiResponse::empty("Invoice deleted successfully"))
}
