use actix_web::{web, HttpResponse};
use chrono::Utc;
use serde::Deserialize;

use crate::{db_interaction::invoices, domain::{PaymentMethod, PaymentStatus}, models::InvoiceChangeset, response::{ApiError, ApiResponse, ApiResult}, utils::Database};

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInvoiceForm{
    pub payment_method: Option<PaymentMethod>,
    pub payment_status: Option<PaymentStatus>
}

// Unlike the other resources, answers with the invoice as updated
#[tracing::instrument(
    "Updating invoice",
    skip(db)
)]
pub async fn update_invoice(
    db: web::Data<Database>,
    invoice_id: web::Path<String>,
    form: web::Json<UpdateInvoiceForm>
) -> ApiResult<HttpResponse> {
    let form = form.into_inner();

    let changes = InvoiceChangeset{
        payment_method: form.payment_method.map(|method| method.as_str().to_string()),
        payment_status: form.payment_status.map(|status| status.as_str().to_string()),
        updated_at: Utc::now()
    };

    let invoice = invoices::update_invoice(&db, invoice_id.into_inner(), changes)
        .await?
        .ok_or_else(|| ApiError::not_found("invoice not found"))?;

    Ok(ApiResponse::ok("Invoice updated successfully", invoice))
}
