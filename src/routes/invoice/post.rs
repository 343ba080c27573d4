use actix_web::{web, HttpResponse};
use chrono::{Duration, Utc};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::{db_interaction::{invoices::insert_invoice, orders::order_exists}, domain::{PaymentMethod, PaymentStatus}, models::Invoice, response::{ApiError, ApiResponse, ApiResult}, utils::{public_id, Database}};

#[derive(Deserialize, Debug, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateInvoiceForm{
    #[validate(length(min = 1))]
    pub order_id: String,
    pub payment_method: Option<PaymentMethod>,
    pub payment_status: Option<PaymentStatus>
}

#[tracing::instrument(
    "Creating invoice",
    skip(db)
)]
pub async fn create_invoice(
    db: web::Data<Database>,
    form: web::Json<CreateInvoiceForm>
) -> ApiResult<HttpResponse> {
    form.validate()?;
    let form = form.into_inner();

    if !order_exists(&db, form.order_id.clone()).await? {
        return Err(ApiError::bad_request("order not found"));
    }

    let id = Uuid::new_v4();
    let now = Utc::now();
    let invoice = Invoice{
        id,
        invoice_id: public_id(&id),
        order_id: form.order_id,
        payment_method: form.payment_method.map(|method| method.as_str().to_string()),
        payment_status: form.payment_status.unwrap_or_default().as_str().to_string(),
        payment_due_date: now + Duration::hours(24),
        created_at: now,
        updated_at: now
    };

    let invoice = insert_invoice(&db, invoice).await?;

    Ok(ApiResponse::created("Invoice created successfully", invoice))
}
