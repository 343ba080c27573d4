use actix_web::{web, HttpResponse};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{db_interaction::{invoices, order_items::{get_billing_view, BillingItem, BillingView}}, models::Invoice, response::{ApiError, ApiResponse, ApiResult}, utils::Database};

/// An invoice together with what is owed on its order.
#[derive(Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceView{
    pub invoice_id: String,
    pub order_id: String,
    pub payment_method: Option<String>,
    pub payment_status: String,
    pub payment_due_date: DateTime<Utc>,
    pub payment_due: f64,
    pub table_number: Option<i32>,
    pub order_details: Vec<BillingItem>
}

impl InvoiceView {
    // An order without items owes nothing and has no table to show
    pub fn new(invoice: Invoice, billing: Option<BillingView>) -> Self {
        let (payment_due, table_number, order_details) = match billing {
            Some(view) => (view.payment_due, view.table_number, view.order_items),
            None => (0.0, None, Vec::new())
        };

        Self{
            invoice_id: invoice.invoice_id,
            order_id: invoice.order_id,
            payment_method: invoice.payment_method,
            payment_status: invoice.payment_status,
            payment_due_date: invoice.payment_due_date,
            payment_due,
            table_number,
            order_details
        }
    }
}

#[tracing::instrument(
    "Getting invoice by id",
    skip(db)
)]
pub async fn get_invoice(
    db: web::Data<Database>,
    invoice_id: web::Path<String>
) -> ApiResult<HttpResponse> {
    let invoice = invoices::get_invoice(&db, invoice_id.into_inner())
        .await?
        .ok_or_else(|| ApiError::not_found("invoice not found"))?;

    let billing = get_billing_view(&db, invoice.order_id.clone())
        .await?
        .into_iter()
        .next();

    Ok(ApiResponse::ok("Invoice retrieved successfully", InvoiceView::new(invoice, billing)))
}

#[tracing::instrument(
    "Getting list of invoices",
    skip(db)
)]
pub async fn get_all_invoices(db: web::Data<Database>) -> ApiResult<HttpResponse> {
    let invoices = invoices::get_all_invoices(&db).await?;

    Ok(ApiResponse::ok("Invoices retrieved successfully", invoices))
}
