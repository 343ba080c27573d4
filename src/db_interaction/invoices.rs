use diesel::{ExpressionMethods, OptionalExtension, QueryDsl, RunQueryDsl, SelectableHelper};

use crate::{models::{Invoice, InvoiceChangeset}, schema::invoices, utils::{Database, DbError}};

#[tracing::instrument(
    "Inserting invoice into db",
    skip_all
)]
pub async fn insert_invoice(db: &Database, invoice: Invoice) -> Result<Invoice, DbError> {
    db.run(move |conn| {
        Ok(diesel::insert_into(invoices::table)
            .values(&invoice)
            .returning(Invoice::as_returning())
            .get_result(conn)?)
    })
    .await
}

// Returns the invoice as it is after the update, None when nothing matched
#[tracing::instrument(
    "Updating invoice in db",
    skip(db, changes)
)]
pub async fn update_invoice(db: &Database, invoice_id: String, changes: InvoiceChangeset) -> Result<Option<Invoice>, DbError> {
    db.run(move |conn| {
        Ok(diesel::update(invoices::table.filter(invoices::invoice_id.eq(invoice_id)))
            .set(&changes)
            .returning(Invoice::as_returning())
            .get_result(conn)
            .optional()?)
    })
    .await
}

#[tracing::instrument(
    "Deleting invoice from db",
    skip(db)
)]
pub async fn delete_invoice(db: &Database, invoice_id: String) -> Result<usize, DbError> {
    db.run(move |conn| {
        Ok(diesel::delete(invoices::table.filter(invoices::invoice_id.eq(invoice_id)))
            .execute(conn)?)
    })
    .await
}

#[tracing::instrument(
    "Getting invoice from db",
    skip(db)
)]
pub async fn get_invoice(db: &Database, invoice_id: String) -> Result<Option<Invoice>, DbError> {
    db.run(move |conn| {
        Ok(invoices::table
            .filter(invoices::invoice_id.eq(invoice_id))
            .select(Invoice::as_select())
            .first(conn)
            .optional()?)
    })
    .await
}

#[tracing::instrument(
    "Getting all invoices from db",
    skip_all
)]
pub async fn get_all_invoices(db: &Database) -> Result<Vec<Invoice>, DbError> {
    db.run(|conn| {
        Ok(invoices::table
            .order(invoices::created_at.asc())
            .select(Invoice::as_select())
            .load(conn)?)
    })
    .await
}
