use std::{error::Error, fmt::Debug};

use diesel::{Connection, ExpressionMethods, OptionalExtension, QueryDsl, RunQueryDsl, SelectableHelper};
use thiserror::Error;

use crate::{models::Order, schema::{order_items, orders}, utils::{error_fmt_chain, Database, DbError}};

#[tracing::instrument(
    "Inserting order into db",
    skip_all
)]
pub async fn insert_order(db: &Database, order: Order) -> Result<Order, DbError> {
    db.run(move |conn| {
        Ok(diesel::insert_into(orders::table)
            .values(&order)
            .returning(Order::as_returning())
            .get_result(conn)?)
    })
    .await
}

#[tracing::instrument(
    "Moving order to another table",
    skip(db)
)]
pub async fn update_order_table(db: &Database, order_id: String, table_id: String) -> Result<usize, DbError> {
    db.run(move |conn| {
        Ok(diesel::update(orders::table.filter(orders::order_id.eq(order_id)))
            .set((
                orders::table_id.eq(table_id),
                orders::updated_at.eq(chrono::Utc::now())
            ))
            .execute(conn)?)
    })
    .await
}

// Error associated with deleting an order together with its items
#[derive(Error)]
pub enum DeleteOrderError{
    #[error("order_id: {0} doesn't exist")]
    NoOrderIdError(String),
    #[error(transparent)]
    DbError(#[from] DbError)
}

impl From<diesel::result::Error> for DeleteOrderError {
    fn from(e: diesel::result::Error) -> Self {
        DeleteOrderError::DbError(e.into())
    }
}

impl Debug for DeleteOrderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)?;
        error_fmt_chain(f, &self.source())
    }
}

// Order and all of its items go together or not at all; returns the number of
// order items removed
#[tracing::instrument(
    "Deleting order and its order items",
    skip(db)
)]
pub async fn delete_order_with_items(db: &Database, order_id: String) -> Result<usize, DeleteOrderError> {
    db.run(move |conn| {
        conn.transaction::<usize, DeleteOrderError, _>(|conn| {
            let deleted = diesel::delete(orders::table.filter(orders::order_id.eq(&order_id)))
                .execute(conn)?;

            if deleted == 0 {
                return Err(DeleteOrderError::NoOrderIdError(order_id.clone()))
            }

            let items = diesel::delete(order_items::table.filter(order_items::order_id.eq(&order_id)))
                .execute(conn)?;

            Ok(items)
        })
    })
    .await
}

#[tracing::instrument(
    "Getting order from db",
    skip(db)
)]
pub async fn get_order(db: &Database, order_id: String) -> Result<Option<Order>, DbError> {
    db.run(move |conn| {
        Ok(orders::table
            .filter(orders::order_id.eq(order_id))
            .select(Order::as_select())
            .first(conn)
            .optional()?)
    })
    .await
}

#[tracing::instrument(
    "Getting all orders from db",
    skip_all
)]
pub async fn get_all_orders(db: &Database) -> Result<Vec<Order>, DbError> {
    db.run(|conn| {
        Ok(orders::table
            .order(orders::created_at.asc())
            .select(Order::as_select())
            .load(conn)?)
    })
    .await
}

#[tracing::instrument(
    "Checking order exists",
    skip(db)
)]
pub async fn order_exists(db: &Database, order_id: String) -> Result<bool, DbError> {
    db.run(move |conn| {
        Ok(diesel::select(diesel::dsl::exists(
            orders::table.filter(orders::order_id.eq(order_id))
        ))
        .get_result::<bool>(conn)?)
    })
    .await
}
