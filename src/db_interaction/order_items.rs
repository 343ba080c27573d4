use std::collections::HashSet;

use diesel::{ExpressionMethods, NullableExpressionMethods, OptionalExtension, QueryDsl, RunQueryDsl, SelectableHelper, JoinOnDsl};
use serde::{Deserialize, Serialize};

use crate::{models::{OrderItemChangeset, OrderItemModel}, schema::{foods, order_items, orders, tables}, utils::{Database, DbError}};

// One order item joined with its food, order and table. Any of the joined
// records may be missing, in which case its fields are null.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BillingItem{
    pub amount: Option<f64>,
    pub food_name: Option<String>,
    pub food_image: Option<String>,
    pub quantity: String,
    pub table_number: Option<i32>,
    pub table_id: Option<String>,
    pub order_id: Option<String>
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BillingView{
    pub payment_due: f64,
    pub total_count: i64,
    pub table_number: Option<i32>,
    pub order_items: Vec<BillingItem>
}

type BillingKey = (Option<String>, Option<String>, Option<i32>);

// Groups rows by (orderId, tableId, tableNumber) in first-seen order. Rows
// without a food price add nothing to the amount due but still count.
pub fn group_billing(rows: Vec<BillingItem>) -> Vec<BillingView> {
    let mut groups: Vec<(BillingKey, BillingView)> = Vec::new();

    for row in rows {
        let key = (row.order_id.clone(), row.table_id.clone(), row.table_number);

        let i = match groups.iter().position(|(k, _)| *k == key) {
            Some(i) => i,
            None => {
                groups.push((key, BillingView{
                    payment_due: 0.0,
                    total_count: 0,
                    table_number: row.table_number,
                    order_items: Vec::new()
                }));
                groups.len() - 1
            }
        };

        let view = &mut groups[i].1;
        view.payment_due += row.amount.unwrap_or(0.0);
        view.total_count += 1;
        view.order_items.push(row);
    }

    groups.into_iter().map(|(_, view)| view).collect()
}

#[tracing::instrument(
    "Inserting order items into db",
    skip_all,
    fields(count = items.len())
)]
pub async fn insert_order_items(db: &Database, items: Vec<OrderItemModel>) -> Result<Vec<OrderItemModel>, DbError> {
    db.run(move |conn| {
        Ok(diesel::insert_into(order_items::table)
            .values(&items)
            .returning(OrderItemModel::as_returning())
            .get_results(conn)?)
    })
    .await
}

#[tracing::instrument(
    "Updating order item in db",
    skip(db, changes)
)]
pub async fn update_order_item(db: &Database, order_item_id: String, changes: OrderItemChangeset) -> Result<usize, DbError> {
    db.run(move |conn| {
        Ok(diesel::update(order_items::table.filter(order_items::order_item_id.eq(order_item_id)))
            .set(&changes)
            .execute(conn)?)
    })
    .await
}

#[tracing::instrument(
    "Deleting order item from db",
    skip(db)
)]
pub async fn delete_order_item(db: &Database, order_item_id: String) -> Result<usize, DbError> {
    db.run(move |conn| {
        Ok(diesel::delete(order_items::table.filter(order_items::order_item_id.eq(order_item_id)))
            .execute(conn)?)
    })
    .await
}

#[tracing::instrument(
    "Getting order item from db",
    skip(db)
)]
pub async fn get_order_item(db: &Database, order_item_id: String) -> Result<Option<OrderItemModel>, DbError> {
    db.run(move |conn| {
        Ok(order_items::table
            .filter(order_items::order_item_id.eq(order_item_id))
            .select(OrderItemModel::as_select())
            .first(conn)
            .optional()?)
    })
    .await
}

#[tracing::instrument(
    "Getting all order items from db",
    skip_all
)]
pub async fn get_all_order_items(db: &Database) -> Result<Vec<OrderItemModel>, DbError> {
    db.run(|conn| {
        Ok(order_items::table
            .order(order_items::created_at.asc())
            .select(OrderItemModel::as_select())
            .load(conn)?)
    })
    .await
}

// Food ids from `food_ids` that have no matching food
#[tracing::instrument(
    "Finding unknown food ids",
    skip(db)
)]
pub async fn missing_food_ids(db: &Database, food_ids: Vec<String>) -> Result<Vec<String>, DbError> {
    db.run(move |conn| {
        let found: HashSet<String> = foods::table
            .filter(foods::food_id.eq_any(&food_ids))
            .select(foods::food_id)
            .load::<String>(conn)?
            .into_iter()
            .collect();

        let mut seen = HashSet::new();
        Ok(food_ids.into_iter()
            .filter(|id| !found.contains(id) && seen.insert(id.clone()))
            .collect())
    })
    .await
}

#[tracing::instrument(
    "Getting joined order items with food, order and table",
    skip(db)
)]
pub async fn get_billing_view(db: &Database, order_id: String) -> Result<Vec<BillingView>, DbError> {
    let rows = db.run(move |conn| {
        let rows = order_items::table
            .left_join(foods::table.on(foods::food_id.eq(order_items::food_id)))
            .left_join(orders::table.on(orders::order_id.eq(order_items::order_id)))
            .left_join(tables::table.on(tables::table_id.nullable().eq(orders::table_id.nullable())))
            .filter(order_items::order_id.eq(order_id))
            .order(order_items::created_at.asc())
            .select((
                foods::price.nullable(),
                foods::name.nullable(),
                foods::food_image.nullable(),
                order_items::quantity,
                tables::table_number.nullable(),
                tables::table_id.nullable(),
                orders::order_id.nullable()
            ))
            .load::<(Option<f64>, Option<String>, Option<String>, String, Option<i32>, Option<String>, Option<String>)>(conn)?;

        Ok::<_, DbError>(rows)
    })
    .await?;

    let items = rows.into_iter()
        .map(|(amount, food_name, food_image, quantity, table_number, table_id, order_id)| BillingItem{
            amount,
            food_name,
            food_image,
            quantity,
            table_number,
            table_id,
            order_id
        })
        .collect();

    Ok(group_billing(items))
}
