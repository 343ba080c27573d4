use chrono::{DateTime, Utc};
use diesel::{ExpressionMethods, OptionalExtension, QueryDsl, RunQueryDsl, SelectableHelper};
use serde::{Deserialize, Serialize};

use crate::{models::{Food, FoodChangeset}, schema::foods, utils::{Database, DbError}};

pub const FOODS_PAGE_SIZE: usize = 50;

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct FoodsPage{
    pub has_more: bool,
    pub foods: Vec<Food>,
    pub next_cursor: Option<DateTime<Utc>>
}

// `rows` holds up to `limit + 1` records in cursor order; the extra record
// only signals that another page exists
pub fn paginate(mut rows: Vec<Food>, limit: usize) -> FoodsPage {
    let has_more = rows.len() > limit;
    rows.truncate(limit);

    let next_cursor = if has_more {
        rows.last().map(|food| food.created_at)
    } else {
        None
    };

    FoodsPage{ has_more, foods: rows, next_cursor }
}

#[tracing::instrument(
    "Inserting food into db",
    skip_all
)]
pub async fn insert_food(db: &Database, food: Food) -> Result<Food, DbError> {
    db.run(move |conn| {
        Ok(diesel::insert_into(foods::table)
            .values(&food)
            .returning(Food::as_returning())
            .get_result(conn)?)
    })
    .await
}

#[tracing::instrument(
    "Updating food in db",
    skip(db, changes)
)]
pub async fn update_food(db: &Database, food_id: String, changes: FoodChangeset) -> Result<usize, DbError> {
    db.run(move |conn| {
        Ok(diesel::update(foods::table.filter(foods::food_id.eq(food_id)))
            .set(&changes)
            .execute(conn)?)
    })
    .await
}

#[tracing::instrument(
    "Deleting food from db",
    skip(db)
)]
pub async fn delete_food(db: &Database, food_id: String) -> Result<usize, DbError> {
    db.run(move |conn| {
        Ok(diesel::delete(foods::table.filter(foods::food_id.eq(food_id)))
            .execute(conn)?)
    })
    .await
}

#[tracing::instrument(
    "Getting food from db",
    skip(db)
)]
pub async fn get_food(db: &Database, food_id: String) -> Result<Option<Food>, DbError> {
    db.run(move |conn| {
        Ok(foods::table
            .filter(foods::food_id.eq(food_id))
            .select(Food::as_select())
            .first(conn)
            .optional()?)
    })
    .await
}

#[tracing::instrument(
    "Getting page of foods from db",
    skip(db)
)]
pub async fn get_foods_page(
    db: &Database,
    cursor: Option<DateTime<Utc>>,
    limit: usize
) -> Result<FoodsPage, DbError> {
    let rows = db.run(move |conn| {
        let mut query = foods::table
            .select(Food::as_select())
            .order(foods::created_at.asc())
            .limit(limit as i64 + 1)
            .into_boxed();

        if let Some(cursor) = cursor {
            query = query.filter(foods::created_at.gt(cursor));
        }

        Ok::<_, DbError>(query.load(conn)?)
    })
    .await?;

    Ok(paginate(rows, limit))
}
