use diesel::{ExpressionMethods, OptionalExtension, QueryDsl, RunQueryDsl, SelectableHelper};

use crate::{models::{Table, TableChangeset}, schema::tables, utils::{Database, DbError}};

#[tracing::instrument(
    "Inserting table into db",
    skip_all
)]
pub async fn insert_table(db: &Database, table: Table) -> Result<Table, DbError> {
    db.run(move |conn| {
        Ok(diesel::insert_into(tables::table)
            .values(&table)
            .returning(Table::as_returning())
            .get_result(conn)?)
    })
    .await
}

// Returns the number of matched rows
#[tracing::instrument(
    "Updating table in db",
    skip(db, changes)
)]
pub async fn update_table(db: &Database, table_id: String, changes: TableChangeset) -> Result<usize, DbError> {
    db.run(move |conn| {
        Ok(diesel::update(tables::table.filter(tables::table_id.eq(table_id)))
            .set(&changes)
            .execute(conn)?)
    })
    .await
}

#[tracing::instrument(
    "Deleting table from db",
    skip(db)
)]
pub async fn delete_table(db: &Database, table_id: String) -> Result<usize, DbError> {
    db.run(move |conn| {
        Ok(diesel::delete(tables::table.filter(tables::table_id.eq(table_id)))
            .execute(conn)?)
    })
    .await
}

#[tracing::instrument(
    "Getting table from db",
    skip(db)
)]
pub async fn get_table(db: &Database, table_id: String) -> Result<Option<Table>, DbError> {
    db.run(move |conn| {
        Ok(tables::table
            .filter(tables::table_id.eq(table_id))
            .select(Table::as_select())
            .first(conn)
            .optional()?)
    })
    .await
}

#[tracing::instrument(
    "Getting all tables from db",
    skip_all
)]
pub async fn get_all_tables(db: &Database) -> Result<Vec<Table>, DbError> {
    db.run(|conn| {
        Ok(tables::table
            .order(tables::created_at.asc())
            .select(Table::as_select())
            .load(conn)?)
    })
    .await
}

#[tracing::instrument(
    "Checking table exists",
    skip(db)
)]
pub async fn table_exists(db: &Database, table_id: String) -> Result<bool, DbError> {
    db.run(move |conn| {
        Ok(diesel::select(diesel::dsl::exists(
            tables::table.filter(tables::table_id.eq(table_id))
        ))
        .get_result::<bool>(conn)?)
    })
    .await
}
