use diesel::{ExpressionMethods, OptionalExtension, QueryDsl, RunQueryDsl, SelectableHelper};

use crate::{models::{Menu, MenuChangeset}, schema::menus, utils::{Database, DbError}};

#[tracing::instrument(
    "Inserting menu into db",
    skip_all
)]
pub async fn insert_menu(db: &Database, menu: Menu) -> Result<Menu, DbError> {
    db.run(move |conn| {
        Ok(diesel::insert_into(menus::table)
            .values(&menu)
            .returning(Menu::as_returning())
            .get_result(conn)?)
    })
    .await
}

#[tracing::instrument(
    "Updating menu in db",
    skip(db, changes)
)]
pub async fn update_menu(db: &Database, menu_id: String, changes: MenuChangeset) -> Result<usize, DbError> {
    db.run(move |conn| {
        Ok(diesel::update(menus::table.filter(menus::menu_id.eq(menu_id)))
            .set(&changes)
            .execute(conn)?)
    })
    .await
}

// Dependent foods are left untouched
#[tracing::instrument(
    "Deleting menu from db",
    skip(db)
)]
pub async fn delete_menu(db: &Database, menu_id: String) -> Result<usize, DbError> {
    db.run(move |conn| {
        Ok(diesel::delete(menus::table.filter(menus::menu_id.eq(menu_id)))
            .execute(conn)?)
    })
    .await
}

#[tracing::instrument(
    "Getting menu from db",
    skip(db)
)]
pub async fn get_menu(db: &Database, menu_id: String) -> Result<Option<Menu>, DbError> {
    db.run(move |conn| {
        Ok(menus::table
            .filter(menus::menu_id.eq(menu_id))
            .select(Menu::as_select())
            .first(conn)
            .optional()?)
    })
    .await
}

#[tracing::instrument(
    "Getting all menus from db",
    skip_all
)]
pub async fn get_all_menus(db: &Database) -> Result<Vec<Menu>, DbError> {
    db.run(|conn| {
        Ok(menus::table
            .order(menus::created_at.asc())
            .select(Menu::as_select())
            .load(conn)?)
    })
    .await
}

#[tracing::instrument(
    "Checking menu exists",
    skip(db)
)]
pub async fn menu_exists(db: &Database, menu_id: String) -> Result<bool, DbError> {
    db.run(move |conn| {
        Ok(diesel::select(diesel::dsl::exists(
            menus::table.filter(menus::menu_id.eq(menu_id))
        ))
        .get_result::<bool>(conn)?)
    })
    .await
}
