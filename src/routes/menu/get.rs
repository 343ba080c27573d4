use actix_web::{web, HttpResponse};

use crate::{db_interaction::menus, response::{ApiError, ApiResponse, ApiResult}, utils::Database};

#[tracing::instrument(
    "Getting menu by id",
    skip(db)
)]
pub async fn get_menu(
    db: web::Data<Database>,
    menu_id: web::Path<String>
) -> ApiResult<HttpResponse> {
    let menu = menus::get_menu(&db, menu_id.into_inner())
        .await?
        .ok_or_else(|| ApiError::not_found("menu not found"))?;

    Ok(ApiResponse::ok("Menu retrieved successfully", menu))
}

#[tracing::instrument(
    "Getting list of menus",
    skip(db)
)]
pub async fn get_all_menus(db: web::Data<Database>) -> ApiResult<HttpResponse> {
    let menus = menus::get_all_menus(&db).await?;

    Ok(ApiResponse::ok("Menus retrieved successfully", menus))
}
