use actix_web::{web, HttpResponse};

use crate::{db_interaction::menus, response::{ApiError, ApiResponse, ApiResult}, utils::Database};

// Foods of the menu are left untouched
#[tracing::instrument(
    "Deleting menu by id",
    skip(db)
)]
pub async fn delete_menu(
    db: web::Data<Database>,
    menu_id: web::Path<String>
) -> ApiResult<HttpResponse> {
    if menus::delete_menu(&db, menu_id.into_inner()).await? == 0 {
        return Err(ApiError::not_found("menu not found"));
    }

    Ok(ApiResponse::empty("Menu deleted successfully"))
}
