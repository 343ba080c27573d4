mod delete;
mod get;
mod post;
mod update;

use chrono::{DateTime, Utc};

use crate::response::ApiError;

pub use delete::delete_menu;
pub use get::{get_all_menus, get_menu};
pub use post::create_menu;
pub use update::update_menu;

// A menu window is only checked when both ends are supplied
fn check_menu_window(
    start_date: Option<DateTime<Utc>>,
    end_date: Option<DateTime<Utc>>,
    now: DateTime<Utc>
) -> Result<(), ApiError> {
    match (start_date, end_date) {
        (Some(start), Some(end)) if start <= now || end <= start => {
            Err(ApiError::bad_request("start date and end date must be in the future"))
        },
        _ => Ok(())
    }
}
