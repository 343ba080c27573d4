use actix_web::{web, HttpResponse};
use secrecy::SecretString;
use serde::Deserialize;
use validator::{Validate, ValidationErrors};

use crate::{auth::Tokenizer, db_interaction::users::{get_user_by_email, set_user_tokens}, password::verify_password, response::{ApiError, ApiResponse, ApiResult}, utils::Database};

use super::{issue_tokens, validate_password_present, with_password_rule};

#[derive(Deserialize, Debug, Validate)]
pub struct LoginForm{
    #[validate(email)]
    pub email: String,
    pub password: SecretString
}

impl LoginForm {
    pub fn check(&self) -> Result<(), ValidationErrors> {
        with_password_rule(self.validate(), validate_password_present(&self.password))
    }
}

// Every successful login replaces the stored token pair
#[tracing::instrument(
    "Logging in user",
    skip(db, tokenizer, form),
    fields(email = %form.email)
)]
pub async fn login(
    db: web::Data<Database>,
    tokenizer: web::Data<Tokenizer>,
    form: web::Json<LoginForm>
) -> ApiResult<HttpResponse> {
    form.check()?;
    let form = form.into_inner();

    let user = get_user_by_email(&db, form.email)
        .await?
        .ok_or_else(|| ApiError::not_found("user not found"))?;

    let matches = verify_password(form.password, user.password.clone())
        .await
        .map_err(ApiError::Internal)?;

    if !matches {
        tracing::info!("Passwords did not match");
        return Err(ApiError::unauthorized("invalid credentials"));
    }

    let tokens = issue_tokens(&tokenizer, &user)?;
    let user = set_user_tokens(&db, user.user_id, Some(tokens))
        .await?
        .ok_or_else(|| ApiError::not_found("user not found"))?;

    Ok(ApiResponse::ok("Login successful", user))
}
