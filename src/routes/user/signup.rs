use actix_web::{web, HttpResponse};
use chrono::Utc;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

use crate::{auth::Tokenizer, db_interaction::users::{email_exists, insert_user, UserInsertError}, models::User, password::hash_password, response::{ApiError, ApiResponse, ApiResult}, utils::{public_id, Database}};

use super::{issue_tokens, validate_password, with_password_rule};

#[derive(Deserialize, Debug, Validate)]
pub struct SignupForm{
    #[validate(length(min = 2, max = 50))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub password: SecretString,
    pub avatar: Option<String>
}

impl SignupForm {
    pub fn check(&self) -> Result<(), ValidationErrors> {
        with_password_rule(self.validate(), validate_password(&self.password))
    }
}

#[tracing::instrument(
    "User signup started",
    skip(db, tokenizer, form),
    fields(email = %form.email)
)]
pub async fn signup(
    db: web::Data<Database>,
    tokenizer: web::Data<Tokenizer>,
    form: web::Json<SignupForm>
) -> ApiResult<HttpResponse> {
    form.check()?;
    let form = form.into_inner();

    if email_exists(&db, form.email.clone()).await? {
        return Err(ApiError::Conflict("email already exist".to_string()));
    }

    let password_hash = hash_password(form.password)
        .await
        .map_err(ApiError::Internal)?;

    let id = Uuid::new_v4();
    let now = Utc::now();
    let mut user = User{
        id,
        user_id: public_id(&id),
        name: form.name,
        email: form.email,
        password: password_hash.expose_secret().to_string(),
        avatar: form.avatar,
        token: None,
        refresh_token: None,
        created_at: now,
        updated_at: now
    };

    let tokens = issue_tokens(&tokenizer, &user)?;
    user.token = Some(tokens.token);
    user.refresh_token = Some(tokens.refresh_token);

    let user = insert_user(&db, user)
        .await
        .map_err(|e| match e {
            UserInsertError::EmailNotUnique(_) => ApiError::Conflict(e.to_string()),
            UserInsertError::DbError(e) => e.into()
        })?;

    Ok(ApiResponse::created("User created successfully", user))
}
