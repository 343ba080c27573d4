use std::{error::Error, fmt::Debug};

use chrono::Utc;
use diesel::{result::{DatabaseErrorKind, Error as DieselError}, ExpressionMethods, OptionalExtension, QueryDsl, RunQueryDsl, SelectableHelper};
use thiserror::Error;

use crate::{auth::TokenPair, models::User, schema::users, utils::{error_fmt_chain, Database, DbError}};

#[tracing::instrument(
    "Checking email is registered",
    skip(db)
)]
pub async fn email_exists(db: &Database, email: String) -> Result<bool, DbError> {
    db.run(move |conn| {
        Ok(diesel::select(diesel::dsl::exists(
            users::table.filter(users::email.eq(email))
        ))
        .get_result::<bool>(conn)?)
    })
    .await
}

// Error associated with inserting user to users table
#[derive(Error)]
pub enum UserInsertError{
    #[error("email already exist")]
    EmailNotUnique(#[source] DieselError),
    #[error(transparent)]
    DbError(#[from] DbError)
}

impl Debug for UserInsertError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)?;
        error_fmt_chain(f, &self.source())
    }
}

#[tracing::instrument(
    "Inserting user into the database",
    skip_all
)]
pub async fn insert_user(db: &Database, user: User) -> Result<User, UserInsertError> {
    db.run(move |conn| {
        let stored = diesel::insert_into(users::table)
            .values(&user)
            .returning(User::as_returning())
            .get_result(conn)
            .map_err(|e| match e {
                DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                    UserInsertError::EmailNotUnique(e)
                },
                other => UserInsertError::DbError(other.into())
            })?;

        Ok(stored)
    })
    .await
}

#[tracing::instrument(
    "Getting user from email",
    skip(db)
)]
pub async fn get_user_by_email(db: &Database, email: String) -> Result<Option<User>, DbError> {
    db.run(move |conn| {
        Ok(users::table
            .filter(users::email.eq(email))
            .select(User::as_select())
            .first(conn)
            .optional()?)
    })
    .await
}

#[tracing::instrument(
    "Getting user from user_id",
    skip(db)
)]
pub async fn get_user(db: &Database, user_id: String) -> Result<Option<User>, DbError> {
    db.run(move |conn| {
        Ok(users::table
            .filter(users::user_id.eq(user_id))
            .select(User::as_select())
            .first(conn)
            .optional()?)
    })
    .await
}

#[tracing::instrument(
    "Getting all users from db",
    skip_all
)]
pub async fn get_all_users(db: &Database) -> Result<Vec<User>, DbError> {
    db.run(|conn| {
        Ok(users::table
            .order(users::created_at.asc())
            .select(User::as_select())
            .load(conn)?)
    })
    .await
}

// Persists a freshly issued pair (or clears it with None) and returns the
// updated record
#[tracing::instrument(
    "Storing user tokens",
    skip(db, tokens)
)]
pub async fn set_user_tokens(db: &Database, user_id: String, tokens: Option<TokenPair>) -> Result<Option<User>, DbError> {
    let (token, refresh_token) = match tokens {
        Some(pair) => (Some(pair.token), Some(pair.refresh_token)),
        None => (None, None)
    };

    db.run(move |conn| {
        Ok(diesel::update(users::table.filter(users::user_id.eq(user_id)))
            .set((
                users::token.eq(token),
                users::refresh_token.eq(refresh_token),
                users::updated_at.eq(Utc::now())
            ))
            .returning(User::as_returning())
            .get_result(conn)
            .optional()?)
    })
    .await
}
