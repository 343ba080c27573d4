mod get;
mod login;
mod logout;
mod refresh;
mod signup;

use secrecy::{ExposeSecret, SecretString};
use validator::{ValidationError, ValidationErrors};

use crate::{auth::{jwt::TokenError, TokenPair, TokenSubject, Tokenizer}, models::User};

pub use get::{get_all_users, get_user, UserProfile};
pub use login::login;
pub use logout::logout;
pub use refresh::refresh_token;
pub use signup::signup;

fn validate_password(password: &SecretString) -> Result<(), ValidationError> {
    if password.expose_secret().chars().count() < 6 {
        return Err(ValidationError::new("password must be at least 6 characters"));
    }
    Ok(())
}

fn validate_password_present(password: &SecretString) -> Result<(), ValidationError> {
    if password.expose_secret().is_empty() {
        return Err(ValidationError::new("password is required"));
    }
    Ok(())
}

// Reports the derived field rules and the password rule together
fn with_password_rule(
    fields: Result<(), ValidationErrors>,
    password: Result<(), ValidationError>
) -> Result<(), ValidationErrors> {
    let mut errors = fields.err().unwrap_or_else(ValidationErrors::new);

    if let Err(e) = password {
        errors.add("password", e);
    }

    if errors.errors().is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn issue_tokens(tokenizer: &Tokenizer, user: &User) -> Result<TokenPair, TokenError> {
    tokenizer.generate_pair(TokenSubject{
        user_id: &user.user_id,
        name: &user.name,
        email: &user.email,
        avatar: user.avatar.as_deref().unwrap_or_default()
    })
}
