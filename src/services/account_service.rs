//! Account Service - registration and login verification

use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use super::ServiceError;
use crate::models::account::{self, Entity as Account};

/// Register a new account and return the stored row, including its
/// generated `account_id`.
///
/// Checks run in order: blank username, password shorter than 4
/// characters, username already taken. The uniqueness check is a
/// find-then-insert; the `UNIQUE` column constraint backstops the race.
pub async fn register_account(
    db: &DatabaseConnection,
    username: &str,
    password: &str,
) -> Result<account::Model, ServiceError> {
    if username.trim().is_empty() {
        return Err(ServiceError::Validation(
            "Username must not be blank.".to_string(),
        ));
    }
    if password.chars().count() < 4 {
        return Err(ServiceError::Validation(
            "Password must be at least 4 characters.".to_string(),
        ));
    }

    let existing = Account::find()
        .filter(account::Column::Username.eq(username))
        .one(db)
        .await?;
    if existing.is_some() {
        return Err(ServiceError::Conflict(
            "An account with that username already exists. Please try a different username."
                .to_string(),
        ));
    }

    let new_account = account::ActiveModel {
        username: Set(username.to_string()),
        password: Set(password.to_string()),
        ..Default::default()
    };

    let saved = new_account.insert(db).await?;
    tracing::info!("Registered account {} ({})", saved.account_id, saved.username);

    Ok(saved)
}

/// Verify login credentials with a single exact-match query on both
/// columns. Unknown username and wrong password are indistinguishable to
/// the caller.
pub async fn verify_login(
    db: &DatabaseConnection,
    username: &str,
    password: &str,
) -> Result<account::Model, ServiceError> {
    let matched = Account::find()
        .filter(account::Column::Username.eq(username))
        .filter(account::Column::Password.eq(password))
        .one(db)
        .await?;

    match matched {
        Some(account) => Ok(account),
        None => {
            tracing::warn!("Failed login attempt for username: {}", username);
            Err(ServiceError::Unauthorized(
                "Invalid username/password combination.".to_string(),
            ))
        }
    }
}
