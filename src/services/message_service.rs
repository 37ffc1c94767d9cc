//! Message Service - creation, retrieval, update and deletion of messages

use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use super::ServiceError;
use crate::models::account::Entity as Account;
use crate::models::message::{self, Entity as Message};

/// Maximum message length, in characters.
const MAX_MESSAGE_LEN: usize = 255;

fn validate_message_text(text: &str) -> Result<(), ServiceError> {
    if text.trim().is_empty() {
        return Err(ServiceError::Validation(
            "Your message must not be blank.".to_string(),
        ));
    }
    if text.chars().count() > MAX_MESSAGE_LEN {
        return Err(ServiceError::Validation(
            "Your message must not exceed 255 characters.".to_string(),
        ));
    }
    Ok(())
}

/// Create a new message and return the stored row, including its
/// generated `message_id`.
///
/// Checks run in order: blank text, text over 255 characters, `posted_by`
/// not referencing an existing account.
pub async fn add_message(
    db: &DatabaseConnection,
    posted_by: i32,
    message_text: &str,
    time_posted_epoch: i64,
) -> Result<message::Model, ServiceError> {
    validate_message_text(message_text)?;

    let author = Account::find_by_id(posted_by).one(db).await?;
    if author.is_none() {
        return Err(ServiceError::Validation("You do not exist!".to_string()));
    }

    let new_message = message::ActiveModel {
        posted_by: Set(posted_by),
        message_text: Set(message_text.to_string()),
        time_posted_epoch: Set(time_posted_epoch),
        ..Default::default()
    };

    let saved = new_message.insert(db).await?;
    tracing::info!("Account {} posted message {}", posted_by, saved.message_id);

    Ok(saved)
}

/// Every message in the store, in store order.
pub async fn get_all_messages(
    db: &DatabaseConnection,
) -> Result<Vec<message::Model>, ServiceError> {
    Ok(Message::find().all(db).await?)
}

/// Look up a message by id. Absence is `None`, not an error.
pub async fn get_message(
    db: &DatabaseConnection,
    message_id: i32,
) -> Result<Option<message::Model>, ServiceError> {
    Ok(Message::find_by_id(message_id).one(db).await?)
}

/// Delete a message by id with a single statement. Returns the number of
/// rows affected (0 or 1); 0 means there was nothing to delete.
pub async fn delete_message(
    db: &DatabaseConnection,
    message_id: i32,
) -> Result<u64, ServiceError> {
    let result = Message::delete_by_id(message_id).exec(db).await?;
    Ok(result.rows_affected)
}

/// Replace the text of an existing message in place.
///
/// Text checks run first (blank, then over 255 characters); existence is
/// checked last, by the update statement itself: a single
/// `UPDATE message SET message_text = ? WHERE message_id = ?` affecting
/// zero rows means the message does not exist.
pub async fn update_message_text(
    db: &DatabaseConnection,
    new_text: &str,
    message_id: i32,
) -> Result<u64, ServiceError> {
    validate_message_text(new_text)?;

    let result = Message::update_many()
        .col_expr(message::Column::MessageText, Expr::value(new_text))
        .filter(message::Column::MessageId.eq(message_id))
        .exec(db)
        .await?;

    if result.rows_affected == 0 {
        return Err(ServiceError::Validation(
            "The message you are trying to update does not exist.".to_string(),
        ));
    }

    Ok(result.rows_affected)
}

/// All messages posted by the given account, in store order. An unknown
/// account simply yields an empty list; no existence check is made.
pub async fn get_all_messages_by_account(
    db: &DatabaseConnection,
    account_id: i32,
) -> Result<Vec<message::Model>, ServiceError> {
    Ok(Message::find()
        .filter(message::Column::PostedBy.eq(account_id))
        .all(db)
        .await?)
}
