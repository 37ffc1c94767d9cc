//! Service-level tests: check ordering and sentinel semantics that the
//! HTTP tests only observe indirectly.

use sea_orm::DatabaseConnection;

use chirper::services::{ServiceError, account_service, message_service};

async fn setup_test_db() -> DatabaseConnection {
    chirper::db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB")
}

fn validation_message(err: ServiceError) -> String {
    match err {
        ServiceError::Validation(msg) => msg,
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[tokio::test]
async fn register_checks_username_before_password() {
    let db = setup_test_db().await;

    // Both fields are invalid; the username check wins
    let err = account_service::register_account(&db, "  ", "ab")
        .await
        .unwrap_err();
    assert_eq!(validation_message(err), "Username must not be blank.");

    let err = account_service::register_account(&db, "bob", "ab")
        .await
        .unwrap_err();
    assert_eq!(
        validation_message(err),
        "Password must be at least 4 characters."
    );
}

#[tokio::test]
async fn register_returns_generated_ids() {
    let db = setup_test_db().await;

    let first = account_service::register_account(&db, "alice", "hunter2")
        .await
        .unwrap();
    let second = account_service::register_account(&db, "bob", "pass1")
        .await
        .unwrap();

    assert_ne!(first.account_id, second.account_id);
    assert_eq!(first.username, "alice");
    // Stored verbatim, no hashing
    assert_eq!(first.password, "hunter2");
}

#[tokio::test]
async fn add_message_checks_text_before_author() {
    let db = setup_test_db().await;

    // Blank text with a nonexistent author reports the text problem
    let err = message_service::add_message(&db, 9999, "", 0)
        .await
        .unwrap_err();
    assert_eq!(validation_message(err), "Your message must not be blank.");

    let err = message_service::add_message(&db, 9999, &"a".repeat(256), 0)
        .await
        .unwrap_err();
    assert_eq!(
        validation_message(err),
        "Your message must not exceed 255 characters."
    );

    let err = message_service::add_message(&db, 9999, "fine text", 0)
        .await
        .unwrap_err();
    assert_eq!(validation_message(err), "You do not exist!");
}

#[tokio::test]
async fn get_message_absence_is_none() {
    let db = setup_test_db().await;

    let found = message_service::get_message(&db, 42).await.unwrap();
    assert!(found.is_none());
}

#[tokio::test]
async fn delete_message_row_counts() {
    let db = setup_test_db().await;
    let account = account_service::register_account(&db, "bob", "pass1")
        .await
        .unwrap();
    let message = message_service::add_message(&db, account.account_id, "bye", 1700000000)
        .await
        .unwrap();

    assert_eq!(
        message_service::delete_message(&db, message.message_id)
            .await
            .unwrap(),
        1
    );
    // Second delete finds nothing; still not an error
    assert_eq!(
        message_service::delete_message(&db, message.message_id)
            .await
            .unwrap(),
        0
    );
}

#[tokio::test]
async fn update_checks_text_before_existence() {
    let db = setup_test_db().await;

    // Invalid text on a nonexistent message reports the text problem
    let err = message_service::update_message_text(&db, " ", 9999)
        .await
        .unwrap_err();
    assert_eq!(validation_message(err), "Your message must not be blank.");

    // Valid text on a nonexistent message reports the missing message
    let err = message_service::update_message_text(&db, "valid", 9999)
        .await
        .unwrap_err();
    assert_eq!(
        validation_message(err),
        "The message you are trying to update does not exist."
    );
}

#[tokio::test]
async fn update_touches_only_the_text() {
    let db = setup_test_db().await;
    let account = account_service::register_account(&db, "bob", "pass1")
        .await
        .unwrap();
    let message = message_service::add_message(&db, account.account_id, "before", 1234567890)
        .await
        .unwrap();

    let rows = message_service::update_message_text(&db, "after", message.message_id)
        .await
        .unwrap();
    assert_eq!(rows, 1);

    let reloaded = message_service::get_message(&db, message.message_id)
        .await
        .unwrap()
        .expect("message still present");
    assert_eq!(reloaded.message_text, "after");
    assert_eq!(reloaded.posted_by, account.account_id);
    assert_eq!(reloaded.time_posted_epoch, 1234567890);
}

#[tokio::test]
async fn messages_by_account_filters_on_author() {
    let db = setup_test_db().await;
    let alice = account_service::register_account(&db, "alice", "hunter2")
        .await
        .unwrap();
    let bob = account_service::register_account(&db, "bob", "pass1")
        .await
        .unwrap();

    message_service::add_message(&db, alice.account_id, "one", 1)
        .await
        .unwrap();
    message_service::add_message(&db, bob.account_id, "two", 2)
        .await
        .unwrap();
    message_service::add_message(&db, alice.account_id, "three", 3)
        .await
        .unwrap();

    let all = message_service::get_all_messages(&db).await.unwrap();
    assert_eq!(all.len(), 3);

    let alices = message_service::get_all_messages_by_account(&db, alice.account_id)
        .await
        .unwrap();
    assert_eq!(alices.len(), 2);
    assert!(alices.iter().all(|m| m.posted_by == alice.account_id));

    let nobodys = message_service::get_all_messages_by_account(&db, 9999)
        .await
        .unwrap();
    assert!(nobodys.is_empty());
}
