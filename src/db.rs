use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbErr, Statement};

pub async fn init_db(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(database_url).await?;

    // Run migrations manually (simple SQL)
    run_migrations(&db).await?;

    Ok(db)
}

async fn run_migrations(db: &DatabaseConnection) -> Result<(), DbErr> {
    // UNIQUE on username backstops the service-level duplicate check
    db.execute(Statement::from_string(
        db.get_database_backend(),
        r#"
        CREATE TABLE IF NOT EXISTS account (
            account_id INTEGER PRIMARY KEY AUTOINCREMENT,
            username TEXT NOT NULL UNIQUE,
            password TEXT NOT NULL
        )
        "#
        .to_owned(),
    ))
    .await?;

    db.execute(Statement::from_string(
        db.get_database_backend(),
        r#"
        CREATE TABLE IF NOT EXISTS message (
            message_id INTEGER PRIMARY KEY AUTOINCREMENT,
            posted_by INTEGER NOT NULL,
            message_text TEXT NOT NULL,
            time_posted_epoch INTEGER NOT NULL,
            FOREIGN KEY (posted_by) REFERENCES account (account_id)
        )
        "#
        .to_owned(),
    ))
    .await?;

    Ok(())
}
