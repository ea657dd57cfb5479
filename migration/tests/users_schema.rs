//! Runs the users migrations against a live Postgres database.
//!
//! `DATABASE_TEST_URL=postgres://... cargo test -p migration -- --ignored`

use entity::users;
use migration::m20191002_084500_add_picture_url_to_users::Migration as AddPictureUrl;
use migration::sea_orm::{
    ActiveModelTrait, ConnectionTrait, Database, DatabaseConnection, DbBackend, Set, Statement,
    Value,
};
use migration::{MigrationTrait, Migrator, MigratorTrait, SchemaManager};
use serial_test::serial;

#[derive(Debug, PartialEq)]
struct Column {
    nullable: bool,
    default: Option<String>,
}

async fn setup() -> DatabaseConnection {
    let url = std::env::var("DATABASE_TEST_URL").unwrap();
    if !(url.contains("localhost") || url.contains("127.0.0.1")) {
        panic!("Tests can only be run on a local database");
    }

    let db = Database::connect(url).await.unwrap();
    Migrator::fresh(&db).await.unwrap();
    db
}

async fn column(db: &DatabaseConnection, name: &str) -> Option<Column> {
    let row = db
        .query_one(Statement::from_sql_and_values(
            DbBackend::Postgres,
            "SELECT is_nullable::text AS is_nullable, column_default::text AS column_default \
             FROM information_schema.columns \
             WHERE table_schema = current_schema() AND table_name = 'users' AND column_name = $1",
            [Value::from(name)],
        ))
        .await
        .unwrap()?;

    Some(Column {
        nullable: row.try_get::<String>("", "is_nullable").unwrap() == "YES",
        default: row.try_get("", "column_default").unwrap(),
    })
}

fn relaxed_expert_mode() -> Option<Column> {
    Some(Column {
        nullable: true,
        default: Some("false".to_string()),
    })
}

#[tokio::test]
#[serial]
#[ignore = "needs a local Postgres at DATABASE_TEST_URL"]
async fn upgrade_relaxes_users() {
    let db = setup().await;

    assert_eq!(
        column(&db, "picture_url").await,
        Some(Column {
            nullable: true,
            default: None,
        })
    );
    assert_eq!(column(&db, "expert_mode").await, relaxed_expert_mode());

    let user = users::ActiveModel {
        email: Set("default@example.com".to_string()),
        ..Default::default()
    }
    .insert(&db)
    .await
    .unwrap();
    assert_eq!(user.expert_mode, Some(false));
    assert_eq!(user.picture_url, None);
}

#[tokio::test]
#[serial]
#[ignore = "needs a local Postgres at DATABASE_TEST_URL"]
async fn downgrade_round_trip() {
    let db = setup().await;

    Migrator::down(&db, Some(1)).await.unwrap();
    assert_eq!(column(&db, "picture_url").await, None);
    assert_eq!(
        column(&db, "expert_mode").await,
        Some(Column {
            nullable: false,
            default: Some("false".to_string()),
        })
    );

    Migrator::up(&db, None).await.unwrap();
    assert!(column(&db, "picture_url").await.is_some());
    assert_eq!(column(&db, "expert_mode").await, relaxed_expert_mode());
}

#[tokio::test]
#[serial]
#[ignore = "needs a local Postgres at DATABASE_TEST_URL"]
async fn downgrade_rejects_null_expert_mode() {
    let db = setup().await;

    users::ActiveModel {
        email: Set("undecided@example.com".to_string()),
        expert_mode: Set(None),
        ..Default::default()
    }
    .insert(&db)
    .await
    .unwrap();

    let err = Migrator::down(&db, Some(1)).await.unwrap_err();
    assert!(err.to_string().contains("null values"), "{err}");

    assert!(column(&db, "picture_url").await.is_some());
    assert_eq!(column(&db, "expert_mode").await, relaxed_expert_mode());
}

#[tokio::test]
#[serial]
#[ignore = "needs a local Postgres at DATABASE_TEST_URL"]
async fn upgrade_twice_is_a_duplicate_column() {
    let db = setup().await;

    let manager = SchemaManager::new(&db);
    let err = AddPictureUrl.up(&manager).await.unwrap_err();
    assert!(err.to_string().contains("already exists"), "{err}");
}
