//! Integration tests for the User repository using in-memory SurrealDB.

use crewnotes_core::models::user::{CreateUser, UpdateUser};
use crewnotes_core::repository::UserRepository;
use crewnotes_db::repository::SurrealUserRepository;
use crewnotes_db::verify_password;
use surrealdb::Surreal;
use surrealdb::engine::local::Mem;

/// Helper: spin up in-memory DB and run migrations.
async fn setup() -> Surreal<surrealdb::engine::local::Db> {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();
    crewnotes_db::run_migrations(&db).await.unwrap();
    db
}

fn alice() -> CreateUser {
    CreateUser {
        username: "alice".into(),
        password: "SuperSecret123!".into(),
        roles: vec!["Employee".into()],
    }
}

#[tokio::test]
async fn create_and_find_user() {
    let db = setup().await;
    let repo = SurrealUserRepository::new(db);

    let user = repo.create(alice()).await.unwrap();

    assert_eq!(user.username, "alice");
    assert_eq!(user.roles, vec!["Employee".to_string()]);
    assert!(user.active, "new users default to active");

    // Password is hashed, never stored in plaintext.
    assert_ne!(user.password_hash, "SuperSecret123!");
    assert!(user.password_hash.starts_with("$argon2id$"));

    let fetched = repo.find_by_id(user.id).await.unwrap().unwrap();
    assert_eq!(fetched.id, user.id);
    assert_eq!(fetched.username, "alice");
}

#[tokio::test]
async fn find_by_username_is_exact_match() {
    let db = setup().await;
    let repo = SurrealUserRepository::new(db);
    repo.create(alice()).await.unwrap();

    assert!(repo.find_by_username("alice").await.unwrap().is_some());
    // Case-sensitive: a different casing is a different username.
    assert!(repo.find_by_username("Alice").await.unwrap().is_none());
    assert!(repo.find_by_username("bob").await.unwrap().is_none());
}

#[tokio::test]
async fn password_verification() {
    let db = setup().await;
    let repo = SurrealUserRepository::new(db);
    let user = repo.create(alice()).await.unwrap();

    assert!(verify_password("SuperSecret123!", &user.password_hash, None).unwrap());
    assert!(!verify_password("wrong", &user.password_hash, None).unwrap());
}

#[tokio::test]
async fn pepper_changes_the_hash_input() {
    let db = setup().await;
    let repo = SurrealUserRepository::with_pepper(db, "pepper!".into());
    let user = repo.create(alice()).await.unwrap();

    assert!(verify_password("SuperSecret123!", &user.password_hash, Some("pepper!")).unwrap());
    assert!(!verify_password("SuperSecret123!", &user.password_hash, None).unwrap());
}

#[tokio::test]
async fn update_overwrites_fields_and_keeps_password() {
    let db = setup().await;
    let repo = SurrealUserRepository::new(db);
    let user = repo.create(alice()).await.unwrap();

    let updated = repo
        .update(
            user.id,
            UpdateUser {
                username: "alice2".into(),
                roles: vec!["Employee".into(), "Manager".into()],
                active: false,
                password: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.username, "alice2");
    assert_eq!(updated.roles.len(), 2);
    assert!(!updated.active);
    // No password supplied: hash unchanged.
    assert_eq!(updated.password_hash, user.password_hash);
}

#[tokio::test]
async fn update_with_password_rehashes() {
    let db = setup().await;
    let repo = SurrealUserRepository::new(db);
    let user = repo.create(alice()).await.unwrap();

    let updated = repo
        .update(
            user.id,
            UpdateUser {
                username: "alice".into(),
                roles: vec!["Employee".into()],
                active: true,
                password: Some("NewPassword99!".into()),
            },
        )
        .await
        .unwrap();

    assert_ne!(updated.password_hash, user.password_hash);
    assert!(verify_password("NewPassword99!", &updated.password_hash, None).unwrap());
}

#[tokio::test]
async fn delete_removes_the_record() {
    let db = setup().await;
    let repo = SurrealUserRepository::new(db);
    let user = repo.create(alice()).await.unwrap();

    repo.delete(user.id).await.unwrap();
    assert!(repo.find_by_id(user.id).await.unwrap().is_none());
}

#[tokio::test]
async fn unique_index_rejects_duplicate_username() {
    let db = setup().await;
    let repo = SurrealUserRepository::new(db);
    repo.create(alice()).await.unwrap();

    // The storage-level backstop for the check-then-write race: a
    // second insert with the same username must fail even though no
    // application-level check ran here.
    let result = repo.create(alice()).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn find_all_returns_every_user() {
    let db = setup().await;
    let repo = SurrealUserRepository::new(db);

    assert!(repo.find_all().await.unwrap().is_empty());

    repo.create(alice()).await.unwrap();
    repo.create(CreateUser {
        username: "bob".into(),
        password: "Hunter2Hunter2".into(),
        roles: vec!["Manager".into()],
    })
    .await
    .unwrap();

    let users = repo.find_all().await.unwrap();
    assert_eq!(users.len(), 2);
    let names: Vec<_> = users.iter().map(|u| u.username.as_str()).collect();
    assert!(names.contains(&"alice"));
    assert!(names.contains(&"bob"));
}
