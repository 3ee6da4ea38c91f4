//! Integration tests for the user service using in-memory SurrealDB.

use crewnotes_core::error::CoreError;
use crewnotes_core::models::note::CreateNote;
use crewnotes_core::models::user::{CreateUser, UpdateUser};
use crewnotes_core::repository::NoteRepository;
use crewnotes_db::repository::{SurrealNoteRepository, SurrealUserRepository};
use crewnotes_service::UserService;
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem};

type TestUserService = UserService<SurrealUserRepository<Db>, SurrealNoteRepository<Db>>;

/// Helper: in-memory DB with migrations, service plus a raw note repo
/// for seeding.
async fn setup() -> (TestUserService, SurrealNoteRepository<Db>) {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();
    crewnotes_db::run_migrations(&db).await.unwrap();

    let note_repo = SurrealNoteRepository::new(db.clone());
    let service = UserService::new(
        SurrealUserRepository::new(db.clone()),
        note_repo.clone(),
    );
    (service, note_repo)
}

fn alice() -> CreateUser {
    CreateUser {
        username: "alice".into(),
        password: "SuperSecret123!".into(),
        roles: vec!["Employee".into()],
    }
}

fn update_of(user: &crewnotes_core::models::user::User) -> UpdateUser {
    UpdateUser {
        username: user.username.clone(),
        roles: user.roles.clone(),
        active: user.active,
        password: None,
    }
}

#[tokio::test]
async fn list_of_empty_collection_is_not_found() {
    let (service, _) = setup().await;

    let err = service.list().await.unwrap_err();
    assert!(matches!(err, CoreError::NotFound(_)));
    assert_eq!(err.to_string(), "No users found");
}

#[tokio::test]
async fn list_is_idempotent_without_writes() {
    let (service, _) = setup().await;
    service.create(alice()).await.unwrap();

    let first = service.list().await.unwrap();
    let second = service.list().await.unwrap();

    assert_eq!(first.len(), second.len());
    assert_eq!(first[0].id, second[0].id);
    assert_eq!(first[0].username, second[0].username);
}

#[tokio::test]
async fn create_requires_all_fields() {
    let (service, _) = setup().await;

    for input in [
        CreateUser {
            username: "".into(),
            ..alice()
        },
        CreateUser {
            password: "".into(),
            ..alice()
        },
    ] {
        let err = service.create(input).await.unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert_eq!(err.to_string(), "All fields are required");
    }
}

#[tokio::test]
async fn empty_roles_always_fail_validation() {
    let (service, _) = setup().await;

    let err = service
        .create(CreateUser {
            roles: vec![],
            ..alice()
        })
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::Validation(_)));

    // Same on update, even for an existing user.
    let user = service.create(alice()).await.unwrap();
    let err = service
        .update(
            user.id,
            UpdateUser {
                roles: vec![],
                ..update_of(&user)
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::Validation(_)));
}

#[tokio::test]
async fn duplicate_username_conflicts_on_create() {
    let (service, _) = setup().await;
    service.create(alice()).await.unwrap();

    let err = service
        .create(CreateUser {
            password: "OtherPassword1!".into(),
            roles: vec!["Manager".into()],
            ..alice()
        })
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::Conflict(_)));
    assert_eq!(err.to_string(), "Username is taken");
}

#[tokio::test]
async fn update_to_username_held_by_other_user_conflicts() {
    let (service, _) = setup().await;
    let alice = service.create(alice()).await.unwrap();
    let bob = service
        .create(CreateUser {
            username: "bob".into(),
            password: "Hunter2Hunter2".into(),
            roles: vec!["Employee".into()],
        })
        .await
        .unwrap();

    let err = service
        .update(
            bob.id,
            UpdateUser {
                username: alice.username.clone(),
                ..update_of(&bob)
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::Conflict(_)));

    // Keeping your own username is not a conflict.
    service.update(bob.id, update_of(&bob)).await.unwrap();
}

#[tokio::test]
async fn update_of_missing_user_is_not_found() {
    let (service, _) = setup().await;
    let ghost = uuid::Uuid::new_v4();

    let err = service
        .update(
            ghost,
            UpdateUser {
                username: "ghost".into(),
                roles: vec!["Employee".into()],
                active: true,
                password: None,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, CoreError::NotFound(_)));
    assert_eq!(err.to_string(), "User not found");
}

#[tokio::test]
async fn empty_password_on_update_means_unchanged() {
    let (service, _) = setup().await;
    let user = service.create(alice()).await.unwrap();

    let updated = service
        .update(
            user.id,
            UpdateUser {
                password: Some("".into()),
                ..update_of(&user)
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.password_hash, user.password_hash);

    let updated = service
        .update(
            user.id,
            UpdateUser {
                password: Some("BrandNewSecret1!".into()),
                ..update_of(&user)
            },
        )
        .await
        .unwrap();
    assert_ne!(updated.password_hash, user.password_hash);
}

#[tokio::test]
async fn delete_is_blocked_while_notes_reference_the_user() {
    let (service, note_repo) = setup().await;
    let user = service.create(alice()).await.unwrap();

    let note = note_repo
        .create(CreateNote {
            user: user.id,
            title: "Ticket 1".into(),
            text: "replace the fan".into(),
        })
        .await
        .unwrap();

    let err = service.delete(user.id).await.unwrap_err();
    assert!(matches!(err, CoreError::Conflict(_)));
    assert_eq!(err.to_string(), "User has assigned notes");

    // Once the note is gone, deletion goes through and reports the
    // record as it stood before the delete.
    note_repo.delete(note.id).await.unwrap();
    let deleted = service.delete(user.id).await.unwrap();
    assert_eq!(deleted.id, user.id);
    assert_eq!(deleted.username, "alice");
}

#[tokio::test]
async fn delete_of_missing_user_is_not_found() {
    let (service, _) = setup().await;

    let err = service.delete(uuid::Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, CoreError::NotFound(_)));
}
