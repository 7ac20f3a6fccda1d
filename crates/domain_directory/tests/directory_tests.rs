//! Directory service tests over the in-memory store

use core_kernel::{CategoryId, RegistryError, UserId};
use domain_items::ItemStatus;
use test_utils::{TestRegistry, UserBuilder};

#[tokio::test]
async fn test_register_and_login() {
    let registry = TestRegistry::new();

    let user = registry
        .directory
        .register_user(
            UserBuilder::new()
                .with_email("mwazowski@university.edu")
                .with_username("mwazowski")
                .with_password("roar-practice-1")
                .build(),
        )
        .await
        .unwrap();

    let by_email = registry
        .directory
        .login("mwazowski@university.edu", "roar-practice-1")
        .await
        .unwrap();
    assert_eq!(by_email.id, user.id);

    let by_username = registry
        .directory
        .login("mwazowski", "roar-practice-1")
        .await
        .unwrap();
    assert_eq!(by_username.id, user.id);
}

#[tokio::test]
async fn test_login_failures_are_uniform() {
    let registry = TestRegistry::new();
    registry
        .directory
        .register_user(
            UserBuilder::new()
                .with_username("jsmith")
                .with_password("sufficiently-long")
                .build(),
        )
        .await
        .unwrap();

    // Wrong password and unknown account produce the same error shape
    let wrong_password = registry
        .directory
        .login("jsmith", "bad password")
        .await
        .unwrap_err();
    let unknown_user = registry
        .directory
        .login("nobody", "whatever password")
        .await
        .unwrap_err();

    assert!(matches!(wrong_password, RegistryError::Validation(_)));
    assert!(matches!(unknown_user, RegistryError::Validation(_)));
}

#[tokio::test]
async fn test_duplicate_registration_conflicts() {
    let registry = TestRegistry::new();
    registry
        .directory
        .register_user(UserBuilder::new().with_email("dup@university.edu").build())
        .await
        .unwrap();

    let err = registry
        .directory
        .register_user(UserBuilder::new().with_email("dup@university.edu").build())
        .await
        .unwrap_err();
    assert!(matches!(err, RegistryError::Conflict(_)));
}

#[tokio::test]
async fn test_update_profile_keeps_credentials() {
    let registry = TestRegistry::new();
    let user = registry
        .directory
        .register_user(
            UserBuilder::new()
                .with_username("renamed")
                .with_password("original-pass-123")
                .build(),
        )
        .await
        .unwrap();

    registry
        .directory
        .update_user_profile(user.id, "New".to_string(), "Name".to_string())
        .await
        .unwrap();

    let logged_in = registry
        .directory
        .login("renamed", "original-pass-123")
        .await
        .unwrap();
    assert_eq!(logged_in.first_name, "New");
}

#[tokio::test]
async fn test_unknown_user_lookup() {
    let registry = TestRegistry::new();
    let err = registry.directory.get_user(UserId::new()).await.unwrap_err();
    assert!(matches!(err, RegistryError::NotFound { .. }));
}

#[tokio::test]
async fn test_category_crud() {
    let registry = TestRegistry::new();

    let category = registry.seed_category("Electronics").await;
    let renamed = registry
        .directory
        .rename_category(category.id, "Devices".to_string())
        .await
        .unwrap();
    assert_eq!(renamed.name, "Devices");

    assert_eq!(registry.directory.list_categories().await.unwrap().len(), 1);

    registry.directory.delete_category(category.id).await.unwrap();
    assert!(registry.directory.list_categories().await.unwrap().is_empty());

    let err = registry
        .directory
        .get_category(CategoryId::new())
        .await
        .unwrap_err();
    assert!(matches!(err, RegistryError::NotFound { .. }));
}

#[tokio::test]
async fn test_delete_category_in_use_conflicts() {
    let registry = TestRegistry::new();
    let item = registry.seed_item(ItemStatus::Found).await;

    let err = registry
        .directory
        .delete_category(item.category_id)
        .await
        .unwrap_err();
    assert!(matches!(err, RegistryError::Conflict(_)));
}

#[tokio::test]
async fn test_department_crud() {
    let registry = TestRegistry::new();

    let department = registry.seed_department("College of Nursing").await;
    let updated = registry
        .directory
        .update_department(
            department.id,
            "College of Nursing".to_string(),
            Some("South Wing".to_string()),
        )
        .await
        .unwrap();
    assert_eq!(updated.building.as_deref(), Some("South Wing"));

    registry
        .directory
        .delete_department(department.id)
        .await
        .unwrap();
    assert!(registry.directory.list_departments().await.unwrap().is_empty());
}
