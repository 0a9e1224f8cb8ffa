use super::*;

/// Login lookup matches by exact username.
#[tokio::test]
async fn finds_by_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db).username("maverick").build().await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_login("maverick").await?;

    assert_eq!(found.map(|u| u.id), Some(user.id));

    Ok(())
}

/// Login lookup matches by email regardless of case.
#[tokio::test]
async fn finds_by_email_case_insensitively() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db)
        .email("goose@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_login("Goose@Example.COM").await?;

    assert_eq!(found.map(|u| u.id), Some(user.id));

    Ok(())
}

/// Unknown logins yield None, not an error.
#[tokio::test]
async fn unknown_login_is_none() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    assert!(repo.find_by_login("nobody").await?.is_none());

    Ok(())
}
