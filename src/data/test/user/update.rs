use super::*;

/// A partial update only touches the submitted fields.
#[tokio::test]
async fn partial_update_leaves_other_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db)
        .bio("old bio")
        .flight_hours(100.0)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update(
            user.id,
            UpdateUserParams {
                bio: Some("new bio".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.bio.as_deref(), Some("new bio"));
    assert_eq!(updated.flight_hours, 100.0);
    assert_eq!(updated.username, user.username);

    Ok(())
}

/// Emails are normalized to lowercase on update, matching signup.
#[tokio::test]
async fn emails_are_lowercased() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update(
            user.id,
            UpdateUserParams {
                email: Some("New.Address@Example.COM".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.email, "new.address@example.com");

    Ok(())
}

/// Clearing a picture stores an empty key, which resolves to no URL.
#[tokio::test]
async fn empty_profile_pic_clears_it() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db)
        .profile_pic("images/profile/abc_old.png")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update(
            user.id,
            UpdateUserParams {
                profile_pic: Some(String::new()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.profile_pic.as_deref(), Some(""));

    Ok(())
}

/// Updating a missing user yields None.
#[tokio::test]
async fn missing_user_is_none() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo.update(9999, UpdateUserParams::default()).await?;

    assert!(result.is_none());

    Ok(())
}
