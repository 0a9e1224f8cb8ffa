use super::*;

/// Editing your own post updates the content and flags it edited.
#[tokio::test]
async fn owner_edit_marks_post_edited() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_social_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let post = factory::create_post(db, user.id).await?;

    let repo = PostRepository::new(db);
    let updated = repo
        .update_content(post.id, user.id, "Corrected callsign".to_string())
        .await?
        .unwrap();

    assert_eq!(updated.content, "Corrected callsign");
    assert!(updated.is_edited);

    Ok(())
}

/// Editing someone else's post looks exactly like editing a missing one.
#[tokio::test]
async fn cross_owner_edit_is_none() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_social_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let post = factory::create_post(db, owner.id).await?;

    let repo = PostRepository::new(db);

    let result = repo
        .update_content(post.id, other.id, "hijacked".to_string())
        .await?;
    assert!(result.is_none());

    // The post is untouched.
    let reloaded = repo.find_by_id(post.id).await?.unwrap();
    assert_eq!(reloaded.content, post.content);
    assert!(!reloaded.is_edited);

    Ok(())
}

/// Cross-owner deletes affect zero rows.
#[tokio::test]
async fn cross_owner_delete_is_zero_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_social_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let post = factory::create_post(db, owner.id).await?;

    let repo = PostRepository::new(db);

    assert_eq!(repo.delete_owned(post.id, other.id).await?, 0);
    assert_eq!(repo.delete_owned(post.id, owner.id).await?, 1);
    assert!(repo.find_by_id(post.id).await?.is_none());

    Ok(())
}
