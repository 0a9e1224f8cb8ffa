use super::*;

/// Comment updates and deletes are scoped to the author.
#[tokio::test]
async fn updates_and_deletes_are_owner_scoped() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_social_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let author = factory::create_user(db).await?;
    let stranger = factory::create_user(db).await?;
    let post = factory::create_post(db, creator.id).await?;

    let repo = CommentRepository::new(db);
    let comment = repo
        .create(post.id, author.id, "Nice crosswind landing".to_string())
        .await?;

    // Stranger cannot touch it.
    assert!(repo
        .update_owned(comment.id, stranger.id, "defaced".to_string())
        .await?
        .is_none());
    assert_eq!(repo.delete_owned(comment.id, stranger.id).await?, 0);

    // The author can.
    let updated = repo
        .update_owned(comment.id, author.id, "Nice landing".to_string())
        .await?
        .unwrap();
    assert_eq!(updated.content, "Nice landing");

    assert_eq!(repo.delete_owned(comment.id, author.id).await?, 1);
    assert!(repo.find_by_id(comment.id).await?.is_none());

    Ok(())
}

/// has_commented distinguishes commenters from readers, and
/// count/list stay consistent.
#[tokio::test]
async fn commenter_flag_and_counts() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_social_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let commenter = factory::create_user(db).await?;
    let reader = factory::create_user(db).await?;
    let post = factory::create_post(db, creator.id).await?;

    let repo = CommentRepository::new(db);
    repo.create(post.id, commenter.id, "First!".to_string()).await?;
    repo.create(post.id, commenter.id, "Also second.".to_string()).await?;

    assert!(repo.has_commented(post.id, commenter.id).await?);
    assert!(!repo.has_commented(post.id, reader.id).await?);
    assert_eq!(repo.count_for_post(post.id).await?, 2);

    let comments = repo.list_for_post(post.id).await?;
    assert_eq!(comments.len(), 2);
    // Oldest first.
    assert_eq!(comments[0].content, "First!");

    Ok(())
}
