use super::*;

/// Likes toggle through exists/add/remove with live counts.
#[tokio::test]
async fn like_round_trip() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_social_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let fan = factory::create_user(db).await?;
    let post = factory::create_post(db, creator.id).await?;

    let repo = PostRepository::new(db);

    assert!(!repo.like_exists(post.id, fan.id).await?);

    repo.add_like(post.id, fan.id).await?;
    assert!(repo.like_exists(post.id, fan.id).await?);
    assert_eq!(repo.like_count(post.id).await?, 1);

    assert_eq!(repo.remove_like(post.id, fan.id).await?, 1);
    assert_eq!(repo.like_count(post.id).await?, 0);

    Ok(())
}

/// Saved posts list most recently saved first, not newest post first.
#[tokio::test]
async fn saved_posts_order_by_save_recency() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_social_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let reader = factory::create_user(db).await?;

    let older_post = factory::create_post(db, creator.id).await?;
    let newer_post = factory::create_post(db, creator.id).await?;

    let repo = PostRepository::new(db);

    // Save the newer post first, then the older one.
    repo.add_save(newer_post.id, reader.id).await?;

    // SQLite timestamps need a visible gap to order deterministically.
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;

    repo.add_save(older_post.id, reader.id).await?;

    let saved = repo.list_saved_by(reader.id).await?;
    let ids: Vec<i32> = saved.iter().map(|p| p.id).collect();

    assert_eq!(ids, vec![older_post.id, newer_post.id]);

    Ok(())
}

/// Another user's saves do not leak into the list.
#[tokio::test]
async fn saved_posts_are_per_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_social_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;
    let a = factory::create_user(db).await?;
    let b = factory::create_user(db).await?;
    let post = factory::create_post(db, creator.id).await?;

    let repo = PostRepository::new(db);
    repo.add_save(post.id, a.id).await?;

    assert_eq!(repo.list_saved_by(a.id).await?.len(), 1);
    assert!(repo.list_saved_by(b.id).await?.is_empty());

    Ok(())
}
