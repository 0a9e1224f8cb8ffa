use super::*;

/// Creating and deleting an edge round-trips through exists() and both
/// counters.
#[tokio::test]
async fn edge_lifecycle_updates_counts() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_social_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let follower = factory::create_user(db).await?;
    let followee = factory::create_user(db).await?;

    let repo = FollowRepository::new(db);

    assert!(!repo.exists(follower.id, followee.id).await?);

    repo.create(follower.id, followee.id).await?;

    assert!(repo.exists(follower.id, followee.id).await?);
    // The edge is directed.
    assert!(!repo.exists(followee.id, follower.id).await?);
    assert_eq!(repo.follower_count(followee.id).await?, 1);
    assert_eq!(repo.following_count(follower.id).await?, 1);
    assert_eq!(repo.follower_count(follower.id).await?, 0);

    let deleted = repo.delete(follower.id, followee.id).await?;

    assert_eq!(deleted, 1);
    assert!(!repo.exists(follower.id, followee.id).await?);
    assert_eq!(repo.follower_count(followee.id).await?, 0);

    Ok(())
}

/// Deleting a non-existent edge affects zero rows.
#[tokio::test]
async fn deleting_missing_edge_is_zero_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_social_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::create_user(db).await?;
    let b = factory::create_user(db).await?;

    let repo = FollowRepository::new(db);
    assert_eq!(repo.delete(a.id, b.id).await?, 0);

    Ok(())
}
