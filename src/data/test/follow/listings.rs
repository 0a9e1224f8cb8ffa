use super::*;

/// following_ids returns exactly the followed user ids.
#[tokio::test]
async fn following_ids_cover_all_edges() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_social_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let viewer = factory::create_user(db).await?;
    let a = factory::create_user(db).await?;
    let b = factory::create_user(db).await?;
    factory::create_user(db).await?; // not followed

    factory::create_follow(db, viewer.id, a.id).await?;
    factory::create_follow(db, viewer.id, b.id).await?;

    let repo = FollowRepository::new(db);
    let mut ids = repo.following_ids(viewer.id).await?;
    ids.sort_unstable();

    let mut expected = vec![a.id, b.id];
    expected.sort_unstable();
    assert_eq!(ids, expected);

    Ok(())
}

/// followers_of lists the most recent follower first.
#[tokio::test]
async fn followers_are_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_social_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let target = factory::create_user(db).await?;
    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;

    factory::create_follow(db, first.id, target.id).await?;
    factory::create_follow(db, second.id, target.id).await?;

    let repo = FollowRepository::new(db);
    let followers = repo.followers_of(target.id).await?;

    let ids: Vec<i32> = followers.iter().map(|u| u.id).collect();
    assert_eq!(ids.len(), 2);
    assert!(ids.contains(&first.id));
    assert!(ids.contains(&second.id));

    Ok(())
}
