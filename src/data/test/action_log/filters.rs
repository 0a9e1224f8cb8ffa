use super::*;

/// The listing filters by user and by action substring, newest first.
#[tokio::test]
async fn list_filters_by_user_and_action() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_admin_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::create_user(db).await?;
    let bob = factory::create_user(db).await?;

    let repo = ActionLogRepository::new(db);
    repo.create(log_entry(Some(alice.id), "POST /api/post/create/")).await?;
    repo.create(log_entry(Some(bob.id), "POST /api/post/1/like/")).await?;
    repo.create(log_entry(None, "POST /api/accounts/token/")).await?;

    let everything = repo.list(&ActionLogQuery::default()).await?;
    assert_eq!(everything.len(), 3);

    let alices = repo
        .list(&ActionLogQuery {
            user_id: Some(alice.id),
            ..Default::default()
        })
        .await?;
    assert_eq!(alices.len(), 1);
    assert_eq!(alices[0].action, "POST /api/post/create/");

    let likes = repo
        .list(&ActionLogQuery {
            action: Some("like".to_string()),
            ..Default::default()
        })
        .await?;
    assert_eq!(likes.len(), 1);
    assert_eq!(likes[0].user_id, Some(bob.id));

    Ok(())
}

/// The days window keeps recent rows; counting since a future instant
/// finds nothing.
#[tokio::test]
async fn day_window_and_count_since() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_admin_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = ActionLogRepository::new(db);
    repo.create(log_entry(Some(user.id), "PUT /api/accounts/profile/update/"))
        .await?;

    // Fresh rows fall inside any positive window.
    let recent = repo
        .list(&ActionLogQuery {
            days: Some(1),
            ..Default::default()
        })
        .await?;
    assert_eq!(recent.len(), 1);

    let week_ago = chrono::Utc::now() - chrono::Duration::days(7);
    assert_eq!(repo.count_since(week_ago).await?, 1);

    let in_a_minute = chrono::Utc::now() + chrono::Duration::minutes(1);
    assert_eq!(repo.count_since(in_a_minute).await?, 0);

    let timestamps = repo.created_since(week_ago).await?;
    assert_eq!(timestamps.len(), 1);

    Ok(())
}
