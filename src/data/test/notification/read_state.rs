use super::*;

/// mark_read is scoped to the recipient; another user cannot clear it.
#[tokio::test]
async fn mark_read_is_recipient_scoped() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_social_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let recipient = factory::create_user(db).await?;
    let actor = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    let notification = factory::create_notification(db, recipient.id, actor.id).await?;

    let repo = NotificationRepository::new(db);

    assert!(!repo.mark_read(notification.id, other.id).await?);
    assert_eq!(repo.unread_count(recipient.id).await?, 1);

    assert!(repo.mark_read(notification.id, recipient.id).await?);
    assert_eq!(repo.unread_count(recipient.id).await?, 0);

    // Marking an already-read notification still matches the row.
    assert!(repo.mark_read(notification.id, recipient.id).await?);

    Ok(())
}

/// mark_all_read reports how many rows flipped and leaves other users alone.
#[tokio::test]
async fn mark_all_read_counts_flipped_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_social_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let recipient = factory::create_user(db).await?;
    let bystander = factory::create_user(db).await?;
    let actor = factory::create_user(db).await?;

    factory::create_notification(db, recipient.id, actor.id).await?;
    factory::create_notification(db, recipient.id, actor.id).await?;
    factory::create_notification(db, bystander.id, actor.id).await?;

    let repo = NotificationRepository::new(db);

    assert_eq!(repo.mark_all_read(recipient.id).await?, 2);
    assert_eq!(repo.unread_count(recipient.id).await?, 0);
    assert_eq!(repo.unread_count(bystander.id).await?, 1);

    // A second pass has nothing left to flip.
    assert_eq!(repo.mark_all_read(recipient.id).await?, 0);

    Ok(())
}

/// The unread filter drops read rows; the full list keeps them, newest
/// first.
#[tokio::test]
async fn unread_only_filters_the_list() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_social_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let recipient = factory::create_user(db).await?;
    let actor = factory::create_user(db).await?;

    let first = factory::create_notification(db, recipient.id, actor.id).await?;
    factory::create_notification(db, recipient.id, actor.id).await?;

    let repo = NotificationRepository::new(db);
    repo.mark_read(first.id, recipient.id).await?;

    let all = repo.list_for_user(recipient.id, false).await?;
    assert_eq!(all.len(), 2);

    let unread = repo.list_for_user(recipient.id, true).await?;
    assert_eq!(unread.len(), 1);
    assert_ne!(unread[0].id, first.id);

    Ok(())
}
