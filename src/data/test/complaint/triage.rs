use super::*;

/// Every update stamps handled_by and refreshes the updated timestamp.
#[tokio::test]
async fn update_stamps_the_handler() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_admin_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let reporter = factory::create_user(db).await?;
    let staff = factory::create_user(db).await?;
    let complaint = factory::create_complaint(db, reporter.id).await?;
    let filed_at = complaint.updated;

    tokio::time::sleep(std::time::Duration::from_millis(5)).await;

    let repo = ComplaintRepository::new(db);
    let updated = repo
        .update(
            complaint.id,
            Some(ComplaintStatus::InProgress),
            Some("Looking into it".to_string()),
            staff.id,
        )
        .await?
        .unwrap();

    assert_eq!(updated.status, ComplaintStatus::InProgress);
    assert_eq!(updated.internal_comment, "Looking into it");
    assert_eq!(updated.handled_by, Some(staff.id));
    assert!(updated.updated > filed_at);

    // A comment-only update still records who touched it.
    let second = repo
        .update(complaint.id, None, Some("Resolved offline".to_string()), staff.id)
        .await?
        .unwrap();
    assert_eq!(second.status, ComplaintStatus::InProgress);
    assert_eq!(second.handled_by, Some(staff.id));

    assert!(repo.update(9999, None, None, staff.id).await?.is_none());

    Ok(())
}

/// count_open excludes only closed complaints.
#[tokio::test]
async fn count_open_excludes_closed_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_admin_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let reporter = factory::create_user(db).await?;
    let staff = factory::create_user(db).await?;

    factory::create_complaint(db, reporter.id).await?;
    let in_progress = factory::create_complaint(db, reporter.id).await?;
    let closed = factory::create_complaint(db, reporter.id).await?;

    let repo = ComplaintRepository::new(db);
    repo.update(in_progress.id, Some(ComplaintStatus::InProgress), None, staff.id)
        .await?;
    repo.update(closed.id, Some(ComplaintStatus::Closed), None, staff.id)
        .await?;

    assert_eq!(repo.count_open().await?, 2);

    Ok(())
}

/// The status filter narrows the listing; no filter returns everything.
#[tokio::test]
async fn list_filters_by_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_admin_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let reporter = factory::create_user(db).await?;
    let staff = factory::create_user(db).await?;

    factory::create_complaint(db, reporter.id).await?;
    let closed = factory::create_complaint(db, reporter.id).await?;

    let repo = ComplaintRepository::new(db);
    repo.update(closed.id, Some(ComplaintStatus::Closed), None, staff.id)
        .await?;

    assert_eq!(repo.list(None).await?.len(), 2);

    let closed_only = repo.list(Some(ComplaintStatus::Closed)).await?;
    assert_eq!(closed_only.len(), 1);
    assert_eq!(closed_only[0].id, closed.id);

    Ok(())
}
