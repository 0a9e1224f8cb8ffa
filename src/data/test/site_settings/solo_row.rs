use super::*;

/// get_solo creates the row on first access and reuses it afterwards.
#[tokio::test]
async fn get_solo_creates_defaults_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_admin_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SiteSettingsRepository::new(db);

    let first = repo.get_solo().await?;
    assert_eq!(first.id, 1);
    assert!(!first.is_closed_for_public);
    assert_eq!(first.maintenance_message, "");

    let second = repo.get_solo().await?;
    assert_eq!(second.id, first.id);
    assert_eq!(second.updated, first.updated);

    Ok(())
}

/// Updates are partial; the untouched field keeps its value.
#[tokio::test]
async fn update_is_partial() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_admin_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SiteSettingsRepository::new(db);

    let closed = repo
        .update(Some(true), Some("Back after the upgrade.".to_string()))
        .await?;
    assert!(closed.is_closed_for_public);

    let reopened = repo.update(Some(false), None).await?;
    assert!(!reopened.is_closed_for_public);
    assert_eq!(reopened.maintenance_message, "Back after the upgrade.");

    Ok(())
}
