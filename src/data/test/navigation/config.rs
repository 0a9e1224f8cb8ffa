use super::*;

/// replace_all swaps the whole config; nothing from the old menu survives.
#[tokio::test]
async fn replace_all_swaps_the_menu_wholesale() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_admin_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_nav_item(db, 0).await?;
    factory::create_nav_item(db, 1).await?;

    let repo = NavigationRepository::new(db);
    let stored = repo
        .replace_all(vec![item("feed", "Feed", Some(0)), item("pilots", "Pilots", Some(1))])
        .await?;

    assert_eq!(stored.len(), 2);
    let keys: Vec<&str> = stored.iter().map(|entry| entry.key.as_str()).collect();
    assert_eq!(keys, vec!["feed", "pilots"]);

    Ok(())
}

/// Items without an explicit order take their position in the submitted
/// list.
#[tokio::test]
async fn missing_order_defaults_to_list_position() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_admin_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = NavigationRepository::new(db);
    let stored = repo
        .replace_all(vec![
            item("feed", "Feed", None),
            item("pilots", "Pilots", None),
            item("routes", "Routes", Some(10)),
        ])
        .await?;

    let orders: Vec<(String, i32)> = stored
        .iter()
        .map(|entry| (entry.key.clone(), entry.order))
        .collect();

    assert_eq!(
        orders,
        vec![
            ("feed".to_string(), 0),
            ("pilots".to_string(), 1),
            ("routes".to_string(), 10),
        ]
    );

    Ok(())
}

/// The user-facing listing drops hidden and disabled entries.
#[tokio::test]
async fn user_listing_hides_disabled_entries() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_admin_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = NavigationRepository::new(db);

    let mut hidden = item("hidden", "Hidden", Some(0));
    hidden.is_visible_for_users = false;

    let mut disabled = item("disabled", "Disabled", Some(1));
    disabled.is_enabled = false;

    repo.replace_all(vec![hidden, disabled, item("feed", "Feed", Some(2))])
        .await?;

    assert_eq!(repo.list_all().await?.len(), 3);

    let for_users = repo.list_for_users().await?;
    assert_eq!(for_users.len(), 1);
    assert_eq!(for_users[0].key, "feed");

    Ok(())
}

/// ensure_defaults seeds an empty table once and never duplicates.
#[tokio::test]
async fn ensure_defaults_is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_admin_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = NavigationRepository::new(db);

    repo.ensure_defaults().await?;
    let seeded = repo.list_all().await?.len();
    assert!(seeded > 0);

    repo.ensure_defaults().await?;
    assert_eq!(repo.list_all().await?.len(), seeded);

    Ok(())
}
