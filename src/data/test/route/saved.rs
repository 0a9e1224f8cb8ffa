use super::*;

/// A save does not grant access: routes that went private after being
/// saved drop out of the saved list.
#[tokio::test]
async fn saved_list_recheck_visibility() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_route_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let pilot = factory::create_user(db).await?;
    let reader = factory::create_user(db).await?;

    let route = factory::create_route(db, pilot.id).await?;
    let repo = RouteRepository::new(db);
    repo.add_save(route.id, reader.id).await?;

    let reader_view = viewer(reader.id, vec![]);
    assert_eq!(repo.list_saved_by(reader.id, &reader_view).await?.len(), 1);

    // The pilot locks the route down.
    repo.update(
        route,
        UpdateRouteParams {
            visibility: Some(RouteVisibility::Private),
            ..Default::default()
        },
    )
    .await?;

    assert!(repo.list_saved_by(reader.id, &reader_view).await?.is_empty());

    Ok(())
}

/// Saved routes come back most recently saved first.
#[tokio::test]
async fn saved_list_orders_by_save_recency() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_route_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let pilot = factory::create_user(db).await?;
    let reader = factory::create_user(db).await?;

    let first = factory::create_route(db, pilot.id).await?;
    let second = factory::create_route(db, pilot.id).await?;

    let repo = RouteRepository::new(db);
    repo.add_save(first.id, reader.id).await?;

    // SQLite timestamps need a visible gap to order deterministically.
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;

    repo.add_save(second.id, reader.id).await?;

    let reader_view = viewer(reader.id, vec![]);
    let saved = repo.list_saved_by(reader.id, &reader_view).await?;
    let ids: Vec<i32> = saved.iter().map(|route| route.id).collect();

    assert_eq!(ids, vec![second.id, first.id]);

    Ok(())
}

/// Like and save toggles keep their counts independent.
#[tokio::test]
async fn likes_and_saves_count_separately() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_route_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let pilot = factory::create_user(db).await?;
    let fan = factory::create_user(db).await?;
    let route = factory::create_route(db, pilot.id).await?;

    let repo = RouteRepository::new(db);

    repo.add_like(route.id, fan.id).await?;
    assert!(repo.like_exists(route.id, fan.id).await?);
    assert!(!repo.save_exists(route.id, fan.id).await?);
    assert_eq!(repo.like_count(route.id).await?, 1);
    assert_eq!(repo.save_count(route.id).await?, 0);

    assert_eq!(repo.remove_like(route.id, fan.id).await?, 1);
    assert_eq!(repo.like_count(route.id).await?, 0);

    Ok(())
}
