use super::*;

/// Partial updates leave absent fields alone and refresh `updated`.
#[tokio::test]
async fn partial_update_keeps_other_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_route_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let pilot = factory::create_user(db).await?;
    let route = RouteFactory::new(db, pilot.id)
        .title("Round robin")
        .aircraft_type("C172")
        .build()
        .await?;
    let created = route.created;

    tokio::time::sleep(std::time::Duration::from_millis(5)).await;

    let repo = RouteRepository::new(db);
    let updated = repo
        .update(
            route,
            UpdateRouteParams {
                title: Some("Round robin v2".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.title, "Round robin v2");
    assert_eq!(updated.aircraft_type.as_deref(), Some("C172"));
    assert_eq!(updated.created, created);
    assert!(updated.updated > created);

    Ok(())
}

/// Ownership checks on update and delete paths.
#[tokio::test]
async fn owned_lookups_reject_other_pilots() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_route_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let pilot = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let route = factory::create_route(db, pilot.id).await?;

    let repo = RouteRepository::new(db);

    assert!(repo.find_owned(route.id, other.id).await?.is_none());
    assert_eq!(repo.delete_owned(route.id, other.id).await?, 0);

    assert!(repo.find_owned(route.id, pilot.id).await?.is_some());
    assert_eq!(repo.delete_owned(route.id, pilot.id).await?, 1);
    assert!(repo.find_by_id(route.id).await?.is_none());

    Ok(())
}
