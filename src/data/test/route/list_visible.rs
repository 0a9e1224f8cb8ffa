use super::*;

/// The search box matches title, departure and destination.
#[tokio::test]
async fn q_matches_title_and_airports() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_route_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let pilot = factory::create_user(db).await?;
    let coastal = RouteFactory::new(db, pilot.id)
        .title("Coastal hop")
        .departure("EGLL")
        .destination("EGKK")
        .build()
        .await?;
    let alpine = RouteFactory::new(db, pilot.id)
        .title("Alpine crossing")
        .departure("LSZH")
        .destination("LOWI")
        .build()
        .await?;

    let repo = RouteRepository::new(db);

    let by_title = repo
        .list_visible(
            &RouteQuery {
                q: Some("Coastal".to_string()),
                ..Default::default()
            },
            None,
        )
        .await?;
    assert_eq!(by_title.len(), 1);
    assert_eq!(by_title[0].id, coastal.id);

    let by_airport = repo
        .list_visible(
            &RouteQuery {
                q: Some("LOWI".to_string()),
                ..Default::default()
            },
            None,
        )
        .await?;
    assert_eq!(by_airport.len(), 1);
    assert_eq!(by_airport[0].id, alpine.id);

    Ok(())
}

/// Distance bounds are inclusive on both ends.
#[tokio::test]
async fn distance_window_is_inclusive() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_route_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let pilot = factory::create_user(db).await?;
    let short = RouteFactory::new(db, pilot.id).distance(80.0).build().await?;
    let medium = RouteFactory::new(db, pilot.id).distance(250.0).build().await?;
    let long = RouteFactory::new(db, pilot.id).distance(900.0).build().await?;

    let repo = RouteRepository::new(db);

    let windowed = repo
        .list_visible(
            &RouteQuery {
                distance_min: Some(80.0),
                distance_max: Some(250.0),
                ..Default::default()
            },
            None,
        )
        .await?;

    let ids: Vec<i32> = windowed.iter().map(|route| route.id).collect();
    assert!(ids.contains(&short.id));
    assert!(ids.contains(&medium.id));
    assert!(!ids.contains(&long.id));

    Ok(())
}

/// Ordering follows the allow-listed sort keys and falls back to newest
/// first for anything else.
#[tokio::test]
async fn order_by_distance_and_fallback() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_route_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let pilot = factory::create_user(db).await?;
    let long = RouteFactory::new(db, pilot.id).distance(900.0).build().await?;
    let short = RouteFactory::new(db, pilot.id).distance(80.0).build().await?;

    let repo = RouteRepository::new(db);

    let ascending = repo
        .list_visible(
            &RouteQuery {
                order_by: Some("distance".to_string()),
                ..Default::default()
            },
            None,
        )
        .await?;
    let ids: Vec<i32> = ascending.iter().map(|route| route.id).collect();
    assert_eq!(ids, vec![short.id, long.id]);

    let descending = repo
        .list_visible(
            &RouteQuery {
                order_by: Some("-distance".to_string()),
                ..Default::default()
            },
            None,
        )
        .await?;
    let ids: Vec<i32> = descending.iter().map(|route| route.id).collect();
    assert_eq!(ids, vec![long.id, short.id]);

    // Unknown keys do not error out.
    let fallback = repo
        .list_visible(
            &RouteQuery {
                order_by: Some("altitude".to_string()),
                ..Default::default()
            },
            None,
        )
        .await?;
    assert_eq!(fallback.len(), 2);

    Ok(())
}

/// Listings apply the same visibility rules as single lookups.
#[tokio::test]
async fn listing_hides_routes_the_viewer_cannot_see() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_route_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let pilot = factory::create_user(db).await?;
    let reader = factory::create_user(db).await?;

    let public = factory::create_route(db, pilot.id).await?;
    RouteFactory::new(db, pilot.id)
        .visibility(RouteVisibility::Followers)
        .build()
        .await?;
    RouteFactory::new(db, pilot.id)
        .visibility(RouteVisibility::Private)
        .build()
        .await?;

    let repo = RouteRepository::new(db);

    let reader_view = viewer(reader.id, vec![]);
    let seen = repo
        .list_visible(&RouteQuery::default(), Some(&reader_view))
        .await?;

    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].id, public.id);

    Ok(())
}
