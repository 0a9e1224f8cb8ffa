use super::*;

/// Anonymous viewers only see public routes.
#[tokio::test]
async fn anonymous_viewers_see_public_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_route_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let pilot = factory::create_user(db).await?;
    let public = factory::create_route(db, pilot.id).await?;
    let followers = RouteFactory::new(db, pilot.id)
        .visibility(RouteVisibility::Followers)
        .build()
        .await?;
    let private = RouteFactory::new(db, pilot.id)
        .visibility(RouteVisibility::Private)
        .build()
        .await?;

    let repo = RouteRepository::new(db);

    assert!(repo.find_visible(public.id, None).await?.is_some());
    assert!(repo.find_visible(followers.id, None).await?.is_none());
    assert!(repo.find_visible(private.id, None).await?.is_none());

    Ok(())
}

/// Followers-only routes open up exactly to followers.
#[tokio::test]
async fn followers_routes_require_a_follow_edge() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_route_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let pilot = factory::create_user(db).await?;
    let follower = factory::create_user(db).await?;
    let stranger = factory::create_user(db).await?;

    let route = RouteFactory::new(db, pilot.id)
        .visibility(RouteVisibility::Followers)
        .build()
        .await?;

    let repo = RouteRepository::new(db);

    let follower_view = viewer(follower.id, vec![pilot.id]);
    assert!(repo.find_visible(route.id, Some(&follower_view)).await?.is_some());

    let stranger_view = viewer(stranger.id, vec![]);
    assert!(repo.find_visible(route.id, Some(&stranger_view)).await?.is_none());

    Ok(())
}

/// Owners always see their own routes, private included.
#[tokio::test]
async fn owners_see_their_private_routes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_route_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let pilot = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    let private = RouteFactory::new(db, pilot.id)
        .visibility(RouteVisibility::Private)
        .build()
        .await?;

    let repo = RouteRepository::new(db);

    let own_view = viewer(pilot.id, vec![]);
    assert!(repo.find_visible(private.id, Some(&own_view)).await?.is_some());

    // Even a follower of the pilot cannot see a private route.
    let follower_view = viewer(other.id, vec![pilot.id]);
    assert!(repo.find_visible(private.id, Some(&follower_view)).await?.is_none());

    Ok(())
}
