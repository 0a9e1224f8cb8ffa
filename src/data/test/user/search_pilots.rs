use super::*;

/// Filtering for real pilots includes accounts flying both, since they fly
/// real aircraft too.
#[tokio::test]
async fn real_filter_includes_both() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let real = UserFactory::new(db)
        .username("real_pilot")
        .pilot_type(PilotType::Real)
        .build()
        .await?;
    let both = UserFactory::new(db)
        .username("both_pilot")
        .pilot_type(PilotType::Both)
        .build()
        .await?;
    UserFactory::new(db)
        .username("sim_pilot")
        .pilot_type(PilotType::Virtual)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let results = repo
        .search_pilots(&PilotQuery {
            pilot_type: Some("real".to_string()),
            ..Default::default()
        })
        .await?;

    let ids: Vec<i32> = results.iter().map(|u| u.id).collect();
    assert_eq!(results.len(), 2);
    assert!(ids.contains(&real.id));
    assert!(ids.contains(&both.id));

    Ok(())
}

/// Banned accounts never show up in the directory.
#[tokio::test]
async fn banned_accounts_are_hidden() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    UserFactory::new(db).username("banned").active(false).build().await?;
    let visible = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let results = repo.search_pilots(&PilotQuery::default()).await?;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, visible.id);

    Ok(())
}

/// The q filter matches substrings of username and aircraft types.
#[tokio::test]
async fn q_matches_username_and_aircraft_types() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let by_name = UserFactory::new(db).username("cessna_fan").build().await?;
    let by_aircraft = UserFactory::new(db)
        .username("other")
        .aircraft_types("Cessna 172, PA-28")
        .build()
        .await?;
    UserFactory::new(db).username("unrelated").build().await?;

    let repo = UserRepository::new(db);
    let results = repo
        .search_pilots(&PilotQuery {
            q: Some("essna".to_string()),
            ..Default::default()
        })
        .await?;

    let ids: Vec<i32> = results.iter().map(|u| u.id).collect();
    assert_eq!(results.len(), 2);
    assert!(ids.contains(&by_name.id));
    assert!(ids.contains(&by_aircraft.id));

    Ok(())
}

/// A "-" prefix sorts descending; here by flight hours.
#[tokio::test]
async fn orders_by_flight_hours_descending() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let low = UserFactory::new(db).flight_hours(10.0).build().await?;
    let high = UserFactory::new(db).flight_hours(2500.0).build().await?;
    let mid = UserFactory::new(db).flight_hours(300.0).build().await?;

    let repo = UserRepository::new(db);
    let results = repo
        .search_pilots(&PilotQuery {
            order_by: Some("-flight_hours".to_string()),
            ..Default::default()
        })
        .await?;

    let ids: Vec<i32> = results.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![high.id, mid.id, low.id]);

    Ok(())
}

/// Unknown sort keys fall back to the default username ordering instead of
/// erroring.
#[tokio::test]
async fn unknown_order_key_falls_back_to_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let b = UserFactory::new(db).username("bravo").build().await?;
    let a = UserFactory::new(db).username("alpha").build().await?;

    let repo = UserRepository::new(db);
    let results = repo
        .search_pilots(&PilotQuery {
            order_by: Some("password_hash".to_string()),
            ..Default::default()
        })
        .await?;

    let ids: Vec<i32> = results.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![a.id, b.id]);

    Ok(())
}
