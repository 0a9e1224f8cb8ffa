use super::*;
use chrono::{Duration, Utc};

/// Revoking a jti puts it on the blacklist; repeats are no-ops.
#[tokio::test]
async fn revoke_is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RevokedToken)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RevokedTokenRepository::new(db);
    let expires = Utc::now() + Duration::days(7);

    assert!(!repo.is_revoked("abc123").await?);

    repo.revoke("abc123", expires).await?;
    assert!(repo.is_revoked("abc123").await?);

    // Second revocation must not violate the unique jti column.
    repo.revoke("abc123", expires).await?;
    assert!(repo.is_revoked("abc123").await?);

    assert!(!repo.is_revoked("other").await?);

    Ok(())
}

/// prune_expired only drops entries whose tokens already expired.
#[tokio::test]
async fn prune_keeps_live_entries() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RevokedToken)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RevokedTokenRepository::new(db);

    repo.revoke("expired", Utc::now() - Duration::hours(1)).await?;
    repo.revoke("live", Utc::now() + Duration::days(7)).await?;

    assert_eq!(repo.prune_expired().await?, 1);

    assert!(!repo.is_revoked("expired").await?);
    assert!(repo.is_revoked("live").await?);

    Ok(())
}
