use super::*;

#[tokio::test]
async fn active_user_passes_with_no_permissions() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_social_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let claims = claims_for(user.id);

    let resolved = AuthGuard::new(db, &claims).require(&[]).await.unwrap();
    assert_eq!(resolved.id, user.id);

    Ok(())
}

/// The guard re-reads the database, so a token outliving its account is
/// rejected even though the signature is still valid.
#[tokio::test]
async fn deleted_account_is_rejected() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_social_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let claims = claims_for(4242);

    let err = AuthGuard::new(db, &claims).require(&[]).await.unwrap_err();
    assert!(matches!(
        err,
        AppError::AuthErr(AuthError::UserNotInDatabase(4242))
    ));

    Ok(())
}

/// A ban takes effect immediately, before token expiry.
#[tokio::test]
async fn banned_account_is_rejected() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_social_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db).active(false).build().await?;
    let claims = claims_for(user.id);

    let err = AuthGuard::new(db, &claims).require(&[]).await.unwrap_err();
    assert!(matches!(
        err,
        AppError::AuthErr(AuthError::AccessDenied(_, _))
    ));

    Ok(())
}

#[tokio::test]
async fn staff_permission_requires_the_staff_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_social_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let regular = factory::create_user(db).await?;
    let staff = UserFactory::new(db).staff(true).build().await?;

    let claims = claims_for(regular.id);
    let err = AuthGuard::new(db, &claims)
        .require(&[Permission::Staff])
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        AppError::AuthErr(AuthError::AccessDenied(_, _))
    ));

    let claims = claims_for(staff.id);
    assert!(AuthGuard::new(db, &claims)
        .require(&[Permission::Staff])
        .await
        .is_ok());

    Ok(())
}

/// Demo accounts can read and follow but fail the write permission.
#[tokio::test]
async fn read_only_account_cannot_write() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_social_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let demo = UserFactory::new(db).read_only(true).build().await?;
    let claims = claims_for(demo.id);

    assert!(AuthGuard::new(db, &claims).require(&[]).await.is_ok());

    let err = AuthGuard::new(db, &claims)
        .require(&[Permission::Write])
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        AppError::AuthErr(AuthError::ReadOnlyAccount(_))
    ));

    Ok(())
}
