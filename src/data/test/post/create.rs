use super::*;

/// A post's images are stored and read back in submission order.
#[tokio::test]
async fn images_keep_submission_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_social_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = PostRepository::new(db);
    let post = repo
        .create(CreatePostParams {
            creator_id: user.id,
            content: "Three-ship formation".to_string(),
            images: vec![
                "images/posts/images/aa_one.jpg".to_string(),
                "images/posts/images/bb_two.jpg".to_string(),
                "images/posts/images/cc_three.jpg".to_string(),
            ],
        })
        .await?;

    let images = repo.images_for(post.id).await?;
    let keys: Vec<&str> = images.iter().map(|i| i.image.as_str()).collect();

    assert_eq!(
        keys,
        vec![
            "images/posts/images/aa_one.jpg",
            "images/posts/images/bb_two.jpg",
            "images/posts/images/cc_three.jpg",
        ]
    );

    Ok(())
}

/// New posts start unedited.
#[tokio::test]
async fn new_posts_are_not_edited() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_social_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = PostRepository::new(db);
    let post = repo
        .create(CreatePostParams {
            creator_id: user.id,
            content: "First flight today".to_string(),
            images: vec![],
        })
        .await?;

    assert!(!post.is_edited);
    assert!(repo.images_for(post.id).await?.is_empty());

    Ok(())
}

/// images_for_many groups by post and keeps per-post order.
#[tokio::test]
async fn images_for_many_cover_all_posts() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_social_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let with_images = PostFactory::new(db, user.id)
        .image("images/posts/images/x.jpg")
        .image("images/posts/images/y.jpg")
        .build()
        .await?;
    let without = factory::create_post(db, user.id).await?;

    let repo = PostRepository::new(db);
    let images = repo.images_for_many(vec![with_images.id, without.id]).await?;

    assert_eq!(images.len(), 2);
    assert!(images.iter().all(|i| i.post_id == with_images.id));
    assert_eq!(images[0].position, 0);
    assert_eq!(images[1].position, 1);

    Ok(())
}
