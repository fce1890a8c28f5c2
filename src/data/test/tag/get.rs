use super::*;

/// Tests fetching a tag by ID and by name.
///
/// Expected: Ok(Some) for existing tags, Ok(None) otherwise
#[tokio::test]
async fn gets_tag_by_id_and_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Tag)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tag = factory::create_tag_named(db, "Note").await?;

    let repo = TagRepository::new(db);
    assert!(repo.get_by_id(tag.id).await?.is_some());
    assert!(repo.get_by_id(tag.id + 100).await?.is_none());
    assert!(repo.find_by_name("Note").await?.is_some());
    assert!(repo.find_by_name("Missing").await?.is_none());

    Ok(())
}

/// Tests listing all tags.
///
/// Expected: Ok with tags ordered by name
#[tokio::test]
async fn gets_all_tags_ordered_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Tag)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_tag_named(db, "Note").await?;
    factory::create_tag_named(db, "Message").await?;

    let repo = TagRepository::new(db);
    let tags = repo.get_all().await?;

    let names: Vec<String> = tags.into_iter().map(|t| t.name).collect();
    assert_eq!(names, vec!["Message".to_string(), "Note".to_string()]);

    Ok(())
}
