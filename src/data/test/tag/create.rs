use super::*;

/// Tests creating a new tag.
///
/// Expected: Ok with the tag persisted
#[tokio::test]
async fn creates_tag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Tag)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TagRepository::new(db);
    let tag = repo
        .create(CreateTagParams {
            name: "Note".to_string(),
        })
        .await?;

    assert_eq!(tag.name, "Note");

    let db_tag = entity::prelude::Tag::find_by_id(tag.id).one(db).await?;
    assert!(db_tag.is_some());

    Ok(())
}

/// Tests that tag names are unique at the database level.
///
/// Expected: Err on the second insert with the same name
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Tag)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TagRepository::new(db);
    repo.create(CreateTagParams {
        name: "Note".to_string(),
    })
    .await?;

    let result = repo
        .create(CreateTagParams {
            name: "Note".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
