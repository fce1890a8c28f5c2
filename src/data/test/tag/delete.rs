use super::*;

/// Tests deleting a tag.
///
/// Expected: Ok with the row removed
#[tokio::test]
async fn deletes_tag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Tag)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tag = factory::create_tag(db).await?;

    let repo = TagRepository::new(db);
    repo.delete(tag.id).await?;

    let db_tag = entity::prelude::Tag::find_by_id(tag.id).one(db).await?;
    assert!(db_tag.is_none());

    Ok(())
}

/// Tests that deleting a tag detaches it from messages via the join-table
/// cascade without touching the messages themselves.
///
/// Expected: Ok with join rows removed and message intact
#[tokio::test]
async fn delete_detaches_tag_from_messages() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_translator_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let english = factory::create_english(db).await?;
    let tag = factory::create_tag(db).await?;
    let message = test_utils::factory::message::MessageFactory::new(db, english.id)
        .tags(vec![tag.id])
        .build()
        .await?;

    let repo = TagRepository::new(db);
    repo.delete(tag.id).await?;

    let links = entity::prelude::MessageTag::find().all(db).await?;
    assert!(links.is_empty());

    let db_message = entity::prelude::Message::find_by_id(message.id)
        .one(db)
        .await?;
    assert!(db_message.is_some());

    Ok(())
}
