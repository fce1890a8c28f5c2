use super::*;

/// Tests fetching a message by ID with its language and tags.
///
/// Expected: Ok(Some) with relations resolved
#[tokio::test]
async fn gets_message_with_relations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_translator_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let english = factory::create_english(db).await?;
    let note = factory::create_tag_named(db, "Note").await?;
    let message = MessageFactory::new(db, english.id)
        .content("Original message")
        .tags(vec![note.id])
        .build()
        .await?;

    let repo = MessageRepository::new(db);
    let result = repo.get_by_id(message.id).await?.unwrap();

    assert_eq!(result.message.content, "Original message");
    assert_eq!(result.language.map(|l| l.name), Some("English".to_string()));
    assert_eq!(result.tags.len(), 1);
    assert_eq!(result.tags[0].name, "Note");

    Ok(())
}

/// Tests fetching a message that doesn't exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_message() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_translator_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MessageRepository::new(db);
    let result = repo.get_by_id(42).await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests listing all messages with their relations.
///
/// Expected: Ok with every message returned
#[tokio::test]
async fn gets_all_messages() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_translator_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let english = factory::create_english(db).await?;
    let polish = factory::create_language_named(db, "Polish").await?;
    let original = factory::create_original(db, english.id).await?;
    factory::create_translation(db, polish.id, original.id).await?;

    let repo = MessageRepository::new(db);
    let results = repo.get_all().await?;

    assert_eq!(results.len(), 2);

    Ok(())
}

/// Tests fetching the translations of an original message.
///
/// Expected: Ok with only the translations of that original
#[tokio::test]
async fn gets_translations_of_original() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_translator_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let english = factory::create_english(db).await?;
    let polish = factory::create_language_named(db, "Polish").await?;
    let original = factory::create_original(db, english.id).await?;
    let other_original = factory::create_original(db, english.id).await?;
    let translation = factory::create_translation(db, polish.id, original.id).await?;
    factory::create_translation(db, polish.id, other_original.id).await?;

    let repo = MessageRepository::new(db);
    let results = repo.get_translations(original.id).await?;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].message.id, translation.id);

    Ok(())
}

/// Tests fetching the tag IDs attached to a message.
///
/// Expected: Ok with the attached tag IDs
#[tokio::test]
async fn gets_tag_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_translator_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let english = factory::create_english(db).await?;
    let note = factory::create_tag_named(db, "Note").await?;
    let label = factory::create_tag_named(db, "Message").await?;
    let message = MessageFactory::new(db, english.id)
        .tags(vec![note.id, label.id])
        .build()
        .await?;

    let repo = MessageRepository::new(db);
    let mut tag_ids = repo.get_tag_ids(message.id).await?;
    tag_ids.sort();

    let mut expected = vec![note.id, label.id];
    expected.sort();
    assert_eq!(tag_ids, expected);

    Ok(())
}
