use super::*;

/// Tests listing all messages without a filter.
///
/// Expected: Ok with both messages returned
#[tokio::test]
async fn returns_all_without_filter() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_translator_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    seed_original_and_translation(db, Vec::new()).await?;

    let service = MessageService::new(db);
    let messages = service.get_filtered(MessageFilter::default()).await?;

    assert_eq!(messages.len(), 2);

    Ok(())
}

/// Tests filtering messages by a case-insensitive content fragment.
///
/// Expected: Ok with only the matching message
#[tokio::test]
async fn filters_by_content_fragment() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_translator_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (original, _translation) = seed_original_and_translation(db, Vec::new()).await?;

    let service = MessageService::new(db);
    let messages = service
        .get_filtered(MessageFilter {
            content: Some("ORIGINAL".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].id, original.id);

    Ok(())
}

/// Tests filtering messages by tag name.
///
/// The translation inherits the original's tag, so both match.
///
/// Expected: Ok with both messages returned
#[tokio::test]
async fn filters_by_tag_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_translator_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let note = factory::create_tag_named(db, "Note").await?;
    seed_original_and_translation(db, vec![note.id]).await?;

    let service = MessageService::new(db);
    let messages = service
        .get_filtered(MessageFilter {
            tag: Some("Note".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(messages.len(), 2);

    Ok(())
}

/// Tests filtering messages by language name.
///
/// Expected: Ok with only the message in that language
#[tokio::test]
async fn filters_by_language_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_translator_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_original, translation) = seed_original_and_translation(db, Vec::new()).await?;

    let service = MessageService::new(db);
    let messages = service
        .get_filtered(MessageFilter {
            language: Some("Polish".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].id, translation.id);

    Ok(())
}

/// Tests fetching the translations of an original message.
///
/// Expected: Ok(Some) with the translation; Ok(None) for a missing message
#[tokio::test]
async fn gets_translations_of_original() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_translator_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (original, translation) = seed_original_and_translation(db, Vec::new()).await?;

    let service = MessageService::new(db);
    let translations = service.get_translations(original.id).await?.unwrap();

    assert_eq!(translations.len(), 1);
    assert_eq!(translations[0].id, translation.id);

    assert!(service.get_translations(42).await?.is_none());

    Ok(())
}
