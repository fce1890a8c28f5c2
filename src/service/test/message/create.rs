use super::*;

/// Tests creating an original message and a translation of it.
///
/// The original carries no original-message reference, the translation
/// points back at the original.
///
/// Expected: Ok with both messages persisted
#[tokio::test]
async fn creates_original_and_translation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_translator_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (original, translation) = seed_original_and_translation(db, Vec::new()).await?;

    assert!(original.is_original());
    assert_eq!(translation.original_message_id, Some(original.id));

    let all = entity::prelude::Message::find().all(db).await?;
    assert_eq!(all.len(), 2);

    Ok(())
}

/// Tests that a translation inherits its original's tags even when created
/// with a different tag list.
///
/// Expected: Ok with the translation carrying the original's tags
#[tokio::test]
async fn translation_inherits_original_tags() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_translator_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let english = factory::create_english(db).await?;
    let polish = factory::create_language_named(db, "Polish").await?;
    let note = factory::create_tag_named(db, "Note").await?;
    let label = factory::create_tag_named(db, "Message").await?;

    let service = MessageService::new(db);
    let original = service
        .create(CreateMessageParams {
            original_message_id: None,
            language_id: english.id,
            content: "Original message".to_string(),
            tag_ids: vec![note.id, label.id],
        })
        .await?;

    // Translation asks for just one tag; the original's tags win
    let translation = service
        .create(CreateMessageParams {
            original_message_id: Some(original.id),
            language_id: polish.id,
            content: "Message translation".to_string(),
            tag_ids: vec![note.id],
        })
        .await?;

    assert_eq!(translation.tags, original.tags);
    assert_eq!(translation.tags.len(), 2);

    Ok(())
}

/// Tests creating an original message in a language other than English.
///
/// Expected: Err(OriginalMessageNotInEnglish)
#[tokio::test]
async fn rejects_original_not_in_english() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_translator_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_english(db).await?;
    let polish = factory::create_language_named(db, "Polish").await?;

    let service = MessageService::new(db);
    let result = service
        .create(CreateMessageParams {
            original_message_id: None,
            language_id: polish.id,
            content: "Original message in Polish".to_string(),
            tag_ids: Vec::new(),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::DomainErr(
            DomainError::OriginalMessageNotInEnglish
        ))
    ));

    Ok(())
}

/// Tests creating a translation whose original is itself a translation.
///
/// Translations form a flat one-level structure.
///
/// Expected: Err(OriginalMessageIsNotOriginal)
#[tokio::test]
async fn rejects_translation_of_translation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_translator_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_original, translation) = seed_original_and_translation(db, Vec::new()).await?;
    let german = factory::create_language_named(db, "German").await?;

    let service = MessageService::new(db);
    let result = service
        .create(CreateMessageParams {
            original_message_id: Some(translation.id),
            language_id: german.id,
            content: "Translation of a translation".to_string(),
            tag_ids: Vec::new(),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::DomainErr(
            DomainError::OriginalMessageIsNotOriginal(_)
        ))
    ));

    Ok(())
}

/// Tests creating a message in a language that doesn't exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_missing_language() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_translator_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = MessageService::new(db);
    let result = service
        .create(CreateMessageParams {
            original_message_id: None,
            language_id: 42,
            content: "Original message".to_string(),
            tag_ids: Vec::new(),
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests creating a translation of a message that doesn't exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_missing_original() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_translator_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let polish = factory::create_language_named(db, "Polish").await?;

    let service = MessageService::new(db);
    let result = service
        .create(CreateMessageParams {
            original_message_id: Some(42),
            language_id: polish.id,
            content: "Message translation".to_string(),
            tag_ids: Vec::new(),
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests creating an original with a tag that doesn't exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_unknown_tag() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_translator_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let english = factory::create_english(db).await?;

    let service = MessageService::new(db);
    let result = service
        .create(CreateMessageParams {
            original_message_id: None,
            language_id: english.id,
            content: "Original message".to_string(),
            tag_ids: vec![42],
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
