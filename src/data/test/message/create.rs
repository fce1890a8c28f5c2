use super::*;

/// Tests creating a message with tag join rows.
///
/// Expected: Ok with the message and both join rows persisted
#[tokio::test]
async fn creates_message_with_tags() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_translator_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let english = factory::create_english(db).await?;
    let note = factory::create_tag_named(db, "Note").await?;
    let label = factory::create_tag_named(db, "Message").await?;

    let repo = MessageRepository::new(db);
    let message = repo
        .create(CreateMessageParams {
            original_message_id: None,
            language_id: english.id,
            content: "Original message".to_string(),
            tag_ids: vec![note.id, label.id],
        })
        .await?;

    assert_eq!(message.content, "Original message");
    assert!(message.original_message_id.is_none());

    let links = entity::prelude::MessageTag::find()
        .filter(entity::message_tag::Column::MessageId.eq(message.id))
        .all(db)
        .await?;
    assert_eq!(links.len(), 2);

    Ok(())
}

/// Tests creating a translation row pointing at an original.
///
/// Expected: Ok with the original-message reference persisted
#[tokio::test]
async fn creates_translation_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_translator_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let english = factory::create_english(db).await?;
    let polish = factory::create_language_named(db, "Polish").await?;
    let original = factory::create_original(db, english.id).await?;

    let repo = MessageRepository::new(db);
    let translation = repo
        .create(CreateMessageParams {
            original_message_id: Some(original.id),
            language_id: polish.id,
            content: "Message translation".to_string(),
            tag_ids: Vec::new(),
        })
        .await?;

    assert_eq!(translation.original_message_id, Some(original.id));
    assert_eq!(translation.language_id, polish.id);

    Ok(())
}
