use super::*;

/// Tests deleting a language.
///
/// Expected: Ok with the row removed
#[tokio::test]
async fn deletes_language() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Language)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let language = factory::create_language(db).await?;

    let repo = LanguageRepository::new(db);
    repo.delete(language.id).await?;

    let db_language = entity::prelude::Language::find_by_id(language.id)
        .one(db)
        .await?;
    assert!(db_language.is_none());

    Ok(())
}

/// Tests counting the messages written in a language.
///
/// Expected: Ok with the number of referencing messages
#[tokio::test]
async fn counts_referencing_messages() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_translator_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let english = factory::create_english(db).await?;
    let polish = factory::create_language_named(db, "Polish").await?;
    factory::create_original(db, english.id).await?;
    factory::create_original(db, english.id).await?;

    let repo = LanguageRepository::new(db);
    assert_eq!(repo.message_count(english.id).await?, 2);
    assert_eq!(repo.message_count(polish.id).await?, 0);

    Ok(())
}
