use super::*;

/// Tests creating a new language.
///
/// Expected: Ok with the language persisted
#[tokio::test]
async fn creates_language() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Language)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LanguageRepository::new(db);
    let language = repo
        .create(CreateLanguageParams {
            name: "English".to_string(),
        })
        .await?;

    assert_eq!(language.name, "English");

    let db_language = entity::prelude::Language::find_by_id(language.id)
        .one(db)
        .await?;
    assert!(db_language.is_some());

    Ok(())
}

/// Tests that language names are unique at the database level.
///
/// Expected: Err on the second insert with the same name
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Language)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = LanguageRepository::new(db);
    repo.create(CreateLanguageParams {
        name: "Polish".to_string(),
    })
    .await?;

    let result = repo
        .create(CreateLanguageParams {
            name: "Polish".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
