use super::*;

/// Tests setting a new name on an existing bot.
///
/// Expected: Ok(Some(Bot)) with the new name, persisted
#[tokio::test]
async fn updates_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Bot)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::create_bot(db).await?;

    let repo = BotRepository::new(db);
    let fields = Bot {
        bot_uuid: stored.bot_uuid,
        name: "Renamed".to_string(),
    };
    let result = repo
        .update_one(BotFilter::BotUuid(stored.bot_uuid), fields.clone())
        .await?;

    assert_eq!(result, Some(fields.clone()));
    assert_eq!(
        repo.find_one(BotFilter::BotUuid(stored.bot_uuid)).await?,
        Some(fields)
    );

    Ok(())
}

/// Tests updating a bot that does not exist.
///
/// Expected: Ok(None) and nothing inserted
#[tokio::test]
async fn returns_none_without_match() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Bot)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let bot_uuid = next_uuid();
    let repo = BotRepository::new(db);
    let result = repo
        .update_one(
            BotFilter::BotUuid(bot_uuid),
            Bot {
                bot_uuid,
                name: "Ghost".to_string(),
            },
        )
        .await?;

    assert!(result.is_none());
    assert!(repo.find(BotFilter::All).await?.is_empty());

    Ok(())
}

/// Tests that the field set may carry a different id than the filter.
///
/// Expected: the matched bot is re-keyed under the new id
#[tokio::test]
async fn overwrites_uuid_from_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Bot)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::create_bot(db).await?;
    let new_uuid = next_uuid();

    let repo = BotRepository::new(db);
    repo.update_one(
        BotFilter::BotUuid(stored.bot_uuid),
        Bot {
            bot_uuid: new_uuid,
            name: stored.name.clone(),
        },
    )
    .await?;

    assert!(repo
        .find_one(BotFilter::BotUuid(stored.bot_uuid))
        .await?
        .is_none());
    assert!(repo.find_one(BotFilter::BotUuid(new_uuid)).await?.is_some());

    Ok(())
}

/// Tests that only the first of several matching bots is updated.
///
/// Expected: first document renamed, second untouched
#[tokio::test]
async fn updates_only_first_match() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Bot)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let bot_uuid = next_uuid();
    for name in ["First", "Second"] {
        factory::bot::BotFactory::new(db)
            .bot_uuid(bot_uuid)
            .name(name)
            .build()
            .await?;
    }

    let repo = BotRepository::new(db);
    repo.update_one(
        BotFilter::BotUuid(bot_uuid),
        Bot {
            bot_uuid,
            name: "Renamed".to_string(),
        },
    )
    .await?;

    let names: Vec<_> = repo
        .find(BotFilter::BotUuid(bot_uuid))
        .await?
        .into_iter()
        .map(|bot| bot.name)
        .collect();
    assert_eq!(names, vec!["Renamed".to_string(), "Second".to_string()]);

    Ok(())
}
