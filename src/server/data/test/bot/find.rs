use super::*;

/// Tests finding a bot by its client-supplied id.
///
/// Expected: Ok(Some(Bot)) with the stored name, storage key dropped
#[tokio::test]
async fn finds_bot_by_uuid() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Bot)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::bot::BotFactory::new(db).name("Aureo").build().await?;
    factory::create_bot(db).await?;

    let repo = BotRepository::new(db);
    let result = repo.find_one(BotFilter::BotUuid(stored.bot_uuid)).await?;

    assert_eq!(
        result,
        Some(Bot {
            bot_uuid: stored.bot_uuid,
            name: "Aureo".to_string(),
        })
    );

    Ok(())
}

/// Tests looking up an id that was never registered.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_uuid() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Bot)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_bot(db).await?;

    let repo = BotRepository::new(db);
    let result = repo.find_one(BotFilter::BotUuid(next_uuid())).await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests that duplicate ids resolve to the earliest stored document.
///
/// Expected: Ok(Some(Bot)) with the first inserted name
#[tokio::test]
async fn find_one_prefers_store_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Bot)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let bot_uuid = next_uuid();
    factory::bot::BotFactory::new(db)
        .bot_uuid(bot_uuid)
        .name("First")
        .build()
        .await?;
    factory::bot::BotFactory::new(db)
        .bot_uuid(bot_uuid)
        .name("Second")
        .build()
        .await?;

    let repo = BotRepository::new(db);
    let result = repo.find_one(BotFilter::BotUuid(bot_uuid)).await?;

    assert_eq!(result.map(|bot| bot.name), Some("First".to_string()));

    Ok(())
}

/// Tests listing every bot in insertion order.
///
/// Expected: Ok(Vec) ordered as inserted
#[tokio::test]
async fn finds_all_in_store_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Bot)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_bot(db).await?;
    let second = factory::create_bot(db).await?;
    let third = factory::create_bot(db).await?;

    let repo = BotRepository::new(db);
    let bots = repo.find(BotFilter::All).await?;

    let uuids: Vec<_> = bots.into_iter().map(|bot| bot.bot_uuid).collect();
    assert_eq!(uuids, vec![first.bot_uuid, second.bot_uuid, third.bot_uuid]);

    Ok(())
}
