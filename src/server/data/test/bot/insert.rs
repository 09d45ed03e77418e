use super::*;
use sea_orm::{EntityTrait, PaginatorTrait};

/// Tests inserting a single bot.
///
/// Expected: Ok(Bot) equal to the input, one row stored
#[tokio::test]
async fn inserts_bot() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Bot)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let bot = Bot {
        bot_uuid: next_uuid(),
        name: "Aureo".to_string(),
    };

    let repo = BotRepository::new(db);
    let stored = repo.insert_one(bot.clone()).await?;

    assert_eq!(stored, bot);

    let count = entity::prelude::Bot::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that the repository itself does not reject a repeated id.
///
/// Duplicate registration is a handler rule, the store accepts both documents.
///
/// Expected: Ok for both inserts, two rows stored
#[tokio::test]
async fn accepts_duplicate_uuid() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Bot)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let bot = Bot {
        bot_uuid: next_uuid(),
        name: "Aureo".to_string(),
    };

    let repo = BotRepository::new(db);
    repo.insert_one(bot.clone()).await?;
    repo.insert_one(bot.clone()).await?;

    let found = repo.find(BotFilter::BotUuid(bot.bot_uuid)).await?;
    assert_eq!(found.len(), 2);

    Ok(())
}

/// Tests inserting several bots at once.
///
/// Expected: Ok(3) and documents stored in the given order
#[tokio::test]
async fn inserts_many_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Bot)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let bots: Vec<Bot> = ["One", "Two", "Three"]
        .into_iter()
        .map(|name| Bot {
            bot_uuid: next_uuid(),
            name: name.to_string(),
        })
        .collect();

    let repo = BotRepository::new(db);
    let inserted = repo.insert_many(bots.clone()).await?;

    assert_eq!(inserted, 3);
    assert_eq!(repo.find(BotFilter::All).await?, bots);

    Ok(())
}

/// Tests inserting an empty batch.
///
/// Expected: Ok(0) without touching the store
#[tokio::test]
async fn insert_many_with_no_bots_is_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Bot)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BotRepository::new(db);
    let inserted = repo.insert_many(Vec::new()).await?;

    assert_eq!(inserted, 0);

    Ok(())
}
