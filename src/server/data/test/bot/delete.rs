use super::*;

/// Tests deleting a single bot by id.
///
/// Expected: Ok(1) and the bot no longer found, other bots untouched
#[tokio::test]
async fn deletes_one_bot() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Bot)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let target = factory::create_bot(db).await?;
    let other = factory::create_bot(db).await?;

    let repo = BotRepository::new(db);
    let deleted = repo.delete_one(BotFilter::BotUuid(target.bot_uuid)).await?;

    assert_eq!(deleted, 1);
    assert!(repo
        .find_one(BotFilter::BotUuid(target.bot_uuid))
        .await?
        .is_none());
    assert!(repo
        .find_one(BotFilter::BotUuid(other.bot_uuid))
        .await?
        .is_some());

    Ok(())
}

/// Tests deleting a bot that does not exist.
///
/// Expected: Ok(0)
#[tokio::test]
async fn delete_one_without_match_returns_zero() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Bot)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BotRepository::new(db);
    let deleted = repo.delete_one(BotFilter::BotUuid(next_uuid())).await?;

    assert_eq!(deleted, 0);

    Ok(())
}

/// Tests clearing the whole collection.
///
/// Expected: Ok(count) and an empty collection
#[tokio::test]
async fn deletes_many_bots() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Bot)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..3 {
        factory::create_bot(db).await?;
    }

    let repo = BotRepository::new(db);
    let deleted = repo.delete_many(BotFilter::All).await?;

    assert_eq!(deleted, 3);
    assert!(repo.find(BotFilter::All).await?.is_empty());

    Ok(())
}
