use super::*;

/// Tests removing one conversation while keeping another.
///
/// Expected: Ok(2) and only the other conversation remains
#[tokio::test]
async fn deletes_conversation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Message)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let doomed = next_uuid();
    let kept = next_uuid();
    factory::create_message(db, doomed).await?;
    factory::create_message(db, doomed).await?;
    factory::create_message(db, kept).await?;

    let repo = MessageRepository::new(db);
    let deleted = repo
        .delete_many(MessageFilter::ConversationUuid(doomed))
        .await?;

    assert_eq!(deleted, 2);
    assert_eq!(repo.find(MessageFilter::All).await?.len(), 1);
    assert_eq!(
        repo.find(MessageFilter::ConversationUuid(kept)).await?.len(),
        1
    );

    Ok(())
}

/// Tests clearing the collection.
///
/// Expected: Ok(count) and no messages left
#[tokio::test]
async fn deletes_all_messages() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Message)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_message(db, next_uuid()).await?;
    factory::create_message(db, next_uuid()).await?;

    let repo = MessageRepository::new(db);
    let deleted = repo.delete_many(MessageFilter::All).await?;

    assert_eq!(deleted, 2);
    assert!(repo.find(MessageFilter::All).await?.is_empty());

    Ok(())
}
