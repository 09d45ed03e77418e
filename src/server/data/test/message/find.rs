use super::*;

/// Tests finding a message by its client-supplied id.
///
/// Expected: Ok(Some(Message)) equal to the stored document
#[tokio::test]
async fn finds_message_by_uuid() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Message)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let conversation_uuid = next_uuid();
    let stored = factory::create_message(db, conversation_uuid).await?;
    factory::create_message(db, conversation_uuid).await?;

    let repo = MessageRepository::new(db);
    let result = repo
        .find_one(MessageFilter::MessageUuid(stored.message_uuid))
        .await?;

    assert_eq!(result, Some(Message::from_entity(stored)));

    Ok(())
}

/// Tests looking up a message id that was never stored.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_uuid() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Message)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_message(db, next_uuid()).await?;

    let repo = MessageRepository::new(db);
    let result = repo.find_one(MessageFilter::MessageUuid(next_uuid())).await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests listing one conversation amid messages from another.
///
/// Expected: Ok(Vec) with only the conversation's messages, in store order
#[tokio::test]
async fn finds_conversation_in_store_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Message)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let conversation_uuid = next_uuid();
    let first = factory::message::MessageFactory::new(db, conversation_uuid)
        .text("first")
        .build()
        .await?;
    factory::create_message(db, next_uuid()).await?;
    let second = factory::message::MessageFactory::new(db, conversation_uuid)
        .text("second")
        .timestamp(fixture::message::timestamp() - chrono::Duration::hours(1))
        .build()
        .await?;

    let repo = MessageRepository::new(db);
    let messages = repo
        .find(MessageFilter::ConversationUuid(conversation_uuid))
        .await?;

    assert_eq!(
        messages,
        vec![Message::from_entity(first), Message::from_entity(second)]
    );

    Ok(())
}

/// Tests listing a conversation with no messages.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn finds_nothing_for_unused_conversation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Message)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_message(db, next_uuid()).await?;

    let repo = MessageRepository::new(db);
    let messages = repo
        .find(MessageFilter::ConversationUuid(next_uuid()))
        .await?;

    assert!(messages.is_empty());

    Ok(())
}
