use super::*;

/// Tests that a stored message keeps microsecond precision.
///
/// Expected: Ok(Message) identical after reading back
#[tokio::test]
async fn inserts_message_with_microseconds() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Message)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let message = Message {
        timestamp: fixture::message::timestamp() + chrono::Duration::microseconds(123_456),
        ..Message::from_entity(fixture::message::entity())
    };

    let repo = MessageRepository::new(db);
    let stored = repo.insert_one(message.clone()).await?;

    assert_eq!(stored, message);
    assert_eq!(
        repo.find_one(MessageFilter::MessageUuid(message.message_uuid))
            .await?,
        Some(message)
    );

    Ok(())
}

/// Tests that the same message id can be stored twice.
///
/// Expected: Ok for both inserts, both returned by find
#[tokio::test]
async fn accepts_duplicate_message_uuid() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Message)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let message = Message::from_entity(fixture::message::entity());

    let repo = MessageRepository::new(db);
    repo.insert_one(message.clone()).await?;
    repo.insert_one(message.clone()).await?;

    let found = repo
        .find(MessageFilter::MessageUuid(message.message_uuid))
        .await?;
    assert_eq!(found.len(), 2);

    Ok(())
}

/// Tests inserting a batch of messages.
///
/// Expected: Ok(2) and both stored in order
#[tokio::test]
async fn inserts_many_messages() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Message)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = Message::from_entity(fixture::message::entity());
    let second = Message {
        message_uuid: next_uuid(),
        ..first.clone()
    };

    let repo = MessageRepository::new(db);
    let inserted = repo
        .insert_many(vec![first.clone(), second.clone()])
        .await?;

    assert_eq!(inserted, 2);
    assert_eq!(
        repo.find(MessageFilter::ConversationUuid(first.conversation_uuid))
            .await?,
        vec![first, second]
    );

    Ok(())
}
