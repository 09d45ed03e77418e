use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::Value;

use crate::{
    model::{api::ErrorDto, message::MessageDto},
    server::{
        controller::param::{json_body, parse_uuid_param, ConversationParam},
        error::AppError,
        model::{message::Message, schema::Schema},
        service::message::MessageService,
        state::AppState,
    },
};

pub static MESSAGE_TAG: &str = "message";

/// Store a message.
///
/// Messages are appended without a duplicate check on their id.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Raw JSON body in the message wire shape
///
/// # Returns
/// - `201 Created` - The stored message
/// - `400 Bad Request` - Invalid message data
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/messages",
    tag = MESSAGE_TAG,
    request_body = MessageDto,
    responses(
        (status = 201, description = "Successfully stored message", body = MessageDto),
        (status = 400, description = "Invalid message data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_message(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let message = Message::decode(&json_body(payload))?;

    let message = MessageService::new(&state.db).create(message).await?;

    Ok((StatusCode::CREATED, Json(message.encode())))
}

/// Get a message by id.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Message id from the path
///
/// # Returns
/// - `200 OK` - The first stored message with that id
/// - `400 Bad Request` - Malformed message id
/// - `404 Not Found` - No message with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/messages/{id}",
    tag = MESSAGE_TAG,
    params(
        ("id" = String, Path, description = "Message ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved message", body = MessageDto),
        (status = 400, description = "Invalid message id", body = ErrorDto),
        (status = 404, description = "Message not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_message(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let message_uuid = parse_uuid_param(&id, "Invalid message id")?;

    let message = MessageService::new(&state.db).get(message_uuid).await?;

    Ok((StatusCode::OK, Json(message.encode())))
}

/// List the messages of a conversation.
///
/// Messages are returned in store order. When `conversationId` is repeated, the first
/// occurrence is used.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `pairs` - Raw query string pairs, searched for `conversationId`
///
/// # Returns
/// - `200 OK` - Every message of the conversation
/// - `400 Bad Request` - Missing, empty, or malformed `conversationId`
/// - `404 Not Found` - The conversation has no messages
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/messages",
    tag = MESSAGE_TAG,
    params(ConversationParam),
    responses(
        (status = 200, description = "Successfully retrieved conversation messages", body = Vec<MessageDto>),
        (status = 400, description = "Missing or invalid conversationId", body = ErrorDto),
        (status = 404, description = "No messages in conversation", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_conversation_messages(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<impl IntoResponse, AppError> {
    let param = ConversationParam::from_pairs(pairs);

    let Some(raw) = param.conversation_id.filter(|raw| !raw.is_empty()) else {
        return Err(AppError::BadRequest(
            "\"conversationId\" argument was not found".to_string(),
        ));
    };

    let conversation_uuid = parse_uuid_param(&raw, "Invalid conversationId")?;

    let messages = MessageService::new(&state.db)
        .list_by_conversation(conversation_uuid)
        .await?;

    let body: Vec<Value> = messages.iter().map(Message::encode).collect();

    Ok((StatusCode::OK, Json(body)))
}
