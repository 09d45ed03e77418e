use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::Value;

use crate::{
    model::{api::ErrorDto, bot::BotDto},
    server::{
        controller::param::{json_body, parse_uuid_param},
        error::AppError,
        model::{bot::Bot, schema::Schema},
        service::bot::BotService,
        state::AppState,
    },
};

pub static BOT_TAG: &str = "bot";

const INVALID_BOT_ID: &str = "Invalid bot id";

/// Register a new bot.
///
/// Decodes the body through the bot schema and stores it unless a bot with the same id is
/// already registered.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Raw JSON body with `id` and `name`
///
/// # Returns
/// - `201 Created` - The registered bot
/// - `400 Bad Request` - Invalid bot data or id already registered
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/bots",
    tag = BOT_TAG,
    request_body = BotDto,
    responses(
        (status = 201, description = "Successfully registered bot", body = BotDto),
        (status = 400, description = "Invalid bot data or bot id already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_bot(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let bot = Bot::decode(&json_body(payload))?;

    let bot = BotService::new(&state.db).create(bot).await?;

    Ok((StatusCode::CREATED, Json(bot.encode())))
}

/// Get a bot by id.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Bot id from the path
///
/// # Returns
/// - `200 OK` - The stored bot
/// - `400 Bad Request` - Malformed bot id
/// - `404 Not Found` - No bot with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/bots/{id}",
    tag = BOT_TAG,
    params(
        ("id" = String, Path, description = "Bot ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved bot", body = BotDto),
        (status = 400, description = "Invalid bot id", body = ErrorDto),
        (status = 404, description = "Bot not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bot(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let bot_uuid = parse_uuid_param(&id, INVALID_BOT_ID)?;

    let bot = BotService::new(&state.db).get(bot_uuid).await?;

    Ok((StatusCode::OK, Json(bot.encode())))
}

/// Replace a bot's fields.
///
/// The stored bot is looked up before the body is decoded, so an unknown id answers 404
/// even when the body is invalid. The body's `id` is stored as sent, it is not reconciled
/// with the path id.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Bot id from the path
/// - `payload` - Raw JSON body with `id` and `name`
///
/// # Returns
/// - `202 Accepted` - The bot after the update
/// - `400 Bad Request` - Malformed bot id or invalid bot data
/// - `404 Not Found` - No bot with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/bots/{id}",
    tag = BOT_TAG,
    params(
        ("id" = String, Path, description = "Bot ID")
    ),
    request_body = BotDto,
    responses(
        (status = 202, description = "Successfully updated bot", body = BotDto),
        (status = 400, description = "Invalid bot id or bot data", body = ErrorDto),
        (status = 404, description = "Bot not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_bot(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let bot_uuid = parse_uuid_param(&id, INVALID_BOT_ID)?;

    let service = BotService::new(&state.db);
    service.get(bot_uuid).await?;

    let bot = Bot::decode(&json_body(payload))?;
    let bot = service.update(bot_uuid, bot).await?;

    Ok((StatusCode::ACCEPTED, Json(bot.encode())))
}

/// Delete a bot by id.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Bot id from the path
///
/// # Returns
/// - `204 No Content` - The bot was deleted
/// - `400 Bad Request` - Malformed bot id
/// - `404 Not Found` - No bot with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/bots/{id}",
    tag = BOT_TAG,
    params(
        ("id" = String, Path, description = "Bot ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted bot"),
        (status = 400, description = "Invalid bot id", body = ErrorDto),
        (status = 404, description = "Bot not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_bot(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let bot_uuid = parse_uuid_param(&id, INVALID_BOT_ID)?;

    BotService::new(&state.db).delete(bot_uuid).await?;

    Ok(StatusCode::NO_CONTENT)
}
