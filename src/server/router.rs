use axum::{routing::get, Json, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::server::{controller, state::AppState};

#[derive(OpenApi)]
#[openapi(
    info(title = "Bot API", description = "Bots and the messages they exchange"),
    tags(
        (name = "bot", description = "Bot registration and management"),
        (name = "message", description = "Conversation messages")
    )
)]
struct ApiDoc;

pub fn router(state: AppState) -> Router {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::bot::create_bot))
        .routes(routes!(
            controller::bot::get_bot,
            controller::bot::update_bot,
            controller::bot::delete_bot
        ))
        .routes(routes!(
            controller::message::create_message,
            controller::message::get_conversation_messages
        ))
        .routes(routes!(controller::message::get_message))
        .split_for_parts();

    router
        .route(
            "/api-docs/openapi.json",
            get(move || {
                let api = api.clone();
                async move { Json(api) }
            }),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
