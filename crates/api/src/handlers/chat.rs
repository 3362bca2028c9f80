//! Handlers for the `/chat` resource: the streaming deletion assistant.

use axum::body::Body;
use axum::extract::State;
use axum::http::header;
use axum::response::Response;
use axum::Json;
use serde::Deserialize;
use slettmeg_assistant::ChatTurn;
use slettmeg_core::error::CoreError;
use slettmeg_core::status::ChatRole;
use slettmeg_db::models::chat::ChatMessage;
use slettmeg_db::repositories::ChatMessageRepo;
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// How many past messages are replayed to the model as context.
const HISTORY_LIMIT: i64 = 50;

/// Request body for `POST /chat`.
#[derive(Debug, Deserialize)]
pub struct ChatBody {
    pub message: String,
}

/// GET /api/v1/chat/messages
///
/// The user's conversation history, oldest first.
pub async fn history(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<DataResponse<Vec<ChatMessage>>>> {
    let messages = ChatMessageRepo::list_recent(&state.pool, auth_user.user_id, HISTORY_LIMIT).await?;
    Ok(Json(DataResponse { data: messages }))
}

/// POST /api/v1/chat
///
/// Send a message to the assistant and stream the reply back as plain
/// text. Both the user message and the finished assistant reply are
/// persisted; the reply is written once the stream completes, so a
/// dropped connection loses at most the in-flight answer.
pub async fn send_message(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Json(input): Json<ChatBody>,
) -> AppResult<Response> {
    let assistant = state
        .assistant
        .as_ref()
        .ok_or(AppError::ServiceUnavailable("Chat assistant"))?;

    let message = input.message.trim().to_string();
    if message.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Message must not be empty".into(),
        )));
    }

    // 1. History first, then the new message: the model sees the
    //    conversation in order and the new message exactly once.
    let history =
        ChatMessageRepo::list_recent(&state.pool, auth_user.user_id, HISTORY_LIMIT).await?;
    ChatMessageRepo::create(&state.pool, auth_user.user_id, ChatRole::User, &message).await?;

    let mut turns: Vec<ChatTurn> = history
        .into_iter()
        .map(|m| match m.role {
            ChatRole::User => ChatTurn::user(m.content),
            ChatRole::Assistant => ChatTurn::assistant(m.content),
        })
        .collect();
    turns.push(ChatTurn::user(message));

    // 2. Start the upstream stream.
    let mut deltas = assistant.stream_chat(turns).await?;

    // 3. Relay deltas to the client while accumulating the full reply;
    //    persist it when the stream ends.
    let (tx, rx) = mpsc::channel::<Result<String, std::convert::Infallible>>(16);
    let pool = state.pool.clone();
    let user_id = auth_user.user_id;
    tokio::spawn(async move {
        let mut completion = String::new();
        while let Some(delta) = deltas.recv().await {
            completion.push_str(&delta);
            // Client gone; keep draining so the reply still gets stored.
            let _ = tx.send(Ok(delta)).await;
        }
        if !completion.is_empty() {
            if let Err(e) =
                ChatMessageRepo::create(&pool, user_id, ChatRole::Assistant, &completion).await
            {
                tracing::error!(error = %e, user_id, "failed to persist assistant reply");
            }
        }
    });

    let body = Body::from_stream(ReceiverStream::new(rx));
    Response::builder()
        .header(header::CONTENT_TYPE, "text/plain; charset=utf-8")
        .body(body)
        .map_err(|e| AppError::InternalError(format!("Failed to build response: {e}")))
}
