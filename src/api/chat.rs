//! Chat Endpoints

use crate::api::client;
use crate::state::global::ChatMessage;

#[derive(Debug, serde::Deserialize)]
struct MessageListResponse {
    messages: Vec<ChatMessage>,
}

/// Fetch the chat feed, newest `limit` messages within the trailing window
pub async fn list(limit: Option<u32>, hours: Option<u32>) -> Result<Vec<ChatMessage>, String> {
    let path = format!(
        "/chat/messages?limit={}&hours={}",
        limit.unwrap_or(50),
        hours.unwrap_or(24)
    );

    client::fetch_json::<MessageListResponse>(client::get(&path), "Failed to load messages")
        .await
        .map(|r| r.messages)
}

pub async fn send(message_text: &str) -> Result<(), String> {
    #[derive(serde::Serialize)]
    struct SendMessageRequest {
        message_text: String,
    }

    client::execute_with(
        client::post("/chat/messages"),
        &SendMessageRequest {
            message_text: message_text.to_string(),
        },
        "Failed to send message",
    )
    .await
}

pub async fn delete(id: i64) -> Result<(), String> {
    client::execute(
        client::delete(&format!("/chat/messages/{}", id)),
        "Failed to delete message",
    )
    .await
}
