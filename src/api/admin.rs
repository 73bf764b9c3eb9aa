//! Admin Endpoints
//!
//! Account management, subscription listing, aggregate stats, and chat
//! moderation. The server independently enforces the admin role on every
//! one of these; the UI gate is convenience only.

use crate::api::client;
use crate::state::global::ChatMessage;

/// Account record as shown in the admin user table
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct AdminUser {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub role: String,
    pub is_active: bool,
}

/// Subscription record
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct Subscription {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub plan: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub started_at: Option<String>,
}

/// Server-computed aggregate counts
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
pub struct Stats {
    pub total_users: i64,
    pub total_subscriptions: i64,
    pub active_sightings: i64,
    pub total_messages: i64,
}

#[derive(Debug, serde::Deserialize)]
struct UserListResponse {
    users: Vec<AdminUser>,
}

#[derive(Debug, serde::Deserialize)]
struct UserResponse {
    user: AdminUser,
}

#[derive(Debug, serde::Deserialize)]
struct SubscriptionListResponse {
    subscriptions: Vec<Subscription>,
}

#[derive(Debug, serde::Deserialize)]
struct StatsResponse {
    stats: Stats,
}

#[derive(Debug, serde::Deserialize)]
struct MessageListResponse {
    messages: Vec<ChatMessage>,
}

pub async fn list_users() -> Result<Vec<AdminUser>, String> {
    client::fetch_json::<UserListResponse>(client::get("/admin/users"), "Failed to load users")
        .await
        .map(|r| r.users)
}

pub async fn get_user(id: i64) -> Result<AdminUser, String> {
    client::fetch_json::<UserResponse>(
        client::get(&format!("/admin/users/{}", id)),
        "Failed to load user",
    )
    .await
    .map(|r| r.user)
}

/// Suspend an account. The server refuses to suspend admins.
pub async fn suspend_user(id: i64) -> Result<(), String> {
    client::execute(
        client::post(&format!("/admin/users/{}/suspend", id)),
        "Failed to suspend user",
    )
    .await
}

pub async fn activate_user(id: i64) -> Result<(), String> {
    client::execute(
        client::post(&format!("/admin/users/{}/activate", id)),
        "Failed to activate user",
    )
    .await
}

pub async fn delete_user(id: i64) -> Result<(), String> {
    client::execute(
        client::delete(&format!("/admin/users/{}", id)),
        "Failed to delete user",
    )
    .await
}

pub async fn list_subscriptions() -> Result<Vec<Subscription>, String> {
    client::fetch_json::<SubscriptionListResponse>(
        client::get("/admin/subscriptions"),
        "Failed to load subscriptions",
    )
    .await
    .map(|r| r.subscriptions)
}

pub async fn stats() -> Result<Stats, String> {
    client::fetch_json::<StatsResponse>(client::get("/admin/stats"), "Failed to load stats")
        .await
        .map(|r| r.stats)
}

/// Full chat feed for moderation, without the public window limits
pub async fn list_messages() -> Result<Vec<ChatMessage>, String> {
    client::fetch_json::<MessageListResponse>(
        client::get("/admin/messages"),
        "Failed to load messages",
    )
    .await
    .map(|r| r.messages)
}

/// Flag a message as moderated (hidden from the public feed)
pub async fn moderate_message(id: i64) -> Result<(), String> {
    client::execute(
        client::post(&format!("/admin/messages/{}/moderate", id)),
        "Failed to moderate message",
    )
    .await
}

pub async fn delete_message(id: i64) -> Result<(), String> {
    client::execute(
        client::delete(&format!("/admin/messages/{}", id)),
        "Failed to delete message",
    )
    .await
}
