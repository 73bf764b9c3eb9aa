//! Auth Endpoints

use crate::api::client;
use crate::state::session::User;

/// Successful registration or login: profile plus bearer token
#[derive(Debug, Clone, serde::Deserialize)]
pub struct AuthResponse {
    pub user: User,
    pub token: String,
}

#[derive(Debug, serde::Deserialize)]
struct CurrentUserResponse {
    user: User,
}

/// Create an account. The server signs the new user in immediately.
pub async fn register(username: &str, email: &str, password: &str) -> Result<AuthResponse, String> {
    #[derive(serde::Serialize)]
    struct RegisterRequest {
        username: String,
        email: String,
        password: String,
    }

    client::fetch_json_with(
        client::post("/auth/register"),
        &RegisterRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        },
        "Registration failed. Please try again.",
    )
    .await
}

pub async fn login(username: &str, password: &str) -> Result<AuthResponse, String> {
    #[derive(serde::Serialize)]
    struct LoginRequest {
        username: String,
        password: String,
    }

    client::fetch_json_with(
        client::post("/auth/login"),
        &LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        },
        "Login failed. Please try again.",
    )
    .await
}

/// Fetch the profile behind the current token
pub async fn current_user() -> Result<User, String> {
    client::fetch_json::<CurrentUserResponse>(client::get("/auth/me"), "Failed to load profile")
        .await
        .map(|r| r.user)
}

pub async fn change_password(current_password: &str, new_password: &str) -> Result<(), String> {
    #[derive(serde::Serialize)]
    struct ChangePasswordRequest {
        current_password: String,
        new_password: String,
    }

    client::execute_with(
        client::post("/auth/change-password"),
        &ChangePasswordRequest {
            current_password: current_password.to_string(),
            new_password: new_password.to_string(),
        },
        "Failed to change password",
    )
    .await
}
