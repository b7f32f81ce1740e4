//! Session and account models.

use serde::{Deserialize, Serialize};

/// The logged-in viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
}

/// Request body for logging in.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Request body for the cosmetic signup form.
#[derive(Debug, Clone, Deserialize)]
pub struct SignupRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Values the login form is pre-filled with after signup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginPrefill {
    pub email: String,
    pub password: String,
}

/// Result of a signup: nothing is stored, the client is sent back to login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupNotice {
    pub message: String,
    pub login_prefill: LoginPrefill,
}
