// src/api/types.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::complexity::Complexity;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct GenerateRequest {
    /// Exact length of every generated password
    pub length: usize,
    /// Include lowercase letters
    pub lower_case: Option<bool>,
    /// Include uppercase letters
    pub upper_case: Option<bool>,
    /// Include special characters
    pub special_case: Option<bool>,
    /// Number of passwords to generate (defaults to 1)
    pub amount: Option<usize>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct GenerateResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// The generated passwords that were persisted or rejected
    pub passwords: Vec<String>,
    /// Inputs rejected as duplicates, in input order
    pub duplicates: Vec<String>,
    /// Complexity label shared by the whole batch
    pub complexity: Option<Complexity>,
    /// Error message (only present on failure)
    pub error: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PasswordRequest {
    /// Plaintext password to classify, look up, or delete
    pub password: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PasswordResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// The password the response refers to
    pub password: Option<String>,
    /// Complexity tier of the password
    pub complexity: Option<Complexity>,
    /// Generation timestamp of the stored record; null when the password was
    /// never persisted
    pub generated_at: Option<DateTime<Utc>>,
    /// Error message (only present on failure)
    pub error: Option<String>,
}
