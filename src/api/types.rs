// src/api/types.rs
use serde::{Serialize, Deserialize};
use utoipa::{IntoParams, ToSchema};

use crate::models::StrengthResult;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Service version
    pub version: String,
}

// Generator types
#[derive(Serialize, Deserialize, ToSchema, Default)]
pub struct PasswordGenerationRequest {
    /// Password length, clamped to 4..=128 (default: configured length)
    pub length: Option<i64>,
    /// Include uppercase letters (default: true)
    pub include_uppercase: Option<bool>,
    /// Include lowercase letters (default: true)
    pub include_lowercase: Option<bool>,
    /// Include numbers (default: true)
    pub include_numbers: Option<bool>,
    /// Include symbols (default: true)
    pub include_symbols: Option<bool>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct StrengthInfo {
    /// Score from 0 to 5
    pub score: u8,
    /// "Very Weak", "Weak", "Regular", "Strong" or "Very Strong"
    pub label: String,
    /// Strength meter width in percent
    pub percentage: f64,
    /// Meter color for the label
    pub color: String,
}

impl From<StrengthResult> for StrengthInfo {
    fn from(strength: StrengthResult) -> Self {
        Self {
            score: strength.score,
            label: strength.label.to_string(),
            percentage: strength.percentage(),
            color: strength.label.color().to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PasswordGenerationResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Generated password
    pub password: Option<String>,
    /// Password strength
    pub strength: Option<StrengthInfo>,
    /// Whether uppercase was substituted for an empty selection
    pub used_fallback: bool,
    /// Advisory message (e.g. no character type selected)
    pub warning: Option<String>,
    /// Error message (if operation failed)
    pub error: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PasswordAnalysisRequest {
    /// Password to analyze
    pub password: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PasswordAnalysisResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Password strength
    pub strength: Option<StrengthInfo>,
    /// Feedback and suggestions for improvement
    pub feedback: Vec<String>,
    /// Error message (if operation failed)
    pub error: Option<String>,
}

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UuidQuery {
    /// Number of UUIDs to generate, clamped to 1..=100 (default: 1)
    pub count: Option<usize>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct UuidResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Generated version 4 UUIDs
    pub uuids: Vec<String>,
}
