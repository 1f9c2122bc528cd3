// src/models.rs
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Deserialize};

pub const MIN_PASSWORD_LENGTH: usize = 4;
pub const MAX_PASSWORD_LENGTH: usize = 128;
pub const DEFAULT_PASSWORD_LENGTH: usize = 20;

pub const UPPERCASE_CHARS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE_CHARS: &str = "abcdefghijklmnopqrstuvwxyz";
pub const NUMBER_CHARS: &str = "0123456789";
pub const SYMBOL_CHARS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// A class of characters with a fixed alphabet.
///
/// The declaration order is the order categories are visited during
/// generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterCategory {
    Uppercase,
    Lowercase,
    Numbers,
    Symbols,
}

impl CharacterCategory {
    pub const ALL: [CharacterCategory; 4] = [
        CharacterCategory::Uppercase,
        CharacterCategory::Lowercase,
        CharacterCategory::Numbers,
        CharacterCategory::Symbols,
    ];

    pub fn alphabet(self) -> &'static str {
        match self {
            CharacterCategory::Uppercase => UPPERCASE_CHARS,
            CharacterCategory::Lowercase => LOWERCASE_CHARS,
            CharacterCategory::Numbers => NUMBER_CHARS,
            CharacterCategory::Symbols => SYMBOL_CHARS,
        }
    }

    pub fn contains(self, c: char) -> bool {
        self.alphabet().contains(c)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CharacterCategory::Uppercase => "uppercase",
            CharacterCategory::Lowercase => "lowercase",
            CharacterCategory::Numbers => "numbers",
            CharacterCategory::Symbols => "symbols",
        }
    }
}

impl fmt::Display for CharacterCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CharacterCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "uppercase" | "upper" => Ok(CharacterCategory::Uppercase),
            "lowercase" | "lower" => Ok(CharacterCategory::Lowercase),
            "numbers" | "number" | "digits" => Ok(CharacterCategory::Numbers),
            "symbols" | "symbol" => Ok(CharacterCategory::Symbols),
            other => Err(format!("unknown character type '{}'", other)),
        }
    }
}

/// Clamp a requested length into the range front-ends accept.
pub fn clamp_length(length: i64) -> usize {
    length.clamp(MIN_PASSWORD_LENGTH as i64, MAX_PASSWORD_LENGTH as i64) as usize
}

// Password generation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub length: usize,
    pub categories: BTreeSet<CharacterCategory>,
}

impl GenerationRequest {
    pub fn new(length: usize, categories: impl IntoIterator<Item = CharacterCategory>) -> Self {
        Self {
            length,
            categories: categories.into_iter().collect(),
        }
    }

    /// Build a request from the four checkbox-style flags.
    pub fn from_flags(length: usize, uppercase: bool, lowercase: bool, numbers: bool, symbols: bool) -> Self {
        let flags = [uppercase, lowercase, numbers, symbols];
        Self::new(
            length,
            CharacterCategory::ALL
                .into_iter()
                .zip(flags)
                .filter_map(|(category, enabled)| enabled.then_some(category)),
        )
    }
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self::new(DEFAULT_PASSWORD_LENGTH, CharacterCategory::ALL)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrengthLabel {
    #[serde(rename = "Very Weak")]
    VeryWeak,
    Weak,
    Regular,
    Strong,
    #[serde(rename = "Very Strong")]
    VeryStrong,
}

impl StrengthLabel {
    pub const ALL: [StrengthLabel; 5] = [
        StrengthLabel::VeryWeak,
        StrengthLabel::Weak,
        StrengthLabel::Regular,
        StrengthLabel::Strong,
        StrengthLabel::VeryStrong,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            StrengthLabel::VeryWeak => "Very Weak",
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Regular => "Regular",
            StrengthLabel::Strong => "Strong",
            StrengthLabel::VeryStrong => "Very Strong",
        }
    }

    /// Meter color for this label.
    pub fn color(self) -> &'static str {
        match self {
            StrengthLabel::VeryWeak => "#f87171",
            StrengthLabel::Weak => "#fb923c",
            StrengthLabel::Regular => "#fbbf24",
            StrengthLabel::Strong => "#a3e635",
            StrengthLabel::VeryStrong => "#4ade80",
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthResult {
    /// Heuristic score between 0 and 5
    pub score: u8,
    pub label: StrengthLabel,
}

impl StrengthResult {
    /// Width of the strength meter, `score / 5 * 100`.
    pub fn percentage(&self) -> f64 {
        f64::from(self.score) / 5.0 * 100.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedPassword {
    pub password: String,
    pub strength: StrengthResult,
    /// Set when no category was selected and uppercase was substituted
    pub used_fallback: bool,
}
