// src/core/session.rs
use std::collections::BTreeSet;
use std::fmt;
use std::io::{self, Write};
use std::num::IntErrorKind;

use serde::Serialize;

use crate::core::config::Config;
use crate::generators::{generate_uuid_v4, PasswordGenerator};
use crate::models::{
    clamp_length, CharacterCategory, GenerationRequest, StrengthResult, DEFAULT_PASSWORD_LENGTH,
};

pub const NO_CATEGORY_MESSAGE: &str = "Select at least one character type!";
pub const COPY_FAILED_MESSAGE: &str = "Error copying to clipboard";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

/// Short message for the user, shown as a toast or status line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, message: message.into() }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Info, message: message.into() }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyField {
    Password,
    Uuid,
}

/// Somewhere copied values go.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> io::Result<()>;
}

/// Terminal stand-in for a clipboard: the value on its own line.
pub struct StdoutClipboard;

impl Clipboard for StdoutClipboard {
    fn write_text(&mut self, text: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{}", text)?;
        out.flush()
    }
}

/// Handlers a front-end wires its controls to.
pub trait GeneratorActions {
    fn on_regenerate(&mut self) -> Option<Notice>;
    fn on_regenerate_uuid(&mut self);
    fn on_adjust_length(&mut self, delta: i64) -> Option<Notice>;
    fn on_copy(&mut self, field: CopyField, clipboard: &mut dyn Clipboard) -> Notice;
}

/// Current generator state as a front-end shows it.
#[derive(Debug, Clone)]
pub struct GeneratorSession {
    length: usize,
    categories: BTreeSet<CharacterCategory>,
    password: String,
    strength: StrengthResult,
    uuid: String,
    generator: PasswordGenerator,
    pending: Option<Notice>,
}

impl GeneratorSession {
    /// New session with a password and UUID already generated.
    pub fn new(config: &Config) -> Self {
        let generator = PasswordGenerator::new();
        let request = GenerationRequest {
            length: clamp_length(config.default_password_length as i64),
            categories: config.default_categories.clone(),
        };
        let generated = generator.generate_password(&request);

        let mut categories = request.categories;
        let mut pending = None;
        if generated.used_fallback {
            categories.insert(CharacterCategory::Uppercase);
            pending = Some(Notice::error(NO_CATEGORY_MESSAGE));
        }

        Self {
            length: request.length,
            categories,
            password: generated.password,
            strength: generated.strength,
            uuid: generate_uuid_v4(),
            generator,
            pending,
        }
    }

    /// Notice raised while the session was set up, handed out once.
    pub fn take_notice(&mut self) -> Option<Notice> {
        self.pending.take()
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn categories(&self) -> &BTreeSet<CharacterCategory> {
        &self.categories
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn strength(&self) -> StrengthResult {
        self.strength
    }

    pub fn uuid(&self) -> &str {
        &self.uuid
    }

    pub fn is_enabled(&self, category: CharacterCategory) -> bool {
        self.categories.contains(&category)
    }

    /// Replace the enabled character types and regenerate once.
    pub fn set_categories(&mut self, categories: BTreeSet<CharacterCategory>) -> Option<Notice> {
        self.categories = categories;
        self.on_regenerate()
    }

    /// Apply raw length input: unparsable or zero means the default.
    pub fn set_length_input(&mut self, raw: &str) -> Option<Notice> {
        self.length = parse_length_input(raw);
        self.on_regenerate()
    }

    fn request(&self) -> GenerationRequest {
        GenerationRequest {
            length: self.length,
            categories: self.categories.clone(),
        }
    }
}

impl GeneratorActions for GeneratorSession {
    fn on_regenerate(&mut self) -> Option<Notice> {
        let generated = self.generator.generate_password(&self.request());
        self.password = generated.password;
        self.strength = generated.strength;

        if generated.used_fallback {
            self.categories.insert(CharacterCategory::Uppercase);
            Some(Notice::error(NO_CATEGORY_MESSAGE))
        } else {
            None
        }
    }

    fn on_regenerate_uuid(&mut self) {
        self.uuid = generate_uuid_v4();
    }

    fn on_adjust_length(&mut self, delta: i64) -> Option<Notice> {
        self.length = clamp_length(self.length as i64 + delta);
        self.on_regenerate()
    }

    fn on_copy(&mut self, field: CopyField, clipboard: &mut dyn Clipboard) -> Notice {
        let (text, message) = match field {
            CopyField::Password => (&self.password, "Password copied!"),
            CopyField::Uuid => (&self.uuid, "UUID copied!"),
        };

        match clipboard.write_text(text) {
            Ok(()) => Notice::success(message),
            Err(e) => {
                log::error!("Error copying: {}", e);
                Notice::error(COPY_FAILED_MESSAGE)
            }
        }
    }
}

/// Leading digits are read like an integer field; anything that yields
/// no number, or zero, falls back to the default length.
pub fn parse_length_input(raw: &str) -> usize {
    let trimmed = raw.trim();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1i64, rest),
        None => (1i64, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let digits: String = digits.chars().take_while(|c| c.is_ascii_digit()).collect();

    match digits.parse::<i64>() {
        Ok(0) => DEFAULT_PASSWORD_LENGTH,
        Ok(value) => clamp_length(sign * value),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => clamp_length(sign * i64::MAX),
        Err(_) => DEFAULT_PASSWORD_LENGTH,
    }
}
