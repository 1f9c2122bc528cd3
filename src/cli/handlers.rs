// src/cli/handlers.rs
use anyhow::{Context, Result};
use serde::Serialize;

use crate::cli::CliCommand;
use crate::core::config::Config;
use crate::core::session::NO_CATEGORY_MESSAGE;
use crate::generators::{analyze_password_strength, generate_uuid_v4, strength_feedback, PasswordGenerator};
use crate::models::{clamp_length, GeneratedPassword, GenerationRequest, StrengthResult};
use crate::utils::format_strength;

#[derive(Debug, Serialize)]
pub struct PasswordAnalysis {
    pub score: u8,
    pub label: String,
    pub percentage: f64,
    pub color: String,
    pub feedback: Vec<String>,
    #[serde(skip)]
    pub strength: StrengthResult,
}

impl PasswordAnalysis {
    fn new(strength: StrengthResult, feedback: Vec<String>) -> Self {
        Self {
            score: strength.score,
            label: strength.label.to_string(),
            percentage: strength.percentage(),
            color: strength.label.color().to_string(),
            feedback,
            strength,
        }
    }
}

// Handlers for CLI commands
pub fn handle_generate_passwords(
    config: &Config,
    length: Option<i64>,
    exclude: [bool; 4],
    count: usize,
) -> Vec<GeneratedPassword> {
    let length = length
        .map(clamp_length)
        .unwrap_or(config.default_password_length);
    let [no_uppercase, no_lowercase, no_numbers, no_symbols] = exclude;
    let request = GenerationRequest::from_flags(length, !no_uppercase, !no_lowercase, !no_numbers, !no_symbols);

    let generator = PasswordGenerator::new();
    (0..count.max(1))
        .map(|_| generator.generate_password(&request))
        .collect()
}

pub fn handle_generate_uuids(count: usize) -> Vec<String> {
    (0..count.max(1)).map(|_| generate_uuid_v4()).collect()
}

pub fn handle_analyze(password: &str) -> PasswordAnalysis {
    PasswordAnalysis::new(analyze_password_strength(password), strength_feedback(password))
}

/// Run a one-shot command and print its result.
pub fn run_command(command: CliCommand, json: bool, config: &Config) -> Result<()> {
    match command {
        CliCommand::Password { length, no_uppercase, no_lowercase, no_numbers, no_symbols, count } => {
            let generated = handle_generate_passwords(
                config,
                length,
                [no_uppercase, no_lowercase, no_numbers, no_symbols],
                count,
            );

            if generated.iter().any(|g| g.used_fallback) {
                eprintln!("⚠️  {} Using uppercase letters.", NO_CATEGORY_MESSAGE);
            }

            if json {
                print_json(&generated)?;
            } else {
                for item in &generated {
                    println!("{}", item.password);
                    println!("  {}", format_strength(&item.strength));
                }
            }
        }
        CliCommand::Uuid { count } => {
            let uuids = handle_generate_uuids(count);
            if json {
                print_json(&uuids)?;
            } else {
                for uuid in uuids {
                    println!("{}", uuid);
                }
            }
        }
        CliCommand::Analyze { password } => {
            let analysis = handle_analyze(&password);
            if json {
                print_json(&analysis)?;
            } else {
                println!("Strength: {}", format_strength(&analysis.strength));
                for line in &analysis.feedback {
                    println!("  • {}", line);
                }
            }
        }
        CliCommand::Serve { .. } => {
            anyhow::bail!("serve is handled by the server runtime");
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let out = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", out);
    Ok(())
}
