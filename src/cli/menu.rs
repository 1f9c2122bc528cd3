// src/cli/menu.rs
use anyhow::{Context, Result};
use inquire::{InquireError, MultiSelect, Select, Text};
use inquire::error::InquireResult;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::core::config::Config;
use crate::core::session::{CopyField, GeneratorActions, GeneratorSession, Notice, StdoutClipboard};
use crate::models::{CharacterCategory, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};
use crate::utils::{format_notice, format_strength};

const REGENERATE: &str = "🔁  Regenerate password";
const LONGER: &str = "➕  Longer (+1)";
const SHORTER: &str = "➖  Shorter (-1)";
const SET_LENGTH: &str = "📏  Set length";
const CHARACTER_TYPES: &str = "🔤  Character types";
const COPY_PASSWORD: &str = "📋  Copy password";
const NEW_UUID: &str = "🆔  New UUID";
const COPY_UUID: &str = "📋  Copy UUID";
const EXIT: &str = "❌  Exit";

fn print_state(session: &GeneratorSession) {
    println!();
    println!("🔐 Password ({} chars): {}", session.length(), session.password());
    println!("   Strength: {}", format_strength(&session.strength()));
    println!("🆔 UUID: {}", session.uuid());
}

fn show(notice: Option<Notice>) {
    if let Some(notice) = notice {
        println!("{}", format_notice(&notice));
    }
}

/// Outer `None` when the prompt was interrupted with Ctrl+C.
fn answer<T>(result: InquireResult<Option<T>>) -> Result<Option<Option<T>>> {
    match result {
        Ok(answer) => Ok(Some(answer)),
        Err(InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

pub async fn run_cli_menu(config: Config, should_exit: Arc<AtomicBool>) -> Result<()> {
    println!("╔══════════════════════════════════════╗");
    println!("║      🦀 SECURE GENERATOR             ║");
    println!("╚══════════════════════════════════════╝");

    let mut session = GeneratorSession::new(&config);
    let mut clipboard = StdoutClipboard;
    show(session.take_notice());

    while !should_exit.load(Ordering::SeqCst) {
        print_state(&session);

        let options = vec![
            REGENERATE, LONGER, SHORTER, SET_LENGTH, CHARACTER_TYPES,
            COPY_PASSWORD, NEW_UUID, COPY_UUID, EXIT,
        ];

        let prompt = tokio::task::spawn_blocking(move || {
            Select::new("Choose an option:", options)
                .with_help_message("Use arrow keys to navigate, Enter to select. Ctrl+C to exit.")
                .with_page_size(10)
                .prompt_skippable()
        })
        .await
        .context("Menu prompt task failed")?;
        let Some(selection) = answer(prompt)? else { break };

        if should_exit.load(Ordering::SeqCst) {
            break;
        }

        match selection {
            Some(REGENERATE) => show(session.on_regenerate()),
            Some(LONGER) => show(session.on_adjust_length(1)),
            Some(SHORTER) => show(session.on_adjust_length(-1)),
            Some(SET_LENGTH) => {
                let current = session.length().to_string();
                let help = format!("Between {} and {}", MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH);
                let prompt = tokio::task::spawn_blocking(move || {
                    Text::new("Password length:")
                        .with_default(&current)
                        .with_help_message(&help)
                        .prompt_skippable()
                })
                .await
                .context("Length prompt task failed")?;
                let Some(raw) = answer(prompt)? else { break };

                if let Some(raw) = raw {
                    show(session.set_length_input(&raw));
                }
            }
            Some(CHARACTER_TYPES) => {
                let enabled: Vec<usize> = CharacterCategory::ALL
                    .iter()
                    .enumerate()
                    .filter(|(_, category)| session.is_enabled(**category))
                    .map(|(i, _)| i)
                    .collect();

                let prompt = tokio::task::spawn_blocking(move || {
                    MultiSelect::new("Character types:", CharacterCategory::ALL.to_vec())
                        .with_default(&enabled)
                        .prompt_skippable()
                })
                .await
                .context("Character type prompt task failed")?;
                let Some(chosen) = answer(prompt)? else { break };

                if let Some(chosen) = chosen {
                    show(session.set_categories(chosen.into_iter().collect()));
                }
            }
            Some(COPY_PASSWORD) => show(Some(session.on_copy(CopyField::Password, &mut clipboard))),
            Some(NEW_UUID) => {
                session.on_regenerate_uuid();
                show(Some(Notice::info("New UUID generated")));
            }
            Some(COPY_UUID) => show(Some(session.on_copy(CopyField::Uuid, &mut clipboard))),
            Some(EXIT) | None => break,
            Some(_) => {}
        }
    }

    println!("👋 Goodbye!");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interrupted_prompt_ends_the_menu() {
        let result: InquireResult<Option<&str>> = Err(InquireError::OperationInterrupted);
        assert!(matches!(answer(result), Ok(None)));
    }

    #[test]
    fn answers_and_skips_pass_through() {
        assert!(matches!(answer(Ok(Some(EXIT))), Ok(Some(Some(EXIT)))));
        assert!(matches!(answer::<&str>(Ok(None)), Ok(Some(None))));
    }

    #[test]
    fn other_prompt_errors_propagate() {
        let result: InquireResult<Option<String>> = Err(InquireError::OperationCanceled);
        assert!(answer(result).is_err());
    }
}
