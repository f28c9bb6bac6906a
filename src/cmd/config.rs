use std::io::{self, Write};

use clap::{Args, Subcommand};
use tracing::warn;

use crate::config::{StoredConfig, config_file_path};
use crate::domain::options::{MessageType, Tone};
use crate::error::AppResult;

#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommand {
    /// Run the interactive configuration wizard.
    Init,
    /// Show the stored defaults.
    Show,
}

pub fn run(command: ConfigCommand) -> AppResult<()> {
    match command {
        ConfigCommand::Init => run_init(),
        ConfigCommand::Show => run_show(),
    }
}

fn run_init() -> AppResult<()> {
    let mut cfg = StoredConfig::load()?;

    println!("Configuring supportdraft defaults.");
    println!("Press Enter to keep the current value, '-' to clear it.");
    println!();

    apply_prompt("Sign-off name", &mut cfg.default_author)?;
    apply_prompt(
        "Default tone (professional/friendly/firm)",
        &mut cfg.default_tone,
    )?;
    apply_prompt(
        "Default audience (customer/manager/internal)",
        &mut cfg.default_audience,
    )?;
    apply_prompt(
        "Default message type (email/chat/ticket)",
        &mut cfg.default_message_type,
    )?;

    if let Some(tone) = cfg.default_tone.as_deref().filter(|t| Tone::from_str(t).is_none()) {
        warn!("unknown tone '{tone}' will fall back to professional");
    }
    if let Some(kind) = cfg
        .default_message_type
        .as_deref()
        .filter(|t| MessageType::from_str(t).is_none())
    {
        warn!("unknown message type '{kind}' will fall back to email");
    }

    cfg.save()?;

    let path = config_file_path()?;
    println!("\nConfiguration saved to {}", path.display());
    Ok(())
}

fn run_show() -> AppResult<()> {
    let cfg = StoredConfig::load()?;
    let path = config_file_path()?;

    println!("Configuration file: {}", path.display());
    println!("Sign-off name: {}", display_value(&cfg.default_author));
    println!("Default tone: {}", display_value(&cfg.default_tone));
    println!("Default audience: {}", display_value(&cfg.default_audience));
    println!(
        "Default message type: {}",
        display_value(&cfg.default_message_type)
    );
    println!(
        "Clipboard hold (seconds): {}",
        cfg.clipboard_hold_secs
            .map(|secs| secs.to_string())
            .unwrap_or_else(|| "<not set>".to_string())
    );

    Ok(())
}

fn apply_prompt(field: &str, target: &mut Option<String>) -> AppResult<()> {
    match prompt(field, target.as_deref())? {
        PromptAction::Keep => {}
        PromptAction::Clear => *target = None,
        PromptAction::Set(value) => *target = Some(value),
    }
    Ok(())
}

fn prompt(field: &str, current: Option<&str>) -> AppResult<PromptAction> {
    let mut stdout = io::stdout();

    match current {
        Some(value) => write!(stdout, "{field} [{value}] (Enter to keep, '-' to clear): ")?,
        None => write!(stdout, "{field} (Enter to skip): ")?,
    }
    stdout.flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(PromptAction::parse(&input))
}

fn display_value(value: &Option<String>) -> String {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .map(|v| v.to_string())
        .unwrap_or_else(|| "<not set>".to_string())
}

#[derive(Debug, PartialEq, Eq)]
enum PromptAction {
    Keep,
    Clear,
    Set(String),
}

impl PromptAction {
    fn parse(input: &str) -> Self {
        match input.trim() {
            "" => PromptAction::Keep,
            "-" => PromptAction::Clear,
            value => PromptAction::Set(value.to_string()),
        }
    }
}
