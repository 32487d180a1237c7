// src/cli/handlers.rs
use std::io::Write;

use console::style;
use serde::Serialize;

use crate::generators::{GeneratorError, PasswordGenerator};
use crate::models::{ClassSettings, GeneratedPassword, GenerationConfig};
use crate::utils::truncate_string;

#[derive(Serialize)]
pub struct GenerationResponse {
    pub success: bool,
    pub passwords: Vec<GeneratedPassword>,
    pub settings: Vec<ClassSettings>,
    pub error: Option<String>,
}

#[derive(Serialize)]
pub struct SettingsResponse {
    pub length: usize,
    pub classes: Vec<ClassSettings>,
}

/// Generate `count` passwords, using a seeded generator when `seed` is given.
pub fn generate_batch(
    config: &GenerationConfig,
    seed: Option<u64>,
    count: usize,
) -> Result<Vec<GeneratedPassword>, GeneratorError> {
    let mut generator = match seed {
        Some(seed) => {
            log::debug!("Using seeded generator");
            PasswordGenerator::with_seed(seed)
        }
        None => PasswordGenerator::new(),
    };

    (0..count).map(|_| generator.generate(config)).collect()
}

pub fn handle_generate<W: Write>(
    out: &mut W,
    config: &GenerationConfig,
    seed: Option<u64>,
    count: usize,
    json: bool,
) -> anyhow::Result<()> {
    let result = generate_batch(config, seed, count);

    if json {
        let response = match &result {
            Ok(passwords) => GenerationResponse {
                success: true,
                passwords: passwords.clone(),
                settings: config.settings(),
                error: None,
            },
            Err(e) => GenerationResponse {
                success: false,
                passwords: Vec::new(),
                settings: config.settings(),
                error: Some(e.to_string()),
            },
        };
        writeln!(out, "{}", serde_json::to_string_pretty(&response)?)?;
    }

    let passwords = result?;
    log::info!("Generated {} password(s)", passwords.len());

    if !json {
        for password in &passwords {
            writeln!(out, "{}", password)?;
        }
    }

    Ok(())
}

pub fn handle_settings<W: Write>(
    out: &mut W,
    config: &GenerationConfig,
    json: bool,
) -> anyhow::Result<()> {
    let settings = config.settings();

    if json {
        let response = SettingsResponse {
            length: config.length,
            classes: settings,
        };
        writeln!(out, "{}", serde_json::to_string_pretty(&response)?)?;
        return Ok(());
    }

    writeln!(out, "{} {}", style("Password length:").bold(), config.length)?;
    for entry in &settings {
        let symbols = if entry.symbols.is_empty() {
            "(none)".to_string()
        } else {
            truncate_string(&entry.symbols, 40)
        };
        writeln!(
            out,
            "{:<20} {:<8} {}",
            entry.name,
            entry.policy.to_string(),
            symbols
        )?;
    }

    Ok(())
}

/// Message for stderr after a failed command. Generation errors in JSON mode
/// are already part of the printed response.
pub fn failure_message(error: &anyhow::Error, json: bool) -> Option<String> {
    if json && error.downcast_ref::<GeneratorError>().is_some() {
        None
    } else {
        Some(error.to_string())
    }
}
