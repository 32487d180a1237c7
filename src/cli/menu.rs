// src/cli/menu.rs
use console::style;
use inquire::validator::Validation;
use inquire::{Confirm, InquireError, Select, Text};

use crate::cli::commands::parse_length;
use crate::generators::PasswordGenerator;
use crate::models::{CharacterClass, ClassPolicy, GenerationConfig};

const MUST_INCLUDE: &str = "Must include";
const NEVER_INCLUDE: &str = "Never include";
const DECIDE_RANDOMLY: &str = "Decide randomly";
const POLICY_OPTIONS: [&str; 3] = [MUST_INCLUDE, NEVER_INCLUDE, DECIDE_RANDOMLY];

const DEFAULT_SPECIAL: &str = "Default";
const CUSTOM_SPECIAL: &str = "Custom";

pub fn policy_from_label(label: &str) -> Option<ClassPolicy> {
    match label {
        MUST_INCLUDE => Some(ClassPolicy::MustInclude),
        NEVER_INCLUDE => Some(ClassPolicy::NeverInclude),
        DECIDE_RANDOMLY => Some(ClassPolicy::RandomlyDecide),
        _ => None,
    }
}

pub fn policy_cursor(policy: ClassPolicy) -> usize {
    match policy {
        ClassPolicy::MustInclude => 0,
        ClassPolicy::NeverInclude => 1,
        ClassPolicy::RandomlyDecide => 2,
    }
}

fn length_validation(input: &str) -> Validation {
    match parse_length(input) {
        Ok(_) => Validation::Valid,
        Err(message) => Validation::Invalid(message.into()),
    }
}

fn question(class: CharacterClass) -> &'static str {
    match class {
        CharacterClass::Lowercase => "Include lower-case letters?",
        CharacterClass::Uppercase => "Include upper-case letters?",
        CharacterClass::Digit => "Include digits (from 0 to 9)?",
        CharacterClass::Special => "Include special characters?",
    }
}

/// Run the interactive form until the user stops or interrupts it.
pub fn run_cli_menu(defaults: GenerationConfig) -> anyhow::Result<()> {
    println!("╔══════════════════════════════════════╗");
    println!("║      🦀 RANDOM PASSWORD GENERATOR    ║");
    println!("╚══════════════════════════════════════╝");

    match menu_loop(defaults) {
        Ok(()) => Ok(()),
        Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => {
            log::info!("Interactive menu interrupted");
            println!("\n👋 Goodbye!");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

fn menu_loop(defaults: GenerationConfig) -> Result<(), InquireError> {
    let mut generator = PasswordGenerator::new();
    let mut current = defaults;

    loop {
        current = prompt_config(&current)?;

        match generator.generate(&current) {
            Ok(password) => {
                println!("\nGenerated Password: {}\n", style(&password).bold().green());
            }
            Err(e) => {
                println!("\n{} {}\n", style("❌").red(), style(e).red());
            }
        }

        let again = Confirm::new("Generate another password?")
            .with_default(true)
            .prompt()?;
        if !again {
            println!("👋 Goodbye!");
            return Ok(());
        }
    }
}

// Ask for every setting, starting from the previous answers
fn prompt_config(previous: &GenerationConfig) -> Result<GenerationConfig, InquireError> {
    let length: usize = Text::new("Password length:")
        .with_default(&previous.length.to_string())
        .with_validator(|input: &str| Ok(length_validation(input)))
        .prompt()
        .and_then(|s| parse_length(&s).map_err(|e| InquireError::Custom(e.into())))?;

    let mut config = previous.clone().with_length(length);

    for class in CharacterClass::ALL {
        let label = Select::new(question(class), POLICY_OPTIONS.to_vec())
            .with_starting_cursor(policy_cursor(previous.policy(class)))
            .prompt()?;
        if let Some(policy) = policy_from_label(label) {
            config = config.with_policy(class, policy);
        }
    }

    if config.special.is_allowed() {
        let source = Select::new(
            "Which special characters are allowed?",
            vec![DEFAULT_SPECIAL, CUSTOM_SPECIAL],
        )
        .with_starting_cursor(if previous.custom_special.is_some() { 1 } else { 0 })
        .prompt()?;

        if source == CUSTOM_SPECIAL {
            let custom = Text::new("Custom special characters:")
                .with_default(previous.custom_special.as_deref().unwrap_or(""))
                .with_help_message("Symbols other than English letters or digits, each used once")
                .prompt()?;
            config.custom_special = Some(custom);
        } else {
            config.custom_special = None;
        }
    }

    Ok(config)
}
