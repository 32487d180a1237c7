// src/core/config.rs
use std::env;
use std::path::PathBuf;

use log::LevelFilter;

use crate::models::{ClassPolicy, GenerationConfig};

// Configuration for the password generator
#[derive(Debug, Clone)]
pub struct Config {
    // Password Generation
    pub default_password_length: usize,
    pub default_lowercase: ClassPolicy,
    pub default_uppercase: ClassPolicy,
    pub default_digits: ClassPolicy,
    pub default_special: ClassPolicy,
    pub special_characters: Option<String>,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        let generation = GenerationConfig::default();
        Self {
            // Password Generation
            default_password_length: generation.length,
            default_lowercase: generation.lowercase,
            default_uppercase: generation.uppercase,
            default_digits: generation.digits,
            default_special: generation.special,
            special_characters: None,

            // Logging
            log_level: LevelFilter::Warn,
            log_file: None,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> (Self, Vec<String>) {
        Self::load_from(|key| env::var(key).ok())
    }

    // Load configuration through an arbitrary key lookup. Rejected values keep
    // their default and come back as warnings for the caller to log.
    pub fn load_from<F>(lookup: F) -> (Self, Vec<String>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        let mut warnings = Vec::new();

        // Password Generation
        if let Some(val) = lookup("DEFAULT_PASSWORD_LENGTH") {
            match val.parse() {
                Ok(length) => config.default_password_length = length,
                Err(_) => warnings.push(format!(
                    "Invalid DEFAULT_PASSWORD_LENGTH '{}', using default",
                    val
                )),
            }
        }

        let policies = [
            ("DEFAULT_LOWERCASE_POLICY", &mut config.default_lowercase),
            ("DEFAULT_UPPERCASE_POLICY", &mut config.default_uppercase),
            ("DEFAULT_DIGITS_POLICY", &mut config.default_digits),
            ("DEFAULT_SPECIAL_POLICY", &mut config.default_special),
        ];
        for (key, slot) in policies {
            if let Some(val) = lookup(key) {
                match val.parse() {
                    Ok(policy) => *slot = policy,
                    Err(e) => warnings.push(format!("{} for {}, using default", e, key)),
                }
            }
        }

        if let Some(chars) = lookup("SPECIAL_CHARACTERS") {
            config.special_characters = Some(chars);
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "off" => config.log_level = LevelFilter::Off,
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => warnings.push(format!("Unknown log level '{}', using default", level)),
            }
        }

        if let Some(file) = lookup("LOG_FILE") {
            if !file.trim().is_empty() {
                config.log_file = Some(PathBuf::from(file));
            }
        }

        (config, warnings)
    }

    /// Generation settings used when the caller does not override them.
    pub fn generation_defaults(&self) -> GenerationConfig {
        GenerationConfig {
            length: self.default_password_length,
            lowercase: self.default_lowercase,
            uppercase: self.default_uppercase,
            digits: self.default_digits,
            special: self.default_special,
            custom_special: self.special_characters.clone(),
        }
    }
}
