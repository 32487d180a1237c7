// src/cli/commands.rs
use clap::Subcommand;

use crate::generators::MAX_LENGTH;
use crate::models::{CharacterClass, ClassPolicy, GenerationConfig};

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate passwords
    Generate {
        #[command(flatten)]
        options: PolicyArgs,

        /// Seed for reproducible output
        #[arg(long, env = "PASSWORD_SEED")]
        seed: Option<u64>,

        /// Number of passwords to generate
        #[arg(long, short = 'n', default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..))]
        count: u16,
    },

    /// Show the effective generation settings
    Settings {
        #[command(flatten)]
        options: PolicyArgs,
    },

    /// Open the interactive menu
    Interactive,
}

/// Overrides on top of the configured defaults.
#[derive(clap::Args, Debug, Default, Clone)]
pub struct PolicyArgs {
    /// Password length
    #[arg(long, short, value_parser = parse_length)]
    pub length: Option<usize>,

    /// Lower-case letters: must, never or random
    #[arg(long)]
    pub lowercase: Option<ClassPolicy>,

    /// Upper-case letters: must, never or random
    #[arg(long)]
    pub uppercase: Option<ClassPolicy>,

    /// Digits: must, never or random
    #[arg(long)]
    pub digits: Option<ClassPolicy>,

    /// Special characters: must, never or random
    #[arg(long)]
    pub special: Option<ClassPolicy>,

    /// Custom set of special characters replacing the default punctuation
    #[arg(long)]
    pub special_chars: Option<String>,
}

/// Parse a password length within `1..=MAX_LENGTH`.
pub fn parse_length(value: &str) -> Result<usize, String> {
    let length: usize = value
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a whole number", value))?;

    if (1..=MAX_LENGTH).contains(&length) {
        Ok(length)
    } else {
        Err(format!("length must be between 1 and {}", MAX_LENGTH))
    }
}

impl PolicyArgs {
    pub fn apply(&self, base: GenerationConfig) -> GenerationConfig {
        let mut config = base;

        if let Some(length) = self.length {
            config = config.with_length(length);
        }

        let overrides = [
            (CharacterClass::Lowercase, self.lowercase),
            (CharacterClass::Uppercase, self.uppercase),
            (CharacterClass::Digit, self.digits),
            (CharacterClass::Special, self.special),
        ];
        for (class, policy) in overrides {
            if let Some(policy) = policy {
                config = config.with_policy(class, policy);
            }
        }

        if let Some(symbols) = &self.special_chars {
            config = config.with_custom_special(symbols.clone());
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_length_bounds() {
        assert_eq!(parse_length("1"), Ok(1));
        assert_eq!(parse_length(" 4096 "), Ok(MAX_LENGTH));
        assert!(parse_length("0").is_err());
        assert!(parse_length("4097").is_err());
        assert!(parse_length("18446744073709551615").is_err());
        assert!(parse_length("twelve").is_err());
    }

    #[test]
    fn test_apply_keeps_defaults_when_empty() {
        let base = GenerationConfig::default().with_length(14);
        assert_eq!(PolicyArgs::default().apply(base.clone()), base);
    }

    #[test]
    fn test_apply_overrides() {
        let args = PolicyArgs {
            length: Some(6),
            uppercase: Some(ClassPolicy::NeverInclude),
            special_chars: Some("#".to_string()),
            ..PolicyArgs::default()
        };
        let config = args.apply(GenerationConfig::default());

        assert_eq!(config.length, 6);
        assert_eq!(config.uppercase, ClassPolicy::NeverInclude);
        assert_eq!(config.lowercase, ClassPolicy::MustInclude);
        assert_eq!(config.custom_special.as_deref(), Some("#"));
    }
}
