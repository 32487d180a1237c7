// src/models.rs
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::generators::charset;

/// A named set of symbols a password can draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Digit,
    Special,
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Digit,
        CharacterClass::Special,
    ];

    /// Human-readable plural name, used in messages.
    pub fn label(&self) -> &'static str {
        match self {
            CharacterClass::Lowercase => "lower-case letters",
            CharacterClass::Uppercase => "upper-case letters",
            CharacterClass::Digit => "digits",
            CharacterClass::Special => "special characters",
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-class rule governing inclusion in a generated password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassPolicy {
    /// At least one character of the class.
    MustInclude,
    /// No character of the class.
    NeverInclude,
    /// The class joins the candidate pool; it may show up any number of times, zero included.
    RandomlyDecide,
}

impl ClassPolicy {
    pub fn is_required(&self) -> bool {
        matches!(self, ClassPolicy::MustInclude)
    }

    pub fn is_allowed(&self) -> bool {
        !matches!(self, ClassPolicy::NeverInclude)
    }
}

impl fmt::Display for ClassPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassPolicy::MustInclude => write!(f, "must"),
            ClassPolicy::NeverInclude => write!(f, "never"),
            ClassPolicy::RandomlyDecide => write!(f, "random"),
        }
    }
}

// Binary yes/no selectors map onto the two definite policies.
impl From<bool> for ClassPolicy {
    fn from(include: bool) -> Self {
        if include {
            ClassPolicy::MustInclude
        } else {
            ClassPolicy::NeverInclude
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown policy '{0}': expected must, never or random")]
pub struct ParsePolicyError(pub String);

impl FromStr for ClassPolicy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "must" | "yes" => Ok(ClassPolicy::MustInclude),
            "never" | "no" => Ok(ClassPolicy::NeverInclude),
            "random" => Ok(ClassPolicy::RandomlyDecide),
            _ => Err(ParsePolicyError(s.to_string())),
        }
    }
}

// Password generation options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationConfig {
    pub length: usize,
    pub lowercase: ClassPolicy,
    pub uppercase: ClassPolicy,
    pub digits: ClassPolicy,
    pub special: ClassPolicy,
    /// Replaces the default special set when present. `Some("")` means no special characters at all.
    pub custom_special: Option<String>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            length: 10,
            lowercase: ClassPolicy::MustInclude,
            uppercase: ClassPolicy::MustInclude,
            digits: ClassPolicy::MustInclude,
            special: ClassPolicy::RandomlyDecide,
            custom_special: None,
        }
    }
}

impl GenerationConfig {
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    pub fn with_policy(mut self, class: CharacterClass, policy: ClassPolicy) -> Self {
        match class {
            CharacterClass::Lowercase => self.lowercase = policy,
            CharacterClass::Uppercase => self.uppercase = policy,
            CharacterClass::Digit => self.digits = policy,
            CharacterClass::Special => self.special = policy,
        }
        self
    }

    pub fn with_custom_special(mut self, symbols: impl Into<String>) -> Self {
        self.custom_special = Some(symbols.into());
        self
    }

    pub fn policy(&self, class: CharacterClass) -> ClassPolicy {
        match class {
            CharacterClass::Lowercase => self.lowercase,
            CharacterClass::Uppercase => self.uppercase,
            CharacterClass::Digit => self.digits,
            CharacterClass::Special => self.special,
        }
    }

    /// Symbols a class draws from under this configuration.
    pub fn symbols(&self, class: CharacterClass) -> &str {
        match class {
            CharacterClass::Special => self
                .custom_special
                .as_deref()
                .unwrap_or(charset::DEFAULT_SPECIAL),
            _ => charset::default_symbols(class),
        }
    }

    /// Classes marked `MustInclude`, in `CharacterClass::ALL` order.
    pub fn required_classes(&self) -> Vec<CharacterClass> {
        CharacterClass::ALL
            .into_iter()
            .filter(|class| self.policy(*class).is_required())
            .collect()
    }

    pub fn settings(&self) -> Vec<ClassSettings> {
        CharacterClass::ALL
            .into_iter()
            .map(|class| ClassSettings {
                class,
                name: class.label().to_string(),
                symbols: self.symbols(class).to_string(),
                policy: self.policy(class),
            })
            .collect()
    }
}

/// One row of the settings overview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassSettings {
    pub class: CharacterClass,
    pub name: String,
    pub symbols: String,
    pub policy: ClassPolicy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GeneratedPassword(String);

impl GeneratedPassword {
    pub(crate) fn new(value: String) -> Self {
        GeneratedPassword(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for GeneratedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for GeneratedPassword {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
