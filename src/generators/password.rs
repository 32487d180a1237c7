// src/generators/password.rs
use rand::distributions::{Distribution, Uniform};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use thiserror::Error;

use crate::generators::charset;
use crate::models::{CharacterClass, GeneratedPassword, GenerationConfig};
use crate::utils::join_words;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Generated password violates its policy: {0}")]
    PolicyViolation(String),
}

pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Longest password `generate` accepts.
pub const MAX_LENGTH: usize = 4096;

/// Random password generator over any `Rng`.
///
/// Required classes each get one reserved character, the rest is filled from
/// the candidate pool, and the result is shuffled. No retry loop is involved,
/// so generation either fails validation up front or succeeds.
pub struct PasswordGenerator<R = ChaCha20Rng> {
    rng: R,
    verify_output: bool,
}

impl PasswordGenerator<ChaCha20Rng> {
    pub fn new() -> Self {
        Self::from_rng(ChaCha20Rng::from_entropy())
    }

    /// Deterministic generator: same seed and config give the same password.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(ChaCha20Rng::seed_from_u64(seed))
    }
}

impl Default for PasswordGenerator<ChaCha20Rng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> PasswordGenerator<R> {
    pub fn from_rng(rng: R) -> Self {
        PasswordGenerator {
            rng,
            verify_output: true,
        }
    }

    /// Toggle the post-generation policy check (on by default).
    pub fn verify_output(mut self, enabled: bool) -> Self {
        self.verify_output = enabled;
        self
    }

    pub fn generate(&mut self, config: &GenerationConfig) -> Result<GeneratedPassword> {
        validate(config)?;

        log::debug!(
            "Generating password: length={}, lowercase={}, uppercase={}, digits={}, special={}",
            config.length,
            config.lowercase,
            config.uppercase,
            config.digits,
            config.special
        );

        let pool = candidate_pool(config);
        let mut password: Vec<char> = Vec::with_capacity(config.length);

        // One reserved character per required class
        for class in config.required_classes() {
            let symbols: Vec<char> = config.symbols(class).chars().collect();
            let dist = Uniform::from(0..symbols.len());
            password.push(symbols[dist.sample(&mut self.rng)]);
        }

        let dist = Uniform::from(0..pool.len());
        while password.len() < config.length {
            password.push(pool[dist.sample(&mut self.rng)]);
        }

        password.shuffle(&mut self.rng);

        let password = GeneratedPassword::new(password.into_iter().collect());

        if self.verify_output {
            verify(config, password.as_str())?;
        }

        Ok(password)
    }
}

/// Generate a single password with a freshly seeded generator.
pub fn generate_password(config: &GenerationConfig) -> Result<GeneratedPassword> {
    PasswordGenerator::new().generate(config)
}

/// Reject configurations no password can satisfy.
pub fn validate(config: &GenerationConfig) -> Result<()> {
    if config.length < 1 {
        return Err(GeneratorError::InvalidConfig(format!(
            "Password length should be positive instead of {}",
            config.length
        )));
    }

    if config.length > MAX_LENGTH {
        return Err(GeneratorError::InvalidConfig(format!(
            "Password length should be at most {} instead of {}",
            MAX_LENGTH, config.length
        )));
    }

    if let Some(custom) = &config.custom_special {
        charset::validate_special(custom).map_err(GeneratorError::InvalidConfig)?;
    }

    if config.special.is_required() && config.symbols(CharacterClass::Special).is_empty() {
        return Err(GeneratorError::InvalidConfig(
            "Special characters must be included in the password, but no special \
             character is defined. Provide special characters or stop requiring them"
                .to_string(),
        ));
    }

    let required = config.required_classes();
    if config.length < required.len() {
        let names: Vec<&str> = required.iter().map(|class| class.label()).collect();
        return Err(GeneratorError::InvalidConfig(format!(
            "There are {} types of symbols ({}) that must be included in the password, \
             but the length is only {}",
            required.len(),
            join_words(&names),
            config.length
        )));
    }

    if CharacterClass::ALL
        .iter()
        .all(|class| !config.policy(*class).is_allowed())
    {
        return Err(GeneratorError::InvalidConfig(
            "Every character class is excluded. Allow at least one class".to_string(),
        ));
    }

    if candidate_pool(config).is_empty() {
        return Err(GeneratorError::InvalidConfig(
            "No candidate characters are available for the password".to_string(),
        ));
    }

    Ok(())
}

/// Check an existing password against the configuration's policies.
pub fn verify(config: &GenerationConfig, password: &str) -> Result<()> {
    let length = password.chars().count();
    if length != config.length {
        return Err(GeneratorError::PolicyViolation(format!(
            "length is {} instead of {}",
            length, config.length
        )));
    }

    for class in CharacterClass::ALL {
        let symbols = config.symbols(class);
        let present = password.chars().any(|c| symbols.contains(c));
        let policy = config.policy(class);

        if policy.is_required() && !present {
            return Err(GeneratorError::PolicyViolation(format!(
                "missing required {}",
                class
            )));
        }
        if !policy.is_allowed() && present {
            return Err(GeneratorError::PolicyViolation(format!(
                "contains excluded {}",
                class
            )));
        }
    }

    Ok(())
}

// Union of all classes that are not excluded; empty sets contribute nothing.
fn candidate_pool(config: &GenerationConfig) -> Vec<char> {
    CharacterClass::ALL
        .into_iter()
        .filter(|class| config.policy(*class).is_allowed())
        .flat_map(|class| config.symbols(class).chars())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ClassPolicy;

    fn letters_only(length: usize) -> GenerationConfig {
        GenerationConfig::default()
            .with_length(length)
            .with_policy(CharacterClass::Digit, ClassPolicy::NeverInclude)
            .with_policy(CharacterClass::Special, ClassPolicy::NeverInclude)
    }

    #[test]
    fn test_letters_only_password() {
        let mut generator = PasswordGenerator::with_seed(7);
        let config = letters_only(8);

        for _ in 0..50 {
            let password = generator.generate(&config).unwrap();
            assert_eq!(password.len(), 8);
            assert!(password.as_str().chars().all(|c| c.is_ascii_alphabetic()));
            assert!(password.as_str().chars().any(|c| c.is_ascii_uppercase()));
            assert!(password.as_str().chars().any(|c| c.is_ascii_lowercase()));
        }
    }

    #[test]
    fn test_same_seed_same_password() {
        let config = GenerationConfig::default().with_length(24);
        let first = PasswordGenerator::with_seed(42).generate(&config).unwrap();
        let second = PasswordGenerator::with_seed(42).generate(&config).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_length_equal_to_required_classes() {
        let config = GenerationConfig::default()
            .with_length(3)
            .with_policy(CharacterClass::Special, ClassPolicy::NeverInclude);
        let password = PasswordGenerator::with_seed(1).generate(&config).unwrap();

        assert_eq!(password.len(), 3);
        assert!(password.as_str().chars().any(|c| c.is_ascii_lowercase()));
        assert!(password.as_str().chars().any(|c| c.is_ascii_uppercase()));
        assert!(password.as_str().chars().any(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_length_shorter_than_required_classes() {
        let config = GenerationConfig::default().with_length(2);
        let err = validate(&config).unwrap_err();

        match err {
            GeneratorError::InvalidConfig(message) => {
                assert!(message.contains("lower-case letters, upper-case letters and digits"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_zero_length_rejected() {
        let config = GenerationConfig::default().with_length(0);
        assert!(matches!(validate(&config), Err(GeneratorError::InvalidConfig(_))));
    }

    #[test]
    fn test_length_above_maximum_rejected() {
        assert!(validate(&GenerationConfig::default().with_length(MAX_LENGTH)).is_ok());

        for length in [MAX_LENGTH + 1, usize::MAX] {
            let config = GenerationConfig::default().with_length(length);
            assert!(matches!(
                PasswordGenerator::with_seed(1).generate(&config),
                Err(GeneratorError::InvalidConfig(_))
            ));
        }
    }

    #[test]
    fn test_required_characters_are_shuffled() {
        let config = GenerationConfig::default()
            .with_length(3)
            .with_policy(CharacterClass::Special, ClassPolicy::NeverInclude);
        let mut generator = PasswordGenerator::with_seed(17);

        let mut leading = std::collections::HashSet::new();
        for _ in 0..200 {
            let password = generator.generate(&config).unwrap();
            let first = password.as_str().chars().next().unwrap();
            let class = CharacterClass::ALL
                .into_iter()
                .find(|class| config.symbols(*class).contains(first))
                .unwrap();
            leading.insert(class);
        }

        assert!(leading.len() > 1, "first position always {:?}", leading);
    }

    #[test]
    fn test_all_classes_excluded() {
        let mut config = GenerationConfig::default();
        for class in CharacterClass::ALL {
            config = config.with_policy(class, ClassPolicy::NeverInclude);
        }
        assert!(matches!(validate(&config), Err(GeneratorError::InvalidConfig(_))));
    }

    #[test]
    fn test_required_special_with_empty_custom_set() {
        let config = GenerationConfig::default()
            .with_policy(CharacterClass::Special, ClassPolicy::MustInclude)
            .with_custom_special("");
        assert!(matches!(validate(&config), Err(GeneratorError::InvalidConfig(_))));
    }

    #[test]
    fn test_random_special_with_empty_custom_set_is_skipped() {
        let config = letters_only(12)
            .with_policy(CharacterClass::Special, ClassPolicy::RandomlyDecide)
            .with_custom_special("");
        let password = PasswordGenerator::with_seed(3).generate(&config).unwrap();
        assert!(password.as_str().chars().all(|c| c.is_ascii_alphabetic()));
    }

    #[test]
    fn test_empty_pool_rejected() {
        let config = GenerationConfig::default()
            .with_policy(CharacterClass::Lowercase, ClassPolicy::NeverInclude)
            .with_policy(CharacterClass::Uppercase, ClassPolicy::NeverInclude)
            .with_policy(CharacterClass::Digit, ClassPolicy::NeverInclude)
            .with_custom_special("");
        assert!(matches!(validate(&config), Err(GeneratorError::InvalidConfig(_))));
    }

    #[test]
    fn test_custom_special_characters_used() {
        let config = GenerationConfig::default()
            .with_length(16)
            .with_policy(CharacterClass::Special, ClassPolicy::MustInclude)
            .with_custom_special("#€");
        let mut generator = PasswordGenerator::with_seed(11);

        for _ in 0..20 {
            let password = generator.generate(&config).unwrap();
            assert_eq!(password.len(), 16);
            assert!(password.as_str().chars().any(|c| c == '#' || c == '€'));
            assert!(password
                .as_str()
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '#' || c == '€'));
        }
    }

    #[test]
    fn test_custom_special_rejects_letters() {
        let config = GenerationConfig::default().with_custom_special("!a");
        assert!(matches!(validate(&config), Err(GeneratorError::InvalidConfig(_))));
    }

    #[test]
    fn test_verify_reports_violations() {
        let config = letters_only(4);

        assert!(verify(&config, "abCD").is_ok());
        assert!(matches!(
            verify(&config, "abc"),
            Err(GeneratorError::PolicyViolation(_))
        ));
        assert_eq!(
            verify(&config, "abcd"),
            Err(GeneratorError::PolicyViolation(
                "missing required upper-case letters".to_string()
            ))
        );
        assert_eq!(
            verify(&config, "aB1d"),
            Err(GeneratorError::PolicyViolation(
                "contains excluded digits".to_string()
            ))
        );
    }

    #[test]
    fn test_single_required_class_fills_everything() {
        let config = GenerationConfig::default()
            .with_length(20)
            .with_policy(CharacterClass::Lowercase, ClassPolicy::NeverInclude)
            .with_policy(CharacterClass::Uppercase, ClassPolicy::NeverInclude)
            .with_policy(CharacterClass::Special, ClassPolicy::NeverInclude);
        let password = PasswordGenerator::with_seed(5).generate(&config).unwrap();
        assert!(password.as_str().chars().all(|c| c.is_ascii_digit()));
    }
}
