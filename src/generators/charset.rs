// src/generators/charset.rs
use std::collections::BTreeMap;

use crate::models::CharacterClass;

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
/// ASCII punctuation.
pub const DEFAULT_SPECIAL: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Default symbols for each class.
pub fn default_symbols(class: CharacterClass) -> &'static str {
    match class {
        CharacterClass::Lowercase => LOWERCASE,
        CharacterClass::Uppercase => UPPERCASE,
        CharacterClass::Digit => DIGITS,
        CharacterClass::Special => DEFAULT_SPECIAL,
    }
}

/// Checks a user-supplied special set: no letters or digits, no repeated symbols.
pub fn validate_special(symbols: &str) -> Result<(), String> {
    let reserved: Vec<char> = symbols
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect();
    if !reserved.is_empty() {
        return Err(format!(
            "Special characters should not include English letters or digits (found: {})",
            reserved.into_iter().collect::<String>()
        ));
    }

    let mut counts: BTreeMap<char, usize> = BTreeMap::new();
    for c in symbols.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }

    let duplicates: Vec<String> = counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(symbol, count)| format!("'{}' x{}", symbol, count))
        .collect();
    if !duplicates.is_empty() {
        return Err(format!(
            "Special characters contain duplicated symbols: {}",
            duplicates.join(", ")
        ));
    }

    Ok(())
}
