//! Random password generation from per-class policies.
//!
//! Every character class (lower-case, upper-case, digits, special) is set to
//! must-include, never-include or decide-randomly. The generator reserves one
//! character per required class, fills the rest from the candidate pool and
//! shuffles the result.

pub mod cli;
pub mod core;
pub mod generators;
pub mod logging;
pub mod models;
pub mod utils;

pub use generators::{generate_password, GeneratorError, PasswordGenerator};
pub use models::{CharacterClass, ClassPolicy, GeneratedPassword, GenerationConfig};
