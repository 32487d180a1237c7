// src/generators/mod.rs
pub mod charset;
mod password;

pub use password::{
    generate_password, validate, verify, GeneratorError, PasswordGenerator, Result,
    MAX_LENGTH,
};
