// src/utils/io.rs
use std::path::PathBuf;

/// Get the application config directory, if the platform has one
pub fn get_app_config_dir() -> Option<PathBuf> {
    match directories::ProjectDirs::from("com", "rustpassgen", "rust_passgen") {
        Some(proj_dirs) => Some(proj_dirs.config_dir().to_path_buf()),
        None => {
            log::debug!("Could not determine config directory");
            None
        }
    }
}

/// Path of the optional per-user environment file
pub fn get_user_env_file() -> Option<PathBuf> {
    get_app_config_dir().map(|dir| dir.join("rust_passgen.env"))
}
