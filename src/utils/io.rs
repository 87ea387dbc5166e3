// src/utils/io.rs
use std::path::PathBuf;

/// Get the application config directory, if the platform has one
pub fn get_app_config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "rustpassgen", "rust_passgen")
        .map(|proj_dirs| proj_dirs.config_dir().to_path_buf())
}

/// Loads `.env` from the working directory, then `passgen.env` from the
/// config directory. Variables already set are never overridden.
///
/// Runs before the logger exists, so problems are returned as warnings.
pub fn load_env_files() -> Vec<String> {
    let mut warnings = Vec::new();

    match dotenvy::dotenv() {
        Ok(_) => {}
        Err(e) if e.not_found() => {}
        Err(e) => warnings.push(format!("Failed to read .env: {}", e)),
    }

    if let Some(path) = get_app_config_dir().map(|dir| dir.join("passgen.env")) {
        if path.exists() {
            if let Err(e) = dotenvy::from_path(&path) {
                warnings.push(format!("Failed to read {}: {}", path.display(), e));
            }
        }
    }

    warnings
}
