//! JSON files under `~/.hexquest/`.

use std::fs;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("could not determine home directory")]
    NoHomeDir,
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
}

/// `~/.hexquest/`, created on first use.
pub fn data_dir() -> Result<PathBuf, PersistenceError> {
    let dir = dirs::home_dir()
        .ok_or(PersistenceError::NoHomeDir)?
        .join(".hexquest");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

pub fn data_path(filename: &str) -> Result<PathBuf, PersistenceError> {
    Ok(data_dir()?.join(filename))
}

/// Load a JSON file, returning `T::default()` if missing or invalid.
pub fn load_json_or_default<T: Default + serde::de::DeserializeOwned>(filename: &str) -> T {
    let Ok(path) = data_path(filename) else {
        return T::default();
    };
    match fs::read_to_string(&path) {
        Ok(json) => serde_json::from_str(&json).unwrap_or_else(|e| {
            log::warn!("ignoring corrupt {}: {}", path.display(), e);
            T::default()
        }),
        Err(_) => T::default(),
    }
}

pub fn save_json<T: serde::Serialize>(filename: &str, data: &T) -> Result<(), PersistenceError> {
    let path = data_path(filename)?;
    let json = serde_json::to_string_pretty(data)?;
    fs::write(&path, json)?;
    log::debug!("saved {}", path.display());
    Ok(())
}

/// Read a small text asset, `None` if missing or blank.
pub fn read_asset(relative: &str) -> Option<String> {
    let path = data_path(relative).ok()?;
    let text = fs::read_to_string(path).ok()?;
    let trimmed = text.trim_end();
    (!trimmed.trim().is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_path_format() {
        let path = data_path("test.json").expect("data_path should succeed");
        assert!(path.to_string_lossy().ends_with(".hexquest/test.json"));
    }

    #[test]
    fn test_load_missing_returns_default() {
        let val: Vec<String> = load_json_or_default("nonexistent_hexquest_file_12345.json");
        assert!(val.is_empty());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let data = vec!["north".to_string(), "south".to_string()];
        save_json("persistence_test.json", &data).expect("save should succeed");

        let loaded: Vec<String> = load_json_or_default("persistence_test.json");
        assert_eq!(loaded, data);

        let _ = fs::remove_file(data_path("persistence_test.json").unwrap());
    }

    #[test]
    fn test_missing_asset_is_none() {
        assert!(read_asset("sprites/definitely_missing_sprite.txt").is_none());
    }
}
