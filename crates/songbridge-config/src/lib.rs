mod config;

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::Command;

use songbridge_core::{SongbridgeError, SongbridgeResult};

use crate::config::SongbridgeConfig;

pub use config::{ApiConfig, ConvertConfig, OutputConfig, SongbridgeConfig as SongbridgeConfigData};

/// Fallback conversion service host, overridable per deploy via
/// `SONGBRIDGE_API_URL` or `api.base_url`.
pub const DEFAULT_API_URL: &str = "https://songbridge-backend.onrender.com";

/// How the conversion client reaches the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransportMode {
    #[default]
    Network,
    Mock,
}

impl TransportMode {
    pub fn parse(input: &str) -> SongbridgeResult<Self> {
        match input.trim().to_lowercase().as_str() {
            "network" | "http" => Ok(TransportMode::Network),
            "mock" | "simulated" => Ok(TransportMode::Mock),
            other => Err(SongbridgeError::Config(format!(
                "unknown transport mode: {other} (expected \"network\" or \"mock\")"
            ))),
        }
    }
}

pub fn config_path() -> SongbridgeResult<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| SongbridgeError::Config("home directory not found".to_string()))?;
    Ok(home.join(".songbridge").join("config.toml"))
}

pub fn load_config() -> SongbridgeResult<SongbridgeConfig> {
    let path = config_path()?;
    if !path.exists() {
        return Ok(SongbridgeConfig::default());
    }
    let content = fs::read_to_string(&path)
        .map_err(|err| SongbridgeError::Config(format!("failed to read config: {err}")))?;
    let config = toml::from_str(&content)
        .map_err(|err| SongbridgeError::Config(format!("failed to parse config: {err}")))?;
    Ok(config)
}

pub fn save_config(config: &SongbridgeConfig) -> SongbridgeResult<()> {
    let path = config_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|err| SongbridgeError::Config(format!("failed to create config dir: {err}")))?;
    }
    let content = toml::to_string_pretty(config)
        .map_err(|err| SongbridgeError::Config(format!("failed to serialize config: {err}")))?;
    fs::write(&path, content)
        .map_err(|err| SongbridgeError::Config(format!("failed to write config: {err}")))?;
    Ok(())
}

pub fn config_exists() -> SongbridgeResult<bool> {
    let path = config_path()?;
    Ok(path.exists())
}

/// Precedence: `SONGBRIDGE_API_URL` > `api.base_url` > built-in default.
pub fn resolve_base_url(config: &SongbridgeConfig) -> String {
    if let Ok(value) = env::var("SONGBRIDGE_API_URL")
        && !value.trim().is_empty()
    {
        return value;
    }
    config
        .api
        .base_url
        .clone()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
}

/// Precedence: `SONGBRIDGE_TRANSPORT` > `convert.transport` > network.
///
/// The mock transport is never selected implicitly; an unrecognized mode
/// string is a configuration error rather than a fallback.
pub fn resolve_transport_mode(config: &SongbridgeConfig) -> SongbridgeResult<TransportMode> {
    if let Ok(value) = env::var("SONGBRIDGE_TRANSPORT")
        && !value.trim().is_empty()
    {
        return TransportMode::parse(&value);
    }
    match &config.convert.transport {
        Some(value) if !value.trim().is_empty() => TransportMode::parse(value),
        _ => Ok(TransportMode::Network),
    }
}

pub fn resolve_simple_output(config: &SongbridgeConfig) -> Option<bool> {
    if let Ok(value) = env::var("SONGBRIDGE_OUTPUT_SIMPLE") {
        let normalized = value.to_lowercase();
        return Some(normalized == "1" || normalized == "true" || normalized == "yes");
    }
    config.output.simple
}

pub fn set_config_value(key_path: &str, value: &str) -> SongbridgeResult<()> {
    let path = config_path()?;
    let content = if path.exists() {
        fs::read_to_string(&path)
            .map_err(|err| SongbridgeError::Config(format!("failed to read config: {err}")))?
    } else {
        String::new()
    };

    let mut doc = content
        .parse::<toml_edit::DocumentMut>()
        .unwrap_or_default();

    let parts: Vec<&str> = key_path.split('.').collect();
    if parts.len() < 2 {
        return Err(SongbridgeError::Config(
            "key path must have at least 2 parts (e.g., 'api.base_url')".to_string(),
        ));
    }

    let table = doc.as_table_mut();
    let mut current = table;
    for part in &parts[..parts.len() - 1] {
        current = current
            .entry(part)
            .or_insert(toml_edit::Item::Table(Default::default()))
            .as_table_mut()
            .ok_or_else(|| {
                SongbridgeError::Config(format!("cannot set nested value in '{}'", key_path))
            })?;
    }

    let last_part = parts.last().unwrap();
    current[last_part] = toml_edit::value(value);

    let content = doc.to_string();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|err| SongbridgeError::Config(format!("failed to create config dir: {err}")))?;
    }
    fs::write(&path, content)
        .map_err(|err| SongbridgeError::Config(format!("failed to write config: {err}")))?;

    Ok(())
}

pub fn open_in_editor() -> SongbridgeResult<()> {
    let path = config_path()?;
    if !path.exists() {
        save_config(&SongbridgeConfig::default())?;
    }

    let editor = env::var("EDITOR").unwrap_or_else(|_| {
        if cfg!(target_os = "macos") {
            "vim".to_string()
        } else if cfg!(target_os = "windows") {
            "notepad".to_string()
        } else {
            "nano".to_string()
        }
    });

    let status = Command::new(&editor)
        .arg(&path)
        .status()
        .map_err(|err| {
            SongbridgeError::Config(format!("failed to open editor '{}': {}", editor, err))
        })?;

    if !status.success() {
        return Err(SongbridgeError::Config(format!(
            "editor exited with status: {}",
            status
        )));
    }

    Ok(())
}
