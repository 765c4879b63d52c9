use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use whirl::PhysicsConfig;

/// The food categories of the original wheel, one card per slot.
pub const DEFAULT_CATEGORIES: &[&str] = &[
    "🍗 Chicken",
    "🥘 Grilled Meat",
    "🍜 Bunsik",
    "🍱 Lunch Box",
    "🍔 Fast Food",
    "🍛 Japanese",
    "🍝 Western",
    "🍦 Dessert",
    "🍲 Chinese",
    "🌙 Late-Night",
    "🥣 Soup",
    "🍚 Korean",
];

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub physics: PhysicsConfig,
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            physics: PhysicsConfig::default(),
            categories: default_categories(),
        }
    }
}

fn default_categories() -> Vec<String> {
    DEFAULT_CATEGORIES.iter().map(|s| s.to_string()).collect()
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
}

pub fn get_config_path() -> Result<std::path::PathBuf, ConfigError> {
    let proj_dirs =
        ProjectDirs::from("org", "nosh", "nosh").ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

pub fn load_config() -> Result<Settings, ConfigError> {
    let config_path = get_config_path()?;

    let s = config::Config::builder()
        .add_source(config::File::from(config_path).required(false))
        .add_source(config::Environment::with_prefix("NOSH"))
        .build()?;

    Ok(s.try_deserialize()?)
}

pub fn load_or_default() -> Settings {
    match load_config() {
        Ok(settings) => settings,
        Err(e) => {
            log::warn!("Falling back to built-in settings: {}", e);
            Settings::default()
        }
    }
}

pub fn write_default_config() -> std::io::Result<std::path::PathBuf> {
    let path =
        get_config_path().map_err(|e| std::io::Error::new(std::io::ErrorKind::NotFound, e))?;
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(&path, DEFAULT_CONFIG)?;
    }
    Ok(path)
}

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");
