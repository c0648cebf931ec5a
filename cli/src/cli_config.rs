use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tictactoe_common::config::{
    ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer,
};
use tictactoe_common::logger::LogLevel;
use tictactoe_common::tictactoe::GameMode;

const CONFIG_FILE_NAME: &str = "tictactoe_config.yaml";

pub fn default_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(
    path: &Path,
) -> ConfigManager<FileContentConfigProvider, CliConfig, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path)
}

/// Overwrites `path` with defaults without reading what is there, so a
/// corrupt file can be replaced.
pub fn write_default_config(
    manager: &ConfigManager<FileContentConfigProvider, CliConfig, YamlConfigSerializer>,
    path: &Path,
    force: bool,
) -> Result<(), String> {
    if path.exists() && !force {
        return Err(format!(
            "Config file {} already exists, pass --force to overwrite",
            path.display()
        ));
    }
    manager.set_config(&CliConfig::default())
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct CliConfig {
    pub mode: GameMode,
    pub log_level: LogLevel,
    #[serde(default)]
    pub log_prefix: Option<String>,
    #[serde(default)]
    pub show_scores: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<(), String> {
        if let Some(prefix) = &self.log_prefix
            && prefix.trim().is_empty()
        {
            return Err("log_prefix must not be blank when set".to_string());
        }
        Ok(())
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::SinglePlayer,
            log_level: LogLevel::Info,
            log_prefix: None,
            show_scores: false,
        }
    }
}
