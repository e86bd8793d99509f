use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::games::puzzle2048::Puzzle2048Settings;
use serde::{Deserialize, Serialize};

use super::WindowConfig;

const CONFIG_FILE_NAME: &str = "tiles2048_config.yaml";

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager() -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>
{
    ConfigManager::from_yaml_file(&get_config_path())
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    pub puzzle: Puzzle2048Settings,
    #[serde(default)]
    pub window: WindowConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.puzzle.validate()?;
        self.window.validate()?;
        Ok(())
    }
}
