use std::path::Path;

use color_eyre::Result;

use super::{DashboardConfig, CONFIG_FILE_NAME};

impl DashboardConfig {
    /// Parse and validate a YAML document. Missing keys take their defaults.
    pub fn from_yaml(config_yaml: &str) -> Result<Self> {
        let config: DashboardConfig = serde_yaml::from_str(config_yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Read `path` if it exists, otherwise fall back to the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    pub fn load_default() -> Result<Self> {
        Self::load(CONFIG_FILE_NAME)
    }
}
