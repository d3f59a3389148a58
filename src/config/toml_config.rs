use crate::config::{OutputFormat, Settings, OUTPUT_FORMATS};
use crate::utils::error::{MathError, Result};
use crate::utils::validation::{validate_one_of, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub random: Option<RandomConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RandomConfig {
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| MathError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn seed(&self) -> Option<u64> {
        self.random.as_ref().and_then(|r| r.seed)
    }

    pub fn output_format(&self) -> OutputFormat {
        match self.output.as_ref().and_then(|o| o.format.as_deref()) {
            Some("json") => OutputFormat::Json,
            _ => OutputFormat::Text,
        }
    }

    pub fn to_settings(&self) -> Settings {
        Settings {
            seed: self.seed(),
            format: self.output_format(),
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(format) = self.output.as_ref().and_then(|o| o.format.as_deref()) {
            validate_one_of("output.format", format, &OUTPUT_FORMATS)?;
        }
        Ok(())
    }
}
