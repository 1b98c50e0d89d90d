use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Top-level project configuration loaded from `.c2o.yaml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct C2oConfig {
    pub input: String,
    pub output: String,
    pub format: OutputFormat,
}

impl Default for C2oConfig {
    fn default() -> Self {
        Self {
            input: "collection.json".to_string(),
            output: "openapi.yaml".to_string(),
            format: OutputFormat::Yaml,
        }
    }
}

/// Serialization format for the converted document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".c2o.yaml";

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<C2oConfig>, String> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)
        .map_err(|e| format!("failed to read config {}: {}", path.display(), e))?;
    let config: C2oConfig = serde_yaml_ng::from_str(&content)
        .map_err(|e| format!("failed to parse config {}: {}", path.display(), e))?;
    Ok(Some(config))
}

/// Generate the default config file content.
pub fn default_config_content() -> &'static str {
    r#"# c2o configuration — https://github.com/c2o-dev/collection2openapi
input: collection.json
output: openapi.yaml
format: yaml          # yaml | json
"#
}
