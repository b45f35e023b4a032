use serde::{Deserialize, Serialize};

const DEFAULT_CONFIG_FILE: &str = "tictactoe_server_config.yaml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_address: String,
    pub static_files_path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:5000".to_string(),
            static_files_path: "server/static".to_string(),
        }
    }
}

impl ServerConfig {
    pub fn load(path: Option<&str>) -> Result<Self, String> {
        let file = path.unwrap_or(DEFAULT_CONFIG_FILE);

        let content = match std::fs::read_to_string(file) {
            Ok(content) => content,
            // A missing default config is fine; an explicitly given one is not.
            Err(_) if path.is_none() => {
                let config = Self::default();
                config.validate()?;
                return Ok(config);
            }
            Err(e) => return Err(format!("Failed to read config file '{}': {}", file, e)),
        };

        let config: Self = serde_yaml_ng::from_str(&content)
            .map_err(|e| format!("Failed to parse config file '{}': {}", file, e))?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.bind_address.is_empty() {
            return Err("bind_address must not be empty".to_string());
        }
        if self.static_files_path.is_empty() {
            return Err("static_files_path must not be empty".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ServerConfig::default();

        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_default_file_falls_back_to_defaults() {
        let config = ServerConfig::load(None).unwrap();

        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let result = ServerConfig::load(Some("does_not_exist.yaml"));

        assert!(result.is_err());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults_for_missing_fields() {
        let config: ServerConfig =
            serde_yaml_ng::from_str("bind_address: \"127.0.0.1:8080\"").unwrap();

        assert_eq!(config.bind_address, "127.0.0.1:8080");
        assert_eq!(config.static_files_path, ServerConfig::default().static_files_path);
    }

    #[test]
    fn test_empty_bind_address_is_rejected() {
        let config = ServerConfig {
            bind_address: String::new(),
            ..ServerConfig::default()
        };

        assert!(config.validate().is_err());
    }
}
