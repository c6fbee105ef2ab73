use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "https://api.notion.com";
pub const DEFAULT_VERSION: &str = "2022-06-28";

#[derive(Deserialize, Clone)]
pub struct NotionConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub database_id: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for NotionConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            database_id: String::new(),
            base_url: default_base_url(),
            version: default_version(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_version() -> String {
    DEFAULT_VERSION.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl NotionConfig {
    /// Fails when the credential or the database id is missing.
    pub fn check(&self) -> dit_shared::Result<()> {
        if self.api_key.is_empty() {
            dit_shared::bail!(config: "Notion API key is not configured");
        }

        if self.database_id.is_empty() {
            dit_shared::bail!(config: "Notion database ID is not configured");
        }

        Ok(())
    }

    /// First characters of the API key, safe to log.
    pub fn api_key_preview(&self) -> String {
        let preview: String = self.api_key.chars().take(8).collect();
        format!("{preview}...")
    }
}

impl std::fmt::Debug for NotionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotionConfig")
            .field("api_key", &self.api_key_preview())
            .field("database_id", &self.database_id)
            .field("base_url", &self.base_url)
            .field("version", &self.version)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured() -> NotionConfig {
        NotionConfig {
            api_key: "secret_abcdefghijklmnop".to_string(),
            database_id: "0123456789abcdef".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_check_missing_api_key() {
        let config = NotionConfig {
            api_key: String::new(),
            ..configured()
        };

        let err = config.check().unwrap_err();
        assert!(matches!(err, dit_shared::Error::Configuration(_)));
        assert_eq!(err.to_string(), "Notion API key is not configured");
    }

    #[test]
    fn test_check_missing_database_id() {
        let config = NotionConfig {
            database_id: String::new(),
            ..configured()
        };

        let err = config.check().unwrap_err();
        assert_eq!(err.to_string(), "Notion database ID is not configured");
    }

    #[test]
    fn test_check_configured() {
        assert!(configured().check().is_ok());
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let debug = format!("{:?}", configured());
        assert!(debug.contains("secret_a..."));
        assert!(!debug.contains("secret_abcdefghijklmnop"));
    }
}
