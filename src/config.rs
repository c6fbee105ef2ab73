use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use dit_notion::NotionConfig;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub notion: NotionConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
    #[serde(default)]
    pub site: SiteConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Company details printed on the landing page.
#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    #[serde(default = "default_site_name")]
    pub name: String,
    #[serde(default = "default_site_phone")]
    pub phone: String,
    #[serde(default = "default_site_email")]
    pub email: String,
    #[serde(default = "default_site_address")]
    pub address: String,
    #[serde(default = "default_site_homepage")]
    pub homepage: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: default_site_name(),
            phone: default_site_phone(),
            email: default_site_email(),
            address: default_site_address(),
            homepage: default_site_homepage(),
        }
    }
}

fn default_site_name() -> String {
    "DIT".to_string()
}

fn default_site_phone() -> String {
    "1000-8373".to_string()
}

fn default_site_email() -> String {
    "dit@dit.co".to_string()
}

fn default_site_address() -> String {
    "서울시 강남구 테헤란로 123".to_string()
}

fn default_site_homepage() -> String {
    "www.dittest.com".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. NOTION_API_KEY / NOTION_DATABASE_ID
    /// 2. Environment variables (DIT__SERVER__PORT, DIT__NOTION__API_KEY, etc.)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("DIT")
                .separator("__")
                .try_parsing(true),
        );

        if let Ok(api_key) = env::var("NOTION_API_KEY") {
            builder = builder.set_override("notion.api_key", api_key)?;
        }
        if let Ok(database_id) = env::var("NOTION_DATABASE_ID") {
            builder = builder.set_override("notion.database_id", database_id)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    ///
    /// Missing Notion credentials are not rejected here: the site still
    /// serves, and each submission reports the configuration error.
    pub fn validate(&self) -> Result<(), String> {
        if self.server.host.is_empty() {
            return Err("Server host must not be empty".to_string());
        }
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.notion.timeout_secs == 0 {
            return Err("Notion timeout_secs must be at least 1".to_string());
        }
        Ok(())
    }
}
