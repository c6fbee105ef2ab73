#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Validate(#[from] validator::ValidationErrors),

    #[error("{0}")]
    Configuration(String),

    #[error("{0}")]
    Transport(String),

    #[error("{0}")]
    Store(String),

    #[error("{0}")]
    Unknown(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Short machine-readable label, used as a structured logging field.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Validate(_) => "validation",
            Error::Configuration(_) => "configuration",
            Error::Transport(_) => "transport",
            Error::Store(_) => "store",
            Error::Unknown(_) => "unexpected",
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport(value.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Self::Transport(value.to_string())
    }
}

#[macro_export]
macro_rules! bail {
    (config: $($arg:tt)*) => {
        return Err($crate::Error::Configuration(format!($($arg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configuration() -> Result<()> {
        bail!(config: "Notion {} is not configured", "API key");
    }

    #[test]
    fn bail_config_builds_configuration_error() {
        let err = configuration().unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
        assert_eq!(err.to_string(), "Notion API key is not configured");
        assert_eq!(err.kind(), "configuration");
    }

    #[test]
    fn display_is_the_bare_detail() {
        assert_eq!(
            Error::Store("database not found".into()).to_string(),
            "database not found"
        );
        assert_eq!(Error::Transport("timed out".into()).to_string(), "timed out");
    }
}
