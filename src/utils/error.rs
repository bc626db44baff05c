use thiserror::Error;

#[derive(Error, Debug)]
pub enum MapError {
    #[error("Feed request failed: {0}")]
    FeedError(#[from] reqwest::Error),

    #[error("GeoJSON decoding error: {0}")]
    GeoJsonError(#[from] geojson::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Template rendering error: {0}")]
    TemplateError(#[from] handlebars::RenderError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Decode,
    Processing,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl MapError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            MapError::FeedError(_) => ErrorCategory::Network,
            MapError::GeoJsonError(_) | MapError::SerializationError(_) => ErrorCategory::Decode,
            MapError::ProcessingError { .. } | MapError::ValidationError { .. } => {
                ErrorCategory::Processing
            }
            MapError::ConfigError { .. }
            | MapError::MissingConfigError { .. }
            | MapError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            MapError::TemplateError(_) | MapError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 網路錯誤可重試
            MapError::FeedError(_) => ErrorSeverity::Medium,
            MapError::GeoJsonError(_)
            | MapError::SerializationError(_)
            | MapError::ProcessingError { .. }
            | MapError::ValidationError { .. }
            | MapError::ConfigError { .. }
            | MapError::MissingConfigError { .. }
            | MapError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            MapError::TemplateError(_) | MapError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            MapError::FeedError(_) => {
                "Check network connectivity and the feed URLs, then run again".to_string()
            }
            MapError::GeoJsonError(_) | MapError::SerializationError(_) => {
                "The feed returned data in an unexpected shape; verify the endpoint serves GeoJSON"
                    .to_string()
            }
            MapError::TemplateError(_) => {
                "The bundled map template failed to render; this is a bug, please report it"
                    .to_string()
            }
            MapError::IoError(_) => {
                "Check that the output directory exists and is writable".to_string()
            }
            MapError::ConfigError { .. }
            | MapError::MissingConfigError { .. }
            | MapError::InvalidConfigValueError { .. } => {
                "Review the command line flags or the TOML config file".to_string()
            }
            MapError::ProcessingError { .. } | MapError::ValidationError { .. } => {
                "Inspect the log output for the offending records".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            MapError::FeedError(_) => "Could not reach a data feed".to_string(),
            MapError::GeoJsonError(_) | MapError::SerializationError(_) => {
                "A data feed returned malformed GeoJSON".to_string()
            }
            MapError::TemplateError(_) => "Map page rendering failed".to_string(),
            MapError::IoError(_) => "Could not write the map output".to_string(),
            MapError::ConfigError { message } => format!("Configuration problem: {}", message),
            MapError::MissingConfigError { field } => {
                format!("Configuration is missing '{}'", field)
            }
            MapError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value for '{}' is invalid: {}", field, reason)
            }
            MapError::ProcessingError { message } => format!("Processing failed: {}", message),
            MapError::ValidationError { message } => format!("Validation failed: {}", message),
        }
    }
}

pub type Result<T> = std::result::Result<T, MapError>;
