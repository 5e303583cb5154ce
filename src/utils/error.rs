use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeskError {
    #[error("Required fields are blank: {}", fields.join(", "))]
    MissingFields { fields: Vec<&'static str> },

    #[error("Donation amount '{input}' is not a valid number")]
    InvalidAmount { input: String },

    #[error("Unknown command: {command}")]
    UnknownCommand { command: String },

    #[error("Unknown output format: {format}")]
    UnknownFormat { format: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV rendering error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Output,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl DeskError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DeskError::MissingFields { .. }
            | DeskError::InvalidAmount { .. }
            | DeskError::UnknownCommand { .. }
            | DeskError::UnknownFormat { .. } => ErrorCategory::Input,
            DeskError::ConfigError { .. }
            | DeskError::ConfigValidationError { .. }
            | DeskError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            DeskError::SerializationError(_) | DeskError::CsvError(_) => ErrorCategory::Output,
            DeskError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Output => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Input errors are reported to the user and the session carries on.
    pub fn is_recoverable(&self) -> bool {
        self.category() == ErrorCategory::Input
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DeskError::MissingFields { .. } => "Please fill in all fields.".to_string(),
            DeskError::InvalidAmount { .. } => {
                "Invalid amount format. Please enter a valid number.".to_string()
            }
            DeskError::UnknownCommand { command } => format!("Unknown command: {}", command),
            DeskError::UnknownFormat { format } => format!("Unknown output format: {}", format),
            DeskError::IoError(e) => format!("Could not read or write the console: {}", e),
            DeskError::SerializationError(_) | DeskError::CsvError(_) => {
                "The requested view could not be rendered.".to_string()
            }
            DeskError::ConfigError { message } => format!("Configuration problem: {}", message),
            DeskError::ConfigValidationError { field, message } => {
                format!("Configuration field '{}' is invalid: {}", field, message)
            }
            DeskError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DeskError::MissingFields { .. } => "Enter a cause, your name and an amount",
            DeskError::InvalidAmount { .. } => "Use a plain number such as 250 or 99.50",
            DeskError::UnknownCommand { .. } => "Type 'help' to list the available commands",
            DeskError::UnknownFormat { .. } => "Choose one of: text, json, csv",
            DeskError::IoError(_) => "Check that standard input and output are available",
            DeskError::SerializationError(_) | DeskError::CsvError(_) => {
                "Switch to the text format with 'format text'"
            }
            DeskError::ConfigError { .. } | DeskError::ConfigValidationError { .. } => {
                "Check that the configuration file exists and is valid TOML"
            }
            DeskError::InvalidConfigValueError { .. } => {
                "Fix the configuration value or remove it to use the default"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, DeskError>;
