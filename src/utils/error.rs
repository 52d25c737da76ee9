use thiserror::Error;

#[derive(Error, Debug)]
pub enum RadiationError {
    #[error("Domain error: {quantity} = {value} ({reason})")]
    DomainError {
        quantity: String,
        value: f64,
        reason: String,
    },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Plot rendering failed: {message}")]
    PlotError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Numerical,
    Configuration,
    Rendering,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl RadiationError {
    pub fn domain(quantity: &str, value: f64, reason: &str) -> Self {
        RadiationError::DomainError {
            quantity: quantity.to_string(),
            value,
            reason: reason.to_string(),
        }
    }

    pub fn plot<E: std::fmt::Display>(err: E) -> Self {
        RadiationError::PlotError {
            message: err.to_string(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            RadiationError::DomainError { .. } => ErrorCategory::Numerical,
            RadiationError::InvalidConfigValueError { .. }
            | RadiationError::MissingConfigError { .. }
            | RadiationError::ConfigValidationError { .. } => ErrorCategory::Configuration,
            RadiationError::PlotError { .. } => ErrorCategory::Rendering,
            RadiationError::IoError(_) | RadiationError::SerializationError(_) => {
                ErrorCategory::System
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Numerical | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Rendering => ErrorSeverity::Medium,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 依嚴重程度決定程序退出碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium | ErrorSeverity::Critical => 3,
            ErrorSeverity::High => 1,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            RadiationError::DomainError { quantity, .. } => {
                format!("Use a strictly positive, finite value for {}", quantity)
            }
            RadiationError::InvalidConfigValueError { field, .. } => {
                format!("Check the value of '{}' and run again", field)
            }
            RadiationError::MissingConfigError { field } => {
                format!("Add '{}' to the configuration", field)
            }
            RadiationError::ConfigValidationError { .. } => {
                "Make sure the configuration file is valid TOML".to_string()
            }
            RadiationError::PlotError { .. } => {
                "Use a .svg plot output or pass --no-plot".to_string()
            }
            RadiationError::IoError(_) => {
                "Check that the output directory exists and is writable".to_string()
            }
            RadiationError::SerializationError(_) => "Try --format text".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Numerical => format!("Computation rejected its input: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::Rendering => format!("Could not draw the spectrum plot: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, RadiationError>;
