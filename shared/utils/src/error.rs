use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum RoutingError {
    #[error("Upload error: {message}")]
    Upload { message: String },

    #[error("Required sheet not found: {sheet}")]
    MissingSheet { sheet: String },

    #[error("Workbook error: {message}")]
    Workbook { message: String },

    #[error("Export error: {message}")]
    Export { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Internal server error: {message}")]
    Internal { message: String },
}

impl RoutingError {
    pub fn upload(message: impl Into<String>) -> Self {
        Self::Upload {
            message: message.into(),
        }
    }

    pub fn missing_sheet(sheet: impl Into<String>) -> Self {
        Self::MissingSheet {
            sheet: sheet.into(),
        }
    }

    pub fn workbook(message: impl Into<String>) -> Self {
        Self::Workbook {
            message: message.into(),
        }
    }

    pub fn export(message: impl Into<String>) -> Self {
        Self::Export {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Upload { .. } => "UPLOAD_ERROR",
            Self::MissingSheet { .. } => "MISSING_SHEET",
            Self::Workbook { .. } => "WORKBOOK_ERROR",
            Self::Export { .. } => "EXPORT_ERROR",
            Self::Configuration { .. } => "CONFIGURATION_ERROR",
            Self::Internal { .. } => "INTERNAL_SERVER_ERROR",
        }
    }

    pub fn http_status_code(&self) -> u16 {
        match self {
            Self::Upload { .. } => 400,
            Self::MissingSheet { .. } => 400,
            Self::Workbook { .. } => 422,
            Self::Export { .. } => 500,
            Self::Configuration { .. } => 500,
            Self::Internal { .. } => 500,
        }
    }
}

pub type RoutingResult<T> = Result<T, RoutingError>;

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    pub message: String,
}

impl From<RoutingError> for ErrorResponse {
    fn from(error: RoutingError) -> Self {
        Self {
            error: error.to_string(),
            code: error.error_code().to_string(),
            message: error.to_string(),
        }
    }
}

// Conversion from collaborator error types
impl From<calamine::XlsxError> for RoutingError {
    fn from(error: calamine::XlsxError) -> Self {
        Self::workbook(error.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for RoutingError {
    fn from(error: rust_xlsxwriter::XlsxError) -> Self {
        Self::export(error.to_string())
    }
}

impl From<std::io::Error> for RoutingError {
    fn from(error: std::io::Error) -> Self {
        Self::internal(error.to_string())
    }
}
