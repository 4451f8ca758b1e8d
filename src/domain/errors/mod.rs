// Domain errors - Validation taxonomy shared by every builder

use std::fmt;

/// Closed set of validation failure kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// A required field was absent or blank
    MissingRequiredValue,
    /// A numeric field fell outside its allowed range
    OutOfRangeValue,
    /// A field or combination of fields is not acceptable
    InvalidValue,
}

impl ErrorCode {
    /// Stable code reported to callers
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::MissingRequiredValue => "E001",
            ErrorCode::OutOfRangeValue => "E002",
            ErrorCode::InvalidValue => "E003",
        }
    }

    /// Fixed human-readable message
    pub fn message(&self) -> &'static str {
        match self {
            ErrorCode::MissingRequiredValue => "Required input value is missing.",
            ErrorCode::OutOfRangeValue => "Input value is out of the allowed range.",
            ErrorCode::InvalidValue => "Input value is invalid.",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A single violated rule, raised by the first failing check of a builder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainError {
    code: ErrorCode,
    detail: Option<String>,
}

impl DomainError {
    /// Error with only the fixed message
    pub fn new(code: ErrorCode) -> Self {
        Self { code, detail: None }
    }

    /// Error naming the field or rule that failed
    pub fn with_detail(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self {
            code,
            detail: Some(detail.into()),
        }
    }

    pub fn missing(detail: impl Into<String>) -> Self {
        Self::with_detail(ErrorCode::MissingRequiredValue, detail)
    }

    pub fn out_of_range(detail: impl Into<String>) -> Self {
        Self::with_detail(ErrorCode::OutOfRangeValue, detail)
    }

    pub fn invalid(detail: impl Into<String>) -> Self {
        Self::with_detail(ErrorCode::InvalidValue, detail)
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code.code(), self.code.message())?;
        if let Some(detail) = &self.detail {
            write!(f, " - {}", detail)?;
        }
        Ok(())
    }
}

impl std::error::Error for DomainError {}
