use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    Magnitude1,
    Magnitude2,
    Angle,
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputField::Magnitude1 => write!(f, "magnitude of vector 1"),
            InputField::Magnitude2 => write!(f, "magnitude of vector 2"),
            InputField::Angle => write!(f, "angle between vectors"),
        }
    }
}

/// Rejected engine input. Values are never clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EngineError {
    NegativeMagnitude { field: InputField, value: f64 },
    NonFinite { field: InputField, value: f64 },
}

impl EngineError {
    pub fn field(&self) -> InputField {
        match self {
            EngineError::NegativeMagnitude { field, .. } => *field,
            EngineError::NonFinite { field, .. } => *field,
        }
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::NegativeMagnitude { field, value } => {
                write!(f, "{field} must be non-negative, got {value}")
            }
            EngineError::NonFinite { field, value } => {
                write!(f, "{field} must be a finite number, got {value}")
            }
        }
    }
}

impl Error for EngineError {}
