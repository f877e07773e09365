use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum IsaError {
    /// An altitude or pressure query fell outside the valid domain of the
    /// target layer or model.
    #[error("out of range: {message}")]
    OutOfRange { message: String },

    /// Construction with non-physical parameters, detected before the
    /// layer is added.
    #[error("invalid parameter: {message}")]
    InvalidParameter { message: String },
}

impl IsaError {
    pub fn out_of_range(message: impl Into<String>) -> Self {
        IsaError::OutOfRange {
            message: message.into(),
        }
    }

    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        IsaError::InvalidParameter {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, IsaError>;
