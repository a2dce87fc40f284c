//! Error handling for METAR chunk decoding.
//!
//! Both error kinds are recoverable at the caller: a report-level decoder
//! inspects them to decide whether a malformed group aborts the whole report
//! or is treated as absent. Each error identifies the text that failed and
//! the decoder that raised it.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The head of the remaining report text does not match the group grammar.
    #[error("{message}: \"{remaining}\"")]
    InvalidFormat {
        decoder: &'static str,
        message: String,
        remaining: String,
    },

    /// The head matched the grammar but a decoded field violates a domain
    /// constraint (e.g. a wind direction outside [0,360]).
    #[error("{message}: \"{remaining}\"")]
    DataValidation {
        decoder: &'static str,
        message: String,
        remaining: String,
    },
}

impl DecodeError {
    /// Create a format error for a chunk that did not match its grammar
    pub fn invalid_format(
        decoder: &'static str,
        message: impl Into<String>,
        remaining: impl Into<String>,
    ) -> Self {
        Self::InvalidFormat {
            decoder,
            message: message.into(),
            remaining: remaining.into(),
        }
    }

    /// Create a validation error for a field outside its domain
    pub fn data_validation(
        decoder: &'static str,
        message: impl Into<String>,
        remaining: impl Into<String>,
    ) -> Self {
        Self::DataValidation {
            decoder,
            message: message.into(),
            remaining: remaining.into(),
        }
    }

    /// Name of the decoder that raised this error
    pub fn decoder(&self) -> &'static str {
        match self {
            Self::InvalidFormat { decoder, .. } | Self::DataValidation { decoder, .. } => decoder,
        }
    }

    /// The report text that failed to decode
    pub fn remaining(&self) -> &str {
        match self {
            Self::InvalidFormat { remaining, .. } | Self::DataValidation { remaining, .. } => {
                remaining
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, DecodeError>;
