use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;

/// Coarse classification of a dispatch failure, used by transports to pick a
/// status code and by logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// Body did not parse into `{ action, data }`.
    InvalidRequest,
    /// `data` did not project into the action's typed input.
    Validation,
    /// A business precondition blocked the transition.
    Precondition,
    UnknownAction,
    Internal,
}

impl ErrorCode {
    /// True when the request itself was unusable, as opposed to a well-formed
    /// request that the dispatcher answered with an error.
    pub fn is_malformed_request(self) -> bool {
        matches!(self, ErrorCode::InvalidRequest | ErrorCode::Validation)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DispatchError {
    #[error("Invalid request format")]
    InvalidRequest,

    #[error("Invalid data for {action}: {reason}")]
    InvalidData { action: &'static str, reason: String },

    #[error("Please upload all required documents first")]
    MissingDocuments { missing: Vec<String> },

    #[error("Unknown action")]
    UnknownAction { action: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DispatchError {
    pub fn invalid_data(action: &'static str, reason: impl ToString) -> Self {
        Self::InvalidData {
            action,
            reason: reason.to_string(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            DispatchError::InvalidRequest => ErrorCode::InvalidRequest,
            DispatchError::InvalidData { .. } => ErrorCode::Validation,
            DispatchError::MissingDocuments { .. } => ErrorCode::Precondition,
            DispatchError::UnknownAction { .. } => ErrorCode::UnknownAction,
            DispatchError::Internal(_) => ErrorCode::Internal,
        }
    }

    /// Structured payload the client can act on, if any.
    pub fn detail(&self) -> Option<Value> {
        match self {
            DispatchError::MissingDocuments { missing } => {
                Some(json!({ "missingDocuments": missing }))
            }
            _ => None,
        }
    }
}
