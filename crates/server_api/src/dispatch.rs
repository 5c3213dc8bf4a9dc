use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use shared::{
    error::DispatchError,
    protocol::{ActionRequest, ActionResponse},
};
use tracing::{debug, info, warn};

use crate::handlers::{ActionHandler, HANDLERS};

pub type Clock = fn() -> DateTime<Utc>;

/// Stateless action dispatcher. It never stores what it returns: every
/// response is a proposed next state that the caller persists, if anyone does.
#[derive(Clone)]
pub struct Dispatcher {
    clock: Clock,
    handlers: BTreeMap<&'static str, ActionHandler>,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::with_clock(Utc::now)
    }

    pub fn with_clock(clock: Clock) -> Self {
        Self {
            clock,
            handlers: HANDLERS.iter().copied().collect(),
        }
    }

    pub fn action_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.handlers.keys().copied()
    }

    /// Parses a raw request body and dispatches it. A body that is not
    /// `{ action, data }` never reaches a handler.
    pub fn dispatch_body(&self, body: &[u8]) -> Result<ActionResponse, DispatchError> {
        let request: ActionRequest = serde_json::from_slice(body).map_err(|error| {
            debug!(%error, "rejecting malformed action request");
            DispatchError::InvalidRequest
        })?;
        self.dispatch(&request)
    }

    pub fn dispatch(&self, request: &ActionRequest) -> Result<ActionResponse, DispatchError> {
        let Some(handler) = self.handlers.get(request.action.as_str()) else {
            warn!(action = %request.action, "unknown action");
            return Err(DispatchError::UnknownAction {
                action: request.action.clone(),
            });
        };

        let result = handler(&request.data, (self.clock)());
        match &result {
            Ok(_) => info!(action = %request.action, "action dispatched"),
            Err(error) => {
                info!(action = %request.action, code = ?error.code(), %error, "action rejected")
            }
        }
        result
    }

    /// Like [`Dispatcher::dispatch_body`] but folds errors into the wire response.
    pub fn respond(&self, body: &[u8]) -> ActionResponse {
        self.dispatch_body(body).unwrap_or_else(ActionResponse::from)
    }
}

#[cfg(test)]
#[path = "tests/dispatch_tests.rs"]
mod tests;
