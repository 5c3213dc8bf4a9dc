//! Action descriptors: the declarative "what happens on press" data embedded
//! in interactive node payloads, and the client-side effect each one implies.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{domain::HttpMethod, protocol::ActionRequest};

/// Closed vocabulary of user intents. Each kind carries only the fields it
/// uses, so a client can never read a navigation target off a `MODAL`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    rename_all = "SCREAMING_SNAKE_CASE",
    rename_all_fields = "camelCase"
)]
pub enum ActionDescriptor {
    Navigate {
        #[serde(default, alias = "navigate")]
        to: String,
    },
    NavigateBack,
    ApiCall {
        url: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        method: Option<HttpMethod>,
        #[serde(default, skip_serializing_if = "String::is_empty")]
        success_navigate: String,
        #[serde(default, skip_serializing_if = "String::is_empty")]
        failure_navigate: String,
    },
    SelectRoute {
        route_id: String,
    },
    SetUserRole {
        value: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        navigate: Option<String>,
    },
    Upload {
        url: String,
    },
    Modal {
        value: String,
    },
    /// Routed through the server-side dispatcher at `url`.
    Action {
        url: String,
        value: String,
        #[serde(default, skip_serializing_if = "Map::is_empty")]
        data: Map<String, Value>,
    },
}

impl ActionDescriptor {
    pub fn navigate(to: impl Into<String>) -> Self {
        Self::Navigate { to: to.into() }
    }

    pub fn back() -> Self {
        Self::NavigateBack
    }

    pub fn api_call(
        url: impl Into<String>,
        method: HttpMethod,
        success_navigate: impl Into<String>,
        failure_navigate: impl Into<String>,
    ) -> Self {
        Self::ApiCall {
            url: url.into(),
            method: Some(method),
            success_navigate: success_navigate.into(),
            failure_navigate: failure_navigate.into(),
        }
    }

    pub fn dispatch(
        url: impl Into<String>,
        action: impl Into<String>,
        data: Map<String, Value>,
    ) -> Self {
        Self::Action {
            url: url.into(),
            value: action.into(),
            data,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ActionDescriptor::Navigate { .. } => "NAVIGATE",
            ActionDescriptor::NavigateBack => "NAVIGATE_BACK",
            ActionDescriptor::ApiCall { .. } => "API_CALL",
            ActionDescriptor::SelectRoute { .. } => "SELECT_ROUTE",
            ActionDescriptor::SetUserRole { .. } => "SET_USER_ROLE",
            ActionDescriptor::Upload { .. } => "UPLOAD",
            ActionDescriptor::Modal { .. } => "MODAL",
            ActionDescriptor::Action { .. } => "ACTION",
        }
    }

    /// What the client has to do when the user triggers this action.
    pub fn client_effect(&self) -> ClientEffect {
        match self {
            ActionDescriptor::Navigate { to } if to.trim().is_empty() => ClientEffect::Stay,
            ActionDescriptor::Navigate { to } => ClientEffect::Navigate { to: to.clone() },
            ActionDescriptor::NavigateBack => ClientEffect::GoBack,
            ActionDescriptor::ApiCall {
                url,
                method,
                success_navigate,
                failure_navigate,
            } => ClientEffect::Request {
                url: url.clone(),
                method: method.unwrap_or_default(),
                on_success: non_empty(success_navigate),
                on_failure: non_empty(failure_navigate),
            },
            ActionDescriptor::SelectRoute { route_id } => ClientEffect::MergeLocalState {
                key: "routeId",
                value: route_id.clone(),
                then_navigate: None,
            },
            ActionDescriptor::SetUserRole { value, navigate } => ClientEffect::MergeLocalState {
                key: "userRole",
                value: value.clone(),
                then_navigate: navigate.as_deref().and_then(non_empty),
            },
            ActionDescriptor::Upload { url } => ClientEffect::MergeLocalState {
                key: "pendingUpload",
                value: url.clone(),
                then_navigate: None,
            },
            ActionDescriptor::Modal { value } => ClientEffect::MergeLocalState {
                key: "activeModal",
                value: value.clone(),
                then_navigate: None,
            },
            ActionDescriptor::Action { url, value, data } => ClientEffect::Dispatch {
                endpoint: url.clone(),
                request: ActionRequest {
                    action: value.clone(),
                    data: data.clone(),
                },
            },
        }
    }

    /// Navigation target once an `API_CALL` has resolved. `None` means stay
    /// on the current screen; other kinds never navigate after a call.
    pub fn after_api_call(&self, succeeded: bool) -> Option<&str> {
        let ActionDescriptor::ApiCall {
            success_navigate,
            failure_navigate,
            ..
        } = self
        else {
            return None;
        };
        let target = if succeeded {
            success_navigate
        } else {
            failure_navigate
        };
        (!target.trim().is_empty()).then_some(target.as_str())
    }
}

fn non_empty<S: AsRef<str> + ?Sized>(value: &S) -> Option<String> {
    let value = value.as_ref();
    (!value.trim().is_empty()).then(|| value.to_string())
}

#[derive(Debug, Clone, PartialEq)]
pub enum ClientEffect {
    /// Nothing to do (e.g. a `NAVIGATE` with no target).
    Stay,
    Navigate {
        to: String,
    },
    GoBack,
    Request {
        url: String,
        method: HttpMethod,
        on_success: Option<String>,
        on_failure: Option<String>,
    },
    MergeLocalState {
        key: &'static str,
        value: String,
        then_navigate: Option<String>,
    },
    Dispatch {
        endpoint: String,
        request: ActionRequest,
    },
}

impl ClientEffect {
    pub fn requires_server(&self) -> bool {
        matches!(self, ClientEffect::Request { .. } | ClientEffect::Dispatch { .. })
    }
}

#[cfg(test)]
#[path = "tests/action_tests.rs"]
mod tests;
