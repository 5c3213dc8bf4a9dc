use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::{
    domain::{BrokerId, TripId, TripStatus},
    error::DispatchError,
    ui::{Align, FontWeight, TextAlign, TextData, UiNode, ViewStyle},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// Response body for every screen request.
///
/// Fields are private so that a `success` envelope can only be built around a
/// non-empty forest; parsing enforces the same rule. `data` is the side-state
/// channel: when a screen has one, it is the source of truth and the `ui`
/// forest is rendered from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawEnvelope")]
pub struct ScreenEnvelope {
    status: ResponseStatus,
    screen: String,
    ui: Vec<UiNode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl ScreenEnvelope {
    /// Wraps a rendered forest. An empty forest cannot be reported as a
    /// success, so it degrades to [`ScreenEnvelope::error`].
    pub fn success(screen: impl Into<String>, ui: Vec<UiNode>) -> Self {
        let screen = screen.into();
        if ui.is_empty() {
            return Self::error(screen, "Screen has no content");
        }
        Self {
            status: ResponseStatus::Success,
            screen,
            ui,
            data: None,
            message: None,
        }
    }

    /// Error envelope carrying a minimal banner so the client still has
    /// something to render.
    pub fn error(screen: impl Into<String>, message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            status: ResponseStatus::Error,
            screen: screen.into(),
            ui: vec![error_banner(&message)],
            data: None,
            message: Some(message),
        }
    }

    pub fn with_side_state<T: Serialize>(mut self, state: &T) -> Result<Self, serde_json::Error> {
        self.data = Some(serde_json::to_value(state)?);
        Ok(self)
    }

    /// Sets the message of a success envelope. An error envelope keeps the
    /// message that explains the failure.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        if self.is_success() {
            self.message = Some(message.into());
        }
        self
    }

    pub fn status(&self) -> ResponseStatus {
        self.status
    }

    pub fn is_success(&self) -> bool {
        self.status == ResponseStatus::Success
    }

    pub fn screen(&self) -> &str {
        &self.screen
    }

    pub fn ui(&self) -> &[UiNode] {
        &self.ui
    }

    pub fn side_state(&self) -> Option<&Value> {
        self.data.as_ref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvelopeError {
    #[error("success envelope for screen `{0}` has no ui")]
    EmptySuccess(String),
}

#[derive(Deserialize)]
struct RawEnvelope {
    status: ResponseStatus,
    screen: String,
    ui: Vec<UiNode>,
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    message: Option<String>,
}

impl TryFrom<RawEnvelope> for ScreenEnvelope {
    type Error = EnvelopeError;

    fn try_from(raw: RawEnvelope) -> Result<Self, Self::Error> {
        if raw.status == ResponseStatus::Success && raw.ui.is_empty() {
            return Err(EnvelopeError::EmptySuccess(raw.screen));
        }
        Ok(Self {
            status: raw.status,
            screen: raw.screen,
            ui: raw.ui,
            data: raw.data,
            message: raw.message,
        })
    }
}

fn error_banner(message: &str) -> UiNode {
    let mut text = TextData::new(message, 16, FontWeight::SemiBold, "#B71C1C");
    text.text_align = Some(TextAlign::Center);
    UiNode::view(ViewStyle {
        flex: Some(1),
        justify_content: Some(Align::Center),
        align_items: Some(Align::Center),
        padding: Some(24),
        background_color: Some("#FFEBEE".into()),
        ..ViewStyle::default()
    })
    .with_children([UiNode::text(text)])
}

/// Body posted to a screen's `/action` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionRequest {
    pub action: String,
    #[serde(default)]
    pub data: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionResponse {
    pub status: ResponseStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl ActionResponse {
    pub fn success(message: Option<String>, data: Value) -> Self {
        Self {
            status: ResponseStatus::Success,
            message,
            data: Some(data),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == ResponseStatus::Success
    }
}

impl From<DispatchError> for ActionResponse {
    fn from(err: DispatchError) -> Self {
        Self {
            status: ResponseStatus::Error,
            message: Some(err.to_string()),
            data: err.detail(),
        }
    }
}

/// Side state of the driver home screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeScreenData {
    pub is_trip_started: bool,
    pub location_sharing: bool,
    pub trip_status: TripStatus,
    pub documents_uploaded: BTreeMap<String, bool>,
    pub active_trip: ActiveTrip,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub quick_actions: Vec<QuickAction>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recent_activities: Vec<RecentActivity>,
}

impl HomeScreenData {
    /// Document keys still pending upload, in key order.
    pub fn missing_documents(&self) -> Vec<&str> {
        self.documents_uploaded
            .iter()
            .filter(|(_, uploaded)| !**uploaded)
            .map(|(key, _)| key.as_str())
            .collect()
    }

    pub fn can_start_trip(&self) -> bool {
        !self.is_trip_started && self.documents_uploaded.values().all(|uploaded| *uploaded)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveTrip {
    pub id: TripId,
    pub trip_number: String,
    pub origin: String,
    pub destination: String,
    pub cargo: String,
    pub weight: String,
    pub payment: String,
    pub distance: String,
    pub broker_id: BrokerId,
    pub broker_name: String,
    pub broker_phone: String,
    /// Percent complete, 0..=100.
    pub progress: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickAction {
    pub id: u32,
    pub icon: String,
    pub title: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentActivity {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
    pub time: String,
    pub icon: String,
    pub color: String,
}

#[cfg(test)]
#[path = "tests/protocol_tests.rs"]
mod tests;
