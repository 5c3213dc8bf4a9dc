//! One handler per dispatcher action. Each projects the open `data` map into
//! its own typed input before doing anything else.

use std::collections::BTreeMap;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{Map, Value};
use shared::{
    domain::{document_name, BrokerId, TripId, TripStatus},
    error::DispatchError,
    protocol::ActionResponse,
};
use tracing::debug;

pub type ActionHandler =
    fn(&Map<String, Value>, DateTime<Utc>) -> Result<ActionResponse, DispatchError>;

/// Action name to handler. Names outside this table are rejected as unknown.
pub(crate) const HANDLERS: &[(&str, ActionHandler)] = &[
    (START_TRIP, start_trip),
    (UPLOAD_DOCUMENT, upload_document),
    (UPDATE_STATUS, update_status),
    (VIEW_TRIP_DETAILS, view_trip_details),
    (CHAT_WITH_BROKER, chat_with_broker),
    (CALL_CONTACT, call_contact),
];

pub const START_TRIP: &str = "START_TRIP";
pub const UPLOAD_DOCUMENT: &str = "UPLOAD_DOCUMENT";
pub const UPDATE_STATUS: &str = "UPDATE_STATUS";
pub const VIEW_TRIP_DETAILS: &str = "VIEW_TRIP_DETAILS";
pub const CHAT_WITH_BROKER: &str = "CHAT_WITH_BROKER";
pub const CALL_CONTACT: &str = "CALL_CONTACT";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartTripInput {
    pub documents_uploaded: BTreeMap<String, bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripStarted {
    pub is_trip_started: bool,
    pub location_sharing: bool,
    pub trip_status: TripStatus,
    pub start_time: String,
}

/// The one guarded transition: `not_started -> in_transit` requires every
/// listed document to be uploaded.
pub fn start_trip(
    data: &Map<String, Value>,
    now: DateTime<Utc>,
) -> Result<ActionResponse, DispatchError> {
    let input: StartTripInput = project(START_TRIP, data)?;

    let missing: Vec<String> = input
        .documents_uploaded
        .iter()
        .filter(|(_, uploaded)| !**uploaded)
        .map(|(key, _)| key.clone())
        .collect();
    if !missing.is_empty() {
        return Err(DispatchError::MissingDocuments { missing });
    }

    reply(
        Some("Trip started successfully! Location sharing enabled.".into()),
        &TripStarted {
            is_trip_started: true,
            location_sharing: true,
            trip_status: TripStatus::InTransit,
            start_time: timestamp(now),
        },
    )
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadDocumentInput {
    pub document_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentUploaded {
    pub document_type: String,
    pub uploaded: bool,
    pub uploaded_at: String,
}

/// Upload is simulated and always succeeds; the client records the returned
/// fragment under whatever key it sent.
pub fn upload_document(
    data: &Map<String, Value>,
    now: DateTime<Utc>,
) -> Result<ActionResponse, DispatchError> {
    let UploadDocumentInput { document_type } = project(UPLOAD_DOCUMENT, data)?;

    reply(
        Some(format!("{} uploaded successfully", document_name(&document_type))),
        &DocumentUploaded {
            document_type,
            uploaded: true,
            uploaded_at: timestamp(now),
        },
    )
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatusInput {
    pub status: String,
    pub trip_id: TripId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripStatusUpdated {
    pub trip_id: TripId,
    /// Echoed verbatim; statuses beyond [`TripStatus`] are passed through.
    pub trip_status: String,
    pub updated_at: String,
}

pub fn update_status(
    data: &Map<String, Value>,
    now: DateTime<Utc>,
) -> Result<ActionResponse, DispatchError> {
    let input: UpdateStatusInput = project(UPDATE_STATUS, data)?;
    if let Err(reason) = input.status.parse::<TripStatus>() {
        debug!(status = %input.status, %reason, "passing through unmodelled trip status");
    }

    reply(
        Some(format!("Trip status updated to: {}", input.status)),
        &TripStatusUpdated {
            trip_id: input.trip_id,
            trip_status: input.status,
            updated_at: timestamp(now),
        },
    )
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TripRef {
    trip_id: TripId,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BrokerRef {
    broker_id: BrokerId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigateTo {
    pub navigate_to: String,
}

pub fn view_trip_details(
    data: &Map<String, Value>,
    _now: DateTime<Utc>,
) -> Result<ActionResponse, DispatchError> {
    let TripRef { trip_id } = project(VIEW_TRIP_DETAILS, data)?;
    let trip_id = non_blank(VIEW_TRIP_DETAILS, "tripId", trip_id.0)?;

    reply(
        None,
        &NavigateTo {
            navigate_to: format!("/trip-details/{trip_id}"),
        },
    )
}

pub fn chat_with_broker(
    data: &Map<String, Value>,
    _now: DateTime<Utc>,
) -> Result<ActionResponse, DispatchError> {
    let BrokerRef { broker_id } = project(CHAT_WITH_BROKER, data)?;
    let broker_id = non_blank(CHAT_WITH_BROKER, "brokerId", broker_id.0)?;

    reply(
        None,
        &NavigateTo {
            navigate_to: format!("/chat/{broker_id}"),
        },
    )
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallContactInput {
    pub contact_type: String,
    pub phone_number: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallRequest {
    pub action: String,
    pub phone_number: String,
    pub contact_type: String,
}

pub fn call_contact(
    data: &Map<String, Value>,
    _now: DateTime<Utc>,
) -> Result<ActionResponse, DispatchError> {
    let input: CallContactInput = project(CALL_CONTACT, data)?;
    let phone_number = non_blank(CALL_CONTACT, "phoneNumber", input.phone_number)?;

    reply(
        Some(format!("Calling {}...", input.contact_type)),
        &CallRequest {
            action: "call".into(),
            phone_number,
            contact_type: input.contact_type,
        },
    )
}

fn project<T: DeserializeOwned>(
    action: &'static str,
    data: &Map<String, Value>,
) -> Result<T, DispatchError> {
    serde_json::from_value(Value::Object(data.clone()))
        .map_err(|e| DispatchError::invalid_data(action, e))
}

fn non_blank(action: &'static str, field: &str, value: String) -> Result<String, DispatchError> {
    if value.trim().is_empty() {
        return Err(DispatchError::invalid_data(
            action,
            format!("`{field}` must not be empty"),
        ));
    }
    Ok(value)
}

fn reply<T: Serialize>(
    message: Option<String>,
    payload: &T,
) -> Result<ActionResponse, DispatchError> {
    let data =
        serde_json::to_value(payload).map_err(|e| DispatchError::Internal(e.to_string()))?;
    Ok(ActionResponse::success(message, data))
}

pub(crate) fn timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[cfg(test)]
#[path = "tests/handlers_tests.rs"]
mod tests;
