use super::*;
use chrono::TimeZone;
use serde_json::json;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 9, 14, 30, 5).single().expect("valid instant")
}

fn data(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected an object, got {other}"),
    }
}

#[test]
fn timestamp_is_rfc3339_in_seconds() {
    assert_eq!(timestamp(now()), "2024-03-09T14:30:05Z");
}

#[test]
fn start_trip_proposes_in_transit_state() {
    let input = data(json!({ "documentsUploaded": { "eWayBill": true, "invoice": true } }));
    let response = start_trip(&input, now()).expect("start");

    assert!(response.is_success());
    assert_eq!(
        response.message.as_deref(),
        Some("Trip started successfully! Location sharing enabled.")
    );
    let started: TripStarted = serde_json::from_value(response.data.expect("data")).expect("shape");
    assert_eq!(
        started,
        TripStarted {
            is_trip_started: true,
            location_sharing: true,
            trip_status: TripStatus::InTransit,
            start_time: "2024-03-09T14:30:05Z".into(),
        }
    );
}

#[test]
fn start_trip_lists_missing_documents_in_key_order() {
    let input = data(json!({
        "documentsUploaded": { "pollutionCert": false, "eWayBill": false, "insurance": true }
    }));
    let err = start_trip(&input, now()).expect_err("blocked");

    assert_eq!(
        err,
        DispatchError::MissingDocuments {
            missing: vec!["eWayBill".into(), "pollutionCert".into()]
        }
    );
}

#[test]
fn start_trip_with_empty_document_map_is_allowed() {
    let input = data(json!({ "documentsUploaded": {} }));
    assert!(start_trip(&input, now()).is_ok());
}

#[test]
fn start_trip_without_document_map_is_invalid_data() {
    let err = start_trip(&Map::new(), now()).expect_err("invalid");
    assert!(matches!(err, DispatchError::InvalidData { action: START_TRIP, .. }));
}

#[test]
fn start_trip_rejects_non_boolean_flags() {
    let input = data(json!({ "documentsUploaded": { "invoice": "yes" } }));
    let err = start_trip(&input, now()).expect_err("invalid");
    assert_eq!(err.code(), shared::error::ErrorCode::Validation);
}

#[test]
fn upload_document_uses_display_name_in_message() {
    let input = data(json!({ "documentType": "vehicleRC" }));
    let response = upload_document(&input, now()).expect("upload");

    assert_eq!(response.message.as_deref(), Some("Vehicle RC uploaded successfully"));
    assert_eq!(
        response.data,
        Some(json!({
            "documentType": "vehicleRC",
            "uploaded": true,
            "uploadedAt": "2024-03-09T14:30:05Z"
        }))
    );
}

#[test]
fn upload_document_falls_back_to_raw_key() {
    let input = data(json!({ "documentType": "fitnessCert" }));
    let response = upload_document(&input, now()).expect("upload");
    assert_eq!(response.message.as_deref(), Some("fitnessCert uploaded successfully"));
}

#[test]
fn upload_document_always_succeeds_for_any_type() {
    let input = data(json!({ "documentType": "" }));
    let response = upload_document(&input, now()).expect("upload");

    assert!(response.is_success());
    assert_eq!(response.data.expect("data")["documentType"], "");
}

#[test]
fn update_status_echoes_trip_and_status() {
    let input = data(json!({ "status": "reached_destination", "tripId": "TRK1" }));
    let response = update_status(&input, now()).expect("update");

    assert_eq!(
        response.message.as_deref(),
        Some("Trip status updated to: reached_destination")
    );
    let updated: TripStatusUpdated =
        serde_json::from_value(response.data.expect("data")).expect("shape");
    assert_eq!(updated.trip_id, TripId("TRK1".into()));
    assert_eq!(updated.trip_status, "reached_destination");
    assert_eq!(updated.updated_at, "2024-03-09T14:30:05Z");
}

#[test]
fn update_status_echoes_statuses_outside_the_known_set() {
    let input = data(json!({ "status": "delayed", "tripId": "TRK1" }));
    let response = update_status(&input, now()).expect("update");

    assert_eq!(response.message.as_deref(), Some("Trip status updated to: delayed"));
    assert_eq!(
        response.data,
        Some(json!({
            "tripId": "TRK1",
            "tripStatus": "delayed",
            "updatedAt": "2024-03-09T14:30:05Z"
        }))
    );
}

#[test]
fn navigation_handlers_build_routes() {
    let details =
        view_trip_details(&data(json!({ "tripId": "TRK789012" })), now()).expect("details");
    assert_eq!(details.message, None);
    assert_eq!(details.data, Some(json!({ "navigateTo": "/trip-details/TRK789012" })));

    let chat = chat_with_broker(&data(json!({ "brokerId": "BRK1001" })), now()).expect("chat");
    assert_eq!(chat.data, Some(json!({ "navigateTo": "/chat/BRK1001" })));
}

#[test]
fn navigation_handlers_reject_empty_ids() {
    assert!(view_trip_details(&data(json!({ "tripId": "" })), now()).is_err());
    assert!(chat_with_broker(&data(json!({ "brokerId": "" })), now()).is_err());
    assert!(chat_with_broker(&Map::new(), now()).is_err());
}

#[test]
fn call_contact_returns_call_instruction() {
    let input = data(json!({ "contactType": "broker", "phoneNumber": "+91 9876543210" }));
    let response = call_contact(&input, now()).expect("call");

    assert_eq!(response.message.as_deref(), Some("Calling broker..."));
    assert_eq!(
        response.data,
        Some(json!({
            "action": "call",
            "phoneNumber": "+91 9876543210",
            "contactType": "broker"
        }))
    );
}

#[test]
fn call_contact_requires_phone_number() {
    let input = data(json!({ "contactType": "broker", "phoneNumber": "" }));
    assert!(call_contact(&input, now()).is_err());
}

#[test]
fn handler_table_has_unique_names() {
    let mut names: Vec<_> = HANDLERS.iter().map(|(name, _)| *name).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), HANDLERS.len());
}
