use super::*;
use chrono::TimeZone;
use serde_json::{json, Value};
use shared::{error::ErrorCode, protocol::ResponseStatus};

fn fixed() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 8, 0, 0).single().expect("valid instant")
}

fn dispatcher() -> Dispatcher {
    Dispatcher::with_clock(fixed)
}

fn body(value: Value) -> Vec<u8> {
    serde_json::to_vec(&value).expect("encode")
}

fn respond(value: Value) -> Value {
    let response = dispatcher().respond(&body(value));
    serde_json::to_value(response).expect("encode response")
}

const DOCUMENT_KEYS: [&str; 6] = [
    "eWayBill",
    "invoice",
    "vehicleRC",
    "driverLicense",
    "insurance",
    "pollutionCert",
];

#[test]
fn start_trip_blocked_by_pending_documents() {
    let response = respond(json!({
        "action": "START_TRIP",
        "data": {
            "documentsUploaded": {
                "eWayBill": false,
                "invoice": false,
                "vehicleRC": true,
                "driverLicense": true,
                "insurance": true,
                "pollutionCert": true
            }
        }
    }));

    assert_eq!(
        response,
        json!({
            "status": "error",
            "message": "Please upload all required documents first",
            "data": { "missingDocuments": ["eWayBill", "invoice"] }
        })
    );
}

#[test]
fn start_trip_succeeds_when_everything_is_uploaded() {
    let documents: serde_json::Map<String, Value> =
        DOCUMENT_KEYS.iter().map(|key| (key.to_string(), json!(true))).collect();
    let response = respond(json!({
        "action": "START_TRIP",
        "data": { "documentsUploaded": documents }
    }));

    assert_eq!(response["status"], "success");
    assert_eq!(response["data"]["isTripStarted"], true);
    assert_eq!(response["data"]["locationSharing"], true);
    assert_eq!(response["data"]["tripStatus"], "in_transit");
    assert_eq!(response["data"]["startTime"], "2024-01-15T08:00:00Z");
}

#[test]
fn start_trip_gate_matches_all_uploaded_for_every_document_map() {
    let dispatcher = dispatcher();
    for mask in 0u32..(1 << DOCUMENT_KEYS.len()) {
        let documents: serde_json::Map<String, Value> = DOCUMENT_KEYS
            .iter()
            .enumerate()
            .map(|(bit, key)| (key.to_string(), json!(mask & (1 << bit) != 0)))
            .collect();
        let expected_missing: Vec<&str> = {
            let mut missing: Vec<&str> = DOCUMENT_KEYS
                .iter()
                .enumerate()
                .filter(|(bit, _)| mask & (1 << bit) == 0)
                .map(|(_, key)| *key)
                .collect();
            missing.sort_unstable();
            missing
        };

        let request = ActionRequest {
            action: "START_TRIP".into(),
            data: [("documentsUploaded".to_string(), Value::Object(documents))]
                .into_iter()
                .collect(),
        };
        match dispatcher.dispatch(&request) {
            Ok(response) => {
                assert!(expected_missing.is_empty(), "mask {mask:06b} should be blocked");
                assert!(response.is_success());
            }
            Err(DispatchError::MissingDocuments { missing }) => {
                assert_eq!(missing, expected_missing, "mask {mask:06b}");
            }
            Err(other) => panic!("mask {mask:06b}: unexpected {other:?}"),
        }
    }
}

#[test]
fn unknown_action_is_reported_without_data() {
    let response = respond(json!({ "action": "FLY_TO_MOON", "data": {} }));
    assert_eq!(response, json!({ "status": "error", "message": "Unknown action" }));

    let err = dispatcher()
        .dispatch_body(&body(json!({ "action": "FLY_TO_MOON" })))
        .expect_err("unknown");
    assert_eq!(err.code(), ErrorCode::UnknownAction);
}

#[test]
fn upload_document_echoes_fragment() {
    let response = respond(json!({
        "action": "UPLOAD_DOCUMENT",
        "data": { "documentType": "insurance" }
    }));

    assert_eq!(
        response,
        json!({
            "status": "success",
            "message": "Insurance uploaded successfully",
            "data": {
                "documentType": "insurance",
                "uploaded": true,
                "uploadedAt": "2024-01-15T08:00:00Z"
            }
        })
    );
}

#[test]
fn echo_actions_succeed_for_unmodelled_values() {
    let status = respond(json!({
        "action": "UPDATE_STATUS",
        "data": { "status": "delayed", "tripId": "TRK1" }
    }));
    assert_eq!(status["status"], "success");
    assert_eq!(status["message"], "Trip status updated to: delayed");
    assert_eq!(status["data"]["tripStatus"], "delayed");

    let upload = respond(json!({
        "action": "UPLOAD_DOCUMENT",
        "data": { "documentType": "" }
    }));
    assert_eq!(upload["status"], "success");
    assert_eq!(upload["data"]["uploaded"], true);
}

#[test]
fn missing_data_defaults_to_empty_object() {
    let err = dispatcher()
        .dispatch_body(br#"{"action":"VIEW_TRIP_DETAILS"}"#)
        .expect_err("tripId is required");
    assert_eq!(err.code(), ErrorCode::Validation);
}

#[test]
fn malformed_bodies_never_reach_a_handler() {
    let dispatcher = dispatcher();
    let bodies: [&[u8]; 7] = [
        b"",
        b"not json",
        b"[]",
        br#"{"data":{}}"#,
        br#"{"action":42}"#,
        br#"{"action":"START_TRIP","data":null}"#,
        br#"{"action":"START_TRIP","data":[1,2]}"#,
    ];
    for raw in bodies {
        let err = dispatcher.dispatch_body(raw).expect_err("malformed");
        assert_eq!(err, DispatchError::InvalidRequest, "{}", String::from_utf8_lossy(raw));
        assert!(err.code().is_malformed_request());
    }

    let response = dispatcher.respond(b"{");
    assert_eq!(response.status, ResponseStatus::Error);
    assert_eq!(response.message.as_deref(), Some("Invalid request format"));
}

#[test]
fn dispatch_does_not_retain_state_between_calls() {
    let dispatcher = dispatcher();
    let blocked = json!({
        "action": "START_TRIP",
        "data": { "documentsUploaded": { "invoice": false } }
    });
    let allowed = json!({
        "action": "START_TRIP",
        "data": { "documentsUploaded": { "invoice": true } }
    });

    assert!(!dispatcher.respond(&body(blocked.clone())).is_success());
    assert!(dispatcher.respond(&body(allowed)).is_success());
    assert!(!dispatcher.respond(&body(blocked)).is_success());
}

#[test]
fn action_names_are_sorted_and_complete() {
    let names: Vec<_> = dispatcher().action_names().collect();
    assert_eq!(
        names,
        [
            "CALL_CONTACT",
            "CHAT_WITH_BROKER",
            "START_TRIP",
            "UPDATE_STATUS",
            "UPLOAD_DOCUMENT",
            "VIEW_TRIP_DETAILS",
        ]
    );
}
