//! Driver home. The side state ([`HomeScreenData`]) is built first and the UI
//! forest is rendered from it, so the two channels cannot drift within one
//! response.

use std::collections::BTreeMap;

use serde_json::{json, Map, Value};
use shared::{
    action::ActionDescriptor,
    domain::{document_icon, document_name, BrokerId, DocumentKind, TripId, TripStatus},
    protocol::{ActiveTrip, HomeScreenData, QuickAction, RecentActivity, ScreenEnvelope},
    ui::{Align, FontWeight, IconData, StatusBarData, StatusBarStyle, TextData, UiNode, ViewStyle},
};
use tracing::{debug, error};

use super::{
    widgets::{card, column, filled_button, heading, row_between, section, text, MUTED, NAVY},
    ScreenParams,
};
use crate::handlers::{
    CALL_CONTACT, CHAT_WITH_BROKER, START_TRIP, UPLOAD_DOCUMENT, VIEW_TRIP_DETAILS,
};

pub(crate) const ACTION_ENDPOINT: &str = "/bff/driver/home/action";
const DANGER: &str = "#F44336";
const SUCCESS: &str = "#4CAF50";

/// Query: `documents=<key>:<bool>,...` overrides entries of the default
/// document map; malformed pairs are skipped.
pub(crate) fn home_screen(params: &ScreenParams) -> ScreenEnvelope {
    let mut data = default_home_data();
    if let Some(raw) = params.get("documents") {
        data.documents_uploaded.extend(parse_documents_param(raw));
    }

    let ui = render_home(&data);
    match ScreenEnvelope::success("Home", ui).with_side_state(&data) {
        Ok(envelope) => envelope.with_message("Welcome back!"),
        Err(err) => {
            error!(%err, "failed to encode home side state");
            ScreenEnvelope::error("Home", "Home screen is unavailable")
        }
    }
}

pub fn parse_documents_param(raw: &str) -> BTreeMap<String, bool> {
    raw.split(',')
        .filter_map(|pair| {
            let (key, value) = pair.split_once(':')?;
            let key = key.trim();
            let uploaded = value.trim().parse::<bool>().ok();
            match uploaded {
                Some(uploaded) if !key.is_empty() => Some((key.to_string(), uploaded)),
                _ => {
                    debug!(pair, "skipping malformed documents entry");
                    None
                }
            }
        })
        .collect()
}

pub fn default_home_data() -> HomeScreenData {
    let documents_uploaded = DocumentKind::ALL
        .into_iter()
        .map(|kind| {
            let uploaded = !matches!(kind, DocumentKind::EWayBill | DocumentKind::Invoice);
            (kind.key().to_string(), uploaded)
        })
        .collect();

    HomeScreenData {
        is_trip_started: false,
        location_sharing: false,
        trip_status: TripStatus::NotStarted,
        documents_uploaded,
        active_trip: ActiveTrip {
            id: TripId("TRK789012".into()),
            trip_number: "TRIP-2024-001".into(),
            origin: "Mumbai Port".into(),
            destination: "Delhi Logistics Park".into(),
            cargo: "Electronics & Appliances".into(),
            weight: "15 Tons".into(),
            payment: "₹68,500".into(),
            distance: "1,412 km".into(),
            broker_id: BrokerId("BRK1001".into()),
            broker_name: "Sharma Logistics Pvt. Ltd.".into(),
            broker_phone: "+91 9876543210".into(),
            progress: 35,
        },
        quick_actions: vec![
            quick_action(1, "play-circle", "Start Trip", SUCCESS),
            quick_action(2, "search", "Find Loads", "#2196F3"),
            quick_action(3, "wallet", "Payments", "#FF9800"),
            quick_action(4, "document-text", "Docs", "#9C27B0"),
        ],
        recent_activities: vec![
            activity(
                1,
                "payment",
                "Advance received ₹20,000",
                "2 hours ago",
                "checkmark-circle",
                SUCCESS,
            ),
            activity(
                2,
                "assignment",
                "New trip assigned: Mumbai to Delhi",
                "4 hours ago",
                "car",
                "#2196F3",
            ),
            activity(
                3,
                "alert",
                "Toll payment reminder",
                "2 days ago",
                "alert-circle",
                DANGER,
            ),
        ],
    }
}

fn quick_action(id: u32, icon: &str, title: &str, color: &str) -> QuickAction {
    QuickAction {
        id,
        icon: icon.into(),
        title: title.into(),
        color: color.into(),
    }
}

fn activity(
    id: u32,
    kind: &str,
    message: &str,
    time: &str,
    icon: &str,
    color: &str,
) -> RecentActivity {
    RecentActivity {
        id,
        kind: kind.into(),
        message: message.into(),
        time: time.into(),
        icon: icon.into(),
        color: color.into(),
    }
}

fn render_home(data: &HomeScreenData) -> Vec<UiNode> {
    let mut body = vec![header(data), quick_actions(&data.quick_actions)];
    if !data.is_trip_started {
        body.push(documents_section(data));
    }
    body.push(active_trip_section(data));
    if !data.recent_activities.is_empty() {
        body.push(activities_section(&data.recent_activities));
    }

    vec![
        UiNode::status_bar(StatusBarData {
            background_color: NAVY.into(),
            style: StatusBarStyle::Light,
        }),
        UiNode::scroll(ViewStyle {
            flex_grow: Some(1),
            background_color: Some("#f5f7fa".into()),
            padding_top: Some(20),
            padding_bottom: Some(20),
            ..ViewStyle::default()
        })
        .with_children(body),
    ]
}

fn header(data: &HomeScreenData) -> UiNode {
    let status = data.trip_status;
    let mut chip = TextData::new(status.label(), 12, FontWeight::SemiBold, "#fff");
    chip.background_color = Some(status.color().into());
    chip.padding_horizontal = Some(10);
    chip.padding_vertical = Some(4);
    chip.border_radius = Some(10);

    section([row_between([
        column(4, [
            text("Welcome back", 14, FontWeight::Normal, MUTED),
            text(data.active_trip.trip_number.clone(), 22, FontWeight::Bold, NAVY),
        ]),
        UiNode::text(chip),
    ])])
}

fn quick_actions(actions: &[QuickAction]) -> UiNode {
    let tiles = actions.iter().map(|action| {
        UiNode::view(ViewStyle {
            align_items: Some(Align::Center),
            flex: Some(1),
            ..ViewStyle::default()
        })
        .with_children([
            UiNode::icon(IconData {
                background_color: Some("#ffffff".into()),
                container_size: Some(48),
                border_radius: Some(24),
                ..IconData::new(action.icon.clone(), 24, action.color.clone())
            }),
            text(action.title.clone(), 12, FontWeight::Medium, NAVY),
        ])
    });
    section([
        heading("Quick Actions"),
        UiNode::view(ViewStyle {
            margin_top: Some(12),
            ..ViewStyle::row()
        })
        .with_children(tiles),
    ])
}

fn documents_section(data: &HomeScreenData) -> UiNode {
    let missing = data.missing_documents();
    let uploaded = data.documents_uploaded.len() - missing.len();

    let pending = missing.iter().map(|key| {
        let mut payload = Map::new();
        payload.insert("documentType".into(), Value::String((*key).to_string()));
        row_between([
            UiNode::view(ViewStyle {
                gap: Some(12),
                ..ViewStyle::row()
            })
            .with_children([
                UiNode::icon(IconData {
                    background_color: Some("#ffebee".into()),
                    container_size: Some(36),
                    border_radius: Some(18),
                    ..IconData::new(document_icon(key), 20, DANGER)
                }),
                column(2, [
                    text(document_name(key), 14, FontWeight::SemiBold, NAVY),
                    text("Required for trip start", 12, FontWeight::Normal, DANGER),
                ]),
            ]),
            filled_button(
                "Upload",
                DANGER,
                false,
                ActionDescriptor::dispatch(ACTION_ENDPOINT, UPLOAD_DOCUMENT, payload),
            ),
        ])
    });

    let mut start_payload = Map::new();
    start_payload.insert("documentsUploaded".into(), json!(data.documents_uploaded));
    let can_start = data.can_start_trip();
    let start_label = if can_start {
        "Start Trip"
    } else {
        "Start Trip After Upload"
    };

    section([
        row_between([
            heading("Required Documents"),
            text(
                format!("{uploaded}/{} uploaded", data.documents_uploaded.len()),
                14,
                FontWeight::Normal,
                MUTED,
            ),
        ]),
        column(8, pending),
        filled_button(
            start_label,
            SUCCESS,
            !can_start,
            ActionDescriptor::dispatch(ACTION_ENDPOINT, START_TRIP, start_payload),
        ),
    ])
}

fn active_trip_section(data: &HomeScreenData) -> UiNode {
    let trip = &data.active_trip;

    let mut trip_ref = Map::new();
    trip_ref.insert("tripId".into(), json!(trip.id));
    let mut broker_ref = Map::new();
    broker_ref.insert("brokerId".into(), json!(trip.broker_id));
    let mut call = Map::new();
    call.insert("contactType".into(), json!("broker"));
    call.insert("phoneNumber".into(), json!(trip.broker_phone));

    section([
        heading("Active Trip"),
        card([
            row_between([
                text(trip.origin.clone(), 15, FontWeight::SemiBold, NAVY),
                UiNode::icon(IconData::new("arrow-forward", 18, MUTED)),
                text(trip.destination.clone(), 15, FontWeight::SemiBold, NAVY),
            ]),
            row_between([
                text(format!("{} · {}", trip.cargo, trip.weight), 13, FontWeight::Normal, MUTED),
                text(trip.payment.clone(), 15, FontWeight::Bold, SUCCESS),
            ]),
            text(
                format!("{}% complete · {}", trip.progress, trip.distance),
                12,
                FontWeight::Normal,
                data.trip_status.color(),
            ),
            text(format!("Broker: {}", trip.broker_name), 13, FontWeight::Normal, MUTED),
            UiNode::view(ViewStyle {
                gap: Some(8),
                margin_top: Some(12),
                ..ViewStyle::row()
            })
            .with_children([
                filled_button(
                    "Details",
                    NAVY,
                    false,
                    ActionDescriptor::dispatch(ACTION_ENDPOINT, VIEW_TRIP_DETAILS, trip_ref),
                ),
                filled_button(
                    "Chat",
                    "#2196F3",
                    false,
                    ActionDescriptor::dispatch(ACTION_ENDPOINT, CHAT_WITH_BROKER, broker_ref),
                ),
                filled_button(
                    "Call",
                    SUCCESS,
                    false,
                    ActionDescriptor::dispatch(ACTION_ENDPOINT, CALL_CONTACT, call),
                ),
            ]),
        ]),
    ])
}

fn activities_section(activities: &[RecentActivity]) -> UiNode {
    let rows = activities.iter().map(|activity| {
        UiNode::view(ViewStyle {
            gap: Some(12),
            padding_vertical: Some(8),
            ..ViewStyle::row()
        })
        .with_children([
            UiNode::icon(IconData::new(activity.icon.clone(), 20, activity.color.clone())),
            column(2, [
                text(activity.message.clone(), 14, FontWeight::Medium, NAVY),
                text(activity.time.clone(), 12, FontWeight::Normal, MUTED),
            ]),
        ])
    });
    section([heading("Recent Activity"), card(rows)])
}
