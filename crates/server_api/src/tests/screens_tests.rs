use super::*;
use shared::{
    action::ActionDescriptor,
    protocol::HomeScreenData,
    ui::{ButtonData, NodePayload, UiNode},
};

use crate::handlers::{START_TRIP, UPLOAD_DOCUMENT};

fn registry() -> ScreenRegistry {
    ScreenRegistry::with_defaults()
}

fn nodes(envelope: &ScreenEnvelope) -> Vec<&UiNode> {
    let mut out = Vec::new();
    for root in envelope.ui() {
        root.walk(&mut |node| out.push(node));
    }
    out
}

fn texts(envelope: &ScreenEnvelope) -> Vec<String> {
    nodes(envelope)
        .into_iter()
        .filter_map(|node| match &node.payload {
            NodePayload::Text(data) => Some(data.text.clone()),
            _ => None,
        })
        .collect()
}

fn dispatched(envelope: &ScreenEnvelope, action: &str) -> usize {
    envelope
        .ui()
        .iter()
        .flat_map(UiNode::actions)
        .filter(|descriptor| {
            matches!(descriptor, ActionDescriptor::Action { value, .. } if value == action)
        })
        .count()
}

fn is_start_trip(action: &ActionDescriptor) -> bool {
    matches!(action, ActionDescriptor::Action { value, .. } if value == START_TRIP)
}

fn start_button(envelope: &ScreenEnvelope) -> Option<ButtonData> {
    nodes(envelope).into_iter().find_map(|node| match &node.payload {
        NodePayload::Button(data) if is_start_trip(&data.action) => Some(data.clone()),
        _ => None,
    })
}

fn home(params: ScreenParams) -> (ScreenEnvelope, HomeScreenData) {
    let envelope = registry().render("driver", "home", &params).expect("home registered");
    let state = serde_json::from_value(envelope.side_state().cloned().expect("side state"))
        .expect("home side state");
    (envelope, state)
}

#[test]
fn every_registered_screen_renders_content() {
    let registry = registry();
    let routes: Vec<String> = registry.routes().collect();
    assert_eq!(
        routes,
        ["app/splash", "auth/otp", "auth/registration-role", "driver/home"]
    );

    for route in routes {
        let (area, screen) = route.split_once('/').expect("area/screen");
        let envelope = registry.render(area, screen, &ScreenParams::new()).expect("registered");
        assert!(envelope.is_success(), "{route}");
        assert!(!envelope.ui().is_empty(), "{route}");
    }
}

#[test]
fn unknown_screen_is_not_rendered() {
    let registry = registry();
    assert!(!registry.contains("driver", "garage"));
    assert!(registry.render("driver", "garage", &ScreenParams::new()).is_none());
    assert!(registry.render("home", "driver", &ScreenParams::new()).is_none());
}

#[test]
fn params_ignore_blank_values() {
    let params = ScreenParams::new().with("phone", "   ").with("name", " Ravi ");
    assert_eq!(params.get("phone"), None);
    assert_eq!(params.get_or("phone", "fallback"), "fallback");
    assert_eq!(params.get("name"), Some("Ravi"));
}

#[test]
fn otp_screen_defaults_phone() {
    let envelope = registry().render("auth", "otp", &ScreenParams::new()).expect("otp");
    assert_eq!(envelope.screen(), "OTP");
    assert!(texts(&envelope).contains(&"You'll receive a call soon at your number".to_string()));

    let kinds: Vec<&str> = nodes(&envelope).iter().map(|node| node.kind()).collect();
    assert_eq!(kinds[..3], ["SAFE_AREA", "VIEW", "SCROLL"]);
    assert!(kinds.contains(&"OTP_INPUT"));
    assert!(kinds.contains(&"RESEND_OTP"));
}

#[test]
fn otp_screen_echoes_supplied_phone() {
    let params = ScreenParams::new().with("phone", "+91 9000000001");
    let envelope = registry().render("auth", "otp", &params).expect("otp");
    assert!(texts(&envelope).contains(&"You'll receive a call soon at +91 9000000001".to_string()));
}

#[test]
fn otp_verify_button_calls_api() {
    let envelope = registry().render("auth", "otp", &ScreenParams::new()).expect("otp");
    let actions: Vec<&ActionDescriptor> = envelope.ui().iter().flat_map(UiNode::actions).collect();
    assert_eq!(actions.len(), 1);
    assert_eq!(actions[0].kind(), "API_CALL");
    assert_eq!(actions[0].after_api_call(true), Some("(tabs)/"));
    assert_eq!(actions[0].after_api_call(false), None);
}

#[test]
fn registration_role_offers_both_roles() {
    let envelope = registry()
        .render("auth", "registration-role", &ScreenParams::new())
        .expect("role");
    let roles: Vec<(String, Option<String>)> = envelope
        .ui()
        .iter()
        .flat_map(UiNode::actions)
        .filter_map(|action| match action {
            ActionDescriptor::SetUserRole { value, navigate } => {
                Some((value.clone(), navigate.clone()))
            }
            _ => None,
        })
        .collect();
    assert_eq!(
        roles,
        [
            ("broker".to_string(), Some("/g1".to_string())),
            ("driver".to_string(), Some("/r1".to_string())),
        ]
    );
}

#[test]
fn splash_redirects_to_auth() {
    let envelope = registry().render("app", "splash", &ScreenParams::new()).expect("splash");
    let redirect = envelope
        .ui()
        .iter()
        .find_map(|node| match &node.payload {
            NodePayload::Navigate(data) => Some(data.clone()),
            _ => None,
        })
        .expect("navigate node");
    assert_eq!(redirect.to, splash::AUTH_ROUTE);
    assert_eq!(redirect.after, 9000);
}

#[test]
fn home_ui_is_derived_from_side_state() {
    let (envelope, state) = home(ScreenParams::new());

    assert_eq!(envelope.screen(), "Home");
    assert_eq!(envelope.message(), Some("Welcome back!"));
    assert_eq!(state, default_home_data());
    assert_eq!(state.missing_documents(), ["eWayBill", "invoice"]);
    assert_eq!(dispatched(&envelope, UPLOAD_DOCUMENT), state.missing_documents().len());

    let start = start_button(&envelope).expect("start button");
    assert!(start.disabled);
    assert_eq!(start.text, "Start Trip After Upload");
}

#[test]
fn home_start_button_carries_document_map() {
    let (envelope, state) = home(ScreenParams::new());
    let start = start_button(&envelope).expect("start button");
    let ActionDescriptor::Action { url, data, .. } = start.action else {
        panic!("start trip is a dispatcher action");
    };
    assert_eq!(url, driver::ACTION_ENDPOINT);
    assert_eq!(
        data.get("documentsUploaded"),
        Some(&serde_json::to_value(&state.documents_uploaded).expect("encode"))
    );
}

#[test]
fn home_documents_override_enables_start() {
    let params = ScreenParams::new().with("documents", "eWayBill:true, invoice:true");
    let (envelope, state) = home(params);

    assert!(state.can_start_trip());
    assert_eq!(dispatched(&envelope, UPLOAD_DOCUMENT), 0);
    let start = start_button(&envelope).expect("start button");
    assert!(!start.disabled);
    assert_eq!(start.text, "Start Trip");
}

#[test]
fn home_documents_override_can_add_pending_documents() {
    let params = ScreenParams::new().with(
        "documents",
        "eWayBill:true,invoice:true,fitnessCert:false",
    );
    let (envelope, state) = home(params);

    assert_eq!(state.missing_documents(), ["fitnessCert"]);
    assert_eq!(dispatched(&envelope, UPLOAD_DOCUMENT), 1);
    assert!(texts(&envelope).contains(&"fitnessCert".to_string()));
}

#[test]
fn documents_param_skips_malformed_pairs() {
    let parsed =
        parse_documents_param("invoice:true,broken,:false,insurance:maybe, eWayBill : false ");
    assert_eq!(parsed.len(), 2);
    assert_eq!(parsed.get("invoice"), Some(&true));
    assert_eq!(parsed.get("eWayBill"), Some(&false));
}
