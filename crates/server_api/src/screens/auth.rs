use shared::{
    action::ActionDescriptor,
    domain::HttpMethod,
    protocol::ScreenEnvelope,
    ui::{
        Align, ButtonData, CardData, Dimension, FontWeight, IconData, OtpInputData, Position,
        ResendOtpData, TextAlign, TextButtonData, TextData, UiNode, ViewStyle,
    },
};

use super::{
    widgets::{text, BRAND, INK, MUTED},
    ScreenParams,
};

pub(crate) const PHONE_FALLBACK: &str = "your number";
const OTP_LENGTH: u8 = 6;
const RESEND_AFTER_SECS: u32 = 30;

/// Query: `phone` (default [`PHONE_FALLBACK`]), echoed into the copy.
pub(crate) fn otp_screen(params: &ScreenParams) -> ScreenEnvelope {
    let phone = params.get_or("phone", PHONE_FALLBACK);

    let mut title = TextData::new("Verify Mobile Number", 24, FontWeight::Bold, INK);
    title.text_align = Some(TextAlign::Center);
    let mut subtitle = TextData::new(
        format!("You'll receive a call soon at {phone}"),
        16,
        FontWeight::Normal,
        MUTED,
    );
    subtitle.text_align = Some(TextAlign::Center);
    subtitle.margin_top = Some(12);
    let mut footnote =
        TextData::new("Your OTP is secure and encrypted", 12, FontWeight::Normal, MUTED);
    footnote.text_align = Some(TextAlign::Center);
    footnote.margin_top = Some(40);

    let header = UiNode::view(ViewStyle {
        align_items: Some(Align::Center),
        margin_top: Some(40),
        margin_bottom: Some(40),
        ..ViewStyle::default()
    })
    .with_children([UiNode::text(title), UiNode::text(subtitle)]);

    let verify = UiNode::button(ButtonData {
        style: Some(ViewStyle {
            background_color: Some(BRAND.into()),
            padding_vertical: Some(16),
            padding_horizontal: Some(40),
            border_radius: Some(16),
            align_items: Some(Align::Center),
            margin_top: Some(30),
            shadow_color: Some("#000000".into()),
            shadow_opacity: Some(0.2),
            shadow_radius: Some(6),
            ..ViewStyle::default()
        }),
        ..ButtonData::new(
            "Verify & Continue",
            ActionDescriptor::api_call("/api/v1/user/verify-otp", HttpMethod::Post, "(tabs)/", ""),
        )
    });

    let content = UiNode::scroll(ViewStyle {
        flex_grow: Some(1),
        padding_horizontal: Some(24),
        padding_vertical: Some(20),
        background_color: Some("#FFFFFF".into()),
        justify_content: Some(Align::Center),
        align_items: Some(Align::Center),
        ..ViewStyle::default()
    })
    .with_children([
        header,
        UiNode::otp_input(OtpInputData {
            id: "otp".into(),
            length: OTP_LENGTH,
            box_spacing: Some(12),
            box_border_color: Some("#CCCCCC".into()),
            box_border_radius: Some(8),
            box_background_color: Some("#F9F9F9".into()),
            box_width: Some(50),
            box_height: Some(50),
        }),
        verify,
        UiNode::resend_otp(ResendOtpData {
            timer: RESEND_AFTER_SECS,
            margin_top: Some(20),
        }),
        UiNode::text(footnote),
    ]);

    let root = UiNode::safe_area(ViewStyle::fill()).with_children([UiNode::view(ViewStyle {
        flex: Some(1),
        position: Some(Position::Relative),
        ..ViewStyle::default()
    })
    .with_children([content])]);

    ScreenEnvelope::success("OTP", vec![root])
}

pub(crate) fn registration_role_screen(_params: &ScreenParams) -> ScreenEnvelope {
    let cards = UiNode::view(ViewStyle {
        width: Some(Dimension::percent(100)),
        gap: Some(16),
        margin_bottom: Some(40),
        ..ViewStyle::default()
    })
    .with_children([
        role_card(
            "broker",
            "/g1",
            "account-tie",
            "#EFF6FF",
            "I am a Broker",
            "Post loads and manage your fleet partners",
        ),
        role_card(
            "driver",
            "/r1",
            "steering",
            "#FEF2F2",
            "I am a Driver",
            "Find loads and get paid on time",
        ),
    ]);

    let back = UiNode::text_button(TextButtonData {
        text: "Back".into(),
        on_press: ActionDescriptor::back(),
        color: Some(MUTED.into()),
        font_size: Some(14),
        font_weight: Some(FontWeight::Medium),
    });

    let root = UiNode::safe_area(ViewStyle::fill()).with_children([UiNode::scroll(ViewStyle {
        flex_grow: Some(1),
        padding_horizontal: Some(24),
        align_items: Some(Align::Center),
        justify_content: Some(Align::Center),
        ..ViewStyle::default()
    })
    .with_children([
        text("Choose your role", 24, FontWeight::Bold, INK),
        text("You can change this later in settings", 14, FontWeight::Normal, MUTED),
        cards,
        back,
    ])]);

    ScreenEnvelope::success("REGISTRATION_ROLE", vec![root])
}

fn role_card(role: &str, next: &str, icon: &str, tint: &str, title: &str, blurb: &str) -> UiNode {
    UiNode::pressable_card(CardData {
        on_press: ActionDescriptor::SetUserRole {
            value: role.into(),
            navigate: Some(next.into()),
        },
        background_color: Some(tint.into()),
        padding: Some(20),
        border_radius: Some(16),
        border_width: Some(1),
        border_color: Some("#E5E5E5".into()),
        margin_top: None,
        shadow: true,
    })
    .with_children([
        UiNode::icon(IconData::new(icon, 32, BRAND)),
        UiNode::view(ViewStyle {
            flex: Some(1),
            margin_left: Some(12),
            ..ViewStyle::default()
        })
        .with_children([
            text(title, 18, FontWeight::SemiBold, INK),
            text(blurb, 13, FontWeight::Normal, MUTED),
        ]),
        UiNode::icon(IconData::new("chevron-right", 24, MUTED)),
    ])
}
