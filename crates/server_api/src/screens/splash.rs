use shared::{
    protocol::ScreenEnvelope,
    ui::{Align, FontWeight, ImageData, NavigateData, ResizeMode, TextData, UiNode, ViewStyle},
};

use super::ScreenParams;

pub(crate) const AUTH_ROUTE: &str = "/(auth)/auth";
const SPLASH_DELAY_MS: u64 = 9000;

pub(crate) fn splash_screen(_params: &ScreenParams) -> ScreenEnvelope {
    let mut title = TextData::new("TruckHai", 40, FontWeight::Bold, "#ffffff");
    title.margin_left = Some(-10);
    title.margin_top = Some(8);

    let brand = UiNode::view(ViewStyle {
        flex: Some(1),
        justify_content: Some(Align::Center),
        align_items: Some(Align::Center),
        background_color: Some("#ff0000".into()),
        padding: Some(24),
        ..ViewStyle::default()
    })
    .with_children([UiNode::view(ViewStyle {
        justify_content: Some(Align::Center),
        ..ViewStyle::row()
    })
    .with_children([
        UiNode::image(ImageData {
            url: "https://cdn.truckhai.com/rr.gif".into(),
            width: 120,
            height: 120,
            resize_mode: ResizeMode::Contain,
            animation: Some("pulse".into()),
        }),
        UiNode::text(title),
    ])]);

    let redirect = UiNode::navigate(NavigateData {
        to: AUTH_ROUTE.into(),
        after: SPLASH_DELAY_MS,
    });

    ScreenEnvelope::success("SPLASH", vec![brand, redirect])
}
