use shared::{
    action::ActionDescriptor,
    ui::{Align, ButtonData, FontWeight, TextData, UiNode, ViewStyle},
};

pub(crate) const INK: &str = "#1A1A1A";
pub(crate) const MUTED: &str = "#666666";
pub(crate) const BRAND: &str = "#FF4D4D";
pub(crate) const NAVY: &str = "#1a237e";

pub(crate) fn text(value: impl Into<String>, size: u32, weight: FontWeight, color: &str) -> UiNode {
    UiNode::text(TextData::new(value, size, weight, color))
}

pub(crate) fn heading(value: impl Into<String>) -> UiNode {
    text(value, 18, FontWeight::Bold, NAVY)
}

pub(crate) fn column(gap: u32, children: impl IntoIterator<Item = UiNode>) -> UiNode {
    UiNode::view(ViewStyle {
        gap: Some(gap),
        ..ViewStyle::default()
    })
    .with_children(children)
}

pub(crate) fn row_between(children: impl IntoIterator<Item = UiNode>) -> UiNode {
    UiNode::view(ViewStyle {
        justify_content: Some(Align::SpaceBetween),
        ..ViewStyle::row()
    })
    .with_children(children)
}

pub(crate) fn section(children: impl IntoIterator<Item = UiNode>) -> UiNode {
    UiNode::view(ViewStyle {
        padding_horizontal: Some(20),
        margin_bottom: Some(20),
        ..ViewStyle::default()
    })
    .with_children(children)
}

pub(crate) fn card(children: impl IntoIterator<Item = UiNode>) -> UiNode {
    UiNode::view(ViewStyle {
        padding: Some(16),
        background_color: Some("#fff".into()),
        border_radius: Some(12),
        border_width: Some(1),
        border_color: Some("#E5E5E5".into()),
        ..ViewStyle::default()
    })
    .with_children(children)
}

pub(crate) fn filled_button(
    label: &str,
    color: &str,
    disabled: bool,
    action: ActionDescriptor,
) -> UiNode {
    UiNode::button(ButtonData {
        disabled,
        style: Some(ViewStyle {
            padding_vertical: Some(14),
            padding_horizontal: Some(16),
            border_radius: Some(12),
            align_items: Some(Align::Center),
            background_color: Some(color.into()),
            ..ViewStyle::default()
        }),
        ..ButtonData::new(label, action)
    })
}
