//! UI node schema. A node is a kind tag, the payload that kind requires, and
//! ordered children. On the wire:
//!
//! ```json
//! { "type": "TEXT", "data": { "text": "Hi", ... }, "children": [] }
//! ```
//!
//! `children` is omitted when empty.

use serde::{Deserialize, Serialize};

use crate::action::ActionDescriptor;

/// A length that is either absolute points or a percentage string like `"100%"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dimension {
    Points(f64),
    Percent(String),
}

impl Dimension {
    pub fn percent(value: u8) -> Self {
        Self::Percent(format!("{value}%"))
    }
}

impl From<u32> for Dimension {
    fn from(value: u32) -> Self {
        Self::Points(f64::from(value))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlexDirection {
    Row,
    Column,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Align {
    FlexStart,
    FlexEnd,
    Center,
    Stretch,
    SpaceBetween,
    SpaceAround,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    Relative,
    Absolute,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FontWeight {
    #[serde(rename = "normal")]
    Normal,
    #[serde(rename = "500")]
    Medium,
    #[serde(rename = "600")]
    SemiBold,
    #[serde(rename = "bold")]
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum KeyboardType {
    #[default]
    Default,
    NumberPad,
    PhonePad,
    EmailAddress,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizeMode {
    Contain,
    Cover,
    Stretch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusBarStyle {
    Light,
    Dark,
}

/// Box and layout style shared by container kinds and embedded in a few
/// interactive payloads. Every field is optional; unset fields are omitted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flex: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flex_grow: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flex_direction: Option<FlexDirection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align_items: Option<Align>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align_self: Option<Align>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub justify_content: Option<Align>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z_index: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<Dimension>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<Dimension>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_height: Option<Dimension>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gap: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_horizontal: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_vertical: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_top: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_bottom: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_horizontal: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_top: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_bottom: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_left: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_right: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_top_left_radius: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_top_right_radius: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow_opacity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shadow_radius: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elevation: Option<u32>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub horizontal: bool,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub shows_vertical_scroll_indicator: bool,
}

impl ViewStyle {
    pub fn row() -> Self {
        Self {
            flex_direction: Some(FlexDirection::Row),
            align_items: Some(Align::Center),
            ..Self::default()
        }
    }

    pub fn fill() -> Self {
        Self {
            flex: Some(1),
            ..Self::default()
        }
    }
}

/// Text always carries its size, weight and color; everything else is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextData {
    pub text: String,
    pub font_size: u32,
    pub font_weight: FontWeight,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flex: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_top: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_bottom: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_left: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_horizontal: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_vertical: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align_self: Option<Align>,
}

impl TextData {
    pub fn new(
        text: impl Into<String>,
        font_size: u32,
        font_weight: FontWeight,
        color: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            font_size,
            font_weight,
            color: color.into(),
            text_align: None,
            opacity: None,
            line_height: None,
            letter_spacing: None,
            flex: None,
            margin_top: None,
            margin_bottom: None,
            margin_left: None,
            background_color: None,
            padding_horizontal: None,
            padding_vertical: None,
            border_radius: None,
            align_self: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageData {
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub resize_mode: ResizeMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputData {
    /// Form field key the client stores the value under.
    pub id: String,
    pub placeholder: String,
    #[serde(default)]
    pub keyboard_type: KeyboardType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<ViewStyle>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconData {
    pub name: String,
    pub size: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<u32>,
}

impl IconData {
    pub fn new(name: impl Into<String>, size: u32, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            color: Some(color.into()),
            background_color: None,
            container_size: None,
            border_radius: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonData {
    pub text: String,
    #[serde(default)]
    pub disabled: bool,
    pub action: ActionDescriptor,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<ViewStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<IconData>,
}

impl ButtonData {
    pub fn new(text: impl Into<String>, action: ActionDescriptor) -> Self {
        Self {
            text: text.into(),
            disabled: false,
            action,
            style: None,
            icon: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconButtonData {
    pub icon: String,
    pub on_press: ActionDescriptor,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextButtonData {
    pub text: String,
    pub on_press: ActionDescriptor,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeight>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardData {
    pub on_press: ActionDescriptor,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_top: Option<i32>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub shadow: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OtpInputData {
    pub id: String,
    pub length: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub box_spacing: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub box_border_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub box_border_radius: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub box_background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub box_width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub box_height: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResendOtpData {
    /// Countdown in seconds before resending is allowed.
    pub timer: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin_top: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusBarData {
    pub background_color: String,
    pub style: StatusBarStyle,
}

/// Client-side redirect after `after` milliseconds; renders nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigateData {
    pub to: String,
    #[serde(default)]
    pub after: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModalData {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default = "visible_by_default")]
    pub visible: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation_type: Option<String>,
}

fn visible_by_default() -> bool {
    true
}

/// Payload variants keyed by the node's `type` tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodePayload {
    SafeArea(ViewStyle),
    Scroll(ViewStyle),
    View(ViewStyle),
    Text(TextData),
    Image(ImageData),
    Input(InputData),
    Button(ButtonData),
    Icon(IconData),
    IconButton(IconButtonData),
    TextButton(TextButtonData),
    PressableCard(CardData),
    OtpInput(OtpInputData),
    ResendOtp(ResendOtpData),
    StatusBar(StatusBarData),
    Navigate(NavigateData),
    Modal(ModalData),
}

impl NodePayload {
    pub fn kind(&self) -> &'static str {
        match self {
            NodePayload::SafeArea(_) => "SAFE_AREA",
            NodePayload::Scroll(_) => "SCROLL",
            NodePayload::View(_) => "VIEW",
            NodePayload::Text(_) => "TEXT",
            NodePayload::Image(_) => "IMAGE",
            NodePayload::Input(_) => "INPUT",
            NodePayload::Button(_) => "BUTTON",
            NodePayload::Icon(_) => "ICON",
            NodePayload::IconButton(_) => "ICON_BUTTON",
            NodePayload::TextButton(_) => "TEXT_BUTTON",
            NodePayload::PressableCard(_) => "PRESSABLE_CARD",
            NodePayload::OtpInput(_) => "OTP_INPUT",
            NodePayload::ResendOtp(_) => "RESEND_OTP",
            NodePayload::StatusBar(_) => "STATUS_BAR",
            NodePayload::Navigate(_) => "NAVIGATE",
            NodePayload::Modal(_) => "MODAL",
        }
    }

    /// The action descriptor this payload carries, for interactive kinds.
    pub fn action(&self) -> Option<&ActionDescriptor> {
        match self {
            NodePayload::Button(data) => Some(&data.action),
            NodePayload::IconButton(data) => Some(&data.on_press),
            NodePayload::TextButton(data) => Some(&data.on_press),
            NodePayload::PressableCard(data) => Some(&data.on_press),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiNode {
    #[serde(flatten)]
    pub payload: NodePayload,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<UiNode>,
}

impl UiNode {
    pub fn new(payload: NodePayload) -> Self {
        Self {
            payload,
            children: Vec::new(),
        }
    }

    pub fn safe_area(style: ViewStyle) -> Self {
        Self::new(NodePayload::SafeArea(style))
    }

    pub fn scroll(style: ViewStyle) -> Self {
        Self::new(NodePayload::Scroll(style))
    }

    pub fn view(style: ViewStyle) -> Self {
        Self::new(NodePayload::View(style))
    }

    pub fn text(data: TextData) -> Self {
        Self::new(NodePayload::Text(data))
    }

    pub fn image(data: ImageData) -> Self {
        Self::new(NodePayload::Image(data))
    }

    pub fn input(data: InputData) -> Self {
        Self::new(NodePayload::Input(data))
    }

    pub fn button(data: ButtonData) -> Self {
        Self::new(NodePayload::Button(data))
    }

    pub fn icon(data: IconData) -> Self {
        Self::new(NodePayload::Icon(data))
    }

    pub fn icon_button(data: IconButtonData) -> Self {
        Self::new(NodePayload::IconButton(data))
    }

    pub fn text_button(data: TextButtonData) -> Self {
        Self::new(NodePayload::TextButton(data))
    }

    pub fn pressable_card(data: CardData) -> Self {
        Self::new(NodePayload::PressableCard(data))
    }

    pub fn otp_input(data: OtpInputData) -> Self {
        Self::new(NodePayload::OtpInput(data))
    }

    pub fn resend_otp(data: ResendOtpData) -> Self {
        Self::new(NodePayload::ResendOtp(data))
    }

    pub fn status_bar(data: StatusBarData) -> Self {
        Self::new(NodePayload::StatusBar(data))
    }

    pub fn navigate(data: NavigateData) -> Self {
        Self::new(NodePayload::Navigate(data))
    }

    pub fn modal(data: ModalData) -> Self {
        Self::new(NodePayload::Modal(data))
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = UiNode>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn push_child(&mut self, child: UiNode) {
        self.children.push(child);
    }

    pub fn kind(&self) -> &'static str {
        self.payload.kind()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Pre-order traversal in rendering order.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a UiNode)) {
        visit(self);
        for child in &self.children {
            child.walk(visit);
        }
    }

    pub fn count_nodes(&self) -> usize {
        let mut count = 0;
        self.walk(&mut |_| count += 1);
        count
    }

    /// Every action descriptor in this subtree, in rendering order.
    pub fn actions(&self) -> Vec<&ActionDescriptor> {
        let mut actions = Vec::new();
        self.walk(&mut |node| {
            if let Some(action) = node.payload.action() {
                actions.push(action);
            }
        });
        actions
    }
}

#[cfg(test)]
#[path = "tests/ui_tests.rs"]
mod tests;
