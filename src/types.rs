use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::enums::*;
use crate::version::Version;

/// Value of the card-level `type` field.
pub const CARD_TYPE: &str = "AdaptiveCard";
/// Default value of the card-level `$schema` field.
pub const CARD_SCHEMA_URL: &str = "http://adaptivecards.io/schemas/adaptive-card.json";

fn default_card_type() -> String {
    CARD_TYPE.to_string()
}

fn default_card_schema() -> String {
    CARD_SCHEMA_URL.to_string()
}

// ─── Card ───────────────────────────────────────────────────────────────────

/// The root of an Adaptive Card document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    #[serde(rename = "type", default = "default_card_type")]
    pub card_type: String,
    #[serde(default)]
    pub version: Version,
    #[serde(rename = "$schema", default = "default_card_schema")]
    pub schema: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh: Option<Refresh>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication: Option<Authentication>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<Vec<CardItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<Action>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub select_action: Option<Box<Action>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_image: Option<BackgroundImageValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rtl: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speak: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical_content_alignment: Option<VerticalAlignment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msteams: Option<MsTeams>,
}

impl Default for Card {
    fn default() -> Self {
        Self {
            card_type: default_card_type(),
            version: Version::default(),
            schema: default_card_schema(),
            refresh: None,
            authentication: None,
            body: None,
            actions: None,
            select_action: None,
            fallback_text: None,
            background_image: None,
            metadata: None,
            min_height: None,
            rtl: None,
            speak: None,
            lang: None,
            vertical_content_alignment: None,
            msteams: None,
        }
    }
}

impl Card {
    pub fn new(version: Version) -> Self {
        Self {
            version,
            ..Self::default()
        }
    }
}

/// `backgroundImage` is either a bare URL or an object with fill options.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BackgroundImageValue {
    Url(String),
    Image(BackgroundImage),
}

impl From<&str> for BackgroundImageValue {
    fn from(url: &str) -> Self {
        BackgroundImageValue::Url(url.to_string())
    }
}

impl From<BackgroundImage> for BackgroundImageValue {
    fn from(image: BackgroundImage) -> Self {
        BackgroundImageValue::Image(image)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundImage {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_mode: Option<ImageFillMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizontal_alignment: Option<HorizontalAlignment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical_alignment: Option<VerticalAlignment>,
}

/// Automatic refresh of the card through an `Action.Execute`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Refresh {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<Box<Action>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_ids: Option<Vec<String>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Authentication {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_exchange_resource: Option<TokenExchangeResource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buttons: Option<Vec<AuthCardButton>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenExchangeResource {
    pub id: String,
    pub uri: String,
    pub provider_id: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthCardButton {
    #[serde(rename = "type")]
    pub button_type: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_url: Option<String>,
}

/// Host-specific block read by Microsoft Teams.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MsTeams {
    pub width: MsTeamsWidth,
}

// ─── Card items ─────────────────────────────────────────────────────────────

/// An entry of a card body or container: element, container or input.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CardItem {
    TextBlock(TextBlock),
    Image(Image),
    Media(Media),
    RichTextBlock(RichTextBlock),
    ActionSet(ActionSet),
    Container(Container),
    ColumnSet(ColumnSet),
    FactSet(FactSet),
    ImageSet(ImageSet),
    Table(Table),
    #[serde(rename = "Input.Text")]
    InputText(InputText),
    #[serde(rename = "Input.Number")]
    InputNumber(InputNumber),
    #[serde(rename = "Input.Date")]
    InputDate(InputDate),
    #[serde(rename = "Input.Time")]
    InputTime(InputTime),
    #[serde(rename = "Input.Toggle")]
    InputToggle(InputToggle),
    #[serde(rename = "Input.ChoiceSet")]
    InputChoiceSet(InputChoiceSet),
}

impl CardItem {
    /// The item's `id`, if it has one. Inputs always do.
    pub fn id(&self) -> Option<&str> {
        match self {
            CardItem::TextBlock(x) => x.common.id.as_deref(),
            CardItem::Image(x) => x.common.id.as_deref(),
            CardItem::Media(x) => x.common.id.as_deref(),
            CardItem::RichTextBlock(x) => x.common.id.as_deref(),
            CardItem::ActionSet(x) => x.common.id.as_deref(),
            CardItem::Container(x) => x.common.id.as_deref(),
            CardItem::ColumnSet(x) => x.common.id.as_deref(),
            CardItem::FactSet(x) => x.common.id.as_deref(),
            CardItem::ImageSet(x) => x.common.id.as_deref(),
            CardItem::Table(x) => x.common.id.as_deref(),
            CardItem::InputText(x) => Some(&x.common.id),
            CardItem::InputNumber(x) => Some(&x.common.id),
            CardItem::InputDate(x) => Some(&x.common.id),
            CardItem::InputTime(x) => Some(&x.common.id),
            CardItem::InputToggle(x) => Some(&x.common.id),
            CardItem::InputChoiceSet(x) => Some(&x.common.id),
        }
    }
}

macro_rules! impl_from_item {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for CardItem {
                fn from(item: $ty) -> Self {
                    CardItem::$variant(item)
                }
            }
        )*
    };
}

impl_from_item! {
    TextBlock => TextBlock,
    Image => Image,
    Media => Media,
    RichTextBlock => RichTextBlock,
    ActionSet => ActionSet,
    Container => Container,
    ColumnSet => ColumnSet,
    FactSet => FactSet,
    ImageSet => ImageSet,
    Table => Table,
    InputText => InputText,
    InputNumber => InputNumber,
    InputDate => InputDate,
    InputTime => InputTime,
    InputToggle => InputToggle,
    InputChoiceSet => InputChoiceSet,
}

/// Properties shared by every element and container.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementProps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub separator: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing: Option<Spacing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_visible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requires: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<BlockElementHeight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback: Option<Box<CardItem>>,
}

// ─── Elements ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextBlock {
    pub text: String,
    #[serde(flatten)]
    pub common: ElementProps,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Colors>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_type: Option<FontType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizontal_alignment: Option<HorizontalAlignment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_subtle: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_lines: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<FontSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<FontWeight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wrap: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<TextBlockStyle>,
}

impl TextBlock {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub url: String,
    #[serde(flatten)]
    pub common: ElementProps,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizontal_alignment: Option<HorizontalAlignment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub select_action: Option<Box<Action>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<ImageSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<ImageStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
}

impl Image {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    pub sources: Vec<MediaSource>,
    #[serde(flatten)]
    pub common: ElementProps,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption_sources: Option<Vec<CaptionSource>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaSource {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionSource {
    pub mime_type: String,
    pub url: String,
    pub label: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RichTextBlock {
    pub inlines: Vec<Inline>,
    #[serde(flatten)]
    pub common: ElementProps,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizontal_alignment: Option<HorizontalAlignment>,
}

/// A rich-text inline: plain string or a styled run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Inline {
    Text(String),
    Run(TextRun),
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct TextRun {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Colors>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_type: Option<FontType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_subtle: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub select_action: Option<Box<Action>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<FontSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strikethrough: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub underline: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<FontWeight>,
}

// ─── Containers ─────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionSet {
    pub actions: Vec<Action>,
    #[serde(flatten)]
    pub common: ElementProps,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Container {
    pub items: Vec<CardItem>,
    #[serde(flatten)]
    pub common: ElementProps,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub select_action: Option<Box<Action>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<ContainerStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical_content_alignment: Option<VerticalAlignment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bleed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_image: Option<BackgroundImageValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rtl: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnSet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<Column>>,
    #[serde(flatten)]
    pub common: ElementProps,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub select_action: Option<Box<Action>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<ContainerStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bleed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizontal_alignment: Option<HorizontalAlignment>,
}

/// Column width: a relative weight or `auto` / `stretch` / `<n>px`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColumnWidth {
    Weight(u32),
    Named(String),
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct Column {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<CardItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_image: Option<BackgroundImageValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bleed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rtl: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub select_action: Option<Box<Action>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<ContainerStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical_content_alignment: Option<VerticalAlignment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<ColumnWidth>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub separator: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing: Option<Spacing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_visible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requires: Option<BTreeMap<String, String>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactSet {
    pub facts: Vec<Fact>,
    #[serde(flatten)]
    pub common: ElementProps,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Fact {
    pub title: String,
    pub value: String,
}

impl Fact {
    pub fn new(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageSet {
    #[serde(serialize_with = "tagged_images::serialize")]
    pub images: Vec<Image>,
    #[serde(flatten)]
    pub common: ElementProps,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_size: Option<ImageSize>,
}

/// Images inside an `ImageSet` carry their own `"type": "Image"` tag.
mod tagged_images {
    use serde::ser::{SerializeSeq, Serializer};
    use serde::Serialize;

    use super::Image;

    #[derive(Serialize)]
    #[serde(tag = "type")]
    enum Tagged<'a> {
        Image(&'a Image),
    }

    pub fn serialize<S: Serializer>(images: &[Image], serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(images.len()))?;
        for image in images {
            seq.serialize_element(&Tagged::Image(image))?;
        }
        seq.end()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<TableColumnDefinition>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<Vec<TableRow>>,
    #[serde(flatten)]
    pub common: ElementProps,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_row_as_header: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_grid_lines: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_style: Option<ContainerStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizontal_cell_content_alignment: Option<HorizontalAlignment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical_cell_content_alignment: Option<VerticalAlignment>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableColumnDefinition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<ColumnWidth>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizontal_cell_content_alignment: Option<HorizontalAlignment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical_cell_content_alignment: Option<VerticalAlignment>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct TableRow {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cells: Option<Vec<TableCell>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizontal_cell_content_alignment: Option<HorizontalAlignment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical_cell_content_alignment: Option<VerticalAlignment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<ContainerStyle>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct TableCell {
    pub items: Vec<CardItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub select_action: Option<Box<Action>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<ContainerStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical_content_alignment: Option<VerticalAlignment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bleed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_image: Option<BackgroundImageValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rtl: Option<bool>,
}

// ─── Inputs ─────────────────────────────────────────────────────────────────

/// Properties shared by every input. Inputs must carry an `id`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputProps {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub separator: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing: Option<Spacing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_visible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requires: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<BlockElementHeight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback: Option<Box<CardItem>>,
}

impl InputProps {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputText {
    #[serde(flatten)]
    pub common: InputProps,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_multiline: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regex: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<TextInputStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_action: Option<Box<Action>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Numeric input. Bounds and value keep their JSON spelling, so `5` is
/// written back as `5` and not `5.0`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputNumber {
    #[serde(flatten)]
    pub common: InputProps,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Number>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDate {
    #[serde(flatten)]
    pub common: InputProps,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputTime {
    #[serde(flatten)]
    pub common: InputProps,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputToggle {
    #[serde(flatten)]
    pub common: InputProps,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_off: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_on: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wrap: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputChoiceSet {
    #[serde(flatten)]
    pub common: InputProps,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<InputChoice>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_multi_select: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<ChoiceInputStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wrap: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InputChoice {
    pub title: String,
    pub value: String,
}

// ─── Actions ────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Action {
    #[serde(rename = "Action.OpenUrl")]
    OpenUrl(ActionOpenUrl),
    #[serde(rename = "Action.Submit")]
    Submit(ActionSubmit),
    #[serde(rename = "Action.ShowCard")]
    ShowCard(ActionShowCard),
    #[serde(rename = "Action.ToggleVisibility")]
    ToggleVisibility(ActionToggleVisibility),
    #[serde(rename = "Action.Execute")]
    Execute(ActionExecute),
}

impl Action {
    pub fn common(&self) -> &ActionProps {
        match self {
            Action::OpenUrl(a) => &a.common,
            Action::Submit(a) => &a.common,
            Action::ShowCard(a) => &a.common,
            Action::ToggleVisibility(a) => &a.common,
            Action::Execute(a) => &a.common,
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.common().id.as_deref()
    }
}

impl From<ActionOpenUrl> for Action {
    fn from(action: ActionOpenUrl) -> Self {
        Action::OpenUrl(action)
    }
}

impl From<ActionSubmit> for Action {
    fn from(action: ActionSubmit) -> Self {
        Action::Submit(action)
    }
}

impl From<ActionShowCard> for Action {
    fn from(action: ActionShowCard) -> Self {
        Action::ShowCard(action)
    }
}

impl From<ActionToggleVisibility> for Action {
    fn from(action: ActionToggleVisibility) -> Self {
        Action::ToggleVisibility(action)
    }
}

impl From<ActionExecute> for Action {
    fn from(action: ActionExecute) -> Self {
        Action::Execute(action)
    }
}

/// Properties shared by every action.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionProps {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<ActionStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback: Option<Box<Action>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<ActionMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requires: Option<BTreeMap<String, String>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionOpenUrl {
    pub url: String,
    #[serde(flatten)]
    pub common: ActionProps,
}

impl ActionOpenUrl {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            common: ActionProps::default(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionSubmit {
    #[serde(flatten)]
    pub common: ActionProps,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub associated_inputs: Option<AssociatedInputs>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionShowCard {
    #[serde(flatten)]
    pub common: ActionProps,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<Box<Card>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionToggleVisibility {
    pub target_elements: Vec<TargetElement>,
    #[serde(flatten)]
    pub common: ActionProps,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetElement {
    pub element_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_visible: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionExecute {
    #[serde(flatten)]
    pub common: ActionProps,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verb: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub associated_inputs: Option<AssociatedInputs>,
}
