//! Per-type field descriptors.
//!
//! Every node in the card model lists its declared fields together with the
//! minimum schema version that introduced each one. The walker, the version
//! checker and update-by-id all read the model through this table instead of
//! matching on concrete types.

use std::borrow::Cow;
use std::fmt;

use crate::types::*;
use crate::version::*;

/// A node of the card tree that can describe its own fields.
pub trait Node {
    /// Wire-level type name, e.g. `TextBlock` or `Action.Submit`.
    fn type_name(&self) -> &'static str;

    /// Declared fields in declaration order, including absent ones.
    fn fields(&self) -> Vec<Field<'_>>;
}

/// Value carried by a declared field.
#[derive(Clone)]
pub enum FieldValue<'a> {
    Absent,
    Scalar,
    Node(&'a dyn Node),
    Nodes(Vec<&'a dyn Node>),
}

impl fmt::Debug for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Absent => f.write_str("Absent"),
            FieldValue::Scalar => f.write_str("Scalar"),
            FieldValue::Node(node) => write!(f, "Node({})", node.type_name()),
            FieldValue::Nodes(nodes) => f
                .debug_list()
                .entries(nodes.iter().map(|n| n.type_name()))
                .finish(),
        }
    }
}

/// One declared field of a node.
#[derive(Clone, Debug)]
pub struct Field<'a> {
    /// Rust-side field name (`font_type`).
    pub name: &'static str,
    /// Wire name when it is not the camelCase form of `name`.
    pub rename: Option<&'static str>,
    /// First schema version that defines this field.
    pub since: Version,
    pub value: FieldValue<'a>,
}

impl<'a> Field<'a> {
    pub fn scalar<T>(name: &'static str, since: Version, value: &Option<T>) -> Self {
        let value = match value {
            Some(_) => FieldValue::Scalar,
            None => FieldValue::Absent,
        };
        Self {
            name,
            rename: None,
            since,
            value,
        }
    }

    /// A scalar that is always present on the wire.
    pub fn required(name: &'static str, since: Version) -> Self {
        Self {
            name,
            rename: None,
            since,
            value: FieldValue::Scalar,
        }
    }

    pub fn node<N: Node>(name: &'static str, since: Version, value: Option<&'a N>) -> Self {
        let value = match value {
            Some(node) => FieldValue::Node(node),
            None => FieldValue::Absent,
        };
        Self {
            name,
            rename: None,
            since,
            value,
        }
    }

    pub fn nodes<N: Node>(name: &'static str, since: Version, values: Option<&'a [N]>) -> Self {
        let value = match values {
            Some(values) => FieldValue::Nodes(values.iter().map(|n| n as &dyn Node).collect()),
            None => FieldValue::Absent,
        };
        Self {
            name,
            rename: None,
            since,
            value,
        }
    }

    /// A present sequence whose children are already erased.
    pub fn sequence(name: &'static str, since: Version, values: Vec<&'a dyn Node>) -> Self {
        Self {
            name,
            rename: None,
            since,
            value: FieldValue::Nodes(values),
        }
    }

    pub fn renamed(mut self, wire_name: &'static str) -> Self {
        self.rename = Some(wire_name);
        self
    }

    pub fn is_present(&self) -> bool {
        !matches!(self.value, FieldValue::Absent)
    }

    /// Name of this field in the JSON wire format.
    pub fn wire_name(&self) -> Cow<'static, str> {
        match self.rename {
            Some(name) => Cow::Borrowed(name),
            None => to_camel_case(self.name),
        }
    }
}

fn to_camel_case(name: &'static str) -> Cow<'static, str> {
    if !name.contains('_') {
        return Cow::Borrowed(name);
    }
    let mut out = String::with_capacity(name.len());
    let mut upper = false;
    for ch in name.chars() {
        if ch == '_' {
            upper = true;
        } else if upper {
            out.extend(ch.to_uppercase());
            upper = false;
        } else {
            out.push(ch);
        }
    }
    Cow::Owned(out)
}

/// Minimum schema version of `field` on `node`, or `None` if the node does
/// not declare it.
pub fn minimum_version(node: &dyn Node, field: &str) -> Option<Version> {
    node.fields()
        .into_iter()
        .find(|f| f.name == field)
        .map(|f| f.since)
}

/// Explicit wire-name override of `field` on `node`, if it has one.
pub fn serialization_name(node: &dyn Node, field: &str) -> Option<&'static str> {
    node.fields()
        .into_iter()
        .find(|f| f.name == field)
        .and_then(|f| f.rename)
}

fn background_image(since: Version, value: &Option<BackgroundImageValue>) -> Field<'_> {
    match value {
        Some(BackgroundImageValue::Image(image)) => {
            Field::node("background_image", since, Some(image))
        }
        other => Field::scalar("background_image", since, other),
    }
}

// ─── Card ───────────────────────────────────────────────────────────────────

impl Node for Card {
    fn type_name(&self) -> &'static str {
        CARD_TYPE
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::required("type", V1_0),
            Field::required("version", V1_0),
            Field::required("schema", V1_0).renamed("$schema"),
            Field::node("refresh", V1_4, self.refresh.as_ref()),
            Field::node("authentication", V1_4, self.authentication.as_ref()),
            Field::nodes("body", V1_0, self.body.as_deref()),
            Field::nodes("actions", V1_0, self.actions.as_deref()),
            Field::node("select_action", V1_1, self.select_action.as_deref()),
            Field::scalar("fallback_text", V1_0, &self.fallback_text),
            background_image(V1_0, &self.background_image),
            Field::node("metadata", V1_6, self.metadata.as_ref()),
            Field::scalar("min_height", V1_2, &self.min_height),
            Field::scalar("rtl", V1_5, &self.rtl),
            Field::scalar("speak", V1_0, &self.speak),
            Field::scalar("lang", V1_0, &self.lang),
            Field::scalar(
                "vertical_content_alignment",
                V1_1,
                &self.vertical_content_alignment,
            ),
            Field::node("msteams", V1_0, self.msteams.as_ref()),
        ]
    }
}

impl Node for BackgroundImage {
    fn type_name(&self) -> &'static str {
        "BackgroundImage"
    }

    fn fields(&self) -> Vec<Field<'_>> {
        // The object form of `backgroundImage` arrived in 1.2.
        vec![
            Field::required("url", V1_2),
            Field::scalar("fill_mode", V1_2, &self.fill_mode),
            Field::scalar("horizontal_alignment", V1_2, &self.horizontal_alignment),
            Field::scalar("vertical_alignment", V1_2, &self.vertical_alignment),
        ]
    }
}

impl Node for Refresh {
    fn type_name(&self) -> &'static str {
        "Refresh"
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::node("action", V1_4, self.action.as_deref()),
            Field::scalar("expires", V1_6, &self.expires),
            Field::scalar("user_ids", V1_4, &self.user_ids),
        ]
    }
}

impl Node for Authentication {
    fn type_name(&self) -> &'static str {
        "Authentication"
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::scalar("text", V1_4, &self.text),
            Field::scalar("connection_name", V1_4, &self.connection_name),
            Field::node(
                "token_exchange_resource",
                V1_4,
                self.token_exchange_resource.as_ref(),
            ),
            Field::nodes("buttons", V1_4, self.buttons.as_deref()),
        ]
    }
}

impl Node for TokenExchangeResource {
    fn type_name(&self) -> &'static str {
        "TokenExchangeResource"
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::required("id", V1_4),
            Field::required("uri", V1_4),
            Field::required("provider_id", V1_4),
        ]
    }
}

impl Node for AuthCardButton {
    fn type_name(&self) -> &'static str {
        "AuthCardButton"
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::required("type", V1_4),
            Field::required("value", V1_4),
            Field::scalar("title", V1_4, &self.title),
            Field::scalar("image", V1_4, &self.image),
        ]
    }
}

impl Node for Metadata {
    fn type_name(&self) -> &'static str {
        "Metadata"
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![Field::scalar("web_url", V1_6, &self.web_url)]
    }
}

impl Node for MsTeams {
    fn type_name(&self) -> &'static str {
        "MsTeams"
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![Field::required("width", V1_0)]
    }
}

// ─── Card items ─────────────────────────────────────────────────────────────

impl CardItem {
    fn as_node(&self) -> &dyn Node {
        match self {
            CardItem::TextBlock(x) => x,
            CardItem::Image(x) => x,
            CardItem::Media(x) => x,
            CardItem::RichTextBlock(x) => x,
            CardItem::ActionSet(x) => x,
            CardItem::Container(x) => x,
            CardItem::ColumnSet(x) => x,
            CardItem::FactSet(x) => x,
            CardItem::ImageSet(x) => x,
            CardItem::Table(x) => x,
            CardItem::InputText(x) => x,
            CardItem::InputNumber(x) => x,
            CardItem::InputDate(x) => x,
            CardItem::InputTime(x) => x,
            CardItem::InputToggle(x) => x,
            CardItem::InputChoiceSet(x) => x,
        }
    }
}

impl Node for CardItem {
    fn type_name(&self) -> &'static str {
        self.as_node().type_name()
    }

    fn fields(&self) -> Vec<Field<'_>> {
        self.as_node().fields()
    }
}

impl ElementProps {
    fn fields(&self) -> [Field<'_>; 7] {
        [
            Field::scalar("id", V1_0, &self.id),
            Field::scalar("separator", V1_0, &self.separator),
            Field::scalar("spacing", V1_0, &self.spacing),
            Field::scalar("is_visible", V1_2, &self.is_visible),
            Field::scalar("requires", V1_2, &self.requires),
            Field::scalar("height", V1_1, &self.height),
            Field::node("fallback", V1_2, self.fallback.as_deref()),
        ]
    }
}

impl Node for TextBlock {
    fn type_name(&self) -> &'static str {
        "TextBlock"
    }

    fn fields(&self) -> Vec<Field<'_>> {
        let mut fields = vec![
            Field::required("type", V1_0),
            Field::required("text", V1_0),
            Field::scalar("color", V1_0, &self.color),
            Field::scalar("font_type", V1_2, &self.font_type),
            Field::scalar("horizontal_alignment", V1_0, &self.horizontal_alignment),
            Field::scalar("is_subtle", V1_0, &self.is_subtle),
            Field::scalar("max_lines", V1_0, &self.max_lines),
            Field::scalar("size", V1_0, &self.size),
            Field::scalar("weight", V1_0, &self.weight),
            Field::scalar("wrap", V1_0, &self.wrap),
            Field::scalar("style", V1_5, &self.style),
        ];
        fields.extend(self.common.fields());
        fields
    }
}

impl Node for Image {
    fn type_name(&self) -> &'static str {
        "Image"
    }

    fn fields(&self) -> Vec<Field<'_>> {
        let mut fields = vec![
            Field::required("type", V1_0),
            Field::required("url", V1_0),
            Field::scalar("alt_text", V1_0, &self.alt_text),
            Field::scalar("background_color", V1_1, &self.background_color),
            Field::scalar("horizontal_alignment", V1_0, &self.horizontal_alignment),
            Field::node("select_action", V1_1, self.select_action.as_deref()),
            Field::scalar("size", V1_0, &self.size),
            Field::scalar("style", V1_0, &self.style),
            Field::scalar("width", V1_1, &self.width),
        ];
        fields.extend(self.common.fields());
        fields
    }
}

impl Node for Media {
    fn type_name(&self) -> &'static str {
        "Media"
    }

    fn fields(&self) -> Vec<Field<'_>> {
        let mut fields = vec![
            Field::required("type", V1_1),
            Field::nodes("sources", V1_1, Some(self.sources.as_slice())),
            Field::scalar("poster", V1_1, &self.poster),
            Field::scalar("alt_text", V1_1, &self.alt_text),
            Field::nodes("caption_sources", V1_6, self.caption_sources.as_deref()),
        ];
        fields.extend(self.common.fields());
        fields
    }
}

impl Node for MediaSource {
    fn type_name(&self) -> &'static str {
        "MediaSource"
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::required("url", V1_1),
            Field::scalar("mime_type", V1_1, &self.mime_type),
        ]
    }
}

impl Node for CaptionSource {
    fn type_name(&self) -> &'static str {
        "CaptionSource"
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::required("mime_type", V1_6),
            Field::required("url", V1_6),
            Field::required("label", V1_6),
        ]
    }
}

impl Node for RichTextBlock {
    fn type_name(&self) -> &'static str {
        "RichTextBlock"
    }

    fn fields(&self) -> Vec<Field<'_>> {
        let runs = self
            .inlines
            .iter()
            .filter_map(|inline| match inline {
                Inline::Run(run) => Some(run as &dyn Node),
                Inline::Text(_) => None,
            })
            .collect();
        let mut fields = vec![
            Field::required("type", V1_2),
            Field::sequence("inlines", V1_2, runs),
            Field::scalar("horizontal_alignment", V1_2, &self.horizontal_alignment),
        ];
        fields.extend(self.common.fields());
        fields
    }
}

impl Node for TextRun {
    fn type_name(&self) -> &'static str {
        "TextRun"
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::required("type", V1_2),
            Field::required("text", V1_2),
            Field::scalar("color", V1_2, &self.color),
            Field::scalar("font_type", V1_2, &self.font_type),
            Field::scalar("highlight", V1_2, &self.highlight),
            Field::scalar("is_subtle", V1_2, &self.is_subtle),
            Field::scalar("italic", V1_2, &self.italic),
            Field::node("select_action", V1_2, self.select_action.as_deref()),
            Field::scalar("size", V1_2, &self.size),
            Field::scalar("strikethrough", V1_2, &self.strikethrough),
            Field::scalar("underline", V1_3, &self.underline),
            Field::scalar("weight", V1_2, &self.weight),
        ]
    }
}

impl Node for ActionSet {
    fn type_name(&self) -> &'static str {
        "ActionSet"
    }

    fn fields(&self) -> Vec<Field<'_>> {
        let mut fields = vec![
            Field::required("type", V1_2),
            Field::nodes("actions", V1_2, Some(self.actions.as_slice())),
        ];
        fields.extend(self.common.fields());
        fields
    }
}

impl Node for Container {
    fn type_name(&self) -> &'static str {
        "Container"
    }

    fn fields(&self) -> Vec<Field<'_>> {
        let mut fields = vec![
            Field::required("type", V1_0),
            Field::nodes("items", V1_0, Some(self.items.as_slice())),
            Field::node("select_action", V1_1, self.select_action.as_deref()),
            Field::scalar("style", V1_0, &self.style),
            Field::scalar(
                "vertical_content_alignment",
                V1_1,
                &self.vertical_content_alignment,
            ),
            Field::scalar("bleed", V1_2, &self.bleed),
            background_image(V1_2, &self.background_image),
            Field::scalar("min_height", V1_2, &self.min_height),
            Field::scalar("rtl", V1_5, &self.rtl),
        ];
        fields.extend(self.common.fields());
        fields
    }
}

impl Node for ColumnSet {
    fn type_name(&self) -> &'static str {
        "ColumnSet"
    }

    fn fields(&self) -> Vec<Field<'_>> {
        let mut fields = vec![
            Field::required("type", V1_0),
            Field::nodes("columns", V1_0, self.columns.as_deref()),
            Field::node("select_action", V1_1, self.select_action.as_deref()),
            Field::scalar("style", V1_2, &self.style),
            Field::scalar("bleed", V1_2, &self.bleed),
            Field::scalar("min_height", V1_2, &self.min_height),
            Field::scalar("horizontal_alignment", V1_0, &self.horizontal_alignment),
        ];
        fields.extend(self.common.fields());
        fields
    }
}

impl Node for Column {
    fn type_name(&self) -> &'static str {
        "Column"
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::required("type", V1_0),
            Field::nodes("items", V1_0, self.items.as_deref()),
            background_image(V1_2, &self.background_image),
            Field::scalar("bleed", V1_2, &self.bleed),
            Field::scalar("min_height", V1_2, &self.min_height),
            Field::scalar("rtl", V1_5, &self.rtl),
            Field::node("select_action", V1_1, self.select_action.as_deref()),
            Field::scalar("style", V1_0, &self.style),
            Field::scalar(
                "vertical_content_alignment",
                V1_1,
                &self.vertical_content_alignment,
            ),
            Field::scalar("width", V1_0, &self.width),
            Field::scalar("id", V1_0, &self.id),
            Field::scalar("separator", V1_0, &self.separator),
            Field::scalar("spacing", V1_0, &self.spacing),
            Field::scalar("is_visible", V1_2, &self.is_visible),
            Field::scalar("requires", V1_2, &self.requires),
        ]
    }
}

impl Node for FactSet {
    fn type_name(&self) -> &'static str {
        "FactSet"
    }

    fn fields(&self) -> Vec<Field<'_>> {
        let mut fields = vec![
            Field::required("type", V1_0),
            Field::nodes("facts", V1_0, Some(self.facts.as_slice())),
        ];
        fields.extend(self.common.fields());
        fields
    }
}

impl Node for Fact {
    fn type_name(&self) -> &'static str {
        "Fact"
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::required("title", V1_0),
            Field::required("value", V1_0),
        ]
    }
}

impl Node for ImageSet {
    fn type_name(&self) -> &'static str {
        "ImageSet"
    }

    fn fields(&self) -> Vec<Field<'_>> {
        let mut fields = vec![
            Field::required("type", V1_0),
            Field::nodes("images", V1_0, Some(self.images.as_slice())),
            Field::scalar("image_size", V1_0, &self.image_size),
        ];
        fields.extend(self.common.fields());
        fields
    }
}

impl Node for Table {
    fn type_name(&self) -> &'static str {
        "Table"
    }

    fn fields(&self) -> Vec<Field<'_>> {
        let mut fields = vec![
            Field::required("type", V1_5),
            Field::nodes("columns", V1_5, self.columns.as_deref()),
            Field::nodes("rows", V1_5, self.rows.as_deref()),
            Field::scalar("first_row_as_header", V1_5, &self.first_row_as_header),
            Field::scalar("show_grid_lines", V1_5, &self.show_grid_lines),
            Field::scalar("grid_style", V1_5, &self.grid_style),
            Field::scalar(
                "horizontal_cell_content_alignment",
                V1_5,
                &self.horizontal_cell_content_alignment,
            ),
            Field::scalar(
                "vertical_cell_content_alignment",
                V1_5,
                &self.vertical_cell_content_alignment,
            ),
        ];
        fields.extend(self.common.fields());
        fields
    }
}

impl Node for TableColumnDefinition {
    fn type_name(&self) -> &'static str {
        "TableColumnDefinition"
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::scalar("width", V1_5, &self.width),
            Field::scalar(
                "horizontal_cell_content_alignment",
                V1_5,
                &self.horizontal_cell_content_alignment,
            ),
            Field::scalar(
                "vertical_cell_content_alignment",
                V1_5,
                &self.vertical_cell_content_alignment,
            ),
        ]
    }
}

impl Node for TableRow {
    fn type_name(&self) -> &'static str {
        "TableRow"
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::required("type", V1_5),
            Field::nodes("cells", V1_5, self.cells.as_deref()),
            Field::scalar(
                "horizontal_cell_content_alignment",
                V1_5,
                &self.horizontal_cell_content_alignment,
            ),
            Field::scalar(
                "vertical_cell_content_alignment",
                V1_5,
                &self.vertical_cell_content_alignment,
            ),
            Field::scalar("style", V1_5, &self.style),
        ]
    }
}

impl Node for TableCell {
    fn type_name(&self) -> &'static str {
        "TableCell"
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::required("type", V1_5),
            Field::nodes("items", V1_5, Some(self.items.as_slice())),
            Field::node("select_action", V1_1, self.select_action.as_deref()),
            Field::scalar("style", V1_5, &self.style),
            Field::scalar(
                "vertical_content_alignment",
                V1_1,
                &self.vertical_content_alignment,
            ),
            Field::scalar("bleed", V1_2, &self.bleed),
            background_image(V1_2, &self.background_image),
            Field::scalar("min_height", V1_2, &self.min_height),
            Field::scalar("rtl", V1_5, &self.rtl),
        ]
    }
}

// ─── Inputs ─────────────────────────────────────────────────────────────────

impl InputProps {
    fn fields(&self) -> [Field<'_>; 10] {
        [
            Field::required("id", V1_0),
            Field::scalar("label", V1_3, &self.label),
            Field::scalar("is_required", V1_3, &self.is_required),
            Field::scalar("error_message", V1_3, &self.error_message),
            Field::scalar("separator", V1_0, &self.separator),
            Field::scalar("spacing", V1_0, &self.spacing),
            Field::scalar("is_visible", V1_2, &self.is_visible),
            Field::scalar("requires", V1_2, &self.requires),
            Field::scalar("height", V1_1, &self.height),
            Field::node("fallback", V1_2, self.fallback.as_deref()),
        ]
    }
}

impl Node for InputText {
    fn type_name(&self) -> &'static str {
        "Input.Text"
    }

    fn fields(&self) -> Vec<Field<'_>> {
        let mut fields = vec![Field::required("type", V1_0)];
        fields.extend(self.common.fields());
        fields.extend([
            Field::scalar("is_multiline", V1_0, &self.is_multiline),
            Field::scalar("max_length", V1_0, &self.max_length),
            Field::scalar("placeholder", V1_0, &self.placeholder),
            Field::scalar("regex", V1_3, &self.regex),
            Field::scalar("style", V1_0, &self.style),
            Field::node("inline_action", V1_2, self.inline_action.as_deref()),
            Field::scalar("value", V1_0, &self.value),
        ]);
        fields
    }
}

impl Node for InputNumber {
    fn type_name(&self) -> &'static str {
        "Input.Number"
    }

    fn fields(&self) -> Vec<Field<'_>> {
        let mut fields = vec![Field::required("type", V1_0)];
        fields.extend(self.common.fields());
        fields.extend([
            Field::scalar("max", V1_0, &self.max),
            Field::scalar("min", V1_0, &self.min),
            Field::scalar("placeholder", V1_0, &self.placeholder),
            Field::scalar("value", V1_0, &self.value),
        ]);
        fields
    }
}

impl Node for InputDate {
    fn type_name(&self) -> &'static str {
        "Input.Date"
    }

    fn fields(&self) -> Vec<Field<'_>> {
        let mut fields = vec![Field::required("type", V1_0)];
        fields.extend(self.common.fields());
        fields.extend([
            Field::scalar("max", V1_0, &self.max),
            Field::scalar("min", V1_0, &self.min),
            Field::scalar("placeholder", V1_0, &self.placeholder),
            Field::scalar("value", V1_0, &self.value),
        ]);
        fields
    }
}

impl Node for InputTime {
    fn type_name(&self) -> &'static str {
        "Input.Time"
    }

    fn fields(&self) -> Vec<Field<'_>> {
        let mut fields = vec![Field::required("type", V1_0)];
        fields.extend(self.common.fields());
        fields.extend([
            Field::scalar("max", V1_0, &self.max),
            Field::scalar("min", V1_0, &self.min),
            Field::scalar("placeholder", V1_0, &self.placeholder),
            Field::scalar("value", V1_0, &self.value),
        ]);
        fields
    }
}

impl Node for InputToggle {
    fn type_name(&self) -> &'static str {
        "Input.Toggle"
    }

    fn fields(&self) -> Vec<Field<'_>> {
        let mut fields = vec![Field::required("type", V1_0)];
        fields.extend(self.common.fields());
        fields.extend([
            Field::required("title", V1_0),
            Field::scalar("value", V1_0, &self.value),
            Field::scalar("value_off", V1_0, &self.value_off),
            Field::scalar("value_on", V1_0, &self.value_on),
            Field::scalar("wrap", V1_2, &self.wrap),
        ]);
        fields
    }
}

impl Node for InputChoiceSet {
    fn type_name(&self) -> &'static str {
        "Input.ChoiceSet"
    }

    fn fields(&self) -> Vec<Field<'_>> {
        let mut fields = vec![Field::required("type", V1_0)];
        fields.extend(self.common.fields());
        fields.extend([
            Field::nodes("choices", V1_0, self.choices.as_deref()),
            Field::scalar("is_multi_select", V1_0, &self.is_multi_select),
            Field::scalar("style", V1_0, &self.style),
            Field::scalar("value", V1_0, &self.value),
            Field::scalar("placeholder", V1_0, &self.placeholder),
            Field::scalar("wrap", V1_2, &self.wrap),
        ]);
        fields
    }
}

impl Node for InputChoice {
    fn type_name(&self) -> &'static str {
        "Input.Choice"
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::required("title", V1_0),
            Field::required("value", V1_0),
        ]
    }
}

// ─── Actions ────────────────────────────────────────────────────────────────

impl Node for Action {
    fn type_name(&self) -> &'static str {
        match self {
            Action::OpenUrl(_) => "Action.OpenUrl",
            Action::Submit(_) => "Action.Submit",
            Action::ShowCard(_) => "Action.ShowCard",
            Action::ToggleVisibility(_) => "Action.ToggleVisibility",
            Action::Execute(_) => "Action.Execute",
        }
    }

    fn fields(&self) -> Vec<Field<'_>> {
        let (tag_since, common) = match self {
            Action::OpenUrl(a) => (V1_0, &a.common),
            Action::Submit(a) => (V1_0, &a.common),
            Action::ShowCard(a) => (V1_0, &a.common),
            Action::ToggleVisibility(a) => (V1_2, &a.common),
            Action::Execute(a) => (V1_4, &a.common),
        };
        let mut fields = vec![Field::required("type", tag_since)];
        match self {
            Action::OpenUrl(_) => fields.push(Field::required("url", V1_0)),
            Action::Submit(a) => fields.extend([
                Field::scalar("data", V1_0, &a.data),
                Field::scalar("associated_inputs", V1_3, &a.associated_inputs),
            ]),
            Action::ShowCard(a) => fields.push(Field::node("card", V1_0, a.card.as_deref())),
            Action::ToggleVisibility(a) => fields.push(Field::nodes(
                "target_elements",
                V1_2,
                Some(a.target_elements.as_slice()),
            )),
            Action::Execute(a) => fields.extend([
                Field::scalar("verb", V1_4, &a.verb),
                Field::scalar("data", V1_4, &a.data),
                Field::scalar("associated_inputs", V1_4, &a.associated_inputs),
            ]),
        }
        fields.extend(common.fields());
        fields
    }
}

impl ActionProps {
    fn fields(&self) -> [Field<'_>; 9] {
        [
            Field::scalar("title", V1_0, &self.title),
            Field::scalar("icon_url", V1_1, &self.icon_url),
            Field::scalar("id", V1_0, &self.id),
            Field::scalar("style", V1_2, &self.style),
            Field::node("fallback", V1_2, self.fallback.as_deref()),
            Field::scalar("tooltip", V1_5, &self.tooltip),
            Field::scalar("is_enabled", V1_5, &self.is_enabled),
            Field::scalar("mode", V1_5, &self.mode),
            Field::scalar("requires", V1_2, &self.requires),
        ]
    }
}

impl Node for TargetElement {
    fn type_name(&self) -> &'static str {
        "TargetElement"
    }

    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::required("element_id", V1_0),
            Field::scalar("is_visible", V1_0, &self.is_visible),
        ]
    }
}
