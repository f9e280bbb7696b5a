//! Fluent construction of [`Card`]s.
//!
//! ```rust
//! use adaptive_cards::{Card, TextBlock, ActionOpenUrl, version::V1_4};
//!
//! let card = Card::builder()
//!     .version(V1_4)
//!     .add_item(TextBlock::new("Build finished"))
//!     .add_action(ActionOpenUrl::new("https://ci.example.com/run/42"))
//!     .build();
//! assert_eq!(card.body.as_ref().map(Vec::len), Some(1));
//! ```

use crate::enums::{MsTeamsWidth, VerticalAlignment};
use crate::types::*;
use crate::version::Version;

#[derive(Clone, Debug, Default)]
pub struct CardBuilder {
    card: Card,
}

impl Card {
    pub fn builder() -> CardBuilder {
        CardBuilder::default()
    }
}

impl CardBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn version(mut self, version: Version) -> Self {
        self.card.version = version;
        self
    }

    /// Override the `$schema` URL.
    pub fn schema(mut self, schema: impl Into<String>) -> Self {
        self.card.schema = schema.into();
        self
    }

    pub fn refresh(mut self, refresh: Refresh) -> Self {
        self.card.refresh = Some(refresh);
        self
    }

    pub fn authentication(mut self, authentication: Authentication) -> Self {
        self.card.authentication = Some(authentication);
        self
    }

    pub fn select_action(mut self, action: impl Into<Action>) -> Self {
        self.card.select_action = Some(Box::new(action.into()));
        self
    }

    pub fn fallback_text(mut self, text: impl Into<String>) -> Self {
        self.card.fallback_text = Some(text.into());
        self
    }

    pub fn background_image(mut self, image: impl Into<BackgroundImageValue>) -> Self {
        self.card.background_image = Some(image.into());
        self
    }

    pub fn metadata(mut self, metadata: Metadata) -> Self {
        self.card.metadata = Some(metadata);
        self
    }

    pub fn min_height(mut self, min_height: impl Into<String>) -> Self {
        self.card.min_height = Some(min_height.into());
        self
    }

    pub fn rtl(mut self, rtl: bool) -> Self {
        self.card.rtl = Some(rtl);
        self
    }

    pub fn speak(mut self, speak: impl Into<String>) -> Self {
        self.card.speak = Some(speak.into());
        self
    }

    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.card.lang = Some(lang.into());
        self
    }

    pub fn vertical_content_alignment(mut self, alignment: VerticalAlignment) -> Self {
        self.card.vertical_content_alignment = Some(alignment);
        self
    }

    /// Set the Microsoft Teams width hint. `MsTeamsWidth::Default` removes it.
    pub fn width(mut self, width: MsTeamsWidth) -> Self {
        self.card.msteams = match width {
            MsTeamsWidth::Default => None,
            width => Some(MsTeams { width }),
        };
        self
    }

    pub fn add_item(mut self, item: impl Into<CardItem>) -> Self {
        self.card.body.get_or_insert_with(Vec::new).push(item.into());
        self
    }

    /// Append several items. Creates an (empty) body even when `items` is
    /// empty.
    pub fn add_items<I>(mut self, items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<CardItem>,
    {
        self.card
            .body
            .get_or_insert_with(Vec::new)
            .extend(items.into_iter().map(Into::into));
        self
    }

    pub fn add_action(mut self, action: impl Into<Action>) -> Self {
        self.card
            .actions
            .get_or_insert_with(Vec::new)
            .push(action.into());
        self
    }

    pub fn add_actions<I>(mut self, actions: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Action>,
    {
        self.card
            .actions
            .get_or_insert_with(Vec::new)
            .extend(actions.into_iter().map(Into::into));
        self
    }

    pub fn build(self) -> Card {
        self.card
    }
}
