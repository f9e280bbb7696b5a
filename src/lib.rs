//! Build, serialize and validate [Adaptive Cards](https://adaptivecards.io).
//!
//! An Adaptive Card is a JSON document describing a tree of text blocks,
//! images, containers, inputs and actions that a host (Teams, Outlook, Bot
//! WebChat, ...) renders natively. Hosts differ in the schema version they
//! understand and in how large a card may be, so this crate validates a card
//! against a target platform before it is sent:
//!
//! ```text
//! Card::builder() → Card → CardValidator::for_platform(p).validate(&card)
//!                        → to_json(&card) → host
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use adaptive_cards::{Card, CardValidator, Platform, TextBlock, ValidationFailure};
//! use adaptive_cards::enums::FontType;
//! use adaptive_cards::version::V1_0;
//!
//! let card = Card::builder()
//!     .version(V1_0)
//!     .add_item(TextBlock {
//!         font_type: Some(FontType::Monospace),
//!         ..TextBlock::new("Deploy finished")
//!     })
//!     .build();
//!
//! let mut validator = CardValidator::for_platform(Platform::MicrosoftTeams);
//! assert!(validator.validate(&card).is_err());
//!
//! let finding = &validator.details()[0];
//! assert_eq!(finding.failure, ValidationFailure::InvalidFieldVersion);
//! assert!(finding.detail.as_deref().unwrap().ends_with("| 1.2"));
//! ```

pub mod builder;
pub mod enums;
pub mod error;
pub mod fields;
pub mod parse;
pub mod platform;
pub mod schema;
pub mod serialize;
pub mod types;
pub mod update;
pub mod validate;
pub mod version;
pub mod walk;

pub use builder::CardBuilder;
pub use error::*;
pub use fields::{Field, FieldValue, Node, minimum_version, serialization_name};
pub use platform::{Platform, PlatformCatalog, TargetPlatform, profile_for};
pub use schema::SchemaStore;
pub use types::*;
pub use validate::{CardValidator, VersionScope, card_size};
pub use version::Version;

// Re-export entry-point functions at the crate root for convenience.
pub use parse::{from_json, from_yaml};
pub use serialize::{to_json, to_json_pretty, to_value, to_yaml};

/// Convenience entry point composing parse → validate for a built-in
/// platform.
///
/// Returns the card when it passes, or every finding when it does not.
///
/// # Example
///
/// ```rust
/// use adaptive_cards::{CardError, Platform};
///
/// let json = r#"{"type":"AdaptiveCard","version":"1.0","body":[]}"#;
/// match adaptive_cards::load(json, Platform::Outlook) {
///     Ok(card) => println!("ok: {}", card.version),
///     Err(CardError::Invalid(findings)) => assert_eq!(findings.len(), 1),
///     Err(other) => panic!("{other}"),
/// }
/// ```
pub fn load(input: &str, platform: Platform) -> Result<Card, CardError> {
    let card = parse::from_json(input)?;
    let mut validator = CardValidator::for_platform(platform);
    match validator.validate(&card) {
        Ok(()) => Ok(card),
        Err(ValidationError::Failed { .. }) => Err(CardError::Invalid(validator.details().to_vec())),
        Err(other) => Err(other.into()),
    }
}
