//! Closed enumerations used throughout the card model.
//!
//! Only the listed variants are valid on the wire; anything else fails
//! deserialization instead of reaching the validator. Values are written in
//! their canonical spelling and read case-insensitively, so `"Large"` and
//! `"BOLDER"` parse like `"large"` and `"bolder"`.

use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident => $wire:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Canonical spellings, in declaration order.
            pub const VARIANTS: &'static [&'static str] = &[$($wire),+];

            /// Canonical wire spelling.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $wire),+
                }
            }

            /// Case-insensitive lookup of a wire value.
            pub fn from_wire(value: &str) -> Option<Self> {
                $(
                    if value.eq_ignore_ascii_case($wire) {
                        return Some($name::$variant);
                    }
                )+
                None
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                deserializer.deserialize_str(WireVisitor::<$name>::new(
                    stringify!($name),
                    $name::VARIANTS,
                    $name::from_wire,
                ))
            }
        }
    };
}

/// String visitor shared by every wire enum.
struct WireVisitor<T> {
    name: &'static str,
    variants: &'static [&'static str],
    lookup: fn(&str) -> Option<T>,
}

impl<T> WireVisitor<T> {
    fn new(
        name: &'static str,
        variants: &'static [&'static str],
        lookup: fn(&str) -> Option<T>,
    ) -> Self {
        Self {
            name,
            variants,
            lookup,
        }
    }
}

impl<T> Visitor<'_> for WireVisitor<T> {
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a {} value", self.name)
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<T, E> {
        (self.lookup)(value).ok_or_else(|| E::unknown_variant(value, self.variants))
    }
}

wire_enum! {
    /// Text and highlight colors.
    pub enum Colors {
        Default => "default",
        Dark => "dark",
        Light => "light",
        Accent => "accent",
        Good => "good",
        Warning => "warning",
        Attention => "attention",
    }
}

wire_enum! {
    pub enum FontType {
        Default => "default",
        Monospace => "monospace",
    }
}

wire_enum! {
    pub enum FontSize {
        Default => "default",
        Small => "small",
        Medium => "medium",
        Large => "large",
        ExtraLarge => "extraLarge",
    }
}

wire_enum! {
    pub enum FontWeight {
        Default => "default",
        Lighter => "lighter",
        Bolder => "bolder",
    }
}

wire_enum! {
    pub enum TextBlockStyle {
        Default => "default",
        Heading => "heading",
    }
}

wire_enum! {
    /// Height of a block element within its container.
    pub enum BlockElementHeight {
        Auto => "auto",
        Stretch => "stretch",
    }
}

wire_enum! {
    pub enum ImageSize {
        Auto => "auto",
        Stretch => "stretch",
        Small => "small",
        Medium => "medium",
        Large => "large",
    }
}

wire_enum! {
    pub enum ImageStyle {
        Default => "default",
        Person => "person",
    }
}

wire_enum! {
    /// How a background image fills its area.
    pub enum ImageFillMode {
        Cover => "cover",
        RepeatHorizontally => "repeatHorizontally",
        RepeatVertically => "repeatVertically",
        Repeat => "repeat",
    }
}

wire_enum! {
    pub enum HorizontalAlignment {
        Left => "left",
        Center => "center",
        Right => "right",
    }
}

wire_enum! {
    pub enum VerticalAlignment {
        Top => "top",
        Center => "center",
        Bottom => "bottom",
    }
}

wire_enum! {
    /// Style hint for containers, columns and table cells.
    pub enum ContainerStyle {
        Default => "default",
        Emphasis => "emphasis",
        Good => "good",
        Attention => "attention",
        Warning => "warning",
        Accent => "accent",
    }
}

wire_enum! {
    /// Gap placed before an element.
    pub enum Spacing {
        Default => "default",
        None => "none",
        Small => "small",
        Medium => "medium",
        Large => "large",
        ExtraLarge => "extraLarge",
        Padding => "padding",
    }
}

wire_enum! {
    /// Which inputs a submit/execute action collects.
    pub enum AssociatedInputs {
        Auto => "auto",
        None => "none",
    }
}

wire_enum! {
    pub enum ActionStyle {
        Default => "default",
        Positive => "positive",
        Destructive => "destructive",
    }
}

wire_enum! {
    /// Whether an action is shown inline or moved into an overflow menu.
    pub enum ActionMode {
        Primary => "primary",
        Secondary => "secondary",
    }
}

wire_enum! {
    pub enum TextInputStyle {
        Text => "text",
        Tel => "tel",
        Url => "url",
        Email => "email",
        Password => "password",
    }
}

wire_enum! {
    pub enum ChoiceInputStyle {
        Compact => "compact",
        Expanded => "expanded",
        Filtered => "filtered",
    }
}

wire_enum! {
    /// Width hint understood by Microsoft Teams.
    ///
    /// `Default` means "no hint": the builder drops the `msteams` block for it.
    pub enum MsTeamsWidth {
        Default => "default",
        Full => "Full",
    }
}
