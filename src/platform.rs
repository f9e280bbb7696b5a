//! Hosting platforms and their card limits.
//!
//! The built-in profiles live in [`PLATFORM_REGISTRY`]. Additional or
//! overriding profiles can be loaded from a YAML catalog:
//!
//! ```yaml
//! platforms:
//!   - name: Intranet Portal
//!     max_size_kb: 64
//!     schema_version: "1.6"
//! ```

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::PlatformError;
use crate::version::*;

/// Limits a host applies to the cards it renders.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TargetPlatform {
    pub name: String,
    pub max_size_kb: f64,
    pub schema_version: Version,
}

/// Built-in hosting platforms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Platform {
    BotWebChat,
    Outlook,
    MicrosoftTeams,
    CortanaSkills,
    WindowsTimeline,
    CiscoWebExTeams,
    VivaConnections,
    WindowsWidgets,
}

/// A platform registry entry.
#[derive(Clone, Debug, PartialEq)]
pub struct PlatformEntry {
    pub platform: Platform,
    pub name: &'static str,
    /// Compact spellings accepted by [`profile_for`].
    pub aliases: &'static [&'static str],
    pub max_size_kb: f64,
    pub schema_version: Version,
}

pub static PLATFORM_REGISTRY: &[PlatformEntry] = &[
    PlatformEntry {
        platform: Platform::BotWebChat,
        name: "Bot WebChat",
        aliases: &["BotWebChat"],
        max_size_kb: 40.0,
        schema_version: V1_5,
    },
    PlatformEntry {
        platform: Platform::Outlook,
        name: "Outlook",
        aliases: &[],
        max_size_kb: 40.0,
        schema_version: V1_0,
    },
    PlatformEntry {
        platform: Platform::MicrosoftTeams,
        name: "Microsoft Teams",
        aliases: &["MicrosoftTeams", "Teams"],
        max_size_kb: 28.0,
        schema_version: V1_5,
    },
    PlatformEntry {
        platform: Platform::CortanaSkills,
        name: "Cortana Skills",
        aliases: &["CortanaSkills"],
        max_size_kb: 40.0,
        schema_version: V1_0,
    },
    PlatformEntry {
        platform: Platform::WindowsTimeline,
        name: "Windows Timeline",
        aliases: &["WindowsTimeline"],
        max_size_kb: 40.0,
        schema_version: V1_0,
    },
    PlatformEntry {
        platform: Platform::CiscoWebExTeams,
        name: "Cisco WebEx Teams",
        aliases: &["CiscoWebExTeams"],
        max_size_kb: 40.0,
        schema_version: V1_2,
    },
    PlatformEntry {
        platform: Platform::VivaConnections,
        name: "Viva Connections",
        aliases: &["VivaConnections"],
        max_size_kb: 40.0,
        schema_version: V1_2,
    },
    PlatformEntry {
        platform: Platform::WindowsWidgets,
        name: "Windows Widgets",
        aliases: &["WindowsWidgets"],
        max_size_kb: 40.0,
        schema_version: V1_6,
    },
];

impl PlatformEntry {
    fn matches(&self, name: &str) -> bool {
        let name = name.trim();
        self.name.eq_ignore_ascii_case(name)
            || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(name))
    }

    pub fn profile(&self) -> TargetPlatform {
        TargetPlatform {
            name: self.name.to_string(),
            max_size_kb: self.max_size_kb,
            schema_version: self.schema_version,
        }
    }
}

impl Platform {
    pub const ALL: [Platform; 8] = [
        Platform::BotWebChat,
        Platform::Outlook,
        Platform::MicrosoftTeams,
        Platform::CortanaSkills,
        Platform::WindowsTimeline,
        Platform::CiscoWebExTeams,
        Platform::VivaConnections,
        Platform::WindowsWidgets,
    ];

    /// Registry entry of this platform. The registry lists platforms in
    /// declaration order.
    pub fn entry(self) -> &'static PlatformEntry {
        &PLATFORM_REGISTRY[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.entry().name
    }

    pub fn profile(self) -> TargetPlatform {
        self.entry().profile()
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Look up a built-in registry entry by display name or alias.
pub fn lookup_platform(name: &str) -> Option<&'static PlatformEntry> {
    PLATFORM_REGISTRY.iter().find(|e| e.matches(name))
}

/// Profile of the built-in platform called `name`.
pub fn profile_for(name: &str) -> Option<TargetPlatform> {
    lookup_platform(name).map(PlatformEntry::profile)
}

// ─── Catalog ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    #[serde(default)]
    platforms: Vec<TargetPlatform>,
}

/// Built-in profiles overlaid with user-defined ones.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlatformCatalog {
    custom: Vec<TargetPlatform>,
}

impl PlatformCatalog {
    /// A catalog containing only the built-in profiles.
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Parse a YAML catalog. Custom profiles take precedence over built-in
    /// profiles of the same name.
    pub fn from_yaml(input: &str) -> Result<Self, PlatformError> {
        let file: CatalogFile =
            serde_saphyr::from_str(input).map_err(|e| PlatformError::Syntax(e.to_string()))?;
        let mut catalog = Self::default();
        for profile in file.platforms {
            catalog.insert(profile)?;
        }
        tracing::debug!(custom = catalog.custom.len(), "loaded platform catalog");
        Ok(catalog)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, PlatformError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| PlatformError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    /// Add or replace a custom profile.
    pub fn insert(&mut self, profile: TargetPlatform) -> Result<(), PlatformError> {
        if profile.name.trim().is_empty() {
            return Err(PlatformError::InvalidProfile {
                name: profile.name,
                reason: "name must not be empty".to_string(),
            });
        }
        if !(profile.max_size_kb.is_finite() && profile.max_size_kb > 0.0) {
            return Err(PlatformError::InvalidProfile {
                name: profile.name,
                reason: format!("max_size_kb must be positive, got {}", profile.max_size_kb),
            });
        }
        if let Some(entry) = lookup_platform(&profile.name) {
            tracing::debug!(platform = entry.name, "custom profile overrides built-in");
        }
        self.custom
            .retain(|p| !p.name.eq_ignore_ascii_case(profile.name.trim()));
        self.custom.push(profile);
        Ok(())
    }

    pub fn profile_for(&self, name: &str) -> Option<TargetPlatform> {
        let wanted = name.trim();
        if let Some(custom) = self
            .custom
            .iter()
            .find(|p| p.name.trim().eq_ignore_ascii_case(wanted))
        {
            return Some(custom.clone());
        }
        let entry = lookup_platform(wanted)?;
        // A custom profile named like a built-in one shadows its aliases too.
        match self.custom.iter().find(|p| entry.matches(&p.name)) {
            Some(custom) => Some(custom.clone()),
            None => Some(entry.profile()),
        }
    }

    /// Names of every profile in the catalog, built-ins first.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = PLATFORM_REGISTRY.iter().map(|e| e.name.to_string()).collect();
        for profile in &self.custom {
            if lookup_platform(&profile.name).is_none() {
                names.push(profile.name.clone());
            }
        }
        names
    }
}
