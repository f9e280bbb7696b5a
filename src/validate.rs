//! Card validation for a target platform.
//!
//! A run performs four checks in fixed order and records **all** findings,
//! not just the first:
//!
//! 1. the body is present and non-empty;
//! 2. the serialized card conforms to the platform's schema version;
//! 3. no present scalar field in the body is newer than the card's declared
//!    version;
//! 4. the serialized card fits the platform's size limit.
//!
//! The version check can be widened to the whole card with
//! [`VersionScope::Card`]. Validation does not modify the card.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::*;
use crate::fields::{Field, Node};
use crate::platform::{Platform, TargetPlatform};
use crate::schema::{SchemaStore, check_document};
use crate::serialize;
use crate::types::Card;
use crate::version::Version;
use crate::walk::{Visitor, walk};

/// How much of a card the field-version check covers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VersionScope {
    /// Scalar fields of body items and everything nested below them.
    #[default]
    Body,
    /// Every field of the card: card-level fields, top-level actions and
    /// the tags of nested nodes and sequences as well.
    Card,
}

/// Validates cards against one platform profile and keeps the findings of
/// its latest run.
#[derive(Debug)]
pub struct CardValidator {
    platform: TargetPlatform,
    schemas: SchemaStore,
    version_scope: VersionScope,
    findings: Vec<Finding>,
}

impl CardValidator {
    pub fn new(platform: TargetPlatform) -> Self {
        Self {
            platform,
            schemas: SchemaStore::default(),
            version_scope: VersionScope::default(),
            findings: Vec::new(),
        }
    }

    /// Validator for one of the built-in platforms.
    pub fn for_platform(platform: Platform) -> Self {
        Self::new(platform.profile())
    }

    /// Read schemas from `dir` instead of the bundled ones.
    pub fn with_schema_dir(self, dir: impl Into<PathBuf>) -> Self {
        self.with_schema_store(SchemaStore::new(dir))
    }

    pub fn with_schema_store(mut self, store: SchemaStore) -> Self {
        self.schemas = store;
        self
    }

    pub fn with_version_scope(mut self, scope: VersionScope) -> Self {
        self.version_scope = scope;
        self
    }

    pub fn version_scope(&self) -> VersionScope {
        self.version_scope
    }

    pub fn platform(&self) -> &TargetPlatform {
        &self.platform
    }

    /// Findings of the most recent [`validate`](Self::validate) run.
    pub fn details(&self) -> &[Finding] {
        &self.findings
    }

    /// Validate `card`, replacing the findings of any previous run.
    ///
    /// Returns `Ok(())` when nothing was found. Configuration problems (an
    /// unreadable schema, a card that cannot be serialized) are returned as
    /// errors and leave no findings behind.
    pub fn validate(&mut self, card: &Card) -> Result<(), ValidationError> {
        self.findings = Vec::new();

        let document = serialize::to_value(card)?;
        let size_kb = card_size(card)?;
        let validator = self.schemas.validator(self.platform.schema_version)?;

        let mut findings = Vec::new();
        check_body(card, &mut findings);
        check_document(&document, &validator, &mut findings);
        check_versions_in(card, self.version_scope, &mut findings);
        check_size(size_kb, &self.platform, &mut findings);

        for finding in &findings {
            tracing::debug!(
                platform = %self.platform.name,
                failure = ?finding.failure,
                detail = finding.detail.as_deref().unwrap_or(""),
                "card validation finding"
            );
        }
        tracing::debug!(
            platform = %self.platform.name,
            version = %card.version,
            size_kb,
            findings = findings.len(),
            "validated card"
        );

        self.findings = findings;
        if self.findings.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::Failed {
                findings: self.findings.len(),
            })
        }
    }
}

// ─── Checks ─────────────────────────────────────────────────────────────────

/// Size of the compact JSON serialization of `card`, in KB.
pub fn card_size(card: &Card) -> Result<f64, SerializeError> {
    let json = serialize::to_json(card)?;
    Ok(json.len() as f64 / 1024.0)
}

/// A card without body content is flagged; validation carries on.
pub fn check_body(card: &Card, findings: &mut Vec<Finding>) {
    if card.body.as_ref().is_none_or(Vec::is_empty) {
        findings.push(Finding::new(ValidationFailure::EmptyCard));
    }
}

pub fn check_size(size_kb: f64, platform: &TargetPlatform, findings: &mut Vec<Finding>) {
    if size_kb > platform.max_size_kb {
        findings.push(Finding::with_detail(
            ValidationFailure::SizeLimitExceeded,
            format!("{} | {} KB", platform.name, platform.max_size_kb),
        ));
    }
}

/// Record a finding if `field` of `owner` is newer than `card_version`.
pub fn check_field(
    card_version: Version,
    owner: &dyn Node,
    field: &str,
    minimum: Version,
    findings: &mut Vec<Finding>,
) {
    if card_version < minimum {
        findings.push(Finding::with_detail(
            ValidationFailure::InvalidFieldVersion,
            format!(
                "Field version exceeds card version: {} | {} | {}",
                owner.type_name(),
                field,
                minimum
            ),
        ));
    }
}

struct VersionCompliance<'f> {
    card_version: Version,
    composites: bool,
    findings: &'f mut Vec<Finding>,
}

impl<'a> Visitor<'a> for VersionCompliance<'_> {
    fn visit_field(&mut self, owner: &'a dyn Node, field: &Field<'a>) {
        check_field(self.card_version, owner, field.name, field.since, self.findings);
    }

    fn visit_composite(&mut self, owner: &'a dyn Node, field: &Field<'a>) {
        if self.composites {
            check_field(self.card_version, owner, field.name, field.since, self.findings);
        }
    }
}

/// Flag every present scalar field in the body newer than the card.
pub fn check_versions(card: &Card, findings: &mut Vec<Finding>) {
    check_versions_in(card, VersionScope::Body, findings);
}

/// Version check over the part of `card` selected by `scope`.
pub fn check_versions_in(card: &Card, scope: VersionScope, findings: &mut Vec<Finding>) {
    let mut visitor = VersionCompliance {
        card_version: card.version,
        composites: scope == VersionScope::Card,
        findings,
    };
    match scope {
        VersionScope::Body => {
            let items: Vec<&dyn Node> = card
                .body
                .iter()
                .flatten()
                .map(|item| item as &dyn Node)
                .collect();
            walk(&items, &mut visitor);
        }
        VersionScope::Card => walk(&[card as &dyn Node], &mut visitor),
    }
}
