//! # Schema compliance
//!
//! Validates the serialized form of a card against the official card
//! schema for a given version (JSON Schema draft 6). Schemas live on disk as
//! `schema-<major>.<minor>.json`; the crate ships versions 1.0 through 1.6
//! under `schemas/`.
//!
//! A schema that cannot be read or compiled is a configuration problem and
//! surfaces as [`SchemaError`]. A document that does not conform produces a
//! single [`ValidationFailure::InvalidSchema`] finding carrying the first
//! reported violation.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use jsonschema::Validator;
use serde_json::Value;

use crate::error::{Finding, SchemaError, ValidationFailure};
use crate::version::Version;

/// Directory holding the schemas bundled with this crate.
pub const DEFAULT_SCHEMA_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/schemas");

/// File name of the schema for `version`, e.g. `schema-1.5.json`.
pub fn schema_file_name(version: Version) -> String {
    format!("schema-{version}.json")
}

/// Read and parse the schema document for `version` from `dir`.
pub fn load_schema(dir: &Path, version: Version) -> Result<Value, SchemaError> {
    let path = dir.join(schema_file_name(version));
    let content = std::fs::read_to_string(&path).map_err(|source| SchemaError::Read {
        path: path.clone(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| SchemaError::Parse { path, source })
}

/// Compile a schema document as draft 6.
pub fn compile_schema(schema: &Value, version: Version) -> Result<Validator, SchemaError> {
    let mut opts = jsonschema::options();
    opts.with_draft(jsonschema::Draft::Draft6);
    opts.build(schema).map_err(|e| SchemaError::Compile {
        version,
        reason: e.to_string(),
    })
}

/// Validate `document` and append one finding if it does not conform.
///
/// Returns whether the document conformed.
pub fn check_document(document: &Value, validator: &Validator, findings: &mut Vec<Finding>) -> bool {
    let Some(error) = validator.iter_errors(document).next() else {
        return true;
    };
    tracing::debug!(
        instance_path = %error.instance_path,
        error = %error,
        "card does not conform to schema"
    );
    findings.push(Finding::with_detail(
        ValidationFailure::InvalidSchema,
        error.to_string(),
    ));
    false
}

/// Load the schema for `schema_version` from `schema_dir` and check
/// `document` against it.
pub fn check_schema(
    document: &Value,
    schema_version: Version,
    schema_dir: &Path,
    findings: &mut Vec<Finding>,
) -> Result<(), SchemaError> {
    let schema = load_schema(schema_dir, schema_version)?;
    let validator = compile_schema(&schema, schema_version)?;
    check_document(document, &validator, findings);
    Ok(())
}

/// Source of compiled schemas, optionally memoized per version.
pub struct SchemaStore {
    dir: PathBuf,
    memoize: bool,
    compiled: HashMap<Version, Arc<Validator>>,
}

impl fmt::Debug for SchemaStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut versions: Vec<_> = self.compiled.keys().copied().collect();
        versions.sort();
        f.debug_struct("SchemaStore")
            .field("dir", &self.dir)
            .field("memoize", &self.memoize)
            .field("compiled", &versions)
            .finish()
    }
}

impl Default for SchemaStore {
    fn default() -> Self {
        Self::new(DEFAULT_SCHEMA_DIR)
    }
}

impl SchemaStore {
    /// A store reading from `dir`, re-reading files on every lookup.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            memoize: false,
            compiled: HashMap::new(),
        }
    }

    /// Keep compiled schemas around after the first lookup.
    pub fn memoized(mut self) -> Self {
        self.memoize = true;
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn is_memoized(&self) -> bool {
        self.memoize
    }

    /// Compiled validator for `version`.
    pub fn validator(&mut self, version: Version) -> Result<Arc<Validator>, SchemaError> {
        if let Some(validator) = self.compiled.get(&version) {
            return Ok(Arc::clone(validator));
        }
        let schema = load_schema(&self.dir, version)?;
        let validator = Arc::new(compile_schema(&schema, version)?);
        tracing::debug!(
            version = %version,
            dir = %self.dir.display(),
            "compiled card schema"
        );
        if self.memoize {
            self.compiled.insert(version, Arc::clone(&validator));
        }
        Ok(validator)
    }
}
