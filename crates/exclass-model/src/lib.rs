//! Data model for Exclass
//!
//! `ExampleClass` holds a name and an append-only, ordered list of integers.
//! Instances can be rendered to and restored from a JSON snapshot.

use serde::{Deserialize, Serialize};

/// A named, ordered list of integers
///
/// `values` keeps insertion order and allows duplicates. There is no
/// removal operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExampleClass {
    name: String,
    values: Vec<i32>,
}

impl ExampleClass {
    /// Create an instance with an empty name and no values
    #[must_use]
    pub const fn new() -> Self {
        Self {
            name: String::new(),
            values: Vec::new(),
        }
    }

    /// Replace the current name. Any text is accepted, including empty.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        tracing::trace!(name = %self.name, "name set");
    }

    /// Current name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a value to the end of the list
    pub fn add_value(&mut self, value: i32) {
        self.values.push(value);
        tracing::trace!(value, len = self.values.len(), "value added");
    }

    /// Values in insertion order
    #[must_use]
    pub fn values(&self) -> &[i32] {
        &self.values
    }

    /// Render as compact JSON: `{"name":"...","values":[...]}`
    ///
    /// # Errors
    ///
    /// Returns `ModelError::Snapshot` if serialization fails
    pub fn to_json(&self) -> Result<String, ModelError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Render as indented JSON
    ///
    /// # Errors
    ///
    /// Returns `ModelError::Snapshot` if serialization fails
    pub fn to_json_pretty(&self) -> Result<String, ModelError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Restore an instance from a JSON snapshot
    ///
    /// Missing fields fall back to their defaults, so `{}` yields a fresh
    /// instance.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::Snapshot` on malformed JSON, wrong field types,
    /// integers outside the `i32` range, or unknown fields
    pub fn from_json(input: &str) -> Result<Self, ModelError> {
        let instance: Self = serde_json::from_str(input)?;
        tracing::debug!(
            name = %instance.name,
            values = instance.values.len(),
            "snapshot decoded"
        );
        Ok(instance)
    }
}

/// Errors raised while encoding or decoding snapshots
#[derive(thiserror::Error, Debug)]
pub enum ModelError {
    #[error("invalid snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),
}
