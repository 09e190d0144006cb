//! # Sample Types
//!
//! Value objects for the sample domain.
//!
//! Each type wraps a single primitive and enforces one invariant when it is constructed.
//! Once a value exists it is immutable, so callers never need to check it again.

use std::fmt;

/// Errors that can occur when constructing a value object.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueError {
    /// A numeric sample identifier was zero or negative.
    #[error("SampleID must be greater than 0 (got {0})")]
    NonPositiveSampleId(i64),
    /// A string sample identifier was empty.
    #[error("SampleID cannot be empty")]
    EmptySampleId,
    /// A sample name was the empty string.
    #[error("SampleName cannot be empty")]
    EmptySampleName,
}

/// Identifier of a sample record.
///
/// The canonical form is an opaque, non-empty string, which is also the form carried on the
/// wire. Identifiers allocated by storage are positive integers; those are stored as their
/// decimal text, so a numeric id and its string form are the same value.
///
/// # Construction
/// - [`SampleId::new`] accepts any non-empty string (for example `"id1"` or `"42"`).
/// - [`SampleId::from_i64`] accepts only integers greater than zero.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SampleId(String);

impl SampleId {
    /// Creates a `SampleId` from its string form.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::EmptySampleId`] if `id` is the empty string.
    pub fn new(id: impl Into<String>) -> Result<Self, ValueError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ValueError::EmptySampleId);
        }
        Ok(Self(id))
    }

    /// Creates a `SampleId` from a numeric identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::NonPositiveSampleId`] if `id <= 0`.
    pub fn from_i64(id: i64) -> Result<Self, ValueError> {
        if id <= 0 {
            return Err(ValueError::NonPositiveSampleId(id));
        }
        Ok(Self(id.to_string()))
    }

    /// Returns the numeric form of this id, if it has one.
    ///
    /// Only ids whose text is the canonical decimal rendering of a positive integer have a
    /// numeric form, so `"012"` and `"+12"` stay opaque and `from_i64(n)` is the only id
    /// reporting `n`.
    pub fn as_i64(&self) -> Option<i64> {
        self.0
            .parse::<i64>()
            .ok()
            .filter(|n| *n > 0 && n.to_string() == self.0)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SampleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SampleId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Short human-readable label of a sample.
///
/// Only the empty string is rejected. The input is stored exactly as given: it is not
/// trimmed, so `" "` is a valid name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SampleName(String);

impl SampleName {
    /// Creates a new `SampleName`.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::EmptySampleName`] if `name` is the empty string.
    pub fn new(name: impl Into<String>) -> Result<Self, ValueError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValueError::EmptySampleName);
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for SampleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SampleName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
