//! The sample entity.

use sample_types::{SampleId, SampleName};

/// Canonical in-memory representation of one sample record.
///
/// A `Sample` can only be assembled from an already-validated [`SampleId`] and
/// [`SampleName`], so an instance with an invalid id or name cannot exist. Fields are private
/// and there are no setters: layers above read a sample, they never mutate it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    id: SampleId,
    name: SampleName,
}

impl Sample {
    pub fn new(id: SampleId, name: SampleName) -> Self {
        Self { id, name }
    }

    pub fn id(&self) -> &SampleId {
        &self.id
    }

    pub fn name(&self) -> &SampleName {
        &self.name
    }

    /// Returns a copy of this sample carrying `name`.
    pub fn renamed(&self, name: SampleName) -> Self {
        Self {
            id: self.id.clone(),
            name,
        }
    }
}
