//! Application requests, one per operation.
//!
//! Each request holds only the value objects its operation needs. Fields are private and
//! only reachable through constructors that take validated value objects.

use sample_types::{SampleId, SampleName};

/// Request to list every sample. Carries no parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListSamplesRequest;

impl ListSamplesRequest {
    pub fn new() -> Self {
        Self
    }
}

/// Request to create a sample.
///
/// Holds a name only: the identifier is assigned on creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateSampleRequest {
    name: SampleName,
}

impl CreateSampleRequest {
    pub fn new(name: SampleName) -> Self {
        Self { name }
    }

    pub fn name(&self) -> &SampleName {
        &self.name
    }

    pub fn into_name(self) -> SampleName {
        self.name
    }
}

/// Request to rename an existing sample.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateSampleRequest {
    id: SampleId,
    name: SampleName,
}

impl UpdateSampleRequest {
    pub fn new(id: SampleId, name: SampleName) -> Self {
        Self { id, name }
    }

    pub fn id(&self) -> &SampleId {
        &self.id
    }

    pub fn name(&self) -> &SampleName {
        &self.name
    }
}

/// Request to delete a sample.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteSampleRequest {
    id: SampleId,
}

impl DeleteSampleRequest {
    pub fn new(id: SampleId) -> Self {
        Self { id }
    }

    pub fn id(&self) -> &SampleId {
        &self.id
    }
}
