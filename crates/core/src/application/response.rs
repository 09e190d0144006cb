//! Application responses, one per operation.
//!
//! Every response wraps the resulting [`Sample`] entity (or a list of them). Update and delete
//! responses are bound to the request that produced them and reject a sample whose id differs
//! from the requested one.

use crate::application::request::{DeleteSampleRequest, UpdateSampleRequest};
use crate::error::{SampleError, SampleResult};
use crate::sample::Sample;
use sample_types::SampleId;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListSamplesResponse {
    samples: Vec<Sample>,
}

impl ListSamplesResponse {
    pub fn new(samples: Vec<Sample>) -> Self {
        Self { samples }
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateSampleResponse {
    sample: Sample,
}

impl CreateSampleResponse {
    pub fn new(sample: Sample) -> Self {
        Self { sample }
    }

    pub fn sample(&self) -> &Sample {
        &self.sample
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateSampleResponse {
    sample: Sample,
}

impl UpdateSampleResponse {
    /// Creates the response for `request`.
    ///
    /// # Errors
    ///
    /// Returns [`SampleError::InconsistentResponse`] if `sample` is not the record `request`
    /// asked to update.
    pub fn new(request: &UpdateSampleRequest, sample: Sample) -> SampleResult<Self> {
        ensure_same_id("UpdateSampleResponse", request.id(), &sample)?;
        Ok(Self { sample })
    }

    pub fn sample(&self) -> &Sample {
        &self.sample
    }
}

/// Response to a delete, wrapping the removed record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteSampleResponse {
    sample: Sample,
}

impl DeleteSampleResponse {
    /// Creates the response for `request`.
    ///
    /// # Errors
    ///
    /// Returns [`SampleError::InconsistentResponse`] if `sample` is not the record `request`
    /// asked to delete.
    pub fn new(request: &DeleteSampleRequest, sample: Sample) -> SampleResult<Self> {
        ensure_same_id("DeleteSampleResponse", request.id(), &sample)?;
        Ok(Self { sample })
    }

    pub fn sample(&self) -> &Sample {
        &self.sample
    }
}

fn ensure_same_id(
    response: &'static str,
    requested: &SampleId,
    sample: &Sample,
) -> SampleResult<()> {
    if sample.id() != requested {
        return Err(SampleError::InconsistentResponse {
            response,
            reason: format!("requested id {} but got id {}", requested, sample.id()),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sample_types::SampleName;

    fn sample(id: &str, name: &str) -> Sample {
        Sample::new(
            SampleId::new(id).expect("valid id"),
            SampleName::new(name).expect("valid name"),
        )
    }

    #[test]
    fn test_update_response_accepts_matching_id() {
        let request = UpdateSampleRequest::new(
            SampleId::new("7").expect("valid"),
            SampleName::new("renamed").expect("valid"),
        );
        let res = UpdateSampleResponse::new(&request, sample("7", "renamed"))
            .expect("matching id should be accepted");
        assert_eq!(res.sample().name().as_str(), "renamed");
    }

    #[test]
    fn test_update_response_rejects_other_record() {
        let request = UpdateSampleRequest::new(
            SampleId::new("7").expect("valid"),
            SampleName::new("renamed").expect("valid"),
        );
        let err = UpdateSampleResponse::new(&request, sample("8", "renamed"))
            .expect_err("mismatched id should be rejected");
        assert!(matches!(
            err,
            SampleError::InconsistentResponse { response: "UpdateSampleResponse", reason }
                if reason.contains("requested id 7 but got id 8")
        ));
    }

    #[test]
    fn test_delete_response_rejects_other_record() {
        let request = DeleteSampleRequest::new(SampleId::new("id1").expect("valid"));
        let err = DeleteSampleResponse::new(&request, sample("id2", "name"))
            .expect_err("mismatched id should be rejected");
        assert!(matches!(
            err,
            SampleError::InconsistentResponse {
                response: "DeleteSampleResponse",
                ..
            }
        ));
    }

    #[test]
    fn test_list_response_preserves_order() {
        let res = ListSamplesResponse::new(vec![sample("2", "b"), sample("1", "a")]);
        let ids: Vec<&str> = res.samples().iter().map(|s| s.id().as_str()).collect();
        assert_eq!(ids, ["2", "1"]);
    }
}
