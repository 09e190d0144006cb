//! Conversions between wire messages and application requests/responses.
//!
//! Inbound wire requests are decoded through the value-object constructors, which is the only
//! place malformed external input is rejected. Application responses encode field by field
//! and cannot fail.
//!
//! The reverse direction (application request → wire, wire response → application response)
//! is what a client uses: decoding a response re-runs the same validation, so a reply missing
//! its sample or carrying an invalid one is reported as [`ApiError::MalformedResponse`].

use crate::error::ApiError;
use api_shared::pb;
use sample_core::{
    CreateSampleRequest, CreateSampleResponse, DeleteSampleRequest, DeleteSampleResponse,
    ListSamplesRequest, ListSamplesResponse, Sample, SampleId, SampleName, UpdateSampleRequest,
    UpdateSampleResponse, ValueError,
};

pub const LIST_SAMPLES: &str = "ListSamples";
pub const CREATE_SAMPLE: &str = "CreateSample";
pub const UPDATE_SAMPLE: &str = "UpdateSample";
pub const DELETE_SAMPLE: &str = "DeleteSample";

pub fn sample_to_pb(sample: &Sample) -> pb::Sample {
    pb::Sample {
        id: sample.id().as_str().to_owned(),
        name: sample.name().as_str().to_owned(),
    }
}

pub fn sample_from_pb(sample: pb::Sample) -> Result<Sample, ValueError> {
    Ok(Sample::new(
        SampleId::new(sample.id)?,
        SampleName::new(sample.name)?,
    ))
}

// ---------------------------------------------------------------------------
// Server side: wire request -> application request
// ---------------------------------------------------------------------------

pub fn list_samples_request_from_pb(_req: pb::ListSamplesRequest) -> ListSamplesRequest {
    ListSamplesRequest::new()
}

pub fn create_sample_request_from_pb(
    req: pb::CreateSampleRequest,
) -> Result<CreateSampleRequest, ApiError> {
    let name =
        SampleName::new(req.name).map_err(|e| ApiError::invalid_request(CREATE_SAMPLE, e))?;
    Ok(CreateSampleRequest::new(name))
}

pub fn update_sample_request_from_pb(
    req: pb::UpdateSampleRequest,
) -> Result<UpdateSampleRequest, ApiError> {
    let invalid = |e| ApiError::invalid_request(UPDATE_SAMPLE, e);
    let id = SampleId::new(req.id).map_err(invalid)?;
    let name = SampleName::new(req.name).map_err(invalid)?;
    Ok(UpdateSampleRequest::new(id, name))
}

pub fn delete_sample_request_from_pb(
    req: pb::DeleteSampleRequest,
) -> Result<DeleteSampleRequest, ApiError> {
    let id = SampleId::new(req.id).map_err(|e| ApiError::invalid_request(DELETE_SAMPLE, e))?;
    Ok(DeleteSampleRequest::new(id))
}

// ---------------------------------------------------------------------------
// Server side: application response -> wire response
// ---------------------------------------------------------------------------

pub fn list_samples_response_to_pb(res: &ListSamplesResponse) -> pb::ListSamplesResponse {
    pb::ListSamplesResponse {
        samples: res.samples().iter().map(sample_to_pb).collect(),
    }
}

pub fn create_sample_response_to_pb(res: &CreateSampleResponse) -> pb::CreateSampleResponse {
    pb::CreateSampleResponse {
        sample: Some(sample_to_pb(res.sample())),
    }
}

pub fn update_sample_response_to_pb(res: &UpdateSampleResponse) -> pb::UpdateSampleResponse {
    pb::UpdateSampleResponse {
        sample: Some(sample_to_pb(res.sample())),
    }
}

pub fn delete_sample_response_to_pb(res: &DeleteSampleResponse) -> pb::DeleteSampleResponse {
    pb::DeleteSampleResponse {
        sample: Some(sample_to_pb(res.sample())),
    }
}

// ---------------------------------------------------------------------------
// Client side: application request -> wire request
// ---------------------------------------------------------------------------

pub fn list_samples_request_to_pb(_req: &ListSamplesRequest) -> pb::ListSamplesRequest {
    pb::ListSamplesRequest {}
}

pub fn create_sample_request_to_pb(req: &CreateSampleRequest) -> pb::CreateSampleRequest {
    pb::CreateSampleRequest {
        name: req.name().as_str().to_owned(),
    }
}

pub fn update_sample_request_to_pb(req: &UpdateSampleRequest) -> pb::UpdateSampleRequest {
    pb::UpdateSampleRequest {
        id: req.id().as_str().to_owned(),
        name: req.name().as_str().to_owned(),
    }
}

pub fn delete_sample_request_to_pb(req: &DeleteSampleRequest) -> pb::DeleteSampleRequest {
    pb::DeleteSampleRequest {
        id: req.id().as_str().to_owned(),
    }
}

// ---------------------------------------------------------------------------
// Client side: wire response -> application response
// ---------------------------------------------------------------------------

fn required_sample(
    operation: &'static str,
    sample: Option<pb::Sample>,
) -> Result<Sample, ApiError> {
    let sample = sample.ok_or_else(|| ApiError::malformed_response(operation, "missing sample"))?;
    sample_from_pb(sample).map_err(|e| ApiError::malformed_response(operation, e.to_string()))
}

pub fn list_samples_response_from_pb(
    res: pb::ListSamplesResponse,
) -> Result<ListSamplesResponse, ApiError> {
    let samples = res
        .samples
        .into_iter()
        .map(sample_from_pb)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| ApiError::malformed_response(LIST_SAMPLES, e.to_string()))?;
    Ok(ListSamplesResponse::new(samples))
}

pub fn create_sample_response_from_pb(
    res: pb::CreateSampleResponse,
) -> Result<CreateSampleResponse, ApiError> {
    let sample = required_sample(CREATE_SAMPLE, res.sample)?;
    Ok(CreateSampleResponse::new(sample))
}

pub fn update_sample_response_from_pb(
    req: &UpdateSampleRequest,
    res: pb::UpdateSampleResponse,
) -> Result<UpdateSampleResponse, ApiError> {
    let sample = required_sample(UPDATE_SAMPLE, res.sample)?;
    UpdateSampleResponse::new(req, sample)
        .map_err(|e| ApiError::malformed_response(UPDATE_SAMPLE, e.to_string()))
}

pub fn delete_sample_response_from_pb(
    req: &DeleteSampleRequest,
    res: pb::DeleteSampleResponse,
) -> Result<DeleteSampleResponse, ApiError> {
    let sample = required_sample(DELETE_SAMPLE, res.sample)?;
    DeleteSampleResponse::new(req, sample)
        .map_err(|e| ApiError::malformed_response(DELETE_SAMPLE, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(id: &str, name: &str) -> Sample {
        Sample::new(
            SampleId::new(id).expect("valid id"),
            SampleName::new(name).expect("valid name"),
        )
    }

    #[test]
    fn test_create_sample_request_from_pb_builds_request() {
        let got = create_sample_request_from_pb(pb::CreateSampleRequest {
            name: "test".into(),
        })
        .expect("should convert");
        let want = CreateSampleRequest::new(SampleName::new("test").expect("valid"));
        assert_eq!(got, want);
    }

    #[test]
    fn test_create_sample_request_from_pb_rejects_empty_name() {
        let err = create_sample_request_from_pb(pb::CreateSampleRequest { name: "".into() })
            .expect_err("empty name should be rejected");
        assert!(matches!(
            err,
            ApiError::InvalidRequest {
                operation: "CreateSample",
                source: ValueError::EmptySampleName
            }
        ));
    }

    #[test]
    fn test_update_sample_request_from_pb_rejects_empty_id_before_name() {
        let err = update_sample_request_from_pb(pb::UpdateSampleRequest {
            id: "".into(),
            name: "".into(),
        })
        .expect_err("empty id should be rejected");
        assert!(matches!(
            err,
            ApiError::InvalidRequest {
                operation: "UpdateSample",
                source: ValueError::EmptySampleId
            }
        ));
    }

    #[test]
    fn test_delete_sample_request_from_pb_rejects_empty_id() {
        let err = delete_sample_request_from_pb(pb::DeleteSampleRequest { id: "".into() })
            .expect_err("empty id should be rejected");
        assert!(matches!(err, ApiError::InvalidRequest { .. }));
    }

    #[test]
    fn test_create_sample_response_to_pb_encodes_exactly() {
        let res = CreateSampleResponse::new(sample("id1", "name1"));
        assert_eq!(
            create_sample_response_to_pb(&res),
            pb::CreateSampleResponse {
                sample: Some(pb::Sample {
                    id: "id1".into(),
                    name: "name1".into(),
                }),
            }
        );
    }

    #[test]
    fn test_responses_survive_wire_round_trip() {
        let list = ListSamplesResponse::new(vec![sample("1", "a"), sample("id2", " b ")]);
        let decoded = list_samples_response_from_pb(list_samples_response_to_pb(&list))
            .expect("should decode");
        assert_eq!(decoded, list);

        let create = CreateSampleResponse::new(sample("id1", "name1"));
        let decoded = create_sample_response_from_pb(create_sample_response_to_pb(&create))
            .expect("should decode");
        assert_eq!(decoded, create);

        let update_req = UpdateSampleRequest::new(
            SampleId::new("3").expect("valid"),
            SampleName::new("c").expect("valid"),
        );
        let update = UpdateSampleResponse::new(&update_req, sample("3", "c")).expect("valid");
        let decoded =
            update_sample_response_from_pb(&update_req, update_sample_response_to_pb(&update))
                .expect("should decode");
        assert_eq!(decoded, update);

        let delete_req = DeleteSampleRequest::new(SampleId::new("4").expect("valid"));
        let delete = DeleteSampleResponse::new(&delete_req, sample("4", "d")).expect("valid");
        let decoded =
            delete_sample_response_from_pb(&delete_req, delete_sample_response_to_pb(&delete))
                .expect("should decode");
        assert_eq!(decoded, delete);
    }

    #[test]
    fn test_requests_survive_wire_round_trip() {
        let update = UpdateSampleRequest::new(
            SampleId::new("9").expect("valid"),
            SampleName::new("x").expect("valid"),
        );
        let decoded = update_sample_request_from_pb(update_sample_request_to_pb(&update))
            .expect("should decode");
        assert_eq!(decoded, update);

        let delete = DeleteSampleRequest::new(SampleId::new("9").expect("valid"));
        let decoded = delete_sample_request_from_pb(delete_sample_request_to_pb(&delete))
            .expect("should decode");
        assert_eq!(decoded, delete);
    }

    #[test]
    fn test_response_missing_sample_is_malformed() {
        let err = create_sample_response_from_pb(pb::CreateSampleResponse { sample: None })
            .expect_err("missing sample should be rejected");
        assert!(matches!(
            err,
            ApiError::MalformedResponse { operation: "CreateSample", ref reason }
                if reason == "missing sample"
        ));
    }

    #[test]
    fn test_response_with_invalid_sample_is_malformed() {
        let err = list_samples_response_from_pb(pb::ListSamplesResponse {
            samples: vec![pb::Sample {
                id: "1".into(),
                name: "".into(),
            }],
        })
        .expect_err("empty name should be rejected");
        assert!(matches!(err, ApiError::MalformedResponse { .. }));
    }

    #[test]
    fn test_delete_response_for_other_record_is_malformed() {
        let req = DeleteSampleRequest::new(SampleId::new("1").expect("valid"));
        let err = delete_sample_response_from_pb(
            &req,
            pb::DeleteSampleResponse {
                sample: Some(pb::Sample {
                    id: "2".into(),
                    name: "n".into(),
                }),
            },
        )
        .expect_err("other record should be rejected");
        assert!(matches!(err, ApiError::MalformedResponse { .. }));
    }
}
