use crate::convert::{self, CREATE_SAMPLE, DELETE_SAMPLE, LIST_SAMPLES, UPDATE_SAMPLE};
use crate::error::ApiError;
use api_shared::pb;
use api_shared::pb::sample_service_server::SampleService;
use sample_core::{
    CreateSampleUseCase, DeleteSampleUseCase, ListSamplesUseCase, UpdateSampleUseCase,
};
use std::sync::Arc;
use tonic::{Request, Response, Status};

/// gRPC adapter for `sample.v1.SampleService`.
///
/// Each RPC decodes and validates the wire request, invokes the matching use case and encodes
/// the application response. Validation failures abort before any use case runs; use-case
/// failures are wrapped with the operation name and returned once, never retried. The adapter
/// holds no per-call state, so concurrent calls are independent.
#[derive(Clone)]
pub struct SampleGrpcService {
    list_samples: Arc<dyn ListSamplesUseCase>,
    create_sample: Arc<dyn CreateSampleUseCase>,
    update_sample: Arc<dyn UpdateSampleUseCase>,
    delete_sample: Arc<dyn DeleteSampleUseCase>,
}

impl SampleGrpcService {
    pub fn new(
        list_samples: Arc<dyn ListSamplesUseCase>,
        create_sample: Arc<dyn CreateSampleUseCase>,
        update_sample: Arc<dyn UpdateSampleUseCase>,
        delete_sample: Arc<dyn DeleteSampleUseCase>,
    ) -> Self {
        Self {
            list_samples,
            create_sample,
            update_sample,
            delete_sample,
        }
    }

    pub async fn handle_list_samples(
        &self,
        req: pb::ListSamplesRequest,
    ) -> Result<pb::ListSamplesResponse, ApiError> {
        let request = convert::list_samples_request_from_pb(req);
        let response = self
            .list_samples
            .execute(request)
            .await
            .map_err(|e| ApiError::from_use_case(LIST_SAMPLES, e))?;
        Ok(convert::list_samples_response_to_pb(&response))
    }

    pub async fn handle_create_sample(
        &self,
        req: pb::CreateSampleRequest,
    ) -> Result<pb::CreateSampleResponse, ApiError> {
        let request = convert::create_sample_request_from_pb(req)?;
        let response = self
            .create_sample
            .execute(request)
            .await
            .map_err(|e| ApiError::from_use_case(CREATE_SAMPLE, e))?;
        Ok(convert::create_sample_response_to_pb(&response))
    }

    pub async fn handle_update_sample(
        &self,
        req: pb::UpdateSampleRequest,
    ) -> Result<pb::UpdateSampleResponse, ApiError> {
        let request = convert::update_sample_request_from_pb(req)?;
        let response = self
            .update_sample
            .execute(request)
            .await
            .map_err(|e| ApiError::from_use_case(UPDATE_SAMPLE, e))?;
        Ok(convert::update_sample_response_to_pb(&response))
    }

    pub async fn handle_delete_sample(
        &self,
        req: pb::DeleteSampleRequest,
    ) -> Result<pb::DeleteSampleResponse, ApiError> {
        let request = convert::delete_sample_request_from_pb(req)?;
        let response = self
            .delete_sample
            .execute(request)
            .await
            .map_err(|e| ApiError::from_use_case(DELETE_SAMPLE, e))?;
        Ok(convert::delete_sample_response_to_pb(&response))
    }
}

/// Logs a failed call and converts it to the status returned to the client.
fn reject(err: ApiError) -> Status {
    if err.is_client_error() {
        tracing::warn!("rejected {} call: {}", err.operation(), err);
    } else {
        tracing::error!("{} failed: {}", err.operation(), err);
    }
    Status::from(err)
}

#[tonic::async_trait]
impl SampleService for SampleGrpcService {
    async fn list_samples(
        &self,
        req: Request<pb::ListSamplesRequest>,
    ) -> Result<Response<pb::ListSamplesResponse>, Status> {
        tracing::debug!("{} called", LIST_SAMPLES);
        self.handle_list_samples(req.into_inner())
            .await
            .map(Response::new)
            .map_err(reject)
    }

    async fn create_sample(
        &self,
        req: Request<pb::CreateSampleRequest>,
    ) -> Result<Response<pb::CreateSampleResponse>, Status> {
        tracing::debug!("{} called", CREATE_SAMPLE);
        self.handle_create_sample(req.into_inner())
            .await
            .map(Response::new)
            .map_err(reject)
    }

    async fn update_sample(
        &self,
        req: Request<pb::UpdateSampleRequest>,
    ) -> Result<Response<pb::UpdateSampleResponse>, Status> {
        tracing::debug!("{} called", UPDATE_SAMPLE);
        self.handle_update_sample(req.into_inner())
            .await
            .map(Response::new)
            .map_err(reject)
    }

    async fn delete_sample(
        &self,
        req: Request<pb::DeleteSampleRequest>,
    ) -> Result<Response<pb::DeleteSampleResponse>, Status> {
        tracing::debug!("{} called", DELETE_SAMPLE);
        self.handle_delete_sample(req.into_inner())
            .await
            .map(Response::new)
            .map_err(reject)
    }
}
