//! Use-case capabilities.
//!
//! Each operation is a single-method trait so callers (the gRPC adapter) depend on exactly
//! the capability they invoke. The interactors are the concrete implementations; they reach
//! storage through an injected [`SampleRepository`].
//!
//! Cancellation follows the caller: dropping the returned future abandons the operation.
//! Nothing here retries or recovers a failure.

use crate::application::request::{
    CreateSampleRequest, DeleteSampleRequest, ListSamplesRequest, UpdateSampleRequest,
};
use crate::application::response::{
    CreateSampleResponse, DeleteSampleResponse, ListSamplesResponse, UpdateSampleResponse,
};
use crate::error::{SampleError, SampleResult};
use crate::repository::SampleRepository;
use crate::sample::Sample;
use async_trait::async_trait;
use std::sync::Arc;

#[async_trait]
pub trait ListSamplesUseCase: Send + Sync {
    async fn execute(&self, request: ListSamplesRequest) -> SampleResult<ListSamplesResponse>;
}

#[async_trait]
pub trait CreateSampleUseCase: Send + Sync {
    async fn execute(&self, request: CreateSampleRequest) -> SampleResult<CreateSampleResponse>;
}

#[async_trait]
pub trait UpdateSampleUseCase: Send + Sync {
    async fn execute(&self, request: UpdateSampleRequest) -> SampleResult<UpdateSampleResponse>;
}

#[async_trait]
pub trait DeleteSampleUseCase: Send + Sync {
    async fn execute(&self, request: DeleteSampleRequest) -> SampleResult<DeleteSampleResponse>;
}

#[derive(Clone)]
pub struct ListSamplesInteractor {
    repository: Arc<dyn SampleRepository>,
}

impl ListSamplesInteractor {
    pub fn new(repository: Arc<dyn SampleRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl ListSamplesUseCase for ListSamplesInteractor {
    async fn execute(&self, _request: ListSamplesRequest) -> SampleResult<ListSamplesResponse> {
        let samples = self.repository.list().await?;
        Ok(ListSamplesResponse::new(samples))
    }
}

#[derive(Clone)]
pub struct CreateSampleInteractor {
    repository: Arc<dyn SampleRepository>,
}

impl CreateSampleInteractor {
    pub fn new(repository: Arc<dyn SampleRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl CreateSampleUseCase for CreateSampleInteractor {
    async fn execute(&self, request: CreateSampleRequest) -> SampleResult<CreateSampleResponse> {
        let sample = self.repository.create(request.into_name()).await?;
        tracing::info!("created sample {}", sample.id());
        Ok(CreateSampleResponse::new(sample))
    }
}

#[derive(Clone)]
pub struct UpdateSampleInteractor {
    repository: Arc<dyn SampleRepository>,
}

impl UpdateSampleInteractor {
    pub fn new(repository: Arc<dyn SampleRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UpdateSampleUseCase for UpdateSampleInteractor {
    async fn execute(&self, request: UpdateSampleRequest) -> SampleResult<UpdateSampleResponse> {
        let candidate = Sample::new(request.id().clone(), request.name().clone());
        let updated = self
            .repository
            .update(candidate)
            .await?
            .ok_or_else(|| SampleError::NotFound(request.id().clone()))?;
        tracing::info!("updated sample {}", updated.id());
        UpdateSampleResponse::new(&request, updated)
    }
}

#[derive(Clone)]
pub struct DeleteSampleInteractor {
    repository: Arc<dyn SampleRepository>,
}

impl DeleteSampleInteractor {
    pub fn new(repository: Arc<dyn SampleRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl DeleteSampleUseCase for DeleteSampleInteractor {
    async fn execute(&self, request: DeleteSampleRequest) -> SampleResult<DeleteSampleResponse> {
        let deleted = self
            .repository
            .delete(request.id())
            .await?
            .ok_or_else(|| SampleError::NotFound(request.id().clone()))?;
        tracing::info!("deleted sample {}", deleted.id());
        DeleteSampleResponse::new(&request, deleted)
    }
}
