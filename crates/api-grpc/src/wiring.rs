//! Object-graph assembly: repository → use cases → adapter.
//!
//! Every dependency is passed in explicitly; nothing here is global.

use crate::interceptor::ApiKeyInterceptor;
use crate::service::SampleGrpcService;
use api_shared::pb::sample_service_server::SampleServiceServer;
use sample_core::{
    CreateSampleInteractor, DeleteSampleInteractor, ListSamplesInteractor, SampleRepository,
    UpdateSampleInteractor,
};
use std::sync::Arc;
use tonic::codegen::InterceptedService;

/// Builds the gRPC adapter with one interactor per operation, all sharing `repository`.
pub fn build_sample_service(repository: Arc<dyn SampleRepository>) -> SampleGrpcService {
    SampleGrpcService::new(
        Arc::new(ListSamplesInteractor::new(repository.clone())),
        Arc::new(CreateSampleInteractor::new(repository.clone())),
        Arc::new(UpdateSampleInteractor::new(repository.clone())),
        Arc::new(DeleteSampleInteractor::new(repository)),
    )
}

/// Wraps the adapter in the generated tonic server behind the API-key interceptor.
pub fn build_sample_server(
    service: SampleGrpcService,
    interceptor: ApiKeyInterceptor,
) -> InterceptedService<SampleServiceServer<SampleGrpcService>, ApiKeyInterceptor> {
    SampleServiceServer::with_interceptor(service, interceptor)
}
