//! # Sample Core
//!
//! Domain entity and application layer for the sample service.
//!
//! This crate contains:
//! - The [`Sample`] entity, assembled only from validated value objects
//! - Per-operation application requests and responses
//! - The four use-case capabilities (list, create, update, delete) and their interactors
//! - The [`SampleRepository`] persistence port plus an in-memory implementation
//!
//! **No API concerns**: wire messages, gRPC servers and authentication belong in `api-shared`
//! and `api-grpc`.

pub mod application;
pub mod error;
pub mod repository;
pub mod sample;

pub use application::request::{
    CreateSampleRequest, DeleteSampleRequest, ListSamplesRequest, UpdateSampleRequest,
};
pub use application::response::{
    CreateSampleResponse, DeleteSampleResponse, ListSamplesResponse, UpdateSampleResponse,
};
pub use application::use_case::{
    CreateSampleInteractor, CreateSampleUseCase, DeleteSampleInteractor, DeleteSampleUseCase,
    ListSamplesInteractor, ListSamplesUseCase, UpdateSampleInteractor, UpdateSampleUseCase,
};
pub use error::{SampleError, SampleResult};
pub use repository::{InMemorySampleRepository, SampleRepository};
pub use sample::Sample;
pub use sample_types::{SampleId, SampleName, ValueError};
