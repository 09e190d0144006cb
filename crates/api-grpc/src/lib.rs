//! # API gRPC
//!
//! gRPC server implementation for the sample service.
//!
//! Handles:
//! - The service adapter translating wire messages to and from application requests/responses
//! - Error mapping from application failures to `tonic::Status`
//! - API-key authentication via a tonic interceptor
//! - Startup configuration and object-graph wiring
//!
//! Uses `api-shared` for the wire types and `sample-core` for the use cases.

#![warn(rust_2018_idioms)]

pub use api_shared::pb;
pub use config::ServerConfig;
pub use error::ApiError;
pub use interceptor::ApiKeyInterceptor;
pub use service::SampleGrpcService;

pub mod config;
pub mod convert;
pub mod error;
pub mod interceptor;
pub mod server;
pub mod service;
pub mod wiring;
