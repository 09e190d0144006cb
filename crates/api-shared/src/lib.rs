//! # API Shared
//!
//! Shared definitions for the sample service API.
//!
//! Contains:
//! - Protobuf wire messages and the generated gRPC stubs (`pb` module)
//! - API-key validation (usable by servers and interceptors)
//!
//! Used by `api-grpc` and `sample-cli`.

pub mod auth;
pub mod pb;

pub use pb::*;
