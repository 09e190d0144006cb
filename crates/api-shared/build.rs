//! Build script for the `api-shared` crate.
//!
//! ## Purpose
//! Generates the tonic server and client stubs for `sample.v1.SampleService`.
//!
//! ## Intended use
//! The message types are declared by hand in `src/pb.rs` with `prost` derives, so the stubs
//! are produced with tonic-build's manual builder and no `protoc` install is needed. Every
//! method uses the prost codec, which keeps the service wire-compatible with `sample.proto`
//! clients.

use tonic_build::manual::{Builder, Method, Service};

fn method(name: &str, route_name: &str, input: &str, output: &str) -> Method {
    Method::builder()
        .name(name)
        .route_name(route_name)
        .input_type(format!("crate::pb::{input}"))
        .output_type(format!("crate::pb::{output}"))
        .codec_path("tonic::codec::ProstCodec")
        .build()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let service = Service::builder()
        .name("SampleService")
        .package("sample.v1")
        .method(method(
            "list_samples",
            "ListSamples",
            "ListSamplesRequest",
            "ListSamplesResponse",
        ))
        .method(method(
            "create_sample",
            "CreateSample",
            "CreateSampleRequest",
            "CreateSampleResponse",
        ))
        .method(method(
            "update_sample",
            "UpdateSample",
            "UpdateSampleRequest",
            "UpdateSampleResponse",
        ))
        .method(method(
            "delete_sample",
            "DeleteSample",
            "DeleteSampleRequest",
            "DeleteSampleResponse",
        ))
        .build();

    println!("cargo:rerun-if-changed=build.rs");
    Builder::new()
        .build_server(true)
        .build_client(true)
        .compile(&[service]);

    Ok(())
}
