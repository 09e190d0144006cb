//! Wire messages for `sample.v1`.
//!
//! These are the prost encodings of:
//!
//! ```proto
//! message Sample               { string id = 1; string name = 2; }
//! message ListSamplesRequest   {}
//! message ListSamplesResponse  { repeated Sample samples = 1; }
//! message CreateSampleRequest  { string name = 1; }
//! message CreateSampleResponse { Sample sample = 1; }
//! message UpdateSampleRequest  { string id = 1; string name = 2; }
//! message UpdateSampleResponse { Sample sample = 1; }
//! message DeleteSampleRequest  { string id = 1; }
//! message DeleteSampleResponse { Sample sample = 1; }
//! ```
//!
//! The `sample_service_server` and `sample_service_client` modules are generated at build
//! time.

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Sample {
    #[prost(string, tag = "1")]
    pub id: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub name: ::prost::alloc::string::String,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct ListSamplesRequest {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListSamplesResponse {
    #[prost(message, repeated, tag = "1")]
    pub samples: ::prost::alloc::vec::Vec<Sample>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateSampleRequest {
    #[prost(string, tag = "1")]
    pub name: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateSampleResponse {
    #[prost(message, optional, tag = "1")]
    pub sample: ::core::option::Option<Sample>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpdateSampleRequest {
    #[prost(string, tag = "1")]
    pub id: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub name: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpdateSampleResponse {
    #[prost(message, optional, tag = "1")]
    pub sample: ::core::option::Option<Sample>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteSampleRequest {
    #[prost(string, tag = "1")]
    pub id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteSampleResponse {
    #[prost(message, optional, tag = "1")]
    pub sample: ::core::option::Option<Sample>,
}

include!(concat!(env!("OUT_DIR"), "/sample.v1.SampleService.rs"));

#[cfg(test)]
mod tests {
    use super::*;
    use prost::Message;

    #[test]
    fn test_create_sample_response_wire_encoding_is_lossless() {
        let res = CreateSampleResponse {
            sample: Some(Sample {
                id: "id1".into(),
                name: "name1".into(),
            }),
        };

        let bytes = res.encode_to_vec();
        let decoded = CreateSampleResponse::decode(bytes.as_slice()).expect("should decode");

        assert_eq!(decoded, res);
    }

    #[test]
    fn test_missing_sample_decodes_as_none() {
        let empty: &[u8] = &[];
        let decoded = UpdateSampleResponse::decode(empty).expect("empty message is valid");
        assert_eq!(decoded.sample, None);
    }

    #[test]
    fn test_list_samples_request_is_empty_on_the_wire() {
        assert!(ListSamplesRequest {}.encode_to_vec().is_empty());
    }
}
