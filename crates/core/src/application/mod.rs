//! Application layer.
//!
//! Requests and responses are per-operation carriers built from value objects (requests) or
//! entities (responses). A successfully constructed request or response is internally
//! consistent, so code downstream of construction never re-validates it.

pub mod request;
pub mod response;
pub mod use_case;
