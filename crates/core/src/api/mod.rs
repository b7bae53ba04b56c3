//! The low level command envelope spoken over `cgi-bin/api.cgi`
//!
//! Requests are a json array of commands and the camera replies with a json
//! array holding one result per command in the same order.

/// Deserialization of the batched reply
pub mod de;
/// Envelope structures shared by all commands
pub mod model;
/// Typed `param` and `value` payloads of the supported commands
pub mod params;
/// Serialization of the batched request
pub mod ser;
