//! This module handles sending a command batch to the camera
//!
//! The camera side is a single http endpoint, anything able to post a body
//! to it and return the reply can act as a [`Transport`].
//!
use err_derive::Error;

mod http;
#[cfg(test)]
mod scripted;

pub use self::http::HttpTransport;
#[cfg(test)]
pub(crate) use self::scripted::ScriptedTransport;

/// The errors a transport can raise
#[derive(Debug, Error)]
pub enum Error {
    /// The http client failed, covers dns, connect, tls and timeouts
    #[error(display = "Http request failed")]
    Http(#[error(source)] ureq::Error),

    /// The camera answered with an http error status
    #[error(display = "Camera replied with http status {}", _0)]
    Status(u16),

    /// A raw io failure
    #[error(display = "Io error")]
    Io(#[error(source)] std::io::Error),
}

/// One serialised command batch on its way to the camera
#[derive(Debug)]
pub struct ApiRequest<'a> {
    /// Name of the command, only set when the batch holds a single command
    pub cmd: Option<&'a str>,
    /// The session token, or the login placeholder
    pub token: &'a str,
    /// The json array of commands
    pub body: &'a [u8],
}

/// Sends a batch and hands back the raw reply
///
/// Any timeout is the transport's business, nothing above it waits.
pub trait Transport {
    /// Deliver the request and return the reply body
    fn send(&self, request: &ApiRequest<'_>) -> Result<Vec<u8>, Error>;
}
