use super::connection;
use crate::api::{de, model::CommandResult, ser};
use err_derive::Error;

/// This is the primary error type of the library
#[derive(Debug, Error)]
pub enum Error {
    /// Error raised during deserlization
    #[error(display = "Deserialization error")]
    Deserialization(#[error(source)] de::Error),

    /// Error raised during serlization
    #[error(display = "Serialization error")]
    Serialization(#[error(source)] ser::Error),

    /// Raised when the request could not be sent or the reply not received
    #[error(display = "Connection error")]
    ConnectionError(#[error(source)] connection::Error),

    /// Raised when a reply was not understood
    #[error(display = "Communication error: {}", why)]
    UnintelligibleReply {
        /// The result that was not understood
        reply: Box<CommandResult>,
        /// The message attached to the error
        why: &'static str,
    },

    /// Raised when the camera reports an error for a command
    #[error(display = "Command {} failed: rspCode: {}, {}", cmd, rsp_code, detail)]
    CommandFailed {
        /// The command that failed
        cmd: String,
        /// The code reported by the camera
        rsp_code: i32,
        /// The human readable detail reported by the camera
        detail: String,
    },

    /// Raised when the stream profile is not one the camera has
    #[error(display = "Stream must be either \"main\" or \"sub\" not {:?}", _0)]
    InvalidStream(String),

    /// Raised when the proxy url cannot be used
    #[error(display = "Invalid proxy {}", _0)]
    InvalidProxy(String),

    /// Raised when the camera rejects the credentials
    #[error(display = "Credential error")]
    AuthFailed,

    /// Raised when the camera could not be reached to login
    #[error(display = "Unable to reach camera to login")]
    LoginUnreachable(#[error(source, no_from)] connection::Error),

    /// Raised when a command is sent before logging in
    #[error(display = "Not logged in")]
    NotLoggedIn,
}

impl Error {
    /// True for the errors raised by a failed login
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Error::AuthFailed | Error::LoginUnreachable(_))
    }
}
