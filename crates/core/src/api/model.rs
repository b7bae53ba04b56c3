use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const CMD_LOGIN: &str = "Login";
pub const CMD_LOGOUT: &str = "Logout";
pub const CMD_NVR_DOWNLOAD: &str = "NvrDownload";

/// Plain get/set action
pub const ACTION_DEFAULT: u8 = 0;
/// Query action, used by commands that take a range or want their initial values
pub const ACTION_QUERY: u8 = 1;

/// The token sent in place of a real one while logging in
pub const LOGIN_TOKEN: &str = "null";

/// The status code of a command the device refused
pub const CODE_FAILED: i32 = 1;

/// One named command of a batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Command {
    pub cmd: String,
    pub action: u8,
    pub param: Value,
}

impl Command {
    pub fn new<T: Into<String>>(cmd: T, action: u8, param: Value) -> Self {
        Self {
            cmd: cmd.into(),
            action,
            param,
        }
    }
}

/// The outcome of one command of a batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandResult {
    /// Echo of the command name, not all firmwares send it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cmd: Option<String>,
    pub code: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<RspError>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

/// The error descriptor attached to a failed command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RspError {
    #[serde(rename = "rspCode")]
    pub rsp_code: i32,
    #[serde(default)]
    pub detail: String,
}

impl CommandResult {
    /// The error descriptor, only when the status code is [`CODE_FAILED`]
    ///
    /// Any other code is not a failure, even with a descriptor attached, and a
    /// failed code with no descriptor is let through as well.
    pub fn device_error(&self) -> Option<&RspError> {
        if self.code == CODE_FAILED {
            self.error.as_ref()
        } else {
            None
        }
    }

    pub fn is_error(&self) -> bool {
        self.device_error().is_some()
    }
}
