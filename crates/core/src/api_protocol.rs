use crate::api::{self, model::*};
use log::*;
use std::time::Duration;

mod connection;
mod credentials;
mod errors;
mod login;
mod logout;
mod nvr_download;
mod session;
mod stream;
mod time;

pub use connection::{ApiRequest, Error as ConnectionError, HttpTransport, Transport};
pub use credentials::Credentials;
pub use errors::Error;
pub use nvr_download::NvrDownload;
pub use session::CameraSession;
pub use stream::StreamKind;
pub use self::time::{local_now, TimeRange};

pub(crate) type Result<T> = std::result::Result<T, Error>;

/// Used when no timeout is configured
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Anything that can run a batch of commands against a logged in camera
///
/// Protocol operations such as [`NvrDownload`] only depend on this, not on
/// [`ApiCamera`] itself.
pub trait CommandExecutor {
    /// Run the commands as one batch
    ///
    /// The results are index aligned with `commands`. A device reported error
    /// on one command is returned inside its [`CommandResult`] rather than as
    /// an `Err`.
    fn execute_commands(&self, commands: &[Command]) -> Result<Vec<CommandResult>>;

    /// Run a single command as a batch of one
    fn execute_command(&self, command: Command) -> Result<CommandResult> {
        let results = self.execute_commands(std::slice::from_ref(&command))?;
        single_result(results)
    }
}

/// Options used when creating an [`ApiCamera`]
#[derive(Debug, Clone)]
pub struct CameraOptions {
    /// The channel of an NVR, zero based. Cameras only have channel 0
    pub channel_id: u8,
    /// Stream profile, either "main" or "sub"
    pub stream: String,
    /// Use https instead of http
    pub https: bool,
    /// Proxy url e.g. `socks5://127.0.0.1:8000`
    pub proxy: Option<String>,
    /// Timeout of a whole request/reply
    pub timeout: Duration,
    /// Do not login during creation, [`ApiCamera::login`] must be called later
    pub defer_login: bool,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            channel_id: 0,
            stream: StreamKind::Main.to_string(),
            https: false,
            proxy: None,
            timeout: DEFAULT_TIMEOUT,
            defer_login: false,
        }
    }
}

#[derive(Debug)]
struct Token {
    name: String,
    lease_time: u32,
}

///
/// This is the primary struct of this library when interacting with the camera
///
pub struct ApiCamera {
    address: String,
    channel_id: u8,
    stream: StreamKind,
    transport: Box<dyn Transport>,
    credentials: Credentials,
    token: Option<Token>,
}

impl ApiCamera {
    ///
    /// Create a new camera interface using http(s) to this address
    ///
    /// # Parameters
    ///
    /// * `address` - The address of the camera either ip address or hostname with an optional port
    ///
    /// * `credentials` - The username and password to login with
    ///
    /// * `options` - Channel, stream and transport settings
    ///
    /// # Returns
    ///
    /// returns either an error or the camera, logged in unless `options.defer_login` is set
    ///
    pub fn new<T: Into<String>>(
        address: T,
        credentials: Credentials,
        options: CameraOptions,
    ) -> Result<Self> {
        let address = address.into();
        let stream = options.stream.parse()?;
        let transport = HttpTransport::new(
            &address,
            options.https,
            options.proxy.as_deref(),
            options.timeout,
        )?;
        Self::create(address, credentials, &options, stream, Box::new(transport))
    }

    ///
    /// Create a new camera interface that sends its commands through `transport`
    ///
    /// The transport settings of `options` (https, proxy, timeout) are the
    /// responsibility of the given transport and are ignored here.
    ///
    pub fn new_with_transport<T: Into<String>>(
        address: T,
        credentials: Credentials,
        options: CameraOptions,
        transport: Box<dyn Transport>,
    ) -> Result<Self> {
        let stream = options.stream.parse()?;
        Self::create(address.into(), credentials, &options, stream, transport)
    }

    fn create(
        address: String,
        credentials: Credentials,
        options: &CameraOptions,
        stream: StreamKind,
        transport: Box<dyn Transport>,
    ) -> Result<Self> {
        let mut me = Self {
            address,
            channel_id: options.channel_id,
            stream,
            transport,
            credentials,
            token: None,
        };
        if options.defer_login {
            debug!("{}: Login deferred", me.address);
        } else {
            me.login()?;
        }
        Ok(me)
    }

    /// The address given at creation
    pub fn address(&self) -> &str {
        &self.address
    }

    /// The NVR channel given at creation
    pub fn channel_id(&self) -> u8 {
        self.channel_id
    }

    /// The stream profile given at creation
    pub fn stream(&self) -> StreamKind {
        self.stream
    }

    /// True while a session token is held
    pub fn is_logged_in(&self) -> bool {
        self.token.is_some()
    }

    /// How long the camera said the current token stays valid for
    pub fn token_lease(&self) -> Option<Duration> {
        self.token
            .as_ref()
            .map(|t| Duration::from_secs(t.lease_time.into()))
    }

    // Sends the batch with whichever token is given, login uses a placeholder
    fn send_batch(&self, commands: &[Command], token: &str) -> Result<Vec<CommandResult>> {
        if commands.is_empty() {
            return Ok(vec![]);
        }
        let body = api::ser::serialize_commands(commands)?;
        // The cmd query is only understood when there is exactly one command
        let cmd = match commands {
            [single] => Some(single.cmd.as_str()),
            _ => None,
        };
        debug!(
            "{}: Sending {} command(s) {}",
            self.address,
            commands.len(),
            cmd.unwrap_or("(batch)")
        );
        let reply = self.transport.send(&ApiRequest {
            cmd,
            token,
            body: &body,
        })?;
        trace!("{}: Reply {}", self.address, String::from_utf8_lossy(&reply));
        Ok(api::de::deserialize_results(&reply, commands.len())?)
    }
}

impl CommandExecutor for ApiCamera {
    fn execute_commands(&self, commands: &[Command]) -> Result<Vec<CommandResult>> {
        let token = self.token.as_ref().ok_or(Error::NotLoggedIn)?;
        self.send_batch(commands, &token.name)
    }
}

impl std::fmt::Debug for ApiCamera {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiCamera")
            .field("address", &self.address)
            .field("channel_id", &self.channel_id)
            .field("stream", &self.stream)
            .field("credentials", &self.credentials)
            .field("logged_in", &self.is_logged_in())
            .finish()
    }
}

impl Drop for ApiCamera {
    fn drop(&mut self) {
        if let Err(err) = self.logout() {
            warn!("{}: Could not log out, ignoring: {}", self.address, err);
        }
    }
}

/// Take the only result of a batch of one
pub(crate) fn single_result(results: Vec<CommandResult>) -> Result<CommandResult> {
    let received = results.len();
    let mut results = results.into_iter();
    match (results.next(), results.next()) {
        (Some(result), None) => Ok(result),
        _ => Err(api::de::Error::CountMismatch { sent: 1, received }.into()),
    }
}

/// Turn a device reported error on `cmd` into an [`Error::CommandFailed`]
///
/// Only a failed code carrying an error descriptor is an error, any other
/// non zero code is let through.
pub(crate) fn check_result(cmd: &str, result: CommandResult) -> Result<CommandResult> {
    if let Some(err) = result.device_error() {
        return Err(Error::CommandFailed {
            cmd: cmd.to_string(),
            rsp_code: err.rsp_code,
            detail: err.detail.clone(),
        });
    }
    if result.code != 0 {
        debug!(
            "{} returned code {}, treating as success",
            cmd, result.code
        );
    }
    Ok(result)
}
