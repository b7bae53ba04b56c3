use super::{ApiRequest, Error, Transport};
use crate::api_protocol::Error as ApiError;
use log::*;
use std::time::Duration;
use ureq::{tls::TlsConfig, Agent, Proxy};

/// The path of the command api on every reolink device
const API_PATH: &str = "cgi-bin/api.cgi";

/// A blocking [`Transport`] speaking http or https to the camera
pub struct HttpTransport {
    agent: Agent,
    url: String,
}

impl HttpTransport {
    ///
    /// Create the transport for a camera at `address`
    ///
    /// # Parameters
    ///
    /// * `address` - host or host:port of the camera
    ///
    /// * `https` - use https, certificates are not verified as cameras use self signed ones
    ///
    /// * `proxy` - optional proxy url such as `socks5://127.0.0.1:8000`, without
    ///   one the requests go direct and proxy environment variables are ignored
    ///
    /// * `timeout` - limit on a whole request and reply
    ///
    pub fn new(
        address: &str,
        https: bool,
        proxy: Option<&str>,
        timeout: Duration,
    ) -> Result<Self, ApiError> {
        let scheme = if https { "https" } else { "http" };
        let proxy = proxy
            .map(|proxy| {
                Proxy::new(proxy).map_err(|e| ApiError::InvalidProxy(format!("{}: {}", proxy, e)))
            })
            .transpose()?;
        let mut config = Agent::config_builder()
            .timeout_global(Some(timeout))
            .proxy(proxy);
        if https {
            config = config.tls_config(TlsConfig::builder().disable_verification(true).build());
        }
        Ok(Self {
            agent: Agent::new_with_config(config.build()),
            url: format!("{}://{}/{}", scheme, address, API_PATH),
        })
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: &ApiRequest<'_>) -> Result<Vec<u8>, Error> {
        // The token is left out of the logs
        debug!("POST {} cmd={}", self.url, request.cmd.unwrap_or("(batch)"));
        let mut builder = self
            .agent
            .post(self.url.as_str())
            .header("Content-Type", "application/json");
        if let Some(cmd) = request.cmd {
            builder = builder.query("cmd", cmd);
        }
        let mut response = builder
            .query("token", request.token)
            .send(request.body)
            .map_err(|e| match e {
                ureq::Error::StatusCode(code) => Error::Status(code),
                e => Error::Http(e),
            })?;
        Ok(response.body_mut().read_to_vec()?)
    }
}
