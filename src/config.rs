use anyhow::{anyhow, Result};
use nvrlink_core::api_protocol::{CameraOptions, Credentials, DEFAULT_TIMEOUT};
use serde::Deserialize;
use std::clone::Clone;
use std::time::Duration;
use validator::{Validate, ValidationError};
use validator_derive::Validate;

#[derive(Debug, Deserialize, Validate, Clone)]
pub(crate) struct Config {
    #[validate]
    pub(crate) cameras: Vec<CameraConfig>,
}

#[derive(Debug, Deserialize, Validate, Clone)]
#[validate(schema(function = "validate_camera_config"))]
pub(crate) struct CameraConfig {
    pub(crate) name: String,

    #[serde(rename = "address")]
    pub(crate) camera_addr: String,

    #[serde(default = "default_username")]
    pub(crate) username: String,
    pub(crate) password: Option<String>,

    #[validate(range(min = 0, max = 63, message = "Invalid channel", code = "channel_id"))]
    #[serde(default = "default_channel_id")]
    pub(crate) channel_id: u8,

    #[serde(default = "default_stream")]
    pub(crate) stream: String,

    #[serde(default)]
    pub(crate) https: bool,

    pub(crate) proxy: Option<String>,

    /// Seconds
    #[serde(default = "default_timeout")]
    pub(crate) timeout: u64,
}

fn default_username() -> String {
    "admin".to_string()
}

fn default_channel_id() -> u8 {
    0
}

fn default_stream() -> String {
    "main".to_string()
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}

fn validate_camera_config(camera_config: &CameraConfig) -> Result<(), ValidationError> {
    if camera_config.camera_addr.trim().is_empty() {
        return Err(ValidationError::new("Camera address must not be empty"));
    }
    if camera_config.timeout == 0 {
        return Err(ValidationError::new("Timeout must be at least one second"));
    }
    Ok(())
}

impl Config {
    pub(crate) fn get_camera_config(&self, name: &str) -> Result<&CameraConfig> {
        self.cameras
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| anyhow!("Camera {} not found in the config file", name))
    }
}

impl CameraConfig {
    pub(crate) fn credentials(&self) -> Credentials {
        Credentials::new(self.username.clone(), self.password.clone())
    }

    pub(crate) fn options(&self) -> CameraOptions {
        CameraOptions {
            channel_id: self.channel_id,
            stream: self.stream.clone(),
            https: self.https,
            proxy: self.proxy.clone(),
            timeout: Duration::from_secs(self.timeout),
            defer_login: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn test_defaults() {
        let config: Config = toml::from_str(indoc! {r#"
            [[cameras]]
            name = "nvr"
            address = "192.168.1.10"
        "#})
        .unwrap();
        config.validate().unwrap();

        let camera = config.get_camera_config("nvr").unwrap();
        assert_eq!(camera.username, "admin");
        assert_eq!(camera.password, None);
        let options = camera.options();
        assert_eq!(options.channel_id, 0);
        assert_eq!(options.stream, "main");
        assert!(!options.https);
        assert_eq!(options.proxy, None);
        assert_eq!(options.timeout, DEFAULT_TIMEOUT);
        assert!(!options.defer_login);
    }

    #[test]
    fn test_full() {
        let config: Config = toml::from_str(indoc! {r#"
            [[cameras]]
            name = "driveway"
            address = "nvr.local:8443"
            username = "viewer"
            password = "hunter2"
            channel_id = 3
            stream = "sub"
            https = true
            proxy = "socks5://127.0.0.1:8000"
            timeout = 90
        "#})
        .unwrap();
        config.validate().unwrap();

        let camera = config.get_camera_config("driveway").unwrap();
        let credentials = camera.credentials();
        assert_eq!(credentials.username, "viewer");
        assert_eq!(credentials.password.as_deref(), Some("hunter2"));
        let options = camera.options();
        assert_eq!(options.channel_id, 3);
        assert_eq!(options.stream, "sub");
        assert!(options.https);
        assert_eq!(options.proxy.as_deref(), Some("socks5://127.0.0.1:8000"));
        assert_eq!(options.timeout, Duration::from_secs(90));
    }

    #[test]
    fn test_invalid() {
        let config: Config = toml::from_str(indoc! {r#"
            [[cameras]]
            name = "nvr"
            address = "192.168.1.10"
            channel_id = 200
        "#})
        .unwrap();
        assert!(config.validate().is_err());

        let config: Config = toml::from_str(indoc! {r#"
            [[cameras]]
            name = "nvr"
            address = "192.168.1.10"
            timeout = 0
        "#})
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_camera() {
        let config: Config = toml::from_str(indoc! {r#"
            [[cameras]]
            name = "nvr"
            address = "192.168.1.10"
        "#})
        .unwrap();
        assert!(config.get_camera_config("garage").is_err());
    }
}
