//! Contains code that is not specific to any of the subcommands
//!
use log::*;

use super::config::CameraConfig;
use anyhow::{Context, Result};
use nvrlink_core::api_protocol::ApiCamera;

/// Connect to the camera of the config and login
pub(crate) fn connect_and_login(camera_config: &CameraConfig) -> Result<ApiCamera> {
    info!(
        "{}: Connecting to camera at {}",
        camera_config.name, camera_config.camera_addr
    );

    let camera = ApiCamera::new(
        &camera_config.camera_addr,
        camera_config.credentials(),
        camera_config.options(),
    )
    .with_context(|| {
        format!(
            "Failed to login to camera {} at {}",
            camera_config.name, camera_config.camera_addr
        )
    })?;

    info!(
        "{}: Connected and logged in using the {} stream profile",
        camera_config.name,
        camera.stream()
    );

    Ok(camera)
}
