#![warn(missing_docs)]
//! # NvrLink-Core
//!
//! NvrLink-Core is a rust library for talking to the http command api of reolink
//! cameras and NVRs.
//!
//! Most high level camera controls are in the [`api_protocol`] module
//!
//! A camera is created and logged in with
//!
//! ```no_run
//! use nvrlink_core::api_protocol::{ApiCamera, CameraOptions, Credentials};
//! let credentials = Credentials::new("admin", Some("password"));
//! let camera = ApiCamera::new("192.168.1.20", credentials, CameraOptions::default()).unwrap();
//! ```
//!
//! Recordings on an NVR channel can then be listed with
//!
//! ```no_run
//! # use nvrlink_core::api_protocol::{ApiCamera, CameraOptions, Credentials};
//! use nvrlink_core::api_protocol::{NvrDownload, TimeRange};
//! # let mut camera = ApiCamera::new("192.168.1.20", Credentials::default(), CameraOptions::default()).unwrap();
//! let range = TimeRange::ending_now(std::time::Duration::from_secs(5 * 60));
//! let files = camera.with_session(|cam| cam.get_nvr_files(&range, 0)).unwrap();
//! ```
//! For further commands see the [`api_protocol::ApiCamera`] struct.
//!

/// Contains low level command envelope structures and formats
pub mod api;
/// Contains high level interfaces for the camera
pub mod api_protocol;

/// This is the top level error structure of the library
///
/// Most commands will either return their `Ok(result)` or this `Err(Error)`
pub use api_protocol::Error;
