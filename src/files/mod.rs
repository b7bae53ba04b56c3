///
/// # NvrLink Files
///
/// This module handles the files subcommand
///
/// The subcommand lists the names of the recordings an NVR holds on a
/// channel for a window of time, one per line.
///
/// # Usage
///
/// ```bash
/// # The last complete 5 minutes of the channel in the config
/// nvrlink files --config=config.toml CameraName
/// # A given window on the fourth channel ("CH04" in the app)
/// nvrlink files --config=config.toml --channel 3 \
///     --start 2024-01-01T00:00:00 --end 2024-01-01T00:05:00 CameraName
/// ```
///
use anyhow::{Context, Result};
use log::*;
use nvrlink_core::api_protocol::{local_now, NvrDownload, TimeRange};
use std::time::Duration;
use time::{PrimitiveDateTime, Time};

mod cmdline;

use super::config::Config;
use crate::utils::connect_and_login;
pub(crate) use cmdline::Opt;

/// Entry point for the files subcommand
///
/// Opt is the command line options
pub(crate) fn main(opt: Opt, config: Config) -> Result<()> {
    let camera_config = config.get_camera_config(&opt.camera)?;
    let channel = opt.channel.unwrap_or(camera_config.channel_id);
    let range = window(opt.start, opt.end, opt.minutes, local_now())?;

    let mut camera = connect_and_login(camera_config)?;

    info!(
        "{}: Getting files on channel {} from {} to {}",
        camera_config.name, channel, range.start, range.end
    );
    let files = camera
        .with_session(|camera| camera.get_nvr_files(&range, channel))
        .with_context(|| format!("Could not get the files of {}", camera_config.name))?;

    info!("{}: {} files", camera_config.name, files.len());
    for file in files {
        println!("{}", file);
    }

    Ok(())
}

/// The window to search, `now` is only used when no end is given
fn window(
    start: Option<PrimitiveDateTime>,
    end: Option<PrimitiveDateTime>,
    minutes: u32,
    now: PrimitiveDateTime,
) -> Result<TimeRange> {
    let end = match end {
        Some(end) => end,
        None => round_down(now, minutes)?,
    };
    Ok(match start {
        Some(start) => TimeRange::new(start, end),
        None => TimeRange::ending_at(end, Duration::from_secs(u64::from(minutes) * 60)),
    })
}

// Down to a multiple of `minutes` within the hour, so the window is one the
// NVR has finished writing
fn round_down(now: PrimitiveDateTime, minutes: u32) -> Result<PrimitiveDateTime> {
    let minute = u32::from(now.minute()) / minutes * minutes;
    let time = Time::from_hms(now.hour(), minute as u8, 0)?;
    Ok(now.replace_time(time))
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn test_default_window() {
        let range = window(None, None, 5, datetime!(2024-01-01 10:08:41.5)).unwrap();
        assert_eq!(range.start, datetime!(2024-01-01 10:00:00));
        assert_eq!(range.end, datetime!(2024-01-01 10:05:00));
    }

    #[test]
    fn test_window_over_midnight() {
        let range = window(None, None, 15, datetime!(2024-01-01 00:03:00)).unwrap();
        assert_eq!(range.start, datetime!(2023-12-31 23:45:00));
        assert_eq!(range.end, datetime!(2024-01-01 00:00:00));
    }

    #[test]
    fn test_given_window() {
        let now = datetime!(2030-01-01 00:00:00);
        let range = window(
            Some(datetime!(2024-01-01 00:00:00)),
            Some(datetime!(2024-01-01 00:05:00)),
            5,
            now,
        )
        .unwrap();
        assert_eq!(range.start, datetime!(2024-01-01 00:00:00));
        assert_eq!(range.end, datetime!(2024-01-01 00:05:00));

        let range = window(None, Some(datetime!(2024-01-01 00:05:00)), 10, now).unwrap();
        assert_eq!(range.start, datetime!(2023-12-31 23:55:00));
    }

    #[test]
    fn test_long_window_rounds_to_hour() {
        let range = window(None, None, 90, datetime!(2024-01-01 10:59:00)).unwrap();
        assert_eq!(range.end, datetime!(2024-01-01 10:00:00));
        assert_eq!(range.start, datetime!(2024-01-01 08:30:00));
    }
}
