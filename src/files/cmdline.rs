use anyhow::{Context, Result};
use clap::Parser;
use time::{macros::format_description, PrimitiveDateTime};

fn datetime_parse(src: &str) -> Result<PrimitiveDateTime> {
    PrimitiveDateTime::parse(
        src,
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
    )
    .with_context(|| {
        format!(
            "Could not understand {}, check your input, should be YYYY-MM-DDTHH:MM:SS",
            src
        )
    })
}

/// The files command will list the recordings an NVR holds for a window of time
#[derive(Parser, Debug)]
pub struct Opt {
    /// The name of the camera to search. Must be a name in the config
    pub camera: String,
    /// Zero based channel to search, defaults to the channel_id of the config
    #[arg(long)]
    pub channel: Option<u8>,
    /// Start of the window as local time YYYY-MM-DDTHH:MM:SS
    #[arg(long, value_parser = datetime_parse)]
    pub start: Option<PrimitiveDateTime>,
    /// End of the window as local time YYYY-MM-DDTHH:MM:SS, defaults to now
    /// rounded down to a whole window
    #[arg(long, value_parser = datetime_parse)]
    pub end: Option<PrimitiveDateTime>,
    /// Length of the window when no start is given. NVRs tend to time out
    /// past about 15 minutes
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u32).range(1..))]
    pub minutes: u32,
}
