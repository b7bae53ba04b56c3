use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use time::PrimitiveDateTime;

/// `param` of the Login command
#[derive(Debug, Serialize)]
pub struct LoginParam {
    #[serde(rename = "User")]
    pub user: LoginUser,
}

#[derive(Debug, Serialize)]
pub struct LoginUser {
    #[serde(rename = "userName")]
    pub user_name: String,
    pub password: String,
}

/// `value` of a successful Login
#[derive(Debug, Deserialize)]
pub struct LoginValue {
    #[serde(rename = "Token")]
    pub token: TokenValue,
}

#[derive(Debug, Deserialize)]
pub struct TokenValue {
    pub name: String,
    /// Seconds before the camera expires the token
    #[serde(rename = "leaseTime", default)]
    pub lease_time: u32,
}

/// `param` of the NvrDownload command
#[derive(Debug, Serialize)]
pub struct NvrDownloadParam {
    #[serde(rename = "NvrDownload")]
    pub nvr_download: NvrDownloadRange,
}

#[derive(Debug, Serialize)]
pub struct NvrDownloadRange {
    pub channel: u8,
    #[serde(rename = "StartTime")]
    pub start_time: ApiTime,
    #[serde(rename = "EndTime")]
    pub end_time: ApiTime,
}

/// `value` of the NvrDownload command
#[derive(Debug, Deserialize)]
pub struct NvrDownloadValue {
    #[serde(rename = "fileList", default)]
    pub file_list: Option<Vec<Value>>,
}

/// A recording reported by the NVR
///
/// Only the name is understood; whatever else the NVR attaches (motion
/// timestamps, sizes) is kept as is in `other`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FileRecord {
    #[serde(rename = "fileName", default)]
    pub file_name: Option<String>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

/// Wall clock time as the camera writes it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiTime {
    pub year: i32,
    pub mon: u8,
    pub day: u8,
    pub hour: u8,
    pub min: u8,
    pub sec: u8,
}

impl From<PrimitiveDateTime> for ApiTime {
    fn from(dt: PrimitiveDateTime) -> Self {
        Self {
            year: dt.year(),
            mon: u8::from(dt.month()),
            day: dt.day(),
            hour: dt.hour(),
            min: dt.minute(),
            sec: dt.second(),
        }
    }
}
