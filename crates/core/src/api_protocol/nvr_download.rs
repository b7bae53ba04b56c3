use super::{check_result, CommandExecutor, Error, Result, TimeRange};
use crate::api::{model::*, params::*, ser::to_param};
use log::*;

/// Listing of the recordings held by an NVR
///
/// Implemented for every [`CommandExecutor`].
pub trait NvrDownload: CommandExecutor {
    ///
    /// Get the recordings of `channel` that cover `range`
    ///
    /// # Parameters
    ///
    /// * `range` - The window of time to look in, the NVR limits how long it may be
    ///
    /// * `channel` - Zero based channel. The reolink apps count from one so "CH04" is channel 3
    ///
    /// # Returns
    ///
    /// The records in the order the NVR listed them. Entries that cannot be
    /// read as a record are skipped
    ///
    fn get_nvr_file_records(&self, range: &TimeRange, channel: u8) -> Result<Vec<FileRecord>> {
        let param = NvrDownloadParam {
            nvr_download: NvrDownloadRange {
                channel,
                start_time: range.start.into(),
                end_time: range.end.into(),
            },
        };
        let command = Command::new(CMD_NVR_DOWNLOAD, ACTION_QUERY, to_param(&param)?);
        let reply = check_result(CMD_NVR_DOWNLOAD, self.execute_command(command)?)?;

        let value = reply
            .value
            .clone()
            .map(serde_json::from_value::<NvrDownloadValue>);
        let value = match value {
            Some(Ok(value)) => value,
            _ => {
                return Err(Error::UnintelligibleReply {
                    reply: Box::new(reply),
                    why: "Expected an NvrDownload value",
                })
            }
        };

        let records = value
            .file_list
            .unwrap_or_default()
            .into_iter()
            .filter_map(|entry| match serde_json::from_value::<FileRecord>(entry) {
                Ok(record) => Some(record),
                Err(e) => {
                    debug!("Skipping unreadable file entry: {}", e);
                    None
                }
            })
            .collect();
        Ok(records)
    }

    /// Get the names of the recordings of `channel` that cover `range`
    ///
    /// Same as [`NvrDownload::get_nvr_file_records`] keeping only the records
    /// that have a name. No sorting or filtering on time is done here, the NVR
    /// already restricted them to `range`.
    fn get_nvr_files(&self, range: &TimeRange, channel: u8) -> Result<Vec<String>> {
        let files: Vec<String> = self
            .get_nvr_file_records(range, channel)?
            .into_iter()
            .filter_map(|record| record.file_name)
            .filter(|name| !name.is_empty())
            .collect();
        debug!("Found {} files on channel {}", files.len(), channel);
        Ok(files)
    }
}

impl<T: CommandExecutor + ?Sized> NvrDownload for T {}
