use super::{ApiCamera, Result};
use crate::api::model::*;
use log::*;
use serde_json::json;

impl ApiCamera {
    /// Logout from the camera
    ///
    /// The token is dropped first so the camera is logged out locally even if
    /// the camera cannot be told. Does nothing when not logged in.
    pub fn logout(&mut self) -> Result<()> {
        if let Some(token) = self.token.take() {
            let logout = Command::new(CMD_LOGOUT, ACTION_DEFAULT, json!({}));
            let results = self.send_batch(&[logout], &token.name)?;
            if let Some(err) = results.first().and_then(|r| r.device_error()) {
                debug!(
                    "{}: Camera refused logout, ignoring: rspCode: {}, {}",
                    self.address, err.rsp_code, err.detail
                );
            }
            debug!("{}: Logged out", self.address);
        }
        Ok(())
    }
}
