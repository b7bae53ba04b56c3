use super::{single_result, ApiCamera, Error, Result, Token};
use crate::api::{model::*, params::*, ser::to_param};
use log::*;

impl ApiCamera {
    /// Login to the camera.
    ///
    /// This is done during creation unless the login was deferred. Calling it
    /// while already logged in keeps the current token.
    pub fn login(&mut self) -> Result<()> {
        if self.token.is_some() {
            debug!("{}: Already logged in", self.address);
            return Ok(());
        }

        let login = Command::new(
            CMD_LOGIN,
            ACTION_DEFAULT,
            to_param(&LoginParam {
                user: LoginUser {
                    user_name: self.credentials.username.clone(),
                    password: self.credentials.password_or_empty().to_string(),
                },
            })?,
        );

        let reply = self
            .send_batch(&[login], LOGIN_TOKEN)
            .map_err(|e| match e {
                Error::ConnectionError(e) => Error::LoginUnreachable(e),
                e => e,
            })
            .and_then(single_result)?;

        if reply.code != 0 {
            match &reply.error {
                Some(err) => warn!(
                    "{}: Login rejected: rspCode: {}, {}",
                    self.address, err.rsp_code, err.detail
                ),
                None => warn!("{}: Login rejected with code {}", self.address, reply.code),
            }
            return Err(Error::AuthFailed);
        }

        let value = reply
            .value
            .clone()
            .and_then(|v| serde_json::from_value::<LoginValue>(v).ok());
        let token = match value {
            Some(LoginValue { token }) => token,
            None => {
                return Err(Error::UnintelligibleReply {
                    reply: Box::new(reply),
                    why: "Expected a Token in the login reply",
                })
            }
        };

        debug!(
            "{}: Logged in as {}, token lease {}s",
            self.address, self.credentials.username, token.lease_time
        );
        self.token = Some(Token {
            name: token.name,
            lease_time: token.lease_time,
        });
        Ok(())
    }
}
