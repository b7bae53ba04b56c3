use super::model::Command;
use err_derive::Error;
use serde::Serialize;
use serde_json::Value;

/// The error types used during serialisation
#[derive(Debug, Error)]
pub enum Error {
    /// A serde_json error
    #[error(display = "Json serialization error")]
    Json(#[error(source)] serde_json::Error),
}

/// Encode a batch as the json array the camera expects
pub(crate) fn serialize_commands(commands: &[Command]) -> Result<Vec<u8>, Error> {
    Ok(serde_json::to_vec(commands)?)
}

/// Turn a typed payload into the `param` of a [`Command`]
pub(crate) fn to_param<T: Serialize>(param: &T) -> Result<Value, Error> {
    Ok(serde_json::to_value(param)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::model::*;
    use crate::api::params::*;
    use serde_json::json;

    #[test]
    fn test_login_batch() {
        let param = to_param(&LoginParam {
            user: LoginUser {
                user_name: "admin".to_string(),
                password: "hunter2".to_string(),
            },
        })
        .unwrap();
        let buf = serialize_commands(&[Command::new(CMD_LOGIN, ACTION_DEFAULT, param)]).unwrap();
        let sent: Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(
            sent,
            json!([{
                "cmd": "Login",
                "action": 0,
                "param": {"User": {"userName": "admin", "password": "hunter2"}}
            }])
        );
    }

    #[test]
    fn test_batch_keeps_order() {
        let buf = serialize_commands(&[
            Command::new("GetTime", ACTION_QUERY, json!({})),
            Command::new(CMD_LOGOUT, ACTION_DEFAULT, json!({})),
        ])
        .unwrap();
        let sent: Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(sent[0]["cmd"], "GetTime");
        assert_eq!(sent[1]["cmd"], "Logout");
    }
}
