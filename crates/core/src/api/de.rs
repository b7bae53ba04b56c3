use super::model::CommandResult;
use err_derive::Error;
use serde_json::Value;

/// The error types used during deserialisation
#[derive(Debug, Error)]
pub enum Error {
    /// The reply or one of its results is not the expected json
    #[error(display = "Json deserialization error")]
    Json(#[error(source)] serde_json::Error),

    /// The reply is valid json but not an array of results
    #[error(display = "Reply is not a batch of command results")]
    NotABatch,

    /// Results are index aligned with the request so their count must match
    #[error(display = "Sent {} commands but received {} results", sent, received)]
    CountMismatch {
        /// Number of commands in the request
        sent: usize,
        /// Number of results in the reply
        received: usize,
    },
}

/// Decode the reply to a batch of `sent` commands
pub(crate) fn deserialize_results(buf: &[u8], sent: usize) -> Result<Vec<CommandResult>, Error> {
    let reply: Value = serde_json::from_slice(buf)?;
    let entries = match reply {
        Value::Array(entries) => entries,
        _ => return Err(Error::NotABatch),
    };
    if entries.len() != sent {
        return Err(Error::CountMismatch {
            sent,
            received: entries.len(),
        });
    }
    entries
        .into_iter()
        .map(|entry| serde_json::from_value(entry).map_err(Error::from))
        .collect()
}
