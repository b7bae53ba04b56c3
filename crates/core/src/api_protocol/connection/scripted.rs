// This module replays canned replies in place of a camera
//
// It is only used for testing
//
use super::{ApiRequest, Error, Transport};
use serde_json::Value;
use std::collections::VecDeque;
use std::io::ErrorKind;
use std::sync::{Arc, Mutex};

/// What the camera would have seen
#[derive(Debug, Clone)]
pub(crate) struct SentRequest {
    pub(crate) cmd: Option<String>,
    pub(crate) token: String,
    pub(crate) body: Value,
}

#[derive(Default)]
struct Script {
    replies: VecDeque<Option<String>>,
    sent: Vec<SentRequest>,
}

/// A `ScriptedTransport` answers each request with the next queued reply
/// and records every request. Clones share the same script so a test can
/// keep one while the camera owns another.
#[derive(Clone, Default)]
pub(crate) struct ScriptedTransport {
    script: Arc<Mutex<Script>>,
}

impl ScriptedTransport {
    pub(crate) fn new() -> Self {
        Default::default()
    }

    /// Queue a json reply
    pub(crate) fn reply(&self, json: &str) {
        self.script
            .lock()
            .unwrap()
            .replies
            .push_back(Some(json.to_string()));
    }

    /// Queue a transport failure
    pub(crate) fn fail(&self) {
        self.script.lock().unwrap().replies.push_back(None);
    }

    /// Every request sent so far
    pub(crate) fn sent(&self) -> Vec<SentRequest> {
        self.script.lock().unwrap().sent.clone()
    }
}

impl Transport for ScriptedTransport {
    fn send(&self, request: &ApiRequest<'_>) -> Result<Vec<u8>, Error> {
        let mut script = self.script.lock().unwrap();
        script.sent.push(SentRequest {
            cmd: request.cmd.map(|c| c.to_string()),
            token: request.token.to_string(),
            body: serde_json::from_slice(request.body).unwrap(),
        });
        // Running out of replies looks like a camera that went away
        match script.replies.pop_front().flatten() {
            Some(reply) => Ok(reply.into_bytes()),
            None => Err(Error::Io(ErrorKind::ConnectionRefused.into())),
        }
    }
}
