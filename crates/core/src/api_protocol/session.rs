use super::ApiCamera;
use log::*;
use std::ops::{Deref, DerefMut};

/// A scope in which the camera is logged in
///
/// Entering does not login, that already happened when the camera was
/// created (or is up to the caller with a deferred login). Leaving the scope
/// always logs out, whether the scope ended normally, returned early with an
/// error or unwound.
pub struct CameraSession<'a> {
    camera: &'a mut ApiCamera,
}

impl ApiCamera {
    /// Start a scoped session, see [`CameraSession`]
    pub fn session(&mut self) -> CameraSession<'_> {
        CameraSession { camera: self }
    }

    /// Run `body` inside a scoped session
    ///
    /// The result of `body` is returned unchanged after logging out.
    pub fn with_session<R, F>(&mut self, body: F) -> R
    where
        F: FnOnce(&mut ApiCamera) -> R,
    {
        let mut session = self.session();
        body(&mut *session)
    }
}

impl Deref for CameraSession<'_> {
    type Target = ApiCamera;

    fn deref(&self) -> &ApiCamera {
        &*self.camera
    }
}

impl DerefMut for CameraSession<'_> {
    fn deref_mut(&mut self) -> &mut ApiCamera {
        &mut *self.camera
    }
}

impl Drop for CameraSession<'_> {
    fn drop(&mut self) {
        if let Err(err) = self.camera.logout() {
            warn!("{}: Could not log out, ignoring: {}", self.camera.address, err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::connection::ScriptedTransport;
    use super::super::tests::*;
    use super::super::{Error, NvrDownload, TimeRange};
    use assert_matches::assert_matches;
    use std::panic::{self, AssertUnwindSafe};
    use time::macros::datetime;

    fn range() -> TimeRange {
        TimeRange::new(datetime!(2024-01-01 00:00:00), datetime!(2024-01-01 00:05:00))
    }

    #[test]
    fn test_session_logs_out_on_success() {
        init();
        let transport = ScriptedTransport::new();
        let mut camera = logged_in_camera(&transport);
        transport.reply(r#"[{"cmd":"NvrDownload","code":0,"value":{"fileList":[{"fileName":"a.mp4"}]}}]"#);
        transport.reply(LOGOUT_REPLY);

        let files = camera.with_session(|cam| cam.get_nvr_files(&range(), 0));
        assert_eq!(files.unwrap(), vec!["a.mp4".to_string()]);
        assert!(!camera.is_logged_in());
        assert_eq!(transport.sent()[2].body[0]["cmd"], "Logout");
    }

    #[test]
    fn test_session_logs_out_on_error() {
        init();
        let transport = ScriptedTransport::new();
        let mut camera = logged_in_camera(&transport);
        transport.reply(include_str!("../api/samples/nvr_download_error.json"));
        transport.reply(LOGOUT_REPLY);

        let result = camera.with_session(|cam| cam.get_nvr_files(&range(), 0));
        assert_matches!(result, Err(Error::CommandFailed { rsp_code: -1, .. }));
        assert!(!camera.is_logged_in());
        assert_eq!(transport.sent()[2].body[0]["cmd"], "Logout");
    }

    #[test]
    fn test_session_guard_early_return() {
        init();
        let transport = ScriptedTransport::new();
        let mut camera = logged_in_camera(&transport);
        transport.fail();
        transport.reply(LOGOUT_REPLY);

        let run = |camera: &mut super::ApiCamera| -> Result<Vec<String>, Error> {
            let session = camera.session();
            let files = session.get_nvr_files(&range(), 0)?;
            Ok(files)
        };
        assert_matches!(run(&mut camera), Err(Error::ConnectionError(_)));
        assert!(!camera.is_logged_in());
    }

    #[test]
    fn test_session_logs_out_on_panic() {
        init();
        let transport = ScriptedTransport::new();
        let mut camera = logged_in_camera(&transport);
        transport.reply(LOGOUT_REPLY);

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            camera.with_session(|_| panic!("scope body failed"))
        }));
        assert!(outcome.is_err());
        assert!(!camera.is_logged_in());
        let sent = transport.sent();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[1].body[0]["cmd"], "Logout");
    }

    #[test]
    fn test_session_logout_failure_does_not_mask_result() {
        init();
        let transport = ScriptedTransport::new();
        let mut camera = logged_in_camera(&transport);
        // No reply queued for logout
        let value = camera.with_session(|_| 42);
        assert_eq!(value, 42);
        assert!(!camera.is_logged_in());
    }
}
