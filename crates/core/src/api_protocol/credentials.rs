//! Handles credentials for camera including default reolink username

/// Used for caching and supplying the credentials
#[derive(Clone)]
pub struct Credentials {
    /// The username to login to the camera with
    pub username: String,
    /// The password to use for login. Cameras out of the box have none
    pub password: Option<String>,
}

impl Default for Credentials {
    /// Default credentials of a reolink camera before setup
    fn default() -> Self {
        Self {
            username: "admin".to_string(),
            password: None,
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entry(&"username", &self.username)
            .entry(&"password", &"******")
            .finish()
    }
}

impl Credentials {
    /// Create credentials from a username and optional password
    pub fn new<T: Into<String>, U: Into<String>>(username: T, password: Option<U>) -> Self {
        Self {
            username: username.into(),
            password: password.map(|t| t.into()),
        }
    }

    /// The password as sent during login, empty when there is none
    pub(crate) fn password_or_empty(&self) -> &str {
        self.password.as_deref().unwrap_or("")
    }
}

#[test]
fn test_password_masked() {
    let creds = Credentials::new("admin", Some("hunter2"));
    let shown = format!("{:?}", creds);
    assert!(shown.contains("admin"));
    assert!(!shown.contains("hunter2"));
}
