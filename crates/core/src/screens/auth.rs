use tracing::{debug, info};

use super::navigation::Route;

/// Which of the two auth screens is showing. Both share one form; they only
/// differ in where the "other" link leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Register,
}

impl AuthMode {
    pub fn route(self) -> Route {
        match self {
            AuthMode::Login => Route::Login,
            AuthMode::Register => Route::Register,
        }
    }

    pub fn other(self) -> AuthMode {
        match self {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        }
    }
}

/// Credentials as typed. Never sent anywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Credential check seam.
pub trait Authenticator: Send + Sync {
    fn accepts(&self, credentials: &Credentials) -> bool;
}

/// Accepts every input, including empty fields.
///
/// There is no account backend: login and register are navigation only.
/// Anything shipped beyond a demo needs a real implementation here.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopAuthenticator;

impl Authenticator for NoopAuthenticator {
    fn accepts(&self, _credentials: &Credentials) -> bool {
        true
    }
}

/// Login / register form controller. Purely local; no async state.
pub struct AuthScreen<A: Authenticator = NoopAuthenticator> {
    mode: AuthMode,
    credentials: Credentials,
    authenticator: A,
}

impl AuthScreen<NoopAuthenticator> {
    pub fn login() -> Self {
        Self::with_authenticator(AuthMode::Login, NoopAuthenticator)
    }

    pub fn register() -> Self {
        Self::with_authenticator(AuthMode::Register, NoopAuthenticator)
    }
}

impl<A: Authenticator> AuthScreen<A> {
    pub fn with_authenticator(mode: AuthMode, authenticator: A) -> Self {
        Self {
            mode,
            credentials: Credentials::default(),
            authenticator,
        }
    }

    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    pub fn set_username(&mut self, username: impl Into<String>) {
        self.credentials.username = username.into();
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.credentials.password = password.into();
    }

    pub fn username(&self) -> &str {
        &self.credentials.username
    }

    /// Press "Log In". Goes to the main screen when the authenticator
    /// accepts, otherwise stays put.
    pub fn submit(&self) -> Route {
        if self.authenticator.accepts(&self.credentials) {
            info!(mode = ?self.mode, "Auth form submitted");
            Route::Main
        } else {
            debug!(mode = ?self.mode, "Auth form rejected");
            self.mode.route()
        }
    }

    /// The "... here" link under the form.
    pub fn switch_mode(&self) -> Route {
        self.mode.other().route()
    }
}
