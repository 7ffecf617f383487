use serde::{Deserialize, Serialize};

/// Destinations the controllers can ask the host navigator for.
///
/// The only data crossing a screen boundary is the coin id handed to the
/// detail screen.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    Login,
    Register,
    Main,
    Coin { coin_id: String },
    Portfolio,
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Route::Login => write!(f, "Login"),
            Route::Register => write!(f, "Register"),
            Route::Main => write!(f, "Main"),
            Route::Coin { coin_id } => write!(f, "Coin({coin_id})"),
            Route::Portfolio => write!(f, "Portfolio"),
        }
    }
}
