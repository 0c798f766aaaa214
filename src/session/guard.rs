use derive_more::Display;

use crate::router::Route;

/// One pending transition, built by the router layer per navigation and
/// consumed once. `current` is `None` on the initial page load.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationRequest {
    pub target: Route,
    pub current: Option<Route>,
}

#[derive(Debug, Clone, PartialEq, Display)]
pub enum Decision {
    #[display("allow")]
    Allow,
    #[display("redirect to {_0}")]
    Redirect(Route),
}

/// Guard policy, first match wins:
///   1. protected target without a session -> login
///   2. login target with a session -> home
///   3. anything else passes
///
/// The signal is read fresh by the caller on every navigation; nothing here
/// writes it.
pub fn decide(request: &NavigationRequest, authenticated: bool) -> Decision {
    if request.target.requires_auth() && !authenticated {
        return Decision::Redirect(Route::Login {});
    }

    if request.target == (Route::Login {}) && authenticated {
        return Decision::Redirect(Route::Home {});
    }

    Decision::Allow
}
