use dioxus::{logger::tracing, prelude::*};

use crate::router::Route;
use crate::session::{cookies::BrowserCookies, logout};

/// Not a view: entering this route clears the session and leaves again.
#[component]
pub fn LogoutPage() -> Element {
    let navigator = use_navigator();

    let landing = match logout::terminate(&BrowserCookies) {
        Ok(route) => route,
        Err(error) => {
            tracing::error!("failed to clear session cookies: {error:?}");
            Route::Home {}
        }
    };

    navigator.replace(landing);

    rsx! {
        p {
            "Keluar..."
        }
    }
}
