use dioxus::prelude::*;

use crate::router::Route;

#[component]
pub fn NavbarComponent() -> Element {
    rsx! {
        nav {
            class: "navbar",

            Link { to: Route::Home {}, "Beranda" }
            Link { to: Route::Absensi {}, "Absensi" }
            Link { to: Route::Logout {}, class: "navbar-logout", "Keluar" }
        }
    }
}
