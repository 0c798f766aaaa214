use dioxus::prelude::*;

#[component]
pub fn HomePage() -> Element {
    rsx! {
        div {
            class: "page",

            h1 { "Beranda" }
            p { "Selamat datang di sistem absensi." }
        }
    }
}
