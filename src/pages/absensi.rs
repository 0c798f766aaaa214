use dioxus::prelude::*;

#[component]
pub fn AbsensiPage() -> Element {
    rsx! {
        div {
            class: "page",

            h1 { "Absensi" }
            p { "Catat kehadiran Anda untuk hari ini." }

            button {
                class: "btn-primary",
                "Absen Masuk"
            }
        }
    }
}
