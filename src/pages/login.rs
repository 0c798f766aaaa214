use dioxus::prelude::*;

/// Credential handling lives in the backend, which answers a successful login
/// by setting the session cookie; this page only renders the form.
#[component]
pub fn LoginPage() -> Element {
    rsx! {
        div {
            class: "page login",

            h1 { "Masuk" }

            form {
                method: "post",
                action: "/api/login",

                input {
                    r#type: "text",
                    name: "nip",
                    placeholder: "NIP",
                }
                input {
                    r#type: "password",
                    name: "password",
                    placeholder: "Kata sandi",
                }
                button {
                    r#type: "submit",
                    class: "btn-primary",

                    "Masuk"
                }
            }
        }
    }
}
