mod app;
mod components;
mod layouts;
mod pages;
mod router;
mod session;

fn main() {
    dioxus::launch(app::App);
}
