use dioxus::prelude::*;

use crate::{
    layouts::guard::GuardLayout,
    pages::{absensi::AbsensiPage, home::HomePage, login::LoginPage, logout::LogoutPage},
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(GuardLayout)]
        #[route("/", HomePage)]
        Home {},

        #[route("/absensi", AbsensiPage)]
        Absensi {},

        #[route("/login", LoginPage)]
        Login {},

        #[route("/logout", LogoutPage)]
        Logout {},
}

impl Route {
    /// Routes behind this flag are only reachable with a live session cookie.
    pub fn requires_auth(&self) -> bool {
        match self {
            Self::Home {} | Self::Absensi {} => true,
            Self::Login {} | Self::Logout {} => false,
        }
    }
}
