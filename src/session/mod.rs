pub mod cookies;
pub mod guard;
pub mod logout;
