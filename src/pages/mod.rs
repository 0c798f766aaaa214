pub mod absensi;
pub mod home;
pub mod login;
pub mod logout;
