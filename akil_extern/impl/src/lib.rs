pub mod bookmark;
pub mod http;
pub mod identity;
pub mod oauth2;
pub mod opportunity;
