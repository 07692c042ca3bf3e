pub mod bookmark;
pub mod identity;
pub mod oauth2;
pub mod opportunity;
