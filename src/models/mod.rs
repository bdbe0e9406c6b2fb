pub mod manifest;
pub mod requests;
pub mod timezone;
