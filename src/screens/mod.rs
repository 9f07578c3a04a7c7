pub mod contact;
pub mod detail;
pub mod favorites;
pub mod home;

pub use contact::{ContactField, ContactForm};

pub const APP_NAME: &str = "Real Estate App";

pub(crate) fn heart(is_favorite: bool) -> &'static str {
    if is_favorite {
        "♥"
    } else {
        "♡"
    }
}
