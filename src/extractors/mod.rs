//! Request extractors shared by both applications.

pub mod flash;
pub use flash::{signing_key, Flash, FlashMessage, Level, FLASH_COOKIE, MAX_QUEUED};
