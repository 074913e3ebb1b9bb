//! User configuration adapters.

mod json;

pub use json::{CONFIG_FILE_NAME, JsonConfigSource};
