pub mod config;
pub mod errors;
pub mod string_utils;

pub use errors::*;
pub use string_utils::format_error_line;
