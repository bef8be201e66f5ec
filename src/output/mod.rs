//! Output formatting module
//!
//! The report itself is JSON on stdout; banners and warnings are plain text.

pub mod json;
pub mod terminal;

pub use json::{print_json, to_json};
pub use terminal::{penalty_warning, print_banner, print_penalty_warning};
