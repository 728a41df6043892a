//! Helper functions for URL handling.
//!
//! - [`extract_key`] - Short link recognition and stats key extraction

pub mod extract_key;
