//! Core value types of the link client.
//!
//! - [`Credential`] - VK service token
//! - [`LinkKey`] / [`ShortenedLink`] - short link identity and shortening result
//! - [`StatRecord`] / [`ClickStats`] - per-period views and their sum

pub mod credential;
pub mod link;
pub mod stats;

pub use credential::Credential;
pub use link::{LinkKey, ShortenedLink};
pub use stats::{ClickStats, StatRecord};
