//! # vk-link
//!
//! Shortens URLs through the VK API and counts clicks on `vk.cc` short links.
//!
//! ## Architecture
//!
//! The crate keeps the usual layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Value types and the [`domain::transport::VkTransport`] trait
//! - **Application Layer** ([`application`]) - Shortening, classification and click counting
//! - **Infrastructure Layer** ([`infrastructure`]) - reqwest-based transport
//! - **API Layer** ([`api`]) - VK response envelope and payload types
//! - **CLI** ([`cli`]) - Argument parsing and result rendering
//!
//! ## Quick Start
//!
//! ```bash
//! export VK_SERVICE_TOKEN="..."
//!
//! # Shorten a link
//! cargo run -- https://example.com/page
//!
//! # Count clicks on a short link
//! cargo run -- https://vk.cc/abc123
//! ```
//!
//! ## Configuration
//!
//! Configuration is loaded from environment variables (and `.env`) via
//! [`config::Config`]. See [`config`] for available options.

pub mod api;
pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod utils;

pub use error::AppError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::link_service::LinkOutcome;
    pub use crate::application::services::{LinkService, StatsService};
    pub use crate::config::{ApiSettings, Config};
    pub use crate::domain::entities::{ClickStats, Credential, LinkKey, ShortenedLink, StatRecord};
    pub use crate::domain::transport::{ApiMethod, ApiRequest, VkTransport};
    pub use crate::error::AppError;
    pub use crate::infrastructure::http::ReqwestTransport;
}
