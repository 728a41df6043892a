//! Application layer services.
//!
//! Services consume the [`crate::domain::transport::VkTransport`] trait and
//! take the [`crate::domain::entities::Credential`] as an explicit argument on
//! every call.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Shortening and short link classification
//! - [`services::stats_service::StatsService`] - Click statistics

pub mod services;
