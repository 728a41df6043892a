//! Infrastructure layer for external integrations.
//!
//! # Modules
//!
//! - [`http`] - reqwest implementation of the VK transport

pub mod http;
