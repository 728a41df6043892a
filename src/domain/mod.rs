//! Domain layer: value types and the transport contract.
//!
//! - [`entities`] - Credential, link key, shortening result, stats
//! - [`transport`] - [`transport::VkTransport`] trait implemented by the infrastructure layer
//!
//! The domain layer has no dependency on the HTTP client; the application
//! services only see [`transport::VkTransport`].

pub mod entities;
pub mod transport;
