//! HTTP implementation of [`crate::domain::transport::VkTransport`].

pub mod reqwest_transport;

pub use reqwest_transport::ReqwestTransport;
