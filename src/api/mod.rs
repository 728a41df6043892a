//! VK API wire format.
//!
//! [`dto`] holds the response envelope and payload types. Successful
//! `utils.getShortLink` payloads decode straight into
//! [`crate::domain::entities::ShortenedLink`].

pub mod dto;
