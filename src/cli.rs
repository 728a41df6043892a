//! Command-line driver: one positional URL in, one result line out.

use std::io::Write;

use crate::application::services::LinkService;
use crate::application::services::link_service::LinkOutcome;
use crate::config::Config;
use crate::domain::transport::VkTransport;
use clap::Parser;
use colored::*;

/// Shorten a link with VK or count clicks on a vk.cc link.
#[derive(Parser, Debug)]
#[command(name = "vk-link")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Link to shorten, or a vk.cc link to count clicks for
    pub url: String,
}

/// Runs one invocation and writes the result line to `out`.
///
/// Every client error is rendered as a single `Error: ...` line; only
/// failures writing to `out` are returned. Without a credential nothing is
/// sent to the network.
pub async fn run<T, W>(
    service: &LinkService<T>,
    config: &Config,
    url: &str,
    out: &mut W,
) -> std::io::Result<()>
where
    T: VkTransport,
    W: Write,
{
    let credential = match config.credential() {
        Ok(credential) => credential,
        Err(e) => {
            tracing::debug!(kind = e.kind(), "Missing credential");
            return writeln!(out, "{e}");
        }
    };

    match service.classify(credential, url).await {
        Ok(LinkOutcome::Clicks(stats)) => {
            writeln!(out, "{} {}", "Clicks:".bright_white().bold(), stats.total)
        }
        Ok(LinkOutcome::Shortened(short_url)) => {
            writeln!(out, "{} {}", "Short link:".bright_white().bold(), short_url)
        }
        Err(e) => {
            tracing::debug!(kind = e.kind(), error = %e, "Request failed");
            writeln!(out, "{} {}", "Error:".red().bold(), e)
        }
    }
}
