//! Deployment gate
//!
//! Asks the tsuru API whether an app can take a deploy right now, and turns
//! the answer into accept/reject for the push.

mod app_name;
mod client;
mod endpoint;
mod report;

use crate::error::GateError;

pub(crate) use app_name::derive_app_name;
pub(crate) use client::HttpPlatform;
pub(crate) use endpoint::availability_url;
pub(crate) use report::write_rejection;

/// Final answer from the platform, whatever the status. The body is only
/// filled in for non-success statuses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Reply {
    pub(crate) status: u16,
    pub(crate) body: Vec<u8>,
}

impl Reply {
    pub(crate) fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport to the deployment platform
pub(crate) trait Platform {
    /// One GET, no retries. Only failures to get an answer at all are
    /// errors; error statuses come back as a `Reply`.
    fn fetch(&self, url: &str) -> Result<Reply, GateError>;
}

/// Ok when the platform reports the app as available
pub(crate) fn check_availability(platform: &dyn Platform, url: &str) -> Result<(), GateError> {
    let reply = platform.fetch(url)?;
    if reply.is_success() {
        return Ok(());
    }
    Err(GateError::RemoteRejected {
        status: reply.status,
        body: reply.body,
    })
}
