use std::io::Read;
use std::time::Duration;

use crate::error::GateError;
use crate::utils::debug_enabled;

use super::{Platform, Reply};

/// Blocking HTTP transport backed by a ureq agent
pub(crate) struct HttpPlatform {
    agent: ureq::Agent,
}

impl HttpPlatform {
    /// `timeout` bounds the whole exchange, from resolving the host to the
    /// last byte of the body.
    pub(crate) fn new(timeout: Duration) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .into();
        Self { agent }
    }
}

impl Platform for HttpPlatform {
    fn fetch(&self, url: &str) -> Result<Reply, GateError> {
        let response = self
            .agent
            .get(url)
            .call()
            .map_err(GateError::communication)?;

        let status = response.status().as_u16();
        let mut reply = Reply {
            status,
            body: Vec::new(),
        };
        // The body only matters when it has to be shown to the user.
        if !reply.is_success() {
            let mut body = response.into_body();
            // The platform did answer: a body cut short still rejects with
            // whatever arrived.
            if let Err(e) = body.as_reader().read_to_end(&mut reply.body)
                && debug_enabled()
            {
                eprintln!(
                    "Failed to read {status} response body after {} bytes: {e}",
                    reply.body.len()
                );
            }
        }
        Ok(reply)
    }
}
