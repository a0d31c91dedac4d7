use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum GateError {
    /// The platform answered, but not with a success status. The body is
    /// kept as raw bytes; it is shown to the user as-is.
    #[error("{}", String::from_utf8_lossy(.body))]
    RemoteRejected { status: u16, body: Vec<u8> },

    /// Timeout, DNS, refused connection, malformed URL and anything else
    /// that kept us from getting an answer.
    #[error("Failed to communicate with tsuru server")]
    CommunicationFailure { reason: String },
}

impl GateError {
    pub(crate) fn communication(reason: impl ToString) -> Self {
        GateError::CommunicationFailure {
            reason: reason.to_string(),
        }
    }
}
