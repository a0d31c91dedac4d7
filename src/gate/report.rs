use std::io::{self, Write};

use crate::consts::MESSAGE_PREFIX;
use crate::error::GateError;

/// Write the message git relays to the pushing user as "remote: ..." lines.
/// Rejection bodies are passed through byte for byte, whatever their encoding.
pub(crate) fn write_rejection(out: &mut dyn Write, err: &GateError) -> io::Result<()> {
    match err {
        GateError::RemoteRejected { body, .. } => {
            write!(out, "\n{MESSAGE_PREFIX}")?;
            out.write_all(body)?;
            out.write_all(b"\n\n")?;
        }
        GateError::CommunicationFailure { .. } => write!(out, "\n{MESSAGE_PREFIX}{err}\n")?,
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_bytes(err: &GateError) -> Vec<u8> {
        let mut buf = Vec::new();
        write_rejection(&mut buf, err).expect("write to vec");
        buf
    }

    fn render(err: &GateError) -> String {
        String::from_utf8(render_bytes(err)).expect("utf8")
    }

    #[test]
    fn rejection_shows_body() {
        let err = GateError::RemoteRejected {
            status: 503,
            body: b"maintenance".to_vec(),
        };
        assert_eq!(render(&err), "\n ---> maintenance\n\n");
    }

    #[test]
    fn rejection_passes_latin1_body_through() {
        let err = GateError::RemoteRejected {
            status: 503,
            body: b"maint\xe9nance".to_vec(),
        };
        assert_eq!(render_bytes(&err), b"\n ---> maint\xe9nance\n\n");
    }

    #[test]
    fn communication_failure_shows_fixed_message() {
        let err = GateError::communication("dns error: no such host");
        assert_eq!(
            render(&err),
            "\n ---> Failed to communicate with tsuru server\n"
        );
    }
}
