use std::io::Write;
use std::time::{Duration, Instant};

use crate::error::GateError;
use crate::gate::{Platform, availability_url, check_availability, write_rejection};
use crate::utils::debug_enabled;

/// Everything one hook run needs, resolved from flags, env and config
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Settings {
    pub(crate) host: String,
    pub(crate) app: String,
    pub(crate) timeout: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    /// Let git accept the push
    Accepted,
    /// Make git refuse the push
    Rejected,
}

impl Outcome {
    pub(crate) fn exit_code(self) -> u8 {
        match self {
            Outcome::Accepted => 0,
            Outcome::Rejected => 1,
        }
    }
}

/// Run the deployment gate once. Diagnostics for the pushing user go to
/// `err_out`; debug logging goes straight to stderr.
pub(crate) fn run(settings: &Settings, platform: &dyn Platform, err_out: &mut dyn Write) -> Outcome {
    let url = availability_url(&settings.host, &settings.app);
    if debug_enabled() {
        eprintln!(
            "Checking availability of app {:?} at {} (timeout {}s)",
            settings.app,
            url,
            settings.timeout.as_secs()
        );
    }

    let start = Instant::now();
    let result = check_availability(platform, &url);
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    let err = match result {
        Ok(()) => {
            if debug_enabled() {
                eprintln!("App is available ({elapsed_ms:.2}ms)");
            }
            return Outcome::Accepted;
        }
        Err(err) => err,
    };

    if debug_enabled() {
        match &err {
            GateError::RemoteRejected { status, .. } => {
                eprintln!("Platform answered {status} ({elapsed_ms:.2}ms)");
            }
            GateError::CommunicationFailure { reason } => {
                eprintln!("Request failed: {reason} ({elapsed_ms:.2}ms)");
            }
        }
    }

    // The push is refused either way; a broken stderr only loses the message.
    if let Err(e) = write_rejection(err_out, &err)
        && debug_enabled()
    {
        eprintln!("Failed to write rejection message: {e}");
    }
    Outcome::Rejected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gate::testing::FakePlatform;

    fn settings(host: &str, app: &str) -> Settings {
        Settings {
            host: host.to_string(),
            app: app.to_string(),
            timeout: Duration::from_secs(1800),
        }
    }

    fn run_with(settings: &Settings, platform: &FakePlatform) -> (Outcome, String) {
        let mut err_out = Vec::new();
        let outcome = run(settings, platform, &mut err_out);
        (outcome, String::from_utf8(err_out).expect("utf8"))
    }

    #[test]
    fn available_app_accepts_silently() {
        let platform = FakePlatform::replying(200, "");
        let (outcome, stderr) = run_with(&settings("http://tsuru", "myapp"), &platform);
        assert_eq!(outcome, Outcome::Accepted);
        assert_eq!(outcome.exit_code(), 0);
        assert!(stderr.is_empty());
        assert_eq!(
            *platform.requested.borrow(),
            vec!["http://tsuru/apps/myapp/avaliable".to_string()]
        );
    }

    #[test]
    fn unavailable_app_shows_body() {
        let platform = FakePlatform::replying(503, "maintenance");
        let (outcome, stderr) = run_with(&settings("http://tsuru", "myapp"), &platform);
        assert_eq!(outcome, Outcome::Rejected);
        assert_eq!(outcome.exit_code(), 1);
        assert!(stderr.contains(" ---> maintenance"));
    }

    #[test]
    fn unreachable_platform_shows_generic_message() {
        let platform = FakePlatform::unreachable("connection refused");
        let (outcome, stderr) = run_with(&settings("http://tsuru", "myapp"), &platform);
        assert_eq!(outcome, Outcome::Rejected);
        assert!(stderr.contains(" ---> Failed to communicate with tsuru server"));
        assert!(!stderr.contains("connection refused"));
    }

    #[test]
    fn empty_host_requests_relative_url() {
        let platform = FakePlatform::unreachable("invalid uri");
        let (outcome, _) = run_with(&settings("", "myapp"), &platform);
        assert_eq!(outcome, Outcome::Rejected);
        assert_eq!(
            *platform.requested.borrow(),
            vec!["/apps/myapp/avaliable".to_string()]
        );
    }
}
