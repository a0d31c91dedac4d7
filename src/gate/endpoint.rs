use crate::consts::AVAILABLE_SEGMENT;

/// `{base}/apps/{app}/avaliable`
///
/// Trailing slashes on `base` are dropped so "http://tsuru/" and
/// "http://tsuru" hit the same path. Nothing else is normalized: an empty
/// base produces a relative URL that the client refuses.
pub(crate) fn availability_url(base: &str, app: &str) -> String {
    let base = base.trim_end_matches('/');
    format!("{base}/apps/{app}/{AVAILABLE_SEGMENT}")
}
