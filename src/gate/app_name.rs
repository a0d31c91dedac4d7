use std::path::Path;

use crate::consts::REPO_SUFFIX;

/// App name for the repository living in `dir`: the last path component with
/// one trailing ".git" removed.
///
/// No validation is done. A hook run from "/" yields an empty name, and the
/// platform gets to reject it.
pub(crate) fn derive_app_name(dir: &Path) -> String {
    let last = dir
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    match last.strip_suffix(REPO_SUFFIX) {
        Some(stripped) => stripped.to_string(),
        None => last,
    }
}
