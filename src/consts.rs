use std::time::Duration;

/// Environment variable holding the tsuru API base URL
pub(crate) const HOST_ENV: &str = "TSURU_HOST";

/// Suffix carried by bare repository directories: "myapp.git"
pub(crate) const REPO_SUFFIX: &str = ".git";

/// Availability endpoint segment. The spelling is what the tsuru API serves.
pub(crate) const AVAILABLE_SEGMENT: &str = "avaliable";

/// Upper bound for the whole availability request
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(1800);

/// Prefix for every line shown to the pushing user
pub(crate) const MESSAGE_PREFIX: &str = " ---> ";
