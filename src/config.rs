use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) host: Option<String>,
    #[serde(default)]
    pub(crate) timeout_secs: Option<u64>,
    #[serde(default)]
    pub(crate) debug: bool,
}

impl Config {
    /// First config file that exists and parses, or defaults.
    ///
    /// Notices and parse warnings only show when `verbose`: whatever ends up
    /// on stderr is relayed to the pushing user, and an accepted push stays
    /// silent.
    pub(crate) fn load(verbose: bool) -> Self {
        for path in Self::get_config_paths() {
            if path.exists()
                && let Ok(content) = fs::read_to_string(&path)
            {
                match toml::from_str::<Config>(&content) {
                    Ok(config) => {
                        if verbose || config.debug {
                            eprintln!("Loaded config from {}", path.display());
                        }
                        return config;
                    }
                    Err(e) => {
                        if verbose {
                            eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                        }
                    }
                }
            }
        }

        Self::default()
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/tsuru/pre-receive.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("tsuru").join("pre-receive.toml"));
        }

        // 2. Platform config dir (macOS: ~/Library/Application Support)
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("tsuru").join("pre-receive.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.tsuru-pre-receive.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".tsuru-pre-receive.toml"));
        }

        paths
    }
}
