use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) input: Option<String>,
    #[serde(default)]
    pub(crate) compact: bool,
    #[serde(default)]
    pub(crate) no_color: bool,
    #[serde(default)]
    pub(crate) debug: bool,
    #[serde(default)]
    pub(crate) order: Option<String>,
    #[serde(default)]
    pub(crate) color: Option<String>,
    #[serde(default)]
    pub(crate) locale: Option<String>,
    /// Default annual inflation rate for projections, in percent
    #[serde(default)]
    pub(crate) rate: Option<f64>,
    /// Default projection horizon in months
    #[serde(default)]
    pub(crate) horizon: Option<u32>,
}

impl Config {
    pub(crate) fn load() -> Self {
        Self::load_internal(false)
    }

    /// Quiet load for machine-readable output modes
    pub(crate) fn load_quiet() -> Self {
        Self::load_internal(true)
    }

    fn load_internal(quiet: bool) -> Self {
        let config_paths = Self::get_config_paths();

        for path in config_paths {
            if path.exists()
                && let Ok(content) = fs::read_to_string(&path)
            {
                match toml::from_str::<Config>(&content) {
                    Ok(config) => {
                        if !quiet {
                            eprintln!("Loaded config from {}", path.display());
                        }
                        return config;
                    }
                    Err(e) => {
                        if !quiet {
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

        // 1. XDG config: ~/.config/excost/config.toml (Linux/cross-platform)
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("excost").join("config.toml"));
        }

        // 2. Platform config dir (macOS: ~/Library/Application Support/excost/config.toml)
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("excost").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.excost.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".excost.toml"));
        }

        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_paths_are_present() {
        let paths = Config::get_config_paths();
        assert!(!paths.is_empty());
        assert!(paths.iter().any(|p| p.ends_with(".excost.toml")));
    }

    #[test]
    fn config_parses_all_fields() {
        let config: Config = toml::from_str(
            r#"
            input = "/data/exercises"
            compact = true
            order = "desc"
            locale = "de"
            rate = 2.5
            horizon = 36
            "#,
        )
        .unwrap();
        assert_eq!(config.input.as_deref(), Some("/data/exercises"));
        assert!(config.compact);
        assert_eq!(config.order.as_deref(), Some("desc"));
        assert_eq!(config.rate, Some(2.5));
        assert_eq!(config.horizon, Some(36));
        assert!(!config.debug);
    }

    #[test]
    fn empty_config_is_all_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.input.is_none());
        assert!(!config.compact);
        assert!(config.rate.is_none());
    }
}
