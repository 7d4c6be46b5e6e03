use serde::Deserialize;
use std::path::Path;

/// Application configuration loaded from an optional YAML file
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct AppConfig {
    /// Output file handling
    #[serde(default)]
    pub output: OutputConfig,
}

/// How the output file is created
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct OutputConfig {
    /// Replace an existing output file
    #[serde(default = "default_overwrite")]
    pub overwrite: bool,

    /// Create missing parent directories of the output path
    #[serde(default)]
    pub create_parent_dirs: bool,
}

fn default_overwrite() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            overwrite: default_overwrite(),
            create_parent_dirs: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from a YAML file, or defaults when no path is given
    ///
    /// A file that cannot be read or parsed is logged and replaced by defaults.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    let config: Self = config;
                    tracing::info!(
                        path = %path.display(),
                        overwrite = config.output.overwrite,
                        create_parent_dirs = config.output.create_parent_dirs,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(
                        %e,
                        path = %path.display(),
                        "Failed to parse config, using defaults"
                    );
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }
}
