use crate::error::Error;
use crate::result::Result;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "Robocode.toml";

/// Default middle part of the generated jar name
pub const DEFAULT_SUFFIX: &str = "filen_du_skal_legge_i_google_drive";

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub robot: RobotSection,

    #[serde(default)]
    pub package: PackageSection,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct RobotSection {
    #[serde(default)]
    pub author: Option<String>,

    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct PackageSection {
    #[serde(default)]
    pub output_directory: Option<String>,

    #[serde(default)]
    pub suffix: Option<String>,

    #[serde(default)]
    pub keep_properties: Option<bool>,
}

impl ConfigFile {
    pub fn parse(content: &str) -> Result<Self> {
        let config: ConfigFile = toml::from_str(content)?;
        if let Some(suffix) = &config.package.suffix
            && (suffix.is_empty() || suffix.contains(['/', '\\']))
        {
            return Err(Error::Config(format!(
                "package.suffix must be a non-empty file name fragment, got '{suffix}'"
            )));
        }
        Ok(config)
    }

    /// Load `explicit` if given (it must exist), otherwise `Robocode.toml`
    /// in the project directory if present.
    pub fn load(project_dir: &Path, explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => {
                if !path.is_file() {
                    return Err(Error::ConfigNotFound(path.display().to_string()));
                }
                path.to_path_buf()
            }
            None => {
                let path = project_dir.join(CONFIG_FILE_NAME);
                if !path.is_file() {
                    log::debug!("no {} in {}", CONFIG_FILE_NAME, project_dir.display());
                    return Ok(Self::default());
                }
                path
            }
        };

        log::debug!("loading configuration from {}", path.display());
        Self::parse(&fs::read_to_string(&path)?)
    }

    pub fn output_directory(&self, project_dir: &Path) -> PathBuf {
        self.package
            .output_directory
            .as_ref()
            .map(|dir| project_dir.join(dir))
            .unwrap_or_else(|| project_dir.join("target"))
    }

    pub fn suffix(&self) -> &str {
        self.package.suffix.as_deref().unwrap_or(DEFAULT_SUFFIX)
    }

    pub fn keep_properties(&self) -> bool {
        self.package.keep_properties.unwrap_or(true)
    }
}
