use crate::config::ConfigFile;
use std::path::PathBuf;

/// Settings resolved from flags and configuration, passed throughout the run
#[derive(Clone, Debug)]
pub struct Context {
    /// Enable verbose output
    pub verbose: bool,

    /// Project directory (holds `Robocode.toml`)
    pub project_dir: PathBuf,

    /// Build output directory containing `classes/`
    pub output_dir: PathBuf,

    /// Middle part of the archive file name
    pub suffix: String,

    /// Leave the generated `.properties` next to the class after packaging
    pub keep_properties: bool,

    /// Where the temporary manifest is staged
    pub temp_dir: PathBuf,
}

impl Context {
    pub fn new(project_dir: PathBuf, output_dir: Option<PathBuf>, config: &ConfigFile, verbose: bool) -> Self {
        let output_dir = output_dir
            .map(|dir| project_dir.join(dir))
            .unwrap_or_else(|| config.output_directory(&project_dir));

        Self {
            verbose,
            output_dir,
            suffix: config.suffix().to_string(),
            keep_properties: config.keep_properties(),
            temp_dir: std::env::temp_dir(),
            project_dir,
        }
    }

    pub fn classes_dir(&self) -> PathBuf {
        self.output_dir.join("classes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_flag_overrides_config() {
        let config = ConfigFile::parse("[package]\noutput-directory = \"build\"\n").unwrap();

        let ctx = Context::new(PathBuf::from("/proj"), None, &config, false);
        assert_eq!(ctx.output_dir, Path::new("/proj/build"));
        assert_eq!(ctx.classes_dir(), Path::new("/proj/build/classes"));

        let ctx = Context::new(PathBuf::from("/proj"), Some("/abs/out".into()), &config, false);
        assert_eq!(ctx.output_dir, Path::new("/abs/out"));
    }
}
