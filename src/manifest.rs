use crate::result::Result;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Jar manifest declaring the robot class to Robocode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestRecord {
    pub robot: String,
}

impl ManifestRecord {
    pub fn new(qualified_name: impl Into<String>) -> Self {
        Self {
            robot: qualified_name.into(),
        }
    }

    pub fn render(&self) -> String {
        format!("Manifest-Version: 1.0\nrobots: {}\n", self.robot)
    }

    /// Persist to a temporary `MANIFEST*.mf` file in `dir`. The file is
    /// removed when the returned handle is dropped.
    pub fn write_temp(&self, dir: &Path) -> Result<TempManifest> {
        let mut file = tempfile::Builder::new()
            .prefix("MANIFEST")
            .suffix(".mf")
            .tempfile_in(dir)?;
        file.write_all(self.render().as_bytes())?;
        file.flush()?;
        log::debug!("wrote manifest to {}", file.path().display());
        Ok(TempManifest { file })
    }
}

pub struct TempManifest {
    file: NamedTempFile,
}

impl TempManifest {
    pub fn path(&self) -> &Path {
        self.file.path()
    }
}
