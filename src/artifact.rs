use crate::error::Error;
use crate::result::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Package every robot has to live in
pub const ROBOT_PACKAGE: [&str; 3] = ["com", "netcompany", "robocode"];

pub const CLASS_EXTENSION: &str = ".class";

/// The single compiled robot class found in the build output
#[derive(Debug, Clone)]
pub struct CompiledArtifact {
    pub path: PathBuf,
    pub dir: PathBuf,
    pub short_name: String,
}

impl CompiledArtifact {
    /// Scan `classes_dir` and return its only compiled class, provided it
    /// sits in the robot package.
    pub fn discover(classes_dir: &Path) -> Result<Self> {
        let mut found = find_class_files(classes_dir)?;

        if found.len() != 1 {
            if found.is_empty() {
                return Err(Error::NoCompiledClass {
                    dir: classes_dir.to_path_buf(),
                });
            }
            let mut names: Vec<String> = found
                .iter()
                .filter_map(|p| p.file_name())
                .map(|n| n.to_string_lossy().into_owned())
                .collect();
            names.sort();
            return Err(Error::MultipleCompiledClasses { names });
        }

        let path = found.remove(0);
        let dir = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| classes_dir.to_path_buf());

        if !in_robot_package(&dir) {
            return Err(Error::WrongPackage { dir });
        }

        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            return Err(Error::InvalidClassName { path });
        };
        let short_name = file_name[..file_name.len() - CLASS_EXTENSION.len()].to_string();

        log::debug!("found robot class {} in {}", short_name, dir.display());

        Ok(Self {
            path,
            dir,
            short_name,
        })
    }

    /// Fully qualified class name, e.g. `com.netcompany.robocode.MyBot`
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", ROBOT_PACKAGE.join("."), self.short_name)
    }
}

fn find_class_files(classes_dir: &Path) -> Result<Vec<PathBuf>> {
    if !classes_dir.is_dir() {
        log::debug!("{} does not exist", classes_dir.display());
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(classes_dir) {
        let entry = entry?;
        if entry.file_type().is_file()
            && entry.file_name().to_string_lossy().ends_with(CLASS_EXTENSION)
        {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// Component-wise trailing match against the robot package
fn in_robot_package(dir: &Path) -> bool {
    dir.ends_with(ROBOT_PACKAGE.iter().collect::<PathBuf>())
}
