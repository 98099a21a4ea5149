use crate::artifact::ROBOT_PACKAGE;
use crate::error::Error;
use crate::random::RandomSource;
use crate::result::Result;
use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Upper bound (exclusive) of the numeric token in archive names
pub const TOKEN_BOUND: u32 = 10_000;

pub const MANIFEST_ENTRY: &str = "META-INF/MANIFEST.mf";

/// `<short_name>-<suffix>-<n>.jar` with `n` drawn from `[0, TOKEN_BOUND)`
pub fn archive_name(short_name: &str, suffix: &str, rng: &mut dyn RandomSource) -> String {
    let token = rng.next_int(TOKEN_BOUND);
    format!("{short_name}-{suffix}-{token}.jar")
}

pub fn package_entry(file_name: &str) -> String {
    format!("{}/{}", ROBOT_PACKAGE.join("/"), file_name)
}

/// Files that make up a robot jar
pub struct JarContents<'a> {
    pub manifest: &'a Path,
    pub properties: &'a Path,
    pub class: &'a Path,
}

/// Write the robot jar at `output_path`. Fails if a file already exists
/// there.
pub fn create_jar(output_path: &Path, contents: &JarContents<'_>) -> Result<()> {
    let entries: [(String, &Path); 3] = [
        (MANIFEST_ENTRY.to_string(), contents.manifest),
        (package_entry(file_name(contents.properties)?), contents.properties),
        (package_entry(file_name(contents.class)?), contents.class),
    ];

    let file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(output_path)?;
    let mut zip = ZipWriter::new(file);

    let options = SimpleFileOptions::default()
        .compression_method(zip::CompressionMethod::Deflated)
        .unix_permissions(0o644);

    zip.add_directory(format!("{}/", ROBOT_PACKAGE.join("/")), options)?;
    zip.add_directory("META-INF/", options)?;

    for (name, source) in entries {
        log::debug!("adding {} as {}", source.display(), name);
        zip.start_file(name, options)?;
        let mut f = File::open(source)?;
        io::copy(&mut f, &mut zip)?;
    }

    zip.finish()?;
    Ok(())
}

fn file_name(path: &Path) -> Result<&str> {
    path.file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| Error::InvalidClassName {
            path: path.to_path_buf(),
        })
}

pub fn archive_path(output_dir: &Path, name: &str) -> PathBuf {
    output_dir.join(name)
}
