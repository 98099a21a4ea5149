use crate::archive::{self, JarContents};
use crate::artifact::CompiledArtifact;
use crate::context::Context;
use crate::manifest::ManifestRecord;
use crate::prompt::{AUTHOR_PROMPT, DESCRIPTION_PROMPT, InputProvider};
use crate::properties::MetadataRecord;
use crate::random::RandomSource;
use crate::result::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Turns the compiled robot class in a build output directory into a
/// Robocode jar.
pub struct Packager<I, R> {
    input: I,
    rng: R,
    suffix: String,
    keep_properties: bool,
    temp_dir: PathBuf,
}

/// Generated properties file beside the class; removed on drop unless kept
struct PropertiesFile {
    path: PathBuf,
    keep: bool,
}

impl Drop for PropertiesFile {
    fn drop(&mut self) {
        if self.keep {
            return;
        }
        log::debug!("removing {}", self.path.display());
        if let Err(e) = fs::remove_file(&self.path) {
            log::warn!("could not remove {}: {}", self.path.display(), e);
        }
    }
}

impl<I: InputProvider, R: RandomSource> Packager<I, R> {
    pub fn new(ctx: &Context, input: I, rng: R) -> Self {
        Self {
            input,
            rng,
            suffix: ctx.suffix.clone(),
            keep_properties: ctx.keep_properties,
            temp_dir: ctx.temp_dir.clone(),
        }
    }

    /// Ask for author and description, then package.
    pub fn package(&mut self, output_dir: &Path) -> Result<PathBuf> {
        let author = self.input.ask_string(AUTHOR_PROMPT)?;
        let description = self.input.ask_string(DESCRIPTION_PROMPT)?;
        self.package_with(output_dir, &author, &description)
    }

    pub fn package_with(&mut self, output_dir: &Path, author: &str, description: &str) -> Result<PathBuf> {
        let artifact = CompiledArtifact::discover(&output_dir.join("classes"))?;
        let qualified_name = artifact.qualified_name();

        let properties = PropertiesFile {
            path: MetadataRecord::new(&qualified_name, author, description)
                .write_to(&artifact.dir, &artifact.short_name)?,
            keep: self.keep_properties,
        };
        let manifest = ManifestRecord::new(&qualified_name).write_temp(&self.temp_dir)?;

        let name = archive::archive_name(&artifact.short_name, &self.suffix, &mut self.rng);
        let jar = archive::archive_path(output_dir, &name);
        log::debug!("creating {}", jar.display());

        archive::create_jar(
            &jar,
            &JarContents {
                manifest: manifest.path(),
                properties: &properties.path,
                class: &artifact.path,
            },
        )?;

        Ok(jar)
    }
}
