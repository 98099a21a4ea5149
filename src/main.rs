mod archive;
mod args;
mod artifact;
mod config;
mod context;
mod error;
mod manifest;
mod packager;
mod prompt;
mod properties;
mod random;
mod result;
mod utils;

use args::Args;
use config::ConfigFile;
use context::Context;
use packager::Packager;
use prompt::{AUTHOR_PROMPT, ConsolePrompter, DESCRIPTION_PROMPT, PresetInput};
use random::ThreadRandom;

fn main() {
    let args = Args::parse();

    let default_level = if args.verbose { "robocode_package=debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    if let Err(e) = run(args) {
        if e.is_validation() {
            log::warn!("project layout rejected: {}", e);
        } else {
            log::error!("packaging failed: {} ({:?})", e, e);
        }
        let _ = cliclack::outro_cancel(format!("Packaging failed: {}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> result::Result<()> {
    let Args {
        verbose,
        path,
        output_dir,
        config: config_path,
        author,
        description,
        clean,
    } = args;

    let project_dir = utils::find_project_dir(path.as_deref())?;
    let config = ConfigFile::load(&project_dir, config_path.as_deref())?;

    let mut ctx = Context::new(project_dir, output_dir, &config, verbose);
    if clean {
        ctx.keep_properties = false;
    }

    log::debug!(
        "project {}, output {}",
        ctx.project_dir.display(),
        ctx.output_dir.display()
    );

    cliclack::intro("robocode-package")?;

    let input = PresetInput::new(ConsolePrompter)
        .answer(AUTHOR_PROMPT, author.or(config.robot.author))
        .answer(DESCRIPTION_PROMPT, description.or(config.robot.description));

    // Prompts are interactive, so no spinner around packaging
    let jar = Packager::new(&ctx, input, ThreadRandom).package(&ctx.output_dir)?;

    if ctx.verbose {
        cliclack::log::info(format!("Output directory: {}", ctx.output_dir.display()))?;
        if ctx.keep_properties {
            cliclack::log::remark("Generated .properties file left next to the class")?;
        }
    }
    cliclack::outro(format!("Created {}", jar.display()))?;
    Ok(())
}
