use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;

/// Command-line arguments for the packaging tool
#[derive(Debug)]
pub struct Args {
    /// Enable verbose output
    pub verbose: bool,

    /// Project directory (default: current directory)
    pub path: Option<PathBuf>,

    /// Build output directory containing `classes/`
    pub output_dir: Option<PathBuf>,

    /// Alternative configuration file
    pub config: Option<PathBuf>,

    /// Robot author, skips the prompt
    pub author: Option<String>,

    /// Robot description, skips the prompt
    pub description: Option<String>,

    /// Remove the generated properties file after packaging
    pub clean: bool,
}

impl Args {
    pub fn command() -> Command {
        Command::new("robocode-package")
            .version(env!("CARGO_PKG_VERSION"))
            .about("Package a compiled Robocode robot into a jar")
            .arg(
                Arg::new("path")
                    .short('p')
                    .long("path")
                    .value_name("PATH")
                    .help("Project directory (default: current directory)"),
            )
            .arg(
                Arg::new("output-dir")
                    .short('o')
                    .long("output-dir")
                    .value_name("DIR")
                    .help("Build output directory containing classes/ (default: <project>/target)"),
            )
            .arg(
                Arg::new("config")
                    .short('c')
                    .long("config")
                    .value_name("FILE")
                    .help("Configuration file to use instead of Robocode.toml"),
            )
            .arg(
                Arg::new("author")
                    .long("author")
                    .value_name("NAME")
                    .env("ROBOCODE_AUTHOR")
                    .help("Name of author (skips the prompt)"),
            )
            .arg(
                Arg::new("description")
                    .long("description")
                    .value_name("TEXT")
                    .env("ROBOCODE_DESCRIPTION")
                    .help("Robot description (skips the prompt)"),
            )
            .arg(
                Arg::new("clean")
                    .long("clean")
                    .action(ArgAction::SetTrue)
                    .help("Remove the generated .properties file after packaging"),
            )
            .arg(
                Arg::new("verbose")
                    .short('v')
                    .long("verbose")
                    .action(ArgAction::SetTrue)
                    .help("Enable verbose output"),
            )
    }

    /// Parse command-line arguments
    pub fn parse() -> Self {
        Self::from_matches(&Self::command().get_matches())
    }

    fn from_matches(matches: &clap::ArgMatches) -> Self {
        Self {
            verbose: matches.get_flag("verbose"),
            path: matches.get_one::<String>("path").map(PathBuf::from),
            output_dir: matches.get_one::<String>("output-dir").map(PathBuf::from),
            config: matches.get_one::<String>("config").map(PathBuf::from),
            author: matches.get_one::<String>("author").cloned(),
            description: matches.get_one::<String>("description").cloned(),
            clean: matches.get_flag("clean"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::from_matches(&Args::command().get_matches_from(args))
    }

    #[test]
    fn test_command_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_flags() {
        let args = parse(&[
            "robocode-package",
            "-o",
            "out",
            "--author",
            "Alice",
            "--description",
            "test bot",
            "--clean",
            "-v",
        ]);
        assert_eq!(args.output_dir, Some(PathBuf::from("out")));
        assert_eq!(args.author.as_deref(), Some("Alice"));
        assert_eq!(args.description.as_deref(), Some("test bot"));
        assert!(args.clean);
        assert!(args.verbose);
        assert!(args.path.is_none());
        assert!(args.config.is_none());
    }
}
